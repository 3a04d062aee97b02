//! Property-based tests for chain composition laws.
//!
//! Verifies, over generated chains and inputs:
//!
//! ## Resolution
//! - **Reverse-order fold**: composing a chain equals folding the input
//!   through the declared transforms from the last to the first
//! - **Empty chain identity**: `chain!().compose(x) == x`
//!
//! ## Monoid laws under merge
//! - **Associativity**: `a.merge(&b.merge(&c)) == a.merge(&b).merge(&c)`
//! - **Left Identity**: `Chain::new().merge(&a) == a`
//! - **Right Identity**: `a.merge(&Chain::new()) == a`
//!
//! ## Derivation equivalences
//! - `next` equals merging with a single-element chain
//! - `merge` equals chaining the concatenated declaration sequences
//! - Deriving never changes the behavior of a source chain

use fnchain::chain::{Chain, Transform, lift};
use proptest::prelude::*;

// =============================================================================
// Model: a chain of simple non-commuting integer transforms
// =============================================================================

/// A transform small enough to model directly, chosen so that reordering
/// elements changes the result (addition and multiplication do not commute).
#[derive(Clone, Debug)]
enum Op {
    Add(i32),
    Mul(i32),
    Xor(i32),
}

impl Op {
    fn apply(&self, input: i32) -> i32 {
        match self {
            Self::Add(operand) => input.wrapping_add(*operand),
            Self::Mul(operand) => input.wrapping_mul(*operand),
            Self::Xor(operand) => input ^ operand,
        }
    }

    fn lift(&self) -> Transform<i32> {
        let op = self.clone();
        lift(move |input| op.apply(input))
    }
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<i32>().prop_map(Op::Add),
        any::<i32>().prop_map(Op::Mul),
        any::<i32>().prop_map(Op::Xor),
    ]
}

/// Generates a declaration sequence of up to `max_size` transforms.
fn ops_strategy(max_size: usize) -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(op_strategy(), 0..max_size)
}

fn chain_of(ops: &[Op]) -> Chain<i32> {
    ops.iter().map(Op::lift).collect()
}

/// The reference semantics: apply the declared sequence from last to first.
fn nested_apply(ops: &[Op], input: i32) -> i32 {
    ops.iter().rev().fold(input, |value, op| op.apply(value))
}

// =============================================================================
// Resolution properties
// =============================================================================

proptest! {
    /// compose equals the reverse-declaration-order fold.
    #[test]
    fn prop_compose_matches_reverse_fold(ops in ops_strategy(8), x in any::<i32>()) {
        prop_assert_eq!(chain_of(&ops).compose(x), nested_apply(&ops, x));
    }

    /// The empty chain is the identity function.
    #[test]
    fn prop_empty_chain_is_identity(x in any::<i32>()) {
        let chain: Chain<i32> = Chain::new();
        prop_assert_eq!(chain.compose(x), x);
    }

    /// Resolution is repeatable: pure transforms give the same result on
    /// every call.
    #[test]
    fn prop_compose_is_repeatable(ops in ops_strategy(8), x in any::<i32>()) {
        let chain = chain_of(&ops);
        prop_assert_eq!(chain.compose(x), chain.compose(x));
    }
}

// =============================================================================
// Monoid laws under merge
// =============================================================================

proptest! {
    /// Associativity: grouping of merges does not affect resolution.
    #[test]
    fn prop_merge_associativity(
        a in ops_strategy(5),
        b in ops_strategy(5),
        c in ops_strategy(5),
        x in any::<i32>(),
    ) {
        let (a, b, c) = (chain_of(&a), chain_of(&b), chain_of(&c));

        let left_grouped = a.merge(&b).merge(&c);
        let right_grouped = a.merge(&b.merge(&c));

        prop_assert_eq!(left_grouped.compose(x), right_grouped.compose(x));
    }

    /// Left identity: merging the empty chain in front changes nothing.
    #[test]
    fn prop_merge_left_identity(ops in ops_strategy(8), x in any::<i32>()) {
        let chain = chain_of(&ops);
        let empty: Chain<i32> = Chain::new();

        prop_assert_eq!(empty.merge(&chain).compose(x), chain.compose(x));
    }

    /// Right identity: merging the empty chain at the back changes nothing.
    #[test]
    fn prop_merge_right_identity(ops in ops_strategy(8), x in any::<i32>()) {
        let chain = chain_of(&ops);
        let empty: Chain<i32> = Chain::new();

        prop_assert_eq!(chain.merge(&empty).compose(x), chain.compose(x));
    }
}

// =============================================================================
// Derivation equivalences and persistence
// =============================================================================

proptest! {
    /// Appending with next equals merging with a single-element chain.
    #[test]
    fn prop_next_equals_merge_with_single(
        ops in ops_strategy(8),
        appended in op_strategy(),
        x in any::<i32>(),
    ) {
        let base = chain_of(&ops);

        let via_next = {
            let op = appended.clone();
            base.next(move |input| op.apply(input))
        };
        let via_merge = base.merge(&chain_of(std::slice::from_ref(&appended)));

        prop_assert_eq!(via_next.compose(x), via_merge.compose(x));
    }

    /// Merging two chains equals building one chain from the concatenated
    /// declaration sequence.
    #[test]
    fn prop_merge_matches_concatenation(
        a in ops_strategy(6),
        b in ops_strategy(6),
        x in any::<i32>(),
    ) {
        let merged = chain_of(&a).merge(&chain_of(&b));

        let concatenated: Vec<Op> = a.iter().chain(b.iter()).cloned().collect();
        let direct = chain_of(&concatenated);

        prop_assert_eq!(merged.compose(x), direct.compose(x));
    }

    /// Persistence: deriving from a chain never changes what the source
    /// resolves to.
    #[test]
    fn prop_derivation_preserves_sources(
        a in ops_strategy(6),
        b in ops_strategy(6),
        appended in op_strategy(),
        x in any::<i32>(),
    ) {
        let first = chain_of(&a);
        let second = chain_of(&b);

        let before_first = first.compose(x);
        let before_second = second.compose(x);

        let merged = first.merge(&second);
        let extended = first.next(move |input| appended.apply(input));

        // Use the derivations so they are observably alive.
        let _ = merged.compose(x);
        let _ = extended.compose(x);

        prop_assert_eq!(first.compose(x), before_first);
        prop_assert_eq!(second.compose(x), before_second);
        prop_assert_eq!(first.len(), a.len());
        prop_assert_eq!(second.len(), b.len());
    }
}
