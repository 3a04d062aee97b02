//! The `chain!` macro for variadic chain construction.
//!
//! This module provides the [`chain!`](crate::chain!) macro which builds a
//! [`Chain`](crate::chain::Chain) from a list of transforms, declared in
//! nesting order.

/// Builds a [`Chain`](crate::chain::Chain) from transforms in nesting order.
///
/// `chain!(f, g, h).compose(x)` is equivalent to `f(g(h(x)))`: the first
/// argument is the outermost wrapper, the last argument is applied to the
/// raw input first.
///
/// Each argument is moved into the chain; the variables it was built from
/// remain usable because transforms are ordinary values.
///
/// # Syntax
///
/// - `chain!()` - The empty chain (composes to the identity function)
/// - `chain!(f)` - Equivalent to `Chain::single(f)`
/// - `chain!(f, g)` - `f` wraps `g`
/// - `chain!(f, g, h, ...)` - Any number of transforms; trailing comma allowed
///
/// # Type Requirements
///
/// Every argument must implement `Fn(T) -> T` for the same `T` (plus
/// `Send + Sync` under the `arc` feature).
///
/// # Examples
///
/// ## Basic construction
///
/// ```
/// use fnchain::chain;
///
/// let pipeline = chain!(|x: i32| x + 1, |x: i32| x * 2);
/// assert_eq!(pipeline.compose(5), 11); // (5 * 2) + 1
/// ```
///
/// ## Function items
///
/// ```
/// use fnchain::chain;
///
/// let pipeline = chain!(f64::floor, f64::sqrt, f64::abs);
/// assert_eq!(pipeline.compose(-1234.0), 35.0);
/// ```
///
/// ## Empty chain
///
/// ```
/// use fnchain::chain;
/// use fnchain::chain::Chain;
///
/// let identity: Chain<&str> = chain!();
/// assert_eq!(identity.compose("unchanged"), "unchanged");
/// ```
#[macro_export]
macro_rules! chain {
    // No transforms: the empty chain
    () => {
        $crate::chain::Chain::new()
    };

    // One or more transforms: append each at the innermost position,
    // preserving declaration order
    ($($transform:expr),+ $(,)?) => {
        $crate::chain::Chain::new()$(.next($transform))+
    };
}
