//! Function-composition chains.
//!
//! This module provides [`Chain`], an ordered, immutable sequence of unary
//! transforms (`T -> T`) that resolves into a single combined transform, and
//! the [`chain!`](crate::chain!) macro for building one from a list of
//! functions.
//!
//! # Overview
//!
//! A chain applies its transforms in reverse declaration order: the first
//! declared transform is the outermost wrapper, the last declared is applied
//! to the raw input first.
//!
//! ```text
//! chain!(f, g, h).compose(x) == f(g(h(x)))
//! ```
//!
//! This is the nesting used by decorator/middleware pipelines, where each
//! transform wraps the behavior produced by everything declared after it.
//!
//! # Persistence
//!
//! Chains are persistent values. [`Chain::next`] and [`Chain::merge`] copy
//! the backing sequence into the derived chain instead of mutating it, so a
//! chain handed out once never changes behavior:
//!
//! ```rust
//! use fnchain::chain;
//!
//! let base = chain!(|x: i32| x + 1);
//! let extended = base.next(|x: i32| x * 10);
//!
//! assert_eq!(base.compose(5), 6);        // unaffected by the derivation
//! assert_eq!(extended.compose(5), 51);   // (5 * 10) + 1
//! ```
//!
//! The stored transforms themselves are reference-counted and shared between
//! derived chains; only the sequence is copied.
//!
//! # Laws
//!
//! With `merge` as the combining operation and the empty chain as the unit,
//! chains form a monoid:
//!
//! - **Associativity**: `a.merge(&b.merge(&c)) == a.merge(&b).merge(&c)`
//! - **Left Identity**: `Chain::new().merge(&a) == a`
//! - **Right Identity**: `a.merge(&Chain::new()) == a`
//!
//! where equality means "composes identically on every input".
//!
//! # Examples
//!
//! ```rust
//! use fnchain::chain;
//!
//! let pipeline = chain!(f64::floor, f64::sqrt, f64::abs);
//!
//! // floor(sqrt(abs(-1234.0)))
//! assert_eq!(pipeline.compose(-1234.0), 35.0);
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod chain_macro;
mod transform;

pub use transform::{Chain, Transform, TransformFn, lift};

// Re-export the macro (already at crate root via #[macro_export])
pub use crate::chain;
