//! # fnchain
//!
//! Generic function-composition chains for building middleware-style
//! transform pipelines.
//!
//! ## Overview
//!
//! A [`Chain<T>`](chain::Chain) is an ordered, immutable sequence of unary
//! transforms (`T -> T`). Resolving the chain with
//! [`compose`](chain::Chain::compose) nests the transforms in reverse
//! declaration order, turning
//!
//! ```text
//! f(g(h(x)))
//! ```
//!
//! into
//!
//! ```text
//! chain!(f, g, h).compose(x)
//! ```
//!
//! which is the classic decorator/middleware wrapping pattern: the first
//! declared transform is the outermost wrapper, the last declared is applied
//! to the raw input first.
//!
//! Chains are persistent values: [`next`](chain::Chain::next) and
//! [`merge`](chain::Chain::merge) return new chains and never modify their
//! sources, so a chain can be extended in several directions without the
//! derived pipelines interfering with each other.
//!
//! ## Feature Flags
//!
//! - `arc`: store transforms behind `Arc` with `Send + Sync` bounds instead
//!   of `Rc`, making chains shareable across threads.
//!
//! ## Example
//!
//! ```rust
//! use fnchain::chain;
//!
//! let pipeline = chain!(
//!     |x: i32| x + 1, // outermost
//!     |x: i32| x * 2, // innermost
//! );
//!
//! // (3 * 2) + 1
//! assert_eq!(pipeline.compose(3), 7);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use fnchain::prelude::*;
/// ```
pub mod prelude {
    pub use crate::chain::*;
    pub use crate::combinators::*;
}

pub mod chain;

pub mod combinators;
