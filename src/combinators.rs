//! Helper combinators usable as chain transforms.
//!
//! - [`identity`]: returns its argument unchanged — what an empty chain
//!   composes to, and the neutral transform for any pipeline
//! - [`constant`]: produces a function that ignores its input and always
//!   returns the same value; with matching input and output types it is a
//!   valid `T -> T` transform

/// Returns the value unchanged.
///
/// An empty [`Chain`](crate::chain::Chain) behaves exactly like this
/// function, and appending `identity` anywhere in a chain leaves the chain's
/// behavior unchanged.
///
/// # Examples
///
/// ```
/// use fnchain::combinators::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
///
/// # As a neutral chain element
///
/// ```
/// use fnchain::chain;
/// use fnchain::combinators::identity;
///
/// let double = |x: i32| x * 2;
///
/// let plain = chain!(double);
/// let padded = chain!(identity, double, identity);
///
/// assert_eq!(plain.compose(5), padded.compose(5));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its
/// input.
///
/// When the constant's type matches the ignored input type, the result is a
/// valid chain transform that discards everything produced by the inner part
/// of the pipeline.
///
/// # Examples
///
/// ```
/// use fnchain::combinators::constant;
///
/// let always_five = constant::<_, i32>(5);
/// assert_eq!(always_five(100), 5);
/// assert_eq!(always_five(-3), 5);
/// ```
///
/// # As a chain transform
///
/// ```
/// use fnchain::chain;
/// use fnchain::combinators::constant;
///
/// // The outermost transform discards the inner result
/// let pipeline = chain!(constant::<i32, i32>(0), |x: i32| x * 100);
/// assert_eq!(pipeline.compose(7), 0);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}
