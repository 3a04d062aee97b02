//! The persistent [`Chain`] type and its stored transform representation.
//!
//! A chain holds reference-counted unary transforms in declaration order and
//! resolves them innermost-last: element 0 is the outermost wrapper, element
//! n-1 is applied to the raw input first.
//!
//! Deriving operations ([`Chain::next`], [`Chain::merge`]) copy the backing
//! sequence, cloning the reference-counted pointers rather than the
//! transforms themselves, so derivation is cheap and a previously returned
//! chain never observes a change.

use std::fmt;
use std::iter::FromIterator;

use smallvec::SmallVec;

use super::ReferenceCounter;

/// A stored transform: a reference-counted `T -> T` trait object.
///
/// With the `arc` feature enabled this is an `Arc` with `Send + Sync`
/// bounds, so chains can be shared across threads; by default it is an `Rc`.
///
/// Values of this type are produced by [`lift`] and consumed by the
/// `FromIterator` implementation on [`Chain`].
#[cfg(not(feature = "arc"))]
pub type Transform<T> = ReferenceCounter<dyn Fn(T) -> T>;

/// A stored transform: a reference-counted `T -> T` trait object.
///
/// With the `arc` feature enabled this is an `Arc` with `Send + Sync`
/// bounds, so chains can be shared across threads; by default it is an `Rc`.
#[cfg(feature = "arc")]
pub type Transform<T> = ReferenceCounter<dyn Fn(T) -> T + Send + Sync>;

/// Bound alias for functions that can be stored in a [`Chain`].
///
/// Blanket-implemented for every closure or function of the right shape, so
/// it never needs to be implemented by hand. It exists so that the `Chain`
/// API keeps a single set of signatures whether or not the `arc` feature
/// (which adds `Send + Sync` requirements) is enabled.
#[cfg(not(feature = "arc"))]
pub trait TransformFn<T>: Fn(T) -> T + 'static {}

#[cfg(not(feature = "arc"))]
impl<T, F> TransformFn<T> for F where F: Fn(T) -> T + 'static {}

/// Bound alias for functions that can be stored in a [`Chain`].
///
/// Blanket-implemented for every closure or function of the right shape, so
/// it never needs to be implemented by hand. Under the `arc` feature the
/// bound additionally requires `Send + Sync`, matching the thread-safe
/// storage.
#[cfg(feature = "arc")]
pub trait TransformFn<T>: Fn(T) -> T + Send + Sync + 'static {}

#[cfg(feature = "arc")]
impl<T, F> TransformFn<T> for F where F: Fn(T) -> T + Send + Sync + 'static {}

/// Wraps a function into the reference-counted [`Transform`] representation.
///
/// Useful when collecting transforms into a container before building a
/// chain from it with `collect`:
///
/// ```rust
/// use fnchain::chain::{Chain, Transform, lift};
///
/// let transforms: Vec<Transform<i32>> = vec![
///     lift(|x: i32| x + 1),
///     lift(|x: i32| x * 2),
/// ];
///
/// let chain: Chain<i32> = transforms.iter().cloned().collect();
/// assert_eq!(chain.compose(5), 11); // (5 * 2) + 1
/// ```
#[inline]
pub fn lift<T, F>(transform: F) -> Transform<T>
where
    F: TransformFn<T>,
{
    ReferenceCounter::new(transform)
}

/// Inline capacity of the backing sequence; longer chains spill to the heap.
const INLINE_TRANSFORMS: usize = 4;

type Transforms<T> = SmallVec<[Transform<T>; INLINE_TRANSFORMS]>;

/// An ordered, immutable sequence of unary transforms over `T`.
///
/// `Chain` is a persistent value: every deriving operation returns a new
/// chain and leaves its sources untouched. Resolution with
/// [`compose`](Self::compose) applies the transforms from the last declared
/// to the first, producing the nesting `chain!(f, g, h).compose(x) ==
/// f(g(h(x)))`.
///
/// # Time Complexity
///
/// | Operation  | Complexity |
/// |------------|------------|
/// | `new`      | O(1)       |
/// | `single`   | O(1)       |
/// | `next`     | O(n)       |
/// | `merge`    | O(n + m)   |
/// | `compose`  | O(n) calls |
/// | `len`      | O(1)       |
///
/// `next` and `merge` copy the pointer sequence, not the transforms; the
/// closures themselves are shared between the source and the derived chain.
///
/// # Examples
///
/// ```rust
/// use fnchain::chain::Chain;
///
/// let chain = Chain::single(|x: i32| x + 1).next(|x: i32| x * 2);
/// assert_eq!(chain.compose(5), 11); // (5 * 2) + 1
/// ```
///
/// # Concurrency
///
/// A chain performs no synchronization of its own. Under the `arc` feature
/// it is `Send + Sync` (given the stored transforms are), and concurrent
/// calls to `compose` are safe exactly when every contained transform is
/// itself safe to invoke concurrently.
pub struct Chain<T> {
    /// Backing sequence in declaration order; index 0 is the outermost
    /// wrapper.
    transforms: Transforms<T>,
}

impl<T> Chain<T> {
    /// Creates an empty chain.
    ///
    /// An empty chain composes to the identity function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnchain::chain::Chain;
    ///
    /// let chain: Chain<i32> = Chain::new();
    /// assert_eq!(chain.compose(42), 42);
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            transforms: Transforms::new(),
        }
    }

    /// Creates a chain containing a single transform.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnchain::chain::Chain;
    ///
    /// let chain = Chain::single(|x: i32| x * 2);
    /// assert_eq!(chain.compose(21), 42);
    /// ```
    #[inline]
    #[must_use]
    pub fn single(transform: impl TransformFn<T>) -> Self {
        Self::new().next(transform)
    }

    /// Returns a new chain with `transform` appended at the innermost
    /// position.
    ///
    /// The appended transform is applied to the raw input before everything
    /// already in the chain:
    ///
    /// ```text
    /// chain!(f).next(g).compose(x) == f(g(x))
    /// ```
    ///
    /// The receiver is not modified and keeps resolving to its prior
    /// behavior.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnchain::chain;
    ///
    /// let outer = chain!(|x: i32| x + 1);
    /// let both = outer.next(|x: i32| x * 10);
    ///
    /// assert_eq!(both.compose(4), 41);  // (4 * 10) + 1
    /// assert_eq!(outer.compose(4), 5);  // receiver unchanged
    /// ```
    #[must_use]
    pub fn next(&self, transform: impl TransformFn<T>) -> Self {
        let mut transforms = self.transforms.clone();
        let lifted: Transform<T> = ReferenceCounter::new(transform);
        transforms.push(lifted);
        Self { transforms }
    }

    /// Returns a new chain holding `self`'s transforms followed by `other`'s.
    ///
    /// Equivalent to appending each of `other`'s transforms in order with
    /// [`next`](Self::next). Neither source chain is modified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnchain::chain;
    ///
    /// let first = chain!(|x: i32| x + 1);
    /// let second = chain!(|x: i32| x * 10);
    /// let merged = first.merge(&second);
    ///
    /// assert_eq!(merged.compose(4), 41); // same as chain!(add, mul)
    /// assert_eq!(first.compose(4), 5);
    /// assert_eq!(second.compose(4), 40);
    /// ```
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        let mut transforms = self.transforms.clone();
        transforms.extend(other.transforms.iter().cloned());
        Self { transforms }
    }

    /// Resolves the chain on `input`, returning the fully transformed value.
    ///
    /// Transforms are applied from the last declared to the first, so the
    /// first declared transform wraps the result of all the others:
    ///
    /// ```text
    /// chain!(f, g, h).compose(x) == f(g(h(x)))
    /// ```
    ///
    /// An empty chain returns `input` unchanged. The chain is not mutated;
    /// `compose` can be called any number of times and re-applies the full
    /// sequence each time. Panics or error-carrying values produced by a
    /// transform propagate to the caller untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnchain::chain;
    ///
    /// let pipeline = chain!(f64::floor, f64::sqrt, f64::abs);
    /// assert_eq!(pipeline.compose(-1234.0), 35.0);
    /// ```
    #[must_use]
    pub fn compose(&self, input: T) -> T {
        self.transforms
            .iter()
            .rev()
            .fold(input, |value, transform| transform(value))
    }

    /// Returns the number of transforms in the chain.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// Returns `true` if the chain contains no transforms.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }
}

// Manual impls: deriving would add unwanted `T: Clone` / `T: Default` bounds.

impl<T> Clone for Chain<T> {
    fn clone(&self) -> Self {
        Self {
            transforms: self.transforms.clone(),
        }
    }
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Chain<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Chain")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

/// Builds a chain from already-lifted transforms, in declaration order.
///
/// The source container is only read; it stays reusable afterwards and
/// later changes to it have no effect on the built chain.
impl<T> FromIterator<Transform<T>> for Chain<T> {
    fn from_iter<I>(transforms: I) -> Self
    where
        I: IntoIterator<Item = Transform<T>>,
    {
        Self {
            transforms: transforms.into_iter().collect(),
        }
    }
}
