//! One namespace for constructing and transforming all three value types.
//!
//! Everything here is re-exported at the crate root, so `elevated::some`,
//! `elevated::right` and `elevated::attempt2` work directly.
//!
//! # Examples
//!
//! ```rust
//! use elevated::prelude::*;
//!
//! let found: Optional<i32> = some(20);
//! assert_eq!(found.map(|x| x * 2), some(40));
//!
//! let parsed: Either<std::num::ParseIntError, i32> = from_result("7".parse::<i32>());
//! assert_eq!(parsed, right(7));
//!
//! let divided = attempt2(|a: i32, b: i32| a / b, 4, 0);
//! assert_eq!(divided, failure("attempt to divide by zero".to_string()));
//! ```

mod attempt;

#[cfg(feature = "async")]
pub(crate) use attempt::panic_message;
pub use attempt::{attempt, attempt1, attempt2, attempt3, attempt4};

use crate::data::{Either, Optional, Outcome};

#[cfg(feature = "typeclass")]
use crate::typeclass::{Functor, Monad};

/// A present [`Optional`].
#[inline]
pub const fn some<T>(value: T) -> Optional<T> {
    Optional::Present(value)
}

/// An absent [`Optional`].
#[inline]
pub const fn none<T>() -> Optional<T> {
    Optional::Absent
}

/// A `Left` [`Either`].
#[inline]
pub const fn left<L, R>(value: L) -> Either<L, R> {
    Either::Left(value)
}

/// A `Right` [`Either`].
#[inline]
pub const fn right<L, R>(value: R) -> Either<L, R> {
    Either::Right(value)
}

/// A successful [`Outcome`].
#[inline]
pub const fn success<F, S>(value: S) -> Outcome<F, S> {
    Outcome::Success(value)
}

/// A failed [`Outcome`].
#[inline]
pub const fn failure<F, S>(error: F) -> Outcome<F, S> {
    Outcome::Failure(error)
}

/// Converts a `Result` into an [`Either`]: `Ok` goes right, `Err` goes left.
#[inline]
pub fn from_result<L, R>(result: Result<R, L>) -> Either<L, R> {
    Either::from_result(result)
}

/// Maps over the main path of any [`Functor`].
///
/// For `Either` that is the right side, for `Outcome` the success side.
///
/// The `Functor` impls for `Either` and `Outcome` require the left or
/// failure type to be `Clone`, so values such as
/// `Either<std::io::Error, T>` cannot go through this function. Use the
/// inherent [`Either::map_right`] or [`Outcome::map_success`] for those.
///
/// # Examples
///
/// ```rust
/// use elevated::{Outcome, failure, map, success};
///
/// let ok: Outcome<i32, i32> = success(4);
/// assert_eq!(map(ok, |x| x + 2), success(6));
///
/// let failed: Outcome<i32, i32> = failure(4);
/// assert_eq!(map(failed, |x| x + 2), failure(4));
/// ```
#[cfg(feature = "typeclass")]
#[inline]
pub fn map<M, B, F>(value: M, function: F) -> M::WithType<B>
where
    M: Functor,
    F: FnOnce(M::Inner) -> B,
{
    value.fmap(function)
}

/// Chains over the main path of any [`Monad`].
///
/// Like [`map`], this needs a `Clone` left or failure type for `Either` and
/// `Outcome`. [`Either::bind_right`] and [`Outcome::bind_success`] have no
/// such bound.
///
/// # Examples
///
/// ```rust
/// use elevated::{Optional, bind, none, some};
///
/// let calls = std::cell::Cell::new(0);
/// let absent: Optional<i32> = none();
/// let result = bind(absent, |x| {
///     calls.set(calls.get() + 1);
///     some(x)
/// });
/// assert_eq!(result, none());
/// assert_eq!(calls.get(), 0);
/// ```
#[cfg(feature = "typeclass")]
#[inline]
pub fn bind<M, B, F>(value: M, function: F) -> M::WithType<B>
where
    M: Monad,
    F: FnOnce(M::Inner) -> M::WithType<B>,
{
    value.flat_map(function)
}
