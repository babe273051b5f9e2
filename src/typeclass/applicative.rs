//! Applicative type class - lifting values and combining independent computations.
//!
//! `Applicative` is where the *true* applicative apply lives: [`ap`]
//! applies a function that is itself wrapped to a wrapped value. The
//! inherent `apply`/`apply_*` methods of the value types keep their
//! map-like behavior.
//!
//! [`ap`]: Applicative::ap
//!
//! # Laws
//!
//! ```text
//! pure(id).ap(v) == v                           (identity)
//! pure(f).ap(pure(x)) == pure(f(x))             (homomorphism)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use elevated::typeclass::Applicative;
//! use elevated::Optional;
//!
//! let sum = Optional::some(3).map2(Optional::some(4), |x, y| x + y);
//! assert_eq!(sum, Optional::some(7));
//!
//! let increment: Optional<fn(i32) -> i32> = Optional::some(|x| x + 1);
//! assert_eq!(increment.ap(Optional::some(5)), Optional::some(6));
//! ```

use super::functor::Functor;
use crate::data::{Either, Optional, Outcome};

/// A type class for functors that can lift values and combine independent contexts.
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use elevated::typeclass::Applicative;
    /// use elevated::{Either, Optional};
    ///
    /// let x: Optional<i32> = <Optional<()>>::pure(42);
    /// assert_eq!(x, Optional::some(42));
    ///
    /// let y: Either<String, i32> = <Either<String, ()>>::pure(1);
    /// assert_eq!(y, Either::Right(1));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// For the two-sided types the first inactive-side payload wins.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines two applicative values into a tuple.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies the wrapped function in `self` to the wrapped value in `other`.
    fn ap<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

// =============================================================================
// Optional<A> Implementation
// =============================================================================

impl<A> Applicative for Optional<A> {
    #[inline]
    fn pure<B>(value: B) -> Optional<B> {
        Optional::Present(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Optional<B>, function: F) -> Optional<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Present(a), Optional::Present(b)) => Optional::Present(function(a, b)),
            _ => Optional::Absent,
        }
    }

    #[inline]
    fn ap<B, Output>(self, other: Optional<B>) -> Optional<Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.map2(other, |function, value| function(value))
    }
}

// =============================================================================
// Either<L, R> Implementation
// =============================================================================

impl<L: Clone, R> Applicative for Either<L, R> {
    #[inline]
    fn pure<B>(value: B) -> Either<L, B> {
        Either::Right(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Either<L, B>, function: F) -> Either<L, C>
    where
        F: FnOnce(R, B) -> C,
    {
        match (self, other) {
            (Self::Right(a), Either::Right(b)) => Either::Right(function(a, b)),
            (Self::Left(error), _) | (Self::Right(_), Either::Left(error)) => Either::Left(error),
        }
    }

    #[inline]
    fn ap<B, Output>(self, other: Either<L, B>) -> Either<L, Output>
    where
        R: FnOnce(B) -> Output,
    {
        self.map2(other, |function, value| function(value))
    }
}

// =============================================================================
// Outcome<E, S> Implementation
// =============================================================================

impl<E: Clone, S> Applicative for Outcome<E, S> {
    #[inline]
    fn pure<B>(value: B) -> Outcome<E, B> {
        Outcome::Success(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Outcome<E, B>, function: F) -> Outcome<E, C>
    where
        F: FnOnce(S, B) -> C,
    {
        match (self, other) {
            (Self::Success(a), Outcome::Success(b)) => Outcome::Success(function(a, b)),
            (Self::Failure(error), _) | (Self::Success(_), Outcome::Failure(error)) => {
                Outcome::Failure(error)
            }
        }
    }

    #[inline]
    fn ap<B, Output>(self, other: Outcome<E, B>) -> Outcome<E, Output>
    where
        S: FnOnce(B) -> Output,
    {
        self.map2(other, |function, value| function(value))
    }
}
