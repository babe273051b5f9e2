//! Monad type class - sequencing computations with dependency.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! m.flat_map(pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use elevated::typeclass::Monad;
//! use elevated::Optional;
//!
//! let half = |n: i32| if n % 2 == 0 { Optional::some(n / 2) } else { Optional::none() };
//! assert_eq!(Optional::some(8).flat_map(half).flat_map(half), Optional::some(2));
//! assert_eq!(Optional::some(6).flat_map(half).flat_map(half), Optional::none());
//! ```

use super::applicative::Applicative;
use crate::data::{Either, Optional, Outcome};

/// A type class for applicatives that can chain dependent computations.
pub trait Monad: Applicative {
    /// Applies a function returning a new monad and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first result.
    ///
    /// If `self` is on its inactive side, that side propagates and `next`
    /// is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use elevated::typeclass::Monad;
    /// use elevated::Optional;
    ///
    /// assert_eq!(Optional::some(5).then(Optional::some("hello")), Optional::some("hello"));
    /// assert_eq!(Optional::<i32>::none().then(Optional::some("hello")), Optional::none());
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Optional<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> Optional<B>,
    {
        self.bind(function)
    }
}

impl<L: Clone, R> Monad for Either<L, R> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> Either<L, B>,
    {
        self.bind_right(function)
    }
}

impl<E: Clone, S> Monad for Outcome<E, S> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Outcome<E, B>
    where
        F: FnOnce(S) -> Outcome<E, B>,
    {
        self.bind_success(function)
    }
}
