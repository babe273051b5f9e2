//! Functor type class - mapping over container values.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use elevated::typeclass::Functor;
//! use elevated::{Either, Optional};
//!
//! let shown: Optional<String> = Optional::some(5).fmap(|n| n.to_string());
//! assert_eq!(shown, Optional::some("5".to_string()));
//!
//! // Either is right-biased
//! let left: Either<&str, i32> = Either::left("e");
//! assert_eq!(left.fmap(|n| n + 1), Either::Left("e"));
//! ```

use super::higher::TypeConstructor;
use crate::data::{Either, Optional, Outcome};

/// A type class for types that can have a function mapped over their contents.
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use elevated::typeclass::Functor;
    /// use elevated::Optional;
    ///
    /// let name = Optional::some("hello".to_string());
    /// assert_eq!(name.fmap_ref(|s| s.len()), Optional::some(5));
    /// // name is still available here
    /// assert!(name.is_some());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, keeping its shape.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.fmap(|_| ())
    }
}

impl<A> Functor for Optional<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Optional<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

impl<L: Clone, R> Functor for Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        self.map_right(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Either<L, B>
    where
        F: FnOnce(&R) -> B,
    {
        match self {
            Self::Left(value) => Either::Left(value.clone()),
            Self::Right(value) => Either::Right(function(value)),
        }
    }
}

impl<E: Clone, S> Functor for Outcome<E, S> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Outcome<E, B>
    where
        F: FnOnce(S) -> B,
    {
        self.map_success(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Outcome<E, B>
    where
        F: FnOnce(&S) -> B,
    {
        match self {
            Self::Failure(error) => Outcome::Failure(error.clone()),
            Self::Success(value) => Outcome::Success(function(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn optional_fmap_some() {
        assert_eq!(Optional::some(5).fmap(|x| x * 2), Optional::some(10));
    }

    #[rstest]
    fn optional_fmap_none() {
        assert_eq!(Optional::<i32>::none().fmap(|x| x * 2), Optional::none());
    }

    #[rstest]
    fn optional_replace_and_void() {
        assert_eq!(Optional::some(1).replace("x"), Optional::some("x"));
        assert_eq!(Optional::some(1).void(), Optional::some(()));
        assert_eq!(Optional::<i32>::none().void(), Optional::none());
    }

    #[rstest]
    fn either_fmap_ref_clones_left() {
        let left: Either<String, i32> = Either::left("e".to_string());
        assert_eq!(left.fmap_ref(|x| x + 1), Either::Left("e".to_string()));
        assert!(left.is_left());
    }

    #[rstest]
    fn outcome_fmap_success() {
        let success: Outcome<String, i32> = Outcome::success(4);
        assert_eq!(success.fmap(|x| x + 2), Outcome::Success(6));
    }

    #[rstest]
    #[case(Optional::some(3))]
    #[case(Optional::none())]
    fn optional_identity_law(#[case] value: Optional<i32>) {
        assert_eq!(value.fmap(|x| x), value);
    }

    #[rstest]
    #[case(Outcome::Success(3))]
    #[case(Outcome::Failure("e"))]
    fn outcome_composition_law(#[case] value: Outcome<&'static str, i32>) {
        let function1 = |x: i32| x + 1;
        let function2 = |x: i32| x * 2;
        assert_eq!(
            value.fmap(function1).fmap(function2),
            value.fmap(|x| function2(function1(x)))
        );
    }
}
