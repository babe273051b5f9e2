//! Bifunctor type class - mapping over two type parameters.
//!
//! `first` transforms the left/failure side and `second` the right/success
//! side. For the two-sided value types this is the trait-level view of
//! `map_left`/`map_right` and `map_failure`/`map_success`.
//!
//! # Laws
//!
//! ```text
//! bf.bimap(|x| x, |y| y) == bf                                           (identity)
//! bf.bimap(|x| f2(f1(x)), |y| g2(g1(y))) == bf.bimap(f1, g1).bimap(f2, g2) (composition)
//! bf.bimap(f, g) == bf.first(f).second(g) == bf.second(g).first(f)       (consistency)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use elevated::typeclass::Bifunctor;
//! use elevated::{Either, Outcome};
//!
//! let left: Either<i32, String> = Either::Left(42);
//! assert_eq!(left.bimap(|x| x * 2, |s: String| s.len()), Either::Left(84));
//!
//! let failure: Outcome<&str, i32> = Outcome::failure("boom");
//! assert_eq!(failure.first(str::len), Outcome::Failure(4));
//! ```

use crate::data::{Either, Outcome};

/// A type class for types with two type parameters that can have functions
/// mapped over both.
pub trait Bifunctor<A, B> {
    /// The same shape applied to new type parameters.
    type Target<C, D>;

    /// Applies one of two functions, depending on the active side.
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D;

    /// Applies a function to the first type parameter only.
    #[inline]
    fn first<C, F>(self, function: F) -> Self::Target<C, B>
    where
        F: FnOnce(A) -> C,
        Self: Sized,
    {
        self.bimap(function, |b| b)
    }

    /// Applies a function to the second type parameter only.
    #[inline]
    fn second<D, G>(self, function: G) -> Self::Target<A, D>
    where
        G: FnOnce(B) -> D,
        Self: Sized,
    {
        self.bimap(|a| a, function)
    }
}

impl<L, R> Bifunctor<L, R> for Either<L, R> {
    type Target<C, D> = Either<C, D>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Either<C, D>
    where
        F: FnOnce(L) -> C,
        G: FnOnce(R) -> D,
    {
        match self {
            Self::Left(left) => Either::Left(first_function(left)),
            Self::Right(right) => Either::Right(second_function(right)),
        }
    }
}

impl<E, S> Bifunctor<E, S> for Outcome<E, S> {
    type Target<C, D> = Outcome<C, D>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Outcome<C, D>
    where
        F: FnOnce(E) -> C,
        G: FnOnce(S) -> D,
    {
        match self {
            Self::Failure(error) => Outcome::Failure(first_function(error)),
            Self::Success(value) => Outcome::Success(second_function(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn either_second_agrees_with_map_right() {
        let right: Either<i32, String> = Either::right("hello".to_string());
        assert_eq!(right.clone().second(|s| s.len()), right.map_right(|s| s.len()));
    }

    #[rstest]
    #[case(Outcome::Success(2))]
    #[case(Outcome::Failure("bad"))]
    fn outcome_first_second_consistency(#[case] value: Outcome<&'static str, i32>) {
        let by_bimap = value.bimap(str::len, |x| x * 10);
        let by_first_second = value.first(str::len).second(|x| x * 10);
        assert_eq!(by_bimap, by_first_second);
    }
}
