//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Optional<_>`
//! directly. [`TypeConstructor`] exposes the applied type (`Inner`) and the
//! same constructor re-applied to another type (`WithType<B>`), which is
//! enough to state `Functor` and `Monad` generically.
//!
//! The two-sided types are biased towards their main path: `Either<L, _>`
//! over its right side and `Outcome<F, _>` over its success side.
//!
//! # Example
//!
//! ```rust
//! use elevated::typeclass::TypeConstructor;
//! use elevated::Optional;
//!
//! fn absent_like<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let absent: Optional<String> = absent_like(Optional::some(42));
//! assert_eq!(absent, Optional::none());
//! ```

use crate::data::{Either, Optional, Outcome};

/// A trait representing a type constructor.
///
/// # Laws
///
/// For any `F: TypeConstructor`, `<F as TypeConstructor>::WithType<F::Inner>`
/// is `F` itself.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Optional<A> {
    type Inner = A;
    type WithType<B> = Optional<B>;
}

impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

impl<F, S> TypeConstructor for Outcome<F, S> {
    type Inner = S;
    type WithType<B> = Outcome<F, B>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Optional<i32>>();
    }

    #[test]
    fn either_with_type_preserves_left_type() {
        fn assert_either_with_type<L, R, B>()
        where
            Either<L, R>: TypeConstructor<Inner = R, WithType<B> = Either<L, B>>,
        {
        }

        assert_either_with_type::<String, i32, bool>();
        assert_either_with_type::<(), String, i32>();
    }

    #[test]
    fn outcome_with_type_preserves_failure_type() {
        fn assert_outcome_with_type<F, S, B>()
        where
            Outcome<F, S>: TypeConstructor<Inner = S, WithType<B> = Outcome<F, B>>,
        {
        }

        assert_outcome_with_type::<String, i32, char>();
    }

    #[test]
    fn chained_with_type_transformations() {
        type Step1 = <Optional<i32> as TypeConstructor>::WithType<String>;
        type Step2 = <Step1 as TypeConstructor>::WithType<bool>;

        fn assert_is_bool_inner<T: TypeConstructor<Inner = bool>>() {}
        assert_is_bool_inner::<Step2>();
    }
}
