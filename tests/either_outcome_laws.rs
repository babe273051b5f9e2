//! Property-based tests for the two-sided types.
//!
//! - Exclusivity: exactly one discriminant holds and the inactive side reads as empty
//! - Side-specific mapping leaves the other side untouched
//! - `bind_*` obeys left identity and passes the other side through
//! - `apply_*` agrees with `map_*`

use elevated::{Either, Outcome};
use proptest::prelude::*;

fn either_strategy() -> impl Strategy<Value = Either<String, i32>> {
    prop_oneof![
        "[a-z]{1,10}".prop_map(Either::Left),
        any::<i32>().prop_map(Either::Right),
    ]
}

fn outcome_strategy() -> impl Strategy<Value = Outcome<String, i32>> {
    prop_oneof![
        "[a-z]{1,10}".prop_map(Outcome::Failure),
        any::<i32>().prop_map(Outcome::Success),
    ]
}

fn non_negative(value: i32) -> Either<String, i32> {
    if value >= 0 {
        Either::right(value)
    } else {
        Either::left(format!("{value} is negative"))
    }
}

fn checked_double(value: i32) -> Outcome<String, i32> {
    value
        .checked_mul(2)
        .map_or_else(|| Outcome::failure("overflow".to_string()), Outcome::success)
}

proptest! {
    #[test]
    fn prop_either_exclusivity(value in either_strategy()) {
        prop_assert_ne!(value.is_left(), value.is_right());
        prop_assert_eq!(value.left_ref().is_some(), value.is_left());
        prop_assert_eq!(value.right_ref().is_some(), value.is_right());
    }

    #[test]
    fn prop_outcome_exclusivity(value in outcome_strategy()) {
        prop_assert_ne!(value.is_success(), value.is_failure());
        prop_assert_eq!(value.failure_ref().is_some(), value.is_failure());
        prop_assert_eq!(value.success_ref().is_some(), value.is_success());
    }

    #[test]
    fn prop_either_map_right_preserves_left(value in either_strategy()) {
        let mapped = value.clone().map_right(|x| x.wrapping_add(1));
        prop_assert_eq!(mapped.left_ref(), value.left_ref());
        prop_assert_eq!(value.clone().map_right(|x| x), value);
    }

    #[test]
    fn prop_either_map_left_preserves_right(value in either_strategy()) {
        let mapped = value.clone().map_left(|s| s.len());
        prop_assert_eq!(mapped.right_ref(), value.right_ref());
    }

    #[test]
    fn prop_either_apply_agrees_with_map(value in either_strategy()) {
        prop_assert_eq!(
            value.clone().apply_right(|x| x.wrapping_mul(3)),
            value.clone().map_right(|x| x.wrapping_mul(3))
        );
        prop_assert_eq!(
            value.clone().apply_left(|s| s.to_uppercase()),
            value.map_left(|s| s.to_uppercase())
        );
    }

    #[test]
    fn prop_either_bind_right_left_identity(value: i32) {
        prop_assert_eq!(
            Either::<String, i32>::right(value).bind_right(non_negative),
            non_negative(value)
        );
    }

    #[test]
    fn prop_either_bind_right_associativity(value in either_strategy()) {
        let shrink = |x: i32| Either::<String, i32>::right(x / 2);
        prop_assert_eq!(
            value.clone().bind_right(non_negative).bind_right(shrink),
            value.bind_right(|x| non_negative(x).bind_right(shrink))
        );
    }

    #[test]
    fn prop_either_bind_left_passes_right_through(value: i32) {
        let right: Either<String, i32> = Either::right(value);
        prop_assert_eq!(right.bind_left(|_| Either::<String, i32>::right(0)), Either::Right(value));
    }

    #[test]
    fn prop_outcome_map_success_preserves_failure(value in outcome_strategy()) {
        let mapped = value.clone().map_success(|x| x.wrapping_add(2));
        prop_assert_eq!(mapped.failure_ref(), value.failure_ref());
    }

    #[test]
    fn prop_outcome_apply_agrees_with_map(value in outcome_strategy()) {
        prop_assert_eq!(
            value.clone().apply_success(|x| x.wrapping_add(2)),
            value.clone().map_success(|x| x.wrapping_add(2))
        );
        prop_assert_eq!(
            value.clone().apply_failure(|s| s.len()),
            value.map_failure(|s| s.len())
        );
    }

    #[test]
    fn prop_outcome_bind_success_left_identity(value: i32) {
        prop_assert_eq!(
            Outcome::<String, i32>::success(value).bind_success(checked_double),
            checked_double(value)
        );
    }

    #[test]
    fn prop_outcome_bind_failure_passes_success_through(value: i32) {
        let success: Outcome<String, i32> = Outcome::success(value);
        prop_assert_eq!(
            success.bind_failure(|_| Outcome::<String, i32>::success(0)),
            Outcome::Success(value)
        );
    }

    #[test]
    fn prop_match_with_follows_active_side(value in either_strategy()) {
        let side = value.clone().match_with(|_| "left", |_| "right");
        prop_assert_eq!(side == "left", value.is_left());
    }
}
