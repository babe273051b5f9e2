//! Conversions between Optional, Either and Outcome.
//!
//! Two-sided to one-sided conversions drop the non-payload side; one-sided
//! to two-sided conversions fill the inactive side with `NoValue`.

use elevated::{Either, NoValue, Optional, Outcome};
use rstest::rstest;

#[rstest]
#[case(Optional::some(5), Either::Right(5))]
#[case(Optional::none(), Either::Left(NoValue))]
fn optional_to_either(#[case] input: Optional<i32>, #[case] expected: Either<NoValue, i32>) {
    assert_eq!(input.to_either(), expected);
}

#[rstest]
#[case(Optional::some(5), Outcome::Success(5))]
#[case(Optional::none(), Outcome::Failure(NoValue))]
fn optional_to_outcome(#[case] input: Optional<i32>, #[case] expected: Outcome<NoValue, i32>) {
    assert_eq!(input.to_outcome(), expected);
}

#[rstest]
#[case(Either::Right(3), Optional::some(3))]
#[case(Either::Left("e"), Optional::none())]
fn either_to_option(#[case] input: Either<&'static str, i32>, #[case] expected: Optional<i32>) {
    assert_eq!(input.to_option(), expected);
}

#[rstest]
#[case(Either::Right(3), Outcome::Success(3))]
#[case(Either::Left("e"), Outcome::Failure("e"))]
fn either_to_outcome(
    #[case] input: Either<&'static str, i32>,
    #[case] expected: Outcome<&'static str, i32>,
) {
    assert_eq!(input.to_outcome(), expected);
}

#[rstest]
#[case(Outcome::Success(9), Optional::some(9))]
#[case(Outcome::Failure("e"), Optional::none())]
fn outcome_to_option(#[case] input: Outcome<&'static str, i32>, #[case] expected: Optional<i32>) {
    assert_eq!(input.to_option(), expected);
}

#[rstest]
#[case(Outcome::Success(9), Either::Right(9))]
#[case(Outcome::Failure("e"), Either::Left("e"))]
fn outcome_to_either(
    #[case] input: Outcome<&'static str, i32>,
    #[case] expected: Either<&'static str, i32>,
) {
    assert_eq!(input.to_either(), expected);
}

#[rstest]
#[case(Either::Right(1))]
#[case(Either::Left("e"))]
fn either_outcome_roundtrip_is_lossless(#[case] input: Either<&'static str, i32>) {
    assert_eq!(input.to_outcome().to_either(), input);
}

#[rstest]
fn absent_survives_a_trip_through_both_two_sided_types() {
    let absent: Optional<String> = Optional::none();
    assert_eq!(absent.to_either().to_outcome().to_option(), Optional::none());
}

#[rstest]
#[case(Ok(1), Either::Right(1))]
#[case(Err("tag"), Either::Left("tag"))]
fn from_result_follows_the_tag(
    #[case] input: Result<i32, &'static str>,
    #[case] expected: Either<&'static str, i32>,
) {
    assert_eq!(Either::from_result(input), expected);
    assert_eq!(elevated::from_result(input), expected);
}

#[rstest]
fn no_value_is_shown_as_text() {
    let failure = Optional::<i32>::none().to_outcome();
    let shown = failure.match_with(|missing| missing.to_string(), |x| x.to_string());
    assert_eq!(shown, "no value");
}
