#![cfg(feature = "serde")]
//! Serde support for the value types.
//!
//! The enums use serde's default external tagging, so the variant name is
//! the JSON key.

use elevated::{Either, NoValue, Optional, Outcome};
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case(Optional::some(4), json!({ "Present": 4 }))]
#[case(Optional::none(), json!("Absent"))]
fn optional_json_shape(#[case] value: Optional<i32>, #[case] expected: serde_json::Value) {
    assert_eq!(serde_json::to_value(value).unwrap(), expected);
}

#[rstest]
fn either_deserializes_from_tagged_json() {
    let parsed: Either<String, u32> = serde_json::from_value(json!({ "Right": 7 })).unwrap();
    assert_eq!(parsed, Either::Right(7));

    let parsed: Either<String, u32> = serde_json::from_value(json!({ "Left": "nope" })).unwrap();
    assert_eq!(parsed, Either::Left("nope".to_string()));
}

#[rstest]
fn outcome_with_no_value_sentinel() {
    let failure: Outcome<NoValue, i32> = Optional::none().to_outcome();
    let encoded = serde_json::to_string(&failure).unwrap();
    assert_eq!(encoded, r#"{"Failure":null}"#);

    let decoded: Outcome<NoValue, i32> = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, failure);
}

#[rstest]
fn unknown_variant_is_rejected() {
    let parsed = serde_json::from_value::<Outcome<String, i32>>(json!({ "Pending": 1 }));
    assert!(parsed.is_err());
}
