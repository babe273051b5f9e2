//! Construction errors and the absence sentinel.
//!
//! Payload-carrying constructors for typed inputs are infallible. The
//! `try_*` constructors accept a nullable source (`Option<T>`) and reject
//! `None` with a [`ConstructionError`], since "nothing" is what
//! [`Optional`](crate::Optional) is for.

use std::fmt;

/// Error returned when a payload-carrying constructor receives an absent value.
///
/// # Examples
///
/// ```rust
/// use elevated::{ConstructionError, Either};
///
/// let error = Either::<i32, String>::try_left(None).unwrap_err();
/// assert_eq!(error, ConstructionError::new("left"));
/// assert_eq!(
///     error.to_string(),
///     "cannot construct left from an absent value"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("cannot construct {constructor} from an absent value")]
pub struct ConstructionError {
    constructor: &'static str,
}

impl ConstructionError {
    /// Creates an error for the named constructor.
    #[must_use]
    pub const fn new(constructor: &'static str) -> Self {
        Self { constructor }
    }

    /// The name of the constructor that rejected its input.
    #[must_use]
    pub const fn constructor(&self) -> &'static str {
        self.constructor
    }
}

/// The absence sentinel.
///
/// Placed on the inactive side when an absent [`Optional`](crate::Optional)
/// is converted into one of the two-sided types.
///
/// # Examples
///
/// ```rust
/// use elevated::{Either, NoValue, Optional};
///
/// let absent: Optional<i32> = Optional::none();
/// assert_eq!(absent.to_either(), Either::Left(NoValue));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NoValue;

impl fmt::Display for NoValue {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("no value")
    }
}
