//! Outcome type - the result of an operation that either succeeded or failed.
//!
//! `Outcome<F, S>` has the same shape as [`Either`] but names its sides by
//! role: `Failure(F)` and `Success(S)`.
//!
//! # Examples
//!
//! ```rust
//! use elevated::Outcome;
//!
//! let ok: Outcome<String, i32> = Outcome::success(4);
//! assert_eq!(ok.map_success(|x| x + 2), Outcome::Success(6));
//!
//! let failed: Outcome<i32, i32> = Outcome::failure(4);
//! assert_eq!(failed.map_success(|x| x + 2), Outcome::Failure(4));
//! ```

use crate::data::{Either, Optional};
use crate::error::ConstructionError;

/// A value that is either a `Failure(F)` or a `Success(S)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<F, S> {
    /// The operation failed with this payload.
    Failure(F),
    /// The operation succeeded with this payload.
    Success(S),
}

impl<F, S> Outcome<F, S> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a success.
    #[inline]
    pub const fn success(value: S) -> Self {
        Self::Success(value)
    }

    /// Creates a failure.
    #[inline]
    pub const fn failure(error: F) -> Self {
        Self::Failure(error)
    }

    /// Creates a success from a nullable source.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError`] when `value` is `None`.
    #[inline]
    pub fn try_success(value: Option<S>) -> Result<Self, ConstructionError> {
        value
            .map(Self::Success)
            .ok_or(ConstructionError::new("success"))
    }

    /// Creates a failure from a nullable source.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError`] when `error` is `None`.
    #[inline]
    pub fn try_failure(error: Option<F>) -> Result<Self, ConstructionError> {
        error
            .map(Self::Failure)
            .ok_or(ConstructionError::new("failure"))
    }

    /// Converts a `Result`: `Ok` is a success, `Err` a failure.
    #[inline]
    pub fn from_result(result: Result<S, F>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` for a success.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for a failure.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// The success payload, or `None` for a failure.
    #[inline]
    pub const fn success_ref(&self) -> Option<&S> {
        match self {
            Self::Failure(_) => None,
            Self::Success(value) => Some(value),
        }
    }

    /// The failure payload, or `None` for a success.
    #[inline]
    pub const fn failure_ref(&self) -> Option<&F> {
        match self {
            Self::Failure(error) => Some(error),
            Self::Success(_) => None,
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Transforms a success payload; a failure passes through unchanged.
    #[inline]
    pub fn map_success<T, G>(self, function: G) -> Outcome<F, T>
    where
        G: FnOnce(S) -> T,
    {
        match self {
            Self::Failure(error) => Outcome::Failure(error),
            Self::Success(value) => Outcome::Success(function(value)),
        }
    }

    /// Transforms a failure payload; a success passes through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use elevated::Outcome;
    ///
    /// let failed: Outcome<&str, i32> = Outcome::failure("timeout");
    /// assert_eq!(failed.map_failure(str::len), Outcome::Failure(7));
    /// ```
    #[inline]
    pub fn map_failure<T, G>(self, function: G) -> Outcome<T, S>
    where
        G: FnOnce(F) -> T,
    {
        match self {
            Self::Failure(error) => Outcome::Failure(function(error)),
            Self::Success(value) => Outcome::Success(value),
        }
    }

    /// Same as [`map_success`](Self::map_success).
    #[inline]
    pub fn apply_success<T, G>(self, function: G) -> Outcome<F, T>
    where
        G: FnOnce(S) -> T,
    {
        self.map_success(function)
    }

    /// Same as [`map_failure`](Self::map_failure).
    #[inline]
    pub fn apply_failure<T, G>(self, function: G) -> Outcome<T, S>
    where
        G: FnOnce(F) -> T,
    {
        self.map_failure(function)
    }

    // =========================================================================
    // Chaining Operations
    // =========================================================================

    /// Chains a fallible computation on a success payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use elevated::Outcome;
    ///
    /// let divide = |x: i32| {
    ///     if x == 0 { Outcome::failure("zero") } else { Outcome::success(100 / x) }
    /// };
    /// assert_eq!(Outcome::success(4).bind_success(divide), Outcome::Success(25));
    /// assert_eq!(Outcome::success(0).bind_success(divide), Outcome::Failure("zero"));
    /// ```
    #[inline]
    pub fn bind_success<T, G>(self, function: G) -> Outcome<F, T>
    where
        G: FnOnce(S) -> Outcome<F, T>,
    {
        match self {
            Self::Failure(error) => Outcome::Failure(error),
            Self::Success(value) => function(value),
        }
    }

    /// Chains a recovery computation on a failure payload.
    #[inline]
    pub fn bind_failure<T, G>(self, function: G) -> Outcome<T, S>
    where
        G: FnOnce(F) -> Outcome<T, S>,
    {
        match self {
            Self::Failure(error) => function(error),
            Self::Success(value) => Outcome::Success(value),
        }
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Calls exactly one of the handlers, matching the active side.
    #[inline]
    pub fn match_with<T, H, G>(self, on_failure: H, on_success: G) -> T
    where
        H: FnOnce(F) -> T,
        G: FnOnce(S) -> T,
    {
        match self {
            Self::Failure(error) => on_failure(error),
            Self::Success(value) => on_success(value),
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Keeps the success payload, discarding a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use elevated::{Optional, Outcome};
    ///
    /// let ok: Outcome<String, i32> = Outcome::success(9);
    /// assert_eq!(ok.to_option(), Optional::some(9));
    /// ```
    #[inline]
    pub fn to_option(self) -> Optional<S> {
        match self {
            Self::Failure(_) => Optional::Absent,
            Self::Success(value) => Optional::Present(value),
        }
    }

    /// Converts to an `Either`: success goes right, failure goes left.
    #[inline]
    pub fn to_either(self) -> Either<F, S> {
        match self {
            Self::Failure(error) => Either::Left(error),
            Self::Success(value) => Either::Right(value),
        }
    }

    /// Converts into a `Result`.
    #[inline]
    pub fn into_result(self) -> Result<S, F> {
        match self {
            Self::Failure(error) => Err(error),
            Self::Success(value) => Ok(value),
        }
    }
}

impl<F, S> From<Result<S, F>> for Outcome<F, S> {
    #[inline]
    fn from(result: Result<S, F>) -> Self {
        Self::from_result(result)
    }
}

impl<F, S> From<Outcome<F, S>> for Result<S, F> {
    #[inline]
    fn from(outcome: Outcome<F, S>) -> Self {
        outcome.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Outcome::Success(4), Outcome::Success(6))]
    #[case(Outcome::Failure(4), Outcome::Failure(4))]
    fn test_map_success(#[case] input: Outcome<i32, i32>, #[case] expected: Outcome<i32, i32>) {
        assert_eq!(input.map_success(|x| x + 2), expected);
        assert_eq!(input.apply_success(|x| x + 2), expected);
    }

    #[rstest]
    fn test_exactly_one_side_is_active() {
        let success: Outcome<String, i32> = Outcome::success(1);
        assert!(success.is_success() && !success.is_failure());
        assert_eq!(success.failure_ref(), None);

        let failure: Outcome<String, i32> = Outcome::failure("e".to_string());
        assert!(failure.is_failure() && !failure.is_success());
        assert_eq!(failure.success_ref(), None);
    }

    #[rstest]
    fn test_bind_failure_recovers() {
        let failure: Outcome<&str, i32> = Outcome::failure("missing");
        let recovered = failure.bind_failure(|_| Outcome::<&str, i32>::success(0));
        assert_eq!(recovered, Outcome::Success(0));
    }

    #[rstest]
    #[case(Outcome::<&str, i32>::try_success(None), "success")]
    #[case(Outcome::<&str, i32>::try_failure(None), "failure")]
    fn test_try_constructors_reject_absent_input(
        #[case] attempt: Result<Outcome<&str, i32>, ConstructionError>,
        #[case] constructor: &str,
    ) {
        assert_eq!(attempt.unwrap_err().constructor(), constructor);
    }

    #[rstest]
    fn test_result_roundtrip() {
        let outcome: Outcome<String, i32> = Ok(3).into();
        assert_eq!(outcome, Outcome::Success(3));
        let result: Result<i32, String> = outcome.into();
        assert_eq!(result, Ok(3));
    }
}
