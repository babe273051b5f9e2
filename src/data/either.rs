//! Either type - a value that is exactly one of two alternatives.
//!
//! `Either<L, R>` is `Left(L)` or `Right(R)`. By convention `Left` carries
//! the alternate or error path and `Right` the main path, but every
//! combinator comes in a `_left` and a `_right` flavour so neither side is
//! privileged at the value level.
//!
//! # Examples
//!
//! ```rust
//! use elevated::Either;
//!
//! let found: Either<String, i32> = Either::right(3);
//! let doubled = found.map_right(|x| x * 2);
//! assert_eq!(doubled, Either::Right(6));
//!
//! let missing: Either<&str, i32> = Either::left("hello");
//! let shown = missing.match_with(|s| s.to_uppercase(), |_| "NOT FOUND".to_string());
//! assert_eq!(shown, "HELLO");
//! ```

use crate::data::{Optional, Outcome};
use crate::error::ConstructionError;

/// A value that can be one of two types.
///
/// Exactly one side is active at any time; the other side holds nothing.
///
/// # Type Parameters
///
/// * `L` - The type of the left value
/// * `R` - The type of the right value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left variant, conventionally the failure or alternate path.
    Left(L),
    /// The right variant, conventionally the success or main path.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a `Left` value.
    #[inline]
    pub const fn left(value: L) -> Self {
        Self::Left(value)
    }

    /// Creates a `Right` value.
    #[inline]
    pub const fn right(value: R) -> Self {
        Self::Right(value)
    }

    /// Creates a `Left` value from a nullable source.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError`] when `value` is `None`.
    #[inline]
    pub fn try_left(value: Option<L>) -> Result<Self, ConstructionError> {
        value.map(Self::Left).ok_or(ConstructionError::new("left"))
    }

    /// Creates a `Right` value from a nullable source.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError`] when `value` is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use elevated::Either;
    ///
    /// let right = Either::<String, i32>::try_right(Some(1));
    /// assert_eq!(right, Ok(Either::Right(1)));
    ///
    /// let error = Either::<String, i32>::try_right(None).unwrap_err();
    /// assert_eq!(error.constructor(), "right");
    /// ```
    #[inline]
    pub fn try_right(value: Option<R>) -> Result<Self, ConstructionError> {
        value.map(Self::Right).ok_or(ConstructionError::new("right"))
    }

    /// Converts a `Result`: `Ok(v)` becomes `Right(v)`, `Err(e)` becomes `Left(e)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use elevated::Either;
    ///
    /// let parsed = Either::from_result("42".parse::<i32>());
    /// assert_eq!(parsed, Either::Right(42));
    ///
    /// let failed: Either<&str, i32> = Either::from_result(Err("bad input"));
    /// assert_eq!(failed, Either::Left("bad input"));
    /// ```
    #[inline]
    pub fn from_result(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Reference Extraction (Non-consuming)
    // =========================================================================

    /// Returns a reference to the left value, or `None` when `Right` is active.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use elevated::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.left_ref(), Some(&42));
    /// assert_eq!(left.right_ref(), None);
    /// ```
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value, or `None` when `Left` is active.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the left value if present.
    ///
    /// If this is `Left(l)`, returns `Left(function(l))`.
    /// If this is `Right(r)`, returns `Right(r)` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use elevated::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.map_left(|x| x * 2), Either::Left(84));
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.map_left(|x: i32| x * 2), Either::Right("hello".to_string()));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies a function to the right value if present.
    ///
    /// If this is `Right(r)`, returns `Right(function(r))`.
    /// If this is `Left(l)`, returns `Left(l)` unchanged.
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Same as [`map_left`](Self::map_left).
    #[inline]
    pub fn apply_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        self.map_left(function)
    }

    /// Same as [`map_right`](Self::map_right).
    #[inline]
    pub fn apply_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        self.map_right(function)
    }

    // =========================================================================
    // Chaining Operations
    // =========================================================================

    /// Chains a computation on the left value.
    ///
    /// A `Right` value passes through untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use elevated::Either;
    ///
    /// let recovered =
    ///     Either::<&str, i32>::left("err").bind_left(|_| Either::<&str, i32>::right(5));
    /// assert_eq!(recovered, Either::Right(5));
    /// ```
    #[inline]
    pub fn bind_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> Either<T, R>,
    {
        match self {
            Self::Left(value) => function(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Chains a computation on the right value.
    ///
    /// A `Left` value passes through untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use elevated::Either;
    ///
    /// let checked = |x: i32| if x > 0 { Either::Right(x) } else { Either::Left("not positive") };
    /// assert_eq!(Either::right(3).bind_right(checked), Either::Right(3));
    /// assert_eq!(Either::right(-3).bind_right(checked), Either::Left("not positive"));
    /// ```
    #[inline]
    pub fn bind_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Eliminates the Either by calling exactly one of the handlers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use elevated::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.match_with(|x| x.to_string(), |s| s), "42");
    /// ```
    #[inline]
    pub fn match_with<T, F, G>(self, on_left: F, on_right: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => on_left(value),
            Self::Right(value) => on_right(value),
        }
    }

    /// Swaps the Left and Right variants.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Keeps the right value, discarding a left one.
    #[inline]
    pub fn to_option(self) -> Optional<R> {
        match self {
            Self::Left(_) => Optional::Absent,
            Self::Right(value) => Optional::Present(value),
        }
    }

    /// Converts to an `Outcome`: `Right` is a success, `Left` a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use elevated::{Either, Outcome};
    ///
    /// let left: Either<&str, i32> = Either::left("e");
    /// assert_eq!(left.to_outcome(), Outcome::Failure("e"));
    /// ```
    #[inline]
    pub fn to_outcome(self) -> Outcome<L, R> {
        match self {
            Self::Left(value) => Outcome::Failure(value),
            Self::Right(value) => Outcome::Success(value),
        }
    }

    /// Converts into a `Result`: `Right(r)` is `Ok(r)`, `Left(l)` is `Err(l)`.
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Self::Left(value) => Err(value),
            Self::Right(value) => Ok(value),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        Self::from_result(result)
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        either.into_result()
    }
}
