//! Optional type - a value that may or may not be present.
//!
//! `Optional<T>` is a tagged union of `Present(T)` and `Absent`. Because
//! absence is its own variant rather than a reserved payload, a present
//! value can never be mistaken for "nothing".
//!
//! # Examples
//!
//! ```rust
//! use elevated::Optional;
//!
//! let doubled = Optional::some(20).map(|x| x * 2);
//! assert_eq!(doubled, Optional::some(40));
//!
//! let label = doubled.match_with(|x| format!("got {x}"), || "nothing".to_string());
//! assert_eq!(label, "got 40");
//! ```

use crate::data::{Either, Outcome};
use crate::error::{ConstructionError, NoValue};

/// A value that is either present or absent.
///
/// # Examples
///
/// ```rust
/// use elevated::Optional;
///
/// let present = Optional::some(4);
/// assert!(present.is_some());
///
/// let absent: Optional<i32> = Optional::none();
/// assert!(absent.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Optional<T> {
    /// A present payload.
    Present(T),
    /// No payload.
    Absent,
}

impl<T> Optional<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a present value.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Present(value)
    }

    /// The absent value.
    #[inline]
    pub const fn none() -> Self {
        Self::Absent
    }

    /// Wraps a value coming from a nullable source.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError`] when `value` is `None`: a present
    /// `Optional` cannot be built from nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use elevated::Optional;
    ///
    /// assert_eq!(Optional::try_some(Some(1)), Ok(Optional::some(1)));
    /// assert!(Optional::<i32>::try_some(None).is_err());
    /// ```
    #[inline]
    pub fn try_some(value: Option<T>) -> Result<Self, ConstructionError> {
        value
            .map(Self::Present)
            .ok_or(ConstructionError::new("some"))
    }

    /// Lossless bridge from `Option`: `Some(v)` is present, `None` is absent.
    #[inline]
    pub fn from_option(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Self::Present)
    }

    /// Lossless bridge back to `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Borrows the payload without consuming the optional.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use elevated::Optional;
    ///
    /// let name = Optional::some("ada".to_string());
    /// assert_eq!(name.as_ref().map(|s| s.len()), Optional::some(3));
    /// assert!(name.is_some());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Absent => Optional::Absent,
        }
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Applies `function` to a present value.
    ///
    /// An absent optional is returned unchanged and `function` is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use elevated::Optional;
    ///
    /// assert_eq!(Optional::some(20).map(|x| x * 2), Optional::some(40));
    /// assert_eq!(Optional::<i32>::none().map(|x| x * 2), Optional::none());
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Optional::Present(function(value)),
            Self::Absent => Optional::Absent,
        }
    }

    /// Same as [`map`](Self::map).
    ///
    /// Kept for vocabulary parity with the two-sided types. For applying a
    /// wrapped function to a wrapped value see
    /// [`Applicative::ap`](crate::typeclass::Applicative::ap).
    #[inline]
    pub fn apply<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        self.map(function)
    }

    /// Chains a computation that itself returns an `Optional`.
    ///
    /// The result of `function` is returned as is, without double wrapping.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use elevated::Optional;
    ///
    /// let half = |x: i32| if x % 2 == 0 { Optional::some(x / 2) } else { Optional::none() };
    /// assert_eq!(Optional::some(8).bind(half), Optional::some(4));
    /// assert_eq!(Optional::some(3).bind(half), Optional::none());
    /// assert_eq!(Optional::none().bind(half), Optional::none());
    /// ```
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Optional::Absent,
        }
    }

    /// Keeps a present value only if `predicate` holds for it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use elevated::Optional;
    ///
    /// let is_even = |x: &i32| x % 2 == 0;
    /// assert_eq!(Optional::some(4).filter(is_even), Optional::some(4));
    /// assert_eq!(Optional::some(3).filter(is_even), Optional::none());
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) if predicate(&value) => Self::Present(value),
            _ => Self::Absent,
        }
    }

    /// Eliminates the optional by calling exactly one of the handlers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use elevated::Optional;
    ///
    /// let shown = Optional::some(7).match_with(|x| x.to_string(), || "-".to_string());
    /// assert_eq!(shown, "7");
    /// ```
    #[inline]
    pub fn match_with<R, S, N>(self, on_some: S, on_none: N) -> R
    where
        S: FnOnce(T) -> R,
        N: FnOnce() -> R,
    {
        match self {
            Self::Present(value) => on_some(value),
            Self::Absent => on_none(),
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts to an `Either`, placing [`NoValue`] on the left when absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use elevated::{Either, NoValue, Optional};
    ///
    /// assert_eq!(Optional::some(5).to_either(), Either::Right(5));
    /// assert_eq!(Optional::<i32>::none().to_either(), Either::Left(NoValue));
    /// ```
    #[inline]
    pub fn to_either(self) -> Either<NoValue, T> {
        match self {
            Self::Present(value) => Either::Right(value),
            Self::Absent => Either::Left(NoValue),
        }
    }

    /// Converts to an `Outcome`, placing [`NoValue`] on the failure side when absent.
    #[inline]
    pub fn to_outcome(self) -> Outcome<NoValue, T> {
        match self {
            Self::Present(value) => Outcome::Success(value),
            Self::Absent => Outcome::Failure(NoValue),
        }
    }
}

impl<T> Default for Optional<T> {
    #[inline]
    fn default() -> Self {
        Self::Absent
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::from_option(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}

// =============================================================================
// Iteration
// =============================================================================

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}
