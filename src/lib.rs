//! # elevated
//!
//! Three elevated value types with one combinator vocabulary:
//!
//! - [`Optional<T>`]: a present value or nothing
//! - [`Either<L, R>`]: exactly one of a left or a right value
//! - [`Outcome<F, S>`]: exactly one of a failure or a success value
//!
//! Each type offers `map`, `apply` and `bind` (with `_left`/`_right` or
//! `_success`/`_failure` variants on the two-sided types), `filter` on
//! `Optional`, and `match_with`, the one operation that extracts a plain
//! value by requiring a handler for every state. Every type converts into
//! the other two.
//!
//! The [`attempt`] family is the only place a panic is caught: a normal
//! return becomes a success and a panic becomes a failure carrying the
//! panic message.
//!
//! ## Feature Flags
//!
//! - `typeclass`: `Functor`, `Applicative`, `Monad` and `Bifunctor` for the
//!   three types, plus the generic `map`/`bind` free functions
//! - `async`: [`task::Task`] handles and `_async` combinators on tokio
//! - `serde`: `Serialize`/`Deserialize` for the value types
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use elevated::prelude::*;
//!
//! let lookup: Optional<i32> = some(20);
//! let doubled = lookup.map(|x| x * 2);
//! assert_eq!(doubled, some(40));
//!
//! let as_either = doubled.to_either();
//! assert_eq!(as_either, Either::Right(40));
//!
//! let shown = Either::<&str, i32>::left("hello")
//!     .match_with(|s| s.to_uppercase(), |_| "NOT FOUND".to_string());
//! assert_eq!(shown, "HELLO");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the value types, the facade functions and, when enabled,
/// the type classes and the task handle.
///
/// # Usage
///
/// ```rust
/// use elevated::prelude::*;
/// ```
pub mod prelude {
    pub use crate::data::*;
    pub use crate::error::{ConstructionError, NoValue};
    pub use crate::facade::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "async")]
    pub use crate::task::Task;
}

mod data;
pub mod error;
pub mod facade;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "async")]
pub mod task;

pub use data::{Either, Optional, Outcome};
pub use error::{ConstructionError, NoValue};
pub use facade::*;
