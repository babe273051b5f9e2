//! The three elevated value types.
//!
//! - [`Optional`]: a present value or nothing
//! - [`Either`]: exactly one of a left or a right value
//! - [`Outcome`]: exactly one of a failure or a success value
//!
//! Every type converts into the other two. Converting a two-sided value
//! into an [`Optional`] drops the non-payload side; converting an absent
//! [`Optional`] into a two-sided value fills the inactive side with
//! [`NoValue`](crate::NoValue).
//!
//! # Examples
//!
//! ```rust
//! use elevated::{Either, NoValue, Optional, Outcome};
//!
//! assert_eq!(Optional::some(5).to_either(), Either::Right(5));
//! assert_eq!(Optional::<i32>::none().to_outcome(), Outcome::Failure(NoValue));
//! assert_eq!(Either::<&str, i32>::left("e").to_outcome(), Outcome::Failure("e"));
//! assert_eq!(Outcome::<String, i32>::success(9).to_option(), Optional::some(9));
//! ```

mod either;
mod optional;
mod outcome;

pub use either::Either;
pub use optional::Optional;
pub use outcome::Outcome;

static_assertions::assert_impl_all!(Optional<String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Either<String, i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Outcome<String, i32>: Send, Sync, Clone);
