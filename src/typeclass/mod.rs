//! Type class traits over the elevated value types.
//!
//! - [`TypeConstructor`]: higher-kinded type emulation through GATs
//! - [`Functor`]: mapping over the main-path value
//! - [`Applicative`]: lifting values and combining independent contexts
//! - [`Monad`]: sequencing dependent computations
//! - [`Bifunctor`]: mapping over either side of a two-sided type
//!
//! `Either` is right-biased and `Outcome` is success-biased: the single-
//! parameter classes act on `Right` and `Success` and pass the other side
//! through.
//!
//! # Examples
//!
//! ```rust
//! use elevated::typeclass::{Functor, Monad};
//! use elevated::Outcome;
//!
//! let parsed: Outcome<String, i32> = Outcome::success(21);
//! let doubled = parsed
//!     .fmap(|x| x * 2)
//!     .flat_map(|x| {
//!         if x > 40 {
//!             Outcome::success(x)
//!         } else {
//!             Outcome::failure("too small".to_string())
//!         }
//!     });
//! assert_eq!(doubled, Outcome::Success(42));
//! ```

mod applicative;
mod bifunctor;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use bifunctor::Bifunctor;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
