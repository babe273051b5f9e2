//! The panic boundary.
//!
//! `attempt` and its fixed-arity siblings run a function and turn a normal
//! return into `Outcome::Success` and a panic into `Outcome::Failure`
//! carrying the panic message. Nothing else in the crate catches panics.

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::data::Outcome;

/// Message used when a panic payload is neither `&str` nor `String`.
pub(crate) const UNKNOWN_PANIC: &str = "unknown panic";

/// Extracts the human-readable message from a panic payload.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        UNKNOWN_PANIC.to_string()
    }
}

/// Runs `function`, capturing a panic as a failure.
///
/// # Examples
///
/// ```rust
/// use elevated::{Outcome, attempt};
///
/// assert_eq!(attempt(|| 6 * 7), Outcome::Success(42));
///
/// let failed: Outcome<String, i32> = attempt(|| panic!("no luck"));
/// assert_eq!(failed, Outcome::Failure("no luck".to_string()));
/// ```
pub fn attempt<T, F>(function: F) -> Outcome<String, T>
where
    F: FnOnce() -> T,
{
    match catch_unwind(AssertUnwindSafe(function)) {
        Ok(value) => Outcome::Success(value),
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            tracing::debug!(%message, "captured panic as failure");
            Outcome::Failure(message)
        }
    }
}

macro_rules! attempt_with_arity {
    ($arity:tt; $($argument:ident: $argument_type:ident),+) => {
        paste::paste! {
            #[doc = concat!(
                "Calls `function` with ", stringify!($arity),
                " argument(s), capturing a panic as a failure.\n\n",
                "The arguments are evaluated by the caller; only the call itself ",
                "runs inside the panic boundary."
            )]
            pub fn [<attempt $arity>]<T, F, $($argument_type),+>(
                function: F,
                $($argument: $argument_type),+
            ) -> Outcome<String, T>
            where
                F: FnOnce($($argument_type),+) -> T,
            {
                attempt(move || function($($argument),+))
            }
        }
    };
}

attempt_with_arity!(1; first: A);
attempt_with_arity!(2; first: A, second: B);
attempt_with_arity!(3; first: A, second: B, third: C);
attempt_with_arity!(4; first: A, second: B, third: C, fourth: D);

/// Calls a function with any number of arguments inside the panic boundary.
///
/// Up to four arguments dispatch to [`attempt1`](crate::attempt1) through
/// [`attempt4`](crate::attempt4). Longer argument lists are bound one by one
/// first. Whatever the arity, the arguments are evaluated by the caller and
/// only the call itself runs inside the boundary.
///
/// # Examples
///
/// ```rust
/// use elevated::Outcome;
///
/// fn divide(dividend: i32, divisor: i32) -> i32 {
///     dividend / divisor
/// }
///
/// assert_eq!(elevated::attempt!(divide, 4, 2), Outcome::Success(2));
/// assert_eq!(
///     elevated::attempt!(divide, 4, 0),
///     Outcome::Failure("attempt to divide by zero".to_string())
/// );
/// ```
#[macro_export]
macro_rules! attempt {
    (@bind $function:ident [$($bound:ident)*]) => {
        $crate::attempt(move || $function($($bound),*))
    };
    (@bind $function:ident [$($bound:ident)*] $head:expr $(, $rest:expr)*) => {{
        let argument = $head;
        $crate::attempt!(@bind $function [$($bound)* argument] $($rest),*)
    }};
    ($function:expr $(,)?) => {
        $crate::attempt($function)
    };
    ($function:expr, $first:expr $(,)?) => {
        $crate::attempt1($function, $first)
    };
    ($function:expr, $first:expr, $second:expr $(,)?) => {
        $crate::attempt2($function, $first, $second)
    };
    ($function:expr, $first:expr, $second:expr, $third:expr $(,)?) => {
        $crate::attempt3($function, $first, $second, $third)
    };
    ($function:expr, $first:expr, $second:expr, $third:expr, $fourth:expr $(,)?) => {
        $crate::attempt4($function, $first, $second, $third, $fourth)
    };
    ($function:expr, $($argument:expr),+ $(,)?) => {{
        let function = $function;
        $crate::attempt!(@bind function [] $($argument),+)
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn divide(dividend: i32, divisor: i32) -> i32 {
        dividend / divisor
    }

    #[rstest]
    #[case(4, 2, Outcome::Success(2))]
    #[case(4, 0, Outcome::Failure("attempt to divide by zero".to_string()))]
    fn attempt2_divide(
        #[case] dividend: i32,
        #[case] divisor: i32,
        #[case] expected: Outcome<String, i32>,
    ) {
        assert_eq!(attempt2(divide, dividend, divisor), expected);
    }

    #[rstest]
    fn formatted_panic_message_is_kept() {
        let result: Outcome<String, ()> = attempt1(|code: u16| panic!("status {code}"), 503);
        assert_eq!(result, Outcome::Failure("status 503".to_string()));
    }

    #[rstest]
    fn non_string_payload_becomes_unknown_panic() {
        let result: Outcome<String, ()> = attempt(|| std::panic::panic_any(17_u8));
        assert_eq!(result, Outcome::Failure(UNKNOWN_PANIC.to_string()));
    }

    #[rstest]
    fn arities_three_and_four() {
        assert_eq!(attempt3(|a: i32, b: i32, c: i32| a + b + c, 1, 2, 3), Outcome::Success(6));
        assert_eq!(
            attempt4(
                |a: &str, b: &str, c: &str, d: &str| [a, b, c, d].concat(),
                "a",
                "b",
                "c",
                "d"
            ),
            Outcome::Success("abcd".to_string())
        );
    }
}
