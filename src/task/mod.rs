//! Handles to concurrently executing producers, and async combinators over them.
//!
//! A [`Task<A>`] is a handle to a computation running on tokio that will
//! eventually produce an `A`. Awaiting the handle yields the value. If the
//! producer panicked, the panic is resumed in the awaiting task, so a fault
//! travels to whoever consumes the result.
//!
//! When `A` is one of the elevated types, the handle offers an `_async`
//! counterpart of every synchronous combinator: `map_async`, `bind_async`,
//! `map_left_async`, `bind_success_async` and so on. Each one spawns a new
//! task that awaits the current handle, applies the synchronous combinator,
//! and returns the new handle immediately. `match_with_async` is terminal:
//! it awaits and returns the handler's result directly.
//!
//! # Examples
//!
//! ```rust
//! use elevated::Optional;
//! use elevated::task::Task;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let lookup = Task::spawn(async { Optional::some(20) });
//! let shown = lookup
//!     .map_async(|x| x * 2)
//!     .match_with_async(|x| x.to_string(), || "missing".to_string())
//!     .await;
//! assert_eq!(shown, "40");
//! # });
//! ```

mod combinators;
pub mod runtime;

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::FutureExt;
use tokio::task::{JoinError, JoinHandle};

use crate::data::Outcome;
use crate::facade::panic_message;

/// Panic message used when a producer was cancelled before finishing.
pub const CANCELLED: &str = "task was cancelled before producing a value";

/// A handle to a concurrently executing computation producing an `A`.
///
/// # Panics
///
/// Awaiting a `Task` re-raises a panic from the producer. A producer that
/// was cancelled by runtime shutdown is reported as a panic with the
/// [`CANCELLED`] message.
#[must_use = "a task handle does nothing unless awaited or chained"]
pub struct Task<A> {
    handle: JoinHandle<A>,
}

impl<A: Send + 'static> Task<A> {
    /// Spawns `future` as a new concurrent task.
    pub fn spawn<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = A> + Send + 'static,
    {
        tracing::trace!(output = std::any::type_name::<A>(), "spawning task");
        Self {
            handle: runtime::handle().spawn(future),
        }
    }

    /// Spawns a blocking closure on the runtime's blocking pool.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use elevated::task::Task;
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let sum = Task::spawn_blocking(|| (1..=10).sum::<i32>());
    /// assert_eq!(sum.await, 55);
    /// # });
    /// ```
    pub fn spawn_blocking<F>(function: F) -> Self
    where
        F: FnOnce() -> A + Send + 'static,
    {
        tracing::trace!(output = std::any::type_name::<A>(), "spawning blocking task");
        Self {
            handle: runtime::handle().spawn_blocking(function),
        }
    }

    /// A task that resolves to `value` straight away.
    pub fn ready(value: A) -> Self {
        Self::spawn(async move { value })
    }

    /// Spawns a task that awaits this one and applies `function` to its value.
    ///
    /// Returns without waiting. This is the building block of every
    /// `_async` combinator.
    pub fn then_spawn<B, F>(self, function: F) -> Task<B>
    where
        B: Send + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        Task::spawn(async move { function(self.await) })
    }

    /// Awaits the task, turning a producer panic into a failure.
    ///
    /// The message is the panic text, or [`CANCELLED`] if the producer never
    /// finished.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use elevated::Outcome;
    /// use elevated::task::Task;
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let broken: Task<i32> = Task::spawn(async { panic!("producer failed") });
    /// assert_eq!(broken.settle().await, Outcome::Failure("producer failed".to_string()));
    ///
    /// assert_eq!(Task::ready(1).settle().await, Outcome::Success(1));
    /// # });
    /// ```
    pub async fn settle(self) -> Outcome<String, A> {
        match self.handle.await {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(fault_message(error)),
        }
    }
}

impl<A> Future for Task<A> {
    type Output = A;

    fn poll(mut self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<A> {
        match self.handle.poll_unpin(context) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(Ok(value)) => Poll::Ready(value),
            Poll::Ready(Err(error)) => propagate(error),
        }
    }
}

impl<A> std::fmt::Debug for Task<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Task")
            .field("finished", &self.handle.is_finished())
            .finish()
    }
}

/// Re-raises a producer fault in the awaiting task.
fn propagate(error: JoinError) -> ! {
    match error.try_into_panic() {
        Ok(payload) => {
            tracing::debug!(
                message = %panic_message(payload.as_ref()),
                "re-raising producer panic"
            );
            std::panic::resume_unwind(payload)
        }
        Err(_) => panic!("{CANCELLED}"),
    }
}

fn fault_message(error: JoinError) -> String {
    match error.try_into_panic() {
        Ok(payload) => panic_message(payload.as_ref()),
        Err(_) => CANCELLED.to_string(),
    }
}

static_assertions::assert_impl_all!(Task<i32>: Send, Sync, Unpin);
static_assertions::assert_impl_all!(Task<crate::Optional<String>>: Send, Sync, Unpin);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn ready_resolves_to_value() {
        assert_eq!(Task::ready(7).await, 7);
    }

    #[rstest]
    #[tokio::test]
    async fn then_spawn_applies_function() {
        let length = Task::ready("hello".to_string()).then_spawn(|s| s.len());
        assert_eq!(length.await, 5);
    }

    #[rstest]
    #[tokio::test]
    async fn awaiting_a_panicked_producer_panics() {
        let broken: Task<i32> = Task::spawn(async { panic!("boom") });
        // The outer spawn observes the resumed panic as its own.
        let observer = tokio::spawn(async move { broken.await });
        let error = observer.await.unwrap_err();
        assert!(error.is_panic());
        assert_eq!(panic_message(error.into_panic().as_ref()), "boom");
    }

    #[rstest]
    #[tokio::test]
    async fn settle_reports_panic_message() {
        let broken: Task<()> = Task::spawn(async { panic!("settled {}", 3) });
        assert_eq!(broken.settle().await, Outcome::Failure("settled 3".to_string()));
    }

    #[rstest]
    fn spawn_outside_runtime_uses_fallback() {
        let task = Task::spawn(async { 40 + 2 });
        assert_eq!(runtime::global().block_on(task), 42);
    }
}
