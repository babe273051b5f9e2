//! `_async` mirrors of the synchronous combinators.
//!
//! Every method here is `then_spawn` plus the synchronous combinator of the
//! same name, except `match_with_async`, which awaits and extracts.
//! `filter` and the constructors have no async mirror.

use super::Task;
use crate::data::{Either, Optional, Outcome};
use crate::error::NoValue;

// =============================================================================
// Optional
// =============================================================================

impl<T: Send + 'static> Task<Optional<T>> {
    /// Async [`Optional::map`].
    pub fn map_async<U, F>(self, function: F) -> Task<Optional<U>>
    where
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        self.then_spawn(move |value| value.map(function))
    }

    /// Async [`Optional::apply`].
    pub fn apply_async<U, F>(self, function: F) -> Task<Optional<U>>
    where
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        self.then_spawn(move |value| value.apply(function))
    }

    /// Async [`Optional::bind`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use elevated::Optional;
    /// use elevated::task::Task;
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let absent: Task<Optional<i32>> = Task::ready(Optional::none());
    /// let chained = absent.bind_async(|x| Optional::some(x + 1));
    /// assert_eq!(chained.await, Optional::none());
    /// # });
    /// ```
    pub fn bind_async<U, F>(self, function: F) -> Task<Optional<U>>
    where
        U: Send + 'static,
        F: FnOnce(T) -> Optional<U> + Send + 'static,
    {
        self.then_spawn(move |value| value.bind(function))
    }

    /// Async [`Optional::to_either`].
    pub fn to_either_async(self) -> Task<Either<NoValue, T>> {
        self.then_spawn(Optional::to_either)
    }

    /// Async [`Optional::to_outcome`].
    pub fn to_outcome_async(self) -> Task<Outcome<NoValue, T>> {
        self.then_spawn(Optional::to_outcome)
    }

    /// Awaits the producer, then calls exactly one handler.
    pub async fn match_with_async<R, S, N>(self, on_some: S, on_none: N) -> R
    where
        S: FnOnce(T) -> R,
        N: FnOnce() -> R,
    {
        self.await.match_with(on_some, on_none)
    }
}

// =============================================================================
// Either
// =============================================================================

impl<L, R> Task<Either<L, R>>
where
    L: Send + 'static,
    R: Send + 'static,
{
    /// Async [`Either::map_left`].
    pub fn map_left_async<T, F>(self, function: F) -> Task<Either<T, R>>
    where
        T: Send + 'static,
        F: FnOnce(L) -> T + Send + 'static,
    {
        self.then_spawn(move |value| value.map_left(function))
    }

    /// Async [`Either::map_right`].
    pub fn map_right_async<T, F>(self, function: F) -> Task<Either<L, T>>
    where
        T: Send + 'static,
        F: FnOnce(R) -> T + Send + 'static,
    {
        self.then_spawn(move |value| value.map_right(function))
    }

    /// Async [`Either::apply_left`].
    pub fn apply_left_async<T, F>(self, function: F) -> Task<Either<T, R>>
    where
        T: Send + 'static,
        F: FnOnce(L) -> T + Send + 'static,
    {
        self.then_spawn(move |value| value.apply_left(function))
    }

    /// Async [`Either::apply_right`].
    pub fn apply_right_async<T, F>(self, function: F) -> Task<Either<L, T>>
    where
        T: Send + 'static,
        F: FnOnce(R) -> T + Send + 'static,
    {
        self.then_spawn(move |value| value.apply_right(function))
    }

    /// Async [`Either::bind_left`].
    pub fn bind_left_async<T, F>(self, function: F) -> Task<Either<T, R>>
    where
        T: Send + 'static,
        F: FnOnce(L) -> Either<T, R> + Send + 'static,
    {
        self.then_spawn(move |value| value.bind_left(function))
    }

    /// Async [`Either::bind_right`].
    pub fn bind_right_async<T, F>(self, function: F) -> Task<Either<L, T>>
    where
        T: Send + 'static,
        F: FnOnce(R) -> Either<L, T> + Send + 'static,
    {
        self.then_spawn(move |value| value.bind_right(function))
    }

    /// Async [`Either::to_option`].
    pub fn to_option_async(self) -> Task<Optional<R>> {
        self.then_spawn(Either::to_option)
    }

    /// Async [`Either::to_outcome`].
    pub fn to_outcome_async(self) -> Task<Outcome<L, R>> {
        self.then_spawn(Either::to_outcome)
    }

    /// Awaits the producer, then calls exactly one handler.
    pub async fn match_with_async<T, F, G>(self, on_left: F, on_right: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        self.await.match_with(on_left, on_right)
    }
}

// =============================================================================
// Outcome
// =============================================================================

impl<F, S> Task<Outcome<F, S>>
where
    F: Send + 'static,
    S: Send + 'static,
{
    /// Async [`Outcome::map_success`].
    pub fn map_success_async<T, G>(self, function: G) -> Task<Outcome<F, T>>
    where
        T: Send + 'static,
        G: FnOnce(S) -> T + Send + 'static,
    {
        self.then_spawn(move |value| value.map_success(function))
    }

    /// Async [`Outcome::map_failure`].
    pub fn map_failure_async<T, G>(self, function: G) -> Task<Outcome<T, S>>
    where
        T: Send + 'static,
        G: FnOnce(F) -> T + Send + 'static,
    {
        self.then_spawn(move |value| value.map_failure(function))
    }

    /// Async [`Outcome::apply_success`].
    pub fn apply_success_async<T, G>(self, function: G) -> Task<Outcome<F, T>>
    where
        T: Send + 'static,
        G: FnOnce(S) -> T + Send + 'static,
    {
        self.then_spawn(move |value| value.apply_success(function))
    }

    /// Async [`Outcome::apply_failure`].
    pub fn apply_failure_async<T, G>(self, function: G) -> Task<Outcome<T, S>>
    where
        T: Send + 'static,
        G: FnOnce(F) -> T + Send + 'static,
    {
        self.then_spawn(move |value| value.apply_failure(function))
    }

    /// Async [`Outcome::bind_success`].
    pub fn bind_success_async<T, G>(self, function: G) -> Task<Outcome<F, T>>
    where
        T: Send + 'static,
        G: FnOnce(S) -> Outcome<F, T> + Send + 'static,
    {
        self.then_spawn(move |value| value.bind_success(function))
    }

    /// Async [`Outcome::bind_failure`].
    pub fn bind_failure_async<T, G>(self, function: G) -> Task<Outcome<T, S>>
    where
        T: Send + 'static,
        G: FnOnce(F) -> Outcome<T, S> + Send + 'static,
    {
        self.then_spawn(move |value| value.bind_failure(function))
    }

    /// Async [`Outcome::to_option`].
    pub fn to_option_async(self) -> Task<Optional<S>> {
        self.then_spawn(Outcome::to_option)
    }

    /// Async [`Outcome::to_either`].
    pub fn to_either_async(self) -> Task<Either<F, S>> {
        self.then_spawn(Outcome::to_either)
    }

    /// Awaits the producer, then calls exactly one handler.
    pub async fn match_with_async<T, H, G>(self, on_failure: H, on_success: G) -> T
    where
        H: FnOnce(F) -> T,
        G: FnOnce(S) -> T,
    {
        self.await.match_with(on_failure, on_success)
    }
}
