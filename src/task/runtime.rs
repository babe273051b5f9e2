//! Runtime selection for spawned tasks.
//!
//! Tasks are spawned on the caller's tokio runtime when there is one. From
//! plain synchronous code they go to a lazily created, process-wide
//! multi-thread runtime, so `Task::spawn` never requires the caller to set
//! up a runtime first.

use std::sync::LazyLock;

use tokio::runtime::{Builder, Handle, Runtime};

/// Fallback runtime for spawns issued outside any tokio context.
///
/// Built on first use with one worker per CPU core; never dropped.
static GLOBAL_RUNTIME: LazyLock<Runtime> = LazyLock::new(|| {
    Builder::new_multi_thread()
        .worker_threads(num_cpus::get())
        .thread_name("elevated-task")
        .enable_all()
        .build()
        .expect("Failed to create global tokio runtime")
});

/// Returns the process-wide fallback runtime.
#[inline]
#[must_use]
pub fn global() -> &'static Runtime {
    &GLOBAL_RUNTIME
}

/// Returns the current runtime's handle, or the fallback runtime's handle
/// when called outside a runtime.
///
/// # Examples
///
/// ```rust
/// use elevated::task::runtime::handle;
///
/// // No runtime here: the fallback runtime runs the work.
/// let join = handle().spawn(async { 1 + 1 });
/// assert_eq!(elevated::task::runtime::global().block_on(join).ok(), Some(2));
/// ```
#[inline]
#[must_use]
pub fn handle() -> Handle {
    Handle::try_current().unwrap_or_else(|_| global().handle().clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tokio::runtime::RuntimeFlavor;

    #[rstest]
    fn global_returns_same_instance() {
        assert!(std::ptr::eq(global(), global()));
    }

    #[rstest]
    fn handle_outside_runtime_spawns_on_global() {
        let join = handle().spawn(async { 21 * 2 });
        assert_eq!(global().block_on(join).ok(), Some(42));
    }

    #[rstest]
    #[tokio::test]
    async fn handle_inside_runtime_is_current() {
        // #[tokio::test] runs on a current-thread runtime, the fallback is multi-thread.
        assert_eq!(handle().runtime_flavor(), RuntimeFlavor::CurrentThread);
    }
}
