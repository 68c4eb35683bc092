//! Per-dispatch execution context and the abort control value.

use core::cell::Cell;
use core::ptr;
use core::sync::atomic::{AtomicPtr, Ordering};

use crate::io::TestIo;

/// Control value a test body's dispatch wrapper resolves to.
///
/// Fatal assertion macros expand to an early `return TestResult::Failed`,
/// skipping everything after the failed check; a body that runs to the end
/// yields [`TestResult::Ok`]. These are the only two ways a dispatched body
/// concludes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestResult {
    Ok,
    Failed,
}

/// State the runner owns for the duration of a single test dispatch: the
/// output channel and the soft-fail marker set by the non-fatal assertions.
pub(crate) struct RunContext<'io> {
    pub(crate) io: &'io dyn TestIo,
    soft_failed: Cell<bool>,
}

impl<'io> RunContext<'io> {
    pub(crate) fn new(io: &'io dyn TestIo) -> Self {
        Self {
            io,
            soft_failed: Cell::new(false),
        }
    }

    pub(crate) fn flag_soft_failure(&self) {
        self.soft_failed.set(true);
    }

    pub(crate) fn soft_failed(&self) -> bool {
        self.soft_failed.get()
    }
}

static CURRENT: AtomicPtr<RunContext<'static>> = AtomicPtr::new(ptr::null_mut());

/// Publishes a context as the live dispatch target for the assertion layer;
/// cleared again on drop, so a panicking host test cannot leak a dangling
/// pointer.
pub(crate) struct ContextGuard;

impl ContextGuard {
    /// # Safety
    ///
    /// `ctx` must stay alive and unmoved until the returned guard is
    /// dropped, and dispatch must be single-threaded: one live context per
    /// process.
    pub(crate) unsafe fn install(ctx: &RunContext<'_>) -> Self {
        let erased =
            (ctx as *const RunContext<'_> as *mut RunContext<'_>).cast::<RunContext<'static>>();
        CURRENT.store(erased, Ordering::Release);
        ContextGuard
    }
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        CURRENT.store(ptr::null_mut(), Ordering::Release);
    }
}

/// Runs `f` against the live dispatch context, or returns `None` when no
/// test body is currently being dispatched.
pub(crate) fn with_current<R>(f: impl FnOnce(&RunContext<'_>) -> R) -> Option<R> {
    let current = CURRENT.load(Ordering::Acquire);
    if current.is_null() {
        None
    } else {
        // Safety: non-null only between `ContextGuard::install` and the
        // guard's drop; the runner keeps the context alive for that window.
        Some(f(unsafe { &*current }))
    }
}
