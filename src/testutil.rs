//! Shared helpers for the host-side unit tests.

use core::cell::RefCell;

use std::string::String;
use std::sync::{Mutex, MutexGuard, OnceLock};
use std::vec::Vec;

use crate::io::TestIo;

/// In-memory output channel with a scriptable tick source.
pub(crate) struct MockIo {
    out: RefCell<String>,
    // Ticks handed out front-first; exhausted reads return 0.
    ticks: RefCell<Vec<u32>>,
}

impl MockIo {
    pub(crate) fn new() -> Self {
        Self {
            out: RefCell::new(String::new()),
            ticks: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn with_ticks(ticks: &[u32]) -> Self {
        let io = Self::new();
        let mut stored: Vec<u32> = ticks.into();
        stored.reverse();
        *io.ticks.borrow_mut() = stored;
        io
    }

    pub(crate) fn output(&self) -> String {
        self.out.borrow().clone()
    }
}

impl TestIo for MockIo {
    fn put_char(&self, c: u8) {
        self.out.borrow_mut().push(c as char);
    }

    fn tick_ms(&self) -> u32 {
        self.ticks.borrow_mut().pop().unwrap_or(0)
    }
}

/// The assertion layer publishes a single dispatch context per process, so
/// tests that drive the runner serialize on this lock.
pub(crate) fn serial() -> MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}
