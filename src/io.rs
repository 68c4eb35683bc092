//! Output channel contract consumed by the test runner.

/// Byte-oriented output channel and millisecond tick source supplied by the
/// embedding environment.
///
/// All report text flows through this trait; there is no other output path.
/// The runner calls [`init`](TestIo::init) at the start of every
/// [`run_all`](crate::TestRunner::run_all), so implementations must tolerate
/// repeated initialization.
pub trait TestIo {
    /// One-time transport setup (UART clocks, timers). Must be idempotent.
    fn init(&self) {}

    /// Emits a single byte, returning once it has been accepted.
    fn put_char(&self, c: u8);

    /// Emits a string, byte by byte unless overridden.
    fn put_str(&self, s: &str) {
        for c in s.bytes() {
            self.put_char(c);
        }
    }

    /// Current monotonic millisecond tick. Wraps at `u32::MAX`; a constant
    /// `0` is valid and degrades all measured durations to zero.
    fn tick_ms(&self) -> u32 {
        0
    }
}
