//! ARM generic timer millisecond tick source.

use aarch64_cpu::registers::{CNTFRQ_EL0, CNTPCT_EL0, Readable};

/// Milliseconds since counter start, truncated to the channel's tick width.
/// The value wraps; the runner corrects wrapped intervals.
pub fn ticks_ms() -> u32 {
    let freq = CNTFRQ_EL0.get();
    if freq == 0 {
        return 0;
    }
    let ticks = CNTPCT_EL0.get();
    (ticks as u128 * 1000 / freq as u128) as u32
}
