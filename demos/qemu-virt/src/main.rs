//! baretest demo firmware for the QEMU `virt` machine.
//!
//! Run with:
//!
//! ```text
//! cargo build --target aarch64-unknown-none
//! qemu-system-aarch64 -machine virt -cpu cortex-a72 -nographic \
//!     -kernel target/aarch64-unknown-none/debug/baretest-qemu-demo
//! ```

#![no_std]
#![no_main]

mod boot;
mod logger;
mod mathops;
mod platform;
mod tests;

#[macro_use]
extern crate log;

use baretest::{TestIo, TestRunner, report};

use platform::pl011::Pl011Io;

static PLATFORM_IO: Pl011Io = Pl011Io;

/// Manually registered smoke test, alongside the linker-collected suites.
fn smoke() -> baretest::TestResult {
    baretest::assert_true!(mathops::is_even(2));
    baretest::TestResult::Ok
}

#[unsafe(no_mangle)]
pub fn rust_main() -> ! {
    // The runner initializes the channel itself, but the logger wants the
    // UART up before the first test runs.
    PLATFORM_IO.init();
    logger::init();

    info!("baretest demo firmware booted");

    let mut runner = TestRunner::new(&PLATFORM_IO);
    runner.register_linked();
    runner.register("Manual", "smoke", smoke);

    let failed = runner.run_all();
    if failed == 0 {
        PLATFORM_IO.put_str("ALL TESTS PASSED\r\n");
    } else {
        report::put_dec(&PLATFORM_IO, failed);
        PLATFORM_IO.put_str(" TESTS FAILED\r\n");
    }

    platform::psci::system_off();
}

#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    error!("PANIC: {}", info);
    platform::psci::system_off();
}
