//! ARM PL011 UART output channel.

use arm_pl011::Pl011Uart;
use baretest::TestIo;
use kspin::SpinNoIrq;
use lazyinit::LazyInit;

// QEMU virt UART0.
const UART_BASE: usize = 0x0900_0000;

static UART: LazyInit<SpinNoIrq<Pl011Uart>> = LazyInit::new();

/// Writes a byte to the UART. A no-op until the channel is initialized.
pub fn putchar(c: u8) {
    if let Some(uart) = UART.get() {
        uart.lock().putchar(c);
    }
}

/// [`TestIo`] implementation over the PL011.
///
/// Bytes are passed through raw: the runner emits explicit CR-LF line
/// endings, so no `\n` translation happens here.
pub struct Pl011Io;

impl TestIo for Pl011Io {
    fn init(&self) {
        if UART.is_inited() {
            return;
        }
        UART.init_once(SpinNoIrq::new(Pl011Uart::new(UART_BASE as *mut u8)));
        UART.lock().init();
    }

    fn put_char(&self, c: u8) {
        putchar(c);
    }

    fn tick_ms(&self) -> u32 {
        super::timer::ticks_ms()
    }
}
