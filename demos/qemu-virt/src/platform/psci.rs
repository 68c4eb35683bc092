//! ARM PSCI shutdown call, used to exit QEMU once the run completes.

const PSCI_0_2_FN_BASE: u32 = 0x84000000;
const PSCI_0_2_FN_SYSTEM_OFF: u32 = PSCI_0_2_FN_BASE + 8;

/// psci "hvc" method call
fn psci_hvc_call(func: u32, arg0: usize, arg1: usize, arg2: usize) -> usize {
    let ret;
    unsafe {
        core::arch::asm!(
            "hvc #0",
            inlateout("x0") func as usize => ret,
            in("x1") arg0,
            in("x2") arg1,
            in("x3") arg2,
        )
    }
    ret
}

/// Shutdown the whole system.
pub fn system_off() -> ! {
    psci_hvc_call(PSCI_0_2_FN_SYSTEM_OFF, 0, 0, 0);
    loop {
        aarch64_cpu::asm::wfi();
    }
}
