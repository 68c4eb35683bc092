//! Test dispatch, duration measurement and report emission.

use crate::context::{ContextGuard, RunContext, TestResult};
use crate::io::TestIo;
use crate::registry::{Registry, TestCase, TestDescriptor, TestFn};
use crate::report::put_dec;

/// Sequential test runner bound to an output channel.
///
/// Registration happens first, [`run_all`](TestRunner::run_all) afterwards;
/// the relative order of independent registration sites is unspecified and
/// tests must not rely on it.
pub struct TestRunner<'io> {
    registry: Registry,
    io: &'io dyn TestIo,
}

impl<'io> TestRunner<'io> {
    pub fn new(io: &'io dyn TestIo) -> Self {
        Self {
            registry: Registry::new(),
            io,
        }
    }

    /// Registers a test. Names longer than
    /// [`MAX_NAME_LEN`](crate::MAX_NAME_LEN) are silently truncated. On a
    /// full registry the registration is dropped and a diagnostic is emitted
    /// on the channel; the run itself is unaffected.
    pub fn register(&mut self, suite: &str, name: &str, func: TestFn) {
        if !self.registry.push(suite, name, func) {
            self.io
                .put_str("ERROR: Max test cases reached; registration dropped.\r\n");
        }
    }

    /// Registers every descriptor in `tests`, in slice order.
    pub fn register_descriptors(&mut self, tests: &[TestDescriptor]) {
        for test in tests {
            self.register(test.suite, test.name, test.func);
        }
    }

    /// Registered cases with the outcome of their most recent run.
    pub fn cases(&self) -> &[TestCase] {
        self.registry.cases()
    }

    /// Runs every registered test in registration order and emits the
    /// report. Returns the number of failed tests; `0` means full success.
    ///
    /// Safe to call again: the registry is kept and every test re-executes.
    pub fn run_all(&mut self) -> u32 {
        let io = self.io;
        io.init();

        io.put_str("[==========] Running ");
        put_dec(io, self.registry.len() as u32);
        io.put_str(" tests.\r\n");

        let mut passed: u32 = 0;
        let mut failed: u32 = 0;
        let mut total_ms: u32 = 0;

        for case in self.registry.cases_mut() {
            io.put_str("[ RUN      ] ");
            io.put_str(case.suite());
            io.put_char(b'.');
            io.put_str(case.name());
            io.put_str("\r\n");

            let ctx = RunContext::new(io);
            let start = io.tick_ms();
            // Safety: `ctx` outlives the guard and dispatch is
            // single-threaded.
            let guard = unsafe { ContextGuard::install(&ctx) };
            let result = (case.func)();
            drop(guard);
            let end = io.tick_ms();

            // Wrapping subtraction is the overflow-corrected elapsed time
            // for any unsigned tick width.
            case.duration_ms = end.wrapping_sub(start);
            total_ms = total_ms.wrapping_add(case.duration_ms);

            case.passed = result == TestResult::Ok && !ctx.soft_failed();
            if case.passed {
                passed += 1;
                io.put_str("[       OK ] ");
            } else {
                failed += 1;
                io.put_str("[  FAILED  ] ");
            }
            io.put_str(case.suite());
            io.put_char(b'.');
            io.put_str(case.name());
            io.put_str(" (");
            put_dec(io, case.duration_ms);
            io.put_str(" ms)\r\n");
        }

        io.put_str("[==========] ");
        put_dec(io, self.registry.len() as u32);
        io.put_str(" tests ran. (");
        put_dec(io, total_ms);
        io.put_str(" ms total)\r\n");

        io.put_str("[  PASSED  ] ");
        put_dec(io, passed);
        io.put_str(" tests.\r\n");

        if failed > 0 {
            io.put_str("[  FAILED  ] ");
            put_dec(io, failed);
            io.put_str(" tests, listed below:\r\n");
            for case in self.registry.cases().iter().filter(|c| !c.passed) {
                io.put_str("[  FAILED  ] ");
                io.put_str(case.suite());
                io.put_char(b'.');
                io.put_str(case.name());
                io.put_str("\r\n");
            }
        }

        io.put_str("\r\n");
        put_dec(io, failed);
        if failed == 1 {
            io.put_str(" FAILED TEST\r\n");
        } else {
            io.put_str(" FAILED TESTS\r\n");
        }

        failed
    }
}

// Host targets have no linker script to define the section bounds, so the
// collection path only exists on bare-metal builds.
#[cfg(all(feature = "linked-tests", target_os = "none"))]
mod linked {
    use crate::registry::TestDescriptor;

    // Section bounds provided by the embedding program's linker script.
    #[allow(improper_ctypes)]
    unsafe extern "C" {
        static __baretest_start: TestDescriptor;
        static __baretest_end: TestDescriptor;
    }

    /// All descriptors collected into the `.baretest` link section.
    ///
    /// # Safety
    /// Relies on the linker script defining `__baretest_start` and
    /// `__baretest_end` bracketing the section.
    pub(super) fn linked_tests() -> &'static [TestDescriptor] {
        unsafe {
            let start = &__baretest_start as *const TestDescriptor;
            let end = &__baretest_end as *const TestDescriptor;
            let len = end.offset_from(start) as usize;
            core::slice::from_raw_parts(start, len)
        }
    }
}

#[cfg(all(feature = "linked-tests", target_os = "none"))]
impl<'io> TestRunner<'io> {
    /// Registers every test collected into the `.baretest` link section by
    /// the `#[bare_test]` attribute.
    pub fn register_linked(&mut self) {
        let tests = linked::linked_tests();
        if tests.is_empty() {
            warn!("no linked tests found");
        }
        self.register_descriptors(tests);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::MAX_TEST_CASES;
    use crate::testutil::{MockIo, serial};
    use core::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::format;
    use std::string::String;

    static REACHED_AFTER_FATAL: AtomicBool = AtomicBool::new(false);
    static SOFT_BODY_STATEMENTS: AtomicUsize = AtomicUsize::new(0);

    fn passing() -> TestResult {
        crate::assert_eq!(4, 2 + 2);
        TestResult::Ok
    }

    fn fatal_on_second_statement() -> TestResult {
        crate::assert_true!(1 + 1 == 2);
        crate::assert_eq!(4, 5);
        REACHED_AFTER_FATAL.store(true, Ordering::SeqCst);
        TestResult::Ok
    }

    fn soft_failures_only() -> TestResult {
        SOFT_BODY_STATEMENTS.fetch_add(1, Ordering::SeqCst);
        crate::expect_eq!(1, 2);
        SOFT_BODY_STATEMENTS.fetch_add(1, Ordering::SeqCst);
        crate::expect_true!(false);
        SOFT_BODY_STATEMENTS.fetch_add(1, Ordering::SeqCst);
        TestResult::Ok
    }

    fn null_string_operand() -> TestResult {
        crate::assert_streq!(Option::<&str>::None, "abc");
        TestResult::Ok
    }

    fn pointer_checks() -> TestResult {
        let value = 3u32;
        crate::assert_not_null!(&value as *const u32);
        crate::assert_null!(core::ptr::null::<u32>());
        TestResult::Ok
    }

    fn marker_only() -> TestResult {
        crate::succeed!();
        TestResult::Ok
    }

    fn explicit_soft_failure() -> TestResult {
        crate::add_failure!();
        TestResult::Ok
    }

    fn explicit_fatal() -> TestResult {
        crate::fail!();
    }

    fn near_failure() -> TestResult {
        crate::assert_near!(1.0, 2.0, 0.5);
        TestResult::Ok
    }

    #[test]
    fn report_shape_with_one_fatal_failure() {
        let _guard = serial();
        REACHED_AFTER_FATAL.store(false, Ordering::SeqCst);

        let io = MockIo::new();
        let mut runner = TestRunner::new(&io);
        runner.register("Suite", "T1", passing);
        runner.register("Suite", "T2", fatal_on_second_statement);

        assert_eq!(runner.run_all(), 1);
        assert!(!REACHED_AFTER_FATAL.load(Ordering::SeqCst));

        let out = io.output();
        assert!(out.starts_with(
            "[==========] Running 2 tests.\r\n\
             [ RUN      ] Suite.T1\r\n\
             [       OK ] Suite.T1 (0 ms)\r\n\
             [ RUN      ] Suite.T2\r\n"
        ));
        assert!(out.contains(": Failure\r\n  ASSERT_EQ(4 == 5)\r\n    Message: Expected: 4, Actual: 5\r\n"));
        assert!(out.ends_with(
            "[  FAILED  ] Suite.T2 (0 ms)\r\n\
             [==========] 2 tests ran. (0 ms total)\r\n\
             [  PASSED  ] 1 tests.\r\n\
             [  FAILED  ] 1 tests, listed below:\r\n\
             [  FAILED  ] Suite.T2\r\n\
             \r\n\
             1 FAILED TEST\r\n"
        ));

        let cases = runner.cases();
        assert!(cases[0].passed);
        assert!(!cases[1].passed);
    }

    #[test]
    fn soft_failures_run_whole_body_and_fail_the_test() {
        let _guard = serial();
        SOFT_BODY_STATEMENTS.store(0, Ordering::SeqCst);

        let io = MockIo::new();
        let mut runner = TestRunner::new(&io);
        runner.register("Soft", "continues", soft_failures_only);

        assert_eq!(runner.run_all(), 1);
        assert_eq!(SOFT_BODY_STATEMENTS.load(Ordering::SeqCst), 3);

        let out = io.output();
        assert!(out.contains("EXPECT_EQ(1 == 2)"));
        assert!(out.contains("EXPECT_TRUE(false)"));
        assert!(out.contains("[  FAILED  ] Soft.continues"));
    }

    #[test]
    fn all_passing_report_uses_plural_zero() {
        let _guard = serial();

        let io = MockIo::new();
        let mut runner = TestRunner::new(&io);
        runner.register("Suite", "T1", passing);
        runner.register("Suite", "markers", marker_only);

        assert_eq!(runner.run_all(), 0);

        let out = io.output();
        assert!(out.contains(": SUCCEED()\r\n"));
        assert!(out.contains("[  PASSED  ] 2 tests.\r\n"));
        assert!(!out.contains("listed below"));
        assert!(out.ends_with("\r\n0 FAILED TESTS\r\n"));
    }

    #[test]
    fn explicit_failure_primitives_share_the_outcome_and() {
        let _guard = serial();

        let io = MockIo::new();
        let mut runner = TestRunner::new(&io);
        runner.register("Explicit", "soft", explicit_soft_failure);
        runner.register("Explicit", "fatal", explicit_fatal);

        assert_eq!(runner.run_all(), 2);

        let out = io.output();
        assert!(out.contains("ADD_FAILURE(explicit failure)"));
        assert!(out.contains("FAIL(explicit failure)"));
        assert!(out.ends_with("2 FAILED TESTS\r\n"));
    }

    #[test]
    fn null_string_operand_fails_without_crashing() {
        let _guard = serial();

        let io = MockIo::new();
        let mut runner = TestRunner::new(&io);
        runner.register("Strings", "null_operand", null_string_operand);

        assert_eq!(runner.run_all(), 1);

        let out = io.output();
        assert!(out.contains("ASSERT_STREQ"));
        assert!(out.contains("Expected: \"(null)\", Actual: \"abc\""));
    }

    #[test]
    fn pointer_assertions_pass_on_real_and_null_pointers() {
        let _guard = serial();

        let io = MockIo::new();
        let mut runner = TestRunner::new(&io);
        runner.register("Pointers", "checks", pointer_checks);

        assert_eq!(runner.run_all(), 0);
    }

    #[test]
    fn float_near_failure_reports_bound() {
        let _guard = serial();

        let io = MockIo::new();
        let mut runner = TestRunner::new(&io);
        runner.register("Floats", "near", near_failure);

        assert_eq!(runner.run_all(), 1);

        let out = io.output();
        assert!(out.contains("ASSERT_NEAR(1.0 NEAR 2.0, error 0.5)"));
        assert!(out.contains("Value1: 1, Value2: 2, Diff: 1, Max Abs Error: 0.5"));
    }

    #[test]
    fn duration_correct_across_tick_wraparound() {
        let _guard = serial();

        let io = MockIo::with_ticks(&[0xFFFF_FFF0, 0x0000_0010]);
        let mut runner = TestRunner::new(&io);
        runner.register("Timing", "wraps", passing);

        runner.run_all();

        assert_eq!(runner.cases()[0].duration_ms, 32);
        assert!(io.output().contains("[       OK ] Timing.wraps (32 ms)\r\n"));
    }

    #[test]
    fn over_capacity_registration_reports_and_drops() {
        let _guard = serial();

        let io = MockIo::new();
        let mut runner = TestRunner::new(&io);
        for i in 0..MAX_TEST_CASES + 2 {
            runner.register("Cap", &format!("t{i}"), passing);
        }

        let diagnostics = io.output();
        assert_eq!(
            diagnostics.matches("ERROR: Max test cases reached; registration dropped.\r\n").count(),
            2
        );
        assert_eq!(runner.cases().len(), MAX_TEST_CASES);

        assert_eq!(runner.run_all(), 0);
        assert!(io.output().contains("[==========] Running 64 tests.\r\n"));
    }

    #[test]
    fn run_order_matches_registration_order() {
        let _guard = serial();

        let io = MockIo::new();
        let mut runner = TestRunner::new(&io);
        for name in ["first", "second", "third"] {
            runner.register("Order", name, passing);
        }

        runner.run_all();

        let out = io.output();
        let first = out.find("[ RUN      ] Order.first").unwrap();
        let second = out.find("[ RUN      ] Order.second").unwrap();
        let third = out.find("[ RUN      ] Order.third").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn second_run_reproduces_the_report() {
        let _guard = serial();

        let io = MockIo::new();
        let mut runner = TestRunner::new(&io);
        runner.register("Suite", "T1", passing);
        runner.register("Suite", "T2", fatal_on_second_statement);

        let first_failed = runner.run_all();
        let first = io.output();
        let second_failed = runner.run_all();
        let full = io.output();
        let second = String::from(&full[first.len()..]);

        assert_eq!(first_failed, second_failed);
        assert_eq!(first, second);
    }

    #[test]
    fn descriptor_registration_goes_through_the_registry() {
        let _guard = serial();

        static DESCRIPTORS: &[TestDescriptor] = &[
            TestDescriptor::new("Linked", "one", passing),
            TestDescriptor::new("Linked", "two", marker_only),
        ];

        let io = MockIo::new();
        let mut runner = TestRunner::new(&io);
        runner.register_descriptors(DESCRIPTORS);

        assert_eq!(runner.cases().len(), 2);
        assert_eq!(runner.cases()[0].suite(), "Linked");
        assert_eq!(runner.run_all(), 0);
    }
}
