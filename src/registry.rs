//! Fixed-capacity test registry.

use crate::context::TestResult;

/// Maximum number of test cases the registry can hold.
pub const MAX_TEST_CASES: usize = 64;

/// Maximum length in bytes of a suite or test name.
pub const MAX_NAME_LEN: usize = 64;

/// Entry point signature for a test body's dispatch wrapper.
pub type TestFn = fn() -> TestResult;

/// Fixed-capacity name storage. Longer names are truncated at a character
/// boundary; truncation is silent.
#[derive(Clone, Copy)]
struct NameBuf {
    buf: [u8; MAX_NAME_LEN],
    len: usize,
}

impl NameBuf {
    const EMPTY: Self = Self {
        buf: [0; MAX_NAME_LEN],
        len: 0,
    };

    fn from_str(s: &str) -> Self {
        let mut end = 0;
        for (idx, c) in s.char_indices() {
            if idx + c.len_utf8() > MAX_NAME_LEN {
                break;
            }
            end = idx + c.len_utf8();
        }
        let mut name = Self::EMPTY;
        name.buf[..end].copy_from_slice(&s.as_bytes()[..end]);
        name.len = end;
        name
    }

    fn as_str(&self) -> &str {
        core::str::from_utf8(&self.buf[..self.len]).unwrap_or("")
    }
}

/// A registered test and the outcome of its most recent run.
#[derive(Clone, Copy)]
pub struct TestCase {
    suite: NameBuf,
    name: NameBuf,
    pub(crate) func: TestFn,
    pub passed: bool,
    pub duration_ms: u32,
}

fn unregistered() -> TestResult {
    TestResult::Ok
}

impl TestCase {
    const UNUSED: Self = Self {
        suite: NameBuf::EMPTY,
        name: NameBuf::EMPTY,
        func: unregistered,
        passed: false,
        duration_ms: 0,
    };

    pub fn suite(&self) -> &str {
        self.suite.as_str()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

/// Static registration record emitted by the `#[bare_test]` attribute into
/// the `.baretest` link section.
#[derive(Clone, Copy)]
#[repr(C)]
pub struct TestDescriptor {
    pub suite: &'static str,
    pub name: &'static str,
    pub func: TestFn,
}

impl TestDescriptor {
    pub const fn new(suite: &'static str, name: &'static str, func: TestFn) -> Self {
        Self { suite, name, func }
    }
}

/// Ordered, fixed-capacity store of test cases. Insertion order is run
/// order.
pub struct Registry {
    cases: [TestCase; MAX_TEST_CASES],
    count: usize,
}

impl Registry {
    pub const fn new() -> Self {
        Self {
            cases: [TestCase::UNUSED; MAX_TEST_CASES],
            count: 0,
        }
    }

    /// Appends a test with a cleared outcome. Returns `false` when the
    /// registry is already full; existing entries are never disturbed.
    pub fn push(&mut self, suite: &str, name: &str, func: TestFn) -> bool {
        if self.count == MAX_TEST_CASES {
            return false;
        }
        self.cases[self.count] = TestCase {
            suite: NameBuf::from_str(suite),
            name: NameBuf::from_str(name),
            func,
            passed: false,
            duration_ms: 0,
        };
        self.count += 1;
        true
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn cases(&self) -> &[TestCase] {
        &self.cases[..self.count]
    }

    pub(crate) fn cases_mut(&mut self) -> &mut [TestCase] {
        &mut self.cases[..self.count]
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::format;
    use std::string::ToString;
    use std::vec::Vec;

    fn ok() -> TestResult {
        TestResult::Ok
    }

    #[test]
    fn preserves_insertion_order() {
        let mut registry = Registry::new();
        for i in 0..5 {
            assert!(registry.push("Suite", &format!("t{i}"), ok));
        }
        let names: Vec<_> = registry.cases().iter().map(|c| c.name()).collect();
        assert_eq!(names, ["t0", "t1", "t2", "t3", "t4"]);
    }

    #[test]
    fn rejects_past_capacity_without_corruption() {
        let mut registry = Registry::new();
        for i in 0..MAX_TEST_CASES {
            assert!(registry.push("Cap", &format!("t{i}"), ok));
        }
        assert!(!registry.push("Cap", "overflow", ok));
        assert_eq!(registry.len(), MAX_TEST_CASES);
        assert_eq!(registry.cases()[0].name(), "t0");
        assert_eq!(registry.cases()[MAX_TEST_CASES - 1].name(), "t63");
    }

    #[test]
    fn truncates_names_silently() {
        let mut registry = Registry::new();
        let long = "a".repeat(MAX_NAME_LEN + 10);
        registry.push(&long, "name", ok);
        assert_eq!(registry.cases()[0].suite().len(), MAX_NAME_LEN);
        assert_eq!(registry.cases()[0].suite(), "a".repeat(MAX_NAME_LEN));
    }

    #[test]
    fn truncates_at_character_boundary() {
        let mut registry = Registry::new();
        // 'é' is two bytes; 33 of them straddle the 64-byte limit.
        let multibyte = "é".repeat(33);
        registry.push("Suite", &multibyte, ok);
        let stored = registry.cases()[0].name().to_string();
        assert_eq!(stored, "é".repeat(32));
        assert_eq!(stored.len(), 64);
    }

    #[test]
    fn new_entries_start_cleared() {
        let mut registry = Registry::new();
        registry.push("Suite", "t", ok);
        let case = &registry.cases()[0];
        assert!(!case.passed);
        assert_eq!(case.duration_ms, 0);
    }
}
