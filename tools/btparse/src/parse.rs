//! Line parser for the report text contract.
//!
//! The token spelling here mirrors what the runner emits. Lines that do not
//! match any contract token (boot logs, payload output) are ignored, except
//! inside a running test where the failure-detail block is collected.

use std::io::BufRead;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

const BANNER_PREFIX: &str = "[==========] Running ";
const RUN_PREFIX: &str = "[ RUN      ] ";
const OK_PREFIX: &str = "[       OK ] ";
const FAILED_PREFIX: &str = "[  FAILED  ] ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    Ok,
    Failed,
}

#[derive(Debug, Default)]
pub struct Failure {
    pub file: String,
    pub line: u32,
    pub assertion: String,
    pub expression: String,
    pub message: String,
}

#[derive(Debug)]
pub struct Test {
    pub name: String,
    pub status: Status,
    pub duration_ms: u32,
    pub failures: Vec<Failure>,
}

#[derive(Debug)]
pub struct Suite {
    pub name: String,
    pub tests: Vec<Test>,
}

#[derive(Debug, Default)]
pub struct Report {
    /// Test count announced by the run banner, if one was seen.
    pub declared_total: Option<u32>,
    pub suites: Vec<Suite>,
}

impl Report {
    pub fn from_reader(reader: impl BufRead) -> Result<Self, ParseError> {
        let mut report = Report::default();
        // Identity of the test currently accepting failure details.
        let mut current: Option<(String, String)> = None;

        for line in reader.lines() {
            let line = line?;
            let line = line.trim_end();

            if let Some(rest) = line.strip_prefix(BANNER_PREFIX) {
                if let Some(count) = rest.strip_suffix(" tests.") {
                    report.declared_total = count.parse().ok();
                    current = None;
                }
                continue;
            }

            if let Some(rest) = line.strip_prefix(RUN_PREFIX) {
                if let Some((suite, test)) = rest.split_once('.') {
                    report.start_test(suite, test);
                    current = Some((suite.to_string(), test.to_string()));
                } else {
                    warn!("malformed RUN line: {line}");
                }
                continue;
            }

            if let Some(rest) = line.strip_prefix(OK_PREFIX) {
                if let Some((suite, test, duration)) = split_result(rest) {
                    report.finish_test(&suite, &test, Status::Ok, duration);
                    current = None;
                }
                continue;
            }

            if let Some(rest) = line.strip_prefix(FAILED_PREFIX) {
                // Three shapes share the token: the per-test result line
                // (with a duration), the summary header, and the summary
                // listing. Only the first changes state.
                if let Some((suite, test, duration)) = split_result(rest) {
                    report.finish_test(&suite, &test, Status::Failed, duration);
                    current = None;
                }
                continue;
            }

            if let Some((suite, test)) = &current {
                report.collect_failure_detail(suite, test, line);
            }
        }

        Ok(report)
    }

    fn suite_mut(&mut self, name: &str) -> &mut Suite {
        if let Some(idx) = self.suites.iter().position(|s| s.name == name) {
            &mut self.suites[idx]
        } else {
            self.suites.push(Suite {
                name: name.to_string(),
                tests: Vec::new(),
            });
            self.suites.last_mut().unwrap()
        }
    }

    fn start_test(&mut self, suite: &str, test: &str) {
        self.suite_mut(suite).tests.push(Test {
            name: test.to_string(),
            status: Status::Running,
            duration_ms: 0,
            failures: Vec::new(),
        });
    }

    fn finish_test(&mut self, suite: &str, test: &str, status: Status, duration_ms: u32) {
        let suite = self.suite_mut(suite);
        match suite.tests.iter_mut().rev().find(|t| t.name == test) {
            Some(entry) => {
                entry.status = status;
                entry.duration_ms = duration_ms;
            }
            None => warn!("result for unknown test {}.{}", suite.name, test),
        }
    }

    fn collect_failure_detail(&mut self, suite: &str, test: &str, line: &str) {
        let suite = self.suite_mut(suite);
        let Some(entry) = suite.tests.iter_mut().rev().find(|t| t.name == test) else {
            return;
        };

        // `<file>:<line>: Failure` opens a new detail record.
        if let Some(location) = line.strip_suffix(": Failure") {
            if let Some((file, lineno)) = location.rsplit_once(':') {
                if let Ok(lineno) = lineno.parse() {
                    entry.failures.push(Failure {
                        file: file.to_string(),
                        line: lineno,
                        ..Failure::default()
                    });
                    return;
                }
            }
        }

        let Some(failure) = entry.failures.last_mut() else {
            return;
        };

        // `  KIND(expression)` on a two-space indent.
        if let Some(detail) = line.strip_prefix("  ") {
            if !detail.starts_with(' ') {
                if let Some((kind, rest)) = detail.split_once('(') {
                    if let Some(expr) = rest.strip_suffix(')') {
                        failure.assertion = kind.to_string();
                        failure.expression = expr.to_string();
                        return;
                    }
                }
            }
        }

        if let Some(message) = line.strip_prefix("    Message: ") {
            failure.message = message.to_string();
        }
    }

    pub fn total_run(&self) -> u32 {
        self.suites
            .iter()
            .flat_map(|s| &s.tests)
            .filter(|t| t.status != Status::Running)
            .count() as u32
    }

    pub fn total_passed(&self) -> u32 {
        self.count_with(Status::Ok)
    }

    pub fn total_failed(&self) -> u32 {
        self.count_with(Status::Failed)
    }

    fn count_with(&self, status: Status) -> u32 {
        self.suites
            .iter()
            .flat_map(|s| &s.tests)
            .filter(|t| t.status == status)
            .count() as u32
    }

    pub fn print_summary(&self) {
        if self.suites.is_empty() {
            println!("No test results captured.");
            return;
        }

        for suite in &self.suites {
            let passed = suite.tests.iter().filter(|t| t.status == Status::Ok).count();
            let failed = suite
                .tests
                .iter()
                .filter(|t| t.status == Status::Failed)
                .count();
            println!("\nSuite: {} (passed: {}, failed: {})", suite.name, passed, failed);
            for test in &suite.tests {
                let marker = match test.status {
                    Status::Ok => "PASS",
                    Status::Failed => "FAIL",
                    Status::Running => "????",
                };
                println!("  [{marker}] {} ({} ms)", test.name, test.duration_ms);
                for failure in &test.failures {
                    println!("      at {}:{}", failure.file, failure.line);
                    if !failure.assertion.is_empty() {
                        println!("      {}({})", failure.assertion, failure.expression);
                    }
                    if !failure.message.is_empty() {
                        println!("      {}", failure.message);
                    }
                }
            }
        }

        println!();
        println!("Total: {} run, {} passed, {} failed", self.total_run(), self.total_passed(), self.total_failed());
        if let Some(declared) = self.declared_total {
            if declared != self.total_run() {
                warn!("banner declared {} tests but {} results were seen", declared, self.total_run());
            }
        }
    }
}

/// Splits `Suite.test (D ms)` into its parts; `None` for lines without a
/// duration (summary listings).
fn split_result(rest: &str) -> Option<(String, String, u32)> {
    let (identity, duration) = rest.rsplit_once(" (")?;
    let duration = duration.strip_suffix(" ms)")?;
    let duration = duration.parse().ok()?;
    let (suite, test) = identity.split_once('.')?;
    Some((suite.to_string(), test.to_string(), duration))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
boot noise that is not part of the contract\r\n\
[==========] Running 3 tests.\r\n\
[ RUN      ] BasicMath.addition\r\n\
[       OK ] BasicMath.addition (2 ms)\r\n\
[ RUN      ] BasicMath.failing\r\n\
tests/math.rs:42: Failure\r\n\
\x20\x20ASSERT_EQ(4 == 5)\r\n\
\x20\x20\x20\x20Message: Expected: 4, Actual: 5\r\n\
[  FAILED  ] BasicMath.failing (0 ms)\r\n\
[ RUN      ] Strings.compare\r\n\
[       OK ] Strings.compare (1 ms)\r\n\
[==========] 3 tests ran. (3 ms total)\r\n\
[  PASSED  ] 2 tests.\r\n\
[  FAILED  ] 1 tests, listed below:\r\n\
[  FAILED  ] BasicMath.failing\r\n\
\r\n\
1 FAILED TEST\r\n";

    #[test]
    fn parses_full_report() {
        let report = Report::from_reader(SAMPLE.as_bytes()).unwrap();

        assert_eq!(report.declared_total, Some(3));
        assert_eq!(report.total_run(), 3);
        assert_eq!(report.total_passed(), 2);
        assert_eq!(report.total_failed(), 1);
        assert_eq!(report.suites.len(), 2);

        let math = &report.suites[0];
        assert_eq!(math.name, "BasicMath");
        assert_eq!(math.tests[0].status, Status::Ok);
        assert_eq!(math.tests[0].duration_ms, 2);
    }

    #[test]
    fn collects_failure_details() {
        let report = Report::from_reader(SAMPLE.as_bytes()).unwrap();

        let failing = &report.suites[0].tests[1];
        assert_eq!(failing.status, Status::Failed);
        assert_eq!(failing.failures.len(), 1);

        let failure = &failing.failures[0];
        assert_eq!(failure.file, "tests/math.rs");
        assert_eq!(failure.line, 42);
        assert_eq!(failure.assertion, "ASSERT_EQ");
        assert_eq!(failure.expression, "4 == 5");
        assert_eq!(failure.message, "Expected: 4, Actual: 5");
    }

    #[test]
    fn summary_listing_does_not_double_count() {
        // The trailing `[  FAILED  ] BasicMath.failing` listing line has no
        // duration and must not create or update a test.
        let report = Report::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(report.suites[0].tests.len(), 2);
    }

    #[test]
    fn empty_input_yields_empty_report() {
        let report = Report::from_reader("".as_bytes()).unwrap();
        assert_eq!(report.total_run(), 0);
        assert_eq!(report.declared_total, None);
    }

    #[test]
    fn windows_style_paths_keep_their_colon() {
        let log = "\
[==========] Running 1 tests.\r\n\
[ RUN      ] S.t\r\n\
C:\\src\\demo.rs:7: Failure\r\n\
  FAIL(explicit failure)\r\n\
[  FAILED  ] S.t (0 ms)\r\n";
        let report = Report::from_reader(log.as_bytes()).unwrap();
        let failure = &report.suites[0].tests[0].failures[0];
        assert_eq!(failure.file, "C:\\src\\demo.rs");
        assert_eq!(failure.line, 7);
    }
}
