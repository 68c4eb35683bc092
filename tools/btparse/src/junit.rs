//! JUnit XML output for CI consumption.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::parse::{ParseError, Report, Status};

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

/// Writes `report` as JUnit XML, one `<testsuite>` per suite.
pub fn write_junit(path: &Path, report: &Report) -> Result<(), ParseError> {
    let mut xml = String::new();

    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    writeln!(
        xml,
        "<testsuites tests=\"{}\" failures=\"{}\">",
        report.total_run(),
        report.total_failed()
    )
    .unwrap();

    for suite in &report.suites {
        let failures = suite
            .tests
            .iter()
            .filter(|t| t.status == Status::Failed)
            .count();
        writeln!(
            xml,
            "  <testsuite name=\"{}\" tests=\"{}\" failures=\"{}\">",
            escape(&suite.name),
            suite.tests.len(),
            failures
        )
        .unwrap();

        for test in &suite.tests {
            let time = test.duration_ms as f64 / 1000.0;
            if test.failures.is_empty() && test.status != Status::Failed {
                writeln!(
                    xml,
                    "    <testcase name=\"{}\" classname=\"{}\" time=\"{:.3}\"/>",
                    escape(&test.name),
                    escape(&suite.name),
                    time
                )
                .unwrap();
                continue;
            }

            writeln!(
                xml,
                "    <testcase name=\"{}\" classname=\"{}\" time=\"{:.3}\">",
                escape(&test.name),
                escape(&suite.name),
                time
            )
            .unwrap();
            for failure in &test.failures {
                writeln!(
                    xml,
                    "      <failure type=\"{}\" message=\"{}\">{}:{}: {}({})</failure>",
                    escape(&failure.assertion),
                    escape(&failure.message),
                    escape(&failure.file),
                    failure.line,
                    escape(&failure.assertion),
                    escape(&failure.expression)
                )
                .unwrap();
            }
            if test.failures.is_empty() {
                xml.push_str("      <failure message=\"test failed\"/>\n");
            }
            xml.push_str("    </testcase>\n");
        }

        xml.push_str("  </testsuite>\n");
    }

    xml.push_str("</testsuites>\n");

    fs::write(path, xml)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_xml_metacharacters() {
        assert_eq!(escape("a < b && c > \"d\""), "a &lt; b &amp;&amp; c &gt; &quot;d&quot;");
    }
}
