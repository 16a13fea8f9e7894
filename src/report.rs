//! Renders a [`RunReport`] for human and machine consumers.
//!
//! The text renderer writes one line per outcome in run order, failure
//! details with an operand diff where one is available, and a closing
//! summary. All output goes to the caller-supplied sink; rendering has no
//! other side effects.

use std::io::{self, Write};

use difference::{Changeset, Difference};
use termcolor::{Color, ColorSpec, WriteColor};

use crate::runner::{FailureCause, Outcome, RunReport};

/// Writes the report as colored text.
pub fn render(report: &RunReport, out: &mut dyn WriteColor) -> io::Result<()> {
    for outcome in &report.outcomes {
        match outcome {
            Outcome::Passed { name } => {
                colored(out, "PASS", Color::Green, false)?;
                writeln!(out, ": {}", name)?;
            }
            Outcome::Failed {
                name,
                reason,
                cause,
                expected,
                actual,
            } => {
                colored(out, "FAIL", Color::Red, true)?;
                writeln!(out, ": {}", name)?;
                writeln!(out, "  reason: {}", reason)?;
                if *cause == FailureCause::Panic {
                    writeln!(out, "  signal: panic")?;
                }
                if let (Some(expected), Some(actual)) = (expected, actual) {
                    render_diff(out, expected, actual)?;
                }
            }
        }
    }

    write!(out, "\nRun summary: total {}, ", report.total)?;
    colored(out, "passed", Color::Green, false)?;
    write!(out, " {}, ", report.passed_count)?;
    colored(out, "failed", Color::Red, false)?;
    writeln!(out, " {}", report.failed_count)?;

    if report.failed_count > 0 {
        writeln!(out, "\nStill to solve:")?;
        for outcome in &report.outcomes {
            if !outcome.is_passed() {
                writeln!(out, "  - {}", outcome.name())?;
            }
        }
    }
    Ok(())
}

/// Writes the report as pretty-printed JSON.
pub fn render_json(report: &RunReport, out: &mut dyn Write) -> io::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(out, "{}", json)
}

fn render_diff(out: &mut dyn WriteColor, expected: &str, actual: &str) -> io::Result<()> {
    let changeset = Changeset::new(expected, actual, "\n");
    for diff in &changeset.diffs {
        match diff {
            Difference::Same(text) => {
                for line in text.lines() {
                    writeln!(out, "      {}", line)?;
                }
            }
            Difference::Rem(text) => {
                for line in text.lines() {
                    colored(out, &format!("    - {}", line), Color::Green, false)?;
                    writeln!(out)?;
                }
            }
            Difference::Add(text) => {
                for line in text.lines() {
                    colored(out, &format!("    + {}", line), Color::Red, false)?;
                    writeln!(out)?;
                }
            }
        }
    }
    Ok(())
}

fn colored(out: &mut dyn WriteColor, text: &str, color: Color, bold: bool) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(bold))?;
    write!(out, "{}", text)?;
    out.reset()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::RunReport;
    use termcolor::Buffer;

    fn rendered(report: &RunReport) -> String {
        let mut buffer = Buffer::no_color();
        render(report, &mut buffer).unwrap();
        String::from_utf8(buffer.into_inner()).unwrap()
    }

    #[test]
    fn summary_line_carries_all_counts() {
        let report = RunReport::from_outcomes(vec![
            Outcome::Passed {
                name: "a".to_string(),
            },
            Outcome::Failed {
                name: "b".to_string(),
                reason: "expected 5 but got 0".to_string(),
                cause: FailureCause::Check,
                expected: Some("5".to_string()),
                actual: Some("0".to_string()),
            },
        ]);

        let text = rendered(&report);
        assert!(text.contains("PASS: a"));
        assert!(text.contains("FAIL: b"));
        assert!(text.contains("Run summary: total 2, passed 1, failed 1"));
        assert!(text.contains("- 5"));
        assert!(text.contains("+ 0"));
        assert!(text.contains("Still to solve:\n  - b"));
    }
}
