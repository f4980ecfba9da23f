//! Interactive Session
//!
//! Prompt loop that collects the three fields, submits them, and prints the
//! result or the validation messages. The only state kept between rounds is
//! the previous round's raw input, offered back as the default for each
//! prompt.

use crate::executor::{format_human_output, submit};
use std::io::{BufRead, Write};
use trimmean_input::{DigitsPolicy, RawInput};

/// Counts for a finished session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionStats {
    /// Submitted rounds
    pub rounds: usize,
    /// Rounds that produced a result
    pub computed: usize,
}

/// Interactive prompt loop over arbitrary reader/writer pairs
pub struct Session<R, W> {
    reader: R,
    writer: W,
    policy: DigitsPolicy,
    show_trimmed: bool,
    last: RawInput,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session; `initial` seeds the prompt defaults
    pub fn new(reader: R, writer: W, policy: DigitsPolicy, initial: RawInput) -> Self {
        Self {
            reader,
            writer,
            policy,
            show_trimmed: true,
            last: initial,
        }
    }

    /// Whether to list surviving elements after each result
    pub fn show_trimmed(mut self, show: bool) -> Self {
        self.show_trimmed = show;
        self
    }

    /// Raw input of the most recent round
    pub fn last_input(&self) -> &RawInput {
        &self.last
    }

    /// Run until end of input or a quit command
    pub fn run(&mut self) -> std::io::Result<SessionStats> {
        let mut stats = SessionStats::default();
        writeln!(
            self.writer,
            "Trimmean interactive mode. Empty line keeps the value in brackets, :q quits."
        )?;

        loop {
            let Some(array) = self.prompt("array", &self.last.array.clone())? else {
                break;
            };
            let Some(percent) = self.prompt("percent", &self.last.percent.clone())? else {
                break;
            };
            let Some(digits) = self.prompt("digits", &self.last.digits.clone())? else {
                break;
            };

            let raw = RawInput::new(array, percent, digits);
            let report = submit(&raw, self.policy);
            stats.rounds += 1;
            if report.is_valid() {
                stats.computed += 1;
            }
            tracing::debug!(round = stats.rounds, valid = report.is_valid(), "session round");

            write!(self.writer, "{}", format_human_output(&report, self.show_trimmed))?;
            writeln!(self.writer)?;
            self.last = raw;
        }

        Ok(stats)
    }

    /// Prompt for one field. `None` means the session should end.
    fn prompt(&mut self, label: &str, previous: &str) -> std::io::Result<Option<String>> {
        if previous.is_empty() {
            write!(self.writer, "{}: ", label)?;
        } else {
            write!(self.writer, "{} [{}]: ", label, previous)?;
        }
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let value = line.trim_end_matches(['\r', '\n']);
        if matches!(value.trim(), ":q" | "quit" | "exit") {
            return Ok(None);
        }
        if value.trim().is_empty() {
            return Ok(Some(previous.to_string()));
        }
        Ok(Some(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(script: &str, policy: DigitsPolicy) -> (SessionStats, String, RawInput) {
        let mut output = Vec::new();
        let mut session = Session::new(Cursor::new(script), &mut output, policy, RawInput::default());
        let stats = session.run().unwrap();
        let last = session.last_input().clone();
        drop(session);
        (stats, String::from_utf8(output).unwrap(), last)
    }

    #[test]
    fn test_single_round_then_eof() {
        let (stats, output, last) = run_session("5,3,1,4,2\n40\n2\n", DigitsPolicy::Required);

        assert_eq!(stats, SessionStats { rounds: 1, computed: 1 });
        assert!(output.contains("✓ 3.00\n"));
        assert_eq!(last, RawInput::new("5,3,1,4,2", "40", "2"));
    }

    #[test]
    fn test_empty_line_reuses_previous_value() {
        let script = "1,2,3,4,5\n40\n1\n\n0\n\n:q\n";
        let (stats, output, last) = run_session(script, DigitsPolicy::Required);

        assert_eq!(stats, SessionStats { rounds: 2, computed: 2 });
        assert!(output.contains("array [1,2,3,4,5]: "));
        assert!(output.contains("✓ 3.0\n"));
        assert_eq!(last, RawInput::new("1,2,3,4,5", "0", "1"));
    }

    #[test]
    fn test_invalid_round_continues() {
        let script = "1,2\n\n\n1,2,3\n0\n0\nquit\n";
        let (stats, output, _) = run_session(script, DigitsPolicy::Required);

        assert_eq!(stats, SessionStats { rounds: 2, computed: 1 });
        assert!(output.contains("✗ array: At least 3 numbers are required\n"));
        assert!(output.contains("✗ percent: Percent is required\n"));
        assert!(output.contains("✓ 2\n"));
    }

    #[test]
    fn test_default_digits_policy() {
        let (stats, output, _) = run_session("1 2 3\n0\n\n", DigitsPolicy::Default(2));
        assert_eq!(stats.computed, 1);
        assert!(output.contains("✓ 2.00\n"));
    }
}
