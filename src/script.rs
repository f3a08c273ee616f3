//! Command script replay
//!
//! Feeds command lines to a session. The repl uses [`apply_line`] one line at
//! a time; `run` replays a whole script with [`replay`].

use crate::command::Command;
use crate::error::TodoError;
use crate::session::Session;
use log::{info, warn};
use thiserror::Error;

/// A script line that failed to parse or was rejected by the list.
#[derive(Debug, Error)]
#[error("line {line}: {source}")]
pub struct LineError {
    /// 1-based line number
    pub line: usize,
    #[source]
    pub source: TodoError,
}

/// Outcome of replaying a script.
#[derive(Debug, Default)]
pub struct ReplayReport {
    /// Commands applied successfully
    pub applied: usize,
    /// Lines that failed, in script order
    pub failures: Vec<LineError>,
    /// Set when replay stopped at a failing line
    pub stopped: bool,
}

impl ReplayReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Apply one command line to the session.
///
/// Returns `Ok(None)` for blank lines and comments, otherwise whether the
/// list changed.
pub fn apply_line(session: &mut Session, line: &str) -> Result<Option<bool>, TodoError> {
    match Command::parse_line(line)? {
        Some(command) => session.apply(&command).map(Some),
        None => Ok(None),
    }
}

/// Replay every line of `script` against the session.
///
/// Stops at the first failing line unless `keep_going` is set, in which case
/// failing lines are collected and the rest of the script still runs.
pub fn replay(session: &mut Session, script: &str, keep_going: bool) -> ReplayReport {
    let mut report = ReplayReport::default();

    for (index, line) in script.lines().enumerate() {
        match apply_line(session, line) {
            Ok(Some(_)) => report.applied += 1,
            Ok(None) => {}
            Err(source) => {
                let failure = LineError {
                    line: index + 1,
                    source,
                };
                warn!("Script {}", failure);
                report.failures.push(failure);
                if !keep_going {
                    report.stopped = true;
                    break;
                }
            }
        }
    }

    info!(
        "Replay finished: {} applied, {} failed, stopped={}",
        report.applied,
        report.failures.len(),
        report.stopped
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(session: &Session) -> Vec<&str> {
        session.list().iter().map(|item| item.text()).collect()
    }

    #[test]
    fn test_apply_line_skips_comments() {
        let mut session = Session::new();
        assert_eq!(apply_line(&mut session, "# nothing").unwrap(), None);
        assert_eq!(apply_line(&mut session, "").unwrap(), None);
        assert!(session.list().is_empty());
    }

    #[test]
    fn test_apply_line_reports_change() {
        let mut session = Session::new();
        assert_eq!(apply_line(&mut session, "add a").unwrap(), Some(true));
        assert_eq!(apply_line(&mut session, "up 0").unwrap(), Some(false));
        assert_eq!(apply_line(&mut session, "list").unwrap(), Some(false));
    }

    #[test]
    fn test_apply_line_parse_error() {
        let mut session = Session::new();
        let err = apply_line(&mut session, "frob").unwrap_err();
        assert!(matches!(err, TodoError::InvalidCommand(_)));
    }

    #[test]
    fn test_replay_clean_script() {
        let mut session = Session::new();
        let report = replay(&mut session, "add a\n# note\nadd b\ndown 0\n", false);

        assert!(report.is_clean());
        assert!(!report.stopped);
        assert_eq!(report.applied, 3);
        assert_eq!(texts(&session), vec!["b", "a"]);
    }

    #[test]
    fn test_replay_stops_at_first_failure() {
        let mut session = Session::new();
        let report = replay(&mut session, "add a\ntoggle 5\nadd b\nfrob\n", false);

        assert!(report.stopped);
        assert_eq!(report.applied, 1);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].line, 2);
        assert!(matches!(report.failures[0].source, TodoError::IndexOutOfRange { index: 5, len: 1 }));
        assert_eq!(texts(&session), vec!["a"]);
    }

    #[test]
    fn test_replay_keep_going_counts_failures() {
        let mut session = Session::new();
        let report = replay(&mut session, "add a\ntoggle 5\nadd b\nfrob\nadd   \nremove 0\n", true);

        assert!(!report.stopped);
        assert_eq!(report.applied, 3);
        let lines: Vec<usize> = report.failures.iter().map(|f| f.line).collect();
        assert_eq!(lines, vec![2, 4, 5]);
        assert_eq!(texts(&session), vec!["b"]);
    }

    #[test]
    fn test_line_error_display() {
        let err = LineError {
            line: 3,
            source: TodoError::out_of_range(4, 2),
        };
        assert_eq!(err.to_string(), "line 3: Index out of range: 4 (list has 2 items)");
    }
}
