use std::fmt;

use chrono::{DateTime, Local};

pub const FAILED_MARKER: &str = "(Failed!)";

/// Content of the status label.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Updating,
    Polled(DateTime<Local>),
    Failed(DateTime<Local>),
}

impl Status {
    /// Failures are rendered distinctly by frontends.
    pub fn is_failure(&self) -> bool {
        matches!(self, Status::Failed(_))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Idle => Ok(()),
            Status::Updating => f.write_str("Updating..."),
            Status::Polled(at) => write!(f, "{}", at.format("%H:%M:%S")),
            Status::Failed(at) => {
                write!(f, "{} {}", at.format("%a %b %d %Y %H:%M:%S %:z"), FAILED_MARKER)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 1, 2, 13, 4, 5).unwrap()
    }

    #[test]
    fn polled_shows_local_time() {
        assert_eq!(Status::Polled(at()).to_string(), "13:04:05");
        assert!(!Status::Polled(at()).is_failure());
    }

    #[test]
    fn failed_carries_date_and_marker() {
        let s = Status::Failed(at());
        let text = s.to_string();
        assert!(text.starts_with("Tue Jan 02 2024 13:04:05"));
        assert!(text.ends_with(FAILED_MARKER));
        assert!(s.is_failure());
    }

    #[test]
    fn updating_text() {
        assert_eq!(Status::Updating.to_string(), "Updating...");
        assert_eq!(Status::Idle.to_string(), "");
    }
}
