use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

/// Completion status of a single subtopic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum)]
pub enum Status {
    Completed,
    Ongoing,
}

impl Status {
    /// Every status the dashboard recognises, in display order.
    pub const ALL: [Status; 2] = [Status::Completed, Status::Ongoing];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Completed => "Completed",
            Status::Ongoing => "Ongoing",
        }
    }

    /// Parse the label used in the literal dataset ("Completed" / "Ongoing").
    /// Anything else is rejected.
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim() {
            "Completed" => Some(Status::Completed),
            "Ongoing" => Some(Status::Ongoing),
            _ => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Status::Completed)
    }

    pub fn is_ongoing(&self) -> bool {
        matches!(self, Status::Ongoing)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
