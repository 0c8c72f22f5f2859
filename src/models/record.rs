use super::status::Status;
use crate::errors::{AppError, AppResult};
use serde::Serialize;

/// One row of learning progress.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressRecord {
    pub sequence_number: f64,     // may be fractional (1.7 sits between 1 and 2)
    pub topic: String,            // grouping key, not unique
    pub subtopic: String,         // human label
    pub subcategory: String,      // free text, may be empty
    pub duration_minutes: Option<u32>, // absent while ongoing and untracked
    pub status: Status,
}

impl ProgressRecord {
    pub fn new(
        sequence_number: f64,
        topic: &str,
        subtopic: &str,
        subcategory: &str,
        duration_minutes: Option<u32>,
        status: Status,
    ) -> Self {
        Self {
            sequence_number,
            topic: topic.to_string(),
            subtopic: subtopic.to_string(),
            subcategory: subcategory.to_string(),
            duration_minutes,
            status,
        }
    }

    /// Build a record from a literal row whose status is still text.
    /// Unknown statuses are rejected here, once, so the rest of the
    /// program only ever sees `Completed` or `Ongoing`.
    pub fn from_raw(raw: &RawRecord) -> AppResult<Self> {
        let status = Status::from_label(raw.status)
            .ok_or_else(|| AppError::InvalidStatus(raw.status.to_string()))?;

        Ok(Self::new(
            raw.sequence_number,
            raw.topic,
            raw.subtopic,
            raw.subcategory,
            raw.duration_minutes,
            status,
        ))
    }

    /// Sequence number as shown to users: `1`, `1.7`, `6.4`.
    pub fn sequence_str(&self) -> String {
        format!("{}", self.sequence_number)
    }

    /// Duration as shown to users; empty when nothing was logged.
    pub fn duration_str(&self) -> String {
        self.duration_minutes
            .map(|m| m.to_string())
            .unwrap_or_default()
    }
}

/// A literal dataset row before status validation.
#[derive(Debug, Clone, Copy)]
pub struct RawRecord {
    pub sequence_number: f64,
    pub topic: &'static str,
    pub subtopic: &'static str,
    pub subcategory: &'static str,
    pub duration_minutes: Option<u32>,
    pub status: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(status: &'static str) -> RawRecord {
        RawRecord {
            sequence_number: 1.7,
            topic: "Pivot Table",
            subtopic: "Pivot Table",
            subcategory: "",
            duration_minutes: None,
            status,
        }
    }

    #[test]
    fn from_raw_rejects_unknown_status() {
        let err = ProgressRecord::from_raw(&raw("Paused")).unwrap_err();
        assert!(matches!(err, AppError::InvalidStatus(s) if s == "Paused"));
    }

    #[test]
    fn display_helpers() {
        let rec = ProgressRecord::from_raw(&raw("Ongoing")).unwrap();
        assert_eq!(rec.status, Status::Ongoing);
        assert_eq!(rec.sequence_str(), "1.7");
        assert_eq!(rec.duration_str(), "");

        let whole = ProgressRecord::new(5.0, "T", "S", "", Some(33), Status::Completed);
        assert_eq!(whole.sequence_str(), "5");
        assert_eq!(whole.duration_str(), "33");
    }
}
