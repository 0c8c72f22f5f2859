//! Embedded learning-progress dataset.
//!
//! The records are compiled into the binary; there is no import path.
//! `load()` always yields the same rows in the same order.

use crate::models::{ProgressRecord, RawRecord};

const ROWS: [RawRecord; 10] = [
    row(1.0, "Excel Sort & Filter", "Excel Sort & Filter Part1", "Sum", Some(36), "Completed"),
    row(
        1.7,
        "Excel Sort & Filter",
        "Excel Sort & Filter Part2",
        "Connecting data with different options",
        Some(38),
        "Completed",
    ),
    row(2.0, "Functions in Excel", "Sum", "Sumif", Some(26), "Completed"),
    row(3.0, "Conditional Formatting", "Conditional Formatting", "Greater Than", Some(18), "Completed"),
    row(4.0, "Data Validation", "Data Validation", "Data Validation Basic", Some(13), "Completed"),
    row(5.0, "Pivot Table", "Pivot Table", "Pivot Table Basic", Some(33), "Completed"),
    row(6.0, "Data Analysis", "Data Analysis Part 1", "VLookUp", Some(46), "Completed"),
    row(6.4, "Data Analysis", "Data Analysis Part 2", "Ongoing", None, "Ongoing"),
    row(7.0, "VBA and Macros", "VBA and Macros Part 1", "", None, "Ongoing"),
    row(8.0, "Excel Dashboard", "Excel Dashboard Part 1", "", None, "Ongoing"),
];

const fn row(
    sequence_number: f64,
    topic: &'static str,
    subtopic: &'static str,
    subcategory: &'static str,
    duration_minutes: Option<u32>,
    status: &'static str,
) -> RawRecord {
    RawRecord {
        sequence_number,
        topic,
        subtopic,
        subcategory,
        duration_minutes,
        status,
    }
}

/// Load the embedded dataset.
pub fn load() -> Vec<ProgressRecord> {
    build(&ROWS)
}

/// Turn literal rows into records, keeping only rows whose status is
/// Completed or Ongoing. Input order is preserved.
pub fn build(rows: &[RawRecord]) -> Vec<ProgressRecord> {
    rows.iter()
        .filter_map(|raw| ProgressRecord::from_raw(raw).ok())
        .collect()
}

/// Distinct topics in first-seen order.
pub fn topics(records: &[ProgressRecord]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for rec in records {
        if !out.iter().any(|t| t == &rec.topic) {
            out.push(rec.topic.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Status;

    #[test]
    fn load_is_stable_and_ordered() {
        let a = load();
        let b = load();
        assert_eq!(a.len(), 10);
        assert_eq!(a, b);

        let seq: Vec<f64> = a.iter().map(|r| r.sequence_number).collect();
        assert_eq!(seq, vec![1.0, 1.7, 2.0, 3.0, 4.0, 5.0, 6.0, 6.4, 7.0, 8.0]);
    }

    #[test]
    fn build_drops_unrecognised_statuses() {
        let rows = [
            row(1.0, "A", "A1", "", Some(5), "Completed"),
            row(2.0, "A", "A2", "", None, "Abandoned"),
            row(3.0, "B", "B1", "", None, "Ongoing"),
        ];

        let records = build(&rows);
        assert_eq!(records.len(), 2);
        assert!(
            records
                .iter()
                .all(|r| matches!(r.status, Status::Completed | Status::Ongoing))
        );
        assert_eq!(records[1].topic, "B");
    }

    #[test]
    fn topics_in_first_seen_order() {
        let topics = topics(&load());
        assert_eq!(
            topics,
            vec![
                "Excel Sort & Filter",
                "Functions in Excel",
                "Conditional Formatting",
                "Data Validation",
                "Pivot Table",
                "Data Analysis",
                "VBA and Macros",
                "Excel Dashboard",
            ]
        );
    }

    #[test]
    fn ongoing_rows_have_no_duration() {
        for rec in load().iter().filter(|r| r.status.is_ongoing()) {
            assert_eq!(rec.duration_minutes, None);
        }
    }
}
