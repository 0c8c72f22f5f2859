// src/export/model.rs

use crate::core::view::{Panel, Report};
use serde::Serialize;

/// A report flattened to a header + string rows, shared by the CSV,
/// XLSX and PDF writers.
#[derive(Debug, Clone, PartialEq)]
pub struct TabularExport {
    pub title: String,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

impl TabularExport {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Flat record row, serialized by the CSV writer.
#[derive(Serialize, Clone, Debug)]
pub struct RecordExport {
    #[serde(rename = "SNo")]
    pub sequence_number: String,
    #[serde(rename = "Topic")]
    pub topic: String,
    #[serde(rename = "SubTopic")]
    pub subtopic: String,
    #[serde(rename = "SubCategory")]
    pub subcategory: String,
    #[serde(rename = "TotalTime_mins")]
    pub duration_minutes: Option<u32>,
    #[serde(rename = "CompletionStatus")]
    pub status: String,
}

const RECORD_HEADERS: [&str; 6] = [
    "SNo",
    "Topic",
    "SubTopic",
    "SubCategory",
    "TotalTime_mins",
    "CompletionStatus",
];

const TOPIC_HEADERS: [&str; 7] = [
    "Topic",
    "Completed",
    "Ongoing",
    "Subtopics",
    "PctCompleted",
    "PctOngoing",
    "Time_mins",
];

const OVERVIEW_HEADERS: [&str; 3] = ["Topic", "Time_mins", "PctCompleted"];

/// Flatten `report` into rows:
/// - detailed table → one row per record
/// - topic-wise     → one row per topic with its full breakdown
/// - overview       → one row per topic of the filtered data
///
/// A `NoData` panel gives the right headers and no rows.
pub fn report_to_table(report: &Report, page_title: &str) -> TabularExport {
    let title = format!("{} - {}", page_title, report.mode().title());

    match report {
        Report::DetailedTable(panel) => TabularExport {
            title,
            headers: RECORD_HEADERS.to_vec(),
            rows: panel
                .ready()
                .map(|t| {
                    t.records
                        .iter()
                        .map(|r| {
                            vec![
                                r.sequence_str(),
                                r.topic.clone(),
                                r.subtopic.clone(),
                                r.subcategory.clone(),
                                r.duration_str(),
                                r.status.to_string(),
                            ]
                        })
                        .collect()
                })
                .unwrap_or_default(),
        },
        Report::TopicWise(panel) => TabularExport {
            title,
            headers: TOPIC_HEADERS.to_vec(),
            rows: panel
                .ready()
                .map(|lines| {
                    lines
                        .iter()
                        .map(|l| {
                            vec![
                                l.topic.clone(),
                                l.stats.completed_count.to_string(),
                                l.stats.ongoing_count.to_string(),
                                l.stats.subtopic_count.to_string(),
                                format!("{:.1}", l.stats.pct_completed),
                                format!("{:.1}", l.stats.pct_ongoing),
                                l.stats.total_time_minutes.to_string(),
                            ]
                        })
                        .collect()
                })
                .unwrap_or_default(),
        },
        Report::Overview(panel) => TabularExport {
            title,
            headers: OVERVIEW_HEADERS.to_vec(),
            rows: match panel {
                Panel::NoData => Vec::new(),
                Panel::Ready(data) => data
                    .time_by_topic
                    .iter()
                    .map(|t| {
                        // per-topic percent comes from the unfiltered stats;
                        // topics outside the selection have no entry
                        let pct = data
                            .pct_completed_per_topic
                            .iter()
                            .find(|p| p.topic == t.topic)
                            .map(|p| format!("{:.1}", p.pct_completed))
                            .unwrap_or_default();
                        vec![t.topic.clone(), t.minutes.to_string(), pct]
                    })
                    .collect(),
            },
        },
    }
}

/// Records of a detailed-table report as serde rows (CSV with typed columns).
pub fn report_records(report: &Report) -> Option<Vec<RecordExport>> {
    let Report::DetailedTable(Panel::Ready(table)) = report else {
        return None;
    };
    Some(
        table
            .records
            .iter()
            .map(|r| RecordExport {
                sequence_number: r.sequence_str(),
                topic: r.topic.clone(),
                subtopic: r.subtopic.clone(),
                subcategory: r.subcategory.clone(),
                duration_minutes: r.duration_minutes,
                status: r.status.to_string(),
            })
            .collect(),
    )
}
