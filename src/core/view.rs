//! View modes and the view models produced for each of them.
//!
//! A view model is what the presentation shells (terminal, HTML, file
//! exports) consume. Every view can be in a `NoData` state, which the
//! shells render as a placeholder.

use crate::models::{ProgressRecord, Status, TopicStats};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum ViewMode {
    #[default]
    #[serde(rename = "overview")]
    #[value(name = "overview")]
    Overview,

    #[serde(rename = "topics")]
    #[value(name = "topics", alias = "topic-wise")]
    TopicWiseProgress,

    #[serde(rename = "table")]
    #[value(name = "table", alias = "detailed")]
    DetailedTable,
}

impl ViewMode {
    pub fn title(&self) -> &'static str {
        match self {
            ViewMode::Overview => "Overview",
            ViewMode::TopicWiseProgress => "Topic-wise Progress",
            ViewMode::DetailedTable => "Detailed Table",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Overview => "overview",
            ViewMode::TopicWiseProgress => "topics",
            ViewMode::DetailedTable => "table",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Either a renderable payload or the "no data" placeholder.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum Panel<T> {
    NoData,
    Ready(T),
}

impl<T> Panel<T> {
    pub fn is_no_data(&self) -> bool {
        matches!(self, Panel::NoData)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Panel::Ready(v) => Some(v),
            Panel::NoData => None,
        }
    }
}

// ---------------------------
// Overview
// ---------------------------

/// A headline number with an optional percent delta ("70.0%").
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub label: &'static str,
    pub value: usize,
    pub delta: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicMinutes {
    pub topic: String,
    pub minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusSlice {
    pub status: Status,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicPercent {
    pub topic: String,
    pub pct_completed: f64,
}

impl TopicPercent {
    /// Bar label: rounded integer percent.
    pub fn label(&self) -> String {
        format!("{:.0}%", self.pct_completed)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewData {
    pub total_subtopics: usize,
    pub completed: usize,
    pub ongoing: usize,
    pub pct_completed: f64,
    pub pct_ongoing: f64,
    /// Minutes per topic over the filtered records.
    pub time_by_topic: Vec<TopicMinutes>,
    /// Completed vs ongoing counts over the filtered records.
    pub status_split: Vec<StatusSlice>,
    /// Percent completed per selected topic, computed over the whole
    /// dataset regardless of the status filter.
    pub pct_completed_per_topic: Vec<TopicPercent>,
    /// Selected topics with no entry in the per-topic statistics.
    pub skipped_topics: Vec<String>,
}

impl OverviewData {
    pub fn metrics(&self) -> [Metric; 3] {
        [
            Metric {
                label: "Total Subtopics",
                value: self.total_subtopics,
                delta: None,
            },
            Metric {
                label: "Completed Subtopics",
                value: self.completed,
                delta: Some(format!("{:.1}%", self.pct_completed)),
            },
            Metric {
                label: "Ongoing Subtopics",
                value: self.ongoing,
                delta: Some(format!("{:.1}%", self.pct_ongoing)),
            },
        ]
    }
}

// ---------------------------
// Topic-wise progress
// ---------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicProgressLine {
    pub topic: String,
    pub summary: String,
    /// Progress bar value, 0..=100.
    pub percent: u8,
    pub stats: TopicStats,
}

// ---------------------------
// Detailed table
// ---------------------------

/// Display colours for the table. Styling hints, not data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableStyle {
    pub foreground: &'static str,
    pub background: &'static str,
}

pub const TABLE_STYLE: TableStyle = TableStyle {
    foreground: "#ffffff",
    background: "#1e1e1e",
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailedTable {
    pub records: Vec<ProgressRecord>,
    pub style: TableStyle,
}

// ---------------------------
// Report
// ---------------------------

/// The rendered result of one view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", content = "panel", rename_all = "snake_case")]
pub enum Report {
    Overview(Panel<OverviewData>),
    TopicWise(Panel<Vec<TopicProgressLine>>),
    DetailedTable(Panel<DetailedTable>),
}

impl Report {
    pub fn mode(&self) -> ViewMode {
        match self {
            Report::Overview(_) => ViewMode::Overview,
            Report::TopicWise(_) => ViewMode::TopicWiseProgress,
            Report::DetailedTable(_) => ViewMode::DetailedTable,
        }
    }

    pub fn is_no_data(&self) -> bool {
        match self {
            Report::Overview(p) => p.is_no_data(),
            Report::TopicWise(p) => p.is_no_data(),
            Report::DetailedTable(p) => p.is_no_data(),
        }
    }
}
