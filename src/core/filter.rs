use crate::dataset;
use crate::models::{ProgressRecord, Status};
use serde::Serialize;

use super::view::ViewMode;

/// Keep records whose topic is in `topics` AND whose status is in
/// `statuses`. Order is preserved; an empty set on either side yields
/// an empty result.
pub fn apply(records: &[ProgressRecord], topics: &[String], statuses: &[Status]) -> Vec<ProgressRecord> {
    records
        .iter()
        .filter(|r| topics.iter().any(|t| t == &r.topic) && statuses.contains(&r.status))
        .cloned()
        .collect()
}

/// What the user picked for a single render.
///
/// Built fresh for each invocation from the command line and handed
/// explicitly to the renderer; nothing about it is global.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection {
    pub view: ViewMode,
    pub topics: Vec<String>,
    pub statuses: Vec<Status>,
}

impl Selection {
    /// Every topic of `records` and both statuses.
    pub fn all(records: &[ProgressRecord], view: ViewMode) -> Self {
        Self {
            view,
            topics: dataset::topics(records),
            statuses: Status::ALL.to_vec(),
        }
    }

    /// Replace the topic set, dropping duplicates but keeping the order given.
    pub fn with_topics<I, S>(mut self, topics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for t in topics {
            let t = t.into();
            if !out.contains(&t) {
                out.push(t);
            }
        }
        self.topics = out;
        self
    }

    pub fn with_statuses<I>(mut self, statuses: I) -> Self
    where
        I: IntoIterator<Item = Status>,
    {
        let mut out: Vec<Status> = Vec::new();
        for s in statuses {
            if !out.contains(&s) {
                out.push(s);
            }
        }
        self.statuses = out;
        self
    }

    /// Records of `records` matching this selection.
    pub fn apply(&self, records: &[ProgressRecord]) -> Vec<ProgressRecord> {
        apply(records, &self.topics, &self.statuses)
    }

    /// Selected topics that do not occur anywhere in `records`.
    pub fn unknown_topics(&self, records: &[ProgressRecord]) -> Vec<String> {
        self.topics
            .iter()
            .filter(|t| !records.iter().any(|r| r.topic == **t))
            .cloned()
            .collect()
    }
}
