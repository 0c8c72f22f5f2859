use serde::Serialize;

/// Aggregated progress of a single topic.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TopicStats {
    pub subtopic_count: usize,
    pub completed_count: usize,
    pub ongoing_count: usize,
    pub pct_completed: f64,
    pub pct_ongoing: f64,
    pub total_time_minutes: u32,
}

impl TopicStats {
    /// Progress bar value: `pct_completed` truncated to an integer in 0..=100.
    pub fn progress_value(&self) -> u8 {
        self.pct_completed.clamp(0.0, 100.0) as u8
    }

    /// "2/2 Completed (100.0%), 0/2 Ongoing (0.0%)"
    pub fn summary_line(&self) -> String {
        format!(
            "{}/{} Completed ({:.1}%), {}/{} Ongoing ({:.1}%)",
            self.completed_count,
            self.subtopic_count,
            self.pct_completed,
            self.ongoing_count,
            self.subtopic_count,
            self.pct_ongoing
        )
    }
}
