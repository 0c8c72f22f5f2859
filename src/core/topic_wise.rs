use crate::core::calculator::compute_topic_stats;
use crate::core::view::{Panel, TopicProgressLine};
use crate::models::ProgressRecord;

/// One progress line per topic of `records`.
///
/// Takes the full table and no selection: this view always shows every
/// topic with its complete status breakdown, whatever the sidebar filters.
pub fn build_topic_wise(records: &[ProgressRecord]) -> Panel<Vec<TopicProgressLine>> {
    let stats = compute_topic_stats(records);
    if stats.is_empty() {
        return Panel::NoData;
    }

    let lines = stats
        .into_iter()
        .map(|(topic, stats)| TopicProgressLine {
            summary: stats.summary_line(),
            percent: stats.progress_value(),
            topic,
            stats,
        })
        .collect();

    Panel::Ready(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::load;

    #[test]
    fn lists_every_topic_alphabetically() {
        let Panel::Ready(lines) = build_topic_wise(&load()) else {
            panic!("expected data");
        };

        assert_eq!(lines.len(), 8);
        let topics: Vec<&str> = lines.iter().map(|l| l.topic.as_str()).collect();
        let mut sorted = topics.clone();
        sorted.sort();
        assert_eq!(topics, sorted);

        let da = lines.iter().find(|l| l.topic == "Data Analysis").unwrap();
        assert_eq!(da.summary, "1/2 Completed (50.0%), 1/2 Ongoing (50.0%)");
        assert_eq!(da.percent, 50);

        let pivot = lines.iter().find(|l| l.topic == "Pivot Table").unwrap();
        assert_eq!(pivot.summary, "1/1 Completed (100.0%), 0/1 Ongoing (0.0%)");
        assert_eq!(pivot.percent, 100);
    }

    #[test]
    fn empty_table_is_no_data() {
        assert!(build_topic_wise(&[]).is_no_data());
    }
}
