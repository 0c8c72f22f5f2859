use super::percent::percent_of;
use crate::models::{ProgressRecord, Status, TopicStats};
use std::collections::BTreeMap;

/// Group `records` by topic and compute per-topic statistics.
///
/// Topics come out in alphabetical order. A topic with no records in the
/// input is simply absent from the result.
pub fn compute_topic_stats(records: &[ProgressRecord]) -> BTreeMap<String, TopicStats> {
    // -----------------------------
    // Bucket by topic
    // -----------------------------
    let mut buckets: BTreeMap<String, TopicStats> = BTreeMap::new();

    for rec in records {
        let entry = buckets.entry(rec.topic.clone()).or_default();
        entry.subtopic_count += 1;
        match rec.status {
            Status::Completed => entry.completed_count += 1,
            Status::Ongoing => entry.ongoing_count += 1,
        }
        entry.total_time_minutes += rec.duration_minutes.unwrap_or(0);
    }

    // -----------------------------
    // Percentages per bucket
    // -----------------------------
    for stats in buckets.values_mut() {
        // every bucket holds at least one record
        stats.pct_completed = percent_of(stats.completed_count, stats.subtopic_count).unwrap_or(0.0);
        stats.pct_ongoing = percent_of(stats.ongoing_count, stats.subtopic_count).unwrap_or(0.0);
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::apply;
    use crate::dataset::{load, topics};

    #[test]
    fn counts_add_up_to_record_count() {
        let records = load();
        let all_topics = topics(&records);

        for statuses in [
            vec![Status::Completed, Status::Ongoing],
            vec![Status::Completed],
            vec![Status::Ongoing],
        ] {
            let filtered = apply(&records, &all_topics, &statuses);
            let stats = compute_topic_stats(&filtered);
            let sum: usize = stats
                .values()
                .map(|s| s.completed_count + s.ongoing_count)
                .sum();
            assert_eq!(sum, filtered.len());
            for s in stats.values() {
                assert_eq!(s.completed_count + s.ongoing_count, s.subtopic_count);
            }
        }
    }

    #[test]
    fn percentages_sum_to_hundred() {
        let stats = compute_topic_stats(&load());
        for s in stats.values() {
            assert!(s.subtopic_count > 0);
            assert!((s.pct_completed + s.pct_ongoing - 100.0).abs() <= 0.1);
        }
    }

    #[test]
    fn full_dataset_breakdown() {
        let stats = compute_topic_stats(&load());
        assert_eq!(stats.len(), 8);

        let keys: Vec<&str> = stats.keys().map(String::as_str).collect();
        assert_eq!(keys[0], "Conditional Formatting");
        assert_eq!(keys[7], "VBA and Macros");

        let da = &stats["Data Analysis"];
        assert_eq!(da.subtopic_count, 2);
        assert_eq!(da.completed_count, 1);
        assert_eq!(da.pct_completed, 50.0);
        assert_eq!(da.pct_ongoing, 50.0);
        assert_eq!(da.total_time_minutes, 46);

        let sort = &stats["Excel Sort & Filter"];
        assert_eq!(sort.pct_completed, 100.0);
        assert_eq!(sort.total_time_minutes, 74);

        let vba = &stats["VBA and Macros"];
        assert_eq!(vba.pct_completed, 0.0);
        assert_eq!(vba.pct_ongoing, 100.0);
        assert_eq!(vba.total_time_minutes, 0);
    }

    #[test]
    fn empty_input_gives_empty_mapping() {
        assert!(compute_topic_stats(&[]).is_empty());
    }

    #[test]
    fn thirds_round_to_one_decimal() {
        let records = vec![
            ProgressRecord::new(1.0, "T", "a", "", Some(1), Status::Completed),
            ProgressRecord::new(2.0, "T", "b", "", Some(2), Status::Completed),
            ProgressRecord::new(3.0, "T", "c", "", None, Status::Ongoing),
        ];
        let stats = compute_topic_stats(&records);
        let t = &stats["T"];
        assert_eq!(t.pct_completed, 66.7);
        assert_eq!(t.pct_ongoing, 33.3);
        assert_eq!(t.progress_value(), 66);
        assert_eq!(t.summary_line(), "2/3 Completed (66.7%), 1/3 Ongoing (33.3%)");
    }
}
