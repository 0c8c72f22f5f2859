use crate::models::ProgressRecord;
use std::collections::BTreeMap;

/// Total logged minutes per topic, alphabetical by topic.
///
/// Missing durations count as zero, so a topic whose records have no
/// logged time maps to `0` rather than being left out.
pub fn compute_time_by_topic(records: &[ProgressRecord]) -> BTreeMap<String, u32> {
    let mut out: BTreeMap<String, u32> = BTreeMap::new();
    for rec in records {
        *out.entry(rec.topic.clone()).or_insert(0) += rec.duration_minutes.unwrap_or(0);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::apply;
    use crate::dataset::load;
    use crate::models::Status;

    #[test]
    fn untracked_topics_report_zero() {
        let time = compute_time_by_topic(&load());
        assert_eq!(time["VBA and Macros"], 0);
        assert_eq!(time["Excel Dashboard"], 0);
        assert_eq!(time["Data Analysis"], 46);
        assert_eq!(time.values().sum::<u32>(), 36 + 38 + 26 + 18 + 13 + 33 + 46);
    }

    #[test]
    fn follows_the_filtered_subset() {
        let records = load();
        let pivot = apply(&records, &["Pivot Table".to_string()], &Status::ALL);
        let time = compute_time_by_topic(&pivot);
        assert_eq!(time.len(), 1);
        assert_eq!(time["Pivot Table"], 33);
    }
}
