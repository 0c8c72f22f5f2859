use crate::core::calculator::percent::percent_of;
use crate::core::calculator::{compute_time_by_topic, compute_topic_stats};
use crate::core::filter::Selection;
use crate::core::view::{OverviewData, Panel, StatusSlice, TopicMinutes, TopicPercent};
use crate::models::{ProgressRecord, Status};

/// Build the overview for `selection` over the full `records` table.
pub fn build_overview(records: &[ProgressRecord], selection: &Selection) -> Panel<OverviewData> {
    let filtered = selection.apply(records);
    let total = filtered.len();

    let completed = filtered.iter().filter(|r| r.status.is_completed()).count();
    let ongoing = filtered.iter().filter(|r| r.status.is_ongoing()).count();

    // No records → no percentages.
    let (Some(pct_completed), Some(pct_ongoing)) =
        (percent_of(completed, total), percent_of(ongoing, total))
    else {
        return Panel::NoData;
    };

    let time_by_topic = compute_time_by_topic(&filtered)
        .into_iter()
        .map(|(topic, minutes)| TopicMinutes { topic, minutes })
        .collect();

    let status_split = vec![
        StatusSlice {
            status: Status::Completed,
            count: completed,
        },
        StatusSlice {
            status: Status::Ongoing,
            count: ongoing,
        },
    ];

    // Percent completed per selected topic ignores the status filter.
    let full_stats = compute_topic_stats(records);
    let mut pct_completed_per_topic = Vec::new();
    let mut skipped_topics = Vec::new();

    for topic in &selection.topics {
        match full_stats.get(topic) {
            Some(stats) => pct_completed_per_topic.push(TopicPercent {
                topic: topic.clone(),
                pct_completed: stats.pct_completed,
            }),
            None => skipped_topics.push(topic.clone()),
        }
    }

    Panel::Ready(OverviewData {
        total_subtopics: total,
        completed,
        ongoing,
        pct_completed,
        pct_ongoing,
        time_by_topic,
        status_split,
        pct_completed_per_topic,
        skipped_topics,
    })
}
