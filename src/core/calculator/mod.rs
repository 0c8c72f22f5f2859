pub mod percent;
pub mod time_by_topic;
pub mod topic_stats;

pub use time_by_topic::compute_time_by_topic;
pub use topic_stats::compute_topic_stats;
