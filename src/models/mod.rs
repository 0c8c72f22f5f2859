pub mod record;
pub mod status;
pub mod topic_stats;

pub use record::{ProgressRecord, RawRecord};
pub use status::Status;
pub use topic_stats::TopicStats;
