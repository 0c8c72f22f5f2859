use crate::cli::parser::Commands;
use crate::core::calculator::compute_topic_stats;
use crate::errors::AppResult;
use crate::models::ProgressRecord;
use crate::utils::mins2readable;
use crate::utils::table::{Column, Table};

/// Handle the `topics` command: one line per topic with its counts.
pub fn handle(cmd: &Commands, records: &[ProgressRecord]) -> AppResult<()> {
    if let Commands::Topics = cmd {
        print!("{}", topics_table(records));
    }
    Ok(())
}

fn topics_table(records: &[ProgressRecord]) -> String {
    let stats = compute_topic_stats(records);

    let mut table = Table::new(vec![
        Column::new("Topic", 30),
        Column::new("Subtopics", 9),
        Column::new("Completed", 9),
        Column::new("Ongoing", 7),
        Column::new("Time", 8),
    ]);

    for (topic, s) in &stats {
        let time = if s.total_time_minutes == 0 {
            "-".to_string()
        } else {
            mins2readable(s.total_time_minutes)
        };
        table.add_row(vec![
            topic.clone(),
            s.subtopic_count.to_string(),
            s.completed_count.to_string(),
            s.ongoing_count.to_string(),
            time,
        ]);
    }

    table.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::load;

    #[test]
    fn lists_every_topic_once() {
        let out = topics_table(&load());
        // header + rule + 8 topics
        assert_eq!(out.lines().count(), 10);
        assert!(out.contains("Excel Sort & Filter"));
        assert!(out.contains("01h 14m"));
    }
}
