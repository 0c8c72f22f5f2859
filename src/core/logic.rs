use crate::core::detailed_table::build_detailed_table;
use crate::core::filter::Selection;
use crate::core::overview::build_overview;
use crate::core::topic_wise::build_topic_wise;
use crate::core::view::{Report, ViewMode};
use crate::models::ProgressRecord;

pub struct Core;

impl Core {
    /// Render the view named by `selection.view`.
    ///
    /// Pure: the same records and selection always give the same report.
    pub fn render(records: &[ProgressRecord], selection: &Selection) -> Report {
        match selection.view {
            ViewMode::Overview => Report::Overview(build_overview(records, selection)),
            ViewMode::TopicWiseProgress => Report::TopicWise(build_topic_wise(records)),
            ViewMode::DetailedTable => Report::DetailedTable(build_detailed_table(records, selection)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::view::Panel;
    use crate::dataset::load;
    use crate::models::Status;

    #[test]
    fn dispatches_on_view_mode() {
        let records = load();
        for mode in [
            ViewMode::Overview,
            ViewMode::TopicWiseProgress,
            ViewMode::DetailedTable,
        ] {
            let report = Core::render(&records, &Selection::all(&records, mode));
            assert_eq!(report.mode(), mode);
            assert!(!report.is_no_data());
        }
    }

    #[test]
    fn ongoing_filter_leaves_topic_wise_untouched() {
        let records = load();
        let sel = Selection::all(&records, ViewMode::TopicWiseProgress).with_statuses([Status::Ongoing]);
        let filtered = Core::render(&records, &sel);
        let unfiltered = Core::render(&records, &Selection::all(&records, ViewMode::TopicWiseProgress));
        assert_eq!(filtered, unfiltered);

        let Report::TopicWise(Panel::Ready(lines)) = filtered else {
            panic!("expected topic lines");
        };
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn empty_selection_never_fails() {
        let records = load();
        for mode in [ViewMode::Overview, ViewMode::DetailedTable] {
            let sel = Selection::all(&records, mode).with_statuses(Vec::<Status>::new());
            assert!(Core::render(&records, &sel).is_no_data());
        }

        // topic-wise ignores the filters and still has data
        let sel = Selection::all(&records, ViewMode::TopicWiseProgress).with_topics(Vec::<String>::new());
        assert!(!Core::render(&records, &sel).is_no_data());
    }
}
