use crate::core::filter::Selection;
use crate::core::view::{DetailedTable, Panel, TABLE_STYLE};
use crate::models::ProgressRecord;

/// Filtered records, one row each, in dataset order.
pub fn build_detailed_table(records: &[ProgressRecord], selection: &Selection) -> Panel<DetailedTable> {
    let rows = selection.apply(records);
    if rows.is_empty() {
        return Panel::NoData;
    }

    Panel::Ready(DetailedTable {
        records: rows,
        style: TABLE_STYLE,
    })
}
