//! Usage table: search by usage type and name, date sort. No refetch trigger;
//! the collection is supplied whole by the caller.

use tenantdesk_billing::UsageEvent;

use crate::table::TableController;

pub type UsageTable<S> = TableController<UsageEvent, S>;

#[cfg(test)]
mod tests {
    use super::*;
    use tenantdesk_listview::ListViewConfig;

    use crate::source::StaticSource;
    use crate::table::TableCommand;
    use crate::tables::testing::{sample_usage, session};

    #[test]
    fn both_search_boxes_combine() {
        let mut table = UsageTable::load(
            "usage",
            StaticSource::new(sample_usage()),
            Some(&session()),
            ListViewConfig::default(),
        );

        let ids: Vec<&str> = table.view().rows.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "2", "1"]);

        table
            .dispatch(TableCommand::search(UsageEvent::USAGE_NAME, "generate"), None)
            .unwrap();
        let ids: Vec<&str> = table.view().rows.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);

        table
            .dispatch(TableCommand::search(UsageEvent::USAGE_TYPE, "pdf"), None)
            .unwrap();
        let ids: Vec<&str> = table.view().rows.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["2"]);
    }
}
