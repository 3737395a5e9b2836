use url::form_urlencoded;

use crate::filter::FilterState;
use crate::sort::SortKey;

/// Filter and sort inputs seeded from a shareable URL query string. Read
/// exactly once at load; nothing re-reads or writes the query afterward.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeededView {
    pub filters: FilterState,
    pub sort: SortKey,
}

impl SeededView {
    /// The reset operation: clears every filter input and returns the sort
    /// order to recency in one step.
    pub fn reset(&mut self) {
        *self = SeededView::default();
    }
}

/// Parse a query string into initial filter state. Accepts either a bare
/// query ("search=tax&chamber=house") or one with a leading '?'. Recognized
/// keys are `search`, `chamber`, `status`, `threat`, and `sort`; unknown
/// keys are ignored.
pub fn seed_from_query(query: &str) -> SeededView {
    let query = query.trim().trim_start_matches('?');
    let mut view = SeededView::default();

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        let value = value.into_owned();
        match key.as_ref() {
            "search" => view.filters.search = value,
            "chamber" => view.filters.chamber = value,
            "status" => view.filters.status = value,
            "threat" => view.filters.threat = value,
            "sort" => view.sort = SortKey::from(value.as_str()),
            _ => {}
        }
    }

    view
}
