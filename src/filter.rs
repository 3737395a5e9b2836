use crate::types::{BillCard, ThreatLevel};

/// Filter result indicating whether a card should be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterResult {
    Keep,
    FilterOut,
}

/// Current filter inputs. An empty string means the corresponding predicate
/// is inactive (vacuously true). Rebuilt on every input change; seeded from
/// URL query parameters exactly once at load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub search: String,
    pub chamber: String,
    pub status: String,
    pub threat: String,
}

impl FilterState {
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty()
            && self.chamber.trim().is_empty()
            && self.status.trim().is_empty()
            && self.threat.trim().is_empty()
    }

    /// Clear all filter inputs back to defaults
    pub fn reset(&mut self) {
        *self = FilterState::default();
    }
}

/// View state produced by a filter pass. The typed equivalent of the page's
/// visibility toggles, results-count label, and empty-state placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome {
    /// Indices of visible cards, in current card order
    pub visible: Vec<usize>,
    pub visible_count: usize,
    /// Pluralized results label ("1 bill found" / "N bills found")
    pub results_label: String,
    pub show_empty_state: bool,
    /// The list container is hidden entirely when nothing matches
    pub show_list: bool,
}

/// Decide whether one card satisfies the conjunction of the four predicates.
pub fn should_keep(card: &BillCard, state: &FilterState) -> FilterResult {
    if !matches_search(card, &state.search) {
        return FilterResult::FilterOut;
    }
    if !matches_chamber(card, &state.chamber) {
        return FilterResult::FilterOut;
    }
    if !matches_status(card, &state.status) {
        return FilterResult::FilterOut;
    }
    if !matches_threat(card, &state.threat) {
        return FilterResult::FilterOut;
    }
    FilterResult::Keep
}

/// Search term is a substring of the bill number, title, or description
/// (all compared lowercased).
fn matches_search(card: &BillCard, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    card.bill_number.to_lowercase().contains(&term)
        || card.title.to_lowercase().contains(&term)
        || card.description.to_lowercase().contains(&term)
}

/// Substring containment, not equality: "house" matches "house floor".
fn matches_chamber(card: &BillCard, chamber: &str) -> bool {
    let chamber = chamber.trim().to_lowercase();
    if chamber.is_empty() {
        return true;
    }
    card.chamber.as_str().contains(&chamber)
}

/// Same containment semantics as the chamber predicate
fn matches_status(card: &BillCard, status: &str) -> bool {
    let status = status.trim().to_lowercase();
    if status.is_empty() {
        return true;
    }
    card.status.to_lowercase().contains(&status)
}

/// Exact case-insensitive equality. Threat levels are a small closed enum,
/// so an unrecognized filter value matches nothing.
fn matches_threat(card: &BillCard, threat: &str) -> bool {
    if threat.trim().is_empty() {
        return true;
    }
    ThreatLevel::parse(threat) == Some(card.threat)
}

/// Run a full filter pass over the cards in their current order.
pub fn apply_filters(cards: &[BillCard], state: &FilterState) -> FilterOutcome {
    let visible: Vec<usize> = cards
        .iter()
        .enumerate()
        .filter(|(_, card)| should_keep(card, state) == FilterResult::Keep)
        .map(|(idx, _)| idx)
        .collect();

    let visible_count = visible.len();
    let results_label = if visible_count == 1 {
        "1 bill found".to_string()
    } else {
        format!("{} bills found", visible_count)
    };

    FilterOutcome {
        visible,
        visible_count,
        results_label,
        show_empty_state: visible_count == 0,
        show_list: visible_count > 0,
    }
}
