use billtracker::config::ConfigBuilder;
use billtracker::filter::{apply_filters, FilterState};
use billtracker::query::seed_from_query;
use billtracker::sort::{sort_cards, SortKey};
use billtracker::types::load_bills;
use tempfile::tempdir;

const BILLS_JSON: &str = r#"[
  {
    "bill_number": "HB 10",
    "title": "Concerning property tax relief",
    "description": "Provides a homestead exemption",
    "chamber": "House",
    "status": "Passed House",
    "threat_level": "beneficial",
    "last_action_date": "2025-02-10",
    "introduced_date": "2025-01-13"
  },
  {
    "bill_number": "HB 2",
    "title": "Expanding surveillance authority",
    "description": "Grants new data collection powers",
    "chamber": "House",
    "status": "In Committee",
    "threat_level": "critical",
    "last_action_date": "2025-03-01",
    "introduced_date": "2025-01-10"
  },
  {
    "bill_number": "SB 5100",
    "title": "State budget adjustments",
    "description": "",
    "chamber": "Senate",
    "status": "Passed Senate",
    "threat_level": "moderate",
    "last_action_date": "2025-01-05",
    "introduced_date": "2025-01-05"
  },
  {
    "bill_number": "I-2117",
    "title": "Malformed record with no chamber",
    "description": "",
    "chamber": "",
    "status": "",
    "threat_level": "low",
    "last_action_date": "2025-01-02",
    "introduced_date": ""
  }
]"#;

fn write_bills(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("bills.json");
    std::fs::write(&path, BILLS_JSON).unwrap();
    path
}

#[test]
fn load_drops_malformed_records() {
    let dir = tempdir().unwrap();
    let cards = load_bills(write_bills(dir.path())).unwrap();
    // The initiative record has no chamber and no recognizable prefix
    assert_eq!(cards.len(), 3);
}

#[test]
fn sorted_filtered_listing_matches_query_seed() {
    let dir = tempdir().unwrap();
    let data = write_bills(dir.path());
    let config = ConfigBuilder::new(&data, dir.path())
        .sort_key_str("recency")
        .build()
        .unwrap();

    let mut cards = load_bills(&config.data_file).unwrap();
    sort_cards(&mut cards, config.sort_key);

    let seeded = seed_from_query("chamber=house&status=committee");
    let outcome = apply_filters(&cards, &seeded.filters);

    assert_eq!(outcome.visible_count, 1);
    assert_eq!(outcome.results_label, "1 bill found");
    assert_eq!(cards[outcome.visible[0]].bill_number, "HB 2");
}

#[test]
fn recency_default_orders_newest_first() {
    let dir = tempdir().unwrap();
    let mut cards = load_bills(write_bills(dir.path())).unwrap();
    sort_cards(&mut cards, SortKey::default());

    let numbers: Vec<&str> = cards.iter().map(|c| c.bill_number.as_str()).collect();
    assert_eq!(numbers, vec!["HB 2", "HB 10", "SB 5100"]);
}

#[test]
fn natural_number_sort_over_loaded_data() {
    let dir = tempdir().unwrap();
    let mut cards = load_bills(write_bills(dir.path())).unwrap();
    sort_cards(&mut cards, SortKey::BillNumber);

    let numbers: Vec<&str> = cards.iter().map(|c| c.bill_number.as_str()).collect();
    assert_eq!(numbers, vec!["HB 2", "HB 10", "SB 5100"]);
}

#[test]
fn empty_filters_show_everything_regardless_of_sort() {
    let dir = tempdir().unwrap();
    let mut cards = load_bills(write_bills(dir.path())).unwrap();

    for key in [SortKey::Recency, SortKey::BillNumber, SortKey::Title, SortKey::Threat] {
        sort_cards(&mut cards, key);
        let outcome = apply_filters(&cards, &FilterState::default());
        assert_eq!(outcome.visible_count, 3);
        assert!(outcome.show_list);
    }
}
