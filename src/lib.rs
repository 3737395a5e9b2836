//! Filter/sort engine and comment composer for a legislative bill tracker.
//!
//! This library provides the typed core behind the tracker's bill list:
//! conjunctive predicate filtering and stable sorting over bill card
//! records, plus a comment composer that fills stance templates with the
//! user's own words and a persisted quick-fill contact record.

pub mod clipboard;
pub mod compose;
pub mod config;
pub mod error;
pub mod filter;
pub mod notify;
pub mod query;
pub mod schedule;
pub mod sort;
pub mod storage;
pub mod types;

pub use clipboard::{copy_to_clipboard, CopyMethod};
pub use compose::{generate_comment, TemplateOverrides, TemplateSet, REASON_TOKENS};
pub use config::{default_storage_dir, Config, ConfigBuilder};
pub use error::{Error, Result};
pub use filter::{apply_filters, should_keep, FilterOutcome, FilterResult, FilterState};
pub use notify::{Notice, Notifier, Severity};
pub use query::{seed_from_query, SeededView};
pub use schedule::{Debouncer, SEARCH_DEBOUNCE};
pub use sort::{natural_cmp, sort_cards, SortKey};
pub use storage::{FileStorage, MemoryStorage, ProfileStore, Storage};
pub use types::{load_bills, BillCard, Chamber, ContactInfo, RawBill, Stance, ThreatLevel};

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::compose::{generate_comment, TemplateOverrides, TemplateSet};
    pub use crate::config::{Config, ConfigBuilder};
    pub use crate::error::{Error, Result};
    pub use crate::filter::{apply_filters, FilterOutcome, FilterState};
    pub use crate::sort::{sort_cards, SortKey};
    pub use crate::storage::{FileStorage, ProfileStore, Storage};
    pub use crate::types::{load_bills, BillCard, ContactInfo, Stance};
}
