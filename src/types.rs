use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

/// Threat level assigned to a bill by the scoring pipeline (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThreatLevel {
    Critical,
    High,
    Moderate,
    Low,
    Beneficial,
    Unknown,
}

impl ThreatLevel {
    /// Parse a threat level case-insensitively. Returns `None` for values
    /// outside the closed set so malformed records fail closed.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "critical" => Some(ThreatLevel::Critical),
            "high" => Some(ThreatLevel::High),
            "moderate" => Some(ThreatLevel::Moderate),
            "low" => Some(ThreatLevel::Low),
            "beneficial" => Some(ThreatLevel::Beneficial),
            "unknown" => Some(ThreatLevel::Unknown),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThreatLevel::Critical => "critical",
            ThreatLevel::High => "high",
            ThreatLevel::Moderate => "moderate",
            ThreatLevel::Low => "low",
            ThreatLevel::Beneficial => "beneficial",
            ThreatLevel::Unknown => "unknown",
        }
    }

    /// Ordering rank, most urgent first
    pub fn rank(&self) -> u8 {
        match self {
            ThreatLevel::Critical => 0,
            ThreatLevel::High => 1,
            ThreatLevel::Moderate => 2,
            ThreatLevel::Low => 3,
            ThreatLevel::Beneficial => 4,
            ThreatLevel::Unknown => 5,
        }
    }
}

/// Legislative chamber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chamber {
    House,
    Senate,
}

impl Chamber {
    /// Parse a chamber string. Substring match tolerates values like
    /// "House Floor"; anything naming neither chamber fails closed.
    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        if lower.contains("house") {
            Some(Chamber::House)
        } else if lower.contains("senate") {
            Some(Chamber::Senate)
        } else {
            None
        }
    }

    /// Derive the chamber from the bill number prefix (HB/HJR/HCR/HR are
    /// House bills, SB/SJR/SCR/SR are Senate bills).
    pub fn from_bill_number(bill_number: &str) -> Option<Self> {
        let upper = bill_number.trim().to_uppercase();
        const HOUSE_PREFIXES: [&str; 4] = ["HB", "HJR", "HCR", "HR"];
        const SENATE_PREFIXES: [&str; 4] = ["SB", "SJR", "SCR", "SR"];
        if HOUSE_PREFIXES.iter().any(|p| upper.starts_with(p)) {
            Some(Chamber::House)
        } else if SENATE_PREFIXES.iter().any(|p| upper.starts_with(p)) {
            Some(Chamber::Senate)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Chamber::House => "house",
            Chamber::Senate => "senate",
        }
    }
}

/// A user's declared position on a bill, used to select a comment template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stance {
    Support,
    Oppose,
    Neutral,
}

impl From<&str> for Stance {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "support" => Stance::Support,
            "oppose" => Stance::Oppose,
            _ => Stance::Neutral, // Neutral fallback for unrecognized stances
        }
    }
}

impl Stance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stance::Support => "support",
            Stance::Oppose => "oppose",
            Stance::Neutral => "neutral",
        }
    }
}

/// One raw entry from the bills.json data file (all fields free-form strings)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawBill {
    pub bill_number: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub chamber: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub threat_level: String,
    #[serde(default)]
    pub last_action_date: String,
    #[serde(default)]
    pub introduced_date: String,
}

/// A typed bill card record. Built once from a raw record at load time and
/// never mutated afterward; the engine only toggles visibility and order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BillCard {
    pub bill_number: String,
    pub title: String,
    pub description: String,
    pub chamber: Chamber,
    pub status: String,
    pub threat: ThreatLevel,
    /// Zero-padded ISO date (YYYY-MM-DD). Validated at load time so the
    /// recency sort can compare these as plain strings.
    pub date: String,
}

impl BillCard {
    /// Convert a raw record into a typed card, failing closed: a record
    /// with a malformed chamber, threat level, or date is excluded rather
    /// than carried through comparisons as a raw string.
    pub fn from_raw(raw: RawBill) -> Option<Self> {
        let chamber = Chamber::parse(&raw.chamber)
            .or_else(|| Chamber::from_bill_number(&raw.bill_number))?;

        // An absent threat level is "unknown"; a present but unrecognized
        // one is malformed.
        let threat = if raw.threat_level.trim().is_empty() {
            ThreatLevel::Unknown
        } else {
            ThreatLevel::parse(&raw.threat_level)?
        };

        let date = if raw.last_action_date.trim().is_empty() {
            raw.introduced_date.trim().to_string()
        } else {
            raw.last_action_date.trim().to_string()
        };
        NaiveDate::parse_from_str(&date, "%Y-%m-%d").ok()?;

        Some(BillCard {
            bill_number: raw.bill_number,
            title: raw.title,
            description: raw.description,
            chamber,
            status: raw.status,
            threat,
            date,
        })
    }
}

/// Load and type all bill cards from a bills.json file. Malformed records
/// are dropped, not surfaced as errors.
pub fn load_bills(path: impl AsRef<Path>) -> Result<Vec<BillCard>> {
    let content = std::fs::read_to_string(path)?;
    let raw: Vec<RawBill> = serde_json::from_str(&content)?;
    let total = raw.len();
    let cards: Vec<BillCard> = raw.into_iter().filter_map(BillCard::from_raw).collect();
    if cards.len() < total {
        tracing::warn!(
            dropped = total - cards.len(),
            "excluded malformed bill records"
        );
    }
    Ok(cards)
}

/// Contact information for the quick-fill feature. All fields optional,
/// empty-string default; serialized with the camelCase keys the stored
/// record has always used.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub zip: String,
    pub district: String,
}

impl ContactInfo {
    /// Full name from the trimmed first and last names; empty when both are blank
    pub fn full_name(&self) -> String {
        let name = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        name.trim().to_string()
    }

    pub fn is_empty(&self) -> bool {
        self.first_name.trim().is_empty()
            && self.last_name.trim().is_empty()
            && self.email.trim().is_empty()
            && self.phone.trim().is_empty()
            && self.address.trim().is_empty()
            && self.city.trim().is_empty()
            && self.zip.trim().is_empty()
            && self.district.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(bill_number: &str, chamber: &str, threat: &str, date: &str) -> RawBill {
        RawBill {
            bill_number: bill_number.to_string(),
            title: "A bill".to_string(),
            description: String::new(),
            chamber: chamber.to_string(),
            status: "In Committee".to_string(),
            threat_level: threat.to_string(),
            last_action_date: date.to_string(),
            introduced_date: String::new(),
        }
    }

    #[test]
    fn test_threat_level_fails_closed() {
        assert_eq!(ThreatLevel::parse("Critical"), Some(ThreatLevel::Critical));
        assert_eq!(ThreatLevel::parse("  HIGH "), Some(ThreatLevel::High));
        assert_eq!(ThreatLevel::parse("severe"), None);
        assert_eq!(ThreatLevel::parse(""), None);
    }

    #[test]
    fn test_threat_rank_orders_most_urgent_first() {
        assert!(ThreatLevel::Critical.rank() < ThreatLevel::High.rank());
        assert!(ThreatLevel::Beneficial.rank() < ThreatLevel::Unknown.rank());
    }

    #[test]
    fn test_chamber_substring_parse() {
        assert_eq!(Chamber::parse("House Floor"), Some(Chamber::House));
        assert_eq!(Chamber::parse("senate"), Some(Chamber::Senate));
        assert_eq!(Chamber::parse("committee"), None);
    }

    #[test]
    fn test_chamber_from_bill_number() {
        assert_eq!(Chamber::from_bill_number("HB 1234"), Some(Chamber::House));
        assert_eq!(Chamber::from_bill_number("SJR 8200"), Some(Chamber::Senate));
        assert_eq!(Chamber::from_bill_number("I-2117"), None);
    }

    #[test]
    fn test_stance_neutral_fallback() {
        assert_eq!(Stance::from("support"), Stance::Support);
        assert_eq!(Stance::from("OPPOSE"), Stance::Oppose);
        assert_eq!(Stance::from("undecided"), Stance::Neutral);
    }

    #[test]
    fn test_from_raw_excludes_malformed_records() {
        assert!(BillCard::from_raw(raw("HB 10", "House", "low", "2025-01-05")).is_some());
        // Unrecognized threat level
        assert!(BillCard::from_raw(raw("HB 10", "House", "severe", "2025-01-05")).is_none());
        // Non-ISO date breaks the string-compare invariant
        assert!(BillCard::from_raw(raw("HB 10", "House", "low", "01/05/2025")).is_none());
        // No chamber and no recognizable prefix
        assert!(BillCard::from_raw(raw("I-2117", "", "low", "2025-01-05")).is_none());
    }

    #[test]
    fn test_from_raw_derives_chamber_from_prefix() {
        let card = BillCard::from_raw(raw("SB 5100", "", "high", "2025-02-01")).unwrap();
        assert_eq!(card.chamber, Chamber::Senate);
    }

    #[test]
    fn test_from_raw_empty_threat_is_unknown() {
        let card = BillCard::from_raw(raw("HB 10", "House", "", "2025-01-05")).unwrap();
        assert_eq!(card.threat, ThreatLevel::Unknown);
    }

    #[test]
    fn test_contact_full_name_trims() {
        let info = ContactInfo {
            first_name: " Jane ".to_string(),
            last_name: "Doe".to_string(),
            ..Default::default()
        };
        assert_eq!(info.full_name(), "Jane Doe");
        assert_eq!(ContactInfo::default().full_name(), "");
    }
}
