use std::cmp::Ordering;

use crate::types::BillCard;

/// Sort order for the bill list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Most recent activity first (default)
    Recency,
    /// Natural/numeric bill number order ("HB 2" before "HB 10")
    BillNumber,
    /// Lexical title order
    Title,
    /// Most urgent threat level first
    Threat,
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey::Recency
    }
}

impl From<&str> for SortKey {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "number" | "bill_number" => SortKey::BillNumber,
            "title" => SortKey::Title,
            "threat" => SortKey::Threat,
            _ => SortKey::Recency, // Recency is the default sort
        }
    }
}

/// Reorder the cards in place. Stable, so cards comparing equal keep their
/// current relative order. Sorting never changes visibility; callers re-run
/// the filter pass afterward.
pub fn sort_cards(cards: &mut [BillCard], key: SortKey) {
    match key {
        SortKey::Recency => {
            // Descending date, bill number as a secondary key for
            // deterministic ordering when dates are equal. Safe as a plain
            // string comparison only because dates are zero-padded ISO;
            // BillCard::from_raw enforces that format.
            cards.sort_by(|a, b| {
                let date_cmp = b.date.cmp(&a.date);
                if date_cmp == Ordering::Equal {
                    natural_cmp(&a.bill_number, &b.bill_number)
                } else {
                    date_cmp
                }
            });
        }
        SortKey::BillNumber => {
            cards.sort_by(|a, b| natural_cmp(&a.bill_number, &b.bill_number));
        }
        SortKey::Title => {
            cards.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
        }
        SortKey::Threat => {
            cards.sort_by(|a, b| {
                let rank_cmp = a.threat.rank().cmp(&b.threat.rank());
                if rank_cmp == Ordering::Equal {
                    b.date.cmp(&a.date)
                } else {
                    rank_cmp
                }
            });
        }
    }
}

/// Natural string comparison: runs of digits compare numerically, everything
/// else compares case-insensitively character by character.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut ai = a.chars().peekable();
    let mut bi = b.chars().peekable();

    loop {
        match (ai.peek().copied(), bi.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(ca), Some(cb)) => {
                if ca.is_ascii_digit() && cb.is_ascii_digit() {
                    let na = take_number(&mut ai);
                    let nb = take_number(&mut bi);
                    match na.cmp(&nb) {
                        Ordering::Equal => continue,
                        ord => return ord,
                    }
                }
                let la = ca.to_ascii_lowercase();
                let lb = cb.to_ascii_lowercase();
                if la != lb {
                    return la.cmp(&lb);
                }
                ai.next();
                bi.next();
            }
        }
    }
}

fn take_number(chars: &mut std::iter::Peekable<std::str::Chars>) -> u64 {
    let mut value: u64 = 0;
    while let Some(c) = chars.peek() {
        match c.to_digit(10) {
            Some(d) => {
                value = value.saturating_mul(10).saturating_add(d as u64);
                chars.next();
            }
            None => break,
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RawBill, ThreatLevel};

    fn card(number: &str, title: &str, threat: &str, date: &str) -> BillCard {
        BillCard::from_raw(RawBill {
            bill_number: number.to_string(),
            title: title.to_string(),
            description: String::new(),
            chamber: "house".to_string(),
            status: "in committee".to_string(),
            threat_level: threat.to_string(),
            last_action_date: date.to_string(),
            introduced_date: String::new(),
        })
        .unwrap()
    }

    fn numbers(cards: &[BillCard]) -> Vec<&str> {
        cards.iter().map(|c| c.bill_number.as_str()).collect()
    }

    #[test]
    fn test_natural_cmp_is_numeric_aware() {
        assert_eq!(natural_cmp("HB 2", "HB 10"), Ordering::Less);
        assert_eq!(natural_cmp("HB 10", "HB 100"), Ordering::Less);
        assert_eq!(natural_cmp("HB 10", "hb 10"), Ordering::Equal);
        assert_eq!(natural_cmp("HB 10", "SB 2"), Ordering::Less);
    }

    #[test]
    fn test_bill_number_sort() {
        let mut cards = vec![
            card("HB 100", "c", "low", "2025-01-01"),
            card("HB 2", "a", "low", "2025-01-01"),
            card("HB 10", "b", "low", "2025-01-01"),
        ];
        sort_cards(&mut cards, SortKey::BillNumber);
        assert_eq!(numbers(&cards), vec!["HB 2", "HB 10", "HB 100"]);
    }

    #[test]
    fn test_recency_sort_is_descending() {
        let mut cards = vec![
            card("HB 1", "a", "low", "2025-01-05"),
            card("HB 2", "b", "low", "2025-03-01"),
            card("HB 3", "c", "low", "2025-02-10"),
        ];
        sort_cards(&mut cards, SortKey::Recency);
        let dates: Vec<&str> = cards.iter().map(|c| c.date.as_str()).collect();
        assert_eq!(dates, vec!["2025-03-01", "2025-02-10", "2025-01-05"]);
    }

    #[test]
    fn test_recency_ties_break_on_bill_number() {
        let mut cards = vec![
            card("HB 20", "a", "low", "2025-01-05"),
            card("HB 3", "b", "low", "2025-01-05"),
        ];
        sort_cards(&mut cards, SortKey::Recency);
        assert_eq!(numbers(&cards), vec!["HB 3", "HB 20"]);
    }

    #[test]
    fn test_title_sort_ignores_case() {
        let mut cards = vec![
            card("HB 1", "zoning reform", "low", "2025-01-01"),
            card("HB 2", "Budget", "low", "2025-01-01"),
            card("HB 3", "agriculture", "low", "2025-01-01"),
        ];
        sort_cards(&mut cards, SortKey::Title);
        let titles: Vec<&str> = cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["agriculture", "Budget", "zoning reform"]);
    }

    #[test]
    fn test_threat_sort_puts_critical_first() {
        let mut cards = vec![
            card("HB 1", "a", "low", "2025-01-01"),
            card("HB 2", "b", "critical", "2025-01-01"),
            card("HB 3", "c", "beneficial", "2025-01-01"),
            card("HB 4", "d", "high", "2025-01-01"),
        ];
        sort_cards(&mut cards, SortKey::Threat);
        assert_eq!(cards[0].threat, ThreatLevel::Critical);
        assert_eq!(cards[1].threat, ThreatLevel::High);
        assert_eq!(cards[3].threat, ThreatLevel::Beneficial);
    }

    #[test]
    fn test_sort_key_from_str_defaults_to_recency() {
        assert_eq!(SortKey::from("number"), SortKey::BillNumber);
        assert_eq!(SortKey::from("TITLE"), SortKey::Title);
        assert_eq!(SortKey::from("anything"), SortKey::Recency);
    }
}
