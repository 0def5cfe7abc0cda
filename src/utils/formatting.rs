//! Formatting utilities used for CLI and export outputs.

use chrono::{Datelike, NaiveDate};

/// Display form of a date: "Jan 5, 2025" (no zero-padded day).
pub fn display_date(d: NaiveDate) -> String {
    format!("{} {}, {}", d.format("%b"), d.day(), d.year())
}

/// Derive the entry title from its fields:
/// "Contact (Company) - Jan 5, 2025", company part omitted when empty.
pub fn derive_title(contact: &str, company: &str, date: NaiveDate) -> String {
    let company = company.trim();
    if company.is_empty() {
        format!("{} - {}", contact.trim(), display_date(date))
    } else {
        format!("{} ({}) - {}", contact.trim(), company, display_date(date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn display_date_drops_leading_zero() {
        assert_eq!(display_date(d("2025-01-05")), "Jan 5, 2025");
        assert_eq!(display_date(d("2025-12-31")), "Dec 31, 2025");
    }

    #[test]
    fn title_includes_company_only_when_present() {
        assert_eq!(
            derive_title("Jane Doe", "Acme Corp", d("2025-01-05")),
            "Jane Doe (Acme Corp) - Jan 5, 2025"
        );
        assert_eq!(
            derive_title("Jane Doe", "  ", d("2025-01-05")),
            "Jane Doe - Jan 5, 2025"
        );
    }
}
