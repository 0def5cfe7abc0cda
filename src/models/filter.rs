use crate::errors::{AppError, AppResult};
use crate::models::interaction_type::InteractionType;
use chrono::NaiveDate;

pub const DEFAULT_PER_PAGE: u32 = 20;
pub const MAX_PER_PAGE: u32 = 100;

/// Explicit filter state passed through the whole pipeline:
/// controller → API → query builder. Absent fields mean "no predicate".
#[derive(Debug, Clone, PartialEq)]
pub struct FilterRequest {
    pub term: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub interaction_type: Option<InteractionType>,
    pub lead_status: Option<String>,
    /// 1-based page number.
    pub page: u32,
    pub per_page: u32,
}

impl Default for FilterRequest {
    fn default() -> Self {
        Self {
            term: None,
            start_date: None,
            end_date: None,
            interaction_type: None,
            lead_status: None,
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl FilterRequest {
    /// Normalize pagination and reject inverted date ranges.
    ///
    /// A whitespace-only term becomes "no term". Page numbers below 1 are
    /// clamped to 1 and the page size is bounded to 1..=MAX_PER_PAGE.
    pub fn validated(mut self) -> AppResult<Self> {
        if let Some(t) = &self.term {
            let trimmed = t.trim();
            self.term = if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            };
        }

        if let Some(s) = &self.lead_status {
            let trimmed = s.trim();
            self.lead_status = if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            };
        }

        if let (Some(start), Some(end)) = (self.start_date, self.end_date)
            && start > end
        {
            return Err(AppError::InvalidDateRange(
                start.to_string(),
                end.to_string(),
            ));
        }

        self.page = self.page.max(1);
        self.per_page = self.per_page.clamp(1, MAX_PER_PAGE);

        Ok(self)
    }

    /// True when at least one predicate field is set.
    pub fn has_predicates(&self) -> bool {
        self.term.is_some()
            || self.start_date.is_some()
            || self.end_date.is_some()
            || self.interaction_type.is_some()
            || self.lead_status.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn default_is_page_one_of_twenty() {
        let f = FilterRequest::default();
        assert_eq!(f.page, 1);
        assert_eq!(f.per_page, DEFAULT_PER_PAGE);
        assert!(!f.has_predicates());
    }

    #[test]
    fn blank_term_is_dropped() {
        let f = FilterRequest {
            term: Some("   ".into()),
            ..Default::default()
        };
        let f = f.validated().unwrap();
        assert_eq!(f.term, None);
        assert!(!f.has_predicates());
    }

    #[test]
    fn inverted_range_is_rejected() {
        let f = FilterRequest {
            start_date: Some(date("2025-06-30")),
            end_date: Some(date("2025-06-01")),
            ..Default::default()
        };
        assert!(matches!(
            f.validated(),
            Err(crate::errors::AppError::InvalidDateRange(_, _))
        ));
    }

    #[test]
    fn one_sided_range_is_allowed() {
        let f = FilterRequest {
            start_date: Some(date("2025-06-01")),
            ..Default::default()
        };
        let f = f.validated().unwrap();
        assert!(f.has_predicates());
        assert_eq!(f.end_date, None);
    }

    #[test]
    fn pagination_is_clamped() {
        let f = FilterRequest {
            page: 0,
            per_page: 5000,
            ..Default::default()
        };
        let f = f.validated().unwrap();
        assert_eq!(f.page, 1);
        assert_eq!(f.per_page, MAX_PER_PAGE);
    }
}
