//! Filtered query construction for the `entries` table.
//!
//! Predicates are collected into a conditions vector with owned text
//! parameters and ANDed together. A request with no predicate fields
//! produces no WHERE clause at all, so unfiltered listings stay on the
//! plain paginated path.

use crate::models::filter::FilterRequest;

const BASE_SELECT: &str =
    "SELECT id, title, contact_name, company, date, interaction_type, notes, created_at \
     FROM entries";

#[derive(Debug, Clone)]
pub struct EntryQuery {
    conditions: Vec<String>,
    params: Vec<String>,
    limit: u32,
    offset: u64,
}

/// The search term is a plain substring, so LIKE metacharacters in it
/// must match themselves.
fn escape_like(term: &str) -> String {
    term.replace('\\', r"\\")
        .replace('%', r"\%")
        .replace('_', r"\_")
}

/// Translate a validated FilterRequest into SQL conditions + parameters.
pub fn build_entry_query(filter: &FilterRequest) -> EntryQuery {
    let mut conditions: Vec<String> = Vec::new();
    let mut params: Vec<String> = Vec::new();

    if let Some(term) = &filter.term {
        conditions.push(
            r"(LOWER(contact_name) LIKE ? ESCAPE '\' OR LOWER(company) LIKE ? ESCAPE '\' OR LOWER(notes) LIKE ? ESCAPE '\')"
                .to_string(),
        );
        let pattern = format!("%{}%", escape_like(&term.to_lowercase()));
        params.push(pattern.clone());
        params.push(pattern.clone());
        params.push(pattern);
    }

    if let Some(start) = filter.start_date {
        conditions.push("date >= ?".to_string());
        params.push(start.format("%Y-%m-%d").to_string());
    }

    if let Some(end) = filter.end_date {
        conditions.push("date <= ?".to_string());
        params.push(end.format("%Y-%m-%d").to_string());
    }

    if let Some(ty) = filter.interaction_type {
        conditions.push("interaction_type = ?".to_string());
        params.push(ty.to_db_str().to_string());
    }

    if let Some(status) = &filter.lead_status {
        conditions.push("id IN (SELECT entry_id FROM entry_status WHERE status_slug = ?)".to_string());
        params.push(status.clone());
    }

    let page = filter.page.max(1);

    EntryQuery {
        conditions,
        params,
        limit: filter.per_page,
        offset: u64::from(page - 1) * u64::from(filter.per_page),
    }
}

impl EntryQuery {
    /// "" when unfiltered, otherwise " WHERE a AND b AND ...".
    fn where_clause(&self) -> String {
        if self.conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.conditions.join(" AND "))
        }
    }

    pub fn count_sql(&self) -> String {
        format!("SELECT COUNT(*) FROM entries{}", self.where_clause())
    }

    /// Page query, newest first. LIMIT/OFFSET come from validated
    /// integers, so they are interpolated rather than bound.
    pub fn page_sql(&self) -> String {
        format!(
            "{}{} ORDER BY date DESC, id DESC LIMIT {} OFFSET {}",
            BASE_SELECT,
            self.where_clause(),
            self.limit,
            self.offset
        )
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::interaction_type::InteractionType;
    use chrono::NaiveDate;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn no_filters_means_no_where_clause() {
        let q = build_entry_query(&FilterRequest::default());
        assert!(!q.count_sql().contains("WHERE"));
        assert!(!q.page_sql().contains("WHERE"));
        assert!(q.params().is_empty());
        assert!(q.page_sql().ends_with("LIMIT 20 OFFSET 0"));
    }

    #[test]
    fn term_matches_three_columns_case_insensitively() {
        let f = FilterRequest {
            term: Some("Acme".into()),
            ..Default::default()
        };
        let q = build_entry_query(&f);
        assert_eq!(q.params(), &["%acme%", "%acme%", "%acme%"]);
        assert!(q.count_sql().contains("LOWER(contact_name) LIKE ?"));
        assert!(q.count_sql().contains("LOWER(company) LIKE ?"));
        assert!(q.count_sql().contains("LOWER(notes) LIKE ?"));
    }

    #[test]
    fn like_metacharacters_in_the_term_are_escaped() {
        let f = FilterRequest {
            term: Some("in_person 100%".into()),
            ..Default::default()
        };
        let q = build_entry_query(&f);
        assert_eq!(q.params()[0], r"%in\_person 100\%%");
        assert!(q.count_sql().contains(r"LIKE ? ESCAPE '\'"));
    }

    #[test]
    fn one_sided_range_emits_single_bound() {
        let f = FilterRequest {
            end_date: Some(d("2025-06-30")),
            ..Default::default()
        };
        let q = build_entry_query(&f);
        assert!(q.count_sql().contains("date <= ?"));
        assert!(!q.count_sql().contains("date >= ?"));
        assert_eq!(q.params(), &["2025-06-30"]);
    }

    #[test]
    fn all_predicates_join_with_and() {
        let f = FilterRequest {
            term: Some("ana".into()),
            start_date: Some(d("2025-01-01")),
            end_date: Some(d("2025-12-31")),
            interaction_type: Some(InteractionType::Email),
            lead_status: Some("qualified".into()),
            ..Default::default()
        };
        let q = build_entry_query(&f);
        let sql = q.count_sql();
        assert_eq!(sql.matches(" AND ").count(), 4);
        assert_eq!(q.params().len(), 6);
        assert!(sql.contains("interaction_type = ?"));
        assert!(sql.contains("SELECT entry_id FROM entry_status"));
    }

    #[test]
    fn pagination_math() {
        let f = FilterRequest {
            page: 3,
            per_page: 20,
            ..Default::default()
        };
        let q = build_entry_query(&f);
        assert!(q.page_sql().ends_with("LIMIT 20 OFFSET 40"));
    }
}
