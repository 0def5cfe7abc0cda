use serde::Serialize;

/// Flat read projection of an entry, ready for rendering or JSON output.
/// `date` carries the display form ("Jan 5, 2025"), not the stored ISO date.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EntrySummary {
    pub id: i64,
    pub title: String,
    pub edit_url: String,
    pub contact: String,
    pub company: String,
    pub date: String,
    pub interaction_type: String,
    /// Resolved status display name; empty when the entry has none
    /// or its slug no longer resolves.
    pub lead_status: String,
}

/// One page of results plus the pagination envelope.
#[derive(Debug, Clone, Serialize)]
pub struct EntryPage {
    pub items: Vec<EntrySummary>,
    pub total: i64,
    pub pages: u64,
}
