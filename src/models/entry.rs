use crate::models::interaction_type::InteractionType;
use chrono::NaiveDate;
use serde::Serialize;

/// A single logged interaction, as stored in the `entries` table.
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    pub id: i64,
    /// Derived at save time, never edited directly.
    pub title: String,
    pub contact_name: String,
    pub company: String,
    pub date: NaiveDate,
    pub interaction_type: InteractionType,
    pub notes: String,
    pub created_at: String,
}
