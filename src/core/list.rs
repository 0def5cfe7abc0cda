use crate::db::pool::DbPool;
use crate::db::queries;
use crate::db::query::build_entry_query;
use crate::errors::AppResult;
use crate::models::entry::Entry;
use crate::models::filter::FilterRequest;
use crate::models::summary::{EntryPage, EntrySummary};
use crate::utils::formatting::display_date;

/// Read-only query service: filter → count + page → summaries.
pub struct ListLogic;

impl ListLogic {
    /// Run the filtered listing for an already-validated request.
    ///
    /// `pages` is ceil(total / per_page); requesting a page past the end
    /// yields an empty `items` with the envelope intact.
    pub fn list(pool: &mut DbPool, filter: &FilterRequest) -> AppResult<EntryPage> {
        let query = build_entry_query(filter);

        let total = queries::count_entries(&pool.conn, &query)?;
        let entries = queries::load_entry_page(&pool.conn, &query)?;

        let mut items = Vec::with_capacity(entries.len());
        for entry in entries {
            let status = queries::first_status_name(&pool.conn, entry.id)?.unwrap_or_default();
            items.push(Self::summarize(&entry, status));
        }

        let pages = (total.max(0) as u64).div_ceil(u64::from(filter.per_page.max(1)));

        Ok(EntryPage {
            items,
            total,
            pages,
        })
    }

    /// Flatten an entry into its display projection. The stored ISO date
    /// is left untouched; only the projection carries the display form.
    pub fn summarize(entry: &Entry, lead_status: String) -> EntrySummary {
        EntrySummary {
            id: entry.id,
            title: entry.title.clone(),
            edit_url: format!("guildledger://entry/{}/edit", entry.id),
            contact: entry.contact_name.clone(),
            company: entry.company.clone(),
            date: display_date(entry.date),
            interaction_type: entry.interaction_type.to_db_str().to_string(),
            lead_status,
        }
    }
}
