pub mod entry;
pub mod filter;
pub mod interaction_type;
pub mod lead_status;
pub mod stats;
pub mod summary;
