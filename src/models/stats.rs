use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregate counters over the whole store.
///
/// All three maps use BTreeMap so JSON output is deterministic; the
/// "YYYY-MM" month keys sort chronologically by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    /// Keyed by interaction type slug; every slug present, zero when unused.
    pub by_type: BTreeMap<String, i64>,
    /// Keyed by status display name, from the maintained per-status count.
    pub by_status: BTreeMap<String, i64>,
    /// Exactly the 12 most recent calendar months, zero-filled.
    pub by_month: BTreeMap<String, i64>,
}
