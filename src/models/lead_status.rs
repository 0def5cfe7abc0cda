use serde::Serialize;

/// Open, user-extensible tag vocabulary. Identified by slug.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LeadStatus {
    pub slug: String,
    pub name: String,
    /// Number of entries currently carrying this status.
    #[serde(skip_serializing)]
    pub count: i64,
}

/// Statuses seeded on first initialization.
pub const DEFAULT_STATUSES: [&str; 5] = ["New", "Contacted", "Qualified", "Converted", "Lost"];

/// Derive a slug from a display name: lowercase, runs of
/// non-alphanumeric characters collapsed to a single hyphen.
pub fn slugify(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_hyphen = true;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
            last_hyphen = false;
        } else if !last_hyphen {
            out.push('-');
            last_hyphen = true;
        }
    }

    while out.ends_with('-') {
        out.pop();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_lowercases_and_hyphenates() {
        assert_eq!(slugify("New"), "new");
        assert_eq!(slugify("On Hold"), "on-hold");
        assert_eq!(slugify("  Hot!!  Lead  "), "hot-lead");
    }

    #[test]
    fn slugify_trims_trailing_separators() {
        assert_eq!(slugify("Lost..."), "lost");
        assert_eq!(slugify("---"), "");
    }
}
