use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for guildledger
/// CLI application to keep a ledger of member interactions with SQLite
#[derive(Parser)]
#[command(
    name = "guildledger",
    version = env!("CARGO_PKG_VERSION"),
    about = "A member-interaction ledger CLI: filtered search, lead statuses, stats and exports on SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add a new interaction entry, or fully re-save an existing one
    Add {
        /// Interaction date (YYYY-MM-DD)
        date: String,

        /// Contact name (required, non-empty)
        contact: String,

        /// Company or council the contact belongs to
        #[arg(long = "company", help = "Company or council of the contact")]
        company: Option<String>,

        /// Interaction type: email, video_call, in_person, phone_call
        #[arg(
            long = "type",
            value_name = "TYPE",
            help = "Interaction type: email, video_call, in_person, phone_call (default: email)"
        )]
        interaction_type: Option<String>,

        /// Free-form notes
        #[arg(long = "notes", help = "Free-form notes for the entry")]
        notes: Option<String>,

        /// Lead status slug to assign (empty string clears it)
        #[arg(
            long = "status",
            help = "Lead status slug to assign; pass an empty string to clear"
        )]
        status: Option<String>,

        /// Re-save an existing entry instead of creating a new one
        #[arg(long = "edit", value_name = "ID", help = "Entry id to re-save")]
        edit: Option<i64>,
    },

    /// Delete an entry by ID
    Del {
        /// Entry id to delete
        id: i64,
    },

    /// List entries with optional filters
    List {
        /// Free-text search.
        ///
        /// Matches case-insensitively as a substring of the contact
        /// name, the company, or the notes. All filters combine with
        /// AND; with no filters the full archive is paged newest-first.
        ///
        /// Examples:
        ///   guildledger list --search acme
        ///   guildledger list --type email --page 2
        ///   guildledger list --from 2025-01-01 --to 2025-06-30
        #[arg(long, short, help = "Free-text search over contact, company and notes")]
        search: Option<String>,

        /// Start of the inclusive date range (YYYY-MM-DD)
        #[arg(long, value_name = "DATE", help = "Only entries on or after this date")]
        from: Option<String>,

        /// End of the inclusive date range (YYYY-MM-DD)
        #[arg(long, value_name = "DATE", help = "Only entries on or before this date")]
        to: Option<String>,

        /// Filter by interaction type
        #[arg(
            long = "type",
            value_name = "TYPE",
            help = "Filter by interaction type: email, video_call, in_person, phone_call"
        )]
        interaction_type: Option<String>,

        /// Filter by lead status slug
        #[arg(long, help = "Filter by lead status slug")]
        status: Option<String>,

        /// Page number (1-based)
        #[arg(long, help = "Page number, starting at 1")]
        page: Option<u32>,

        /// Page size (default from config, max 100)
        #[arg(long = "per-page", help = "Entries per page (max 100)")]
        per_page: Option<u32>,

        /// Print the raw JSON envelope instead of the table
        #[arg(long, help = "Print the JSON envelope { items, total, pages }")]
        json: bool,
    },

    /// Manage the lead status vocabulary
    Statuses {
        /// Add a status by display name (slug is derived)
        #[arg(long, value_name = "NAME", help = "Add a status by display name")]
        add: Option<String>,

        /// Delete a status by slug (entries keep a dangling slug)
        #[arg(long, value_name = "SLUG", help = "Delete a status by slug")]
        del: Option<String>,

        /// Print the raw JSON list instead of the table
        #[arg(long, help = "Print the JSON list [{ slug, name }]")]
        json: bool,
    },

    /// Show aggregate statistics (by type, by status, by month)
    Stats {
        /// Print the raw JSON snapshot instead of the charts
        #[arg(long, help = "Print the JSON snapshot { by_type, by_status, by_month }")]
        json: bool,
    },

    /// Browse entries interactively with live filters
    Browse,

    /// Export the currently selected page of entries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Output file path (absolute)")]
        file: String,

        /// Same filters as `list`
        #[arg(long, short, help = "Free-text search over contact, company and notes")]
        search: Option<String>,

        #[arg(long, value_name = "DATE", help = "Only entries on or after this date")]
        from: Option<String>,

        #[arg(long, value_name = "DATE", help = "Only entries on or before this date")]
        to: Option<String>,

        #[arg(
            long = "type",
            value_name = "TYPE",
            help = "Filter by interaction type: email, video_call, in_person, phone_call"
        )]
        interaction_type: Option<String>,

        #[arg(long, help = "Filter by lead status slug")]
        status: Option<String>,

        #[arg(long, help = "Page number, starting at 1")]
        page: Option<u32>,

        #[arg(long = "per-page", help = "Entries per page (max 100)")]
        per_page: Option<u32>,

        #[arg(long, short = 'f', help = "Overwrite output file without confirmation")]
        force: bool,
    },
}
