use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::search::SortKey;

pub const DEFAULT_DB_PATH: &str = "./.instance/contacts.db";

#[derive(Parser, Debug)]
#[command(name = "address-book", version, about = "Simple Address Book")]
pub struct Cli {
    /// Path to the SQLite contacts database
    #[arg(long, env = "CONTACTS_DB", default_value_t = String::from(DEFAULT_DB_PATH))]
    pub db: String,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, env = "ADDRESS_BOOK_LOG", default_value_t = String::from("warn"))]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact phone number
        #[arg(long)]
        phone: String,

        /// Contact email address
        #[arg(long)]
        email: Option<String>,

        /// Contact postal address
        #[arg(long)]
        address: Option<String>,
    },
    /// List contacts
    List {
        /// Sort ordering (default is insertion order)
        #[arg(long)]
        sort: Option<SortArg>,

        /// Reverse order
        #[arg(short, long)]
        reverse: bool,

        /// Print contacts as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Search contacts by part of a name or phone number
    Search {
        /// Text to look for (case-insensitive)
        #[arg(short, long)]
        query: String,
    },
    /// Show every detail of one contact
    Show {
        /// Contact id as printed by `list`
        #[arg(long)]
        id: i64,
    },
    /// Edit the data of an existing contact
    /// Provide the contact id followed by the fields you wish to update
    Edit {
        /// Contact id as printed by `list`
        #[arg(long)]
        id: i64,

        /// Update name
        #[arg(long)]
        name: Option<String>,

        /// Update phone number
        #[arg(long)]
        phone: Option<String>,

        /// Update email address
        #[arg(long)]
        email: Option<String>,

        /// Update postal address
        #[arg(long)]
        address: Option<String>,
    },
    /// Delete a contact by id
    Delete {
        /// Contact id as printed by `list`
        #[arg(long)]
        id: i64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Import contacts from .csv file
    Import {
        /// File path to the source .csv file
        #[arg(short, long)]
        src: Option<String>,
    },

    /// Export contacts to a .csv file
    Export {
        /// File path to the destination location for export file
        #[arg(short, long)]
        des: Option<String>,
    },
}

/// Supported sort keys
#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum SortArg {
    Id,
    Name,
    Phone,
    Email,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Id => SortKey::Id,
            SortArg::Name => SortKey::Name,
            SortArg::Phone => SortKey::Phone,
            SortArg::Email => SortKey::Email,
        }
    }
}
