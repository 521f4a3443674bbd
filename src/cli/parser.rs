use crate::export::{ExportFormat, ExportTarget};
use clap::{Parser, Subcommand};

/// Command-line interface definition for Secure Gate
/// Visitor and resident logbook for a residential building, backed by SQLite
#[derive(Parser)]
#[command(
    name = "securegate",
    version = env!("CARGO_PKG_VERSION"),
    about = "A building logbook CLI: register residents and track visitor check-in/check-out",
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
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Register, edit, list and remove residents
    Resident {
        #[command(subcommand)]
        action: ResidentAction,
    },

    /// Check visitors in and out
    Visitor {
        #[command(subcommand)]
        action: VisitorAction,
    },

    /// Show dashboard counters
    Stats,

    /// Keep showing the visitors currently on the premises
    Watch {
        #[arg(long, value_name = "MS", help = "Refresh interval in milliseconds")]
        interval: Option<u64>,

        #[arg(long, value_name = "N", help = "Stop after N refreshes")]
        iterations: Option<u64>,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Export residents or visitors
    Export {
        #[arg(long, value_enum)]
        what: ExportTarget,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum ResidentAction {
    /// Register a new resident
    Add {
        #[arg(long = "flat", help = "Flat number, e.g. 12B")]
        flat: String,

        #[arg(long = "owner", help = "Owner name")]
        owner: String,

        #[arg(long, default_value_t = 0)]
        age: u32,

        #[arg(
            long = "total-members",
            help = "Declared household size (default: owner + listed members)"
        )]
        total_members: Option<u32>,

        #[arg(
            long = "member",
            value_name = "NAME:AGE:RELATION",
            help = "Family member (repeatable)"
        )]
        members: Vec<String>,
    },

    /// Edit an existing resident (omitted fields keep their value)
    Edit {
        id: String,

        #[arg(long = "flat")]
        flat: Option<String>,

        #[arg(long = "owner")]
        owner: Option<String>,

        #[arg(long)]
        age: Option<u32>,

        #[arg(long = "total-members")]
        total_members: Option<u32>,

        #[arg(
            long = "member",
            value_name = "NAME:AGE:RELATION",
            help = "Append a family member (repeatable)"
        )]
        members: Vec<String>,

        #[arg(long = "clear-members", help = "Drop existing family members first")]
        clear_members: bool,
    },

    /// List all residents
    List,

    /// Show one resident with family members
    Show { id: String },

    /// Delete a resident
    Del {
        id: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum VisitorAction {
    /// Check a visitor in
    Checkin {
        #[arg(long)]
        name: String,

        #[arg(long = "mobile", help = "Mobile number")]
        mobile: String,

        #[arg(long = "type", help = "delivery, relative or guest")]
        kind: String,

        #[arg(long = "flat", help = "Flat being visited")]
        flat: String,

        #[arg(long, default_value = "")]
        purpose: String,
    },

    /// Edit a visitor's details (check-in/out times are never changed)
    Edit {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long = "mobile")]
        mobile: Option<String>,

        #[arg(long = "type")]
        kind: Option<String>,

        #[arg(long = "flat")]
        flat: Option<String>,

        #[arg(long)]
        purpose: Option<String>,
    },

    /// Check a visitor out
    Checkout { id: String },

    /// List visitors, most recent first
    List {
        #[arg(long, help = "Only visitors still on the premises")]
        active: bool,

        #[arg(long = "flat", help = "Only visitors of this flat")]
        flat: Option<String>,
    },

    /// Show one visitor
    Show { id: String },
}
