use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "pixelnotes")]
#[command(about = "Minimal local notes for the command line", long_about = None)]
#[command(version, long_version = crate::long_version())]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compose a new note
    #[command(alias = "n")]
    New {
        /// Title of the note (optional, opens editor if not provided)
        title: Option<String>,

        /// Body of the note
        body: Option<String>,

        /// Skip opening the editor
        #[arg(long)]
        no_editor: bool,
    },

    /// List notes, most recently updated first
    #[command(alias = "ls")]
    List {
        /// Only show notes matching this term
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Search notes (dedicated command)
    Search { term: String },

    /// View a note
    #[command(alias = "v")]
    View {
        /// Position of the note in the listing (e.g. 1)
        index: usize,
    },

    /// Edit a note
    #[command(alias = "e")]
    Edit {
        /// Position of the note in the listing (e.g. 1)
        index: usize,

        /// New title (keeps the current one when omitted)
        title: Option<String>,

        /// New body (keeps the current one when omitted)
        body: Option<String>,

        /// Skip opening the editor
        #[arg(long)]
        no_editor: bool,
    },

    /// Delete a note
    #[command(alias = "rm")]
    Delete {
        /// Position of the note in the listing (e.g. 1)
        index: usize,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., editor, relative-times)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
