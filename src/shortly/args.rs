use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shortly", version)]
#[command(about = "Shorten and keep track of your links, per account", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding shortly's data (overrides SHORTLY_DATA)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an account
    Register {
        email: String,

        /// Password (prompted for if omitted)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Log in and remember the session
    Login {
        email: String,

        /// Password (prompted for if omitted)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Forget the saved session
    Logout,

    /// Show who is logged in
    Whoami,

    /// Shorten a URL
    #[command(alias = "s")]
    Shorten {
        /// The URL; https:// is assumed when no scheme is given
        url: String,
    },

    /// List your links
    #[command(alias = "ls")]
    List,

    /// Delete a link
    #[command(alias = "rm")]
    Delete {
        /// Number of the link as shown by `list`
        number: usize,

        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Copy a link's long URL to the clipboard
    #[command(alias = "cp")]
    Copy {
        /// Number of the link as shown by `list`
        number: usize,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (max-code-attempts, confirm-delete)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
