use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.1" for releases, "0.3.1@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "rollbook", bin_name = "rollbook", version = get_version())]
#[command(about = "Student records, grades and report cards", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data file to use instead of the configured one
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Config file to read instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a student
    #[command(alias = "a")]
    Add {
        name: String,

        /// Class or section
        class: String,

        /// Roll number (unique within the class)
        roll: i32,

        /// Marks per subject, 0-100 each
        marks: Vec<i32>,

        /// Teacher comment
        #[arg(short, long, default_value = "")]
        comment: String,
    },

    /// Show report cards for every student
    #[command(alias = "ls")]
    List {
        /// One line per student instead of full report cards
        #[arg(short, long)]
        brief: bool,
    },

    /// Show the report card for a roll number
    #[command(alias = "v")]
    Show { roll: i32 },

    /// Show the student with the highest percentage
    Topper,

    /// Reorder students by percentage, highest first
    Sort,

    /// List students in one class
    Class {
        name: String,

        /// One line per student instead of full report cards
        #[arg(short, long)]
        brief: bool,
    },

    /// Replace the marks of a student
    EditMarks {
        roll: i32,

        /// New marks per subject, 0-100 each
        #[arg(num_args = 0..)]
        marks: Vec<i32>,
    },

    /// Set the teacher comment of a student
    Comment {
        roll: i32,

        /// Comment text (words are joined with spaces)
        #[arg(num_args = 0..)]
        text: Vec<String>,
    },

    /// Delete every student with a roll number
    #[command(alias = "rm")]
    Remove { roll: i32 },

    /// Show the active configuration, or change it
    Config {
        /// Store this data file in the config
        #[arg(long)]
        data_file: Option<PathBuf>,

        /// Store this default log level in the config (e.g. "warn", "info")
        #[arg(long)]
        log_level: Option<String>,
    },

    /// Interactive menu (the default when no command is given)
    Menu,
}
