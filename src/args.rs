use clap::{Parser, Subcommand, ValueEnum};
use course_catalog::config::FetchBackend;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "course-catalog")]
#[command(about = "Harvests the Cal Poly course catalog and queries the snapshot")]
#[command(version)]
pub struct Args {
    /// Path to a JSON configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Snapshot file to write or read (overrides the config)
    #[arg(short, long, global = true)]
    pub snapshot: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch every department page and write the snapshot
    Harvest {
        /// How pages are fetched (overrides the config)
        #[arg(short, long, value_enum)]
        backend: Option<BackendArg>,

        /// Skip departments that fail instead of aborting the harvest
        #[arg(long)]
        skip_failed: bool,
    },

    /// List every major in the snapshot
    Majors,

    /// List the course codes of a major
    Courses {
        /// Major name as listed by `majors`, e.g. "Statistics (STAT)"
        major: String,
    },

    /// List courses of a major offered in a term
    Offered {
        /// Major name as listed by `majors`
        major: String,

        /// Term code: F, W, SP or SU
        term: String,

        /// Also list courses not offered in the term
        #[arg(short, long)]
        all: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    Http,
    Webdriver,
}

/// Convert from CLI argument backend to the configured backend
pub fn convert_backend(arg: BackendArg) -> FetchBackend {
    match arg {
        BackendArg::Http => FetchBackend::Http,
        BackendArg::Webdriver => FetchBackend::Webdriver,
    }
}
