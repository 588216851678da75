//! CLI definition using clap

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use weighcheck_types::{AxleClass, OutputFormat};

#[derive(Parser)]
#[command(name = "weighcheck")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Truck weight compliance against federal and state legal limits")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output (debug logging on stderr)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify a single measured weight
    Classify {
        /// Weight in pounds (e.g. 79000 or "79,000 lbs")
        #[arg(long, short = 'w', allow_hyphen_values = true)]
        weight: String,

        /// Axle class the weight was measured for
        #[arg(long, short = 'a', value_enum)]
        axle_class: AxleClass,

        /// Two-letter jurisdiction code. Uses config value if not specified.
        #[arg(long, short = 'j')]
        jurisdiction: Option<String>,

        /// State limit in pounds; used as-is instead of the table value
        #[arg(long, conflicts_with_all = ["axle_count", "spacing"])]
        state_limit: Option<u32>,

        /// Number of axles in the measured group (enables the bridge formula)
        #[arg(long)]
        axle_count: Option<u32>,

        /// Outer-to-outer spacing of the axle group in feet
        #[arg(long, requires = "axle_count")]
        spacing: Option<f64>,
    },

    /// Maximum legal weight for an axle group (federal bridge formula)
    Bridge {
        /// Number of consecutive axles
        #[arg(long)]
        axles: u32,

        /// Outer-to-outer spacing in feet
        #[arg(long)]
        spacing: f64,
    },

    /// Show legal limits for one or all jurisdictions
    Limits {
        /// Jurisdiction code; all jurisdictions when omitted
        #[arg(long, short = 'j')]
        jurisdiction: Option<String>,
    },

    /// Check weigh tickets from a CSV file or a directory of CSV files
    CheckTickets {
        /// CSV file or directory
        path: PathBuf,

        /// Also write results to an Excel file
        #[arg(long, short = 'o')]
        export: Option<PathBuf>,

        /// Only tickets for this vehicle (case-insensitive)
        #[arg(long)]
        vehicle: Option<String>,

        /// Only tickets recorded on this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default jurisdiction
        #[arg(long)]
        set_jurisdiction: Option<String>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set limit overrides TOML file
        #[arg(long)]
        set_limits_file: Option<PathBuf>,

        /// Stop using a limit overrides file
        #[arg(long)]
        clear_limits_file: bool,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
