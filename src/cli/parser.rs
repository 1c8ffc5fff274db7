use clap::{Parser, Subcommand};

/// Command-line interface definition for tracksheet
/// CLI application to validate a CSV time-tracking ledger and report
/// worked time and balance
#[derive(Parser)]
#[command(
    name = "tracksheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple timesheet CLI: validate a CSV ledger and report worked time and balance",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate the ledger and write the report tree
    Report {
        /// Ledger root directory (one subdirectory per year)
        ledger: String,

        /// Output directory (destroyed and recreated on each run)
        out: String,

        /// Report language. Examples: "pt-br", "pt-BR", "pt_BR"
        #[arg(short = 'l', long = "lang", help = "Translate report output to the given language")]
        lang: Option<String>,

        /// Daily hour quota for the balance policy (overrides the configured value)
        #[arg(long = "hours", help = "Daily hour quota for the balance policy")]
        hours: Option<i64>,
    },

    /// Append one day record to the ledger
    Add {
        /// Ledger root directory
        ledger: String,

        /// Date of the record (YYYY-MM-DD)
        date: String,

        /// Day type code
        #[arg(
            long = "type",
            default_value = "NOR",
            help = "Day type: NOR=Normal, WE=Weekend, HOL=Holiday, VAC=Vacation, ABS=Absence, COM=Compensation, Z=Other"
        )]
        day_type: String,

        /// Check-in time (HH:MM)
        #[arg(long = "in", help = "Check-in time (HH:MM)")]
        start: Option<String>,

        /// Check-out time (HH:MM)
        #[arg(long = "out", help = "Check-out time (HH:MM)")]
        end: Option<String>,
    },

    /// Import day records from a timerec CSV export
    Import {
        /// Ledger root directory
        ledger: String,

        /// Path of the timerec export file
        csv: String,
    },
}
