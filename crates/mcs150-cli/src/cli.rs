use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Fill and inspect FMCSA MCS-150 form PDFs.
#[derive(Debug, Parser)]
#[command(name = "mcs150", about, version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a filing into a filled copy of the template
    Fill {
        /// Path to the filing JSON file
        #[arg(value_name = "FILING")]
        filing: PathBuf,

        /// Path to the MCS-150 template PDF
        #[arg(long, value_name = "FILE")]
        template: PathBuf,

        /// Where to write the filled PDF
        #[arg(short, long, value_name = "FILE")]
        out: PathBuf,
    },

    /// List the named form fields of a template
    Fields {
        /// Path to the template PDF
        #[arg(value_name = "FILE")]
        template: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Output format for the fields listing.
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated text
    Text,
    /// JSON array
    Json,
}
