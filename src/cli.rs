use crate::core::SecurityLevel;
use crate::report::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ciascope")]
#[command(about = "CIA triad security assessment: scores, costs, ROI and compliance", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assess a security posture from three CIA levels
    Assess {
        /// Availability level
        #[arg(short = 'a', long, value_enum, default_value = "none")]
        availability: SecurityLevel,

        /// Integrity level
        #[arg(short = 'i', long, value_enum, default_value = "none")]
        integrity: SecurityLevel,

        /// Confidentiality level
        #[arg(short = 'c', long, value_enum, default_value = "none")]
        confidentiality: SecurityLevel,

        /// Planned implementation cost in dollars, used for the ROI figures
        #[arg(long, default_value_t = 0.0)]
        cost: f64,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Alternate content dataset (JSON), validated before use
        #[arg(long)]
        dataset: Option<PathBuf>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List compliance frameworks and their per-component requirements
    Frameworks {
        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },
}
