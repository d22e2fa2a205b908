use anyhow::Result;
use ciascope::cli::{Cli, Commands};
use ciascope::commands;
use clap::Parser;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Assess {
            availability,
            integrity,
            confidentiality,
            cost,
            format,
            dataset,
            output,
        } => commands::assess::run(commands::assess::AssessConfig {
            availability,
            integrity,
            confidentiality,
            cost,
            format,
            dataset,
            output,
        }),
        Commands::Frameworks { format } => commands::frameworks::run(format),
    }
}
