use clap::{Parser, Subcommand};
use std::process;
use tracing::error;

mod cmd;
mod reports;
mod store;

#[derive(Parser, Debug)]
#[command(author, version, about = "Quiz response analysis engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a single response against an engine/quiz pair
    Analyze(cmd::analyze::AnalyzeArgs),
    /// Analyze a directory of responses with bounded concurrency
    Batch(cmd::batch::BatchArgs),
    /// Resolve config overrides against an engine without running an analysis
    Tune(cmd::tune::TuneArgs),
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Analyze(args) => cmd::analyze::run(args),
        Commands::Batch(args) => cmd::batch::run(args),
        Commands::Tune(args) => cmd::tune::run(args),
    };

    if let Err(e) = outcome {
        error!("❌ {e}");
        process::exit(1);
    }
}
