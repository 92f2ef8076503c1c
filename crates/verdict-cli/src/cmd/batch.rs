use crate::cmd::OverrideArgs;
use crate::reports;
use crate::store::{load_json, FileResultStore};
use clap::Args;
use std::fs;
use tracing::info;
use verdict_core::batch::{self, BatchOptions};
use verdict_core::consts::DEFAULT_BATCH_CONCURRENCY;
use verdict_core::ending::AnalysisEngine;
use verdict_core::error::VdResult;
use verdict_core::quiz::{Quiz, QuizResponse};
use verdict_core::scorer::Analyzer;
use verdict_core::service::ResultStore;

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    /// Engine definition JSON
    #[arg(short, long)]
    pub engine: String,

    /// Quiz definition JSON
    #[arg(short, long)]
    pub quiz: String,

    /// Directory of response JSON files
    #[arg(short, long)]
    pub responses_dir: String,

    /// Number of analyses running simultaneously
    #[arg(short, long, default_value_t = DEFAULT_BATCH_CONCURRENCY)]
    pub concurrency: usize,

    /// Persist every result into this directory
    #[arg(long)]
    pub save_dir: Option<String>,

    #[command(flatten)]
    pub overrides: OverrideArgs,
}

pub fn run(args: BatchArgs) -> VdResult<()> {
    let engine: AnalysisEngine = load_json(&args.engine)?;
    let quiz: Quiz = load_json(&args.quiz)?;
    let analyzer = Analyzer::new(engine, quiz)?;

    let mut entries: Vec<_> = fs::read_dir(&args.responses_dir)?
        .collect::<Result<Vec<_>, _>>()?;
    entries.sort_by_key(|entry| entry.path());

    let mut responses: Vec<QuizResponse> = Vec::new();
    for entry in entries {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            responses.push(load_json(&path)?);
        }
    }
    info!(
        "📦 Loaded {} responses from {}",
        responses.len(),
        args.responses_dir
    );

    let options = BatchOptions {
        concurrency: args.concurrency,
        overrides: args.overrides.to_overrides(),
    };
    let outcome = batch::run(&analyzer, &responses, &options)?;

    reports::print_batch_summary(&outcome);

    if let Some(dir) = &args.save_dir {
        let store = FileResultStore::new(dir.as_str())?;
        let count = outcome.results.len();
        for result in outcome.results {
            store.create(result)?;
        }
        info!("💾 Saved {} results to {}", count, dir);
    }

    Ok(())
}
