use crate::cmd::OverrideArgs;
use crate::reports;
use crate::store::{load_json, FileResultStore};
use clap::Args;
use tracing::info;
use verdict_core::ending::AnalysisEngine;
use verdict_core::error::VdResult;
use verdict_core::quiz::{Quiz, QuizResponse};
use verdict_core::scorer::Analyzer;
use verdict_core::service::ResultStore;

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Engine definition JSON
    #[arg(short, long)]
    pub engine: String,

    /// Quiz definition JSON
    #[arg(short, long)]
    pub quiz: String,

    /// Response JSON
    #[arg(short, long)]
    pub response: String,

    /// Persist the result into this directory
    #[arg(long)]
    pub save_dir: Option<String>,

    #[command(flatten)]
    pub overrides: OverrideArgs,
}

pub fn run(args: AnalyzeArgs) -> VdResult<()> {
    let engine: AnalysisEngine = load_json(&args.engine)?;
    let quiz: Quiz = load_json(&args.quiz)?;
    let response: QuizResponse = load_json(&args.response)?;

    info!(
        "🔎 Analyzing response '{}' with engine '{}' v{}",
        response.id, engine.name, engine.version
    );

    let analyzer = Analyzer::new(engine, quiz)?;
    let overrides = args.overrides.to_overrides();
    let result = analyzer.analyze(&response, overrides.as_ref())?;

    reports::print_analysis(&result);
    if let Some(breakdown) = &result.question_breakdown {
        reports::print_breakdown(breakdown);
    }

    if let Some(dir) = &args.save_dir {
        let stored = FileResultStore::new(dir.as_str())?.create(result)?;
        info!(
            "💾 Saved result '{}' to {}",
            stored.id.as_deref().unwrap_or("?"),
            dir
        );
    }

    Ok(())
}
