use crate::cmd::OverrideArgs;
use crate::reports;
use crate::store::load_json;
use clap::Args;
use verdict_core::ending::AnalysisEngine;
use verdict_core::error::VdResult;

#[derive(Args, Debug, Clone)]
pub struct TuneArgs {
    /// Engine definition JSON
    #[arg(short, long)]
    pub engine: String,

    #[command(flatten)]
    pub overrides: OverrideArgs,
}

/// The what-if panel: shows what a tuning session would resolve to,
/// without scoring anything. Bad values fail here, before any analysis.
pub fn run(args: TuneArgs) -> VdResult<()> {
    let engine: AnalysisEngine = load_json(&args.engine)?;
    let overrides = args.overrides.to_overrides();
    let resolved = engine.scoring_config.resolve(overrides.as_ref())?;

    reports::print_config(&engine.scoring_config, &resolved);
    Ok(())
}
