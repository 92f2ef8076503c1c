pub mod analyze;
pub mod batch;
pub mod tune;

use clap::Args;
use verdict_core::config::ScoringOverrides;

/// One flag per scoring knob. Absent flags fall back to the engine's stored
/// config during resolution; out-of-range values fail the command.
#[derive(Args, Debug, Clone, Default)]
pub struct OverrideArgs {
    #[arg(long)]
    pub primary_point_value: Option<f64>,
    #[arg(long)]
    pub secondary_point_value: Option<f64>,
    #[arg(long)]
    pub primary_point_weight: Option<f64>,
    #[arg(long)]
    pub secondary_point_weight: Option<f64>,
    #[arg(long)]
    pub primary_distance_falloff: Option<f64>,
    #[arg(long)]
    pub secondary_distance_falloff: Option<f64>,
    #[arg(long)]
    pub beta: Option<f64>,
    #[arg(long)]
    pub disable_secondary_points: Option<bool>,
    #[arg(long)]
    pub primary_min_points: Option<f64>,
    #[arg(long)]
    pub secondary_min_points: Option<f64>,
    #[arg(long)]
    pub min_percentage_threshold: Option<f64>,
    #[arg(long)]
    pub enable_question_breakdown: Option<bool>,
    #[arg(long)]
    pub max_ending_results: Option<usize>,
}

impl OverrideArgs {
    pub fn to_overrides(&self) -> Option<ScoringOverrides> {
        let overrides = ScoringOverrides {
            primary_point_value: self.primary_point_value,
            secondary_point_value: self.secondary_point_value,
            primary_point_weight: self.primary_point_weight,
            secondary_point_weight: self.secondary_point_weight,
            primary_distance_falloff: self.primary_distance_falloff,
            secondary_distance_falloff: self.secondary_distance_falloff,
            beta: self.beta,
            disable_secondary_points: self.disable_secondary_points,
            primary_min_points: self.primary_min_points,
            secondary_min_points: self.secondary_min_points,
            min_percentage_threshold: self.min_percentage_threshold,
            enable_question_breakdown: self.enable_question_breakdown,
            max_ending_results: self.max_ending_results,
        };
        (!overrides.is_empty()).then_some(overrides)
    }
}
