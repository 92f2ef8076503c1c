use crate::error::{VdResult, VerdictError};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// The tunable knobs of the scoring pipeline. Stored on the engine,
/// optionally overridden per call via [`ScoringOverrides`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoringConfig {
    /// Base points a primary rule is worth on an exact match.
    pub primary_point_value: f64,
    /// Base points a secondary rule is worth on an exact match.
    pub secondary_point_value: f64,
    pub primary_point_weight: f64,
    pub secondary_point_weight: f64,
    /// Per-step decay rate for primary rules, in [0, 1].
    pub primary_distance_falloff: f64,
    /// Per-step decay rate for secondary rules, in [0, 1].
    pub secondary_distance_falloff: f64,
    /// Separation exponent applied to raw scores before normalization.
    /// 1.0 is linear proportional scoring; larger values make the winning
    /// ending more dominant.
    pub beta: f64,
    pub disable_secondary_points: bool,
    /// Floor below which an ending's primary-class points are discarded.
    pub primary_min_points: f64,
    /// Floor below which an ending's secondary-class points are discarded.
    pub secondary_min_points: f64,
    /// Endings whose percentage falls below this are dropped from output.
    pub min_percentage_threshold: f64,
    /// Retain the per-question contribution trace on the result.
    pub enable_question_breakdown: bool,
    /// Cap on the number of endings returned.
    pub max_ending_results: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            primary_point_value: 10.0,
            secondary_point_value: 5.0,
            primary_point_weight: 1.0,
            secondary_point_weight: 1.0,
            primary_distance_falloff: 0.1,
            secondary_distance_falloff: 0.5,
            beta: 1.0,
            disable_secondary_points: false,
            primary_min_points: 0.0,
            secondary_min_points: 0.0,
            min_percentage_threshold: 0.0,
            enable_question_breakdown: false,
            max_ending_results: 10,
        }
    }
}

/// Partial counterpart of [`ScoringConfig`] for interactive what-if tuning.
/// Absent fields fall back to the stored value during resolution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoringOverrides {
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_point_value: Option<f64>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_point_value: Option<f64>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_point_weight: Option<f64>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_point_weight: Option<f64>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_distance_falloff: Option<f64>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_distance_falloff: Option<f64>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beta: Option<f64>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_secondary_points: Option<bool>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_min_points: Option<f64>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_min_points: Option<f64>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_percentage_threshold: Option<f64>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_question_breakdown: Option<bool>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_ending_results: Option<usize>,
}

impl ScoringOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl ScoringConfig {
    /// Coalesces an optional partial override onto this config, field by
    /// field, and validates the outcome. Out-of-range values fail the call;
    /// nothing is ever silently clamped.
    pub fn resolve(&self, overrides: Option<&ScoringOverrides>) -> VdResult<ScoringConfig> {
        let mut resolved = self.clone();

        if let Some(o) = overrides {
            macro_rules! coalesce {
                ($($field:ident),+ $(,)?) => {
                    $( if let Some(v) = o.$field { resolved.$field = v; } )+
                };
            }

            coalesce!(
                primary_point_value,
                secondary_point_value,
                primary_point_weight,
                secondary_point_weight,
                primary_distance_falloff,
                secondary_distance_falloff,
                beta,
                disable_secondary_points,
                primary_min_points,
                secondary_min_points,
                min_percentage_threshold,
                enable_question_breakdown,
                max_ending_results,
            );
        }

        resolved.validate()?;
        Ok(resolved)
    }

    pub fn validate(&self) -> VdResult<()> {
        if !(0.0..=1.0).contains(&self.primary_distance_falloff) {
            return Err(VerdictError::Config(format!(
                "primaryDistanceFalloff must be within [0, 1], got {}",
                self.primary_distance_falloff
            )));
        }
        if !(0.0..=1.0).contains(&self.secondary_distance_falloff) {
            return Err(VerdictError::Config(format!(
                "secondaryDistanceFalloff must be within [0, 1], got {}",
                self.secondary_distance_falloff
            )));
        }
        if self.beta <= 0.0 || !self.beta.is_finite() {
            return Err(VerdictError::Config(format!(
                "beta must be a positive finite number, got {}",
                self.beta
            )));
        }
        if self.max_ending_results < 1 {
            return Err(VerdictError::Config(
                "maxEndingResults must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
