use crate::config::ScoringConfig;
use crate::ending::EndingDefinition;
use crate::scorer::distance::{decay, ideal_distance};
use crate::scorer::types::{RawEndingScore, RuleContribution};
use std::collections::HashMap;

/// Numeric answers keyed by question id, restricted to scoreable questions.
pub type AnswerIndex = HashMap<String, f64>;

/// Folds every answered rule of one ending into its raw score.
///
/// `rule_order` carries the rule indices in the fixed evaluation order
/// (ascending question id, then declaration order), so identical inputs
/// always accumulate in the same sequence and produce bit-identical floats.
pub fn score_ending(
    ending: &EndingDefinition,
    rule_order: &[usize],
    answers: &AnswerIndex,
    config: &ScoringConfig,
    breakdown: &mut Option<Vec<RuleContribution>>,
) -> RawEndingScore {
    let mut primary = 0.0f64;
    let mut secondary = 0.0f64;

    for &rule_idx in rule_order {
        let rule = &ending.rules[rule_idx];

        // Unanswered or non-numeric: the rule contributes nothing.
        let Some(&value) = answers.get(&rule.question_id) else {
            continue;
        };
        // Ill-formed rule with no ideal answers: skipped, never an error.
        let Some(dist) = ideal_distance(value, &rule.ideal_answers) else {
            continue;
        };

        let (base, weight, falloff) = if rule.is_primary {
            (
                config.primary_point_value,
                config.primary_point_weight,
                config.primary_distance_falloff,
            )
        } else {
            (
                config.secondary_point_value,
                config.secondary_point_weight,
                config.secondary_distance_falloff,
            )
        };

        let points = if !rule.is_primary && config.disable_secondary_points {
            0.0
        } else {
            base * weight * decay(falloff, dist)
        };

        if rule.is_primary {
            primary += points;
        } else {
            secondary += points;
        }

        if let Some(trace) = breakdown {
            trace.push(RuleContribution {
                ending_id: ending.ending_id.clone(),
                question_id: rule.question_id.clone(),
                is_primary: rule.is_primary,
                distance: dist,
                points,
            });
        }
    }

    // Per-class floor: a class that fails to clear its minimum is zeroed
    // entirely instead of contributing a weak partial match.
    if primary < config.primary_min_points {
        primary = 0.0;
    }
    if secondary < config.secondary_min_points {
        secondary = 0.0;
    }

    RawEndingScore {
        ending_id: ending.ending_id.clone(),
        primary_points: primary,
        secondary_points: secondary,
    }
}
