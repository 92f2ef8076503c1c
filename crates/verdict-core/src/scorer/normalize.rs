use crate::config::ScoringConfig;
use crate::consts::{PERCENT_SUM_EPSILON, PERCENT_TOTAL};
use crate::scorer::types::{EndingResult, RawEndingScore};

/// Separation curve applied to a raw score before normalization. Isolated
/// here so the curve can change without touching threshold or truncation
/// handling.
#[inline]
pub fn separation_weight(raw_score: f64, beta: f64) -> f64 {
    raw_score.powf(beta)
}

/// Converts raw ending scores into the ranked, filtered percentage
/// distribution. Percentages always reflect the full population; filtering
/// and truncation only narrow what is returned, never re-normalize.
pub fn normalize(raw_scores: &[RawEndingScore], config: &ScoringConfig) -> Vec<EndingResult> {
    if raw_scores.is_empty() {
        return Vec::new();
    }

    let all_zero = raw_scores.iter().all(|s| s.total() == 0.0);
    let weighted: Vec<f64> = if all_zero {
        // Degenerate response: an even tie across all endings, not NaN.
        vec![1.0; raw_scores.len()]
    } else {
        raw_scores
            .iter()
            .map(|s| separation_weight(s.total(), config.beta))
            .collect()
    };

    let sum: f64 = weighted.iter().sum();

    let mut results: Vec<EndingResult> = raw_scores
        .iter()
        .zip(&weighted)
        .map(|(raw, w)| EndingResult {
            ending_id: raw.ending_id.clone(),
            points: raw.total(),
            percentage: PERCENT_TOTAL * w / sum,
        })
        .collect();

    debug_assert!(
        (results.iter().map(|r| r.percentage).sum::<f64>() - PERCENT_TOTAL).abs()
            < PERCENT_SUM_EPSILON
    );

    results.retain(|r| r.percentage >= config.min_percentage_threshold);
    results.sort_by(|a, b| {
        b.percentage
            .total_cmp(&a.percentage)
            .then_with(|| a.ending_id.cmp(&b.ending_id))
    });
    results.truncate(config.max_ending_results);
    results
}
