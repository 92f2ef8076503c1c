/// Smallest absolute distance from an answered value to any of a rule's
/// ideal answers. `None` marks an ill-formed rule with no ideal answers,
/// which the accumulator skips.
pub fn ideal_distance(value: f64, ideal_answers: &[f64]) -> Option<f64> {
    ideal_answers
        .iter()
        .map(|ideal| (value - ideal).abs())
        .min_by(f64::total_cmp)
}

/// Multiplier applied to a rule's base points as the answer drifts from the
/// nearest ideal. An exact match (distance 0) keeps the full value; each
/// unit of distance shrinks the contribution by `falloff`.
pub fn decay(falloff: f64, distance: f64) -> f64 {
    (1.0 - falloff).clamp(0.0, 1.0).powf(distance)
}
