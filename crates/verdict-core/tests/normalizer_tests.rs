use rstest::rstest;
use verdict_core::config::ScoringConfig;
use verdict_core::scorer::normalize::{normalize, separation_weight};
use verdict_core::scorer::types::RawEndingScore;

fn raw(ending_id: &str, points: f64) -> RawEndingScore {
    RawEndingScore {
        ending_id: ending_id.to_string(),
        primary_points: points,
        secondary_points: 0.0,
    }
}

fn config() -> ScoringConfig {
    ScoringConfig::default()
}

#[test]
fn full_distribution_sums_to_one_hundred() {
    let scores = vec![raw("a", 12.5), raw("b", 7.25), raw("c", 0.125)];
    let results = normalize(&scores, &config());

    let sum: f64 = results.iter().map(|r| r.percentage).sum();
    assert!((sum - 100.0).abs() < 1e-9);
}

#[test]
fn all_zero_scores_fall_back_to_uniform() {
    let scores = vec![raw("a", 0.0), raw("b", 0.0), raw("c", 0.0), raw("d", 0.0)];
    let results = normalize(&scores, &config());

    assert_eq!(results.len(), 4);
    for r in &results {
        assert!((r.percentage - 25.0).abs() < 1e-9);
        assert_eq!(r.points, 0.0);
    }
}

#[test]
fn threshold_drops_without_renormalizing() {
    let mut cfg = config();
    cfg.min_percentage_threshold = 25.0;
    let scores = vec![raw("a", 50.0), raw("b", 30.0), raw("c", 20.0)];
    let results = normalize(&scores, &cfg);

    // c sits at 20% and is dropped; the survivors keep their original
    // full-population shares and sum to 80, not 100.
    assert_eq!(results.len(), 2);
    assert!((results[0].percentage - 50.0).abs() < 1e-9);
    assert!((results[1].percentage - 30.0).abs() < 1e-9);
}

#[test]
fn percentage_exactly_at_threshold_is_kept() {
    let mut cfg = config();
    cfg.min_percentage_threshold = 20.0;
    let scores = vec![raw("a", 50.0), raw("b", 30.0), raw("c", 20.0)];
    let results = normalize(&scores, &cfg);

    assert_eq!(results.len(), 3);
}

#[test]
fn truncation_keeps_the_top_results() {
    let mut cfg = config();
    cfg.max_ending_results = 2;
    let scores = vec![raw("a", 1.0), raw("b", 5.0), raw("c", 3.0), raw("d", 4.0)];
    let results = normalize(&scores, &cfg);

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].ending_id, "b");
    assert_eq!(results[1].ending_id, "d");
}

#[test]
fn results_sort_descending_with_ties_broken_by_ending_id() {
    let scores = vec![
        raw("the-wanderer", 5.0),
        raw("the-anchor", 5.0),
        raw("the-spark", 9.0),
    ];
    let results = normalize(&scores, &config());

    let ids: Vec<&str> = results.iter().map(|r| r.ending_id.as_str()).collect();
    assert_eq!(ids, vec!["the-spark", "the-anchor", "the-wanderer"]);
}

#[rstest]
#[case(1.0, 2.0)]
#[case(2.0, 3.0)]
#[case(0.5, 1.0)]
fn higher_beta_sharpens_the_winner(#[case] low_beta: f64, #[case] high_beta: f64) {
    let scores = vec![raw("a", 9.0), raw("b", 3.0), raw("c", 3.0)];

    let mut low = config();
    low.beta = low_beta;
    let mut high = config();
    high.beta = high_beta;

    let low_results = normalize(&scores, &low);
    let high_results = normalize(&scores, &high);

    assert!(high_results[0].percentage > low_results[0].percentage);
    for (h, l) in high_results[1..].iter().zip(&low_results[1..]) {
        assert!(h.percentage < l.percentage);
    }
}

#[test]
fn beta_one_is_linear_proportional_scoring() {
    let scores = vec![raw("a", 6.0), raw("b", 3.0), raw("c", 1.0)];
    let results = normalize(&scores, &config());

    assert!((results[0].percentage - 60.0).abs() < 1e-9);
    assert!((results[1].percentage - 30.0).abs() < 1e-9);
    assert!((results[2].percentage - 10.0).abs() < 1e-9);
}

#[rstest]
#[case(0.0, 1.0, 0.0)]
#[case(4.0, 1.0, 4.0)]
#[case(3.0, 2.0, 9.0)]
#[case(2.0, 3.0, 8.0)]
fn separation_weight_is_a_power_law(#[case] score: f64, #[case] beta: f64, #[case] expected: f64) {
    assert!((separation_weight(score, beta) - expected).abs() < 1e-12);
}

#[test]
fn uniform_fallback_still_passes_through_the_threshold() {
    // Documented behavior: the fallback distribution is filtered like any
    // other, so a threshold above the uniform share empties the output.
    let mut cfg = config();
    cfg.min_percentage_threshold = 30.0;
    let scores = vec![raw("a", 0.0), raw("b", 0.0), raw("c", 0.0), raw("d", 0.0)];
    let results = normalize(&scores, &cfg);

    assert!(results.is_empty());
}

#[test]
fn empty_input_yields_empty_output() {
    let results = normalize(&[], &config());
    assert!(results.is_empty());
}

#[test]
fn display_percentage_rounds_to_one_decimal() {
    let scores = vec![raw("a", 2.0), raw("b", 1.0)];
    let results = normalize(&scores, &config());

    // 66.666..% and 33.333..% keep full precision internally.
    assert!((results[0].percentage - 200.0 / 3.0).abs() < 1e-9);
    assert_eq!(results[0].display_percentage(), 66.7);
    assert_eq!(results[1].display_percentage(), 33.3);
}
