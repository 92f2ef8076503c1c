use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use verdict_core::batch::BatchOutcome;
use verdict_core::config::ScoringConfig;
use verdict_core::scorer::{AnalysisResult, RuleContribution};

fn base_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn right_align(table: &mut Table, columns: std::ops::RangeInclusive<usize>) {
    for i in columns {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

pub fn print_analysis(result: &AnalysisResult) {
    let mut table = base_table();
    table.add_row(vec![
        Cell::new("Ending").add_attribute(Attribute::Bold),
        Cell::new("Points"),
        Cell::new("Share").fg(Color::Cyan),
    ]);
    right_align(&mut table, 1..=2);

    for ending in &result.ending_results {
        table.add_row(vec![
            Cell::new(&ending.ending_id).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.2}", ending.points)),
            Cell::new(format!("{:.1}%", ending.display_percentage())).fg(Color::Cyan),
        ]);
    }

    println!(
        "\nEngine {} v{} | response {} | fingerprint {}",
        result.engine_id,
        result.engine_version,
        result.response_id,
        &result.config_fingerprint[..12]
    );
    println!("{table}");
}

pub fn print_breakdown(breakdown: &[RuleContribution]) {
    let mut table = base_table();
    table.add_row(vec![
        Cell::new("Ending").add_attribute(Attribute::Bold),
        Cell::new("Question"),
        Cell::new("Class"),
        Cell::new("Distance"),
        Cell::new("Points").fg(Color::Cyan),
    ]);
    right_align(&mut table, 3..=4);

    for contribution in breakdown {
        let class = if contribution.is_primary {
            Cell::new("primary").fg(Color::Green)
        } else {
            Cell::new("secondary")
        };
        table.add_row(vec![
            Cell::new(&contribution.ending_id),
            Cell::new(&contribution.question_id),
            class,
            Cell::new(format!("{:.1}", contribution.distance)),
            Cell::new(format!("{:.3}", contribution.points)).fg(Color::Cyan),
        ]);
    }

    println!("{table}");
}

pub fn print_batch_summary(outcome: &BatchOutcome) {
    let mut table = base_table();
    table.add_row(vec![
        Cell::new("Response").add_attribute(Attribute::Bold),
        Cell::new("Top Ending"),
        Cell::new("Share").fg(Color::Cyan),
    ]);
    right_align(&mut table, 2..=2);

    for result in &outcome.results {
        match result.top_ending() {
            Some(top) => table.add_row(vec![
                Cell::new(&result.response_id),
                Cell::new(&top.ending_id),
                Cell::new(format!("{:.1}%", top.display_percentage())).fg(Color::Cyan),
            ]),
            None => table.add_row(vec![
                Cell::new(&result.response_id),
                Cell::new("(no ending above threshold)"),
                Cell::new("-"),
            ]),
        };
    }
    println!("\n{table}");

    if !outcome.failures.is_empty() {
        let mut failed = base_table();
        failed.add_row(vec![
            Cell::new("Failed Response").add_attribute(Attribute::Bold),
            Cell::new("Error").fg(Color::Red),
        ]);
        for failure in &outcome.failures {
            failed.add_row(vec![
                Cell::new(&failure.response_id),
                Cell::new(failure.error.to_string()).fg(Color::Red),
            ]);
        }
        println!("{failed}");
    }

    println!(
        "{} analyzed, {} failed",
        outcome.results.len(),
        outcome.failures.len()
    );
}

pub fn print_config(base: &ScoringConfig, resolved: &ScoringConfig) {
    let rows = [
        (
            "primaryPointValue",
            base.primary_point_value.to_string(),
            resolved.primary_point_value.to_string(),
        ),
        (
            "secondaryPointValue",
            base.secondary_point_value.to_string(),
            resolved.secondary_point_value.to_string(),
        ),
        (
            "primaryPointWeight",
            base.primary_point_weight.to_string(),
            resolved.primary_point_weight.to_string(),
        ),
        (
            "secondaryPointWeight",
            base.secondary_point_weight.to_string(),
            resolved.secondary_point_weight.to_string(),
        ),
        (
            "primaryDistanceFalloff",
            base.primary_distance_falloff.to_string(),
            resolved.primary_distance_falloff.to_string(),
        ),
        (
            "secondaryDistanceFalloff",
            base.secondary_distance_falloff.to_string(),
            resolved.secondary_distance_falloff.to_string(),
        ),
        ("beta", base.beta.to_string(), resolved.beta.to_string()),
        (
            "disableSecondaryPoints",
            base.disable_secondary_points.to_string(),
            resolved.disable_secondary_points.to_string(),
        ),
        (
            "primaryMinPoints",
            base.primary_min_points.to_string(),
            resolved.primary_min_points.to_string(),
        ),
        (
            "secondaryMinPoints",
            base.secondary_min_points.to_string(),
            resolved.secondary_min_points.to_string(),
        ),
        (
            "minPercentageThreshold",
            base.min_percentage_threshold.to_string(),
            resolved.min_percentage_threshold.to_string(),
        ),
        (
            "enableQuestionBreakdown",
            base.enable_question_breakdown.to_string(),
            resolved.enable_question_breakdown.to_string(),
        ),
        (
            "maxEndingResults",
            base.max_ending_results.to_string(),
            resolved.max_ending_results.to_string(),
        ),
    ];

    let mut table = base_table();
    table.add_row(vec![
        Cell::new("Setting").add_attribute(Attribute::Bold),
        Cell::new("Stored"),
        Cell::new("Resolved"),
    ]);
    right_align(&mut table, 1..=2);

    for (name, stored, effective) in rows {
        let changed = stored != effective;
        let resolved_cell = if changed {
            Cell::new(&effective).fg(Color::Yellow)
        } else {
            Cell::new(&effective)
        };
        table.add_row(vec![Cell::new(name), Cell::new(stored), resolved_cell]);
    }

    println!("\n{table}");
}
