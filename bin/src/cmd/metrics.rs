//! Metric listing command.

use stalwart_eval::{EvaluationConfig, Rule};
use stalwart_metrics::registry::{available_categories, metrics_by_category};
use stalwart_traits::DEFAULT_PERIODS;

/// List derived metrics, optionally filtered by category, then the rating rules.
pub(crate) fn list_metrics(category: Option<&str>, verbose: bool, config: &EvaluationConfig) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Available Metrics                         ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    for cat in available_categories() {
        let cat_name = format!("{cat:?}");
        if let Some(filter) = category
            && !cat_name.to_lowercase().contains(&filter.to_lowercase())
        {
            continue;
        }

        println!("{}:", cat_name);
        println!("{}", "-".repeat(60));
        if verbose {
            println!("  {}", cat.description());
        }

        for info in metrics_by_category(&cat) {
            if verbose {
                let history = if info.requires_history { ", needs history" } else { "" };
                println!(
                    "  {:30} - {} (unit: {}{})",
                    info.name,
                    info.description,
                    if info.unit.is_empty() { "none" } else { info.unit },
                    history
                );
            } else {
                println!("  {}", info.name);
            }
        }
        println!();
    }

    if !verbose {
        println!("Use --verbose for detailed metric descriptions.\n");
    }

    println!("Rating rules:");
    for (i, rule) in Rule::ALL.iter().enumerate() {
        println!("  {}. {}", i + 1, rule.describe(&config.criteria, DEFAULT_PERIODS));
    }
    println!(
        "\nGraham multiplier: {} (classic: {})",
        config.graham.multiplier,
        stalwart_metrics::value::CLASSIC_MULTIPLIER
    );
    println!();
}
