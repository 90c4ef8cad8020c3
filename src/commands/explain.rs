use crate::metrics::MetricKind;
use colored::*;

/// Print the definition of every metric in the record
pub fn explain_metrics() {
    println!("\n{}\n", "=== botmetrics Metrics Reference ===".bold());

    for kind in MetricKind::ALL {
        let unit = if kind.is_ratio() { "ratio" } else { "count" };
        println!("  {} ({})", kind.key().bold(), unit);
        println!("    {}: {}", kind.label(), kind.description());
    }

    println!();
    println!("Ratios print as n/a (null in JSON) when their denominator is zero.");
}
