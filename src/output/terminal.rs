//! Terminal output formatting with colors and box drawing.

use colored::Colorize;

use crate::replicates::ReplicateSummary;
use crate::result::{IccResult, Reliability};

/// Format an IccResult for human-readable terminal output.
pub fn format_result(result: &IccResult) -> String {
    let mut output = String::new();
    let sep = "\u{2500}".repeat(62);
    let ms = &result.mean_squares;

    output.push_str("shape-icc: ICC(2,1) absolute agreement\n");
    output.push_str(&sep);
    output.push('\n');
    output.push('\n');

    output.push_str(&format!(
        "  Design: {} subjects \u{00D7} {} raters\n",
        ms.subjects, ms.raters
    ));
    output.push_str(&format!(
        "  Mean squares: MSR {:.4}  MSC {:.4}  MSE {:.4}\n",
        ms.msr, ms.msc, ms.mse
    ));
    output.push('\n');

    output.push_str(&format!(
        "    ICC: {:.4} ({})\n",
        result.icc,
        format_reliability(result.reliability())
    ));
    output.push_str(&format!(
        "    {:.0}% CI: {:.4}\u{2013}{:.4}\n",
        result.confidence * 100.0,
        result.lower_bound,
        result.upper_bound
    ));
    output.push_str(&format!(
        "    F({}, {}) = {:.3} under H0: ICC = {}\n",
        ms.subjects - 1,
        (ms.subjects - 1) * (ms.raters - 1),
        result.f_value,
        result.null_correlation
    ));

    if !result.bounds_bracket_estimate() {
        output.push('\n');
        output.push_str(&format!(
            "  {}\n",
            "\u{26A0} Interval does not contain the estimate".yellow().bold()
        ));
    }

    output.push('\n');
    output.push_str(&sep);
    output.push('\n');
    output.push_str("Note: Bounds use Satterthwaite-approximated degrees of freedom.\n");

    output
}

/// Format a ReplicateSummary for human-readable terminal output.
pub fn format_replicates(summary: &ReplicateSummary) -> String {
    let mut output = String::new();
    let sep = "\u{2500}".repeat(62);

    output.push_str("shape-icc: replicates\n");
    output.push_str(&sep);
    output.push('\n');
    output.push_str(&format!("  Replicates: {}\n\n", summary.area_icc.len()));
    output.push_str(&format!(
        "    Area ICC:  {:.4} ({})\n",
        summary.mean_area_icc,
        format_reliability(Reliability::from_coefficient(summary.mean_area_icc))
    ));
    output.push_str(&format!(
        "    Shape ICC: {:.4} ({})\n",
        summary.mean_shape_icc,
        format_reliability(Reliability::from_coefficient(summary.mean_shape_icc))
    ));
    output.push_str(&sep);
    output.push('\n');

    output
}

/// Format Reliability for display.
fn format_reliability(reliability: Reliability) -> String {
    match reliability {
        Reliability::Excellent => "Excellent".green().to_string(),
        Reliability::Good => "Good".green().to_string(),
        Reliability::Moderate => "Moderate".yellow().to_string(),
        Reliability::Poor => "Poor".red().to_string(),
    }
}
