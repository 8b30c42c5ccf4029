use contracts::dashboards::d400_state_sales::ConcentrationSummary;

use crate::shared::format::{format_money, format_number, format_percent};

const CLOSING_ADVICE: &str = "We recommend focusing marketing and sales efforts on at least these \
states to maximize return. Consider expanding strategies to the remaining states only after \
consolidating presence in these priority markets.";

/// Narrative block shown under the Pareto chart
pub fn build(summary: &ConcentrationSummary) -> Vec<String> {
    vec![
        format!(
            "Recommendation: the top {} states concentrate the priority unique customers \
             identified by the Pareto method (up to {}% cumulative), equivalent to:",
            summary.states.len(),
            summary.threshold_percent
        ),
        format!(
            "- {} unique customers ({} of all customers).",
            format_number(summary.customers),
            format_percent(summary.customers_share_percent)
        ),
        format!(
            "- {} unique sellers ({} of all sellers).",
            format_number(summary.sellers),
            format_percent(summary.sellers_share_percent)
        ),
        format!(
            "- {} in sales ({} of total sales).",
            format_money(summary.sales),
            format_percent(summary.sales_share_percent)
        ),
        CLOSING_ADVICE.to_string(),
    ]
}
