use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Query for the state sales dashboard
///
/// Both selections are comma separated lists, e.g. `states=SP,RJ&year_months=2017-01,2017-02`.
/// A missing or blank selection means "no filtering" on that dimension.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StateSalesRequest {
    #[serde(default)]
    pub states: Option<String>,
    #[serde(default)]
    pub year_months: Option<String>,
}

impl StateSalesRequest {
    pub fn selected_states(&self) -> BTreeSet<String> {
        split_selection(self.states.as_deref())
    }

    pub fn selected_year_months(&self) -> BTreeSet<String> {
        split_selection(self.year_months.as_deref())
    }
}

fn split_selection(raw: Option<&str>) -> BTreeSet<String> {
    raw.map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

/// Values available to the filter controls, taken from the unfiltered dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Distinct customer states, sorted
    pub states: Vec<String>,
    /// Distinct purchase months ("YYYY-MM"), sorted
    pub year_months: Vec<String>,
    /// Initial month selection (all months)
    pub default_year_months: Vec<String>,
}

/// Filter that produced the response, echoed back after parsing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedFilter {
    pub states: Vec<String>,
    pub year_months: Vec<String>,
    /// Number of order items left after filtering
    pub record_count: usize,
}

/// Headline figures over the filtered items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadlineMetrics {
    pub total_sales: f64,
    /// Distinct `customer_unique_id`
    pub total_customers: u64,
    pub total_sellers: u64,
    /// e.g. "R$1,234.50"
    pub total_sales_display: String,
    pub total_customers_display: String,
    pub total_sellers_display: String,
}

/// One group of a grouped aggregation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateRow<T> {
    /// State code or "YYYY-MM"
    pub key: String,
    pub value: T,
}

/// Aggregation table plus the labels needed to draw it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartTable<T> {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub rows: Vec<AggregateRow<T>>,
}

/// Bar charts grouped by state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateCharts {
    /// Sum of price by customer state
    pub sales: ChartTable<f64>,
    /// Distinct `customer_id` by customer state
    pub customers: ChartTable<u64>,
    /// Distinct `seller_id` by seller state
    pub sellers: ChartTable<u64>,
}

/// Line charts grouped by purchase month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthCharts {
    pub sales: ChartTable<f64>,
    pub customers: ChartTable<u64>,
    pub sellers: ChartTable<u64>,
}

/// Pareto table row: distinct customers of a state and the running share
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParetoRow {
    pub key: String,
    pub value: u64,
    pub cumulative_percent: f64,
}

/// What the priority states (cumulative share <= threshold) represent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcentrationSummary {
    pub threshold_percent: f64,
    /// Priority states in Pareto order
    pub states: Vec<String>,
    pub customers: u64,
    pub customers_share_percent: f64,
    pub sellers: u64,
    pub sellers_share_percent: f64,
    pub sales: f64,
    pub sales_share_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParetoSection {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub cumulative_label: String,
    pub rows: Vec<ParetoRow>,
    pub concentration: ConcentrationSummary,
    /// Narrative lines, rendered in order
    pub recommendation: Vec<String>,
}

/// Response for the state sales dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSalesResponse {
    pub filter: AppliedFilter,
    pub metrics: HeadlineMetrics,
    pub by_state: StateCharts,
    pub by_month: MonthCharts,
    pub pareto: ParetoSection,
}
