use contracts::dashboards::d400_state_sales::{
    AggregateRow, AppliedFilter, ChartTable, ConcentrationSummary, FilterOptions, HeadlineMetrics,
    MonthCharts, ParetoSection, StateCharts, StateSalesRequest, StateSalesResponse,
};
use contracts::domain::a001_order_item::OrderItem;
use std::collections::BTreeSet;

use crate::shared::analytics::aggregation::{
    customer_id, customer_state, distinct_count_by, price, seller_id, seller_state, sum_by,
    year_month,
};
use crate::shared::analytics::rollups::share_percent;
use crate::shared::analytics::{filter, pareto, Rollups, SalesFilter};
use crate::shared::format::{format_money, format_number};

use super::recommendation;

/// Values for the filter controls, taken from the whole table
pub fn get_filter_options(items: &[OrderItem]) -> FilterOptions {
    let states: BTreeSet<&str> = items.iter().map(|i| i.customer_state()).collect();
    let year_months: BTreeSet<&str> = items.iter().map(|i| i.year_month()).collect();
    let year_months: Vec<String> = year_months.into_iter().map(str::to_string).collect();

    FilterOptions {
        states: states.into_iter().map(str::to_string).collect(),
        // All months are selected initially
        default_year_months: year_months.clone(),
        year_months,
    }
}

/// Get state sales dashboard data for one filter selection
pub fn get_state_sales(
    items: &[OrderItem],
    request: &StateSalesRequest,
    threshold_percent: f64,
) -> StateSalesResponse {
    let sales_filter = SalesFilter::default()
        .with_states(request.selected_states())
        .with_year_months(request.selected_year_months());
    let records = filter::apply(items, &sales_filter);
    let totals = Rollups::compute(&records);

    // === PARETO ===
    let pareto_rows = pareto::pareto(&records);
    let priority_states = pareto::top_concentration(&pareto_rows, threshold_percent);
    let concentration =
        concentration_summary(&records, priority_states, &totals, threshold_percent);
    let recommendation = recommendation::build(&concentration);

    StateSalesResponse {
        filter: AppliedFilter {
            states: sales_filter.states.iter().cloned().collect(),
            year_months: sales_filter.year_months.iter().cloned().collect(),
            record_count: records.len(),
        },
        metrics: headline_metrics(&totals),
        by_state: StateCharts {
            sales: chart(
                "Total Sales by State",
                "State",
                "Sales (R$)",
                sum_by(&records, customer_state, price),
            ),
            customers: chart(
                "Unique Customers by State",
                "State",
                "Unique Customers",
                distinct_count_by(&records, customer_state, customer_id),
            ),
            sellers: chart(
                "Unique Sellers by State",
                "State",
                "Unique Sellers",
                distinct_count_by(&records, seller_state, seller_id),
            ),
        },
        by_month: MonthCharts {
            sales: chart(
                "Sales (R$) by Month",
                "Year-Month",
                "Sales (R$)",
                sum_by(&records, year_month, price),
            ),
            customers: chart(
                "Unique Customers by Month",
                "Year-Month",
                "Unique Customers",
                distinct_count_by(&records, year_month, customer_id),
            ),
            sellers: chart(
                "Unique Sellers by Month",
                "Year-Month",
                "Unique Sellers",
                distinct_count_by(&records, year_month, seller_id),
            ),
        },
        pareto: ParetoSection {
            title: "Pareto - Top States by Number of Customers".to_string(),
            x_label: "State".to_string(),
            y_label: "Unique Customers".to_string(),
            cumulative_label: "Cumulative Percent".to_string(),
            rows: pareto_rows,
            concentration,
            recommendation,
        },
    }
}

fn headline_metrics(totals: &Rollups) -> HeadlineMetrics {
    HeadlineMetrics {
        total_sales: totals.total_sales,
        total_customers: totals.total_customers,
        total_sellers: totals.total_sellers,
        total_sales_display: format_money(totals.total_sales),
        total_customers_display: format_number(totals.total_customers),
        total_sellers_display: format_number(totals.total_sellers),
    }
}

fn chart<T>(title: &str, x_label: &str, y_label: &str, rows: Vec<AggregateRow<T>>) -> ChartTable<T> {
    ChartTable {
        title: title.to_string(),
        x_label: x_label.to_string(),
        y_label: y_label.to_string(),
        rows,
    }
}

/// Totals of the records bought from `states`, and their share of `totals`
fn concentration_summary(
    records: &[&OrderItem],
    states: Vec<String>,
    totals: &Rollups,
    threshold_percent: f64,
) -> ConcentrationSummary {
    // An empty state list selects nothing here (SalesFilter would pass everything)
    let subset: Vec<&OrderItem> = records
        .iter()
        .copied()
        .filter(|item| states.iter().any(|state| state == item.customer_state()))
        .collect();
    let selected = Rollups::compute(&subset);

    ConcentrationSummary {
        threshold_percent,
        states,
        customers: selected.total_customers,
        customers_share_percent: share_percent(
            selected.total_customers as f64,
            totals.total_customers as f64,
        ),
        sellers: selected.total_sellers,
        sellers_share_percent: share_percent(
            selected.total_sellers as f64,
            totals.total_sellers as f64,
        ),
        sales: selected.total_sales,
        sales_share_percent: share_percent(selected.total_sales, totals.total_sales),
    }
}
