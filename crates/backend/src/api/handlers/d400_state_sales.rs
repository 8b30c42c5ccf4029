use axum::{extract::Query, http::StatusCode, Json};
use contracts::dashboards::d400_state_sales::{
    FilterOptions, StateSalesRequest, StateSalesResponse,
};
use contracts::domain::a001_order_item::OrderItem;

use crate::dashboards::d400_state_sales::service;
use crate::shared::config;
use crate::shared::data::dataset;

fn loaded_dataset() -> Result<&'static [OrderItem], StatusCode> {
    dataset::get_dataset().ok_or_else(|| {
        tracing::error!("D400 Dashboard: dataset is not loaded");
        StatusCode::SERVICE_UNAVAILABLE
    })
}

/// GET /api/d400/filter_options
pub async fn get_filter_options() -> Result<Json<FilterOptions>, StatusCode> {
    let items = loaded_dataset()?;
    let options = service::get_filter_options(items);

    tracing::info!(
        "D400 Dashboard: Returning {} states and {} months",
        options.states.len(),
        options.year_months.len()
    );
    Ok(Json(options))
}

/// GET /api/d400/state_sales?states=SP,RJ&year_months=2017-01,2017-02
pub async fn get_state_sales(
    Query(request): Query<StateSalesRequest>,
) -> Result<Json<StateSalesResponse>, StatusCode> {
    tracing::info!(
        "D400 Dashboard: Getting state sales for states={:?} year_months={:?}",
        request.states,
        request.year_months
    );

    let items = loaded_dataset()?;
    let response =
        service::get_state_sales(items, &request, config::pareto_threshold_percent());

    tracing::info!(
        "D400 Dashboard: {} records, {} states in Pareto, {} priority states",
        response.filter.record_count,
        response.pareto.rows.len(),
        response.pareto.concentration.states.len()
    );
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::analytics::fixtures::three_items;

    fn ensure_dataset() {
        // Shared by every test in this process; a second set is a no-op
        let _ = dataset::initialize_dataset(three_items());
    }

    #[tokio::test]
    async fn test_filter_options_handler() {
        ensure_dataset();
        let Json(options) = get_filter_options().await.unwrap();
        assert_eq!(options.states, vec!["RJ", "SP"]);
        assert_eq!(options.default_year_months, vec!["2023-01", "2023-02"]);
    }

    #[tokio::test]
    async fn test_state_sales_handler() {
        ensure_dataset();
        let request = StateSalesRequest {
            states: Some("SP".to_string()),
            year_months: None,
        };
        let Json(response) = get_state_sales(Query(request)).await.unwrap();
        assert_eq!(response.metrics.total_sales, 150.0);
        assert_eq!(response.filter.states, vec!["SP"]);
    }
}
