use contracts::dashboards::d400_state_sales::ParetoRow;
use contracts::domain::a001_order_item::OrderItem;

use super::aggregation::{customer_state, customer_unique_id, distinct_count_by};

/// Cumulative customer share up to which states count as priority
pub const DEFAULT_THRESHOLD_PERCENT: f64 = 85.0;

/// Distinct unique customers per customer state, largest first, with running share
///
/// Equal counts keep key-ascending order. With no customers at all every
/// row's `cumulative_percent` is 0.
pub fn pareto(records: &[&OrderItem]) -> Vec<ParetoRow> {
    let mut groups = distinct_count_by(records, customer_state, customer_unique_id);
    // sort_by is stable and groups arrive sorted by key
    groups.sort_by(|a, b| b.value.cmp(&a.value));

    let total: u64 = groups.iter().map(|g| g.value).sum();
    let mut running = 0u64;

    groups
        .into_iter()
        .map(|group| {
            running += group.value;
            let cumulative_percent = if total == 0 {
                0.0
            } else {
                running as f64 * 100.0 / total as f64
            };
            ParetoRow {
                key: group.key,
                value: group.value,
                cumulative_percent,
            }
        })
        .collect()
}

/// States whose cumulative share is `<= threshold_percent`, in Pareto order
///
/// The state that pushes the share past the threshold is not included.
pub fn top_concentration(rows: &[ParetoRow], threshold_percent: f64) -> Vec<String> {
    rows.iter()
        .filter(|row| row.cumulative_percent <= threshold_percent)
        .map(|row| row.key.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::analytics::fixtures::item;

    /// `count` distinct customers in `state`
    fn customers(state: &str, count: usize) -> Vec<OrderItem> {
        (0..count)
            .map(|i| {
                let id = format!("{state}-{i}");
                item(state, "SP", &id, &id, "s1", 10.0, "2017-05")
            })
            .collect()
    }

    fn pareto_of(items: &[OrderItem]) -> Vec<ParetoRow> {
        let records: Vec<&OrderItem> = items.iter().collect();
        pareto(&records)
    }

    #[test]
    fn test_tie_keeps_key_order_and_excludes_crossing_state() {
        let mut items = customers("SP", 10);
        items.extend(customers("MG", 10));
        let rows = pareto_of(&items);

        assert_eq!(rows[0].key, "MG");
        assert_eq!(rows[1].key, "SP");
        assert!((rows[0].cumulative_percent - 50.0).abs() < 1e-9);
        assert!((rows[1].cumulative_percent - 100.0).abs() < 1e-9);

        let top = top_concentration(&rows, DEFAULT_THRESHOLD_PERCENT);
        assert_eq!(top, vec!["MG".to_string()]);
    }

    #[test]
    fn test_sorted_descending_and_monotonic() {
        let mut items = customers("RJ", 3);
        items.extend(customers("SP", 12));
        items.extend(customers("BA", 1));
        items.extend(customers("MG", 4));
        let rows = pareto_of(&items);

        let keys: Vec<&str> = rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["SP", "MG", "RJ", "BA"]);
        for pair in rows.windows(2) {
            assert!(pair[0].value >= pair[1].value);
            assert!(pair[0].cumulative_percent <= pair[1].cumulative_percent);
        }
        let last = rows.last().unwrap();
        assert!((last.cumulative_percent - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_counts_unique_customers_not_rows() {
        let items = vec![
            item("SP", "SP", "u1", "c1", "s1", 1.0, "2017-01"),
            item("SP", "SP", "u1", "c2", "s1", 1.0, "2017-02"),
            item("RJ", "SP", "u2", "c3", "s1", 1.0, "2017-02"),
        ];
        let rows = pareto_of(&items);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.value == 1));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        // 17 / 20 = 85% exactly
        let mut items = customers("SP", 17);
        items.extend(customers("RJ", 3));
        let rows = pareto_of(&items);
        assert!((rows[0].cumulative_percent - 85.0).abs() < 1e-9);
        assert_eq!(top_concentration(&rows, 85.0), vec!["SP".to_string()]);
    }

    #[test]
    fn test_single_state_is_never_priority() {
        let rows = pareto_of(&customers("SP", 5));
        assert_eq!(rows.len(), 1);
        assert!(top_concentration(&rows, DEFAULT_THRESHOLD_PERCENT).is_empty());
    }

    #[test]
    fn test_empty_input() {
        let rows = pareto_of(&[]);
        assert!(rows.is_empty());
        assert!(top_concentration(&rows, DEFAULT_THRESHOLD_PERCENT).is_empty());
    }
}
