use contracts::dashboards::d400_state_sales::AggregateRow;
use contracts::domain::a001_order_item::OrderItem;
use std::collections::{BTreeMap, HashSet};

// Field accessors usable as group keys and identities.

pub fn customer_state(item: &OrderItem) -> &str {
    item.customer_state()
}

pub fn seller_state(item: &OrderItem) -> &str {
    item.seller_state()
}

pub fn year_month(item: &OrderItem) -> &str {
    item.year_month()
}

pub fn customer_id(item: &OrderItem) -> &str {
    item.customer_id()
}

pub fn customer_unique_id(item: &OrderItem) -> &str {
    item.customer_unique_id()
}

pub fn seller_id(item: &OrderItem) -> &str {
    item.seller_id()
}

pub fn price(item: &OrderItem) -> f64 {
    item.price()
}

/// Sum `measure_fn` within each group
///
/// Groups come back sorted by key ascending.
pub fn sum_by<'a, K, M>(records: &[&'a OrderItem], key_fn: K, measure_fn: M) -> Vec<AggregateRow<f64>>
where
    K: Fn(&'a OrderItem) -> &'a str,
    M: Fn(&'a OrderItem) -> f64,
{
    let mut groups: BTreeMap<&'a str, f64> = BTreeMap::new();
    for &item in records {
        *groups.entry(key_fn(item)).or_insert(0.0) += measure_fn(item);
    }

    groups
        .into_iter()
        .map(|(key, value)| AggregateRow {
            key: key.to_string(),
            value,
        })
        .collect()
}

/// Count distinct `id_fn` values within each group (not rows)
///
/// Groups come back sorted by key ascending.
pub fn distinct_count_by<'a, K, D>(
    records: &[&'a OrderItem],
    key_fn: K,
    id_fn: D,
) -> Vec<AggregateRow<u64>>
where
    K: Fn(&'a OrderItem) -> &'a str,
    D: Fn(&'a OrderItem) -> &'a str,
{
    let mut groups: BTreeMap<&'a str, HashSet<&'a str>> = BTreeMap::new();
    for &item in records {
        groups.entry(key_fn(item)).or_default().insert(id_fn(item));
    }

    groups
        .into_iter()
        .map(|(key, ids)| AggregateRow {
            key: key.to_string(),
            value: ids.len() as u64,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::analytics::fixtures::{item, three_items};
    use crate::shared::analytics::rollups;

    fn view(items: &[OrderItem]) -> Vec<&OrderItem> {
        items.iter().collect()
    }

    #[test]
    fn test_sum_by_state_sorted_by_key() {
        let items = three_items();
        let rows = sum_by(&view(&items), customer_state, price);
        assert_eq!(
            rows,
            vec![
                AggregateRow {
                    key: "RJ".to_string(),
                    value: 200.0
                },
                AggregateRow {
                    key: "SP".to_string(),
                    value: 150.0
                },
            ]
        );
    }

    #[test]
    fn test_group_sums_add_up_to_total_sales() {
        let items = vec![
            item("SP", "SP", "u1", "c1", "s1", 10.25, "2017-01"),
            item("MG", "SP", "u2", "c2", "s2", 3.5, "2017-02"),
            item("SP", "RJ", "u1", "c3", "s3", 7.0, "2017-02"),
            item("BA", "BA", "u4", "c4", "s4", 120.0, "2017-03"),
            item("MG", "MG", "u5", "c5", "s4", 0.0, "2017-03"),
        ];
        let records = view(&items);
        for rows in [
            sum_by(&records, customer_state, price),
            sum_by(&records, seller_state, price),
            sum_by(&records, year_month, price),
        ] {
            let grouped: f64 = rows.iter().map(|r| r.value).sum();
            assert!((grouped - rollups::total_sales(&records)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_distinct_count_ignores_repeated_ids() {
        let items = vec![
            item("SP", "SP", "u1", "c1", "s1", 1.0, "2017-01"),
            item("SP", "SP", "u1", "c1", "s2", 1.0, "2017-01"),
            item("SP", "SP", "u2", "c2", "s1", 1.0, "2017-02"),
            item("RJ", "SP", "u1", "c3", "s1", 1.0, "2017-02"),
        ];
        let rows = distinct_count_by(&view(&items), customer_state, customer_unique_id);
        let counts: Vec<(&str, u64)> = rows.iter().map(|r| (r.key.as_str(), r.value)).collect();
        assert_eq!(counts, vec![("RJ", 1), ("SP", 2)]);

        let by_seller = distinct_count_by(&view(&items), seller_state, seller_id);
        assert_eq!(by_seller.len(), 1);
        assert_eq!(by_seller[0].value, 2);
    }

    #[test]
    fn test_distinct_count_of_key_itself_is_one() {
        let items = three_items();
        let records = view(&items);
        for row in distinct_count_by(&records, customer_state, customer_state) {
            assert_eq!(row.value, 1);
        }
        for row in distinct_count_by(&records, year_month, year_month) {
            assert_eq!(row.value, 1);
        }
    }

    #[test]
    fn test_by_month_groups() {
        let items = three_items();
        let rows = sum_by(&view(&items), year_month, price);
        let keys: Vec<&str> = rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["2023-01", "2023-02"]);
        assert_eq!(rows[0].value, 300.0);
        assert_eq!(rows[1].value, 50.0);
    }

    #[test]
    fn test_empty_input_gives_no_groups() {
        let records: Vec<&OrderItem> = Vec::new();
        assert!(sum_by(&records, customer_state, price).is_empty());
        assert!(distinct_count_by(&records, customer_state, customer_id).is_empty());
    }
}
