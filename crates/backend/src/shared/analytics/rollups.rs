use contracts::domain::a001_order_item::OrderItem;
use std::collections::HashSet;

use super::aggregation::{customer_unique_id, seller_id};

/// Headline totals of a filtered view
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rollups {
    pub total_sales: f64,
    pub total_customers: u64,
    pub total_sellers: u64,
}

impl Rollups {
    pub fn compute(records: &[&OrderItem]) -> Self {
        Self {
            total_sales: total_sales(records),
            total_customers: total_customers(records),
            total_sellers: total_sellers(records),
        }
    }
}

pub fn total_sales(records: &[&OrderItem]) -> f64 {
    records.iter().map(|item| item.price()).sum()
}

/// Distinct `customer_unique_id`; the per-group customer charts count `customer_id` instead
pub fn total_customers(records: &[&OrderItem]) -> u64 {
    distinct_count(records, customer_unique_id)
}

pub fn total_sellers(records: &[&OrderItem]) -> u64 {
    distinct_count(records, seller_id)
}

fn distinct_count<'a, F>(records: &[&'a OrderItem], id_fn: F) -> u64
where
    F: Fn(&'a OrderItem) -> &'a str,
{
    records
        .iter()
        .map(|&item| id_fn(item))
        .collect::<HashSet<_>>()
        .len() as u64
}

/// `part` as a percentage of `total`, 0 when the total is 0
pub fn share_percent(part: f64, total: f64) -> f64 {
    if total == 0.0 {
        0.0
    } else {
        part / total * 100.0
    }
}
