use contracts::domain::a001_order_item::OrderItem;
use std::collections::BTreeSet;

/// Selected customer states and purchase months
///
/// An empty set disables filtering on that dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SalesFilter {
    pub states: BTreeSet<String>,
    pub year_months: BTreeSet<String>,
}

impl SalesFilter {
    pub fn with_states<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.states = states.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_year_months<I, S>(mut self, year_months: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.year_months = year_months.into_iter().map(Into::into).collect();
        self
    }

    pub fn matches(&self, item: &OrderItem) -> bool {
        (self.states.is_empty() || self.states.contains(item.customer_state()))
            && (self.year_months.is_empty() || self.year_months.contains(item.year_month()))
    }
}

/// Keep the items accepted by `filter`, preserving input order
///
/// Accepts the loaded table (`&[OrderItem]`) as well as a previous view
/// (`view.iter().copied()`), so filters can be chained.
pub fn apply<'a, I>(records: I, filter: &SalesFilter) -> Vec<&'a OrderItem>
where
    I: IntoIterator<Item = &'a OrderItem>,
{
    records
        .into_iter()
        .filter(|item| filter.matches(item))
        .collect()
}
