use chrono::NaiveDateTime;
use serde::Serialize;

/// Format of the month bucket derived from the purchase timestamp
pub const YEAR_MONTH_FORMAT: &str = "%Y-%m";

/// Month bucket ("YYYY-MM") of a purchase moment, truncated, never rounded
pub fn year_month_of(timestamp: &NaiveDateTime) -> String {
    timestamp.format(YEAR_MONTH_FORMAT).to_string()
}

/// Order line item (one row of the consolidated order items table)
///
/// Immutable once loaded: fields are only readable through getters, so
/// `year_month` always matches `purchase_timestamp`.
///
/// ```compile_fail
/// use chrono::NaiveDate;
/// use contracts::domain::a001_order_item::OrderItem;
///
/// let ts = NaiveDate::from_ymd_opt(2017, 1, 5).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let mut item = OrderItem::new("SP", "SP", "u1", "c1", "s1", 10.0, ts);
/// item.price = -5.0;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderItem {
    /// Region code of the buyer (e.g. "SP")
    customer_state: String,

    /// Region code of the seller
    seller_state: String,

    /// Stable buyer identity across orders
    customer_unique_id: String,

    /// Buyer identity of a single order
    customer_id: String,

    seller_id: String,

    /// Line item value, never negative
    price: f64,

    purchase_timestamp: NaiveDateTime,

    year_month: String,
}

impl OrderItem {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        customer_state: impl Into<String>,
        seller_state: impl Into<String>,
        customer_unique_id: impl Into<String>,
        customer_id: impl Into<String>,
        seller_id: impl Into<String>,
        price: f64,
        purchase_timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            customer_state: customer_state.into(),
            seller_state: seller_state.into(),
            customer_unique_id: customer_unique_id.into(),
            customer_id: customer_id.into(),
            seller_id: seller_id.into(),
            price,
            year_month: year_month_of(&purchase_timestamp),
            purchase_timestamp,
        }
    }

    pub fn customer_state(&self) -> &str {
        &self.customer_state
    }

    pub fn seller_state(&self) -> &str {
        &self.seller_state
    }

    pub fn customer_unique_id(&self) -> &str {
        &self.customer_unique_id
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn seller_id(&self) -> &str {
        &self.seller_id
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn purchase_timestamp(&self) -> NaiveDateTime {
        self.purchase_timestamp
    }

    /// Purchase month in format "YYYY-MM"
    pub fn year_month(&self) -> &str {
        &self.year_month
    }
}
