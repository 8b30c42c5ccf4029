use contracts::domain::a001_order_item::OrderItem;
use once_cell::sync::OnceCell;

/// Order items loaded once at startup, read-only afterwards
static DATASET: OnceCell<Vec<OrderItem>> = OnceCell::new();

pub fn initialize_dataset(items: Vec<OrderItem>) -> anyhow::Result<()> {
    DATASET
        .set(items)
        .map_err(|_| anyhow::anyhow!("dataset is already initialized"))
}

/// `None` until [`initialize_dataset`] has run
pub fn get_dataset() -> Option<&'static [OrderItem]> {
    DATASET.get().map(Vec::as_slice)
}
