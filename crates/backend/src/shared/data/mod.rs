pub mod dataset;
pub mod error;
pub mod order_items_csv;

pub use error::DatasetError;
