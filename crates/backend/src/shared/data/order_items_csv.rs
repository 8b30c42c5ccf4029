use chrono::{NaiveDate, NaiveDateTime};
use contracts::domain::a001_order_item::OrderItem;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::DatasetError;

const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Columns read from the consolidated order items file; others are ignored
#[derive(Debug, Deserialize)]
struct OrderItemRow {
    customer_state: String,
    seller_state: String,
    customer_id: String,
    customer_unique_id: String,
    seller_id: String,
    price: f64,
    order_purchase_timestamp: String,
}

/// Load the order items table from a CSV file
pub fn load_order_items(path: &Path) -> Result<Vec<OrderItem>, DatasetError> {
    let file = File::open(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let items = parse_order_items(BufReader::new(file))?;
    tracing::info!(
        "Loaded {} order items from {}",
        items.len(),
        path.display()
    );
    Ok(items)
}

/// Parse order items from CSV text with a header row
pub fn parse_order_items<R: Read>(reader: R) -> Result<Vec<OrderItem>, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    tracing::debug!("Order items CSV headers: {:?}", headers.iter().collect::<Vec<_>>());

    let mut items = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let row: OrderItemRow = record.deserialize(Some(&headers))?;

        if !row.price.is_finite() || row.price < 0.0 {
            return Err(DatasetError::InvalidPrice {
                line,
                price: row.price,
            });
        }

        let purchase_timestamp = parse_timestamp(&row.order_purchase_timestamp).ok_or_else(|| {
            DatasetError::InvalidTimestamp {
                line,
                value: row.order_purchase_timestamp.clone(),
            }
        })?;

        items.push(OrderItem::new(
            row.customer_state,
            row.seller_state,
            row.customer_unique_id,
            row.customer_id,
            row.seller_id,
            row.price,
            purchase_timestamp,
        ));
    }

    Ok(items)
}

fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "order_id,customer_id,customer_unique_id,customer_state,seller_id,seller_state,price,order_purchase_timestamp";

    fn csv_text(rows: &[&str]) -> String {
        let mut text = String::from(HEADER);
        for row in rows {
            text.push('\n');
            text.push_str(row);
        }
        text
    }

    #[test]
    fn test_parse_rows_by_header_name() {
        let text = csv_text(&[
            "o1,c1,u1,SP,s1,RJ,58.90,2017-09-13 08:59:02",
            "o2,c2,u2,RJ,s2,SP,239.90,2018-01-01 00:00:00",
        ]);
        let items = parse_order_items(text.as_bytes()).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].customer_state(), "SP");
        assert_eq!(items[0].seller_state(), "RJ");
        assert_eq!(items[0].customer_unique_id(), "u1");
        assert_eq!(items[0].customer_id(), "c1");
        assert_eq!(items[0].price(), 58.90);
        assert_eq!(items[0].year_month(), "2017-09");
        assert_eq!(items[1].year_month(), "2018-01");
    }

    #[test]
    fn test_header_only_gives_empty_table() {
        let items = parse_order_items(HEADER.as_bytes()).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_negative_price_is_rejected_with_line() {
        let text = csv_text(&[
            "o1,c1,u1,SP,s1,RJ,10.0,2017-09-13 08:59:02",
            "o2,c2,u2,RJ,s2,SP,-1.5,2017-09-13 08:59:02",
        ]);
        match parse_order_items(text.as_bytes()) {
            Err(DatasetError::InvalidPrice { line, price }) => {
                assert_eq!(line, 3);
                assert_eq!(price, -1.5);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_non_finite_price_is_rejected() {
        for price in ["inf", "-inf", "NaN"] {
            let text = csv_text(&[&format!("o1,c1,u1,SP,s1,RJ,{price},2017-09-13 08:59:02")]);
            match parse_order_items(text.as_bytes()) {
                Err(err @ DatasetError::InvalidPrice { line: 2, .. }) => {
                    assert!(err.to_string().contains("finite non-negative"));
                }
                other => panic!("{price}: unexpected result: {other:?}"),
            }
        }
    }

    #[test]
    fn test_bad_timestamp_is_rejected() {
        let text = csv_text(&["o1,c1,u1,SP,s1,RJ,10.0,13/09/2017"]);
        let err = parse_order_items(text.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidTimestamp { line: 2, .. }));
        assert!(err.to_string().contains("13/09/2017"));
    }

    #[test]
    fn test_missing_column_is_csv_error() {
        let text = "customer_state,price\nSP,10.0";
        let err = parse_order_items(text.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::Csv(_)));
    }

    #[test]
    fn test_timestamp_formats() {
        assert!(parse_timestamp("2017-09-13 08:59:02").is_some());
        assert!(parse_timestamp("2017-09-13T08:59:02").is_some());
        assert!(parse_timestamp("2017-09-13 08:59:02.123").is_some());
        assert!(parse_timestamp("2017-09-13 08:59").is_some());
        assert_eq!(
            parse_timestamp("2017-09-13").map(|ts| ts.to_string()),
            Some("2017-09-13 00:00:00".to_string())
        );
        assert!(parse_timestamp("not a date").is_none());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_order_items(Path::new("definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
        assert!(err.to_string().contains("definitely/not/here.csv"));
    }
}
