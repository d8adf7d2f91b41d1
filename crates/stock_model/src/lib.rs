use serde::{Deserialize, Serialize};

/// One trading day of OHLCV data, keyed by `date`.
///
/// `date` is kept as the text found in the source, normally `YYYY-MM-DD`,
/// which sorts chronologically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockRecord {
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub adj_close: f64,
    pub volume: i64,
}

impl StockRecord {
    pub const COLUMNS: [&'static str; 7] =
        ["date", "open", "high", "low", "close", "adj_close", "volume"];
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> StockRecord {
        StockRecord {
            date: "2020-09-30".to_string(),
            open: 10.0,
            high: 11.41,
            low: 9.11,
            close: 9.5,
            adj_close: 9.5,
            volume: 338_584_400,
        }
    }

    #[test]
    fn serialize_pass_field_names() {
        let value = serde_json::to_value(record()).unwrap();
        assert_eq!(value["date"], "2020-09-30");
        assert_eq!(value["adj_close"], 9.5);
        assert_eq!(value["volume"], 338_584_400);
        assert_eq!(value.as_object().unwrap().len(), StockRecord::COLUMNS.len());
    }
}
