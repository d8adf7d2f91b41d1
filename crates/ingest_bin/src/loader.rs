use log::warn;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use stock_model::StockRecord;

#[derive(Debug, PartialEq)]
pub struct LoadSummary {
    pub rows: usize,
    pub columns: usize,
    pub headers: Vec<String>,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
}

impl LoadSummary {
    fn new(headers: Vec<String>, records: &[StockRecord]) -> Self {
        LoadSummary {
            rows: records.len(),
            columns: headers.len(),
            headers,
            first_date: records.iter().map(|r| &r.date).min().cloned(),
            last_date: records.iter().map(|r| &r.date).max().cloned(),
        }
    }
}

pub fn load_csv(path: &Path) -> Result<(Vec<StockRecord>, LoadSummary), csv::Error> {
    let file = File::open(path)?;
    load_from_reader(file)
}

/// Reads rows by header name; the first malformed row aborts the load.
pub fn load_from_reader<R: Read>(
    reader: R,
) -> Result<(Vec<StockRecord>, LoadSummary), csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let missing = missing_columns(&headers);
    if !missing.is_empty() {
        warn!("CSV header lacks column(s): {}", missing.join(", "));
    }

    let records = reader
        .deserialize::<StockRecord>()
        .collect::<Result<Vec<_>, _>>()?;

    let summary = LoadSummary::new(headers, &records);
    Ok((records, summary))
}

/// Record fields with no matching header, in record order.
pub fn missing_columns(headers: &[String]) -> Vec<&'static str> {
    StockRecord::COLUMNS
        .into_iter()
        .filter(|column| !headers.iter().any(|header| header.as_str() == *column))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
date,open,high,low,close,adj_close,volume
2020-10-01,9.54,10.1,9.23,9.46,9.46,124297600
2020-09-30,10.0,11.41,9.11,9.5,9.5,338584400
2020-10-02,9.06,9.28,8.94,9.2,9.2,55018300
";

    #[test]
    fn load_pass_summary() {
        let (records, summary) = load_from_reader(SAMPLE.as_bytes()).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(summary.rows, 3);
        assert_eq!(summary.columns, 7);
        assert_eq!(summary.headers, StockRecord::COLUMNS);
        assert_eq!(summary.first_date, Some("2020-09-30".to_string()));
        assert_eq!(summary.last_date, Some("2020-10-02".to_string()));
    }

    #[test]
    fn load_pass_columns_in_any_order() {
        let csv = "volume,date,close,adj_close,open,high,low\n\
                   55018300,2020-10-02,9.2,9.2,9.06,9.28,8.94\n";
        let (records, _) = load_from_reader(csv.as_bytes()).unwrap();

        assert_eq!(records[0].date, "2020-10-02");
        assert_eq!(records[0].open, 9.06);
        assert_eq!(records[0].volume, 55_018_300);
    }

    #[test]
    fn load_pass_date_text_kept() {
        let csv = "date,open,high,low,close,adj_close,volume\n\
                   2020-9-2,9.06,9.28,8.94,9.2,9.2,55018300\n";
        let (records, summary) = load_from_reader(csv.as_bytes()).unwrap();

        assert_eq!(records[0].date, "2020-9-2");
        assert_eq!(summary.first_date.as_deref(), Some("2020-9-2"));
    }

    #[test]
    fn load_pass_header_only() {
        let csv = "date,open,high,low,close,adj_close,volume\n";
        let (records, summary) = load_from_reader(csv.as_bytes()).unwrap();

        assert!(records.is_empty());
        assert_eq!(summary.first_date, None);
        assert_eq!(summary.last_date, None);
    }

    #[test]
    fn load_fail_malformed_row() {
        let csv = "date,open,high,low,close,adj_close,volume\n\
                   2020-10-02,abc,9.28,8.94,9.2,9.2,55018300\n";
        assert!(load_from_reader(csv.as_bytes()).is_err());
    }

    #[test]
    fn load_fail_missing_column() {
        let csv = "date,open,high,low,close,volume\n2020-10-02,9.06,9.28,8.94,9.2,55018300\n";
        assert!(load_from_reader(csv.as_bytes()).is_err());
    }

    #[test]
    fn missing_columns_pass_reports_absent_fields() {
        let headers: Vec<String> = ["volume", "date", "open", "high", "close"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(missing_columns(&headers), ["low", "adj_close"]);
    }

    #[test]
    fn missing_columns_pass_full_header() {
        let headers: Vec<String> = StockRecord::COLUMNS.into_iter().map(String::from).collect();
        assert!(missing_columns(&headers).is_empty());
    }

    #[test]
    fn load_fail_missing_file() {
        assert!(load_csv(Path::new("does/not/exist.csv")).is_err());
    }
}
