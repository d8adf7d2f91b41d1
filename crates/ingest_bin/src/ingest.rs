use log::info;
use std::io::{self, Write};
use std::path::Path;
use stock_store::{StockStore, StoreError, TABLE_NAME};
use thiserror::Error;

use crate::loader::{self, LoadSummary};

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to load table: {0}")]
    Store(#[from] StoreError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Loads `csv_path` into `store`, replacing the whole table, and reports
/// progress to `out`.
pub async fn run<W: Write>(
    csv_path: &Path,
    store: &StockStore,
    out: &mut W,
) -> Result<i64, IngestError> {
    writeln!(out, "Loading stock data from {}...", csv_path.display())?;
    let (records, summary) = loader::load_csv(csv_path)?;
    write_summary(out, &summary)?;

    writeln!(out, "\nConnecting to {}...", store.path().display())?;
    writeln!(out, "Ingesting data into database...")?;
    let inserted = store.replace_all(&records).await?;
    info!("replaced table {} with {} rows", TABLE_NAME, inserted);

    let persisted = store.count().await?;
    writeln!(out, "Data ingestion completed successfully!")?;
    writeln!(
        out,
        "The '{}' table now holds {} rows in {}",
        TABLE_NAME,
        persisted,
        store.path().display()
    )?;
    Ok(persisted)
}

fn write_summary<W: Write>(out: &mut W, summary: &LoadSummary) -> io::Result<()> {
    writeln!(out, "Data loaded successfully!")?;
    writeln!(out, "Shape: {} rows, {} columns", summary.rows, summary.columns)?;
    match (&summary.first_date, &summary.last_date) {
        (Some(first), Some(last)) => writeln!(out, "Date range: {} to {}", first, last)?,
        _ => writeln!(out, "Date range: no rows")?,
    }
    writeln!(out, "Columns: {}", summary.headers.join(", "))
}
