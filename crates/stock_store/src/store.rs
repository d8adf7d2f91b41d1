use log::debug;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqliteRow};
use sqlx::{Connection, Row, ValueRef};
use std::path::{Path, PathBuf};
use stock_model::StockRecord;

use crate::error::StoreError;

pub const TABLE_NAME: &str = "stocks";

const DROP_TABLE: &str = "DROP TABLE IF EXISTS stocks";
const CREATE_TABLE: &str = "CREATE TABLE stocks (
    date TEXT,
    open REAL,
    high REAL,
    low REAL,
    close REAL,
    adj_close REAL,
    volume INTEGER
)";
const INSERT_ROW: &str = "INSERT INTO stocks (date, open, high, low, close, adj_close, volume)
    VALUES (?, ?, ?, ?, ?, ?, ?)";
const SELECT_ALL: &str =
    "SELECT date, open, high, low, close, adj_close, volume FROM stocks ORDER BY date";
const SELECT_BY_DATE: &str =
    "SELECT date, open, high, low, close, adj_close, volume FROM stocks WHERE date = ?";
const COUNT_ROWS: &str = "SELECT COUNT(*) FROM stocks";

/// Handle to the SQLite file holding the `stocks` table.
///
/// Holds no connection: every call opens its own and closes it before
/// returning, so a handle can be shared freely between requests.
#[derive(Debug, Clone)]
pub struct StockStore {
    path: PathBuf,
}

impl StockStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        StockStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Drops and recreates `stocks`, then loads `records` into it.
    ///
    /// Runs in a single transaction: readers see either the previous table or
    /// the complete new one, and a failed load leaves the previous table intact.
    pub async fn replace_all(&self, records: &[StockRecord]) -> Result<u64, StoreError> {
        debug!("replace_all | path: {} | rows: {}", self.path.display(), records.len());

        let options = SqliteConnectOptions::new()
            .filename(&self.path)
            .create_if_missing(true);
        let mut conn = SqliteConnection::connect_with(&options).await?;

        let mut tx = conn.begin().await?;
        sqlx::query(DROP_TABLE).execute(&mut *tx).await?;
        sqlx::query(CREATE_TABLE).execute(&mut *tx).await?;

        let mut inserted = 0;
        for record in records {
            inserted += sqlx::query(INSERT_ROW)
                .bind(record.date.as_str())
                .bind(record.open)
                .bind(record.high)
                .bind(record.low)
                .bind(record.close)
                .bind(record.adj_close)
                .bind(record.volume)
                .execute(&mut *tx)
                .await?
                .rows_affected();
        }
        tx.commit().await?;
        conn.close().await?;

        debug!("replace_all | committed {} rows", inserted);
        Ok(inserted)
    }

    /// Every row, ordered by date.
    pub async fn all_stocks(&self) -> Result<Vec<StockRecord>, StoreError> {
        debug!("all_stocks | path: {}", self.path.display());

        let mut conn = self.connect_read_only().await?;
        let rows = sqlx::query(SELECT_ALL).fetch_all(&mut conn).await?;
        conn.close().await?;

        rows.iter().map(decode_row).collect()
    }

    /// Exact match on the stored date text. `date` is bound as given.
    pub async fn stock_by_date(&self, date: &str) -> Result<Option<StockRecord>, StoreError> {
        debug!("stock_by_date | path: {} | date: {}", self.path.display(), date);

        let mut conn = self.connect_read_only().await?;
        let row = sqlx::query(SELECT_BY_DATE)
            .bind(date)
            .fetch_optional(&mut conn)
            .await?;
        conn.close().await?;

        row.as_ref().map(decode_row).transpose()
    }

    pub async fn count(&self) -> Result<i64, StoreError> {
        let mut conn = self.connect_read_only().await?;
        let count = sqlx::query_scalar::<_, i64>(COUNT_ROWS)
            .fetch_one(&mut conn)
            .await?;
        conn.close().await?;
        Ok(count)
    }

    // never creates the file, a missing database is a query error
    async fn connect_read_only(&self) -> Result<SqliteConnection, StoreError> {
        let options = SqliteConnectOptions::new()
            .filename(&self.path)
            .read_only(true);
        Ok(SqliteConnection::connect_with(&options).await?)
    }
}

fn decode_row(row: &SqliteRow) -> Result<StockRecord, StoreError> {
    Ok(StockRecord {
        date: row.try_get("date")?,
        open: real(row, "open")?,
        high: real(row, "high")?,
        low: real(row, "low")?,
        close: real(row, "close")?,
        adj_close: real(row, "adj_close")?,
        volume: integer(row, "volume")?,
    })
}

// SQLite keeps whatever storage class was written, so numbers may come back
// as INTEGER, REAL or TEXT depending on how the table was loaded.
fn real(row: &SqliteRow, column: &'static str) -> Result<f64, StoreError> {
    reject_null(row, column)?;
    if let Ok(value) = row.try_get::<f64, _>(column) {
        return Ok(value);
    }
    if let Ok(value) = row.try_get::<i64, _>(column) {
        return Ok(value as f64);
    }
    let text: String = row.try_get(column)?;
    match text.trim().parse::<f64>() {
        Ok(value) => Ok(value),
        Err(_) => Err(StoreError::Coerce { column, value: text }),
    }
}

fn integer(row: &SqliteRow, column: &'static str) -> Result<i64, StoreError> {
    reject_null(row, column)?;
    if let Ok(value) = row.try_get::<i64, _>(column) {
        return Ok(value);
    }
    if let Ok(value) = row.try_get::<f64, _>(column) {
        // `as` saturates, 2^63 itself is already out of range
        if !value.is_finite() || value < i64::MIN as f64 || value >= i64::MAX as f64 {
            return Err(StoreError::Coerce {
                column,
                value: value.to_string(),
            });
        }
        return Ok(value.trunc() as i64);
    }
    let text: String = row.try_get(column)?;
    match text.trim().parse::<i64>() {
        Ok(value) => Ok(value),
        Err(_) => Err(StoreError::Coerce { column, value: text }),
    }
}

fn reject_null(row: &SqliteRow, column: &'static str) -> Result<(), StoreError> {
    if row.try_get_raw(column)?.is_null() {
        return Err(StoreError::Coerce {
            column,
            value: "NULL".to_string(),
        });
    }
    Ok(())
}
