use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error("could not convert value {value:?} of column {column}")]
    Coerce { column: &'static str, value: String },
}

impl StoreError {
    /// Connection and query failures, as opposed to bad stored values.
    pub fn is_database(&self) -> bool {
        matches!(self, StoreError::Database(_))
    }
}
