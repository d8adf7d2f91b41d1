use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use stock_model::StockRecord;
use stock_store::StoreError;
use thiserror::Error;

#[derive(Serialize)]
pub struct StocksResponse {
    pub success: bool,
    pub data: Vec<StockRecord>,
    pub count: usize,
    pub message: String,
}

#[derive(Serialize)]
pub struct StockResponse {
    pub success: bool,
    pub data: StockRecord,
    pub message: String,
}

#[derive(Serialize)]
pub struct HealthcheckResponse {
    pub status: &'static str,
    pub timestamp: String,
}

/// Shared body of every failed request.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: &'static str,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: &'static str, message: String) -> Self {
        ErrorResponse {
            success: false,
            error,
            message,
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Database(String),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    fn label(&self) -> &'static str {
        match self {
            ApiError::Database(_) => "Database error",
            ApiError::Internal(_) => "Internal server error",
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> ApiError {
        if err.is_database() {
            ApiError::Database(err.to_string())
        } else {
            ApiError::Internal(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> ApiError {
        ApiError::Internal(err.to_string())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(ErrorResponse::new(self.label(), self.to_string()))
    }
}

/// Serializes up front so encoding failures take the JSON error path too.
pub fn json<T: Serialize>(status: StatusCode, body: &T) -> Result<HttpResponse, ApiError> {
    let body = serde_json::to_string(body)?;
    Ok(HttpResponse::build(status)
        .content_type(ContentType::json())
        .body(body))
}
