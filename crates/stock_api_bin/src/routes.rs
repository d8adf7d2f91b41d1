use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use chrono::SecondsFormat;
use stock_store::StockStore;

use crate::responses::{
    ApiError, ErrorResponse, HealthcheckResponse, StockResponse, StocksResponse, json,
};

#[get("/api/stocks")]
async fn get_stocks(store: web::Data<StockStore>) -> Result<HttpResponse, ApiError> {
    let stocks = store.all_stocks().await?;
    let count = stocks.len();
    json(
        StatusCode::OK,
        &StocksResponse {
            success: true,
            data: stocks,
            count,
            message: format!("Successfully retrieved {} stock records", count),
        },
    )
}

#[get("/api/stocks/date/{date}")]
async fn get_stock_by_date(
    date: web::Path<String>,
    store: web::Data<StockStore>,
) -> Result<HttpResponse, ApiError> {
    let date = date.into_inner();
    match store.stock_by_date(&date).await? {
        Some(stock) => json(
            StatusCode::OK,
            &StockResponse {
                success: true,
                data: stock,
                message: format!("Successfully retrieved stock data for {}", date),
            },
        ),
        // weekends, holidays and dates outside the loaded range
        None => json(
            StatusCode::NOT_FOUND,
            &ErrorResponse::new("Not found", format!("No stock data found for date {}", date)),
        ),
    }
}

#[get("/api/health")]
async fn healthcheck() -> impl Responder {
    web::Json(HealthcheckResponse {
        status: "healthy",
        timestamp: chrono::Local::now().to_rfc3339_opts(SecondsFormat::Micros, false),
    })
}

pub async fn not_found(req: HttpRequest) -> impl Responder {
    HttpResponse::NotFound().json(ErrorResponse::new(
        "Not found",
        format!("Route {} not found", req.path()),
    ))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_stocks)
        .service(get_stock_by_date)
        .service(healthcheck);
}
