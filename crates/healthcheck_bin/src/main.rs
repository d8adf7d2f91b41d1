use dotenvy::dotenv;
use serde::Deserialize;
use std::env;

const DEFAULT_PORT: &str = "5000";

#[derive(Debug)]
enum CustomError {
    ReqwestError(String),
    NotHealthy,
}

#[derive(Debug, Deserialize)]
struct StatusJSON {
    status: String,
}

impl std::fmt::Display for CustomError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CustomError::ReqwestError(e) => write!(f, "Reqwest error: {}", e),
            CustomError::NotHealthy => write!(f, "Status code != 200 or status != healthy"),
        }
    }
}

impl From<reqwest::Error> for CustomError {
    fn from(err: reqwest::Error) -> CustomError {
        CustomError::ReqwestError(err.to_string())
    }
}

fn health_url() -> String {
    dotenv().ok();
    let port = env::var("STOCK_API_PORT")
        .ok()
        .filter(|port| !port.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_PORT.to_string());
    format!("http://localhost:{}/api/health", port.trim())
}

fn is_healthy(status: &StatusJSON) -> bool {
    status.status == "healthy"
}

fn main() -> Result<(), CustomError> {
    let res = reqwest::blocking::get(health_url())?;
    if res.status() != 200 {
        return Err(CustomError::NotHealthy);
    }
    let status: StatusJSON = res.json::<StatusJSON>()?;
    if !is_healthy(&status) {
        return Err(CustomError::NotHealthy);
    }
    Ok(())
}
