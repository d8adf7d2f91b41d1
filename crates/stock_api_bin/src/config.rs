use dotenvy::dotenv;
use std::env;
use std::error::Error;
use std::path::PathBuf;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DB_PATH: &str = "pltr.db";

/// Startup settings, read once in `main` and handed to the app factory.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
    pub db_path: PathBuf,
}

impl ServerConfig {
    pub fn new() -> Result<ServerConfig, Box<dyn Error>> {
        dotenv().ok();
        ServerConfig::from_vars(|key| env::var(key).ok())
    }

    /// Unset or blank variables fall back to defaults.
    pub fn from_vars<F>(var: F) -> Result<ServerConfig, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| var(key).filter(|value| !value.trim().is_empty());

        let host = lookup("STOCK_API_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("STOCK_API_PORT") {
            Some(port) => port
                .trim()
                .parse::<u16>()
                .map_err(|e| format!("STOCK_API_PORT {:?}: {}", port, e))?,
            None => DEFAULT_PORT,
        };
        let mut workers = match lookup("STOCK_API_WORKERS") {
            Some(workers) => workers
                .trim()
                .parse::<usize>()
                .map_err(|e| format!("STOCK_API_WORKERS {:?}: {}", workers, e))?,
            None => 1,
        };
        let db_path = lookup("STOCK_DB_PATH").unwrap_or_else(|| DEFAULT_DB_PATH.to_string());

        if workers == 0 {
            workers = 1;
        }

        Ok(ServerConfig {
            host,
            port,
            workers,
            db_path: PathBuf::from(db_path),
        })
    }
}
