use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_CSV_PATH: &str = "Datasets/PLTR_2020-09-30_2025-09-09.csv";
pub const DEFAULT_DB_PATH: &str = "pltr.db";

pub struct Config {
    pub csv_path: PathBuf,
    pub db_path: PathBuf,
}

impl Config {
    pub fn new() -> Config {
        dotenv().ok();

        Config {
            csv_path: path_from_env("STOCK_CSV_PATH", DEFAULT_CSV_PATH),
            db_path: path_from_env("STOCK_DB_PATH", DEFAULT_DB_PATH),
        }
    }
}

fn path_from_env(key: &str, default: &str) -> PathBuf {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => PathBuf::from(default),
    }
}
