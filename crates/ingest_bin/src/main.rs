use log::{error, info};
use std::{io, process::exit};
use stock_store::StockStore;

mod config;
mod ingest;
mod loader;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    let config = config::Config::new();
    info!(
        "Ingesting {} into {}",
        config.csv_path.display(),
        config.db_path.display()
    );

    let store = StockStore::new(&config.db_path);
    let mut stdout = io::stdout().lock();
    if let Err(e) = ingest::run(&config.csv_path, &store, &mut stdout).await {
        error!("Ingestion failed: {}", e);
        exit(1);
    }
}
