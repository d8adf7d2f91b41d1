use actix_web::{App, HttpServer, middleware::Logger, web};
use log::{error, info, warn};
use std::process::exit;
use stock_store::StockStore;

use config::ServerConfig;

mod config;
mod responses;
mod routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    let config = match ServerConfig::new() {
        Ok(config) => config,
        Err(e) => {
            error!("Could not create config: {}", e);
            exit(1);
        }
    };

    if !config.db_path.exists() {
        warn!(
            "Database {} not found, run the ingest binary first",
            config.db_path.display()
        );
    }
    info!(
        "Serving {} on {}:{} with {} worker(s)",
        config.db_path.display(),
        config.host,
        config.port,
        config.workers
    );

    let store = web::Data::new(StockStore::new(&config.db_path));

    HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .configure(routes::configure)
            .default_service(web::to(routes::not_found))
            .wrap(Logger::default())
    })
    .bind((config.host.as_str(), config.port))?
    .workers(config.workers)
    .run()
    .await
}
