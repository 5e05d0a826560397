use crate::app::App;
use crate::config::Config;
use crate::responses::error_to_response;
use crate::router::handle;
use astra::Server;
use dotenv::dotenv;
use std::sync::Arc;
use tracing::{error, info};

mod app;
mod catalog;
mod config;
mod domain;
mod errors;
mod geocode;
mod responses;
mod router;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    dotenv().ok();

    // 1️⃣ Read configuration
    let config = match Config::init() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();
    info!(
        data_source = %config.data_source,
        default_region = %config.default_region,
        "configuration loaded"
    );

    // 2️⃣ Build shared state and try the first catalog load
    let app = match App::new(config.clone()) {
        Ok(app) => Arc::new(app),
        Err(e) => {
            error!("startup failed: {e}");
            std::process::exit(1);
        }
    };
    // A failed load here is not fatal: pages show the error and reload retries.
    app.catalog.warm_up();

    // 3️⃣ Start the server
    info!("Starting server at http://{}", config.bind_addr);

    let server = Server::bind(&config.bind_addr).max_workers(config.max_workers);

    // 4️⃣ Serve requests, passing the app handle into the closure
    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
