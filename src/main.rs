mod config;
mod constants;
mod errors;
mod handlers;
mod middleware;
mod models;
mod openapi;
mod repositories;
mod routes;
mod services;
mod state;
mod utils;
mod validators;

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{http::header, web, App, HttpServer};
use log::{info, warn};
use mongodb::Client;

use crate::config::CONFIG;
use crate::middleware::access_log;
use crate::repositories::MongoStore;
use crate::services::SessionService;
use crate::state::AppState;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    if CONFIG.uses_dev_secret() {
        warn!("ACCESS_TOKEN_SECRET is not set; using the development secret");
    }

    // One client pool for the whole process
    info!("Connecting to MongoDB...");
    let client = Client::with_uri_str(&CONFIG.mongodb_uri)
        .await
        .map_err(io::Error::other)?;
    let store = MongoStore::new(client.database(&CONFIG.database_name));

    store.ping().await.map_err(io::Error::other)?;
    info!("Connected to MongoDB database {}", CONFIG.database_name);
    store.create_indexes().await;

    let state = AppState::new(Arc::new(store), SessionService::from_config(&CONFIG));

    let server_addr = format!("{}:{}", CONFIG.server_host, CONFIG.server_port);
    info!("bistro-server running on {}", server_addr);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&CONFIG.allowed_origin)
            .allowed_methods(vec!["GET", "POST", "PATCH", "DELETE"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
            .supports_credentials()
            .max_age(3600);

        App::new()
            .wrap(access_log())
            .wrap(cors)
            .configure(|cfg| state.configure(cfg))
            .configure(routes::configure_routes)
            .default_service(web::to(routes::not_found))
    })
    .bind(&server_addr)?
    .run()
    .await?;

    info!("HTTP server stopped, closing MongoDB connections");
    client.shutdown().immediate(true).await;
    Ok(())
}
