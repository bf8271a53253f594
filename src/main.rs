use actix_web::{App, HttpServer, middleware::Logger};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use invoicedesk::{
  adapters::http::{configure_auth_routes, configure_invoice_routes},
  application::auth::AuthenticateUseCase,
  application::invoice::{CreateInvoiceUseCase, DeleteInvoiceUseCase, UpdateInvoiceUseCase},
  domain::auth::SignInProvider,
  domain::invoice::{InvoiceStore, PageCache},
  infrastructure::{
    cache::RedisPageCache, config::Config, persistence::postgres::PostgresInvoiceStore,
    security::ArgonCredentialsProvider,
  },
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize environment variables from .env file
  dotenvy::dotenv().ok();

  // Initialize tracing subscriber for logging
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "invoicedesk=debug,actix_web=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::info!("Starting invoicedesk");

  let config = Config::load().expect("Failed to load configuration");
  tracing::info!("Configuration loaded successfully");

  // Set up database connection pool with timeout
  let db_pool = tokio::time::timeout(
    Duration::from_secs(config.database.connect_timeout_seconds),
    PgPoolOptions::new()
      .max_connections(config.database.max_connections)
      .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_seconds))
      .connect(&config.database.url),
  )
  .await
  .map_err(|_| {
    tracing::error!(
      "Database connection timed out after {} seconds. Is PostgreSQL running?",
      config.database.connect_timeout_seconds
    );
    std::io::Error::new(
      std::io::ErrorKind::TimedOut,
      format!(
        "Database connection timed out after {} seconds",
        config.database.connect_timeout_seconds
      ),
    )
  })?
  .map_err(|e| {
    tracing::error!("Failed to connect to database: {}", e);
    std::io::Error::other(format!("Database error: {}", e))
  })?;

  tracing::info!("Database connection pool created");

  // Set up Redis connection with timeout
  let redis_client = redis::Client::open(config.redis.url.clone())
    .map_err(|e| std::io::Error::other(format!("Redis error: {}", e)))?;
  let redis_connection = tokio::time::timeout(
    Duration::from_secs(config.redis.connect_timeout_seconds),
    redis_client.get_connection_manager(),
  )
  .await
  .map_err(|_| {
    tracing::error!(
      "Redis connection timed out after {} seconds. Is Redis running?",
      config.redis.connect_timeout_seconds
    );
    std::io::Error::new(std::io::ErrorKind::TimedOut, "Redis connection timed out")
  })?
  .map_err(|e| {
    tracing::error!("Failed to connect to Redis: {}", e);
    std::io::Error::other(format!("Redis error: {}", e))
  })?;

  tracing::info!("Redis connection established");

  // Wire ports and use cases
  let invoice_store: Arc<dyn InvoiceStore> = Arc::new(PostgresInvoiceStore::new(db_pool.clone()));
  let page_cache: Arc<dyn PageCache> = Arc::new(RedisPageCache::new(redis_connection));
  let sign_in_provider: Arc<dyn SignInProvider> = Arc::new(ArgonCredentialsProvider::new(db_pool));

  let create_use_case = Arc::new(CreateInvoiceUseCase::new(
    invoice_store.clone(),
    page_cache.clone(),
  ));
  let update_use_case = Arc::new(UpdateInvoiceUseCase::new(
    invoice_store.clone(),
    page_cache.clone(),
  ));
  let delete_use_case = Arc::new(DeleteInvoiceUseCase::new(invoice_store, page_cache));
  let authenticate_use_case = Arc::new(AuthenticateUseCase::new(sign_in_provider));

  let bind_address = (config.server.host.clone(), config.server.port);
  tracing::info!(
    "Listening on {}:{}",
    config.server.host,
    config.server.port
  );

  HttpServer::new(move || {
    App::new()
      .wrap(Logger::default())
      .configure(|cfg| {
        configure_invoice_routes(
          cfg,
          create_use_case.clone(),
          update_use_case.clone(),
          delete_use_case.clone(),
        )
      })
      .configure(|cfg| configure_auth_routes(cfg, authenticate_use_case.clone()))
  })
  .bind(bind_address)?
  .run()
  .await
}
