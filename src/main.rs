use actix_web::{
  App, HttpServer,
  middleware::{Logger, NormalizePath, TrailingSlash},
  web,
};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use biztime::{
  adapters::http::{RequestIdMiddleware, RouteDependencies, configure_routes, not_found},
  domain::{company::CompanyService, invoice::InvoiceService},
  infrastructure::{
    config::Config,
    persistence::postgres::{
      PostgresCompanyRepository, PostgresInvoiceRepository, connect_options,
    },
  },
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize environment variables from .env file
  dotenvy::dotenv().ok();

  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "biztime=debug,actix_web=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::info!("Starting BizTime API");

  let config = Config::load().map_err(|e| {
    tracing::error!("Failed to load configuration: {}", e);
    std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
  })?;
  tracing::info!("Configuration loaded successfully");

  let db_options = connect_options(&config.database.url).map_err(|e| {
    tracing::error!("Invalid database url: {}", e);
    std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
  })?;

  tracing::info!(
    "Connecting to database {} on {}:{}",
    db_options.get_database().unwrap_or("<default>"),
    db_options.get_host(),
    db_options.get_port()
  );

  let db_pool = tokio::time::timeout(
    Duration::from_secs(config.database.connect_timeout_seconds),
    PgPoolOptions::new()
      .max_connections(config.database.max_connections)
      .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_seconds))
      .connect_with(db_options),
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
    match e {
      sqlx::Error::Io(_) => std::io::Error::new(
        std::io::ErrorKind::ConnectionRefused,
        "Could not connect to database. Is PostgreSQL running?",
      ),
      _ => std::io::Error::other(format!("Database error: {}", e)),
    }
  })?;

  tracing::info!("Database connection pool created");

  tracing::info!("Running database migrations");
  sqlx::migrate!("./migrations")
    .run(&db_pool)
    .await
    .map_err(|e| {
      tracing::error!("Failed to run database migrations: {}", e);
      std::io::Error::other(format!("Migration error: {}", e))
    })?;
  tracing::info!("Database migrations completed");

  // Initialize repositories
  let company_repo = Arc::new(PostgresCompanyRepository::new(db_pool.clone()));
  let invoice_repo = Arc::new(PostgresInvoiceRepository::new(db_pool.clone()));

  // Initialize domain services
  let company_service = Arc::new(CompanyService::new(company_repo));
  let invoice_service = Arc::new(InvoiceService::new(invoice_repo));

  // Initialize use cases
  let route_deps = RouteDependencies::new(company_service, invoice_service);

  let server_host = config.server.host.clone();
  let server_port = config.server.port;

  tracing::info!("Starting HTTP server on {}:{}", server_host, server_port);

  HttpServer::new(move || {
    App::new()
      .wrap(NormalizePath::new(TrailingSlash::Trim))
      .wrap(Logger::default())
      .wrap(RequestIdMiddleware::new())
      .configure(|cfg| configure_routes(cfg, route_deps.clone()))
      .default_service(web::to(not_found))
  })
  .bind((server_host.as_str(), server_port))?
  .run()
  .await?;

  db_pool.close().await;
  tracing::info!("Database pool closed, shutting down");

  Ok(())
}
