//! User accounts, cookie-session authentication and biodata profile API.
//!
//! The binary wires together configuration, the database pool and the axum
//! router, then serves until killed. Everything request-scoped lives under
//! [`routes`]; persistence under [`db`]; domain logic under [`service`].

mod app;
mod db;
mod models;
mod prelude;
mod routes;
mod service;
mod utils;

#[cfg(test)]
mod test;

use tracing_subscriber::EnvFilter;

use crate::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	let config = utils::config::parse_config();

	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
		)
		.init();
	debug!(
		"Configuration read. Running environment set to {}",
		config.environment
	);

	let database = db::create_database_connection(&config).await?;
	debug!("Database connection pool established");

	let state = AppState { config, database };
	db::initialize(&state).await?;
	debug!("Database initialized");

	app::serve(state).await?;

	Ok(())
}
