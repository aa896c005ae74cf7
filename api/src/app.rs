use axum::{
	http::{header, HeaderValue, Method},
	Router,
};
use sqlx::SqlitePool;
use tower_http::{
	cors::{AllowOrigin, CorsLayer},
	trace::TraceLayer,
};

use crate::{prelude::*, routes};

/// Shared state for every request handler. Cloning is cheap: the pool is a
/// handle and the config is read-only after startup.
#[derive(Debug, Clone)]
pub struct AppState {
	pub config: AppConfig,
	pub database: SqlitePool,
}

/// Builds the full application router with its tower layers attached.
pub fn create_router(state: &AppState) -> Router {
	let origins = state
		.config
		.cors
		.allowed_origins
		.iter()
		.filter_map(|origin| origin.parse::<HeaderValue>().ok())
		.collect::<Vec<_>>();

	// Credentialed CORS: the session cookies only work cross-site if the
	// browser is allowed to send them, which rules out a wildcard origin.
	let cors = CorsLayer::new()
		.allow_origin(AllowOrigin::list(origins))
		.allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
		.allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
		.allow_credentials(true);

	let router = Router::new()
		.merge(routes::auth::create_sub_app())
		.nest("/user", routes::user::create_sub_app())
		.layer(cors)
		.layer(TraceLayer::new_for_http())
		.with_state(state.clone());

	let base_path = state.config.api_base_path.trim_end_matches('/');
	if base_path.is_empty() {
		router
	} else {
		Router::new().nest(base_path, router)
	}
}

/// Binds the configured address and serves until the process is killed.
pub async fn serve(state: AppState) -> anyhow::Result<()> {
	let bind_addr = state.config.bind_addr;
	let router = create_router(&state);

	let listener = tokio::net::TcpListener::bind(bind_addr).await?;
	info!("Listening for connections on {}", bind_addr);
	axum::serve(listener, router).await?;

	Ok(())
}
