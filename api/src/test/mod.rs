//! End-to-end tests driving the full router against an in-memory database.

mod auth;

use axum::{
	body::Body,
	http::{header, HeaderMap, Request, StatusCode},
	Router,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::{
	app::{self, AppState},
	db,
	utils::config::{
		AppConfig, CookieConfig, CorsConfig, DatabaseConfig, RunningEnvironment, SameSitePolicy,
		TokenConfig,
	},
};

/// A fully-populated config pointing at an in-memory database. Used by the
/// unit tests in `service` and `models` as well.
pub(crate) fn test_config() -> AppConfig {
	AppConfig {
		bind_addr: "127.0.0.1:0".parse().expect("valid bind addr"),
		api_base_path: String::new(),
		password_pepper: "test-pepper".to_string(),
		jwt_secret: "test-jwt-secret-long-enough".to_string(),
		environment: RunningEnvironment::Development,
		database: DatabaseConfig {
			file: ":memory:".to_string(),
			connection_limit: 1,
		},
		tokens: TokenConfig::default(),
		cookies: CookieConfig {
			secure: false,
			same_site: SameSitePolicy::Lax,
			path: "/".to_string(),
			domain: None,
		},
		cors: CorsConfig::default(),
	}
}

/// Builds a throwaway application: fresh in-memory database, initialized
/// schema, full router with layers.
async fn init_tests() -> (Router, AppState) {
	let config = test_config();
	let database = db::create_database_connection(&config)
		.await
		.expect("in-memory database connects");
	let state = AppState { config, database };
	db::initialize(&state).await.expect("schema initializes");

	(app::create_router(&state), state)
}

/// Sends a JSON request, with an optional `Cookie` header, and returns the
/// status, the response headers and the parsed JSON body.
async fn request_json(
	router: &Router,
	method: &str,
	uri: &str,
	body: Option<serde_json::Value>,
	cookies: Option<&str>,
) -> (StatusCode, HeaderMap, serde_json::Value) {
	let mut builder = Request::builder()
		.method(method)
		.uri(uri)
		.header(header::CONTENT_TYPE, "application/json");
	if let Some(cookies) = cookies {
		builder = builder.header(header::COOKIE, cookies);
	}
	let request = builder
		.body(Body::from(
			body.map(|body| body.to_string()).unwrap_or_default(),
		))
		.expect("request builds");

	let response = router
		.clone()
		.oneshot(request)
		.await
		.expect("handler never errors");

	let (parts, body) = response.into_parts();
	let bytes = body.collect().await.expect("body collects").to_bytes();
	let json = if bytes.is_empty() {
		serde_json::Value::Null
	} else {
		serde_json::from_slice(&bytes).expect("body is JSON")
	};

	(parts.status, parts.headers, json)
}

async fn post_json(
	router: &Router,
	uri: &str,
	body: serde_json::Value,
	cookies: Option<&str>,
) -> (StatusCode, HeaderMap, serde_json::Value) {
	request_json(router, "POST", uri, Some(body), cookies).await
}

/// Pulls `name=value` out of the response's `Set-Cookie` headers.
fn response_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
	headers
		.get_all(header::SET_COOKIE)
		.iter()
		.filter_map(|value| value.to_str().ok())
		.find_map(|cookie| {
			let (pair, _attributes) = cookie.split_once(';')?;
			let (cookie_name, value) = pair.split_once('=')?;
			(cookie_name == name).then(|| value.to_string())
		})
}

/// The full `Set-Cookie` line for a cookie, attributes included.
fn response_set_cookie_line(headers: &HeaderMap, name: &str) -> Option<String> {
	headers
		.get_all(header::SET_COOKIE)
		.iter()
		.filter_map(|value| value.to_str().ok())
		.find(|cookie| cookie.starts_with(&format!("{name}=")))
		.map(str::to_owned)
}

async fn user_count(state: &AppState) -> i64 {
	sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM "user";"#)
		.fetch_one(&state.database)
		.await
		.expect("count query succeeds")
}

/// Registers and logs in `email`, returning the two token cookie values.
async fn register_and_login(router: &Router, email: &str, password: &str) -> (String, String) {
	let (status, _, _) = post_json(
		router,
		"/register",
		serde_json::json!({
			"email": email,
			"password": password,
			"confirmPassword": password,
		}),
		None,
	)
	.await;
	assert_eq!(status, StatusCode::CREATED);

	let (status, headers, _) = post_json(
		router,
		"/login",
		serde_json::json!({"email": email, "password": password}),
		None,
	)
	.await;
	assert_eq!(status, StatusCode::OK);

	let access = response_cookie(&headers, "access_token").expect("access cookie set");
	let refresh = response_cookie(&headers, "refresh_token").expect("refresh cookie set");
	(access, refresh)
}
