use std::{
	env,
	fmt::{Display, Formatter},
	net::SocketAddr,
};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Reads the application config from `config/dev` or `config/prod` (by build
/// profile, overridable with `APP_ENV`) merged with `APP_`-prefixed
/// environment variables. Panicking here is deliberate: a process with a
/// half-parsed security config must not come up.
#[instrument]
pub fn parse_config() -> AppConfig {
	trace!("Reading config data...");

	let env = if cfg!(debug_assertions) {
		"dev".to_string()
	} else {
		env::var("APP_ENV").unwrap_or_else(|_| "prod".into())
	};

	match env.as_ref() {
		"prod" | "production" => Config::builder()
			.add_source(File::with_name("config/prod").required(false))
			.set_default("environment", "production")
			.expect("unable to set environment to production"),
		"dev" | "development" => Config::builder()
			.add_source(File::with_name("config/dev").required(false))
			.set_default("environment", "development")
			.expect("unable to set environment to development"),
		_ => {
			panic!("Unknown running environment found!");
		}
	}
	.add_source(Environment::with_prefix("APP").separator("_"))
	.build()
	.expect("unable to merge with environment variables")
	.try_deserialize()
	.expect("unable to parse settings")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
	pub bind_addr: SocketAddr,
	#[serde(default)]
	pub api_base_path: String,
	/// Secret mixed into every argon2 hash. Must never be rotated without a
	/// password-reset path for existing accounts.
	pub password_pepper: String,
	pub jwt_secret: String,
	pub environment: RunningEnvironment,
	pub database: DatabaseConfig,
	#[serde(default)]
	pub tokens: TokenConfig,
	pub cookies: CookieConfig,
	#[serde(default)]
	pub cors: CorsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RunningEnvironment {
	Development,
	Production,
}

impl Display for RunningEnvironment {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
		write!(
			formatter,
			"{}",
			match self {
				RunningEnvironment::Development => "Development",
				RunningEnvironment::Production => "Production",
			}
		)
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseConfig {
	/// SQLite database file, or `:memory:` for an ephemeral store.
	pub file: String,
	#[serde(default = "default_connection_limit")]
	pub connection_limit: u32,
}

fn default_connection_limit() -> u32 {
	8
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenConfig {
	/// Access-token time to live, in minutes.
	#[serde(default = "default_access_token_validity_mins")]
	pub access_token_validity_mins: i64,
	/// Refresh-token time to live, in days.
	#[serde(default = "default_refresh_token_validity_days")]
	pub refresh_token_validity_days: i64,
}

impl Default for TokenConfig {
	fn default() -> Self {
		Self {
			access_token_validity_mins: default_access_token_validity_mins(),
			refresh_token_validity_days: default_refresh_token_validity_days(),
		}
	}
}

fn default_access_token_validity_mins() -> i64 {
	60
}

fn default_refresh_token_validity_days() -> i64 {
	1
}

/// Transmission attributes for the two session cookies. The same values are
/// used for setting and for clearing; see `utils::cookies`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CookieConfig {
	pub secure: bool,
	pub same_site: SameSitePolicy,
	#[serde(default = "default_cookie_path")]
	pub path: String,
	#[serde(default)]
	pub domain: Option<String>,
}

fn default_cookie_path() -> String {
	"/".to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SameSitePolicy {
	Strict,
	Lax,
	None,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CorsConfig {
	#[serde(default)]
	pub allowed_origins: Vec<String>,
}
