//! The session-cookie manager.
//!
//! Both token cookies are set and cleared from this one module so the
//! attributes can never drift apart: a cookie cleared with a different
//! path, domain or same-site than it was set with is silently ignored by
//! most clients, which would leave a stale session cookie in the browser.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use crate::{
	prelude::*,
	utils::config::{CookieConfig, SameSitePolicy},
};

impl From<SameSitePolicy> for SameSite {
	fn from(policy: SameSitePolicy) -> Self {
		match policy {
			SameSitePolicy::Strict => SameSite::Strict,
			SameSitePolicy::Lax => SameSite::Lax,
			SameSitePolicy::None => SameSite::None,
		}
	}
}

/// Sets both token cookies after a successful login.
pub fn attach_session_cookies(
	jar: CookieJar,
	access_token: &str,
	refresh_token: &str,
	config: &AppConfig,
) -> CookieJar {
	jar.add(session_cookie(
		constants::ACCESS_TOKEN_COOKIE,
		access_token.to_owned(),
		Duration::minutes(config.tokens.access_token_validity_mins),
		&config.cookies,
	))
	.add(session_cookie(
		constants::REFRESH_TOKEN_COOKIE,
		refresh_token.to_owned(),
		Duration::days(config.tokens.refresh_token_validity_days),
		&config.cookies,
	))
}

/// Replaces the access-token cookie after a refresh. The refresh cookie is
/// left untouched; it keeps its original expiry.
pub fn reset_access_cookie(jar: CookieJar, access_token: &str, config: &AppConfig) -> CookieJar {
	jar.add(session_cookie(
		constants::ACCESS_TOKEN_COOKIE,
		access_token.to_owned(),
		Duration::minutes(config.tokens.access_token_validity_mins),
		&config.cookies,
	))
}

/// Deletes both token cookies. The removal cookies carry the exact same
/// path, domain and same-site attributes as the ones set at login.
pub fn clear_session_cookies(jar: CookieJar, config: &AppConfig) -> CookieJar {
	jar.add(session_cookie(
		constants::ACCESS_TOKEN_COOKIE,
		String::new(),
		Duration::ZERO,
		&config.cookies,
	))
	.add(session_cookie(
		constants::REFRESH_TOKEN_COOKIE,
		String::new(),
		Duration::ZERO,
		&config.cookies,
	))
}

fn session_cookie(
	name: &'static str,
	value: String,
	max_age: Duration,
	config: &CookieConfig,
) -> Cookie<'static> {
	let mut builder = Cookie::build((name, value))
		.http_only(true)
		.secure(config.secure)
		.same_site(SameSite::from(config.same_site))
		.path(config.path.clone())
		.max_age(max_age);
	if let Some(domain) = &config.domain {
		builder = builder.domain(domain.clone());
	}
	builder.build()
}
