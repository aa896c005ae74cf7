use axum::{extract::State, Json};
use axum_extra::extract::cookie::CookieJar;

use crate::{prelude::*, service, utils::cookies};

/// Ends the session. Revokes the refresh session if the cookie carries a
/// usable token, and always clears both cookies and returns success: the
/// client-facing contract of logout is "you are logged out" regardless of
/// token bookkeeping. Failures during revocation are logged, never
/// surfaced.
pub(super) async fn logout(
	State(state): State<AppState>,
	jar: CookieJar,
) -> (CookieJar, Json<LogoutResponse>) {
	let refresh_token = jar
		.get(constants::REFRESH_TOKEN_COOKIE)
		.map(|cookie| cookie.value().to_owned())
		.filter(|value| !value.is_empty());

	if let Some(refresh_token) = refresh_token {
		match service::revoke_refresh_token(&state.database, &refresh_token, &state.config).await {
			Ok(true) => debug!("Refresh session revoked"),
			Ok(false) => debug!("Logout with an unknown or already-revoked refresh token"),
			Err(err) => warn!("Suppressed error revoking refresh token during logout: {err}"),
		}
	}

	let jar = cookies::clear_session_cookies(jar, &state.config);
	(jar, Json(LogoutResponse::default()))
}
