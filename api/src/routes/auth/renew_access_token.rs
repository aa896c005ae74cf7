use axum::{extract::State, Json};
use axum_extra::extract::cookie::CookieJar;

use crate::{prelude::*, service, utils::cookies};

/// Mints a fresh access token from the refresh-token cookie and resets the
/// access cookie. The refresh token itself is not rotated; it stays
/// honorable until its own expiry or an explicit logout.
pub(super) async fn renew_access_token(
	State(state): State<AppState>,
	jar: CookieJar,
) -> Result<(CookieJar, Json<RenewAccessTokenResponse>), ErrorType> {
	let Some(refresh_token) = jar
		.get(constants::REFRESH_TOKEN_COOKIE)
		.map(|cookie| cookie.value().to_owned())
		.filter(|value| !value.is_empty())
	else {
		return Err(ErrorType::MissingRefreshToken);
	};

	let login = service::validate_refresh_token(&state.database, &refresh_token, &state.config)
		.await?;

	let access_token = service::generate_access_token(login.user_id, &state.config)?;
	trace!("Access token renewed for user `{}`", login.user_id);

	let jar = cookies::reset_access_cookie(jar, &access_token, &state.config);
	Ok((jar, Json(RenewAccessTokenResponse::new(access_token))))
}
