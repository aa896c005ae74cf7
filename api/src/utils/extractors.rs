use axum::{
	async_trait,
	extract::FromRequestParts,
	http::{header, request::Parts},
};
use axum_extra::extract::cookie::CookieJar;

use crate::{db, models::AccessTokenData, prelude::*};

/// Extractor for endpoints that require a logged-in caller.
///
/// Looks for the access token in the `access_token` cookie first (the
/// browser flow), then in an `Authorization: Bearer` header (non-browser
/// clients). The claims are verified statelessly, then the account row is
/// loaded so handlers get current data rather than minting-time claims.
pub struct AuthenticatedUser {
	pub user: db::User,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
	type Rejection = ErrorType;

	async fn from_request_parts(
		parts: &mut Parts,
		state: &AppState,
	) -> Result<Self, Self::Rejection> {
		let jar = CookieJar::from_headers(&parts.headers);
		let token = jar
			.get(constants::ACCESS_TOKEN_COOKIE)
			.map(|cookie| cookie.value().to_owned())
			.filter(|value| !value.is_empty())
			.or_else(|| {
				parts
					.headers
					.get(header::AUTHORIZATION)
					.and_then(|value| value.to_str().ok())
					.and_then(|value| value.strip_prefix("Bearer "))
					.map(str::to_owned)
			})
			.ok_or(ErrorType::MalformedAccessToken)?;

		let claims = AccessTokenData::parse(&token, &state.config)?;
		let user_id = claims.user_id()?;

		db::get_user_by_id(&state.database, user_id)
			.await?
			.map(|user| Self { user })
			.ok_or_else(|| {
				debug!("Access token for deleted account `{}`", user_id);
				ErrorType::MalformedAccessToken
			})
	}
}
