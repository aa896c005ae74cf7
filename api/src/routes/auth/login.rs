use axum::{extract::State, Json};
use axum_extra::extract::cookie::CookieJar;

use crate::{db, prelude::*, service, utils::cookies};

/// Authenticates an email/password pair and starts a session: mints the
/// access/refresh pair and sets both cookies.
///
/// The two failure modes are deliberately asymmetric in status but
/// symmetric in information: a missing field is a 400 naming the fields,
/// while unknown-email and wrong-password are the same 401 with the same
/// message and comparable timing.
pub(super) async fn login(
	State(state): State<AppState>,
	jar: CookieJar,
	Json(LoginRequest { email, password }): Json<LoginRequest>,
) -> Result<(CookieJar, Json<LoginResponse>), ErrorType> {
	if email.trim().is_empty() || password.is_empty() {
		return Err(ErrorType::MissingCredentials);
	}
	let email = email.trim().to_lowercase();

	let Some(user) = db::get_user_by_email(&state.database, &email).await? else {
		service::burn_password_verification(&password, &state.config);
		return Err(ErrorType::InvalidCredentials);
	};

	if !service::validate_hash(&password, &user.password, &state.config)? {
		return Err(ErrorType::InvalidCredentials);
	}

	let (access_token, refresh_token) =
		service::sign_in_user(&state.database, user.id, &state.config).await?;
	info!("User `{}` logged in", user.id);

	let jar = cookies::attach_session_cookies(jar, &access_token, &refresh_token, &state.config);
	Ok((jar, Json(LoginResponse::new(user.into_user_data()))))
}
