//! Core logic of the authentication system: password hashing and
//! verification, refresh-session creation, refresh-token validation and
//! revocation. Handlers stay thin; everything with a security invariant
//! lives here.

use std::sync::OnceLock;

use argon2::{
	password_hash::{rand_core::OsRng, SaltString},
	Algorithm, Argon2, PasswordHash, PasswordHasher, PasswordVerifier, Version,
};
use rand::{distributions::Alphanumeric, Rng};
use sqlx::SqlitePool;
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use crate::{db, models::AccessTokenData, prelude::*};

fn hasher(config: &AppConfig) -> Result<Argon2<'_>, ErrorType> {
	Argon2::new_with_secret(
		config.password_pepper.as_bytes(),
		Algorithm::Argon2id,
		Version::V0x13,
		constants::HASHING_PARAMS,
	)
	.map_err(ErrorType::server_error)
}

/// Hashes a password (or refresh-token secret) into a PHC string with a
/// fresh salt and the deployment pepper.
pub fn hash_password(password: &str, config: &AppConfig) -> Result<String, ErrorType> {
	let salt = SaltString::generate(&mut OsRng);
	hasher(config)?
		.hash_password(password.as_bytes(), &salt)
		.map(|hash| hash.to_string())
		.map_err(ErrorType::server_error)
}

/// Verifies a password against a stored PHC string. A mismatch is `Ok(false)`,
/// not an error; only an unusable stored hash is an error.
pub fn validate_hash(password: &str, hash: &str, config: &AppConfig) -> Result<bool, ErrorType> {
	let parsed = PasswordHash::new(hash).map_err(ErrorType::server_error)?;
	Ok(hasher(config)?
		.verify_password(password.as_bytes(), &parsed)
		.is_ok())
}

/// Runs a full argon2 verification against a throwaway hash. Called when no
/// account matches the given email, so that the unknown-email and
/// wrong-password paths burn comparable time and stay indistinguishable.
pub fn burn_password_verification(password: &str, config: &AppConfig) {
	static DUMMY_HASH: OnceLock<String> = OnceLock::new();

	let hash = DUMMY_HASH
		.get_or_init(|| hash_password("no-such-account", config).unwrap_or_default());
	if !hash.is_empty() {
		let _ = validate_hash(password, hash, config);
	}
}

/// Creates a refresh session for the user and mints the token pair.
///
/// Returns `(access_token, refresh_token)`. The refresh token handed to the
/// client is `"<login_id>.<secret>"`; only an argon2 hash of the secret is
/// stored.
pub async fn sign_in_user(
	database: &SqlitePool,
	user_id: i64,
	config: &AppConfig,
) -> Result<(String, String), ErrorType> {
	let login_id = Uuid::new_v4();
	let secret = rand::thread_rng()
		.sample_iter(&Alphanumeric)
		.take(constants::REFRESH_TOKEN_LENGTH)
		.map(char::from)
		.collect::<String>();

	let now = OffsetDateTime::now_utc();
	let login = db::WebLogin {
		login_id: login_id.to_string(),
		user_id,
		refresh_token: hash_password(&secret, config)?,
		token_expiry: (now + Duration::days(config.tokens.refresh_token_validity_days))
			.unix_timestamp(),
		created: now.unix_timestamp(),
	};
	db::add_web_login(database, &login).await?;
	trace!("Refresh session `{}` created", login_id);

	let access_token = generate_access_token(user_id, config)?;
	let refresh_token = format!("{login_id}.{secret}");

	Ok((access_token, refresh_token))
}

/// Mints a signed access token for the user.
pub fn generate_access_token(user_id: i64, config: &AppConfig) -> Result<String, ErrorType> {
	AccessTokenData::new_for_user(user_id, config).to_jwt(config)
}

/// Checks a composite refresh token: shape, session existence, expiry, then
/// the argon2 hash. Every failure collapses to the one invalid-token error
/// so the client learns nothing about which check tripped.
pub async fn validate_refresh_token(
	database: &SqlitePool,
	refresh_token: &str,
	config: &AppConfig,
) -> Result<db::WebLogin, ErrorType> {
	let Some((login_id, secret)) = refresh_token.split_once('.') else {
		debug!("Refresh token is not a loginId.secret composite");
		return Err(ErrorType::InvalidRefreshToken);
	};

	let login_id = Uuid::parse_str(login_id).map_err(|_| {
		debug!("Refresh token loginId is not a valid uuid");
		ErrorType::InvalidRefreshToken
	})?;

	let Some(login) = db::get_web_login(database, &login_id.to_string()).await? else {
		debug!("No session found for refresh token `{}`", login_id);
		return Err(ErrorType::InvalidRefreshToken);
	};

	if login.token_expiry < OffsetDateTime::now_utc().unix_timestamp() {
		debug!("Refresh session `{}` has expired", login_id);
		return Err(ErrorType::InvalidRefreshToken);
	}

	if !validate_hash(secret, &login.refresh_token, config)? {
		debug!("Refresh token hash could not be verified");
		return Err(ErrorType::InvalidRefreshToken);
	}

	Ok(login)
}

/// Revokes the session behind a refresh token, if it checks out. Returns
/// whether a session was actually removed; malformed or unknown tokens are
/// `Ok(false)` so logout can treat them as a no-op.
pub async fn revoke_refresh_token(
	database: &SqlitePool,
	refresh_token: &str,
	config: &AppConfig,
) -> Result<bool, ErrorType> {
	let login = match validate_refresh_token(database, refresh_token, config).await {
		Ok(login) => login,
		Err(ErrorType::InvalidRefreshToken) => return Ok(false),
		Err(other) => return Err(other),
	};

	Ok(db::delete_web_login(database, &login.login_id).await?)
}
