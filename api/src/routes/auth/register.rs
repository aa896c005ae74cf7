use axum::{extract::State, http::StatusCode, Json};
use time::OffsetDateTime;

use crate::{db, prelude::*, service, utils::validator};

/// Creates a new account. One-shot: no tokens are issued and no cookies are
/// set; the client logs in afterwards.
pub(super) async fn register(
	State(state): State<AppState>,
	Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ErrorType> {
	let RegisterRequest {
		email,
		password,
		confirm_password,
	} = body;
	info!("Registering a new account");

	// Order matters: nothing may be created before every check passes.
	if password != confirm_password {
		return Err(ErrorType::PasswordsDoNotMatch);
	}

	let email = email.trim().to_lowercase();
	if !validator::is_email_valid(&email) {
		return Err(ErrorType::InvalidEmail);
	}
	if !validator::is_password_valid(&password) {
		return Err(ErrorType::PasswordTooWeak);
	}

	let mut transaction = state.database.begin().await?;

	if db::get_user_by_email(&mut *transaction, &email)
		.await?
		.is_some()
	{
		return Err(ErrorType::EmailUnavailable);
	}

	let password_hash = service::hash_password(&password, &state.config)?;
	let user = db::create_user(
		&mut *transaction,
		&email,
		&password_hash,
		OffsetDateTime::now_utc().unix_timestamp(),
	)
	.await
	.map_err(map_create_user_error)?;

	transaction.commit().await?;
	info!("Account `{}` created", user.id);

	Ok((StatusCode::CREATED, Json(RegisterResponse::new(user.email))))
}

/// A unique violation on the insert means another request registered the
/// same email between the pre-check and the insert; that race is the same
/// duplicate-email error, not a server fault.
pub(crate) fn map_create_user_error(error: sqlx::Error) -> ErrorType {
	match &error {
		sqlx::Error::Database(db_error) if db_error.is_unique_violation() => {
			ErrorType::EmailUnavailable
		}
		_ => error.into(),
	}
}
