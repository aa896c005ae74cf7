use axum::{extract::State, Json};

use crate::{db, prelude::*, utils::extractors::AuthenticatedUser};

/// Fetches the caller's biodata profile. 404 until the profile has been
/// written once.
pub(super) async fn get_biodata(
	State(state): State<AppState>,
	AuthenticatedUser { user }: AuthenticatedUser,
) -> Result<Json<BiodataData>, ErrorType> {
	let row = db::get_biodata_for_user(&state.database, user.id)
		.await?
		.ok_or(ErrorType::ResourceDoesNotExist)?;
	Ok(Json(row.into()))
}

/// Creates or replaces the caller's biodata profile. The owning account is
/// taken from the session; a `user` key in the body is ignored.
pub(super) async fn update_biodata(
	State(state): State<AppState>,
	AuthenticatedUser { user }: AuthenticatedUser,
	Json(body): Json<BiodataRequest>,
) -> Result<Json<BiodataData>, ErrorType> {
	let row = db::upsert_biodata(&state.database, user.id, &body).await?;
	trace!("Biodata profile saved for user `{}`", user.id);
	Ok(Json(row.into()))
}
