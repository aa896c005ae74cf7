//! Endpoints scoped to the authenticated account.

use axum::{routing::get, Json, Router};

use crate::{prelude::*, utils::extractors::AuthenticatedUser};

mod biodata;

pub fn create_sub_app() -> Router<AppState> {
	Router::new()
		.route("/", get(get_current_user))
		.route(
			"/biodata",
			get(biodata::get_biodata).put(biodata::update_biodata),
		)
}

/// Returns the caller's own account representation.
async fn get_current_user(AuthenticatedUser { user }: AuthenticatedUser) -> Json<UserData> {
	Json(user.into_user_data())
}
