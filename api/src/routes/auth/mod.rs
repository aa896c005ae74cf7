//! Registration, login, token refresh and logout.

use axum::{routing::post, Router};

use crate::prelude::*;

mod login;
mod logout;
pub(crate) mod register;
mod renew_access_token;

pub fn create_sub_app() -> Router<AppState> {
	Router::new()
		.route("/register", post(register::register))
		.route("/login", post(login::login))
		.route("/refresh-token", post(renew_access_token::renew_access_token))
		.route("/logout", post(logout::logout))
}
