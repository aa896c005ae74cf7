use serde::{Deserialize, Serialize};

use crate::api::user::UserData;

/// Body of `POST /register`.
///
/// `confirmPassword` is write-only: it exists here and nowhere else in the
/// crate, so it can never appear in a response representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
	pub email: String,
	pub password: String,
	pub confirm_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
	pub detail: String,
	pub email: String,
}

impl RegisterResponse {
	pub fn new(email: impl Into<String>) -> Self {
		Self {
			detail: "Registration successful".to_string(),
			email: email.into(),
		}
	}
}

/// Body of `POST /login`.
///
/// Both fields default to empty rather than being required at the serde
/// level, so that an incomplete body surfaces as the documented
/// missing-credentials error instead of a deserialization rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
	#[serde(default)]
	pub email: String,
	#[serde(default)]
	pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
	pub detail: String,
	pub user: UserData,
}

impl LoginResponse {
	pub fn new(user: UserData) -> Self {
		Self {
			detail: "Login successful".to_string(),
			user,
		}
	}
}

/// Body of a successful `POST /refresh-token`.
///
/// The token key is pinned to `access_token` (not camelCase) because that is
/// the published wire contract for this endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenewAccessTokenResponse {
	pub detail: String,
	#[serde(rename = "access_token")]
	pub access_token: String,
}

impl RenewAccessTokenResponse {
	pub fn new(access_token: impl Into<String>) -> Self {
		Self {
			detail: "Access token refreshed".to_string(),
			access_token: access_token.into(),
		}
	}
}

/// Body of `POST /logout`. Logout never fails from the client's point of
/// view, so this is the only shape the endpoint returns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LogoutResponse {
	pub detail: String,
}

impl Default for LogoutResponse {
	fn default() -> Self {
		Self {
			detail: "Successfully logged out.".to_string(),
		}
	}
}
