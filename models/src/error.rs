use std::{
	error::Error as StdError,
	fmt::{Display, Formatter},
	mem,
};

use serde::{de::Error, Deserialize, Serialize};

/// A list of all the possible errors that can be returned by the API.
///
/// Every client-visible failure is one of these, with a stable status code
/// and a stable human-readable message. Internal failures are wrapped in
/// [`ErrorType::InternalServerError`] and their detail never reaches the
/// client.
#[derive(Debug)]
pub enum ErrorType {
	/// The login request did not carry both an email and a password
	MissingCredentials,
	/// The email and password pair could not be authenticated. One message
	/// for both unknown-email and wrong-password, so the response never
	/// reveals which part was wrong
	InvalidCredentials,
	/// The email provided is not a valid email address
	InvalidEmail,
	/// The email provided is already in use by another account
	EmailUnavailable,
	/// The password and its confirmation did not match
	PasswordsDoNotMatch,
	/// The password does not meet the minimum length policy
	PasswordTooWeak,
	/// No refresh token cookie was sent with the request
	MissingRefreshToken,
	/// A refresh token was sent but it is malformed, expired or revoked
	InvalidRefreshToken,
	/// The access token (JWT) is absent, malformed, expired or has a bad
	/// signature
	MalformedAccessToken,
	/// The resource that the user is trying to access does not exist
	ResourceDoesNotExist,
	/// An internal server error occurred. This should not happen unless
	/// there is a bug in the server
	InternalServerError(anyhow::Error),
}

impl ErrorType {
	/// Returns the status code that should be used for this error
	pub fn default_status_code(&self) -> u16 {
		match self {
			Self::MissingCredentials => 400,
			Self::InvalidCredentials => 401,
			Self::InvalidEmail => 400,
			Self::EmailUnavailable => 400,
			Self::PasswordsDoNotMatch => 400,
			Self::PasswordTooWeak => 400,
			Self::MissingRefreshToken => 401,
			Self::InvalidRefreshToken => 401,
			Self::MalformedAccessToken => 401,
			Self::ResourceDoesNotExist => 404,
			Self::InternalServerError(_) => 500,
		}
	}

	/// Returns the message that should be used for this error. This is the
	/// message that is user-friendly and can be shown to the user
	pub fn message(&self) -> impl Into<String> {
		match self {
			Self::MissingCredentials => "Must include email and password",
			Self::InvalidCredentials => "Unable to log in with provided credentials.",
			Self::InvalidEmail => "Enter a valid email address",
			Self::EmailUnavailable => "This email is already in use",
			Self::PasswordsDoNotMatch => "Passwords do not match",
			Self::PasswordTooWeak => "Password must be at least 8 characters long",
			Self::MissingRefreshToken => "Refresh token not found",
			Self::InvalidRefreshToken => "Invalid or expired refresh token",
			Self::MalformedAccessToken => "Your access token is invalid. Please login again",
			Self::ResourceDoesNotExist => "The resource you are trying to access does not exist",
			Self::InternalServerError(_) => "An internal server error has occured",
		}
	}

	/// Creates an [`ErrorType::InternalServerError`] with the given message
	pub fn server_error(message: impl Display) -> Self {
		Self::InternalServerError(anyhow::anyhow!(message.to_string()))
	}
}

impl PartialEq for ErrorType {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::InternalServerError(_), Self::InternalServerError(_)) => true,
			_ => mem::discriminant(self) == mem::discriminant(other),
		}
	}
}

impl Eq for ErrorType {}

impl<Error> From<Error> for ErrorType
where
	Error: StdError + Send + Sync + 'static,
{
	fn from(error: Error) -> Self {
		Self::InternalServerError(error.into())
	}
}

impl Clone for ErrorType {
	fn clone(&self) -> Self {
		match self {
			Self::MissingCredentials => Self::MissingCredentials,
			Self::InvalidCredentials => Self::InvalidCredentials,
			Self::InvalidEmail => Self::InvalidEmail,
			Self::EmailUnavailable => Self::EmailUnavailable,
			Self::PasswordsDoNotMatch => Self::PasswordsDoNotMatch,
			Self::PasswordTooWeak => Self::PasswordTooWeak,
			Self::MissingRefreshToken => Self::MissingRefreshToken,
			Self::InvalidRefreshToken => Self::InvalidRefreshToken,
			Self::MalformedAccessToken => Self::MalformedAccessToken,
			Self::ResourceDoesNotExist => Self::ResourceDoesNotExist,
			Self::InternalServerError(arg0) => {
				Self::InternalServerError(anyhow::anyhow!(arg0.to_string()))
			}
		}
	}
}

impl Display for ErrorType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.message().into())
	}
}

impl Serialize for ErrorType {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		match self {
			Self::MissingCredentials => serializer.serialize_str("missingCredentials"),
			Self::InvalidCredentials => serializer.serialize_str("invalidCredentials"),
			Self::InvalidEmail => serializer.serialize_str("invalidEmail"),
			Self::EmailUnavailable => serializer.serialize_str("emailUnavailable"),
			Self::PasswordsDoNotMatch => serializer.serialize_str("passwordsDoNotMatch"),
			Self::PasswordTooWeak => serializer.serialize_str("passwordTooWeak"),
			Self::MissingRefreshToken => serializer.serialize_str("missingRefreshToken"),
			Self::InvalidRefreshToken => serializer.serialize_str("invalidRefreshToken"),
			Self::MalformedAccessToken => serializer.serialize_str("malformedAccessToken"),
			Self::ResourceDoesNotExist => serializer.serialize_str("resourceDoesNotExist"),
			Self::InternalServerError(_) => serializer.serialize_str("internalServerError"),
		}
	}
}

impl<'de> Deserialize<'de> for ErrorType {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		let string = String::deserialize(deserializer)?;
		Ok(match string.as_str() {
			"missingCredentials" => Self::MissingCredentials,
			"invalidCredentials" => Self::InvalidCredentials,
			"invalidEmail" => Self::InvalidEmail,
			"emailUnavailable" => Self::EmailUnavailable,
			"passwordsDoNotMatch" => Self::PasswordsDoNotMatch,
			"passwordTooWeak" => Self::PasswordTooWeak,
			"missingRefreshToken" => Self::MissingRefreshToken,
			"invalidRefreshToken" => Self::InvalidRefreshToken,
			"malformedAccessToken" => Self::MalformedAccessToken,
			"resourceDoesNotExist" => Self::ResourceDoesNotExist,
			"internalServerError" => {
				Self::InternalServerError(anyhow::anyhow!("Internal Server Error"))
			}
			unknown => return Err(Error::custom(format!("unknown variant: {unknown}"))),
		})
	}
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for ErrorType {
	fn into_response(self) -> axum::response::Response {
		use axum::{http::StatusCode, Json};

		if let Self::InternalServerError(error) = &self {
			tracing::error!("Internal server error: {:?}", error);
		}

		let status = StatusCode::from_u16(self.default_status_code())
			.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
		let body = Json(serde_json::json!({
			"error": self.message().into(),
		}));

		(status, body).into_response()
	}
}
