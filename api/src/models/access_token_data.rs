use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, TokenData, Validation};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use crate::prelude::*;

/// The signed claims of an access token. Self-contained: verifying the
/// signature and the expiry needs no server-side lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenData {
	pub iss: String,
	/// The account id, as a string per JWT convention.
	pub sub: String,
	pub exp: i64,
	pub nbf: i64,
	pub iat: i64,
	pub jti: String,
}

impl AccessTokenData {
	/// Fresh claims for the given account, valid from now for the
	/// configured access-token window.
	pub fn new_for_user(user_id: i64, config: &AppConfig) -> Self {
		let now = OffsetDateTime::now_utc();
		Self {
			iss: constants::JWT_ISSUER.to_string(),
			sub: user_id.to_string(),
			exp: (now + Duration::minutes(config.tokens.access_token_validity_mins))
				.unix_timestamp(),
			nbf: now.unix_timestamp(),
			iat: now.unix_timestamp(),
			jti: Uuid::new_v4().to_string(),
		}
	}

	/// Signs the claims with the configured secret.
	pub fn to_jwt(&self, config: &AppConfig) -> Result<String, ErrorType> {
		jsonwebtoken::encode(
			&Default::default(),
			self,
			&EncodingKey::from_secret(config.jwt_secret.as_ref()),
		)
		.map_err(|err| {
			error!("Error encoding JWT: `{}`", err);
			ErrorType::server_error(err)
		})
	}

	/// Verifies signature, issuer and expiry, and returns the claims. Any
	/// failure is the one malformed-access-token error; the reason is only
	/// logged.
	pub fn parse(token: &str, config: &AppConfig) -> Result<Self, ErrorType> {
		let mut validation = Validation::new(Algorithm::HS256);
		validation.set_issuer(&[constants::JWT_ISSUER]);

		jsonwebtoken::decode::<Self>(
			token,
			&DecodingKey::from_secret(config.jwt_secret.as_ref()),
			&validation,
		)
		.map(|TokenData { claims, .. }| claims)
		.map_err(|err| {
			debug!("Error decoding JWT: `{}`", err);
			ErrorType::MalformedAccessToken
		})
	}

	/// The account id carried in `sub`.
	pub fn user_id(&self) -> Result<i64, ErrorType> {
		self.sub.parse().map_err(|_| {
			debug!("JWT `sub` claim `{}` is not an account id", self.sub);
			ErrorType::MalformedAccessToken
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::test::test_config;

	#[test]
	fn tokens_round_trip() {
		let config = test_config();
		let token = AccessTokenData::new_for_user(42, &config)
			.to_jwt(&config)
			.expect("encodes");

		let claims = AccessTokenData::parse(&token, &config).expect("decodes");
		assert_eq!(claims.user_id().expect("numeric sub"), 42);
		assert_eq!(claims.iss, constants::JWT_ISSUER);
		assert!(claims.exp > claims.iat);
	}

	#[test]
	fn wrong_secret_is_rejected() {
		let config = test_config();
		let token = AccessTokenData::new_for_user(42, &config)
			.to_jwt(&config)
			.expect("encodes");

		let mut other = test_config();
		other.jwt_secret = "a-completely-different-secret".to_string();
		let result = AccessTokenData::parse(&token, &other);
		assert!(matches!(result, Err(ErrorType::MalformedAccessToken)));
	}

	#[test]
	fn garbage_is_rejected() {
		let config = test_config();
		assert!(AccessTokenData::parse("not-a-jwt", &config).is_err());
		assert!(AccessTokenData::parse("", &config).is_err());
	}
}
