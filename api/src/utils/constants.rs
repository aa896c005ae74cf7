/// The `iss` claim of every access token this service mints.
pub const JWT_ISSUER: &str = "accounts-api";

/// Name of the cookie carrying the access JWT.
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// Name of the cookie carrying the composite refresh token.
pub const REFRESH_TOKEN_COOKIE: &str = "refresh_token";

/// Minimum accepted password length for registration.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Length of the random secret part of a refresh token.
pub const REFRESH_TOKEN_LENGTH: usize = 32;

/// Argon2 parameters used for both password and refresh-token hashes.
pub const HASHING_PARAMS: argon2::Params = argon2::Params::DEFAULT;
