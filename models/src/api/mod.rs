/// Types for the registration, login, token-refresh and logout endpoints.
pub mod auth;
/// Types for the current-user and biodata endpoints.
pub mod user;
