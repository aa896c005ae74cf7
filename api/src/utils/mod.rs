pub mod config;
pub mod constants;
pub mod cookies;
pub mod extractors;
pub mod validator;
