mod access_token_data;

pub use access_token_data::AccessTokenData;
