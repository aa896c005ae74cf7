//! Persistence layer. One module per entity, plus pool creation and schema
//! initialization.

mod biodata;
mod user;
mod web_login;

use std::str::FromStr;

use sqlx::{
	sqlite::{SqliteConnectOptions, SqlitePoolOptions},
	SqlitePool,
};

pub use self::{biodata::*, user::*, web_login::*};
use crate::prelude::*;

/// Creates the connection pool for the configured database file.
pub async fn create_database_connection(config: &AppConfig) -> Result<SqlitePool, sqlx::Error> {
	let in_memory = config.database.file == ":memory:";
	let url = if in_memory {
		"sqlite::memory:".to_string()
	} else {
		format!("sqlite://{}", config.database.file)
	};

	let options = SqliteConnectOptions::from_str(&url)?
		.create_if_missing(true)
		.foreign_keys(true);

	SqlitePoolOptions::new()
		// An in-memory database exists per connection; more than one
		// connection would mean more than one database.
		.max_connections(if in_memory {
			1
		} else {
			config.database.connection_limit
		})
		.connect_with(options)
		.await
}

/// Creates the schema if it does not exist yet. Safe to run on every boot.
pub async fn initialize(state: &AppState) -> Result<(), sqlx::Error> {
	info!("Initializing database");

	sqlx::query(
		r#"
		CREATE TABLE IF NOT EXISTS "user"(
			id INTEGER PRIMARY KEY AUTOINCREMENT,
			email TEXT NOT NULL UNIQUE,
			password TEXT NOT NULL,
			role TEXT NOT NULL DEFAULT 'applicant',
			date_joined INTEGER NOT NULL
		);
		"#,
	)
	.execute(&state.database)
	.await?;

	sqlx::query(
		r#"
		CREATE TABLE IF NOT EXISTS web_login(
			login_id TEXT PRIMARY KEY,
			user_id INTEGER NOT NULL REFERENCES "user"(id),
			refresh_token TEXT NOT NULL,
			token_expiry INTEGER NOT NULL,
			created INTEGER NOT NULL
		);
		"#,
	)
	.execute(&state.database)
	.await?;

	sqlx::query(
		r#"
		CREATE TABLE IF NOT EXISTS biodata(
			id INTEGER PRIMARY KEY AUTOINCREMENT,
			user_id INTEGER NOT NULL UNIQUE REFERENCES "user"(id),
			first_name TEXT NOT NULL,
			last_name TEXT NOT NULL,
			date_of_birth TEXT NOT NULL,
			gender TEXT NOT NULL,
			phone TEXT,
			address TEXT,
			city TEXT,
			state TEXT,
			country TEXT,
			emergency_contact_name TEXT,
			emergency_contact_phone TEXT,
			father_name TEXT,
			father_occupation TEXT,
			father_phone TEXT,
			father_email TEXT,
			mother_name TEXT,
			mother_occupation TEXT,
			mother_phone TEXT,
			mother_email TEXT,
			guardians_address TEXT,
			guardians_city TEXT,
			guardians_state TEXT,
			guardians_country TEXT
		);
		"#,
	)
	.execute(&state.database)
	.await?;

	Ok(())
}
