use crate::prelude::*;

/// An account row. `password` is the argon2 PHC string, never the plaintext.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
	pub id: i64,
	pub email: String,
	pub password: String,
	pub role: Role,
	pub date_joined: i64,
}

impl User {
	/// The public representation of this account. Drops the password hash.
	pub fn into_user_data(self) -> UserData {
		UserData {
			id: self.id,
			email: self.email,
			role: self.role,
			date_joined: self.date_joined,
		}
	}
}

pub async fn create_user<'a, E>(
	executor: E,
	email: &str,
	password_hash: &str,
	date_joined: i64,
) -> Result<User, sqlx::Error>
where
	E: sqlx::Executor<'a, Database = sqlx::Sqlite>,
{
	sqlx::query_as::<_, User>(
		r#"
		INSERT INTO
			"user"(email, password, role, date_joined)
		VALUES
			(?, ?, ?, ?)
		RETURNING
			id, email, password, role, date_joined;
		"#,
	)
	.bind(email)
	.bind(password_hash)
	.bind(Role::Applicant)
	.bind(date_joined)
	.fetch_one(executor)
	.await
}

pub async fn get_user_by_email<'a, E>(executor: E, email: &str) -> Result<Option<User>, sqlx::Error>
where
	E: sqlx::Executor<'a, Database = sqlx::Sqlite>,
{
	sqlx::query_as::<_, User>(
		r#"
		SELECT
			id, email, password, role, date_joined
		FROM
			"user"
		WHERE
			email = ?;
		"#,
	)
	.bind(email)
	.fetch_optional(executor)
	.await
}

pub async fn get_user_by_id<'a, E>(executor: E, id: i64) -> Result<Option<User>, sqlx::Error>
where
	E: sqlx::Executor<'a, Database = sqlx::Sqlite>,
{
	sqlx::query_as::<_, User>(
		r#"
		SELECT
			id, email, password, role, date_joined
		FROM
			"user"
		WHERE
			id = ?;
		"#,
	)
	.bind(id)
	.fetch_optional(executor)
	.await
}
