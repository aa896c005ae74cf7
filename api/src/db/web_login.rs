use crate::prelude::*;

/// One refresh session. The row existing and being unexpired is what makes
/// a refresh token honorable; deleting the row is revocation.
///
/// `refresh_token` holds an argon2 hash of the secret half of the
/// client-side composite token, so a leaked database cannot mint access
/// tokens.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WebLogin {
	pub login_id: String,
	pub user_id: i64,
	pub refresh_token: String,
	pub token_expiry: i64,
	pub created: i64,
}

pub async fn add_web_login<'a, E>(executor: E, login: &WebLogin) -> Result<(), sqlx::Error>
where
	E: sqlx::Executor<'a, Database = sqlx::Sqlite>,
{
	sqlx::query(
		r#"
		INSERT INTO
			web_login(login_id, user_id, refresh_token, token_expiry, created)
		VALUES
			(?, ?, ?, ?, ?);
		"#,
	)
	.bind(&login.login_id)
	.bind(login.user_id)
	.bind(&login.refresh_token)
	.bind(login.token_expiry)
	.bind(login.created)
	.execute(executor)
	.await
	.map(|_| ())
}

pub async fn get_web_login<'a, E>(
	executor: E,
	login_id: &str,
) -> Result<Option<WebLogin>, sqlx::Error>
where
	E: sqlx::Executor<'a, Database = sqlx::Sqlite>,
{
	sqlx::query_as::<_, WebLogin>(
		r#"
		SELECT
			login_id, user_id, refresh_token, token_expiry, created
		FROM
			web_login
		WHERE
			login_id = ?;
		"#,
	)
	.bind(login_id)
	.fetch_optional(executor)
	.await
}

/// Deletes the session, returning whether a row was actually removed.
pub async fn delete_web_login<'a, E>(executor: E, login_id: &str) -> Result<bool, sqlx::Error>
where
	E: sqlx::Executor<'a, Database = sqlx::Sqlite>,
{
	sqlx::query(
		r#"
		DELETE FROM
			web_login
		WHERE
			login_id = ?;
		"#,
	)
	.bind(login_id)
	.execute(executor)
	.await
	.map(|result| result.rows_affected() > 0)
}
