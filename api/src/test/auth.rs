use axum::http::StatusCode;
use serde_json::json;

use super::*;
use crate::models::AccessTokenData;

#[tokio::test]
async fn register_creates_account_and_returns_envelope() {
	let (router, state) = init_tests().await;

	let (status, _, body) = post_json(
		&router,
		"/register",
		json!({
			"email": "a@b.com",
			"password": "longpass1",
			"confirmPassword": "longpass1",
		}),
		None,
	)
	.await;

	assert_eq!(status, StatusCode::CREATED);
	assert_eq!(
		body,
		json!({"detail": "Registration successful", "email": "a@b.com"})
	);
	assert_eq!(user_count(&state).await, 1);
}

#[tokio::test]
async fn register_mismatched_passwords_creates_nothing() {
	let (router, state) = init_tests().await;

	let (status, _, body) = post_json(
		&router,
		"/register",
		json!({
			"email": "a@b.com",
			"password": "longpass1",
			"confirmPassword": "different1",
		}),
		None,
	)
	.await;

	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(body["error"], "Passwords do not match");
	assert_eq!(user_count(&state).await, 0);
}

#[tokio::test]
async fn register_enforces_minimum_password_length() {
	let (router, state) = init_tests().await;

	let (status, _, _) = post_json(
		&router,
		"/register",
		json!({
			"email": "a@b.com",
			"password": "short1",
			"confirmPassword": "short1",
		}),
		None,
	)
	.await;

	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(user_count(&state).await, 0);
}

#[tokio::test]
async fn register_rejects_duplicate_email_case_insensitively() {
	let (router, state) = init_tests().await;

	let body = json!({
		"email": "a@b.com",
		"password": "longpass1",
		"confirmPassword": "longpass1",
	});
	let (status, _, _) = post_json(&router, "/register", body, None).await;
	assert_eq!(status, StatusCode::CREATED);

	let (status, _, error_body) = post_json(
		&router,
		"/register",
		json!({
			"email": "A@B.COM",
			"password": "longpass1",
			"confirmPassword": "longpass1",
		}),
		None,
	)
	.await;

	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(error_body["error"], "This email is already in use");
	assert_eq!(user_count(&state).await, 1);
}

#[tokio::test]
async fn racing_duplicate_insert_is_a_duplicate_email_error() {
	let (router, state) = init_tests().await;

	let (status, _, _) = post_json(
		&router,
		"/register",
		json!({
			"email": "a@b.com",
			"password": "longpass1",
			"confirmPassword": "longpass1",
		}),
		None,
	)
	.await;
	assert_eq!(status, StatusCode::CREATED);

	// A second writer that got past the pre-check before the first commit
	// hits the UNIQUE constraint; that must surface as the duplicate-email
	// error, not an internal one.
	let error = crate::db::create_user(&state.database, "a@b.com", "another-hash", 0)
		.await
		.expect_err("unique constraint trips");
	assert_eq!(
		crate::routes::auth::register::map_create_user_error(error),
		models::ErrorType::EmailUnavailable
	);
}

#[tokio::test]
async fn login_sets_decodable_token_cookies() {
	let (router, state) = init_tests().await;
	let (access, refresh) = register_and_login(&router, "a@b.com", "longpass1").await;

	assert!(!access.is_empty());
	assert!(!refresh.is_empty());

	// The access cookie is a self-contained JWT bound to the account.
	let claims = AccessTokenData::parse(&access, &state.config).expect("access token decodes");
	let user = crate::db::get_user_by_email(&state.database, "a@b.com")
		.await
		.expect("query succeeds")
		.expect("account exists");
	assert_eq!(claims.user_id().expect("numeric sub"), user.id);

	// The refresh cookie is a loginId.secret composite with a live session.
	let (login_id, secret) = refresh.split_once('.').expect("composite refresh token");
	assert!(!secret.is_empty());
	let session = crate::db::get_web_login(&state.database, login_id)
		.await
		.expect("query succeeds")
		.expect("session exists");
	assert_eq!(session.user_id, user.id);
	// Only a hash of the secret is stored.
	assert_ne!(session.refresh_token, secret);
}

#[tokio::test]
async fn login_returns_user_representation() {
	let (router, _state) = init_tests().await;
	register_and_login(&router, "a@b.com", "longpass1").await;

	let (status, _, body) = post_json(
		&router,
		"/login",
		json!({"email": "a@b.com", "password": "longpass1"}),
		None,
	)
	.await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["detail"], "Login successful");
	assert_eq!(body["user"]["email"], "a@b.com");
	assert_eq!(body["user"]["role"], "applicant");
	assert!(body["user"]["id"].is_i64());
	assert!(body.get("password").is_none());
}

#[tokio::test]
async fn login_failures_are_indistinguishable() {
	let (router, _state) = init_tests().await;
	register_and_login(&router, "a@b.com", "longpass1").await;

	let (wrong_password_status, _, wrong_password_body) = post_json(
		&router,
		"/login",
		json!({"email": "a@b.com", "password": "wrong-password"}),
		None,
	)
	.await;
	let (unknown_email_status, _, unknown_email_body) = post_json(
		&router,
		"/login",
		json!({"email": "nobody@b.com", "password": "longpass1"}),
		None,
	)
	.await;

	assert_eq!(wrong_password_status, StatusCode::UNAUTHORIZED);
	assert_eq!(unknown_email_status, StatusCode::UNAUTHORIZED);
	// Byte-identical bodies: no account enumeration.
	assert_eq!(wrong_password_body, unknown_email_body);
	assert_eq!(
		wrong_password_body,
		json!({"error": "Unable to log in with provided credentials."})
	);
}

#[tokio::test]
async fn login_with_missing_fields_is_a_validation_error() {
	let (router, _state) = init_tests().await;

	for body in [
		json!({}),
		json!({"email": "a@b.com"}),
		json!({"password": "longpass1"}),
		json!({"email": "", "password": ""}),
	] {
		let (status, _, response) = post_json(&router, "/login", body, None).await;
		assert_eq!(status, StatusCode::BAD_REQUEST);
		assert_eq!(response["error"], "Must include email and password");
	}
}

#[tokio::test]
async fn refresh_without_cookie_is_rejected() {
	let (router, _state) = init_tests().await;

	let (status, _, body) = post_json(&router, "/refresh-token", json!({}), None).await;

	assert_eq!(status, StatusCode::UNAUTHORIZED);
	assert_eq!(body["error"], "Refresh token not found");
}

#[tokio::test]
async fn refresh_mints_a_new_access_token() {
	let (router, state) = init_tests().await;
	let (_access, refresh) = register_and_login(&router, "a@b.com", "longpass1").await;

	let (status, headers, body) = post_json(
		&router,
		"/refresh-token",
		json!({}),
		Some(&format!("refresh_token={refresh}")),
	)
	.await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["detail"], "Access token refreshed");

	let token = body["access_token"].as_str().expect("token in body");
	let claims = AccessTokenData::parse(token, &state.config).expect("fresh token decodes");
	let user = crate::db::get_user_by_email(&state.database, "a@b.com")
		.await
		.expect("query succeeds")
		.expect("account exists");
	assert_eq!(claims.user_id().expect("numeric sub"), user.id);

	// The access cookie is reset alongside the body.
	let cookie = response_cookie(&headers, "access_token").expect("cookie reset");
	assert_eq!(cookie, token);
	// The refresh cookie is not rotated.
	assert!(response_cookie(&headers, "refresh_token").is_none());
}

#[tokio::test]
async fn refresh_token_is_reusable_until_revoked() {
	let (router, _state) = init_tests().await;
	let (_access, refresh) = register_and_login(&router, "a@b.com", "longpass1").await;
	let cookies = format!("refresh_token={refresh}");

	for _ in 0..2 {
		let (status, _, _) = post_json(&router, "/refresh-token", json!({}), Some(&cookies)).await;
		assert_eq!(status, StatusCode::OK);
	}
}

#[tokio::test]
async fn refresh_with_garbage_cookie_is_rejected() {
	let (router, _state) = init_tests().await;

	for garbage in ["no-dot-here", "not-a-uuid.secret", "e3b0c442.trailing"] {
		let (status, _, body) = post_json(
			&router,
			"/refresh-token",
			json!({}),
			Some(&format!("refresh_token={garbage}")),
		)
		.await;
		assert_eq!(status, StatusCode::UNAUTHORIZED);
		assert_eq!(body["error"], "Invalid or expired refresh token");
	}
}

#[tokio::test]
async fn expired_refresh_session_is_rejected() {
	let (router, state) = init_tests().await;
	let (_access, refresh) = register_and_login(&router, "a@b.com", "longpass1").await;

	// Age the session past its expiry; the cookie the client holds is
	// unchanged and its hash would still verify.
	let (login_id, _secret) = refresh.split_once('.').expect("composite refresh token");
	sqlx::query("UPDATE web_login SET token_expiry = ? WHERE login_id = ?;")
		.bind(time::OffsetDateTime::now_utc().unix_timestamp() - 60)
		.bind(login_id)
		.execute(&state.database)
		.await
		.expect("update succeeds");

	let (status, _, body) = post_json(
		&router,
		"/refresh-token",
		json!({}),
		Some(&format!("refresh_token={refresh}")),
	)
	.await;

	assert_eq!(status, StatusCode::UNAUTHORIZED);
	assert_eq!(body["error"], "Invalid or expired refresh token");
}

#[tokio::test]
async fn logout_revokes_the_refresh_session() {
	let (router, _state) = init_tests().await;
	let (_access, refresh) = register_and_login(&router, "a@b.com", "longpass1").await;
	let cookies = format!("refresh_token={refresh}");

	let (status, _, body) = post_json(&router, "/logout", json!({}), Some(&cookies)).await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body, json!({"detail": "Successfully logged out."}));

	// The token the client still holds can no longer mint access tokens.
	let (status, _, body) = post_json(&router, "/refresh-token", json!({}), Some(&cookies)).await;
	assert_eq!(status, StatusCode::UNAUTHORIZED);
	assert_eq!(body["error"], "Invalid or expired refresh token");
}

#[tokio::test]
async fn logout_is_idempotent_and_never_fails() {
	let (router, _state) = init_tests().await;
	let (_access, refresh) = register_and_login(&router, "a@b.com", "longpass1").await;
	let cookies = format!("refresh_token={refresh}");

	for _ in 0..2 {
		let (status, _, body) = post_json(&router, "/logout", json!({}), Some(&cookies)).await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(body["detail"], "Successfully logged out.");
	}

	// No cookie at all is equally fine.
	let (status, _, _) = post_json(&router, "/logout", json!({}), None).await;
	assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn logout_clears_both_cookies_with_matching_attributes() {
	let (router, _state) = init_tests().await;
	let (_access, refresh) = register_and_login(&router, "a@b.com", "longpass1").await;

	let (_, headers, _) = post_json(
		&router,
		"/logout",
		json!({}),
		Some(&format!("refresh_token={refresh}")),
	)
	.await;

	for name in ["access_token", "refresh_token"] {
		let line = response_set_cookie_line(&headers, name).expect("removal cookie present");
		// Emptied value, expired immediately, same path as when set.
		assert!(line.starts_with(&format!("{name}=;")), "line: {line}");
		assert!(line.contains("Max-Age=0"), "line: {line}");
		assert!(line.contains("Path=/"), "line: {line}");
		assert!(line.contains("HttpOnly"), "line: {line}");
	}
}

#[tokio::test]
async fn login_cookie_attributes_follow_config() {
	let (router, _state) = init_tests().await;
	register_and_login(&router, "a@b.com", "longpass1").await;

	let (_, headers, _) = post_json(
		&router,
		"/login",
		json!({"email": "a@b.com", "password": "longpass1"}),
		None,
	)
	.await;

	let access = response_set_cookie_line(&headers, "access_token").expect("access cookie");
	assert!(access.contains("HttpOnly"), "line: {access}");
	assert!(access.contains("SameSite=Lax"), "line: {access}");
	assert!(access.contains("Path=/"), "line: {access}");
	// 60 minutes, the configured default.
	assert!(access.contains("Max-Age=3600"), "line: {access}");

	let refresh = response_set_cookie_line(&headers, "refresh_token").expect("refresh cookie");
	// 1 day, the configured default.
	assert!(refresh.contains("Max-Age=86400"), "line: {refresh}");
}
