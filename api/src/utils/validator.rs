use lazy_static::lazy_static;
use regex::Regex;

use crate::utils::constants;

lazy_static! {
	// Email regex: https://stackoverflow.com/a/201378
	static ref EMAIL_REGEX: Regex = Regex::new("^(?:[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*|\"(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21\x23-\x5b\x5d-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])*\")@(?:(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?|\\[(?:(?:(2(5[0-5]|[0-4][0-9])|1[0-9][0-9]|[1-9]?[0-9]))\\.){3}(?:(2(5[0-5]|[0-4][0-9])|1[0-9][0-9]|[1-9]?[0-9])|[a-z0-9-]*[a-z0-9]:(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21-\x5a\x53-\x7f]|\\\\[\x01-\x09\x0b\x0c\x0e-\x7f])+)\\])$").unwrap();
}

pub fn is_email_valid(email: &str) -> bool {
	let email = email.to_lowercase();
	email.len() <= 320 && EMAIL_REGEX.is_match(&email)
}

// Length-only policy. Complexity classes are left to the client UI.
pub fn is_password_valid(password: &str) -> bool {
	password.len() >= constants::MIN_PASSWORD_LENGTH
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn accepts_ordinary_emails() {
		assert!(is_email_valid("a@b.com"));
		assert!(is_email_valid("first.last+tag@sub.example.org"));
		assert!(is_email_valid("UPPER.CASE@EXAMPLE.COM"));
	}

	#[test]
	fn rejects_malformed_emails() {
		assert!(!is_email_valid(""));
		assert!(!is_email_valid("not-an-email"));
		assert!(!is_email_valid("missing@tld@twice.com"));
		assert!(!is_email_valid("@example.com"));
	}

	#[test]
	fn password_policy_is_length_only() {
		assert!(is_password_valid("longpass1"));
		assert!(is_password_valid("12345678"));
		assert!(!is_password_valid("short12"));
		assert!(!is_password_valid(""));
	}
}
