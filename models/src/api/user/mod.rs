use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// The role assigned to an account. New accounts start as applicants;
/// promotion happens through out-of-band administrative paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum Role {
	#[default]
	Applicant,
	Student,
	Staff,
	Admin,
}

impl Display for Role {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Role::Applicant => write!(f, "applicant"),
			Role::Student => write!(f, "student"),
			Role::Staff => write!(f, "staff"),
			Role::Admin => write!(f, "admin"),
		}
	}
}

impl FromStr for Role {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_lowercase().as_str() {
			"applicant" => Ok(Self::Applicant),
			"student" => Ok(Self::Student),
			"staff" => Ok(Self::Staff),
			"admin" => Ok(Self::Admin),
			unknown => Err(format!("unknown role: {unknown}")),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum Gender {
	Male,
	Female,
	Other,
}

/// The public representation of an account. The password hash never leaves
/// the `api` crate, so it has no field here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
	pub id: i64,
	pub email: String,
	pub role: Role,
	/// Unix timestamp (seconds) of account creation.
	pub date_joined: i64,
}

/// A biodata profile as returned to its owner. `user` is the owning account
/// id and is always assigned server-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BiodataData {
	pub id: i64,
	pub user: i64,
	pub first_name: String,
	pub last_name: String,
	/// ISO date, `YYYY-MM-DD`.
	pub date_of_birth: String,
	pub gender: Gender,
	pub phone: Option<String>,
	pub address: Option<String>,
	pub city: Option<String>,
	pub state: Option<String>,
	pub country: Option<String>,
	pub emergency_contact_name: Option<String>,
	pub emergency_contact_phone: Option<String>,
	pub father_name: Option<String>,
	pub father_occupation: Option<String>,
	pub father_phone: Option<String>,
	pub father_email: Option<String>,
	pub mother_name: Option<String>,
	pub mother_occupation: Option<String>,
	pub mother_phone: Option<String>,
	pub mother_email: Option<String>,
	pub guardians_address: Option<String>,
	pub guardians_city: Option<String>,
	pub guardians_state: Option<String>,
	pub guardians_country: Option<String>,
}

/// Body of `PUT /user/biodata`. Deliberately has no `user` or `id` field:
/// the binding to an account comes from the authenticated session only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiodataRequest {
	pub first_name: String,
	pub last_name: String,
	pub date_of_birth: String,
	pub gender: Gender,
	#[serde(default)]
	pub phone: Option<String>,
	#[serde(default)]
	pub address: Option<String>,
	#[serde(default)]
	pub city: Option<String>,
	#[serde(default)]
	pub state: Option<String>,
	#[serde(default)]
	pub country: Option<String>,
	#[serde(default)]
	pub emergency_contact_name: Option<String>,
	#[serde(default)]
	pub emergency_contact_phone: Option<String>,
	#[serde(default)]
	pub father_name: Option<String>,
	#[serde(default)]
	pub father_occupation: Option<String>,
	#[serde(default)]
	pub father_phone: Option<String>,
	#[serde(default)]
	pub father_email: Option<String>,
	#[serde(default)]
	pub mother_name: Option<String>,
	#[serde(default)]
	pub mother_occupation: Option<String>,
	#[serde(default)]
	pub mother_phone: Option<String>,
	#[serde(default)]
	pub mother_email: Option<String>,
	#[serde(default)]
	pub guardians_address: Option<String>,
	#[serde(default)]
	pub guardians_city: Option<String>,
	#[serde(default)]
	pub guardians_state: Option<String>,
	#[serde(default)]
	pub guardians_country: Option<String>,
}
