use crate::prelude::*;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BiodataRow {
	pub id: i64,
	pub user_id: i64,
	pub first_name: String,
	pub last_name: String,
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

impl From<BiodataRow> for BiodataData {
	fn from(row: BiodataRow) -> Self {
		Self {
			id: row.id,
			user: row.user_id,
			first_name: row.first_name,
			last_name: row.last_name,
			date_of_birth: row.date_of_birth,
			gender: row.gender,
			phone: row.phone,
			address: row.address,
			city: row.city,
			state: row.state,
			country: row.country,
			emergency_contact_name: row.emergency_contact_name,
			emergency_contact_phone: row.emergency_contact_phone,
			father_name: row.father_name,
			father_occupation: row.father_occupation,
			father_phone: row.father_phone,
			father_email: row.father_email,
			mother_name: row.mother_name,
			mother_occupation: row.mother_occupation,
			mother_phone: row.mother_phone,
			mother_email: row.mother_email,
			guardians_address: row.guardians_address,
			guardians_city: row.guardians_city,
			guardians_state: row.guardians_state,
			guardians_country: row.guardians_country,
		}
	}
}

const ALL_COLUMNS: &str = "id, user_id, first_name, last_name, date_of_birth, gender, phone, \
	address, city, state, country, emergency_contact_name, emergency_contact_phone, \
	father_name, father_occupation, father_phone, father_email, mother_name, \
	mother_occupation, mother_phone, mother_email, guardians_address, guardians_city, \
	guardians_state, guardians_country";

pub async fn get_biodata_for_user<'a, E>(
	executor: E,
	user_id: i64,
) -> Result<Option<BiodataRow>, sqlx::Error>
where
	E: sqlx::Executor<'a, Database = sqlx::Sqlite>,
{
	let query = format!(
		r#"
		SELECT
			{ALL_COLUMNS}
		FROM
			biodata
		WHERE
			user_id = ?;
		"#
	);
	sqlx::query_as::<_, BiodataRow>(&query)
		.bind(user_id)
		.fetch_optional(executor)
		.await
}

/// Creates the caller's profile on first write, replaces its fields on
/// every later write. `user_id` always comes from the session, never from
/// the body.
pub async fn upsert_biodata<'a, E>(
	executor: E,
	user_id: i64,
	biodata: &BiodataRequest,
) -> Result<BiodataRow, sqlx::Error>
where
	E: sqlx::Executor<'a, Database = sqlx::Sqlite>,
{
	let query = format!(
		r#"
		INSERT INTO
			biodata(
				user_id, first_name, last_name, date_of_birth, gender, phone,
				address, city, state, country, emergency_contact_name,
				emergency_contact_phone, father_name, father_occupation,
				father_phone, father_email, mother_name, mother_occupation,
				mother_phone, mother_email, guardians_address, guardians_city,
				guardians_state, guardians_country
			)
		VALUES
			(?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
		ON CONFLICT(user_id) DO UPDATE SET
			first_name = excluded.first_name,
			last_name = excluded.last_name,
			date_of_birth = excluded.date_of_birth,
			gender = excluded.gender,
			phone = excluded.phone,
			address = excluded.address,
			city = excluded.city,
			state = excluded.state,
			country = excluded.country,
			emergency_contact_name = excluded.emergency_contact_name,
			emergency_contact_phone = excluded.emergency_contact_phone,
			father_name = excluded.father_name,
			father_occupation = excluded.father_occupation,
			father_phone = excluded.father_phone,
			father_email = excluded.father_email,
			mother_name = excluded.mother_name,
			mother_occupation = excluded.mother_occupation,
			mother_phone = excluded.mother_phone,
			mother_email = excluded.mother_email,
			guardians_address = excluded.guardians_address,
			guardians_city = excluded.guardians_city,
			guardians_state = excluded.guardians_state,
			guardians_country = excluded.guardians_country
		RETURNING
			{ALL_COLUMNS};
		"#
	);
	sqlx::query_as::<_, BiodataRow>(&query)
		.bind(user_id)
		.bind(&biodata.first_name)
		.bind(&biodata.last_name)
		.bind(&biodata.date_of_birth)
		.bind(biodata.gender)
		.bind(&biodata.phone)
		.bind(&biodata.address)
		.bind(&biodata.city)
		.bind(&biodata.state)
		.bind(&biodata.country)
		.bind(&biodata.emergency_contact_name)
		.bind(&biodata.emergency_contact_phone)
		.bind(&biodata.father_name)
		.bind(&biodata.father_occupation)
		.bind(&biodata.father_phone)
		.bind(&biodata.father_email)
		.bind(&biodata.mother_name)
		.bind(&biodata.mother_occupation)
		.bind(&biodata.mother_phone)
		.bind(&biodata.mother_email)
		.bind(&biodata.guardians_address)
		.bind(&biodata.guardians_city)
		.bind(&biodata.guardians_state)
		.bind(&biodata.guardians_country)
		.fetch_one(executor)
		.await
}
