//! Shared request/response types and the API error taxonomy.
//!
//! Everything in this crate is plain data: no I/O, no framework state. The
//! `api` crate (and any client) can depend on it to speak the same wire
//! format.

/// All request and response bodies, grouped by endpoint family.
pub mod api;
mod error;

pub use error::ErrorType;

/// One-stop import for consumers of this crate.
pub mod prelude {
	pub use crate::{
		api::{auth::*, user::*},
		ErrorType,
	};
}
