//! Common imports for every module in this crate.

pub use models::prelude::*;
pub use tracing::{debug, error, info, instrument, trace, warn};

pub use crate::{
	app::AppState,
	utils::{config::AppConfig, constants},
};
