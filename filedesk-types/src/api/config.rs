use std::borrow::Cow;

use serde::{Deserialize, Serialize};

pub const ENDPOINT: &str = "/config";

/// Optional query parameter selecting the config file, the backend falls
/// back to its own `config.json` without it.
pub const PATH: &str = "path";

/// Body of `POST /config`. `path` is sent as `null` when unset.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SaveRequest<'a, C> {
	pub config: &'a C,
	pub path: Option<Cow<'a, str>>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SaveResponse {
	pub success: bool,
	pub path: String,
}
