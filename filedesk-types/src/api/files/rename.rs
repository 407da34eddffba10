use std::borrow::Cow;

use serde::{Deserialize, Serialize};

pub const ENDPOINT: &str = "/files/rename";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Request<'a> {
	pub src_path: Cow<'a, str>,
	/// Bare file name, the file stays in its directory.
	pub new_name: Cow<'a, str>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Response {
	pub success: bool,
	pub new_path: String,
}
