use std::borrow::Cow;

use serde::{Deserialize, Serialize};

pub const ENDPOINT: &str = "/files/move";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Request<'a> {
	pub src_path: Cow<'a, str>,
	pub dest_dir: Cow<'a, str>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Response {
	pub success: bool,
	pub new_path: String,
}
