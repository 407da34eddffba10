use serde::{Deserialize, Serialize};

pub use super::DIR_PATH;

pub const ENDPOINT: &str = "/files/count";

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Response {
	pub count: u64,
}
