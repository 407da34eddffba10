use serde::{Deserialize, Serialize};

/// Mime type the backend reports when it cannot guess one.
pub const UNKNOWN_TYPE: &str = "unknown";

/// A regular file as listed by the backend. Directories are never listed.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
	pub name: String,
	pub full_path: String,
	#[serde(rename = "type")]
	pub mime_type: String,
	pub size: u64,
}

impl FileInfo {
	pub fn has_known_type(&self) -> bool {
		self.mime_type != UNKNOWN_TYPE
	}
}
