use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error body the backend sends alongside a failing status.
///
/// `detail` is a plain string for errors raised by the handlers and a list
/// of [`ValidationEntry`] when a request fails validation.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ErrorBody {
	pub detail: Detail,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Detail {
	Message(String),
	Validation(Vec<ValidationEntry>),
	Other(Value),
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ValidationEntry {
	#[serde(default)]
	pub loc: Vec<Value>,
	pub msg: String,
	#[serde(rename = "type", default)]
	pub kind: Option<String>,
}

impl ErrorBody {
	pub fn parse(text: &str) -> Option<Self> {
		serde_json::from_str(text).ok()
	}

	/// Human readable summary of `detail`.
	pub fn message(&self) -> String {
		match &self.detail {
			Detail::Message(message) => message.clone(),
			Detail::Validation(entries) => entries
				.iter()
				.map(ValidationEntry::describe)
				.collect::<Vec<_>>()
				.join("; "),
			Detail::Other(value) => value.to_string(),
		}
	}
}

impl ValidationEntry {
	fn describe(&self) -> String {
		let loc = self
			.loc
			.iter()
			.map(|part| match part {
				Value::String(s) => s.clone(),
				other => other.to_string(),
			})
			.collect::<Vec<_>>()
			.join(".");
		if loc.is_empty() {
			self.msg.clone()
		} else {
			format!("{loc}: {}", self.msg)
		}
	}
}
