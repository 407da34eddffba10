use filedesk_types::error::ErrorBody;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
	/// The backend answered with a failing status. `message` is the raw
	/// response text.
	#[error("{message}")]
	Api { status: StatusCode, message: String },
	/// The backend answered successfully but the body was not the expected JSON.
	#[error(transparent)]
	Decode(#[from] serde_json::Error),
	#[error("Failed to serialize request body: `{0}`")]
	Encode(#[source] serde_json::Error),
	#[error("Invalid URL `{url}`: {source}")]
	Url {
		url: String,
		#[source]
		source: url::ParseError,
	},
	#[error("Request Error: `{0}`")]
	Reqwest(#[from] reqwest::Error),
}

impl Error {
	pub fn status(&self) -> Option<StatusCode> {
		match self {
			Self::Api { status, .. } => Some(*status),
			Self::Reqwest(e) => e.status(),
			_ => None,
		}
	}

	/// The backend's `detail` message, if the error text is one of its JSON error bodies.
	pub fn detail(&self) -> Option<String> {
		match self {
			Self::Api { message, .. } => ErrorBody::parse(message).map(|body| body.message()),
			_ => None,
		}
	}

	pub fn is_not_found(&self) -> bool {
		self.status() == Some(StatusCode::NOT_FOUND)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn api_error_displays_raw_text() {
		let e = Error::Api {
			status: StatusCode::INTERNAL_SERVER_ERROR,
			message: "disk full".to_string(),
		};
		assert_eq!(e.to_string(), "disk full");
		assert_eq!(e.detail(), None);
		assert_eq!(e.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
	}

	#[test]
	fn api_error_detail() {
		let e = Error::Api {
			status: StatusCode::NOT_FOUND,
			message: r#"{"detail":"Config not found"}"#.to_string(),
		};
		assert_eq!(e.to_string(), r#"{"detail":"Config not found"}"#);
		assert_eq!(e.detail().as_deref(), Some("Config not found"));
		assert!(e.is_not_found());
	}

	#[test]
	fn decode_error_is_transparent() {
		let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
		let expected = source.to_string();
		let e = Error::from(source);
		assert_eq!(e.to_string(), expected);
	}
}
