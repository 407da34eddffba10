use base64::{Engine, prelude::BASE64_STANDARD};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ENDPOINT: &str = "/files/preview";

/// Query parameter naming the file to preview.
pub const FILE_PATH: &str = "file_path";

/// Images and text files are inlined as a data URL, everything else only
/// reports its name.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Response {
	Image { preview_data: String },
	Text { preview_data: String },
	Other { name: String },
}

impl Response {
	pub fn preview_data(&self) -> Option<&str> {
		match self {
			Self::Image { preview_data } | Self::Text { preview_data } => Some(preview_data),
			Self::Other { .. } => None,
		}
	}

	pub fn data_url(&self) -> Option<Result<DataUrl<'_>, DataUrlError>> {
		self.preview_data().map(DataUrl::parse)
	}
}

#[derive(Debug, Error)]
pub enum DataUrlError {
	#[error("missing `data:` scheme")]
	MissingScheme,
	#[error("missing `;base64,` marker")]
	NotBase64,
	#[error("invalid base64 payload: `{0}`")]
	Base64(#[from] base64::DecodeError),
}

/// A `data:<mime>;base64,<payload>` URL borrowed from a preview response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataUrl<'a> {
	pub mime_type: &'a str,
	pub payload: &'a str,
}

impl<'a> DataUrl<'a> {
	pub fn parse(url: &'a str) -> Result<Self, DataUrlError> {
		let rest = url.strip_prefix("data:").ok_or(DataUrlError::MissingScheme)?;
		let (mime_type, payload) = rest
			.split_once(";base64,")
			.ok_or(DataUrlError::NotBase64)?;
		Ok(Self { mime_type, payload })
	}

	pub fn decode(&self) -> Result<Vec<u8>, DataUrlError> {
		Ok(BASE64_STANDARD.decode(self.payload)?)
	}
}
