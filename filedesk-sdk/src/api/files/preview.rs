use std::fmt::Debug;

pub use filedesk_types::api::files::preview::{ENDPOINT, FILE_PATH};
use serde::de::DeserializeOwned;

use crate::{error::Error, http::HttpClient, http::RequestConfig};

pub(crate) async fn get<Res>(client: &HttpClient, file_path: &str) -> Result<Res, Error>
where
	Res: DeserializeOwned + Debug,
{
	client
		.call(
			ENDPOINT.into(),
			RequestConfig::get().param(FILE_PATH, file_path),
		)
		.await
}
