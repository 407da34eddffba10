pub(crate) mod count;
pub(crate) mod r#move;
pub(crate) mod preview;
pub(crate) mod rename;

use std::fmt::Debug;

pub use filedesk_types::api::files::{DIR_PATH, ENDPOINT};
use serde::de::DeserializeOwned;

use crate::{error::Error, http::HttpClient, http::RequestConfig};

pub(crate) async fn get<Res>(client: &HttpClient, dir_path: &str) -> Result<Res, Error>
where
	Res: DeserializeOwned + Debug,
{
	client
		.call(
			ENDPOINT.into(),
			RequestConfig::get().param(DIR_PATH, dir_path),
		)
		.await
}
