use std::fmt::Debug;

pub use filedesk_types::api::config::{ENDPOINT, PATH, SaveRequest};
use serde::{Serialize, de::DeserializeOwned};

use crate::{error::Error, http::HttpClient, http::RequestConfig};

pub(crate) async fn get<Res>(client: &HttpClient, path: Option<&str>) -> Result<Res, Error>
where
	Res: DeserializeOwned + Debug,
{
	// an empty path means the default config, same as no path
	let config = match path.filter(|p| !p.is_empty()) {
		Some(path) => RequestConfig::get().param(PATH, path),
		None => RequestConfig::get(),
	};
	client.call(ENDPOINT.into(), config).await
}

pub(crate) async fn post<C, Res>(client: &HttpClient, request: &SaveRequest<'_, C>) -> Result<Res, Error>
where
	C: Serialize,
	Res: DeserializeOwned + Debug,
{
	client
		.call(ENDPOINT.into(), RequestConfig::post(request))
		.await
}
