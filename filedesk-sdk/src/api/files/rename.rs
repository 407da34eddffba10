use std::fmt::Debug;

pub use filedesk_types::api::files::rename::{ENDPOINT, Request};
use serde::de::DeserializeOwned;

use crate::{error::Error, http::HttpClient, http::RequestConfig};

pub(crate) async fn post<Res>(client: &HttpClient, request: &Request<'_>) -> Result<Res, Error>
where
	Res: DeserializeOwned + Debug,
{
	client
		.call(ENDPOINT.into(), RequestConfig::post(request))
		.await
}
