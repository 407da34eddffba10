use std::{borrow::Cow, fmt::Debug};

use serde::{Serialize, de::DeserializeOwned};

use crate::{
	Error,
	http::{ClientConfig, HttpClient, RequestConfig},
};

/// Handle to one backend. Cheap to clone, clones share the connection pool.
#[derive(Clone, Debug)]
pub struct Client {
	pub(crate) http_client: HttpClient,
}

impl Client {
	/// A client for the default origin, `http://localhost:8000`.
	pub fn new() -> Result<Self, Error> {
		Self::from_config(ClientConfig::default())
	}

	pub fn from_config(config: ClientConfig) -> Result<Self, Error> {
		Ok(Self {
			http_client: HttpClient::new(config)?,
		})
	}

	pub fn origin(&self) -> &str {
		self.http_client.origin()
	}

	/// Sends one request to `endpoint` and decodes the JSON response.
	///
	/// Query parameters from `config` are only attached to GET requests and
	/// the body is only serialized for POST requests. A failing status
	/// resolves to [`Error::Api`] with the response text as its message, a
	/// malformed success body to [`Error::Decode`]. Nothing is retried.
	///
	/// ```no_run
	/// # async fn example() -> Result<(), filedesk_sdk::Error> {
	/// use filedesk_sdk::{Client, RequestConfig};
	///
	/// let client = Client::new()?;
	/// let files: serde_json::Value = client
	/// 	.call("/files", RequestConfig::get().param("dir_path", "/tmp"))
	/// 	.await?;
	/// # Ok(())
	/// # }
	/// ```
	pub async fn call<B, Res>(&self, endpoint: &str, config: RequestConfig<'_, B>) -> Result<Res, Error>
	where
		B: Serialize + ?Sized,
		Res: DeserializeOwned + Debug,
	{
		self.http_client
			.call(Cow::Owned(endpoint.to_owned()), config)
			.await
	}
}
