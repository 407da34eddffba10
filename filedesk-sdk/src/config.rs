use std::{borrow::Cow, fmt::Debug};

use serde::{Serialize, de::DeserializeOwned};

use crate::{api, client::Client, error::Error};

pub use filedesk_types::api::config::SaveResponse;

impl Client {
	/// `GET /config`. Without a `path` no query parameter is sent and the
	/// backend reads its default config file.
	pub async fn load_config<T>(&self, path: Option<&str>) -> Result<T, Error>
	where
		T: DeserializeOwned + Debug,
	{
		api::config::get(&self.http_client, path).await
	}

	/// `POST /config` with `{config, path}`, `path` is sent as `null` when absent.
	pub async fn save_config<C, T>(&self, config: &C, path: Option<&str>) -> Result<T, Error>
	where
		C: Serialize,
		T: DeserializeOwned + Debug,
	{
		api::config::post(
			&self.http_client,
			&api::config::SaveRequest {
				config,
				path: path.map(Cow::Borrowed),
			},
		)
		.await
	}
}
