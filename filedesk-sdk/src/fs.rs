use std::{borrow::Cow, fmt::Debug};

use serde::de::DeserializeOwned;

use crate::{api, client::Client, error::Error};

pub use filedesk_types::{
	api::files::{
		Response as FileList, count::Response as FileCount, r#move::Response as MoveResponse,
		preview::Response as Preview, rename::Response as RenameResponse,
	},
	fs::FileInfo,
};

/// File operations. Every method sends a single request and decodes the
/// response into `T`, pick the typed responses re-exported from this module
/// or `serde_json::Value` for the raw JSON.
impl Client {
	/// `GET /files?dir_path=...`, the regular files directly inside `dir_path`.
	pub async fn list_files<T>(&self, dir_path: &str) -> Result<T, Error>
	where
		T: DeserializeOwned + Debug,
	{
		api::files::get(&self.http_client, dir_path).await
	}

	/// `GET /files/count?dir_path=...`
	pub async fn count_files<T>(&self, dir_path: &str) -> Result<T, Error>
	where
		T: DeserializeOwned + Debug,
	{
		api::files::count::get(&self.http_client, dir_path).await
	}

	/// `POST /files/move`, moves `src_path` into the directory `dest_dir`.
	pub async fn move_file<T>(&self, src_path: &str, dest_dir: &str) -> Result<T, Error>
	where
		T: DeserializeOwned + Debug,
	{
		api::files::r#move::post(
			&self.http_client,
			&api::files::r#move::Request {
				src_path: Cow::Borrowed(src_path),
				dest_dir: Cow::Borrowed(dest_dir),
			},
		)
		.await
	}

	/// `POST /files/rename`, `new_name` is a bare file name.
	pub async fn rename_file<T>(&self, src_path: &str, new_name: &str) -> Result<T, Error>
	where
		T: DeserializeOwned + Debug,
	{
		api::files::rename::post(
			&self.http_client,
			&api::files::rename::Request {
				src_path: Cow::Borrowed(src_path),
				new_name: Cow::Borrowed(new_name),
			},
		)
		.await
	}

	pub async fn preview_file<T>(&self, file_path: &str) -> Result<T, Error>
	where
		T: DeserializeOwned + Debug,
	{
		api::files::preview::get(&self.http_client, file_path).await
	}
}
