use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Subcommand;
use filedesk_sdk::{
	Client,
	config::SaveResponse,
	fs::{FileCount, FileList, MoveResponse, Preview, RenameResponse},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::ui::{self, UI};

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
	/// List the files in a directory
	Ls {
		/// Directory to list files in
		directory: String,
	},
	/// Count the files in a directory
	Count {
		/// Directory to count files in
		directory: String,
	},
	/// Move a file into another directory
	Mv {
		/// File to move
		source: String,
		/// Directory to move the file into
		destination: String,
	},
	/// Rename a file in place
	Rename {
		/// File to rename
		file: String,
		/// New file name (without a directory)
		new_name: String,
	},
	/// Preview a file: print text files, save images with --output
	Preview {
		/// File to preview
		file: String,
		/// Write the decoded preview to this file instead of printing it
		#[arg(short, long)]
		output: Option<PathBuf>,
	},
	/// Load or save the backend's config file
	#[command(subcommand)]
	Config(ConfigCommands),
}

#[derive(Debug, Subcommand)]
pub(crate) enum ConfigCommands {
	/// Print the config
	Get {
		/// Config file to read (default: the backend's default config)
		#[arg(long)]
		path: Option<String>,
	},
	/// Save a config, given as inline JSON or as @file
	Set {
		/// JSON document, or @path to read it from a local file
		config: String,
		/// Config file to write (default: the backend's default config)
		#[arg(long)]
		path: Option<String>,
	},
}

pub(crate) async fn execute_command(ui: &UI, client: &Client, command: Commands) -> Result<()> {
	match command {
		Commands::Ls { directory } => {
			let response: Value = client.list_files(&directory).await?;
			if ui.json {
				return ui.print_json(&response);
			}
			let files: FileList = typed(response)?;
			for file in files {
				let size = ui::format_size(file.size);
				ui.print(&format!("{:>10}  {:<24}  {}", size, file.mime_type, file.name));
			}
		}
		Commands::Count { directory } => {
			let response: Value = client.count_files(&directory).await?;
			if ui.json {
				return ui.print_json(&response);
			}
			let count: FileCount = typed(response)?;
			ui.print(&count.count.to_string());
		}
		Commands::Mv {
			source,
			destination,
		} => {
			let response: Value = client.move_file(&source, &destination).await?;
			if ui.json {
				return ui.print_json(&response);
			}
			let moved: MoveResponse = typed(response)?;
			ui.print_success(&format!("Moved {} to {}", source, moved.new_path));
		}
		Commands::Rename { file, new_name } => {
			let response: Value = client.rename_file(&file, &new_name).await?;
			if ui.json {
				return ui.print_json(&response);
			}
			let renamed: RenameResponse = typed(response)?;
			ui.print_success(&format!("Renamed {} to {}", file, renamed.new_path));
		}
		Commands::Preview { file, output } => {
			let response: Value = client.preview_file(&file).await?;
			if ui.json && output.is_none() {
				return ui.print_json(&response);
			}
			preview(ui, typed(response)?, output).await?;
		}
		Commands::Config(ConfigCommands::Get { path }) => {
			let config: Value = client.load_config(path.as_deref()).await?;
			ui.print_json(&config)?;
		}
		Commands::Config(ConfigCommands::Set { config, path }) => {
			let config = read_config_arg(&config).await?;
			let response: Value = client.save_config(&config, path.as_deref()).await?;
			if ui.json {
				return ui.print_json(&response);
			}
			let saved: SaveResponse = typed(response)?;
			ui.print_success(&format!("Saved config to {}", saved.path));
		}
	}
	Ok(())
}

fn typed<T: DeserializeOwned>(value: Value) -> Result<T> {
	serde_json::from_value(value).context("Unexpected response from backend")
}

async fn preview(ui: &UI, preview: Preview, output: Option<PathBuf>) -> Result<()> {
	let data_url = match &preview {
		Preview::Other { name } => {
			ui.print_key_value_table(&[("Name", name.as_str()), ("Preview", "not available")]);
			return Ok(());
		}
		_ => match preview.data_url() {
			Some(url) => url.context("Invalid preview data")?,
			None => bail!("Preview has no data"),
		},
	};
	let data = data_url.decode().context("Invalid preview data")?;
	match (output, &preview) {
		(Some(output), _) => {
			tokio::fs::write(&output, &data)
				.await
				.with_context(|| format!("Failed to write {}", output.display()))?;
			ui.print_success(&format!(
				"Saved {} preview ({}) to {}",
				data_url.mime_type,
				ui::format_size(data.len() as u64),
				output.display()
			));
		}
		(None, Preview::Text { .. }) => {
			ui.print(&String::from_utf8_lossy(&data));
		}
		(None, _) => {
			ui.print_key_value_table(&[
				("Type", data_url.mime_type),
				("Size", ui::format_size(data.len() as u64).as_str()),
				("Preview", "use --output to save it"),
			]);
		}
	}
	Ok(())
}

/// `@path` reads the JSON from a local file, anything else is parsed inline.
async fn read_config_arg(arg: &str) -> Result<Value> {
	let text = match arg.strip_prefix('@') {
		Some(path) => tokio::fs::read_to_string(path)
			.await
			.with_context(|| format!("Failed to read {}", path))?,
		None => arg.to_string(),
	};
	serde_json::from_str(&text).context("Config is not valid JSON")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test]
	async fn inline_config_arg() {
		let config = read_config_arg(r#"{"theme":"dark"}"#).await.unwrap();
		assert_eq!(config, serde_json::json!({"theme": "dark"}));
	}

	#[tokio::test]
	async fn invalid_config_arg() {
		let e = read_config_arg("{nope").await.unwrap_err();
		assert_eq!(e.to_string(), "Config is not valid JSON");
	}
}
