use anyhow::{Context, Result};
use log::debug;

pub(crate) struct UI {
	/// Whether to output machine-readable JSON where applicable
	pub(crate) json: bool,
}

impl UI {
	pub(crate) fn new(json: bool) -> Self {
		UI { json }
	}

	pub(crate) fn print(&self, msg: &str) {
		println!("{}", msg);
	}

	/// Print a message with a success icon
	pub(crate) fn print_success(&self, msg: &str) {
		self.print(&format!("✔ {}", msg));
	}

	pub(crate) fn print_json(&self, value: &serde_json::Value) -> Result<()> {
		self.print(&serde_json::to_string_pretty(value).context("Failed to serialize JSON")?);
		Ok(())
	}

	/// Print a table of key-value pairs
	pub(crate) fn print_key_value_table(&self, table: &[(&str, &str)]) {
		let key_width = table.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
		for (key, value) in table {
			self.print(&format!("{:>key_width$} {}", key, value));
		}
	}

	/// Print an error to stderr.
	/// Backend failures carrying a `detail` body are shortened to that detail.
	pub(crate) fn print_failure(&self, err: &anyhow::Error) {
		debug!("{:#}", err);
		let detail = err
			.downcast_ref::<filedesk_sdk::Error>()
			.and_then(|e| e.detail());
		match detail {
			Some(detail) => eprintln!("✘ {}", detail),
			None => eprintln!("✘ {:#}", err),
		}
	}
}

pub(crate) fn format_size(size: u64) -> String {
	humansize::format_size(size, humansize::BINARY)
}
