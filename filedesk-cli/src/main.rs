use std::{process::ExitCode, time::Duration};

use anyhow::{Context, Result};
use clap::Parser;
use filedesk_sdk::{Client, ClientConfig, consts::DEFAULT_ORIGIN};

use crate::commands::{Commands, execute_command};

mod commands;
mod ui;

#[derive(Debug, Parser)]
#[clap(name = "filedesk", version, about = "Browse and manage files through a filedesk backend")]
pub(crate) struct Cli {
	/// Backend origin (scheme, host and port)
	#[arg(long, env = "FILEDESK_ORIGIN", default_value = DEFAULT_ORIGIN)]
	origin: String,

	/// Request timeout in seconds (default: wait indefinitely)
	#[arg(long)]
	timeout: Option<u64>,

	/// Increase log verbosity (-v info, -vv debug, -vvv trace)
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbose: u8,

	/// Print raw JSON responses
	#[arg(long, global = true)]
	json: bool,

	#[command(subcommand)]
	command: Commands,
}

impl Cli {
	fn log_level(&self) -> log::LevelFilter {
		match self.verbose {
			0 => log::LevelFilter::Error,
			1 => log::LevelFilter::Info,
			2 => log::LevelFilter::Debug,
			_ => log::LevelFilter::Trace,
		}
	}

	fn client(&self) -> Result<Client> {
		let config = ClientConfig::default()
			.with_origin(self.origin.clone())
			.with_timeout(self.timeout.map(Duration::from_secs))
			.with_log_level(self.log_level());
		Client::from_config(config).context("Failed to create client")
	}
}

#[tokio::main]
async fn main() -> ExitCode {
	let cli = Cli::parse();
	env_logger::Builder::from_env(
		env_logger::Env::default().default_filter_or(cli.log_level().as_str()),
	)
	.init();

	let ui = ui::UI::new(cli.json);
	let result = match cli.client() {
		Ok(client) => execute_command(&ui, &client, cli.command).await,
		Err(e) => Err(e),
	};
	match result {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			ui.print_failure(&e);
			ExitCode::FAILURE
		}
	}
}
