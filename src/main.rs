//! httpsentry
//!
//! Terminal-resident HTTP traffic monitor with adaptive baseline alerting.
//!



//		Global configuration

//	Customisations of the standard linting configuration
#![allow(unreachable_pub,                 reason = "Not useful in a binary crate")]
#![allow(clippy::doc_markdown,            reason = "Too many false positives")]
#![allow(clippy::expect_used,             reason = "Acceptable in a binary crate")]
#![allow(clippy::multiple_crate_versions, reason = "Cannot resolve all these")]
#![allow(clippy::unwrap_used,             reason = "Somewhat acceptable in a binary crate")]



//		Packages

use clap::Parser as _;
use httpsentry::{
	capture::SyntheticCaptureSource,
	clock::SystemClock,
	config::{Cli, Config},
	core::{load_config, setup_logging},
	monitor::Monitor,
};
use std::{process::ExitCode, sync::Arc};
use tracing::{error, info};



//		Functions

//		main
#[tokio::main]
async fn main() -> ExitCode {
	let cli = Cli::parse();

	let config = match load_config::<Config>(&cli.config) {
		Ok(config) => config.apply_cli(&cli),
		Err(error) => {
			eprintln!("Error loading config: {error}");
			return ExitCode::FAILURE;
		},
	};

	let _guard = setup_logging(&config.logdir);
	info!("starting on interface {} port {}", config.interface, config.port);

	// No real libpcap-equivalent binding exists anywhere in this crate's
	// reference corpus (see `capture` module docs), so the runnable default
	// is a synthetic traffic generator standing in for a live capture on
	// `config.interface`/`config.port`.
	let capture = SyntheticCaptureSource::new(vec![config.interface.clone()], 5);

	let monitor = Monitor::new(config, Arc::new(SystemClock));

	match monitor.run(capture).await {
		Ok(())     => ExitCode::SUCCESS,
		Err(error) => {
			error!("capture worker exited with an error: {error}");
			ExitCode::from(2)
		},
	}
}
