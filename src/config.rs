#![allow(clippy::exhaustive_structs, reason = "Configuration structs")]

//! Configuration for the application.



//		Packages

use clap::Parser;
use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;



//		Structs

//		Config
/// The tunables that govern the monitor's timing, thresholds, and retention.
///
/// Loaded via a layered merge of built-in defaults, an optional `Config.toml`,
/// and environment variables, with CLI flags (see [`Cli`]) applied as the
/// final, highest-priority overlay.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize, SmartDefault)]
pub struct Config {
	//		Public properties
	/// The interface to capture on.
	#[default = "eth0"]
	pub interface:                  String,

	/// The TCP port to filter captured traffic on.
	#[default = 80]
	pub port:                       u16,

	/// The directory to store log files in.
	#[default = "log"]
	pub logdir:                     String,

	/// How often the periodic loop wakes up, in seconds.
	#[default = 1]
	pub timeout:                    u64,

	/// How often the dashboard is redrawn, in seconds.
	#[default = 10]
	pub dashboard_bucket_size:      u64,

	/// The width of the evaluation window used to compare against the
	/// baseline, in seconds.
	#[default = 120]
	pub average_bucket_size:        u64,

	/// The percentage over baseline that triggers an alert.
	#[default = 10]
	pub average_threshold:          f64,

	/// The duration of the initial baseline-learning phase, in seconds.
	#[default = 120]
	pub average_learning_duration:  u64,

	/// The maximum length, in bytes, that any captured string field is
	/// truncated to.
	#[default = 1024]
	pub max_str_length:             usize,

	/// The number of top-ranked entries displayed per aggregator.
	#[default = 10]
	pub max_top_hits:               usize,

	/// The retention cutoff, in seconds, after which aged aggregator entries
	/// and alert history records are pruned.
	#[default = 86_400]
	pub max_retention_length:       u64,
}

//		Cli
/// Command-line arguments, following the shape of the original exercise's
/// `argparse` definition.
#[derive(Debug, Parser)]
#[command(about = "Monitors HTTP traffic, prints information, and reports alerts.")]
pub struct Cli {
	//		Public properties
	/// Which interface to sniff on.
	#[arg(short, long)]
	pub interface: Option<String>,

	/// Which port to sniff HTTP traffic on.
	#[arg(short, long)]
	pub port:      Option<u16>,

	/// Path to an optional configuration file overlay.
	#[arg(long, default_value = "Config.toml")]
	pub config:    String,
}

//󰭅		Config
impl Config {
	//		apply_cli
	/// Applies CLI overrides on top of the file/environment-derived config.
	///
	/// # Parameters
	///
	/// * `cli` - The parsed command-line arguments.
	///
	pub fn apply_cli(mut self, cli: &Cli) -> Self {
		if let Some(ref interface) = cli.interface {
			self.interface = interface.clone();
		}
		if let Some(port) = cli.port {
			self.port = port;
		}
		self
	}
}
