//! Core bootstrap functionality for the application.



//		Packages

use crate::errors::AppError;
use figment::{
	Figment,
	providers::{Env, Format as _, Serialized, Toml},
};
use serde::{Serialize, de::DeserializeOwned};
use std::io::stdout;
use tracing::Level;
use tracing_appender::{self, non_blocking, non_blocking::WorkerGuard, rolling::daily};
use tracing_subscriber::{
	EnvFilter,
	fmt::{layer, writer::MakeWriterExt as _},
	layer::SubscriberExt as _,
	registry,
	util::SubscriberInitExt as _,
};



//		Functions

//		load_config
/// Loads the application configuration.
///
/// This function loads the configuration from built-in defaults, an optional
/// `<config_path>` file, and the environment, in that order of increasing
/// priority.
///
/// # Parameters
///
/// * `config_path` - The path to the optional TOML overlay file.
///
/// # Errors
///
/// If there is a problem loading the configuration, or if the configuration is
/// invalid, an error will be returned.
///
pub fn load_config<T>(config_path: &str) -> Result<T, AppError>
where
	T: Default + DeserializeOwned + Serialize,
{
	Ok(Figment::from(Serialized::defaults(T::default()))
		.merge(Toml::file(config_path))
		.merge(Env::raw())
		.extract()?)
}

//		setup_logging
/// Sets up logging for the application.
///
/// This function sets up logging to the terminal and to a rolling file in the
/// specified directory. Terminal output is kept separate from the dashboard's
/// own stdout frames by routing logs through `tracing`, and the dashboard
/// writes its frames directly.
///
/// # Parameters
///
/// * `logdir` - The directory to write the log files to.
///
pub fn setup_logging<S: AsRef<str>>(logdir: S) -> WorkerGuard {
	let (non_blocking_appender, guard) = non_blocking(
		daily(logdir.as_ref(), "httpsentry.log")
	);
	registry()
		.with(
			EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| format!("{}=debug", env!("CARGO_PKG_NAME")).into()),
		)
		.with(
			layer()
				.with_writer(stdout.with_max_level(Level::WARN))
		)
		.with(
			layer()
				.with_writer(non_blocking_appender.with_max_level(Level::INFO))
		)
		.init()
	;
	guard
}
