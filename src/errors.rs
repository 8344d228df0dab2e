//! Top-level error types used across the application.



//		Packages

use figment::Error as FigmentError;
use thiserror::Error as ThisError;



//		Enums

//		AppError
/// Represents the startup-level errors that can occur before the monitor's
/// two workers are running.
#[derive(Debug, ThisError)]
#[non_exhaustive]
pub enum AppError {
	/// Error when loading config.
	#[error("Configuration error: {0}")]
	ConfigError(#[from] FigmentError),

	/// The capture interface could not be opened, either because it does not
	/// exist or because permission was denied.
	#[error("Capture unavailable on interface {interface}: {reason}")]
	CaptureUnavailable {
		/// The interface that could not be opened.
		interface: String,
		/// The underlying reason reported by the capture source.
		reason:    String,
	},
}
