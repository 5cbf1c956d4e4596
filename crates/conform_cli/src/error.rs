use std::path::PathBuf;

use conform::shape::ConformError;
use thiserror::Error;

/// CLI result type.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
	/// Reading a file or stdin failed.
	#[error("io: {}: {source}", .path.display())]
	Io {
		/// Path being read; `-` for stdin.
		path: PathBuf,
		/// Underlying IO failure.
		#[source]
		source: std::io::Error,
	},
	/// Document is not valid JSON.
	#[error("invalid json in {}: {source}", .path.display())]
	Json {
		/// Path being parsed; `-` for stdin.
		path: PathBuf,
		/// Underlying parse failure.
		#[source]
		source: serde_json::Error,
	},
	/// Writing JSON output failed.
	#[error("failed to render json: {0}")]
	Render(#[source] serde_json::Error),
	/// Template could not be applied.
	#[error(transparent)]
	Conform(#[from] ConformError),
}
