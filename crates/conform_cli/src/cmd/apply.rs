use std::path::PathBuf;

use conform::shape::{ConvertOptions, conform_with};
use tracing::debug;

use crate::cmd::OutputMode;
use crate::cmd::util::{emit, read_value};
use crate::error::Result;

/// Coerce the document at `input` (absent when `None`) into the template at `template` and print it.
pub fn run(template: PathBuf, input: Option<PathBuf>, legacy: bool, no_trim: bool, mode: OutputMode) -> Result<()> {
	let template = read_value(&template)?;
	let input = input.as_deref().map(read_value).transpose()?;

	let mut options = if legacy { ConvertOptions::legacy() } else { ConvertOptions::default() };
	if no_trim {
		options.trim_strings = false;
	}
	debug!(?options, input_present = input.is_some(), "applying template");

	let value = conform_with(&template, input.as_ref(), &options)?;
	emit(&value, mode)
}
