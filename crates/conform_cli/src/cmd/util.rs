use std::io::Read;
use std::path::Path;

use conform::shape::Value;

use crate::cmd::OutputMode;
use crate::cmd::print::{PrintOptions, render_tree};
use crate::error::{CliError, Result};

/// Read a JSON document from `path`, or from stdin when `path` is `-`.
pub(crate) fn read_value(path: &Path) -> Result<Value> {
	let text = read_text(path).map_err(|source| CliError::Io {
		path: path.to_owned(),
		source,
	})?;

	Value::from_json_str(&text).map_err(|source| CliError::Json {
		path: path.to_owned(),
		source,
	})
}

/// Write `value` to stdout in the requested format.
pub(crate) fn emit(value: &Value, mode: OutputMode) -> Result<()> {
	println!("{}", render(value, mode)?);
	Ok(())
}

/// Render `value` in the requested format without a trailing newline.
pub(crate) fn render(value: &Value, mode: OutputMode) -> Result<String> {
	match mode {
		OutputMode::Json => serde_json::to_string(&value.to_json()).map_err(CliError::Render),
		OutputMode::PrettyJson => serde_json::to_string_pretty(&value.to_json()).map_err(CliError::Render),
		OutputMode::Tree => Ok(render_tree(value, PrintOptions::default()).trim_end().to_owned()),
	}
}

fn read_text(path: &Path) -> std::io::Result<String> {
	if path == Path::new("-") {
		let mut text = String::new();
		std::io::stdin().read_to_string(&mut text)?;
		return Ok(text);
	}
	std::fs::read_to_string(path)
}
