use std::path::PathBuf;

use conform::shape::Value;
use serde::Serialize;

use crate::cmd::util::read_value;
use crate::error::{CliError, Result};

/// Shape summary of one JSON document.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ShapeReport {
	/// Shape label of the root value.
	pub root: &'static str,
	/// Item count when the root is an array.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub items: Option<usize>,
	/// Per-field shapes when the root is an object, in document order.
	pub fields: Vec<FieldShape>,
}

/// Shape label of one top-level field.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct FieldShape {
	/// Field name.
	pub name: String,
	/// Field shape label.
	pub shape: &'static str,
}

/// Print the shape of the document at `path`.
pub fn run(path: PathBuf, json: bool) -> Result<()> {
	let value = read_value(&path)?;
	let report = build_report(&value);

	if json {
		println!("{}", serde_json::to_string_pretty(&report).map_err(CliError::Render)?);
		return Ok(());
	}

	println!("root: {}", report.root);
	if let Some(items) = report.items {
		println!("items: {items}");
	}
	for field in &report.fields {
		println!("  {}: {}", field.name, field.shape);
	}
	Ok(())
}

/// Summarize the shape of `value` and its top-level fields.
pub fn build_report(value: &Value) -> ShapeReport {
	let fields = value
		.as_object()
		.map(|object| {
			object
				.iter()
				.map(|(name, item)| FieldShape {
					name: name.to_owned(),
					shape: item.shape().as_str(),
				})
				.collect()
		})
		.unwrap_or_default();

	ShapeReport {
		root: value.shape().as_str(),
		items: value.as_array().map(<[Value]>::len),
		fields,
	}
}
