use std::fmt::Write;

use conform::shape::{Value, to_text};

/// Output truncation and formatting limits for tree rendering.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of fields printed for a single object.
	pub max_fields_per_object: usize,
	/// Maximum number of Unicode scalar values printed for strings.
	pub max_string_len: usize,
	/// Maximum number of elements printed for arrays.
	pub max_array_items: usize,
	/// Maximum recursive print depth for nested arrays/objects.
	pub max_print_depth: u32,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_fields_per_object: 80,
			max_string_len: 200,
			max_array_items: 16,
			max_print_depth: 6,
		}
	}
}

/// Render one value tree, one node per line.
pub fn render_tree(value: &Value, options: PrintOptions) -> String {
	let mut out = String::new();
	write_value(&mut out, value, 0, 0, options);
	out
}

fn write_value(out: &mut String, value: &Value, indent: usize, depth: u32, options: PrintOptions) {
	let pad = " ".repeat(indent);
	match value {
		Value::Null => line(out, format_args!("{pad}null")),
		Value::Bool(v) => line(out, format_args!("{pad}{v}")),
		Value::Number(_) => line(out, format_args!("{pad}{}", to_text(value))),
		Value::Bytes(v) => line(out, format_args!("{pad}bytes[{}]", v.len())),
		Value::String(v) => line(out, format_args!("{pad}\"{}\"", truncate(v, options.max_string_len))),
		Value::Array(items) => {
			if depth >= options.max_print_depth {
				line(out, format_args!("{pad}[... {} items]", items.len()));
				return;
			}
			line(out, format_args!("{pad}["));
			for item in items.iter().take(options.max_array_items) {
				write_value(out, item, indent + 2, depth + 1, options);
			}
			if items.len() > options.max_array_items {
				line(out, format_args!("{pad}  ... {} more", items.len() - options.max_array_items));
			}
			line(out, format_args!("{pad}]"));
		}
		Value::Object(object) => {
			if depth >= options.max_print_depth {
				line(out, format_args!("{pad}{{ ... }}"));
				return;
			}
			line(out, format_args!("{pad}{{"));
			for (name, item) in object.iter().take(options.max_fields_per_object) {
				let _ = write!(out, "{pad}  {name} = ");
				if matches!(item, Value::Object(_) | Value::Array(_)) {
					out.push('\n');
					write_value(out, item, indent + 4, depth + 1, options);
				} else {
					write_value(out, item, 0, depth + 1, options);
				}
			}
			if object.len() > options.max_fields_per_object {
				line(out, format_args!("{pad}  ... {} more fields", object.len() - options.max_fields_per_object));
			}
			line(out, format_args!("{pad}}}"));
		}
	}
}

fn line(out: &mut String, args: std::fmt::Arguments<'_>) {
	let _ = out.write_fmt(args);
	out.push('\n');
}

fn truncate(input: &str, max_len: usize) -> String {
	if input.chars().count() <= max_len {
		return input.to_owned();
	}
	let out: String = input.chars().take(max_len).collect();
	format!("{out}...")
}
