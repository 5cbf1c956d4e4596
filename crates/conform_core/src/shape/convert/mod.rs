use tracing::{debug, trace};

use crate::shape::{ConformError, ConvertOptions, FieldValue, NumberFallback, ObjectValue, Result, Shape, Value, is_truthy, to_number, to_text};

/// Coerce `input` into the shape described by `template` using default options.
///
/// An absent template passes the input through verbatim, so an absent input yields an absent output.
pub fn convert(template: Option<&Value>, input: Option<&Value>) -> Result<Option<Value>> {
	convert_with(template, input, &ConvertOptions::default())
}

/// Coerce `input` into the shape described by `template`.
pub fn convert_with(template: Option<&Value>, input: Option<&Value>, options: &ConvertOptions) -> Result<Option<Value>> {
	match template {
		None => Ok(input.cloned()),
		Some(template) => conform_with(template, input, options).map(Some),
	}
}

/// Coerce `input` into a present `template` using default options.
pub fn conform(template: &Value, input: Option<&Value>) -> Result<Value> {
	conform_with(template, input, &ConvertOptions::default())
}

/// Coerce `input` into a present `template`. A present template always produces a value.
pub fn conform_with(template: &Value, input: Option<&Value>, options: &ConvertOptions) -> Result<Value> {
	match template {
		Value::Null => Ok(Value::Null),
		Value::Array(items) => convert_array(items, input, options),
		Value::Object(fields) => convert_object(fields, input, options),
		Value::String(default) => Ok(convert_string(default, input, options)),
		Value::Number(default) => Ok(convert_number(*default, input, options)),
		Value::Bool(default) => Ok(convert_bool(*default, input)),
		Value::Bytes(_) => {
			let shape = template.shape();
			debug!(%shape, "rejecting template");
			Err(ConformError::UnsupportedTemplateType { shape })
		}
	}
}

/// Fully populated default value for `template`.
pub fn defaults(template: &Value) -> Result<Value> {
	conform(template, None)
}

/// Array templates are `[element, repeat_count?]`; further items are ignored.
fn convert_array(template: &[Value], input: Option<&Value>, options: &ConvertOptions) -> Result<Value> {
	let element = template.first();

	let out = match input {
		Some(Value::Array(items)) => items
			.iter()
			.map(|item| match element {
				Some(element) => conform_with(element, Some(item), options),
				None => Ok(item.clone()),
			})
			.collect::<Result<Vec<_>>>()?,
		Some(other) => {
			trace!(input = %other.shape(), "array template got non-array input, emitting empty array");
			Vec::new()
		}
		None => {
			let count = template.get(1).and_then(repeat_count).unwrap_or(0);
			match element {
				Some(element) => (0..count).map(|_| conform_with(element, None, options)).collect::<Result<Vec<_>>>()?,
				None => Vec::new(),
			}
		}
	};

	Ok(Value::Array(out))
}

fn convert_object(template: &ObjectValue, input: Option<&Value>, options: &ConvertOptions) -> Result<Value> {
	let source = input.and_then(Value::as_object);
	if source.is_none() {
		trace!(input = %Shape::of(input), "object template got non-object input, defaulting every field");
	}

	let mut fields = Vec::with_capacity(template.len());
	for (name, sub_template) in template.iter() {
		let value = conform_with(sub_template, source.and_then(|item| item.get(name)), options)?;
		fields.push(FieldValue { name: name.into(), value });
	}

	Ok(Value::Object(ObjectValue { fields }))
}

fn convert_string(default: &str, input: Option<&Value>, options: &ConvertOptions) -> Value {
	let Some(input) = input else {
		return Value::from(default);
	};

	let text = to_text(input);
	if options.trim_strings {
		Value::from(text.trim())
	} else {
		Value::from(text)
	}
}

fn convert_number(default: f64, input: Option<&Value>, options: &ConvertOptions) -> Value {
	let Some(input) = input else {
		return Value::Number(default);
	};

	let number = to_number(input).unwrap_or_else(|| {
		trace!(input = %input.shape(), policy = ?options.number_fallback, "number coercion failed");
		match options.number_fallback {
			NumberFallback::TemplateDefault => default,
			NumberFallback::Truthiness if is_truthy(input) => 1.0,
			NumberFallback::Truthiness => 0.0,
		}
	});
	Value::Number(number)
}

fn convert_bool(default: bool, input: Option<&Value>) -> Value {
	Value::Bool(input.map_or(default, is_truthy))
}

/// Read an array template's repeat count.
///
/// Numbers truncate toward zero; strings use their leading decimal integer. Negative counts are zero.
/// Counts are not capped: absent input materializes every position, and oversized counts saturate to
/// `usize::MAX`, so callers accepting untrusted templates should bound the count themselves.
fn repeat_count(value: &Value) -> Option<usize> {
	match value {
		Value::Number(item) if item.is_finite() => Some(if *item <= 0.0 { 0 } else { item.trunc() as usize }),
		Value::String(item) => leading_integer(item),
		_ => None,
	}
}

fn leading_integer(text: &str) -> Option<usize> {
	let text = text.trim_start();
	let (negative, rest) = match text.as_bytes().first() {
		Some(b'-') => (true, &text[1..]),
		Some(b'+') => (false, &text[1..]),
		_ => (false, text),
	};

	let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
	if digits == 0 {
		return None;
	}
	if negative {
		return Some(0);
	}
	rest[..digits].parse::<usize>().ok()
}
