use crate::shape::Value;

/// Render `value` in its canonical textual form.
///
/// Containers render as compact JSON text; byte payloads decode as lossy UTF-8.
pub fn to_text(value: &Value) -> String {
	match value {
		Value::Null => String::new(),
		Value::Bool(item) => item.to_string(),
		Value::Number(item) => number_text(*item),
		Value::String(item) => item.to_string(),
		Value::Array(_) | Value::Object(_) => value.to_json().to_string(),
		Value::Bytes(bytes) => String::from_utf8_lossy(bytes).into_owned(),
	}
}

/// Read `value` as a finite number.
///
/// Strings are trimmed and their longest leading decimal literal is parsed, so `"12.5kg"` reads as `12.5`.
/// Booleans map to `0`/`1` and null to `0`.
/// Containers, bytes, unparsable text, and non-finite results yield `None`.
pub fn to_number(value: &Value) -> Option<f64> {
	let parsed = match value {
		Value::Null => Some(0.0),
		Value::Bool(item) => Some(if *item { 1.0 } else { 0.0 }),
		Value::Number(item) => Some(*item),
		Value::String(item) => leading_decimal(item.trim()).and_then(|prefix| prefix.parse::<f64>().ok()),
		Value::Array(_) | Value::Object(_) | Value::Bytes(_) => None,
	};
	parsed.filter(|item| item.is_finite())
}

/// Truthiness: null, `false`, `0`, `NaN`, and `""` are false; everything else is true.
pub fn is_truthy(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(item) => *item,
		Value::Number(item) => *item != 0.0 && !item.is_nan(),
		Value::String(item) => !item.is_empty(),
		Value::Array(_) | Value::Object(_) | Value::Bytes(_) => true,
	}
}

fn number_text(value: f64) -> String {
	if value.is_nan() {
		return "NaN".to_owned();
	}
	if value.is_infinite() {
		return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
	}
	if value == 0.0 {
		return "0".to_owned();
	}

	let magnitude = value.abs();
	if !(1e-6..1e21).contains(&magnitude) {
		let text = format!("{value:e}");
		if let Some((mantissa, exponent)) = text.split_once('e')
			&& !exponent.starts_with('-')
		{
			return format!("{mantissa}e+{exponent}");
		}
		return text;
	}
	value.to_string()
}

/// Longest prefix of `text` shaped like `[+-]digits[.digits][e[+-]digits]`.
fn leading_decimal(text: &str) -> Option<&str> {
	let bytes = text.as_bytes();
	let digits_from = |start: usize| bytes[start..].iter().take_while(|byte| byte.is_ascii_digit()).count();

	let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
	let integral = digits_from(end);
	end += integral;

	let mut fractional = 0;
	if bytes.get(end) == Some(&b'.') {
		fractional = digits_from(end + 1);
		if integral > 0 || fractional > 0 {
			end += 1 + fractional;
		}
	}
	if integral == 0 && fractional == 0 {
		return None;
	}

	if matches!(bytes.get(end), Some(b'e' | b'E')) {
		let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
		let exponent = digits_from(end + 1 + sign);
		if exponent > 0 {
			end += 1 + sign + exponent;
		}
	}

	Some(&text[..end])
}

#[cfg(test)]
mod tests;
