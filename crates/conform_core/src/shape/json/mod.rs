use serde_json::{Map, Number, Value as JsonValue};

use crate::shape::{ObjectValue, Value};

/// Largest magnitude at which every integer is exactly representable as `f64`.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

impl Value {
	/// Parse JSON text into a value, keeping object key order.
	pub fn from_json_str(text: &str) -> serde_json::Result<Self> {
		serde_json::from_str::<JsonValue>(text).map(Self::from)
	}

	/// Convert into a `serde_json` value.
	///
	/// Non-finite numbers become `null`; bytes become an array of integers.
	pub fn to_json(&self) -> JsonValue {
		JsonValue::from(self)
	}
}

impl From<JsonValue> for Value {
	fn from(value: JsonValue) -> Self {
		match value {
			JsonValue::Null => Self::Null,
			JsonValue::Bool(item) => Self::Bool(item),
			JsonValue::Number(item) => Self::Number(item.as_f64().unwrap_or(f64::NAN)),
			JsonValue::String(item) => Self::String(item.into_boxed_str()),
			JsonValue::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
			JsonValue::Object(map) => Self::Object(map.into_iter().map(|(name, item)| (name, Self::from(item))).collect::<ObjectValue>()),
		}
	}
}

impl From<&JsonValue> for Value {
	fn from(value: &JsonValue) -> Self {
		Self::from(value.clone())
	}
}

impl From<&Value> for JsonValue {
	fn from(value: &Value) -> Self {
		match value {
			Value::Null => Self::Null,
			Value::Bool(item) => Self::Bool(*item),
			Value::Number(item) => number_json(*item),
			Value::String(item) => Self::String(item.to_string()),
			Value::Array(items) => Self::Array(items.iter().map(Self::from).collect()),
			Value::Object(object) => {
				let mut map = Map::with_capacity(object.len());
				for (name, item) in object.iter() {
					map.insert(name.to_owned(), Self::from(item));
				}
				Self::Object(map)
			}
			Value::Bytes(bytes) => Self::Array(bytes.iter().map(|byte| Self::from(*byte)).collect()),
		}
	}
}

impl From<Value> for JsonValue {
	fn from(value: Value) -> Self {
		Self::from(&value)
	}
}

fn number_json(value: f64) -> JsonValue {
	if !value.is_finite() {
		return JsonValue::Null;
	}
	if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
		return JsonValue::Number(Number::from(value as i64));
	}
	Number::from_f64(value).map_or(JsonValue::Null, JsonValue::Number)
}
