use std::fmt;

/// Runtime value shared by templates, inputs, and coerced outputs.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Explicit null marker.
	Null,
	/// Boolean scalar.
	Bool(bool),
	/// Numeric scalar.
	Number(f64),
	/// UTF-8 string.
	String(Box<str>),
	/// Ordered sequence.
	Array(Vec<Value>),
	/// Field mapping with declaration order preserved.
	Object(ObjectValue),
	/// Opaque byte payload; accepted as input but never as a template.
	Bytes(Vec<u8>),
}

impl Value {
	/// Classify this value's shape.
	pub fn shape(&self) -> Shape {
		match self {
			Self::Null => Shape::Null,
			Self::Bool(_) => Shape::Bool,
			Self::Number(_) => Shape::Number,
			Self::String(_) => Shape::String,
			Self::Array(_) => Shape::Array,
			Self::Object(_) => Shape::Object,
			Self::Bytes(_) => Shape::Bytes,
		}
	}

	/// Return `true` for [`Value::Null`].
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	/// Borrow the string payload, if any.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(item) => Some(item),
			_ => None,
		}
	}

	/// Read the numeric payload, if any.
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Self::Number(item) => Some(*item),
			_ => None,
		}
	}

	/// Borrow array items, if any.
	pub fn as_array(&self) -> Option<&[Value]> {
		match self {
			Self::Array(items) => Some(items),
			_ => None,
		}
	}

	/// Borrow the object payload, if any.
	pub fn as_object(&self) -> Option<&ObjectValue> {
		match self {
			Self::Object(item) => Some(item),
			_ => None,
		}
	}

	/// Look up an object field by name. Non-objects have no fields.
	pub fn get(&self, name: &str) -> Option<&Value> {
		self.as_object().and_then(|item| item.get(name))
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Self::Number(value)
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Self::Number(value as f64)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::String(value.into())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Self::String(value.into_boxed_str())
	}
}

impl From<Vec<Value>> for Value {
	fn from(value: Vec<Value>) -> Self {
		Self::Array(value)
	}
}

impl From<ObjectValue> for Value {
	fn from(value: ObjectValue) -> Self {
		Self::Object(value)
	}
}

/// Object value with field names preserved in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectValue {
	/// Fields in declaration order.
	pub fields: Vec<FieldValue>,
}

impl ObjectValue {
	/// Create an empty object.
	pub fn new() -> Self {
		Self::default()
	}

	/// Look up the first field named `name`.
	pub fn get(&self, name: &str) -> Option<&Value> {
		self.fields.iter().find(|field| &*field.name == name).map(|field| &field.value)
	}

	/// Set `name` to `value`, replacing an existing field in place or appending a new one.
	pub fn insert(&mut self, name: impl Into<Box<str>>, value: Value) {
		let name = name.into();
		match self.fields.iter_mut().find(|field| field.name == name) {
			Some(field) => field.value = value,
			None => self.fields.push(FieldValue { name, value }),
		}
	}

	/// Number of fields.
	pub fn len(&self) -> usize {
		self.fields.len()
	}

	/// Return `true` when the object has no fields.
	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	/// Iterate `(name, value)` pairs in declaration order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.fields.iter().map(|field| (&*field.name, &field.value))
	}
}

impl<K: Into<Box<str>>> FromIterator<(K, Value)> for ObjectValue {
	fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
		let mut out = Self::new();
		for (name, value) in iter {
			out.insert(name, value);
		}
		out
	}
}

/// Named object field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue {
	/// Field identifier.
	pub name: Box<str>,
	/// Field payload.
	pub value: Value,
}

/// Shape class of a possibly-absent value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
	/// No value provided.
	Absent,
	/// Explicit null.
	Null,
	/// Boolean scalar.
	Bool,
	/// Numeric scalar.
	Number,
	/// String scalar.
	String,
	/// Ordered sequence.
	Array,
	/// Field mapping.
	Object,
	/// Opaque bytes.
	Bytes,
}

impl Shape {
	/// Classify an optional value, mapping `None` to [`Shape::Absent`].
	pub fn of(value: Option<&Value>) -> Self {
		value.map_or(Self::Absent, Value::shape)
	}

	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Absent => "absent",
			Self::Null => "null",
			Self::Bool => "boolean",
			Self::Number => "number",
			Self::String => "string",
			Self::Array => "array",
			Self::Object => "object",
			Self::Bytes => "bytes",
		}
	}
}

impl fmt::Display for Shape {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests;
