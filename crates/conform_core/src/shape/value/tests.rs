use crate::shape::{ObjectValue, Shape, Value};

#[test]
fn shape_of_maps_none_to_absent() {
	assert_eq!(Shape::of(None), Shape::Absent);
	assert_eq!(Shape::of(Some(&Value::Null)), Shape::Null);
	assert_eq!(Shape::of(Some(&Value::Bytes(vec![1, 2]))), Shape::Bytes);
}

#[test]
fn shape_labels_are_stable() {
	assert_eq!(Value::from(true).shape().as_str(), "boolean");
	assert_eq!(Value::from(1.5).shape().as_str(), "number");
	assert_eq!(Value::from("x").shape().to_string(), "string");
	assert_eq!(Value::Array(Vec::new()).shape().to_string(), "array");
	assert_eq!(Value::Object(ObjectValue::new()).shape().to_string(), "object");
}

#[test]
fn insert_replaces_existing_field_in_place() {
	let mut object = ObjectValue::new();
	object.insert("a", Value::from(1_i64));
	object.insert("b", Value::from(2_i64));
	object.insert("a", Value::from("one"));

	let names: Vec<&str> = object.iter().map(|(name, _)| name).collect();
	assert_eq!(names, ["a", "b"]);
	assert_eq!(object.get("a"), Some(&Value::from("one")));
	assert_eq!(object.len(), 2);
}

#[test]
fn from_iterator_keeps_first_seen_order() {
	let object: ObjectValue = [("z", Value::Null), ("a", Value::from(false))].into_iter().collect();
	let names: Vec<&str> = object.iter().map(|(name, _)| name).collect();
	assert_eq!(names, ["z", "a"]);
}

#[test]
fn get_on_non_object_is_none() {
	assert!(Value::from("text").get("len").is_none());
	assert!(Value::Null.get("a").is_none());
}

#[test]
fn scalar_accessors_match_variant() {
	assert!(Value::Null.is_null());
	assert!(!Value::from(false).is_null());
	assert_eq!(Value::from("text").as_str(), Some("text"));
	assert_eq!(Value::from(1.0).as_str(), None);
	assert_eq!(Value::from(2_i64).as_f64(), Some(2.0));
	assert_eq!(Value::from("2").as_f64(), None);
}

#[test]
fn vec_converts_into_array() {
	let value = Value::from(vec![Value::Null, Value::from(true)]);
	assert_eq!(value.shape(), Shape::Array);
	assert_eq!(value.as_array().map(<[Value]>::len), Some(2));
}
