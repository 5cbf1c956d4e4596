use crate::shape::{ObjectValue, Value, is_truthy, to_number, to_text};

#[test]
fn text_of_scalars() {
	assert_eq!(to_text(&Value::Null), "");
	assert_eq!(to_text(&Value::from(true)), "true");
	assert_eq!(to_text(&Value::from(8.0)), "8");
	assert_eq!(to_text(&Value::from(-0.0)), "0");
	assert_eq!(to_text(&Value::from(2.5)), "2.5");
	assert_eq!(to_text(&Value::from(f64::NAN)), "NaN");
	assert_eq!(to_text(&Value::from(f64::NEG_INFINITY)), "-Infinity");
	assert_eq!(to_text(&Value::from("  kept  ")), "  kept  ");
}

#[test]
fn text_of_extreme_numbers_uses_exponent_form() {
	assert_eq!(to_text(&Value::from(1e21)), "1e+21");
	assert_eq!(to_text(&Value::from(-2.5e30)), "-2.5e+30");
	assert_eq!(to_text(&Value::from(1e-7)), "1e-7");
	assert_eq!(to_text(&Value::from(1e20)), "100000000000000000000");
	assert_eq!(to_text(&Value::from(0.000001)), "0.000001");
}

#[test]
fn text_of_containers_is_compact_json() {
	let object: ObjectValue = [("b", Value::from(1_i64)), ("a", Value::from("x"))].into_iter().collect();
	assert_eq!(to_text(&Value::Object(object)), r#"{"b":1,"a":"x"}"#);
	assert_eq!(to_text(&Value::Array(vec![Value::Null, Value::from(true)])), "[null,true]");
}

#[test]
fn text_of_bytes_is_lossy_utf8() {
	assert_eq!(to_text(&Value::Bytes(b"abc".to_vec())), "abc");
	assert_eq!(to_text(&Value::Bytes(vec![0x61, 0xff])), "a\u{fffd}");
}

#[test]
fn number_parses_trimmed_decimal_text() {
	assert_eq!(to_number(&Value::from("5")), Some(5.0));
	assert_eq!(to_number(&Value::from("  -2.5 ")), Some(-2.5));
	assert_eq!(to_number(&Value::from("1e3")), Some(1000.0));
	assert_eq!(to_number(&Value::from("")), None);
	assert_eq!(to_number(&Value::from("apples 5")), None);
}

#[test]
fn number_reads_leading_decimal_prefix() {
	assert_eq!(to_number(&Value::from("5 apples")), Some(5.0));
	assert_eq!(to_number(&Value::from("3px")), Some(3.0));
	assert_eq!(to_number(&Value::from("12.5kg")), Some(12.5));
	assert_eq!(to_number(&Value::from(".5.")), Some(0.5));
	assert_eq!(to_number(&Value::from("7.")), Some(7.0));
	assert_eq!(to_number(&Value::from("-2e3x")), Some(-2000.0));
	assert_eq!(to_number(&Value::from("4e")), Some(4.0));
	assert_eq!(to_number(&Value::from("4e+")), Some(4.0));
	assert_eq!(to_number(&Value::from("-.x")), None);
	assert_eq!(to_number(&Value::from("+")), None);
}

#[test]
fn number_rejects_non_finite_results() {
	assert_eq!(to_number(&Value::from("inf")), None);
	assert_eq!(to_number(&Value::from("NaN")), None);
	assert_eq!(to_number(&Value::from(f64::INFINITY)), None);
	assert_eq!(to_number(&Value::from("1e400")), None);
}

#[test]
fn number_of_bool_null_and_containers() {
	assert_eq!(to_number(&Value::from(true)), Some(1.0));
	assert_eq!(to_number(&Value::from(false)), Some(0.0));
	assert_eq!(to_number(&Value::Null), Some(0.0));
	assert_eq!(to_number(&Value::Array(Vec::new())), None);
	assert_eq!(to_number(&Value::Object(ObjectValue::new())), None);
}

#[test]
fn truthiness_follows_falsy_set() {
	for falsy in [Value::Null, Value::from(false), Value::from(0.0), Value::from(f64::NAN), Value::from("")] {
		assert!(!is_truthy(&falsy), "{falsy:?} should be falsy");
	}
	for truthy in [
		Value::from(true),
		Value::from(-1.0),
		Value::from("0"),
		Value::Array(Vec::new()),
		Value::Object(ObjectValue::new()),
		Value::Bytes(Vec::new()),
	] {
		assert!(is_truthy(&truthy), "{truthy:?} should be truthy");
	}
}
