use dsv_codec::{dsv, Number, RecordMap, Value};

#[test]
fn test_dsv_macro_null() {
    let value = dsv!(null);
    assert_eq!(value, Value::Null);
}

#[test]
fn test_dsv_macro_booleans() {
    let true_val = dsv!(true);
    assert_eq!(true_val, Value::Bool(true));

    let false_val = dsv!(false);
    assert_eq!(false_val, Value::Bool(false));
}

#[test]
fn test_dsv_macro_numbers() {
    let int_val = dsv!(42);
    assert_eq!(int_val, Value::Number(Number::Integer(42)));

    let float_val = dsv!(3.5);
    assert_eq!(float_val, Value::Number(Number::Float(3.5)));

    let negative_val = dsv!(-123);
    assert_eq!(negative_val, Value::Number(Number::Integer(-123)));
}

#[test]
fn test_dsv_macro_strings() {
    let string_val = dsv!("hello world");
    assert_eq!(string_val, Value::String("hello world".to_string()));

    let empty_string = dsv!("");
    assert_eq!(empty_string, Value::String("".to_string()));
}

#[test]
fn test_dsv_macro_arrays() {
    let empty = dsv!([]);
    assert_eq!(empty, Value::Array(vec![]));

    let mixed = dsv!(["a", 1, null, true]);
    assert_eq!(
        mixed,
        Value::Array(vec![
            Value::String("a".to_string()),
            Value::Number(Number::Integer(1)),
            Value::Null,
            Value::Bool(true),
        ])
    );
}

#[test]
fn test_dsv_macro_objects() {
    let empty = dsv!({});
    assert_eq!(empty, Value::Object(RecordMap::new()));

    let record = dsv!({
        "name": "Alice",
        "age": 30,
        "active": true
    });

    let map = record.as_object().expect("object");
    assert_eq!(map.len(), 3);
    assert_eq!(map.get("name"), Some(&Value::String("Alice".to_string())));
    assert_eq!(map.get("age"), Some(&Value::Number(Number::Integer(30))));
    assert_eq!(map.get("active"), Some(&Value::Bool(true)));
}

#[test]
fn test_dsv_macro_preserves_key_order() {
    let record = dsv!({
        "z": 1,
        "a": 2,
        "m": 3
    });

    let map = record.as_object().expect("object");
    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    assert_eq!(keys, ["z", "a", "m"]);
}

#[test]
fn test_dsv_macro_nested_structures() {
    let value = dsv!({
        "user": {
            "name": "Bob",
            "tags": ["admin", "ops"]
        },
        "counts": [1, [2, 3]]
    });

    let map = value.as_object().expect("object");
    let user = map.get("user").and_then(Value::as_object).expect("object");
    assert_eq!(user.get("name"), Some(&Value::String("Bob".to_string())));

    let counts = map.get("counts").and_then(Value::as_array).expect("array");
    assert!(counts[1].is_array());
}

#[test]
fn test_dsv_macro_trailing_commas() {
    let array = dsv!([1, 2,]);
    assert_eq!(array.as_array().map(Vec::len), Some(2));

    let object = dsv!({"a": 1,});
    assert_eq!(object.as_object().map(RecordMap::len), Some(1));
}
