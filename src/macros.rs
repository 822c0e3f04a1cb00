#[macro_export]
macro_rules! dsv {
    // Handle null
    (null) => {
        $crate::Value::Null
    };

    // Handle true
    (true) => {
        $crate::Value::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::Value::Bool(false)
    };

    // Handle empty array
    ([]) => {
        $crate::Value::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::dsv!($elem)),*])
    };

    // Handle empty object
    ({}) => {
        $crate::Value::Object($crate::RecordMap::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::RecordMap::new();
        $(
            object.insert($key.to_string(), $crate::dsv!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Fallback for any expression with a Value conversion
    ($other:expr) => {
        $crate::Value::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Number, RecordMap, Value};

    #[test]
    fn test_dsv_macro_primitives() {
        assert_eq!(dsv!(null), Value::Null);
        assert_eq!(dsv!(true), Value::Bool(true));
        assert_eq!(dsv!(false), Value::Bool(false));
        assert_eq!(dsv!(42), Value::Number(Number::Integer(42)));
        assert_eq!(dsv!(3.5), Value::Number(Number::Float(3.5)));
        assert_eq!(dsv!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_dsv_macro_arrays() {
        assert_eq!(dsv!([]), Value::Array(vec![]));

        let arr = dsv!([1, 2, 3]);
        match arr {
            Value::Array(vec) => {
                assert_eq!(vec.len(), 3);
                assert_eq!(vec[0], Value::Number(Number::Integer(1)));
                assert_eq!(vec[1], Value::Number(Number::Integer(2)));
                assert_eq!(vec[2], Value::Number(Number::Integer(3)));
            }
            _ => panic!("Expected array"),
        }
    }

    #[test]
    fn test_dsv_macro_objects() {
        assert_eq!(dsv!({}), Value::Object(RecordMap::new()));

        let obj = dsv!({
            "name": "Alice",
            "age": 30
        });

        match obj {
            Value::Object(map) => {
                assert_eq!(map.len(), 2);
                assert_eq!(map.get("name"), Some(&Value::String("Alice".to_string())));
                assert_eq!(map.get("age"), Some(&Value::Number(Number::Integer(30))));
            }
            _ => panic!("Expected object"),
        }
    }

    #[test]
    fn test_dsv_macro_nesting() {
        let value = dsv!({
            "tags": ["a", "b"],
            "meta": {"ok": true}
        });

        let map = value.as_object().expect("object");
        assert!(map.get("tags").is_some_and(Value::is_array));
        assert!(map.get("meta").is_some_and(Value::is_object));
    }
}
