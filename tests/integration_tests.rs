use dsv_codec::{
    dsv, parse, serialize, DsvOptions, ErrorKind, Number, Parser, Record, RecordMap, Value,
    Verbosity,
};

fn object(pairs: &[(&str, Value)]) -> Record {
    let mut map = RecordMap::new();
    for (key, value) in pairs {
        map.insert(key.to_string(), value.clone());
    }
    Record::Object(map)
}

fn list(values: &[&str]) -> Record {
    Record::List(values.iter().map(|v| Value::from(*v)).collect())
}

#[test]
fn test_csv_parse_adopts_first_row_as_header() {
    let output = parse(&["a,b", "1,2", "3,4"], &DsvOptions::csv());

    assert!(output.errors.is_empty());
    assert_eq!(
        output.records,
        vec![
            object(&[("a", Value::from("1")), ("b", Value::from("2"))]),
            object(&[("a", Value::from("3")), ("b", Value::from("4"))]),
        ]
    );
}

#[test]
fn test_parsed_fields_are_strings_without_inference() {
    let output = parse(&["n,flag", "42,true"], &DsvOptions::csv());

    assert_eq!(output.records[0].get("n"), Some(&Value::from("42")));
    assert_eq!(output.records[0].get("flag"), Some(&Value::from("true")));
}

#[test]
fn test_provided_header_makes_every_row_data() {
    let options = DsvOptions::csv().with_header(["x", "y"]);
    let output = parse(&["1,2", "3,4"], &options);

    assert!(output.errors.is_empty());
    assert_eq!(output.records.len(), 2);
    assert_eq!(output.records[0].get("x"), Some(&Value::from("1")));
}

#[test]
fn test_skip_header_without_keys_yields_lists() {
    let options = DsvOptions::csv().with_skip_header(true);
    let output = parse(&["ignored,row", "1,2"], &options);

    assert_eq!(output.records, vec![list(&["1", "2"])]);
}

#[test]
fn test_skip_header_with_keys_yields_objects() {
    let options = DsvOptions::csv()
        .with_skip_header(true)
        .with_header(["x", "y"]);
    let output = parse(&["old_x,old_y", "1,2"], &options);

    assert_eq!(
        output.records,
        vec![object(&[("x", Value::from("1")), ("y", Value::from("2"))])]
    );
}

#[test]
fn test_skipped_first_row_is_not_scanned() {
    // A malformed first row must not produce errors when skipped.
    let options = DsvOptions::csv().with_skip_header(true);
    let output = parse(&["\"broken,unterminated", "1,2"], &options);

    assert!(output.errors.is_empty());
    assert_eq!(output.records, vec![list(&["1", "2"])]);
}

#[test]
fn test_fixed_length_drops_deviating_rows() {
    let output = parse(&["a,b", "1,2", "1,2,3", "3,4"], &DsvOptions::csv());

    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].kind, ErrorKind::FieldCountMismatch);
    assert_eq!(output.records.len(), 2);
    assert_eq!(output.records[1].get("b"), Some(&Value::from("4")));
}

#[test]
fn test_quiet_verbosity_has_no_line_or_detail() {
    let output = parse(&["a,b", "1,2,3"], &DsvOptions::csv());

    assert_eq!(output.errors[0].line, None);
    assert_eq!(output.errors[0].detail, None);
}

#[test]
fn test_with_lines_verbosity_numbers_errors() {
    let options = DsvOptions::csv().with_verbosity(Verbosity::WithLines);
    let output = parse(&["a,b", "1,2,3"], &options);

    assert_eq!(output.errors[0].line, Some(2));
    assert_eq!(output.errors[0].detail, None);
}

#[test]
fn test_with_details_verbosity_attaches_values() {
    let options = DsvOptions::csv().with_verbosity(Verbosity::WithDetails);
    let output = parse(&["a,b", "1,2,3"], &options);

    assert_eq!(output.errors[0].line, Some(2));
    let detail = output.errors[0].detail.as_deref().unwrap();
    assert!(detail.contains("1,2,3"));
    assert!(detail.contains("a,b"));
}

#[test]
fn test_explicit_line_numbers_override_positions() {
    let options = DsvOptions::csv()
        .with_header(["a", "b"])
        .with_verbosity(Verbosity::WithLines);
    let parser = Parser::new(options);
    let output = parser.parse_with_line_numbers(&["1,2", "1,2,3"], &[41, 42]);

    assert_eq!(output.errors[0].line, Some(42));
}

#[test]
fn test_missing_options_accumulate() {
    let output = parse(&["a,b"], &DsvOptions::new());

    assert!(output.records.is_empty());
    let missing: Vec<&str> = output
        .errors
        .iter()
        .map(|e| match &e.kind {
            ErrorKind::MissingOption { option } => option.as_str(),
            other => panic!("unexpected error: {other}"),
        })
        .collect();
    assert_eq!(missing, vec!["delimiter", "quote", "escape", "header"]);
}

#[test]
fn test_surplus_fields_get_synthesized_keys() {
    let options = DsvOptions::csv().with_fixed_length(false);
    let output = parse(&["a", "1,2,3"], &options);

    assert_eq!(
        output.records,
        vec![object(&[
            ("a", Value::from("1")),
            ("_2", Value::from("2")),
            ("_3", Value::from("3")),
        ])]
    );
}

#[test]
fn test_header_prefix_is_configurable() {
    let options = DsvOptions::csv()
        .with_fixed_length(false)
        .with_header_prefix("col");
    let output = parse(&["a", "1,2"], &options);

    assert_eq!(output.records[0].get("col2"), Some(&Value::from("2")));
}

#[test]
fn test_short_rows_fill_with_null() {
    let options = DsvOptions::csv().with_fixed_length(false);
    let output = parse(&["a,b,c", "1"], &options);

    assert_eq!(
        output.records,
        vec![object(&[
            ("a", Value::from("1")),
            ("b", Value::Null),
            ("c", Value::Null),
        ])]
    );
}

#[test]
fn test_missing_as_null_pads_to_header_length() {
    let options = DsvOptions::csv()
        .with_fixed_length(false)
        .with_skip_header(true)
        .with_header(["a", "b", "c"])
        .with_missing_as_null(true);
    let output = parse(&["x,y,z", "1"], &options);

    assert_eq!(
        output.records,
        vec![object(&[
            ("a", Value::from("1")),
            ("b", Value::Null),
            ("c", Value::Null),
        ])]
    );
}

#[test]
fn test_trim_runs_before_empty_as_null() {
    let options = DsvOptions::csv()
        .with_header(["a", "b"])
        .with_fixed_length(false)
        .with_trim_whitespaces(true)
        .with_empty_as_null(true);
    let output = parse(&["  1  ,   "], &options);

    assert_eq!(
        output.records,
        vec![object(&[("a", Value::from("1")), ("b", Value::Null)])]
    );
}

#[test]
fn test_skip_empty_values_drops_fields() {
    let options = DsvOptions::csv()
        .with_skip_header(true)
        .with_fixed_length(false)
        .with_skip_empty_values(true);
    let output = parse(&["skip", "1,,2,"], &options);

    assert_eq!(output.records, vec![list(&["1", "2"])]);
}

#[test]
fn test_rows_emptied_by_stages_vanish_silently() {
    let options = DsvOptions::csv()
        .with_skip_header(true)
        .with_fixed_length(false)
        .with_skip_empty_values(true);
    let output = parse(&["skip", "", "1,2"], &options);

    assert!(output.errors.is_empty());
    assert_eq!(output.records, vec![list(&["1", "2"])]);
}

#[test]
fn test_tsv_preset_splits_on_tabs() {
    let output = parse(&["a\tb", "1,x\t2"], &DsvOptions::tsv());

    assert_eq!(output.records[0].get("a"), Some(&Value::from("1,x")));
}

#[test]
fn test_ssv_preset_collapses_runs_of_spaces() {
    let output = parse(&["proc  cpu   mem", "init     0.1  1.2"], &DsvOptions::ssv());

    assert_eq!(
        output.records,
        vec![list(&["init", "0.1", "1.2"])]
    );
}

#[test]
fn test_quoted_fields_survive_the_round_trip() {
    let options = DsvOptions::csv();
    let input = ["text,n", "\"he said \"\"hi\"\", twice\",1"];
    let parsed = parse(&input, &options);

    assert_eq!(
        parsed.records[0].get("text"),
        Some(&Value::from("he said \"hi\", twice"))
    );

    let serialized = serialize(&parsed.records, &options);
    assert_eq!(
        serialized.text,
        "text,n\n\"he said \"\"hi\"\", twice\",1\n"
    );
}

#[test]
fn test_serialize_emits_provided_header() {
    let options = DsvOptions::csv().with_header(["a", "b"]);
    let output = serialize(&[list(&["1", "2"])], &options);

    assert_eq!(output.text, "a,b\n1,2\n");
}

#[test]
fn test_serialize_adopts_keys_from_first_object_record() {
    let records = vec![
        object(&[("a", Value::from("1")), ("b", Value::from("2"))]),
        object(&[("a", Value::from("3")), ("b", Value::from("4"))]),
    ];
    let output = serialize(&records, &DsvOptions::csv());

    assert_eq!(output.text, "a,b\n1,2\n3,4\n");
}

#[test]
fn test_serialize_skip_header_omits_the_header_row() {
    let options = DsvOptions::csv()
        .with_header(["a", "b"])
        .with_skip_header(true);
    let output = serialize(&[list(&["1", "2"])], &options);

    assert_eq!(output.text, "1,2\n");
}

#[test]
fn test_serialize_renders_typed_fields() {
    let options = DsvOptions::csv().with_skip_header(true).with_fixed_length(false);
    let record = Record::List(vec![
        Value::from(42),
        Value::from(2.5),
        Value::Bool(true),
        Value::Null,
        Value::Number(Number::Infinity),
        Value::Number(Number::NaN),
    ]);
    let output = serialize(&[record], &options);

    assert!(output.errors.is_empty());
    assert_eq!(output.text, "42,2.5,true,null,Infinity,null\n");
}

#[test]
fn test_serialize_null_as_fills_missing_fields() {
    let options = DsvOptions::csv()
        .with_header(["a", "b", "c"])
        .with_fixed_length(false)
        .with_null_as("NA");
    let output = serialize(&[list(&["1"])], &options);

    assert_eq!(output.text, "a,b,c\n1,NA,NA\n");
}

#[test]
fn test_serialize_fixed_length_rejects_short_records() {
    let options = DsvOptions::csv().with_header(["a", "b"]);
    let output = serialize(&[list(&["1", "2"]), list(&["3"])], &options);

    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].kind, ErrorKind::FieldCountMismatch);
    // Serialize-side errors carry no line position.
    assert_eq!(output.errors[0].line, None);
    assert_eq!(output.text, "a,b\n1,2\n");
}

#[test]
fn test_serialize_nested_values_need_allow_list_values() {
    let nested = dsv!({"inner": [1, 2]});
    let options = DsvOptions::csv()
        .with_header(["a", "b"])
        .with_fixed_length(false);

    let denied = serialize(
        &[Record::List(vec![Value::from("x"), nested.clone()])],
        &options.clone(),
    );
    assert_eq!(
        denied.errors[0].kind,
        ErrorKind::DisallowedFieldType { kind: "Object" }
    );
    assert_eq!(denied.text, "a,b\nx,null\n");

    let allowed = serialize(
        &[Record::List(vec![Value::from("x"), nested])],
        &options.with_allow_list_values(true),
    );
    assert!(allowed.errors.is_empty());
    assert_eq!(allowed.text, "a,b\nx,\"{\"\"inner\"\":[1,2]}\"\n");
}

#[test]
fn test_serialize_drops_unencodable_fields() {
    let nested = Value::Array(vec![Value::Number(Number::NaN)]);
    let options = DsvOptions::csv()
        .with_header(["a", "b"])
        .with_fixed_length(false)
        .with_allow_list_values(true);
    let output = serialize(&[Record::List(vec![Value::from("x"), nested])], &options);

    assert_eq!(output.errors[0].kind, ErrorKind::UnsupportedFieldType);
    assert_eq!(output.text, "a,b\nx\n");
}

#[test]
fn test_serialize_missing_options_accumulate() {
    let output = serialize(&[list(&["1"])], &DsvOptions::new());

    assert!(output.text.is_empty());
    assert!(output
        .errors
        .iter()
        .any(|e| e.kind == ErrorKind::MissingOption {
            option: "record_separator".to_string()
        }));
}
