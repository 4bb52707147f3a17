//! Differential tests against a reference implementation.
//!
//! Runs a corpus of documents through both this engine and `serde_json`
//! (compiled with `preserve_order`, matching this engine's object
//! semantics) and checks that acceptance, structure, and member ordering
//! agree.

use hollowcore_json::{parse, to_string, Number, Value};

/// Convert an engine value into the reference representation.
fn to_reference(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Number(Number::Int(i)) => serde_json::Value::from(*i),
        Value::Number(Number::Float(f)) => {
            serde_json::Number::from_f64(*f).map_or(serde_json::Value::Null, serde_json::Value::Number)
        }
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Array(items) => serde_json::Value::Array(items.iter().map(to_reference).collect()),
        Value::Object(map) => serde_json::Value::Object(
            map.iter()
                .map(|(key, value)| (key.clone(), to_reference(value)))
                .collect(),
        ),
    }
}

/// Both engines must accept `input` and agree on the resulting structure,
/// including object member order.
fn assert_agreement(input: &str) {
    let ours = parse(input).unwrap_or_else(|error| panic!("engine rejected {input:?}: {error}"));
    let reference: serde_json::Value =
        serde_json::from_str(input).unwrap_or_else(|error| panic!("reference rejected {input:?}: {error}"));
    assert_eq!(
        to_reference(&ours),
        reference,
        "structure disagreement on {input:?}"
    );
}

/// Both engines must reject `input`.
fn assert_both_reject(input: &str) {
    assert!(parse(input).is_err(), "engine accepted {input:?}");
    assert!(
        serde_json::from_str::<serde_json::Value>(input).is_err(),
        "reference accepted {input:?}"
    );
}

#[test]
fn valid_documents_agree() {
    let corpus = [
        "null",
        "true",
        "false",
        "0",
        "-1",
        "42",
        "9223372036854775807",
        "-9223372036854775808",
        "3.5",
        "-0.25",
        "1e3",
        "2.5E-2",
        "\"\"",
        "\"hello\"",
        r#""a\nb\t\"c\"""#,
        r#""\u0041\u00e9""#,
        r#""\ud83d\ude00""#,
        "\"héllo 😀\"",
        "[]",
        "[1,2,3]",
        "[true,\"two\",3.5]",
        "{}",
        r#"{"answer":42,"question":"unknown"}"#,
        r#"{"b":1,"a":2,"c":3}"#,
        r#"{"a":1,"a":2}"#,
        r#"{"arr":[1,{"nested":true}],"num":42}"#,
        "  [ 1 , 2 ]  ",
        "[[[[[[[[1]]]]]]]]",
    ];
    for input in corpus {
        assert_agreement(input);
    }
}

#[test]
fn invalid_documents_agree() {
    let corpus = [
        "",
        "   ",
        "nul",
        "tru",
        "falsey",
        "01",
        "1.",
        ".5",
        "+1",
        "1e",
        "1e+",
        "--1",
        "NaN",
        "Infinity",
        "[1,2,]",
        "[1 2]",
        "[",
        "]",
        "{",
        r#"{"a"}"#,
        r#"{"a":}"#,
        r#"{"a":1,}"#,
        r#"{'a':1}"#,
        "{1:2}",
        "\"abc",
        "\"a\\q\"",
        "\"\\u12\"",
        r#""\ud83d""#,
        "null null",
        "{} []",
    ];
    for input in corpus {
        assert_both_reject(input);
    }
}

#[test]
fn serialized_output_is_accepted_by_reference() {
    let inputs = [
        r#"{"b":[1,2.5,"x\n"],"a":{"k":null},"z":[-0.0,1.0,1e300]}"#,
        "[9223372036854775807,-9223372036854775808]",
    ];
    for input in inputs {
        let value = parse(input).unwrap();
        let emitted = to_string(&value);
        let reference: serde_json::Value = serde_json::from_str(&emitted)
            .unwrap_or_else(|error| panic!("reference rejected {emitted:?}: {error}"));
        assert_eq!(to_reference(&value), reference);
    }
}

#[test]
fn integer_only_documents_match_reference_text() {
    // Where no doubles are involved the two engines emit byte-identical
    // compact text.
    let corpus = [
        "null",
        "true",
        "[1,2,3]",
        r#"{"b":1,"a":[true,null,"x"]}"#,
        r#""a\nb""#,
    ];
    for input in corpus {
        let ours = to_string(&parse(input).unwrap());
        let reference: serde_json::Value = serde_json::from_str(input).unwrap();
        let reference_text = serde_json::to_string(&reference).unwrap();
        assert_eq!(ours, reference_text, "text disagreement on {input:?}");
    }
}
