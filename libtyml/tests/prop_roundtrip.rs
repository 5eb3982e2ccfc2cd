//! Property-based round-trip tests.
//!
//! Uses `proptest` to generate random payloads for fixed templates and
//! verifies that parse(encode(value)) yields an equal value. Strings are
//! drawn from characters the grammar can represent inside quoted literals
//! (no `"` or `\`, which have no escaped form — see the serializer docs).

use libtyml::{encode, parse, EncodeOptions, ErrorKind, Named, Template, Value};
use proptest::prelude::*;
use std::collections::HashMap;

fn object(entries: Vec<(&str, Value)>) -> Value {
    let map: HashMap<String, Value> = entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect();
    Value::Object(map)
}

/// Strings the quoted-literal grammar can represent losslessly.
fn arb_safe_string() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            prop::char::range('a', 'z'),
            prop::char::range('A', 'Z'),
            prop::char::range('0', '9'),
            Just(' '),
            Just('\n'),
            Just('\t'),
            Just('_'),
            Just('-'),
            Just('.'),
            Just(','),
            Just(':'),
            Just('#'),
        ],
        0..24,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn int8_roundtrip(n in any::<i8>()) {
        let template = Named::new("Number", Template::Int8);
        let value = object(vec![("Number", Value::Int8(n))]);
        let text = encode(&value, &EncodeOptions::default());
        prop_assert_eq!(parse(&template, &text).unwrap(), value);
    }

    #[test]
    fn int64_roundtrip(n in any::<i64>()) {
        let template = Named::new("Number", Template::Int64);
        let value = object(vec![("Number", Value::Int64(n))]);
        let text = encode(&value, &EncodeOptions::default());
        prop_assert_eq!(parse(&template, &text).unwrap(), value);
    }

    #[test]
    fn uint64_roundtrip(n in any::<u64>()) {
        let template = Named::new("Number", Template::UInt64);
        let value = object(vec![("Number", Value::UInt64(n))]);
        let text = encode(&value, &EncodeOptions::default());
        prop_assert_eq!(parse(&template, &text).unwrap(), value);
    }

    #[test]
    fn float_roundtrip(f in any::<f32>().prop_filter("finite", |f| f.is_finite())) {
        let template = Named::new("Number", Template::Float);
        let value = object(vec![("Number", Value::Float(f))]);
        let text = encode(&value, &EncodeOptions::default());
        prop_assert_eq!(parse(&template, &text).unwrap(), value);
    }

    #[test]
    fn double_roundtrip(f in any::<f64>().prop_filter("finite", |f| f.is_finite())) {
        let template = Named::new("Number", Template::Double);
        let value = object(vec![("Number", Value::Double(f))]);
        let text = encode(&value, &EncodeOptions::default());
        prop_assert_eq!(parse(&template, &text).unwrap(), value);
    }

    #[test]
    fn string_roundtrip(s in arb_safe_string()) {
        let template = Named::new("Text", Template::Str);
        let value = object(vec![("Text", Value::String(s))]);
        let text = encode(&value, &EncodeOptions::default());
        prop_assert_eq!(parse(&template, &text).unwrap(), value);
    }

    #[test]
    fn list_roundtrip(items in prop::collection::vec(any::<u16>(), 0..12)) {
        let template = Named::new("Items", Template::list(Template::UInt16));
        let value = object(vec![(
            "Items",
            Value::List(items.into_iter().map(Value::UInt16).collect()),
        )]);
        let text = encode(&value, &EncodeOptions::default());
        prop_assert_eq!(parse(&template, &text).unwrap(), value);
    }

    #[test]
    // Items stays non-empty: an empty list block closes only at end of
    // input, and here the sorted Label key still follows it.
    fn mixed_object_roundtrip(
        count in any::<i32>(),
        label in arb_safe_string(),
        items in prop::collection::vec(any::<u16>(), 1..6),
        active in any::<bool>(),
    ) {
        let template = Named::new(
            "Config",
            Template::Object(vec![
                Named::new("Count", Template::Int32),
                Named::new("Label", Template::Str),
                Named::new("Items", Template::list(Template::UInt16)),
                Named::new("Active", Template::Bool),
            ]),
        );
        let value = object(vec![(
            "Config",
            object(vec![
                ("Count", Value::Int32(count)),
                ("Label", Value::String(label)),
                ("Items", Value::List(items.into_iter().map(Value::UInt16).collect())),
                ("Active", Value::Bool(active)),
            ]),
        )]);
        let text = encode(&value, &EncodeOptions::default());
        prop_assert_eq!(parse(&template, &text).unwrap(), value);
    }

    #[test]
    fn out_of_range_literal_always_fails(n in 256u64..1_000_000u64) {
        let template = Named::new("Number", Template::UInt8);
        let input = format!("Number: {}", n);
        let err = parse(&template, &input).unwrap_err();
        let is_invalid_number = matches!(err.kind, ErrorKind::InvalidNumber { .. });
        prop_assert!(is_invalid_number);
    }
}
