//! Property-based round-trip tests: for any value the strategies below can
//! produce, writing it out and parsing the result back should yield an
//! equal value, under both writer modes.

use hipack::io::{BufferSink, SliceSource};
use hipack::{write, Dict, Mode, Value};
use proptest::prelude::*;

fn arb_key() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_]{0,8}"
}

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i32>().prop_map(Value::integer),
        (-1e6f64..1e6f64).prop_map(Value::float),
        any::<bool>().prop_map(Value::bool),
        "[a-zA-Z0-9 ]{0,16}".prop_map(Value::string),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = arb_scalar();
    leaf.prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::list),
            prop::collection::vec((arb_key(), inner), 0..4).prop_map(|entries| {
                let mut dict = Dict::new();
                for (k, v) in entries {
                    dict.set(k, v);
                }
                Value::dict(dict)
            }),
        ]
    })
}

fn arb_dict() -> impl Strategy<Value = Dict> {
    prop::collection::vec((arb_key(), arb_value()), 0..6).prop_map(|entries| {
        let mut dict = Dict::new();
        for (k, v) in entries {
            dict.set(k, v);
        }
        dict
    })
}

proptest! {
    #[test]
    fn round_trips_through_indented_mode(dict in arb_dict()) {
        let mut sink = BufferSink::new();
        prop_assert!(write(&mut sink, &dict, Mode::Indented));
        let reparsed = hipack::parse(SliceSource::new(sink.as_bytes())).unwrap();
        prop_assert_eq!(reparsed, dict);
    }

    #[test]
    fn round_trips_through_compact_mode(dict in arb_dict()) {
        let mut sink = BufferSink::new();
        prop_assert!(write(&mut sink, &dict, Mode::Compact));
        let reparsed = hipack::parse(SliceSource::new(sink.as_bytes())).unwrap();
        prop_assert_eq!(reparsed, dict);
    }
}
