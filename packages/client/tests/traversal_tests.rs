//! Chain evaluation tests
//!
//! Covers every operation, the absorbing-error rule and the non-empty rule.

use traverse_core::node::decode;
use traverse_core::{ErrorKind, Node, Traversal, TraversalError};

const TAGGING: &str = r#"{"name":"tagging","category":"http"}"#;
const RECORDS: &str = r#"[{"k":"v1"},{"k":"v2"},{"k":"v3"}]"#;

fn field_equals(node: &Node, key: &str, expected: &str) -> bool {
    decode::as_field_map(node)
        .ok()
        .and_then(|fields| fields.get(key).and_then(|v| decode::as_string(v).ok()))
        .is_some_and(|value| value == expected)
}

/// Every operation applied to an errored traversal
fn apply_every_operation(traversal: Traversal) -> Traversal {
    traversal
        .object_key("k")
        .array_slice()
        .array_index(0)
        .array_singleton()
        .filter(|_| true)
        .selector(|nodes| Ok(nodes.to_vec()))
        .inspect(|_, _| panic!("inspect must not visit an errored chain"))
}

#[test]
fn test_round_trip_is_byte_identical() {
    for document in [
        "{}",
        "[]",
        "null",
        "42",
        r#""text with \"escapes\" é""#,
        r#"{ "spaced" : [ 1, 2 , 3 ] }"#,
        TAGGING,
    ] {
        let out = Traversal::start(document)
            .end_to_vec()
            .expect("round trip failed");
        assert_eq!(out, document.as_bytes(), "round trip of {document}");
    }
}

#[test]
fn test_start_holds_single_node() {
    let traversal = Traversal::start(RECORDS);
    assert_eq!(traversal.len(), 1);
    assert!(!traversal.is_errored());
    assert_eq!(traversal.nodes().expect("active")[0].raw(), RECORDS);
}

#[test]
fn test_start_keeps_surrounding_whitespace() {
    for document in [" \n{\"a\":1}\n", "{\"a\":1}\n", "\t[1, 2]\r\n", " \"s\" "] {
        let out = Traversal::start(document)
            .end_to_vec()
            .expect("whitespace around a document is valid");
        assert_eq!(out, document.as_bytes(), "round trip of {document:?}");
    }
}

#[test]
fn test_operations_on_padded_document() {
    let out = Traversal::start("\n  {\"a\": [ {\"b\": true} ]}\n")
        .object_key("a")
        .array_singleton()
        .object_key("b")
        .end_to_string()
        .expect("padded document navigates like any other");
    assert_eq!(out, "true");
}

#[test]
fn test_invalid_document() {
    for document in ["}", "", "{", r#"{"a":1} trailing"#, "[1,]"] {
        let traversal = Traversal::start(document);
        assert_eq!(
            traversal.error().map(TraversalError::kind),
            Some(ErrorKind::InvalidDocument),
            "document {document:?}"
        );
    }
}

#[test]
fn test_invalid_document_survives_every_operation() {
    let traversal = apply_every_operation(Traversal::start("}"));
    let error = traversal.end_to_vec().expect_err("chain must stay errored");
    assert_eq!(error.kind(), ErrorKind::InvalidDocument);
}

#[test]
fn test_errored_state_is_absorbing() {
    let errored = Traversal::start(TAGGING).object_key("missing");
    let original = errored.error().cloned().expect("errored");

    let after = apply_every_operation(errored);
    assert_eq!(after.error(), Some(&original));
    assert!(after.nodes().is_none());
}

#[test]
fn test_first_error_is_reported() {
    let error = Traversal::start(TAGGING)
        .array_slice()
        .object_key("missing")
        .end_to_vec()
        .expect_err("array_slice must fail first");
    assert_eq!(error.kind(), ErrorKind::NotAnArray);
}

#[test]
fn test_object_key() {
    let out = Traversal::start(TAGGING)
        .object_key("category")
        .end_to_string()
        .expect("key exists");
    assert_eq!(out, r#""http""#);
}

#[test]
fn test_object_key_missing() {
    let traversal = Traversal::start(TAGGING).object_key("missing");
    assert_eq!(
        traversal.error(),
        Some(&TraversalError::KeyNotFound {
            index: 0,
            key: "missing".to_string()
        })
    );
}

#[test]
fn test_object_key_not_an_object() {
    let traversal = Traversal::start(r#"[1,2]"#).object_key("a");
    let error = traversal.error().expect("array is not an object");
    assert_eq!(error.kind(), ErrorKind::NotAnObject);
    assert_eq!(error.index(), Some(0));
}

#[test]
fn test_object_key_aborts_whole_working_set() {
    let traversal = Traversal::start(r#"[{"a":1},{"b":2},{"a":3}]"#)
        .array_slice()
        .object_key("a");
    assert_eq!(
        traversal.error(),
        Some(&TraversalError::key_not_found(1, "a"))
    );
}

#[test]
fn test_object_key_preserves_cardinality() {
    let traversal = Traversal::start(r#"[{"a":1},{"a":2},{"a":3}]"#)
        .array_slice()
        .object_key("a");
    let raws: Vec<&str> = traversal
        .nodes()
        .expect("active")
        .iter()
        .map(Node::raw)
        .collect();
    assert_eq!(raws, ["1", "2", "3"]);
}

#[test]
fn test_object_key_keeps_null_value() {
    let out = Traversal::start(r#"{"a":null}"#)
        .object_key("a")
        .end_to_string()
        .expect("null is a present value");
    assert_eq!(out, "null");
}

#[test]
fn test_array_slice_explodes_in_order() {
    let traversal = Traversal::start(RECORDS).array_slice();
    let raws: Vec<&str> = traversal
        .nodes()
        .expect("active")
        .iter()
        .map(Node::raw)
        .collect();
    assert_eq!(raws, [r#"{"k":"v1"}"#, r#"{"k":"v2"}"#, r#"{"k":"v3"}"#]);
}

#[test]
fn test_array_slice_empty_array() {
    let traversal = Traversal::start("[]").array_slice();
    assert_eq!(traversal.error(), Some(&TraversalError::EmptyWorkingSet));
}

#[test]
fn test_array_slice_not_an_array() {
    let traversal = Traversal::start(TAGGING).array_slice();
    assert_eq!(
        traversal.error().map(TraversalError::kind),
        Some(ErrorKind::NotAnArray)
    );
}

#[test]
fn test_array_slice_requires_singleton() {
    let traversal = Traversal::start("[[1],[2]]").array_slice().array_slice();
    assert_eq!(
        traversal.error(),
        Some(&TraversalError::WrongWorkingSetSize {
            expected: 1,
            found: 2
        })
    );
}

#[test]
fn test_explosion_and_filter_scenario() {
    let out = Traversal::start(RECORDS)
        .array_slice()
        .filter(|node| field_equals(node, "k", "v3"))
        .end_to_string()
        .expect("one record matches");
    assert_eq!(out, r#"{"k":"v3"}"#);

    let error = Traversal::start("[]")
        .array_slice()
        .filter(|node| field_equals(node, "k", "v3"))
        .end_to_string()
        .expect_err("empty array");
    assert_eq!(error, TraversalError::EmptyWorkingSet);
}

#[test]
fn test_filter_preserves_order() {
    let traversal = Traversal::start(RECORDS)
        .array_slice()
        .filter(|node| !field_equals(node, "k", "v2"));
    let raws: Vec<&str> = traversal
        .nodes()
        .expect("active")
        .iter()
        .map(Node::raw)
        .collect();
    assert_eq!(raws, [r#"{"k":"v1"}"#, r#"{"k":"v3"}"#]);
}

#[test]
fn test_filter_visits_in_document_order() {
    let mut seen = Vec::new();
    let _ = Traversal::start("[3,1,2]").array_slice().filter(|node| {
        seen.push(node.raw().to_string());
        true
    });
    assert_eq!(seen, ["3", "1", "2"]);
}

#[test]
fn test_filter_no_survivors() {
    let traversal = Traversal::start(RECORDS)
        .array_slice()
        .filter(|node| field_equals(node, "k", "v9"));
    assert_eq!(traversal.error(), Some(&TraversalError::EmptyWorkingSet));
}

#[test]
fn test_filter_predicate_treats_decode_failure_as_no_match() {
    let traversal = Traversal::start(r#"[1,{"k":"v1"},"text"]"#)
        .array_slice()
        .filter(|node| field_equals(node, "k", "v1"));
    assert_eq!(traversal.len(), 1);
}

#[test]
fn test_filter_by_integer_field() {
    let document = r#"[{"A":"a","B":43,"C":true},{"A":"a","B":41,"C":true},{"A":"a","B":43,"C":true}]"#;
    let out = Traversal::start(document)
        .array_slice()
        .filter(|node| {
            decode::as_field_map(node)
                .ok()
                .and_then(|fields| fields.get("B").and_then(|b| decode::as_i32(b).ok()))
                == Some(41)
        })
        .end_to_string()
        .expect("one record has B == 41");
    assert_eq!(out, r#"{"A":"a","B":41,"C":true}"#);
}

#[test]
fn test_filter_keeps_duplicates() {
    let traversal = Traversal::start("[1,1,2,1]")
        .array_slice()
        .filter(|node| node.raw() == "1");
    assert_eq!(traversal.len(), 3);
}

#[test]
fn test_selector_installs_result() {
    let out = Traversal::start(RECORDS)
        .selector(|nodes| {
            let records = decode::as_nodes(&nodes[0])?;
            records
                .into_iter()
                .find_map(|record| {
                    decode::as_field_map(&record)
                        .ok()
                        .and_then(|mut fields| fields.remove("k"))
                        .filter(|k| k.raw() == r#""v3""#)
                })
                .map(|k| vec![k])
                .ok_or_else(|| TraversalError::selector("not found"))
        })
        .end_to_string()
        .expect("selector finds v3");
    assert_eq!(out, r#""v3""#);
}

#[test]
fn test_selector_error_is_unqualified() {
    let traversal = Traversal::start(TAGGING).selector(|_| Err(TraversalError::selector("not found")));
    assert_eq!(
        traversal.error(),
        Some(&TraversalError::Selector("not found".to_string()))
    );
}

#[test]
fn test_selector_decode_error_propagates() {
    let traversal = Traversal::start(TAGGING).selector(|nodes| {
        let elements = decode::as_nodes(&nodes[0])?;
        Ok(elements)
    });
    assert_eq!(
        traversal.error().map(TraversalError::kind),
        Some(ErrorKind::Decode)
    );
}

#[test]
fn test_selector_may_synthesize_values() {
    let out = Traversal::start(RECORDS)
        .selector(|nodes| {
            let count = decode::as_nodes(&nodes[0])?.len();
            let node = Node::from_value(&count).map_err(TraversalError::selector)?;
            Ok(vec![node])
        })
        .end_to_string()
        .expect("synthesized count");
    assert_eq!(out, "3");
}

#[test]
fn test_selector_may_return_empty_working_set() {
    let traversal = Traversal::start(TAGGING).selector(|_| Ok(Vec::new()));
    assert!(!traversal.is_errored());
    assert!(traversal.is_empty());

    // the next non-selector operation restores the non-empty rule
    let traversal = traversal.object_key("name");
    assert_eq!(traversal.error(), Some(&TraversalError::EmptyWorkingSet));
}

#[test]
fn test_array_index() {
    let out = Traversal::start(RECORDS)
        .array_index(1)
        .end_to_string()
        .expect("index 1 exists");
    assert_eq!(out, r#"{"k":"v2"}"#);

    let traversal = Traversal::start(RECORDS).array_index(3);
    assert_eq!(
        traversal.error(),
        Some(&TraversalError::IndexOutOfBounds { index: 3, len: 3 })
    );
}

#[test]
fn test_array_singleton() {
    let out = Traversal::start(r#"[{"A":"a"}]"#)
        .array_singleton()
        .end_to_string()
        .expect("one element");
    assert_eq!(out, r#"{"A":"a"}"#);

    assert_eq!(
        Traversal::start("[]").array_singleton().error(),
        Some(&TraversalError::EmptyWorkingSet)
    );
    assert_eq!(
        Traversal::start("[1,2]").array_singleton().error(),
        Some(&TraversalError::wrong_working_set_size(1, 2))
    );
}

#[test]
fn test_inspect_leaves_chain_unchanged() {
    let mut visited = Vec::new();
    let traversal = Traversal::start(RECORDS)
        .array_slice()
        .inspect(|index, node| visited.push((index, node.raw().to_string())));
    assert_eq!(traversal.len(), 3);
    assert_eq!(visited[2], (2, r#"{"k":"v3"}"#.to_string()));
}

#[test]
fn test_end_takes_first_node_by_default() {
    let out = Traversal::start(RECORDS)
        .array_slice()
        .end_to_string()
        .expect("first node");
    assert_eq!(out, r#"{"k":"v1"}"#);
}

#[test]
fn test_end_writes_nothing_on_error() {
    let mut sink = Vec::new();
    let result = Traversal::start(TAGGING).object_key("missing").end(&mut sink);
    assert!(result.is_err());
    assert!(sink.is_empty());
}

#[test]
fn test_end_reports_sink_failure() {
    struct BrokenSink;

    impl std::io::Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let error = Traversal::start(TAGGING)
        .end(BrokenSink)
        .expect_err("sink rejects writes");
    assert_eq!(error.kind(), ErrorKind::Io);
}

#[test]
fn test_chain_can_branch_before_failure() {
    let exploded = Traversal::start(r#"[{"a":1},{"b":2}]"#).array_slice();

    let failed = exploded.clone().object_key("a");
    assert!(failed.is_errored());

    let recovered = exploded
        .filter(|node| field_equals(node, "missing", "x") || node.raw().contains("\"b\""))
        .object_key("b")
        .end_to_string()
        .expect("branch avoids the failure");
    assert_eq!(recovered, "2");
}

#[test]
fn test_deep_navigation() {
    let document = r#"{
        "configs": [
            {"@type": "admin.Other", "value": 1},
            {"@type": "admin.Bootstrap", "bootstrap": {"listeners": [{"filters": [{"name": "gm.metrics"}]}]}}
        ]
    }"#;

    let out = Traversal::start(document)
        .object_key("configs")
        .array_slice()
        .filter(|node| field_equals(node, "@type", "admin.Bootstrap"))
        .object_key("bootstrap")
        .object_key("listeners")
        .array_index(0)
        .object_key("filters")
        .array_slice()
        .filter(|node| field_equals(node, "name", "gm.metrics"))
        .end_to_string()
        .expect("deep path exists");
    assert_eq!(out, r#"{"name": "gm.metrics"}"#);
}

#[test]
fn test_traversals_are_independent_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                Traversal::start(RECORDS)
                    .array_index(i % 3)
                    .object_key("k")
                    .end_to_string()
            })
        })
        .collect();

    let results: Vec<String> = handles
        .into_iter()
        .map(|h| h.join().expect("thread panicked").expect("traversal failed"))
        .collect();
    assert_eq!(results, [r#""v1""#, r#""v2""#, r#""v3""#, r#""v1""#]);
}
