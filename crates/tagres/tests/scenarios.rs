mod common;

use common::{User, alice, init_tracing};
use pretty_assertions::assert_eq;
use tagres::{ErrorKind, Outcome, TaggedResult, err, err_tagged, ok, ok_tagged};

#[derive(Debug, Clone, PartialEq)]
struct FieldError {
    field: &'static str,
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn ok_without_tag_uses_success() {
    let result = ok(alice());
    assert_eq!(result.tag(), "SUCCESS");
    assert_eq!(result.data(), &alice());
}

#[test]
fn ok_with_tag_prefixes_success() {
    let result = ok_tagged("USER_CREATED", alice()).unwrap();
    assert_eq!(result.tag(), "SUCCESS_USER_CREATED");
    assert_eq!(result.into_data(), alice());
}

#[test]
fn err_without_tag_uses_error() {
    let result = err("Something went wrong");
    assert_eq!(result.tag(), "ERROR");
    assert_eq!(*result.data(), "Something went wrong");
}

#[test]
fn err_with_tag_prefixes_error() {
    let result = err_tagged("VALIDATION_FAILED", FieldError { field: "email" }).unwrap();
    assert_eq!(result.tag(), "ERROR_VALIDATION_FAILED");
    assert_eq!(result.data().field, "email");
}

#[test]
fn empty_tag_is_rejected() {
    let error = err_tagged("", 1).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::EmptyTag);
    assert_eq!(error.operation(), "tagres::err_tagged");
    assert!(error.to_string().contains("EmptyTag"));
}

#[test]
fn tagged_number_keeps_its_type() {
    let result = ok_tagged("PARSED", 42).unwrap();
    assert!(result.is("SUCCESS_PARSED"));
    let n: i32 = *result.data();
    assert_eq!(n * 2, 84);
}

#[test]
fn macros_build_the_same_values() {
    assert_eq!(tagres::ok!(alice()), ok(alice()));
    assert_eq!(
        tagres::ok!("USER_CREATED", alice()),
        ok_tagged("USER_CREATED", alice()).unwrap()
    );
    assert_eq!(tagres::err!("boom"), err("boom"));
    assert_eq!(
        tagres::err!("VALIDATION_FAILED", 1),
        err_tagged("VALIDATION_FAILED", 1).unwrap()
    );
}

#[test]
fn macros_accept_negated_payloads() {
    let x = 7i64;
    assert_eq!(tagres::ok!(-x), ok(-7));
    assert_eq!(tagres::err!(-x), err(-7));
    assert_eq!(
        tagres::ok!("DELTA", -x),
        ok_tagged("DELTA", -7).unwrap()
    );
}

// ============================================================================
// Tag rules
// ============================================================================

#[test]
fn separator_is_inserted_exactly_once() {
    init_tracing();

    for suffix in ["FOO", "_FOO", "SUCCESS_FOO", "SUCCESS__FOO"] {
        let result = ok_tagged(suffix, ()).unwrap();
        assert_eq!(result.tag().as_str(), "SUCCESS_FOO", "suffix {:?}", suffix);
    }
}

#[test]
fn own_prefix_is_not_doubled() {
    init_tracing();

    let result = err_tagged("ERROR_NETWORK", ()).unwrap();
    assert_eq!(result.tag().as_str(), "ERROR_NETWORK");
    assert_eq!(result.tag().suffix(), Some("NETWORK"));
}

#[test]
fn casing_is_not_enforced_at_runtime() {
    let result = ok_tagged("user_created", ()).unwrap();
    assert_eq!(result.tag().as_str(), "SUCCESS_user_created");
}

#[test]
fn payload_is_passed_through() {
    let payload = String::from("owned payload");
    let addr = payload.as_ptr();

    let result = err_tagged("IO", payload).unwrap();
    let (tag, data) = result.into_parts();
    assert_eq!(tag.outcome(), Outcome::Error);
    assert_eq!(data.as_ptr(), addr);
    assert_eq!(data, "owned payload");
}

// ============================================================================
// Discrimination
// ============================================================================

#[test]
fn filtering_by_tag_isolates_matching_results() {
    let results: Vec<TaggedResult<u32>> = vec![
        ok(1),
        ok_tagged("CREATED", 2).unwrap(),
        err(3),
        err_tagged("TIMEOUT", 4).unwrap(),
        ok_tagged("CREATED", 5).unwrap(),
        err_tagged("TIMEOUT", 6).unwrap(),
    ];

    let created: Vec<u32> = results
        .iter()
        .filter(|r| r.is("SUCCESS_CREATED"))
        .map(|r| *r.data())
        .collect();
    assert_eq!(created, vec![2, 5]);

    let bare_errors: Vec<u32> = results
        .iter()
        .filter(|r| r.tag() == "ERROR")
        .map(|r| *r.data())
        .collect();
    assert_eq!(bare_errors, vec![3]);

    let failures = results.iter().filter(|r| r.is_error()).count();
    assert_eq!(failures, 3);
}

#[test]
fn branching_on_tag_strings() {
    fn describe(result: &TaggedResult<User>) -> String {
        match result.tag().as_str() {
            "SUCCESS_USER_CREATED" => format!("created {}", result.data().name),
            "SUCCESS" => format!("ok {}", result.data().id),
            other => format!("unhandled {}", other),
        }
    }

    assert_eq!(
        describe(&ok_tagged("USER_CREATED", alice()).unwrap()),
        "created Alice"
    );
    assert_eq!(describe(&ok(alice())), "ok 123");
    assert_eq!(describe(&err(alice())), "unhandled ERROR");
}

#[test]
fn results_cross_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TaggedResult<User>>();

    let handles: Vec<_> = (0..4u32)
        .map(|i| std::thread::spawn(move || ok_tagged("WORKER", i).unwrap()))
        .collect();
    let tags: Vec<String> = handles
        .into_iter()
        .map(|h| h.join().unwrap().tag().to_string())
        .collect();
    assert_eq!(tags, vec!["SUCCESS_WORKER".to_string(); 4]);
}
