//! Error propagation scenarios: a query either fully succeeds or fails as
//! a whole, with the failing stage identified.

use graft_session::{Session, SessionError};
use graft_tests::{blog_registry, failing_registry, BlogStore};

#[test]
fn illegal_character_is_a_lex_error() {
    let store = BlogStore::shared();
    let registry = blog_registry(&store);
    let session = Session::new(&registry);

    let err = session.execute("{ user(id: 1) @ }").unwrap_err();
    match err {
        SessionError::Lex(lex) => {
            assert!(lex.message.contains("unexpected character '@'"));
            assert_eq!(lex.line(), 1);
        }
        other => panic!("expected lex error, got {other}"),
    }
}

#[test]
fn unterminated_string_is_a_lex_error() {
    let store = BlogStore::shared();
    let registry = blog_registry(&store);
    let session = Session::new(&registry);

    let err = session.execute(r#"{ user(name: "alice }"#).unwrap_err();
    assert!(matches!(err, SessionError::Lex(_)));
}

#[test]
fn unbalanced_braces_are_a_parse_error() {
    let store = BlogStore::shared();
    let registry = blog_registry(&store);
    let session = Session::new(&registry);

    let err = session.execute("{ user(id: 1) { name }").unwrap_err();
    match err {
        SessionError::Parse(parse) => {
            assert!(parse.message.contains("expected }"));
        }
        other => panic!("expected parse error, got {other}"),
    }
}

#[test]
fn missing_colon_is_a_parse_error() {
    let store = BlogStore::shared();
    let registry = blog_registry(&store);
    let session = Session::new(&registry);

    let err = session.execute("{ user(id 1) { name } }").unwrap_err();
    assert!(matches!(err, SessionError::Parse(_)));
}

#[test]
fn resolver_failure_aborts_the_whole_query() {
    let registry = failing_registry();
    let session = Session::new(&registry);

    let err = session.execute("{ boom }").unwrap_err();
    match err {
        SessionError::Exec(exec) => {
            assert!(exec.to_string().contains("store offline"));
        }
        other => panic!("expected execution error, got {other}"),
    }
}

#[test]
fn error_display_names_the_stage() {
    let registry = failing_registry();
    let session = Session::new(&registry);

    let err = session.execute("{ boom }").unwrap_err();
    let rendered = err.to_string();
    assert!(rendered.starts_with("execution error:"), "was: {rendered}");
    assert!(rendered.contains("backend error"), "was: {rendered}");
}

#[test]
fn unknown_fields_are_not_errors() {
    // Locks the documented policy: schema misses fall back to property
    // reads and yield null instead of failing.
    let store = BlogStore::shared();
    let registry = blog_registry(&store);
    let session = Session::new(&registry);

    let response = session.execute("{ nonsense }").unwrap();
    assert!(response.data.get("nonsense").unwrap().is_null());
}
