//! Field selection scenarios: the result holds exactly the requested
//! fields, in request order, at every nesting level.

use graft_core::Value;
use graft_session::Session;
use graft_tests::{blog_registry, BlogStore};

#[test]
fn selects_only_requested_fields() {
    let store = BlogStore::shared();
    let registry = blog_registry(&store);
    let session = Session::new(&registry);

    let response = session
        .execute("{ user(id: 1) { name email } }")
        .unwrap();

    let user = response.data.get("user").unwrap().as_object().unwrap();
    assert_eq!(user.len(), 2);
    assert_eq!(user.get("name"), Some(&Value::String("Alice".into())));
    assert_eq!(
        user.get("email"),
        Some(&Value::String("alice@example.com".into()))
    );
    assert!(!user.contains_key("id"));
    assert!(!user.contains_key("age"));
}

#[test]
fn preserves_requested_field_order() {
    let store = BlogStore::shared();
    let registry = blog_registry(&store);
    let session = Session::new(&registry);

    let response = session
        .execute("{ user(id: 2) { email id age name } }")
        .unwrap();

    let user = response.data.get("user").unwrap().as_object().unwrap();
    let keys: Vec<&str> = user.keys().collect();
    assert_eq!(keys, vec!["email", "id", "age", "name"]);
}

#[test]
fn all_scalar_fields() {
    let store = BlogStore::shared();
    let registry = blog_registry(&store);
    let session = Session::new(&registry);

    let response = session
        .execute("{ user(id: 2) { id name email age } }")
        .unwrap();

    let user = response.data.get("user").unwrap().as_object().unwrap();
    assert_eq!(user.get("id"), Some(&Value::Int(2)));
    assert_eq!(user.get("name"), Some(&Value::String("Bob".into())));
    assert_eq!(user.get("age"), Some(&Value::Int(25)));
}

#[test]
fn missing_user_resolves_to_null() {
    let store = BlogStore::shared();
    let registry = blog_registry(&store);
    let session = Session::new(&registry);

    let response = session.execute("{ user(id: 99) { name } }").unwrap();
    assert_eq!(response.data.get("user"), Some(&Value::Null));
}

#[test]
fn unknown_fields_resolve_to_null_at_every_level() {
    let store = BlogStore::shared();
    let registry = blog_registry(&store);
    let session = Session::new(&registry);

    let response = session
        .execute("{ mystery user(id: 1) { name shadow } }")
        .unwrap();

    assert_eq!(response.data.get("mystery"), Some(&Value::Null));
    let user = response.data.get("user").unwrap().as_object().unwrap();
    assert_eq!(user.get("shadow"), Some(&Value::Null));
    assert_eq!(user.len(), 2);
}

#[test]
fn repeated_execution_is_idempotent() {
    let store = BlogStore::shared();
    let registry = blog_registry(&store);
    let session = Session::new(&registry);

    let query = "{ users { name posts { title } } }";
    let first = session.execute(query).unwrap();
    let second = session.execute(query).unwrap();

    assert_eq!(first, second);
}

#[test]
fn empty_selection_set_behaves_like_no_selection() {
    // `{}` is legal and parses to an empty child sequence; a field without
    // children returns its raw result unchanged.
    let store = BlogStore::shared();
    let registry = blog_registry(&store);
    let session = Session::new(&registry);

    let response = session.execute("{ user(id: 1) {} }").unwrap();
    let user = response.data.get("user").unwrap().as_object().unwrap();
    assert_eq!(user.len(), 4);
    assert_eq!(user.get("name"), Some(&Value::String("Alice".into())));
}

#[test]
fn composite_value_without_sub_selection_is_returned_raw() {
    let store = BlogStore::shared();
    let registry = blog_registry(&store);
    let session = Session::new(&registry);

    let response = session.execute("{ user(id: 3) }").unwrap();
    let user = response.data.get("user").unwrap().as_object().unwrap();
    assert_eq!(user.len(), 4);
    assert_eq!(user.get("name"), Some(&Value::String("Charlie".into())));
}
