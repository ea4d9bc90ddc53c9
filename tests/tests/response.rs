//! Encoded response shapes: the `{"data": …}` envelope and the worked
//! examples, asserted through serde_json.

use graft_session::Session;
use graft_tests::{blog_registry, BlogStore};
use serde_json::json;

#[test]
fn single_user_envelope() {
    let store = BlogStore::shared();
    let registry = blog_registry(&store);
    let session = Session::new(&registry);

    let response = session
        .execute("{ user(id: 1) { name email } }")
        .unwrap();

    // Exact string comparison also locks the field order.
    let encoded = serde_json::to_string(&response).unwrap();
    assert_eq!(
        encoded,
        r#"{"data":{"user":{"name":"Alice","email":"alice@example.com"}}}"#
    );
}

#[test]
fn nested_fan_out_envelope() {
    let store = BlogStore::shared();
    let registry = blog_registry(&store);
    let session = Session::new(&registry);

    let response = session
        .execute("{ users { name posts { title author { email } } } }")
        .unwrap();

    let encoded = serde_json::to_value(&response).unwrap();
    assert_eq!(
        encoded,
        json!({
            "data": {
                "users": [
                    {
                        "name": "Alice",
                        "posts": [
                            {
                                "title": "Intro to Selections",
                                "author": { "email": "alice@example.com" }
                            },
                            {
                                "title": "Advanced Resolvers",
                                "author": { "email": "alice@example.com" }
                            }
                        ]
                    },
                    {
                        "name": "Bob",
                        "posts": [
                            {
                                "title": "Shaping Result Trees",
                                "author": { "email": "bob@example.com" }
                            }
                        ]
                    },
                    {
                        "name": "Charlie",
                        "posts": []
                    }
                ]
            }
        })
    );
}

#[test]
fn null_serializes_as_json_null() {
    let store = BlogStore::shared();
    let registry = blog_registry(&store);
    let session = Session::new(&registry);

    let response = session.execute("{ mystery }").unwrap();
    let encoded = serde_json::to_string(&response).unwrap();
    assert_eq!(encoded, r#"{"data":{"mystery":null}}"#);
}

#[test]
fn scalars_keep_their_json_types() {
    let store = BlogStore::shared();
    let registry = blog_registry(&store);
    let session = Session::new(&registry);

    let response = session
        .execute("{ user(id: 2) { id name } }")
        .unwrap();

    let encoded = serde_json::to_value(&response).unwrap();
    assert_eq!(encoded["data"]["user"]["id"], json!(2));
    assert_eq!(encoded["data"]["user"]["name"], json!("Bob"));
}
