#![allow(clippy::expect_used)]
#![allow(clippy::unwrap_used)]

mod common;

use authstore::dto::{NewSession, SessionUpdate};
use authstore::{Adapter, AdapterError};

fn new_session(token: &str, user_id: &str, expires_unix: i64) -> NewSession {
    NewSession {
        session_token: token.to_string(),
        user_id: user_id.to_string(),
        expires: common::at(expires_unix),
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// create_session / get_session_and_user
// ──────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_session_then_get_session_and_user() {
    let adapter = common::test_adapter().await;
    let user = common::create_user(&adapter, "session@example.com").await;

    let created = adapter
        .create_session(new_session("tok-1", &user.id, 1_900_000_000))
        .await
        .expect("create failed");
    assert_eq!(created.session_token, "tok-1");
    assert_eq!(created.user_id, user.id);
    assert_eq!(created.expires, common::at(1_900_000_000));

    let found = adapter
        .get_session_and_user("tok-1")
        .await
        .expect("lookup failed")
        .expect("session should be found");
    assert_eq!(found.session, created);
    assert_eq!(found.user, user);
}

#[tokio::test]
async fn get_session_and_user_unknown_returns_none() {
    let adapter = common::test_adapter().await;

    let found = adapter
        .get_session_and_user("missing")
        .await
        .expect("lookup failed");
    assert!(found.is_none());
}

#[tokio::test]
async fn get_session_and_user_with_user_without_email_is_an_error() {
    let adapter = common::test_adapter().await;
    let user_id = common::insert_user_without_email(&adapter).await;
    adapter
        .create_session(new_session("tok-blank", &user_id, 1_900_000_000))
        .await
        .expect("create failed");

    let result = adapter.get_session_and_user("tok-blank").await;
    assert!(
        matches!(result, Err(AdapterError::Malformed { entity: "user", .. })),
        "expected Malformed, got {result:?}"
    );
}

#[tokio::test]
async fn create_session_rejects_non_numeric_user_id() {
    let adapter = common::test_adapter().await;

    let result = adapter
        .create_session(new_session("tok-x", "user-1", 1_900_000_000))
        .await;
    assert!(matches!(result, Err(AdapterError::InvalidId { .. })));
}

#[tokio::test]
async fn session_ids_are_decimal_strings() {
    let adapter = common::test_adapter().await;
    let user = common::create_user(&adapter, "ids@example.com").await;
    adapter
        .create_session(new_session("tok-ids", &user.id, 1_900_000_000))
        .await
        .expect("create failed");

    let found = adapter
        .get_session_and_user("tok-ids")
        .await
        .expect("lookup failed")
        .expect("session should be found");

    let json = serde_json::to_value(&found).expect("serialize failed");
    assert!(json["session"]["id"].is_string());
    assert!(json["session"]["userId"].is_string());
    assert_eq!(json["session"]["sessionToken"], "tok-ids");
    assert!(json["user"]["id"].is_string());
}

// ──────────────────────────────────────────────────────────────────────────────
// update_session
// ──────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn update_session_without_expiry_keeps_content() {
    let adapter = common::test_adapter().await;
    let user = common::create_user(&adapter, "same@example.com").await;
    let created = adapter
        .create_session(new_session("tok-same", &user.id, 1_900_000_000))
        .await
        .expect("create failed");

    let updated = adapter
        .update_session(SessionUpdate {
            session_token: "tok-same".to_string(),
            expires: None,
        })
        .await
        .expect("update failed");
    assert_eq!(updated, created);
}

#[tokio::test]
async fn update_session_extends_expiry() {
    let adapter = common::test_adapter().await;
    let user = common::create_user(&adapter, "extend@example.com").await;
    let created = adapter
        .create_session(new_session("tok-ext", &user.id, 1_900_000_000))
        .await
        .expect("create failed");

    let updated = adapter
        .update_session(SessionUpdate {
            session_token: "tok-ext".to_string(),
            expires: Some(common::at(1_950_000_000)),
        })
        .await
        .expect("update failed");
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.expires, common::at(1_950_000_000));

    let found = adapter
        .get_session_and_user("tok-ext")
        .await
        .expect("lookup failed")
        .expect("session should be found");
    assert_eq!(found.session.expires, common::at(1_950_000_000));
}

#[tokio::test]
async fn update_session_unknown_is_an_error() {
    let adapter = common::test_adapter().await;

    let result = adapter
        .update_session(SessionUpdate {
            session_token: "nope".to_string(),
            expires: None,
        })
        .await;
    assert!(matches!(
        result,
        Err(AdapterError::NotFound { entity: "session", .. })
    ));
}

// ──────────────────────────────────────────────────────────────────────────────
// delete_session
// ──────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_session_removes_it() {
    let adapter = common::test_adapter().await;
    let user = common::create_user(&adapter, "signout@example.com").await;
    let created = adapter
        .create_session(new_session("tok-out", &user.id, 1_900_000_000))
        .await
        .expect("create failed");

    let deleted = adapter
        .delete_session("tok-out")
        .await
        .expect("delete failed");
    assert_eq!(deleted, created);

    let found = adapter
        .get_session_and_user("tok-out")
        .await
        .expect("lookup failed");
    assert!(found.is_none());
}

#[tokio::test]
async fn delete_session_unknown_is_an_error() {
    let adapter = common::test_adapter().await;

    let result = adapter.delete_session("never-issued").await;
    assert!(matches!(result, Err(AdapterError::NotFound { .. })));
}

#[tokio::test]
async fn deleting_user_ends_their_sessions() {
    let adapter = common::test_adapter().await;
    let user = common::create_user(&adapter, "gone@example.com").await;
    adapter
        .create_session(new_session("tok-gone", &user.id, 1_900_000_000))
        .await
        .expect("create failed");

    adapter.delete_user(&user.id).await.expect("delete failed");

    let found = adapter
        .get_session_and_user("tok-gone")
        .await
        .expect("lookup failed");
    assert!(found.is_none());
}
