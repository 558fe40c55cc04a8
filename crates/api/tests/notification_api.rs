//! HTTP-level integration tests for the notification feed endpoints.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, create_and_login, create_user, get, get_auth, post_json_auth,
};
use washline_core::channels::CHANNEL_EMAIL;
use washline_core::roles::ROLE_STUDENT;
use washline_db::models::notification::CreateNotification;
use washline_db::{FixtureStore, LaundryStore};

/// Insert `count` notification rows for `user_id` directly into the store.
async fn seed_notifications(store: &FixtureStore, user_id: i64, count: usize) -> Vec<i64> {
    let mut ids = Vec::with_capacity(count);
    for i in 0..count {
        let row = store
            .create_notification(&CreateNotification {
                user_id,
                batch_id: None,
                channel: CHANNEL_EMAIL.to_string(),
                message: format!("message {i}"),
            })
            .await
            .expect("notification insert should succeed");
        ids.push(row.id);
    }
    ids
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// Listing requires authentication.
#[tokio::test]
async fn list_requires_auth() {
    let (app, _store, _mailer) = build_test_app();
    let response = get(app, "/api/v1/notifications").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// The list is wrapped in `data`, newest first, and scoped to the caller.
#[tokio::test]
async fn list_is_scoped_and_newest_first() {
    let (app, store, _mailer) = build_test_app();
    let mine = create_and_login(app.clone(), &store, "mine@test.com", ROLE_STUDENT).await;
    let other = create_user(&store, "other@test.com", ROLE_STUDENT).await;

    let my_id = body_json(get_auth(app.clone(), "/api/v1/profile", &mine).await)
        .await["id"]
        .as_i64()
        .unwrap();
    let ids = seed_notifications(&store, my_id, 3).await;
    seed_notifications(&store, other.id, 2).await;

    let response = get_auth(app, "/api/v1/notifications", &mine).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let rows = json["data"].as_array().expect("data should be an array");
    assert_eq!(rows.len(), 3, "only the caller's notifications are listed");
    // Newest first: the last inserted id comes first.
    assert_eq!(rows[0]["id"].as_i64().unwrap(), *ids.last().unwrap());
    assert_eq!(rows[0]["is_sent"], false);
    assert_eq!(rows[0]["is_read"], false);
}

/// The `limit` query parameter caps the page size.
#[tokio::test]
async fn list_respects_limit() {
    let (app, store, _mailer) = build_test_app();
    let token = create_and_login(app.clone(), &store, "pager@test.com", ROLE_STUDENT).await;
    let my_id = body_json(get_auth(app.clone(), "/api/v1/profile", &token).await)
        .await["id"]
        .as_i64()
        .unwrap();
    seed_notifications(&store, my_id, 5).await;

    let response = get_auth(app, "/api/v1/notifications?limit=2", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Unread count and read state
// ---------------------------------------------------------------------------

/// Marking one notification read decrements the unread count.
#[tokio::test]
async fn mark_read_updates_unread_count() {
    let (app, store, _mailer) = build_test_app();
    let token = create_and_login(app.clone(), &store, "reader@test.com", ROLE_STUDENT).await;
    let my_id = body_json(get_auth(app.clone(), "/api/v1/profile", &token).await)
        .await["id"]
        .as_i64()
        .unwrap();
    let ids = seed_notifications(&store, my_id, 3).await;

    let response = get_auth(app.clone(), "/api/v1/notifications/unread-count", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["count"], 3);

    let response = post_json_auth(
        app.clone(),
        &format!("/api/v1/notifications/{}/read", ids[0]),
        serde_json::json!({}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_auth(app.clone(), "/api/v1/notifications/unread-count", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["count"], 2);

    // The read row now carries is_read and read_at.
    let response = get_auth(app, "/api/v1/notifications", &token).await;
    let json = body_json(response).await;
    let read_row = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|n| n["id"].as_i64() == Some(ids[0]))
        .expect("read row should still be listed")
        .clone();
    assert_eq!(read_row["is_read"], true);
    assert!(read_row["read_at"].is_string());
}

/// Users cannot mark another user's notification read; the row is simply
/// not found for them.
#[tokio::test]
async fn mark_read_rejects_other_users_rows() {
    let (app, store, _mailer) = build_test_app();
    let token = create_and_login(app.clone(), &store, "snoop@test.com", ROLE_STUDENT).await;
    let victim = create_user(&store, "victim@test.com", ROLE_STUDENT).await;
    let ids = seed_notifications(&store, victim.id, 1).await;

    let response = post_json_auth(
        app,
        &format!("/api/v1/notifications/{}/read", ids[0]),
        serde_json::json!({}),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // The victim's row is untouched.
    assert_eq!(store.unread_count(victim.id).await.unwrap(), 1);
}

/// Read-all marks every unread row and reports how many were affected.
#[tokio::test]
async fn read_all_reports_marked_count() {
    let (app, store, _mailer) = build_test_app();
    let token = create_and_login(app.clone(), &store, "bulk@test.com", ROLE_STUDENT).await;
    let my_id = body_json(get_auth(app.clone(), "/api/v1/profile", &token).await)
        .await["id"]
        .as_i64()
        .unwrap();
    let ids = seed_notifications(&store, my_id, 4).await;

    // One is already read, so read-all should only count the other three.
    store.mark_notification_read(ids[0], my_id).await.unwrap();

    let response = post_json_auth(
        app.clone(),
        "/api/v1/notifications/read-all",
        serde_json::json!({}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["marked_read"], 3);

    let response = get_auth(app, "/api/v1/notifications/unread-count", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["count"], 0);
}
