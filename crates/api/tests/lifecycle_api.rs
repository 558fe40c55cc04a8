//! HTTP-level integration tests for the batch lifecycle.
//!
//! Covers creation, the scheduled -> dropped_off -> washing ->
//! ready_for_pickup -> picked_up state machine, timestamp stamping,
//! staff notes, and the pickup notification side effects.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, create_and_login, get_auth, post_json_auth, put_json_auth,
};
use washline_core::roles::{ROLE_STAFF, ROLE_STUDENT};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Create a batch over the API as the given student and return its JSON.
async fn create_batch(app: axum::Router, student_token: &str) -> serde_json::Value {
    let body = serde_json::json!({ "scheduled_date": "2026-09-01" });
    let response = post_json_auth(app, "/api/v1/batches", body, student_token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

/// Advance a batch's status as staff and return the response.
async fn set_status(
    app: axum::Router,
    staff_token: &str,
    batch_id: i64,
    status: &str,
    notes: Option<&str>,
) -> axum::response::Response<axum::body::Body> {
    let mut body = serde_json::json!({ "status": status });
    if let Some(notes) = notes {
        body["notes"] = serde_json::json!(notes);
    }
    put_json_auth(app, &format!("/api/v1/batches/{batch_id}/status"), body, staff_token).await
}

// ---------------------------------------------------------------------------
// Creation and visibility
// ---------------------------------------------------------------------------

/// A new batch starts at `scheduled` with a server-assigned batch number.
#[tokio::test]
async fn create_batch_starts_scheduled() {
    let (app, store, _mailer) = build_test_app();
    let token = create_and_login(app.clone(), &store, "owner@test.com", ROLE_STUDENT).await;

    let batch = create_batch(app, &token).await;

    assert_eq!(batch["status"], "scheduled");
    assert_eq!(batch["scheduled_date"], "2026-09-01");
    let number = batch["batch_number"].as_str().expect("batch_number");
    assert!(number.starts_with("LB"), "batch number should start with LB, got: {number}");
    assert!(batch["dropped_off_at"].is_null());
    assert!(batch["ready_at"].is_null());
    assert!(batch["picked_up_at"].is_null());
}

/// Students see their own batches under /batches/mine but cannot read
/// another student's batch by id.
#[tokio::test]
async fn students_only_see_their_own_batches() {
    let (app, store, _mailer) = build_test_app();
    let owner = create_and_login(app.clone(), &store, "owner@test.com", ROLE_STUDENT).await;
    let other = create_and_login(app.clone(), &store, "other@test.com", ROLE_STUDENT).await;

    let batch = create_batch(app.clone(), &owner).await;
    let batch_id = batch["id"].as_i64().unwrap();

    let response = get_auth(app.clone(), "/api/v1/batches/mine", &owner).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);

    let response = get_auth(app.clone(), "/api/v1/batches/mine", &other).await;
    let json = body_json(response).await;
    assert!(json.as_array().unwrap().is_empty());

    let response = get_auth(app, &format!("/api/v1/batches/{batch_id}"), &other).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// The staff listing joins student display info onto every batch.
#[tokio::test]
async fn staff_listing_includes_student_info() {
    let (app, store, _mailer) = build_test_app();
    let student = create_and_login(app.clone(), &store, "joined@test.com", ROLE_STUDENT).await;
    let staff = create_and_login(app.clone(), &store, "staff@test.com", ROLE_STAFF).await;

    create_batch(app.clone(), &student).await;

    let response = get_auth(app, "/api/v1/batches", &staff).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let batches = json.as_array().unwrap();
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0]["student_name"], "Test student");
    assert_eq!(batches[0]["student_block"], "A");
}

// ---------------------------------------------------------------------------
// Status lifecycle
// ---------------------------------------------------------------------------

/// Walking the full lifecycle stamps each milestone timestamp exactly once.
#[tokio::test]
async fn full_lifecycle_stamps_timestamps() {
    let (app, store, _mailer) = build_test_app();
    let student = create_and_login(app.clone(), &store, "cycle@test.com", ROLE_STUDENT).await;
    let staff = create_and_login(app.clone(), &store, "staff@test.com", ROLE_STAFF).await;

    let batch = create_batch(app.clone(), &student).await;
    let id = batch["id"].as_i64().unwrap();

    let response = set_status(app.clone(), &staff, id, "dropped_off", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "dropped_off");
    assert!(json["dropped_off_at"].is_string());
    assert!(json["ready_at"].is_null());

    let response = set_status(app.clone(), &staff, id, "washing", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = set_status(app.clone(), &staff, id, "ready_for_pickup", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["ready_at"].is_string());
    assert!(json["picked_up_at"].is_null());

    let response = set_status(app.clone(), &staff, id, "picked_up", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "picked_up");
    // Earlier milestones survive later transitions.
    assert!(json["dropped_off_at"].is_string());
    assert!(json["ready_at"].is_string());
    assert!(json["picked_up_at"].is_string());
}

/// Skipping a lifecycle step is rejected with 409 INVALID_TRANSITION and
/// leaves the batch untouched.
#[tokio::test]
async fn skipping_a_step_returns_409() {
    let (app, store, _mailer) = build_test_app();
    let student = create_and_login(app.clone(), &store, "skip@test.com", ROLE_STUDENT).await;
    let staff = create_and_login(app.clone(), &store, "staff@test.com", ROLE_STAFF).await;

    let batch = create_batch(app.clone(), &student).await;
    let id = batch["id"].as_i64().unwrap();

    let response = set_status(app.clone(), &staff, id, "washing", None).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_TRANSITION");

    // The batch is still scheduled.
    let response = get_auth(app, &format!("/api/v1/batches/{id}"), &student).await;
    let json = body_json(response).await;
    assert_eq!(json["status"], "scheduled");
}

/// Moving backwards is rejected too.
#[tokio::test]
async fn backwards_transition_returns_409() {
    let (app, store, _mailer) = build_test_app();
    let student = create_and_login(app.clone(), &store, "back@test.com", ROLE_STUDENT).await;
    let staff = create_and_login(app.clone(), &store, "staff@test.com", ROLE_STAFF).await;

    let batch = create_batch(app.clone(), &student).await;
    let id = batch["id"].as_i64().unwrap();

    set_status(app.clone(), &staff, id, "dropped_off", None).await;
    let response = set_status(app, &staff, id, "scheduled", None).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

/// `picked_up` is terminal: no further updates, not even a re-apply.
#[tokio::test]
async fn picked_up_is_terminal() {
    let (app, store, _mailer) = build_test_app();
    let student = create_and_login(app.clone(), &store, "done@test.com", ROLE_STUDENT).await;
    let staff = create_and_login(app.clone(), &store, "staff@test.com", ROLE_STAFF).await;

    let batch = create_batch(app.clone(), &student).await;
    let id = batch["id"].as_i64().unwrap();

    for status in ["dropped_off", "washing", "ready_for_pickup", "picked_up"] {
        let response = set_status(app.clone(), &staff, id, status, None).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = set_status(app, &staff, id, "picked_up", None).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

/// Re-applying the current (non-terminal) status is an allowed no-op,
/// and does not send a second pickup notification.
#[tokio::test]
async fn status_reapply_is_idempotent() {
    let (app, store, mailer) = build_test_app();
    let student = create_and_login(app.clone(), &store, "idem@test.com", ROLE_STUDENT).await;
    let staff = create_and_login(app.clone(), &store, "staff@test.com", ROLE_STAFF).await;

    let batch = create_batch(app.clone(), &student).await;
    let id = batch["id"].as_i64().unwrap();

    for status in ["dropped_off", "washing", "ready_for_pickup"] {
        set_status(app.clone(), &staff, id, status, None).await;
    }
    assert_eq!(mailer.messages().len(), 1);

    let response = set_status(app, &staff, id, "ready_for_pickup", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(mailer.messages().len(), 1, "re-apply must not re-send the email");
}

/// Students cannot drive the lifecycle.
#[tokio::test]
async fn student_cannot_update_status() {
    let (app, store, _mailer) = build_test_app();
    let student = create_and_login(app.clone(), &store, "pushy@test.com", ROLE_STUDENT).await;

    let batch = create_batch(app.clone(), &student).await;
    let id = batch["id"].as_i64().unwrap();

    let response = set_status(app, &student, id, "dropped_off", None).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// Updating a nonexistent batch returns 404.
#[tokio::test]
async fn update_missing_batch_returns_404() {
    let (app, store, _mailer) = build_test_app();
    let staff = create_and_login(app.clone(), &store, "staff@test.com", ROLE_STAFF).await;

    let response = set_status(app, &staff, 9999, "dropped_off", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Staff notes
// ---------------------------------------------------------------------------

/// A non-empty note replaces the staff notes; an empty note preserves them.
#[tokio::test]
async fn empty_note_preserves_existing_notes() {
    let (app, store, _mailer) = build_test_app();
    let student = create_and_login(app.clone(), &store, "notes@test.com", ROLE_STUDENT).await;
    let staff = create_and_login(app.clone(), &store, "staff@test.com", ROLE_STAFF).await;

    let batch = create_batch(app.clone(), &student).await;
    let id = batch["id"].as_i64().unwrap();

    let response = set_status(app.clone(), &staff, id, "dropped_off", Some("heavy load")).await;
    let json = body_json(response).await;
    assert_eq!(json["staff_notes"], "heavy load");

    let response = set_status(app, &staff, id, "washing", Some("   ")).await;
    let json = body_json(response).await;
    assert_eq!(json["staff_notes"], "heavy load");
}

// ---------------------------------------------------------------------------
// Pickup notification side effects
// ---------------------------------------------------------------------------

/// Reaching ready_for_pickup persists a notification, emails the student,
/// and marks the row sent.
#[tokio::test]
async fn ready_for_pickup_notifies_student() {
    let (app, store, mailer) = build_test_app();
    let student = create_and_login(app.clone(), &store, "notify@test.com", ROLE_STUDENT).await;
    let staff = create_and_login(app.clone(), &store, "staff@test.com", ROLE_STAFF).await;

    let batch = create_batch(app.clone(), &student).await;
    let id = batch["id"].as_i64().unwrap();
    let batch_number = batch["batch_number"].as_str().unwrap().to_string();

    for status in ["dropped_off", "washing", "ready_for_pickup"] {
        set_status(app.clone(), &staff, id, status, None).await;
    }

    // The email went to the student and mentions the batch number.
    let messages = mailer.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].to, "notify@test.com");
    assert!(messages[0].subject.contains(&batch_number));

    // The notification row is visible to the student and marked sent.
    let response = get_auth(app, "/api/v1/notifications", &student).await;
    let json = body_json(response).await;
    let notifications = json["data"].as_array().unwrap();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0]["channel"], "email");
    assert_eq!(notifications[0]["batch_id"], id);
    assert_eq!(notifications[0]["is_sent"], true);
    assert!(notifications[0]["sent_at"].is_string());
    assert_eq!(notifications[0]["is_read"], false);
}

/// When email delivery fails the status update still succeeds and the
/// notification row stays unsent.
#[tokio::test]
async fn delivery_failure_keeps_notification_unsent() {
    let (app, store, mailer) = build_test_app();
    let student = create_and_login(app.clone(), &store, "flaky@test.com", ROLE_STUDENT).await;
    let staff = create_and_login(app.clone(), &store, "staff@test.com", ROLE_STAFF).await;

    let batch = create_batch(app.clone(), &student).await;
    let id = batch["id"].as_i64().unwrap();

    mailer.set_delivery_failure(true);

    set_status(app.clone(), &staff, id, "dropped_off", None).await;
    set_status(app.clone(), &staff, id, "washing", None).await;
    let response = set_status(app.clone(), &staff, id, "ready_for_pickup", None).await;

    // The lifecycle change itself must not fail.
    assert_eq!(response.status(), StatusCode::OK);

    let response = get_auth(app, "/api/v1/notifications", &student).await;
    let json = body_json(response).await;
    let notifications = json["data"].as_array().unwrap();
    assert_eq!(notifications.len(), 1, "the row is persisted before delivery");
    assert_eq!(notifications[0]["is_sent"], false);
    assert!(notifications[0]["sent_at"].is_null());
}

/// Students who opted out of email get the notification row but no email.
#[tokio::test]
async fn email_opt_out_skips_delivery() {
    let (app, store, mailer) = build_test_app();
    let student = create_and_login(app.clone(), &store, "optout@test.com", ROLE_STUDENT).await;
    let staff = create_and_login(app.clone(), &store, "staff@test.com", ROLE_STAFF).await;

    let body = serde_json::json!({ "email_notifications": false });
    let response = put_json_auth(app.clone(), "/api/v1/profile", body, &student).await;
    assert_eq!(response.status(), StatusCode::OK);

    let batch = create_batch(app.clone(), &student).await;
    let id = batch["id"].as_i64().unwrap();
    for status in ["dropped_off", "washing", "ready_for_pickup"] {
        set_status(app.clone(), &staff, id, status, None).await;
    }

    assert!(mailer.messages().is_empty(), "opted-out students get no email");

    let response = get_auth(app, "/api/v1/notifications", &student).await;
    let json = body_json(response).await;
    let notifications = json["data"].as_array().unwrap();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0]["is_sent"], false);
}
