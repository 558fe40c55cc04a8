//! HTTP-level integration tests for weekly schedules, date overrides,
//! and schedule templates.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, create_and_login, delete_auth, get_auth, post_json_auth,
    put_json_auth,
};
use washline_core::roles::{ROLE_ADMIN, ROLE_STAFF, ROLE_STUDENT};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn schedule_body(block: &str, floor: i32, day: &str) -> serde_json::Value {
    serde_json::json!({
        "block": block,
        "floor_number": floor,
        "scheduled_day": day,
        "pickup_time": "18:00",
        "dropoff_start_time": "07:00",
        "dropoff_end_time": "09:00"
    })
}

// ---------------------------------------------------------------------------
// Weekly schedules
// ---------------------------------------------------------------------------

/// Admin creates a schedule; `HH:MM` times are normalized to `HH:MM:SS`.
#[tokio::test]
async fn admin_creates_schedule_with_short_times() {
    let (app, store, _mailer) = build_test_app();
    let admin = create_and_login(app.clone(), &store, "admin@test.com", ROLE_ADMIN).await;

    let response =
        post_json_auth(app, "/api/v1/schedules", schedule_body("A", 1, "monday"), &admin).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["block"], "A");
    assert_eq!(json["scheduled_day"], "monday");
    assert_eq!(json["pickup_time"], "18:00:00");
    assert_eq!(json["dropoff_start_time"], "07:00:00");
    // Capacity falls back to the default when omitted.
    assert_eq!(json["max_batches_per_day"], 50);
    assert_eq!(json["is_active"], true);
}

/// Schedule mutations are admin-only; staff and students get 403.
#[tokio::test]
async fn schedule_mutations_require_admin() {
    let (app, store, _mailer) = build_test_app();
    let staff = create_and_login(app.clone(), &store, "staff@test.com", ROLE_STAFF).await;
    let student = create_and_login(app.clone(), &store, "student@test.com", ROLE_STUDENT).await;

    let body = schedule_body("A", 1, "monday");
    let response = post_json_auth(app.clone(), "/api/v1/schedules", body.clone(), &staff).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = post_json_auth(app, "/api/v1/schedules", body, &student).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// An unknown weekday is rejected with 400.
#[tokio::test]
async fn invalid_day_returns_400() {
    let (app, store, _mailer) = build_test_app();
    let admin = create_and_login(app.clone(), &store, "admin@test.com", ROLE_ADMIN).await;

    let response =
        post_json_auth(app, "/api/v1/schedules", schedule_body("A", 1, "someday"), &admin).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// A malformed time string is rejected with 400.
#[tokio::test]
async fn invalid_time_returns_400() {
    let (app, store, _mailer) = build_test_app();
    let admin = create_and_login(app.clone(), &store, "admin@test.com", ROLE_ADMIN).await;

    let mut body = schedule_body("A", 1, "monday");
    body["pickup_time"] = serde_json::json!("6 pm");
    let response = post_json_auth(app, "/api/v1/schedules", body, &admin).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Any authenticated user can list schedules; `block` + `floor` filter.
#[tokio::test]
async fn students_can_list_and_filter_schedules() {
    let (app, store, _mailer) = build_test_app();
    let admin = create_and_login(app.clone(), &store, "admin@test.com", ROLE_ADMIN).await;
    let student = create_and_login(app.clone(), &store, "student@test.com", ROLE_STUDENT).await;

    post_json_auth(app.clone(), "/api/v1/schedules", schedule_body("A", 1, "monday"), &admin).await;
    post_json_auth(app.clone(), "/api/v1/schedules", schedule_body("B", 2, "tuesday"), &admin)
        .await;

    let response = get_auth(app.clone(), "/api/v1/schedules", &student).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);

    let response = get_auth(app, "/api/v1/schedules?block=A&floor=1", &student).await;
    let json = body_json(response).await;
    let filtered = json.as_array().unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0]["block"], "A");
}

/// Partial update: toggling `is_active` off and back on leaves every
/// other field unchanged.
#[tokio::test]
async fn update_toggles_is_active() {
    let (app, store, _mailer) = build_test_app();
    let admin = create_and_login(app.clone(), &store, "admin@test.com", ROLE_ADMIN).await;

    let response =
        post_json_auth(app.clone(), "/api/v1/schedules", schedule_body("A", 1, "monday"), &admin)
            .await;
    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();

    let body = serde_json::json!({ "is_active": false });
    let response =
        put_json_auth(app.clone(), &format!("/api/v1/schedules/{id}"), body, &admin).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["is_active"], false);
    assert_eq!(json["scheduled_day"], "monday");
    assert_eq!(json["pickup_time"], "18:00:00");

    let body = serde_json::json!({ "is_active": true });
    let response = put_json_auth(app, &format!("/api/v1/schedules/{id}"), body, &admin).await;

    assert_eq!(response.status(), StatusCode::OK);
    let mut restored = body_json(response).await;
    let mut original = created.clone();
    // Updates stamp updated_at/updated_by; everything else must round-trip.
    for audit_field in ["updated_at", "updated_by"] {
        restored.as_object_mut().unwrap().remove(audit_field);
        original.as_object_mut().unwrap().remove(audit_field);
    }
    assert_eq!(restored, original);
}

/// Delete returns 204; deleting again returns 404.
#[tokio::test]
async fn delete_schedule() {
    let (app, store, _mailer) = build_test_app();
    let admin = create_and_login(app.clone(), &store, "admin@test.com", ROLE_ADMIN).await;

    let response =
        post_json_auth(app.clone(), "/api/v1/schedules", schedule_body("A", 1, "friday"), &admin)
            .await;
    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();

    let response = delete_auth(app.clone(), &format!("/api/v1/schedules/{id}"), &admin).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = delete_auth(app, &format!("/api/v1/schedules/{id}"), &admin).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Date schedules
// ---------------------------------------------------------------------------

/// Admin creates a holiday override for a specific date.
#[tokio::test]
async fn create_holiday_date_schedule() {
    let (app, store, _mailer) = build_test_app();
    let admin = create_and_login(app.clone(), &store, "admin@test.com", ROLE_ADMIN).await;

    let body = serde_json::json!({
        "block": "A",
        "floor_number": 1,
        "schedule_date": "2026-12-25",
        "pickup_time": "18:00",
        "dropoff_start_time": "07:00",
        "dropoff_end_time": "09:00",
        "is_holiday": true,
        "holiday_name": "Christmas"
    });
    let response = post_json_auth(app, "/api/v1/date-schedules", body, &admin).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["schedule_date"], "2026-12-25");
    assert_eq!(json["is_holiday"], true);
    assert_eq!(json["holiday_name"], "Christmas");
}

/// `?upcoming=true` hides past dates.
#[tokio::test]
async fn upcoming_filter_hides_past_dates() {
    let (app, store, _mailer) = build_test_app();
    let admin = create_and_login(app.clone(), &store, "admin@test.com", ROLE_ADMIN).await;

    for (date, floor) in [("2020-01-01", 1), ("2099-01-01", 2)] {
        let body = serde_json::json!({
            "block": "A",
            "floor_number": floor,
            "schedule_date": date,
            "pickup_time": "18:00",
            "dropoff_start_time": "07:00",
            "dropoff_end_time": "09:00"
        });
        let response = post_json_auth(app.clone(), "/api/v1/date-schedules", body, &admin).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get_auth(app.clone(), "/api/v1/date-schedules", &admin).await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);

    let response = get_auth(app, "/api/v1/date-schedules?upcoming=true", &admin).await;
    let json = body_json(response).await;
    let upcoming = json.as_array().unwrap();
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0]["schedule_date"], "2099-01-01");
}

// ---------------------------------------------------------------------------
// Templates
// ---------------------------------------------------------------------------

/// Create a template, add slots, and apply it to a floor. Applying
/// replaces that floor's existing weekly rows.
#[tokio::test]
async fn apply_template_replaces_weekly_rows() {
    let (app, store, _mailer) = build_test_app();
    let admin = create_and_login(app.clone(), &store, "admin@test.com", ROLE_ADMIN).await;

    // An existing row for the target floor that should be replaced.
    post_json_auth(app.clone(), "/api/v1/schedules", schedule_body("C", 3, "sunday"), &admin)
        .await;

    let body = serde_json::json!({ "name": "Standard Weekly", "is_default": true });
    let response = post_json_auth(app.clone(), "/api/v1/templates", body, &admin).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let template = body_json(response).await;
    let template_id = template["id"].as_i64().unwrap();

    for day in ["monday", "thursday"] {
        let body = serde_json::json!({
            "scheduled_day": day,
            "pickup_time": "18:00",
            "dropoff_start_time": "07:00",
            "dropoff_end_time": "09:00"
        });
        let response = post_json_auth(
            app.clone(),
            &format!("/api/v1/templates/{template_id}/slots"),
            body,
            &admin,
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let body = serde_json::json!({ "block": "C", "floor_number": 3 });
    let response = post_json_auth(
        app.clone(),
        &format!("/api/v1/templates/{template_id}/apply"),
        body,
        &admin,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["schedules_created"], 2);

    // The sunday row is gone; only the template's days remain.
    let response = get_auth(app, "/api/v1/schedules?block=C&floor=3", &admin).await;
    let json = body_json(response).await;
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    let days: Vec<&str> = rows.iter().map(|r| r["scheduled_day"].as_str().unwrap()).collect();
    assert!(days.contains(&"monday"));
    assert!(days.contains(&"thursday"));
}

/// Applying a nonexistent template returns 404.
#[tokio::test]
async fn apply_missing_template_returns_404() {
    let (app, store, _mailer) = build_test_app();
    let admin = create_and_login(app.clone(), &store, "admin@test.com", ROLE_ADMIN).await;

    let body = serde_json::json!({ "block": "A", "floor_number": 1 });
    let response = post_json_auth(app, "/api/v1/templates/9999/apply", body, &admin).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Duplicate template names conflict.
#[tokio::test]
async fn duplicate_template_name_returns_409() {
    let (app, store, _mailer) = build_test_app();
    let admin = create_and_login(app.clone(), &store, "admin@test.com", ROLE_ADMIN).await;

    let body = serde_json::json!({ "name": "Weekend Only" });
    let response = post_json_auth(app.clone(), "/api/v1/templates", body.clone(), &admin).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json_auth(app, "/api/v1/templates", body, &admin).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

/// Schedule mutations land in the activity log for auditing.
#[tokio::test]
async fn schedule_mutations_are_audited() {
    let (app, store, _mailer) = build_test_app();
    let admin = create_and_login(app.clone(), &store, "admin@test.com", ROLE_ADMIN).await;

    post_json_auth(app.clone(), "/api/v1/schedules", schedule_body("A", 1, "monday"), &admin)
        .await;

    let response = get_auth(app, "/api/v1/activity", &admin).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let entries = json.as_array().unwrap();
    assert!(
        entries.iter().any(|e| e["activity_type"] == "schedule_update"),
        "schedule creation should be recorded in the activity log"
    );
}
