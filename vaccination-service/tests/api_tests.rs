mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_country_crud_cycle() {
    let app = TestApp::spawn().await;
    let token = app.login_token("director1").await;

    // Create
    let response = app
        .post("/api/countries")
        .bearer_auth(&token)
        .json(&json!({ "name": "Ecuador", "iso_code": "EC" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: serde_json::Value = response.json().await.expect("Failed to parse response");
    let id = created["id"].as_str().expect("Created without id").to_string();
    assert_eq!(created["name"], "Ecuador");
    assert_eq!(created["iso_code"], "EC");

    // Get
    let response = app
        .get(&format!("/api/countries/{id}"))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
    let fetched: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(fetched, created);

    // List
    let response = app
        .get("/api/countries")
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
    let listed: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(listed.as_array().map(Vec::len), Some(1));

    // Update
    let response = app
        .put(&format!("/api/countries/{id}"))
        .bearer_auth(&token)
        .json(&json!({ "name": "República del Ecuador", "iso_code": "EC" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
    let updated: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(updated["name"], "República del Ecuador");
    assert_eq!(updated["id"], id.as_str());

    // Delete
    let response = app
        .delete(&format!("/api/countries/{id}"))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Gone
    let response = app
        .get(&format!("/api/countries/{id}"))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_country_validation_reports_every_field() {
    let app = TestApp::spawn().await;
    let token = app.login_token("admin").await;

    let response = app
        .post("/api/countries")
        .bearer_auth(&token)
        .json(&json!({ "name": " ", "iso_code": "ecuador" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Validation failed");
    let fields = body["data"].as_array().expect("Expected field error list");
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0]["field"], "name");
    assert_eq!(fields[1]["field"], "iso_code");
}

#[tokio::test]
async fn test_constraint_violation_passes_through_as_400() {
    let app = TestApp::spawn().await;
    let token = app.login_token("admin").await;

    let create = || {
        app.post("/api/countries")
            .bearer_auth(&token)
            .json(&json!({ "name": "Ecuador", "iso_code": "EC" }))
    };

    let response = create().send().await.expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::CREATED);

    // Second insert trips the store's uniqueness rule
    let response = create().send().await.expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Country code EC is already registered");
}

#[tokio::test]
async fn test_non_uuid_path_parameter_is_bad_request() {
    let app = TestApp::spawn().await;
    let token = app.login_token("admin").await;

    let response = app
        .get("/api/countries/42")
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "country id must be a UUID");
}

#[tokio::test]
async fn test_malformed_json_body_is_bad_request() {
    let app = TestApp::spawn().await;
    let token = app.login_token("admin").await;

    let response = app
        .post("/api/countries")
        .bearer_auth(&token)
        .header("Content-Type", "application/json")
        .body("{not json")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_child_create_and_fetch() {
    let app = TestApp::spawn().await;
    let token = app.login_token("juanperez").await;

    let response = app
        .post("/api/children")
        .bearer_auth(&token)
        .json(&json!({
            "first_name": "Ana",
            "last_name": "Perez",
            "birth_date": "2022-03-10",
            "gender": "F",
            "tutor_id": "7f8a6e7e-15b5-4d2b-9c7e-0a1b2c3d4e5f",
            "health_center_id": "0e7c1a22-93d4-4f7e-8a4e-6b5c4d3e2f1a"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let created: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(created["first_name"], "Ana");
    assert_eq!(created["birth_date"], "2022-03-10");
    assert_eq!(created["gender"], "F");

    let id = created["id"].as_str().expect("Created without id");
    let response = app
        .get(&format!("/api/children/{id}"))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_child_validation_collects_all_failures() {
    let app = TestApp::spawn().await;
    let token = app.login_token("juanperez").await;

    let response = app
        .post("/api/children")
        .bearer_auth(&token)
        .json(&json!({
            "first_name": "",
            "last_name": "Perez",
            "birth_date": "2999-01-01",
            "gender": "X",
            "tutor_id": "nope",
            "health_center_id": "0e7c1a22-93d4-4f7e-8a4e-6b5c4d3e2f1a"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Validation failed");
    let fields: Vec<&str> = body["data"]
        .as_array()
        .expect("Expected field error list")
        .iter()
        .map(|e| e["field"].as_str().expect("field name"))
        .collect();
    assert_eq!(fields, vec!["first_name", "gender", "tutor_id", "birth_date"]);
}

#[tokio::test]
async fn test_vaccination_records_authenticated_doctor() {
    let app = TestApp::spawn().await;
    let token = app.login_token("juanperez").await;

    let response = app
        .post("/api/vaccinations")
        .bearer_auth(&token)
        .json(&json!({
            "child_id": "7f8a6e7e-15b5-4d2b-9c7e-0a1b2c3d4e5f",
            "lot_id": "0e7c1a22-93d4-4f7e-8a4e-6b5c4d3e2f1a",
            "dose_number": 1
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let created: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        created["applied_by"],
        app.users["juanperez"].to_string().as_str()
    );
    assert!(created["applied_at"].is_string());
}

#[tokio::test]
async fn test_vaccination_denied_for_director() {
    let app = TestApp::spawn().await;

    // Directors manage the program but do not apply doses
    let token = app.login_token("director1").await;

    let response = app
        .post("/api/vaccinations")
        .bearer_auth(&token)
        .json(&json!({
            "child_id": "7f8a6e7e-15b5-4d2b-9c7e-0a1b2c3d4e5f",
            "lot_id": "0e7c1a22-93d4-4f7e-8a4e-6b5c4d3e2f1a",
            "dose_number": 1
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_appointment_lifecycle() {
    let app = TestApp::spawn().await;
    let token = app.login_token("juanperez").await;

    // Past schedule is rejected at validation
    let response = app
        .post("/api/appointments")
        .bearer_auth(&token)
        .json(&json!({
            "child_id": "7f8a6e7e-15b5-4d2b-9c7e-0a1b2c3d4e5f",
            "health_center_id": "0e7c1a22-93d4-4f7e-8a4e-6b5c4d3e2f1a",
            "scheduled_at": "2020-01-01T10:00:00Z"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // A future one is accepted and starts Pendiente
    let response = app
        .post("/api/appointments")
        .bearer_auth(&token)
        .json(&json!({
            "child_id": "7f8a6e7e-15b5-4d2b-9c7e-0a1b2c3d4e5f",
            "health_center_id": "0e7c1a22-93d4-4f7e-8a4e-6b5c4d3e2f1a",
            "scheduled_at": "2999-09-01T10:00:00Z"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(created["status"], "Pendiente");

    // Mark it attended
    let id = created["id"].as_str().expect("Created without id");
    let response = app
        .put(&format!("/api/appointments/{id}"))
        .bearer_auth(&token)
        .json(&json!({
            "child_id": "7f8a6e7e-15b5-4d2b-9c7e-0a1b2c3d4e5f",
            "health_center_id": "0e7c1a22-93d4-4f7e-8a4e-6b5c4d3e2f1a",
            "scheduled_at": "2999-09-01T10:00:00Z",
            "status": "Atendida"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
    let updated: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(updated["status"], "Atendida");
}

#[tokio::test]
async fn test_reads_open_to_authenticated_user_role() {
    let app = TestApp::spawn().await;
    let token = app.login_token("carla").await;

    for path in [
        "/api/countries",
        "/api/health-centers",
        "/api/vaccines",
        "/api/vaccine-lots",
        "/api/tutors",
        "/api/children",
        "/api/vaccinations",
        "/api/appointments",
        "/api/calendars",
    ] {
        let response = app
            .get(path)
            .bearer_auth(&token)
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), StatusCode::OK, "read of {path} failed");
    }

    // ...but the user role cannot write anywhere
    let response = app
        .post("/api/vaccines")
        .bearer_auth(&token)
        .json(&json!({ "name": "BCG", "disease": "Tuberculosis", "doses_required": 1 }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_calendar_entry_ranges() {
    let app = TestApp::spawn().await;
    let token = app.login_token("admin").await;

    let response = app
        .post("/api/calendars")
        .bearer_auth(&token)
        .json(&json!({
            "country_id": "7f8a6e7e-15b5-4d2b-9c7e-0a1b2c3d4e5f",
            "vaccine_id": "0e7c1a22-93d4-4f7e-8a4e-6b5c4d3e2f1a",
            "dose_number": 11,
            "recommended_age_months": 500
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let fields = body["data"].as_array().expect("Expected field error list");
    assert_eq!(fields.len(), 2);
}

#[tokio::test]
async fn test_tutor_email_validated() {
    let app = TestApp::spawn().await;
    let token = app.login_token("juanperez").await;

    let response = app
        .post("/api/tutors")
        .bearer_auth(&token)
        .json(&json!({
            "first_name": "Maria",
            "last_name": "Lopez",
            "document_id": "1712345678",
            "email": "not-an-email",
            "phone": "0991234567"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let fields = body["data"].as_array().expect("Expected field error list");
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0]["field"], "email");
}
