//! End-to-end API flow over an in-memory SQLite database
//!
//! Drives the real route wiring: signup, verification, team and herd
//! management, census recording, and offline sync.

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use grazelog_rs::auth::AuthSystem;
use grazelog_rs::config::{AuthConfig, Config, DatabaseConfig};
use grazelog_rs::server::AppState;
use grazelog_rs::server::routes;
use grazelog_rs::storage::StorageLayer;
use serde_json::json;
use std::sync::Arc;

const TEST_SECRET: &str = "api-flow-secret-api-flow-secret-api-flow!";

async fn test_state() -> web::Data<AppState> {
    let config = Config {
        auth: AuthConfig {
            jwt_secret: TEST_SECRET.to_string(),
            jwt_expiration: 3600,
            code_expiration: 300,
        },
        // Single pooled connection so every query shares the in-memory DB
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            auto_migrate: true,
        },
        ..Config::default()
    };

    let storage = Arc::new(StorageLayer::new(&config.database).await.expect("storage"));
    let auth = AuthSystem::new(&config.auth, Arc::clone(&storage));
    web::Data::new(AppState::new(config, auth, storage))
}

macro_rules! api_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data($state.clone())
                .configure(routes::auth::configure_routes)
                .configure(routes::users::configure_routes)
                .configure(routes::teams::configure_routes)
                .configure(routes::memberships::configure_routes)
                .configure(routes::herds::configure_routes)
                .configure(routes::plots::configure_routes)
                .configure(routes::cow_censuses::configure_routes)
                .configure(routes::dung_censuses::configure_routes)
                .configure(routes::forage_quality_censuses::configure_routes)
                .configure(routes::forage_quantity_censuses::configure_routes)
                .configure(routes::sync::configure_routes),
        )
        .await
    };
}

fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}

#[actix_web::test]
async fn signup_verify_and_survey_flow() {
    let state = test_state().await;
    let app = api_app!(state);

    // Sign up: account starts unverified, password never serialized
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/auth/signup")
            .set_json(json!({
                "email": "rancher@flow.example",
                "password": "correct horse battery staple",
                "name": "Flow Rancher",
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let signup: serde_json::Value = test::read_body_json(resp).await;
    let unverified_token = signup["token"].as_str().unwrap().to_string();
    assert_eq!(signup["user"]["role"], "UNVERIFIED");
    assert!(signup["user"].get("password_hash").is_none());

    // Unverified accounts cannot create teams
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/teams")
            .insert_header(bearer(&unverified_token))
            .set_json(json!({
                "name": "Flow Ranch",
                "acre_size": 640.0,
                "address": "1 Pasture Rd",
                "yrs_ranch": 10,
                "yrs_hol_mang": 4,
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    // Verify with a freshly minted code
    let code = state
        .storage
        .database
        .create_verification_code("rancher@flow.example", 300)
        .await
        .unwrap();
    let resp = test::call_service(
        &app,
        test::TestRequest::patch()
            .uri("/auth/verify")
            .set_json(json!({ "email": "rancher@flow.example", "code": code }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let verify: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(verify["user"]["role"], "USER");
    let token = verify["token"].as_str().unwrap().to_string();
    let user_id = verify["user"]["id"].as_str().unwrap().to_string();

    // Team creation now succeeds and carries a generated join code
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/teams")
            .insert_header(bearer(&token))
            .set_json(json!({
                "name": "Flow Ranch",
                "acre_size": 640.0,
                "address": "1 Pasture Rd",
                "yrs_ranch": 10,
                "yrs_hol_mang": 4,
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let team: serde_json::Value = test::read_body_json(resp).await;
    let team_id = team["id"].as_str().unwrap().to_string();
    assert_eq!(team["code"].as_str().unwrap().len(), 8);

    // Join own team as owner
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/memberships")
            .insert_header(bearer(&token))
            .set_json(json!({
                "team_id": team_id,
                "user_id": user_id,
                "role": "OWNER",
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    // Team is readable through the membership-gated route
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/teams/{}", team_id))
            .insert_header(bearer(&token))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    // Token introspection returns the account
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/auth/jwt")
            .insert_header(bearer(&token))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let jwt_body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(jwt_body["user"]["email"], "rancher@flow.example");

    // Register a herd and record a census with an attached photo
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/herds")
            .insert_header(bearer(&token))
            .set_json(json!({
                "team_id": team_id,
                "breed": "Angus",
                "count": 40,
                "breeding_date": "2024-03-01T00:00:00Z",
                "calving_date": "2024-12-01T00:00:00Z",
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let herd: serde_json::Value = test::read_body_json(resp).await;
    let herd_id = herd["id"].as_str().unwrap().to_string();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/cow-censuses")
            .insert_header(bearer(&token))
            .set_json(json!({
                "herd_id": herd_id,
                "bcs": 5.5,
                "notes": "looking healthy",
                "tag": "A-17",
                "photo": {
                    "full_url": "https://photos.flow.example/full.jpg",
                    "thumb_url": "https://photos.flow.example/thumb.jpg",
                },
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let census: serde_json::Value = test::read_body_json(resp).await;
    assert!(census["photo_id"].is_string());

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/cow-censuses?herd_id={}", herd_id))
            .insert_header(bearer(&token))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let list: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(list.as_array().unwrap().len(), 1);

    // Offline sync batch-creates queued censuses
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/sync")
            .insert_header(bearer(&token))
            .set_json(json!({
                "upserted": {
                    "cow_census_requests": [
                        { "herd_id": herd_id, "bcs": 4.0, "notes": "thin", "tag": "B-02" },
                        { "herd_id": herd_id, "bcs": 6.0, "notes": "", "tag": "B-03" },
                    ],
                },
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let synced: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(synced["cow_censuses"].as_array().unwrap().len(), 2);

    // Signin round trip
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/auth/signin")
            .set_json(json!({
                "email": "rancher@flow.example",
                "password": "correct horse battery staple",
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/auth/signin")
            .set_json(json!({
                "email": "rancher@flow.example",
                "password": "wrong password",
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // Owner deletes the team
    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/teams/{}", team_id))
            .insert_header(bearer(&token))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body["message"],
        format!("Successfully deleted document with id: {}", team_id)
    );

    // And it is gone
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/teams/{}", team_id))
            .insert_header(bearer(&token))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn user_routes_enforce_self_access() {
    let state = test_state().await;
    let app = api_app!(state);

    // Two verified accounts
    let mut ids = Vec::new();
    let mut tokens = Vec::new();
    for email in ["one@self.example", "two@self.example"] {
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/auth/signup")
                .set_json(json!({
                    "email": email,
                    "password": "a sufficiently long password",
                    "name": "Self Tester",
                }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let code = state
            .storage
            .database
            .create_verification_code(email, 300)
            .await
            .unwrap();
        let resp = test::call_service(
            &app,
            test::TestRequest::patch()
                .uri("/auth/verify")
                .set_json(json!({ "email": email, "code": code }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        ids.push(body["user"]["id"].as_str().unwrap().to_string());
        tokens.push(body["token"].as_str().unwrap().to_string());
    }

    // Own profile is readable
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/users/{}", ids[0]))
            .insert_header(bearer(&tokens[0]))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    // Someone else's is not
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/users/{}", ids[1]))
            .insert_header(bearer(&tokens[0]))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    // Self-update re-hashes the password and keeps signin working
    let resp = test::call_service(
        &app,
        test::TestRequest::patch()
            .uri(&format!("/users/{}", ids[0]))
            .insert_header(bearer(&tokens[0]))
            .set_json(json!({ "password": "an even longer replacement password" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/auth/signin")
            .set_json(json!({
                "email": "one@self.example",
                "password": "an even longer replacement password",
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
}
