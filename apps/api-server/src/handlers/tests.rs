use std::sync::Arc;

use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use serde_json::{Value, json};

use devconnect_core::domain::User;
use devconnect_infra::{JwtConfig, JwtTokenService};

use super::configure_routes;
use crate::middleware::error::json_error_handler;
use crate::state::AppState;

macro_rules! test_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state.clone()))
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .configure(configure_routes),
        )
        .await
    };
}

fn test_state() -> AppState {
    AppState::in_memory(Arc::new(JwtTokenService::new(JwtConfig {
        secret: "handler-test-secret".to_string(),
        expiration_hours: 1,
        issuer: "devconnect-test".to_string(),
    })))
}

/// Store a user directly and return it with a ready-to-send auth header.
async fn member(state: &AppState, name: &str, email: &str) -> (User, String) {
    let user = state
        .users
        .save(User::new(name.to_string(), email.to_string(), "unused".to_string()))
        .await
        .unwrap();
    let token = state.tokens.generate_token(&user).unwrap();
    (user, format!("Bearer {token}"))
}

fn post_body(text: &str) -> Value {
    json!({ "text": text })
}

fn profile_body(handle: &str) -> Value {
    json!({
        "handle": handle,
        "status": "Developer",
        "skillset": "rust, sql ,  actix",
        "company": "Acme",
        "twitter": "twitter.com/someone"
    })
}

#[actix_web::test]
async fn test_health() {
    let app = test_app!(test_state());
    let req = test::TestRequest::get().uri("/api/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "ok");
}

#[actix_web::test]
async fn test_register_login_current() {
    let state = test_state();
    let app = test_app!(state);

    let registration = json!({
        "name": "Grace Hopper",
        "email": "grace@example.com",
        "password": "cobol1959",
        "confirm_password": "cobol1959"
    });
    let req = test::TestRequest::post()
        .uri("/api/users/register")
        .set_json(&registration)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let user: Value = test::read_body_json(resp).await;
    assert_eq!(user["name"], "Grace Hopper");
    assert!(user["avatar"].as_str().unwrap().starts_with("https://www.gravatar.com/avatar/"));
    assert!(user.get("password_hash").is_none());

    let req = test::TestRequest::post()
        .uri("/api/users/register")
        .set_json(&registration)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["email"], "Email already exists");

    let req = test::TestRequest::post()
        .uri("/api/users/login")
        .set_json(json!({ "email": "grace@example.com", "password": "wrong-one" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["password"], "Password incorrect");

    let req = test::TestRequest::post()
        .uri("/api/users/login")
        .set_json(json!({ "email": "nobody@example.com", "password": "whatever" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["email"], "User not found");

    let req = test::TestRequest::post()
        .uri("/api/users/login")
        .set_json(json!({ "email": "grace@example.com", "password": "cobol1959" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    let token = body["token"].as_str().unwrap().to_string();
    assert!(token.starts_with("Bearer "));

    let req = test::TestRequest::get()
        .uri("/api/users/current")
        .insert_header((header::AUTHORIZATION, token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["email"], "grace@example.com");
}

#[actix_web::test]
async fn test_register_reports_every_failing_field() {
    let app = test_app!(test_state());
    let req = test::TestRequest::post()
        .uri("/api/users/register")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    let keys: Vec<&str> = body.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["confirm_password", "email", "name", "password"]);
}

#[actix_web::test]
async fn test_malformed_body_is_bad_request() {
    let state = test_state();
    let (_, auth) = member(&state, "Ada", "ada@example.com").await;
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .insert_header((header::AUTHORIZATION, auth))
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body.get("body").is_some());
}

#[actix_web::test]
async fn test_protected_routes_need_a_live_account() {
    let state = test_state();
    let (user, auth) = member(&state, "Ada", "ada@example.com").await;
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .set_json(post_body("Hello from nowhere"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    state.users.delete(user.id).await.unwrap();
    let req = test::TestRequest::get()
        .uri("/api/users/current")
        .insert_header((header::AUTHORIZATION, auth))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_post_text_boundaries() {
    let state = test_state();
    let (_, auth) = member(&state, "Ada", "ada@example.com").await;
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .insert_header((header::AUTHORIZATION, auth.clone()))
        .set_json(post_body("too short"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["text"], "Post must be between 10 and 5000 characters");

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .insert_header((header::AUTHORIZATION, auth))
        .set_json(post_body("just right"))
        .to_request();
    let post: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(post["text"], "just right");
    assert_eq!(post["name"], "Ada");
}

#[actix_web::test]
async fn test_likes_are_unique_per_user() {
    let state = test_state();
    let (_, author) = member(&state, "Ada", "ada@example.com").await;
    let (_, fan) = member(&state, "Bob", "bob@example.com").await;
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .insert_header((header::AUTHORIZATION, author.clone()))
        .set_json(post_body("A post worth liking"))
        .to_request();
    let post: Value = test::call_and_read_body_json(&app, req).await;
    let id = post["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri(&format!("/api/posts/like/{id}"))
        .insert_header((header::AUTHORIZATION, fan.clone()))
        .to_request();
    let liked: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(liked["likes"].as_array().unwrap().len(), 1);

    let req = test::TestRequest::post()
        .uri(&format!("/api/posts/like/{id}"))
        .insert_header((header::AUTHORIZATION, fan))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body.get("alreadyLiked").is_some());

    let req = test::TestRequest::post()
        .uri(&format!("/api/posts/unlike/{id}"))
        .insert_header((header::AUTHORIZATION, author))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body.get("notLiked").is_some());

    let req = test::TestRequest::get().uri(&format!("/api/posts/{id}")).to_request();
    let stored: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(stored["likes"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_only_the_author_deletes_a_post() {
    let state = test_state();
    let (_, author) = member(&state, "Ada", "ada@example.com").await;
    let (_, other) = member(&state, "Bob", "bob@example.com").await;
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .insert_header((header::AUTHORIZATION, author.clone()))
        .set_json(post_body("Mine and mine alone"))
        .to_request();
    let post: Value = test::call_and_read_body_json(&app, req).await;
    let uri = format!("/api/posts/{}", post["id"].as_str().unwrap());

    let req = test::TestRequest::delete()
        .uri(&uri)
        .insert_header((header::AUTHORIZATION, other))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["notAuthorized"], "User not authorized");

    let req = test::TestRequest::get().uri(&uri).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::delete()
        .uri(&uri)
        .insert_header((header::AUTHORIZATION, author))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);

    let req = test::TestRequest::get().uri(&uri).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["postNotFound"], "No post found with that ID");
}

#[actix_web::test]
async fn test_unparseable_post_id_is_not_found() {
    let app = test_app!(test_state());
    let req = test::TestRequest::get().uri("/api/posts/not-a-uuid").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_missing_post_is_not_found_for_likes_and_comments() {
    let state = test_state();
    let (_, auth) = member(&state, "Ada", "ada@example.com").await;
    let app = test_app!(state);
    let id = uuid::Uuid::new_v4();

    let requests = [
        test::TestRequest::post()
            .uri(&format!("/api/posts/comment/{id}"))
            .insert_header((header::AUTHORIZATION, auth.clone()))
            .set_json(post_body("A comment for nobody"))
            .to_request(),
        test::TestRequest::post()
            .uri(&format!("/api/posts/like/{id}"))
            .insert_header((header::AUTHORIZATION, auth.clone()))
            .to_request(),
        test::TestRequest::post()
            .uri(&format!("/api/posts/unlike/{id}"))
            .insert_header((header::AUTHORIZATION, auth))
            .to_request(),
    ];

    for req in requests {
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["postNotFound"], "No post found with that ID");
    }
}

#[actix_web::test]
async fn test_comment_add_and_remove() {
    let state = test_state();
    let (_, auth) = member(&state, "Ada", "ada@example.com").await;
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .insert_header((header::AUTHORIZATION, auth.clone()))
        .set_json(post_body("Comment on this one"))
        .to_request();
    let post: Value = test::call_and_read_body_json(&app, req).await;
    let id = post["id"].as_str().unwrap().to_string();

    for text in ["First comment here", "Second comment here"] {
        let req = test::TestRequest::post()
            .uri(&format!("/api/posts/comment/{id}"))
            .insert_header((header::AUTHORIZATION, auth.clone()))
            .set_json(post_body(text))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }

    let req = test::TestRequest::delete()
        .uri(&format!("/api/posts/comment/{id}/{}", uuid::Uuid::new_v4()))
        .insert_header((header::AUTHORIZATION, auth.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["commentNotExists"], "Comment does not exist");

    let req = test::TestRequest::get().uri(&format!("/api/posts/{id}")).to_request();
    let stored: Value = test::call_and_read_body_json(&app, req).await;
    let comments = stored["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0]["text"], "Second comment here");

    let newest = comments[0]["id"].as_str().unwrap().to_string();
    let req = test::TestRequest::delete()
        .uri(&format!("/api/posts/comment/{id}/{newest}"))
        .insert_header((header::AUTHORIZATION, auth))
        .to_request();
    let post: Value = test::call_and_read_body_json(&app, req).await;
    let comments = post["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["text"], "First comment here");
}

#[actix_web::test]
async fn test_profile_upsert_and_lookup() {
    let state = test_state();
    let (user, auth) = member(&state, "Ada", "ada@example.com").await;
    let (_, rival) = member(&state, "Bob", "bob@example.com").await;
    let app = test_app!(state);

    let req = test::TestRequest::get()
        .uri("/api/profile")
        .insert_header((header::AUTHORIZATION, auth.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert!(body.get("noProfile").is_some());

    let req = test::TestRequest::post()
        .uri("/api/profile")
        .insert_header((header::AUTHORIZATION, auth.clone()))
        .set_json(profile_body("ada"))
        .to_request();
    let profile: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(profile["skillset"], json!(["rust", "sql", "actix"]));
    assert_eq!(profile["user"]["name"], "Ada");

    let req = test::TestRequest::post()
        .uri("/api/profile")
        .insert_header((header::AUTHORIZATION, rival))
        .set_json(profile_body("ada"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["handle"], "That handle already exists");

    // Update without company keeps the stored one.
    let req = test::TestRequest::post()
        .uri("/api/profile")
        .insert_header((header::AUTHORIZATION, auth))
        .set_json(json!({ "handle": "ada", "status": "Lead", "skillset": "rust" }))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["id"], profile["id"]);
    assert_eq!(updated["status"], "Lead");
    assert_eq!(updated["company"], "Acme");

    let req = test::TestRequest::get().uri("/api/profile/handle/ada").to_request();
    let by_handle: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(by_handle["status"], "Lead");

    let req = test::TestRequest::get()
        .uri(&format!("/api/profile/user/{}", user.id))
        .to_request();
    let by_user: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(by_user["handle"], "ada");

    let req = test::TestRequest::get().uri("/api/profile/all").to_request();
    let all: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(all.as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_experience_entries() {
    let state = test_state();
    let (_, auth) = member(&state, "Ada", "ada@example.com").await;
    let app = test_app!(state);

    let experience = json!({ "title": "Engineer", "company": "Acme", "from": "2019-01-01" });
    let req = test::TestRequest::post()
        .uri("/api/profile/experience")
        .insert_header((header::AUTHORIZATION, auth.clone()))
        .set_json(&experience)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::post()
        .uri("/api/profile")
        .insert_header((header::AUTHORIZATION, auth.clone()))
        .set_json(profile_body("ada"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/api/profile/experience")
        .insert_header((header::AUTHORIZATION, auth.clone()))
        .set_json(json!({ "company": "Acme" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["title"], "Job title field is required");
    assert_eq!(body["from"], "From date field is required");

    let mut profile = Value::Null;
    for title in ["Intern", "Engineer", "Lead"] {
        let req = test::TestRequest::post()
            .uri("/api/profile/experience")
            .insert_header((header::AUTHORIZATION, auth.clone()))
            .set_json(json!({ "title": title, "company": "Acme", "from": "2019-01-01" }))
            .to_request();
        profile = test::call_and_read_body_json(&app, req).await;
    }
    let titles = |p: &Value| -> Vec<String> {
        p["experience"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["title"].as_str().unwrap().to_string())
            .collect()
    };
    assert_eq!(titles(&profile), vec!["Lead", "Engineer", "Intern"]);

    let middle = profile["experience"][1]["id"].as_str().unwrap().to_string();
    let req = test::TestRequest::delete()
        .uri(&format!("/api/profile/experience/{middle}"))
        .insert_header((header::AUTHORIZATION, auth.clone()))
        .to_request();
    let profile: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(titles(&profile), vec!["Lead", "Intern"]);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/profile/experience/{middle}"))
        .insert_header((header::AUTHORIZATION, auth))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert!(body.get("experienceNotFound").is_some());
}

#[actix_web::test]
async fn test_education_entries() {
    let state = test_state();
    let (_, auth) = member(&state, "Ada", "ada@example.com").await;
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/profile")
        .insert_header((header::AUTHORIZATION, auth.clone()))
        .set_json(profile_body("ada"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/api/profile/education")
        .insert_header((header::AUTHORIZATION, auth.clone()))
        .set_json(json!({
            "school": "Cambridge",
            "degree": "BA",
            "field_of_study": "Mathematics",
            "from": "1833-10-01",
            "current": "on"
        }))
        .to_request();
    let profile: Value = test::call_and_read_body_json(&app, req).await;
    let entry = &profile["education"][0];
    assert_eq!(entry["school"], "Cambridge");
    assert_eq!(entry["current"], true);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/profile/education/{}", entry["id"].as_str().unwrap()))
        .insert_header((header::AUTHORIZATION, auth))
        .to_request();
    let profile: Value = test::call_and_read_body_json(&app, req).await;
    assert!(profile["education"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_delete_account_removes_everything() {
    let state = test_state();
    let (user, auth) = member(&state, "Ada", "ada@example.com").await;
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/profile")
        .insert_header((header::AUTHORIZATION, auth.clone()))
        .set_json(profile_body("ada"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .insert_header((header::AUTHORIZATION, auth.clone()))
        .set_json(post_body("Leaving soon, bye all"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::delete()
        .uri("/api/profile")
        .insert_header((header::AUTHORIZATION, auth.clone()))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);

    assert!(state.users.find_by_id(user.id).await.unwrap().is_none());
    assert!(state.posts.find_all().await.unwrap().is_empty());
    assert!(state.profiles.find_all().await.unwrap().is_empty());

    let req = test::TestRequest::get()
        .uri("/api/profile")
        .insert_header((header::AUTHORIZATION, auth))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);
}
