use std::collections::HashSet;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode},
};
use bank::{NewQuestion, Store};
use serde_json::{Value, json};
use server::{app, config::Config, state::AppState};
use tower::ServiceExt;

struct Fixture {
    app: Router,
    science: i64,
    art: i64,
    science_questions: Vec<i64>,
}

fn fixture() -> Fixture {
    let store = Store::open_in_memory().unwrap();
    let science = store.insert_category("Science").unwrap();
    let art = store.insert_category("Art").unwrap();

    let insert = |text: &str, category: i64| {
        store
            .insert_question(&NewQuestion {
                question: text.to_string(),
                answer: "answer".to_string(),
                difficulty: 3,
                category,
            })
            .unwrap()
    };

    let science_questions = vec![
        insert("What is the powerhouse of the cell?", science),
        insert("What planet is known as the Red Planet?", science),
        insert("What gas do plants absorb?", science),
    ];
    insert("Who painted Starry Night?", art);
    insert("Which artist cut off part of his ear?", art);

    let config = Config {
        questions_per_page: 2,
        ..Config::default()
    };

    Fixture {
        app: app(AppState::with_store(config, store)),
        science,
        art,
        science_questions,
    }
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let body = match body {
        Some(json) => Body::from(json.to_string()),
        None => Body::empty(),
    };

    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

#[tokio::test]
async fn test_categories() {
    let fixture = fixture();

    let (status, json) = send(&fixture.app, Method::GET, "/categories", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["categories"][fixture.science.to_string()], "Science");
    assert_eq!(json["categories"][fixture.art.to_string()], "Art");
}

#[tokio::test]
async fn test_paginated_questions() {
    let fixture = fixture();

    let (status, json) = send(&fixture.app, Method::GET, "/questions", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["questions"].as_array().unwrap().len(), 2);
    assert_eq!(json["total_questions"], 5);
    assert_eq!(json["current_category"], Value::Null);
    assert_eq!(json["categories"].as_object().unwrap().len(), 2);

    let (status, json) = send(&fixture.app, Method::GET, "/questions?page=3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["questions"].as_array().unwrap().len(), 1);

    let (status, json) = send(&fixture.app, Method::GET, "/questions?page=4", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["success"], false);

    let uri = format!("/questions?page={}", i64::MAX);
    let (status, json) = send(&fixture.app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["success"], false);

    let (status, _) = send(&fixture.app, Method::GET, "/questions?page=0", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&fixture.app, Method::GET, "/questions?page=abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_questions_by_category() {
    let fixture = fixture();
    let uri = format!("/categories/{}/questions", fixture.art);

    let (status, json) = send(&fixture.app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total_questions"], 2);
    assert_eq!(json["current_category"], fixture.art);
    assert!(
        json["questions"]
            .as_array()
            .unwrap()
            .iter()
            .all(|q| q["category"] == fixture.art)
    );

    let (status, _) = send(&fixture.app, Method::GET, "/categories/999/questions", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_search() {
    let fixture = fixture();

    let body = json!({ "searchTerm": "PLANET" });
    let (status, json) = send(&fixture.app, Method::POST, "/search", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total_questions"], 1);
    assert_eq!(json["questions"][0]["question"], "What planet is known as the Red Planet?");

    let body = json!({ "searchTerm": "zebra" });
    let (_, json) = send(&fixture.app, Method::POST, "/search", Some(body)).await;
    assert_eq!(json["total_questions"], 0);

    let (status, _) = send(&fixture.app, Method::POST, "/search", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_and_delete() {
    let fixture = fixture();

    let body = json!({
        "question": "What is the speed of light in km/s, roughly?",
        "answer": "300,000",
        "difficulty": 4,
        "category": fixture.science,
    });
    let (status, json) = send(&fixture.app, Method::POST, "/questions", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    let created = json["created"].as_i64().unwrap();

    let (_, json) = send(&fixture.app, Method::GET, "/questions", None).await;
    assert_eq!(json["total_questions"], 6);

    let uri = format!("/questions/{created}");
    let (status, json) = send(&fixture.app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["deleted"], created);

    let (status, _) = send(&fixture.app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_rejects_bad_input() {
    let fixture = fixture();

    let missing_fields = json!({ "question": "Incomplete?" });
    let (status, _) = send(&fixture.app, Method::POST, "/questions", Some(missing_fields)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let bad_difficulty = json!({
        "question": "Too hard?",
        "answer": "yes",
        "difficulty": 10,
        "category": fixture.science,
    });
    let (status, json) = send(&fixture.app, Method::POST, "/questions", Some(bad_difficulty)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["success"], false);

    let unknown_category = json!({
        "question": "Where am I?",
        "answer": "nowhere",
        "difficulty": 1,
        "category": 999,
    });
    let (status, _) = send(&fixture.app, Method::POST, "/questions", Some(unknown_category)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_quiz_walks_category_without_repeats() {
    let fixture = fixture();
    let mut previous: Vec<i64> = Vec::new();

    for _ in 0..fixture.science_questions.len() {
        let body = json!({
            "previous_questions": &previous,
            "quiz_category": { "type": "Science", "id": fixture.science.to_string() },
        });
        let (status, json) = send(&fixture.app, Method::POST, "/quizzes", Some(body)).await;
        assert_eq!(status, StatusCode::OK);

        let id = json["question"]["id"].as_i64().unwrap();
        assert_eq!(json["question"]["category"], fixture.science);
        assert!(!previous.contains(&id));
        previous.push(id);
    }

    let asked: HashSet<i64> = previous.iter().copied().collect();
    let expected: HashSet<i64> = fixture.science_questions.iter().copied().collect();
    assert_eq!(asked, expected);

    let body = json!({
        "previous_questions": &previous,
        "quiz_category": { "type": "Science", "id": fixture.science },
    });
    let (status, json) = send(&fixture.app, Method::POST, "/quizzes", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["question"], Value::Null);
}

#[tokio::test]
async fn test_quiz_all_categories() {
    let fixture = fixture();

    let body = json!({
        "previous_questions": &fixture.science_questions,
        "quiz_category": { "type": "click", "id": 0 },
    });
    let (status, json) = send(&fixture.app, Method::POST, "/quizzes", Some(body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["question"]["category"], fixture.art);
}

#[tokio::test]
async fn test_quiz_ignores_ids_from_other_categories() {
    let fixture = fixture();

    // As many previous ids as art has questions, none of them art.
    let body = json!({
        "previous_questions": &fixture.science_questions[..2],
        "quiz_category": { "type": "Art", "id": fixture.art },
    });
    let (status, json) = send(&fixture.app, Method::POST, "/quizzes", Some(body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["question"]["category"], fixture.art);
}

#[tokio::test]
async fn test_quiz_rejects_bad_scope() {
    let fixture = fixture();

    let missing = json!({ "previous_questions": [] });
    let (status, json) = send(&fixture.app, Method::POST, "/quizzes", Some(missing)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);

    let bad_id = json!({ "quiz_category": { "type": "Science", "id": "science" } });
    let (status, _) = send(&fixture.app, Method::POST, "/quizzes", Some(bad_id)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let unknown = json!({ "quiz_category": { "type": "Music", "id": 999 } });
    let (status, _) = send(&fixture.app, Method::POST, "/quizzes", Some(unknown)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_route_and_method() {
    let fixture = fixture();

    let (status, json) = send(&fixture.app, Method::GET, "/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Not found");

    let (status, json) = send(&fixture.app, Method::PUT, "/categories", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn test_cors_preflight() {
    let fixture = fixture();

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/quizzes")
        .header("origin", "http://localhost:3000")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = fixture.app.clone().oneshot(request).await.unwrap();
    assert!(response.status().is_success());

    let headers = response.headers();
    let methods = headers["access-control-allow-methods"].to_str().unwrap();
    for method in ["GET", "POST", "PATCH", "DELETE", "OPTIONS"] {
        assert!(methods.contains(method), "missing {method} in {methods}");
    }

    let allowed = headers["access-control-allow-headers"]
        .to_str()
        .unwrap()
        .to_lowercase();
    assert!(allowed.contains("content-type"));
    assert!(allowed.contains("authorization"));
    assert_eq!(headers["access-control-allow-origin"], "*");
}
