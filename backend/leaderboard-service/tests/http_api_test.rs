use actix_web::{http::StatusCode, test, web, App};
use leaderboard_service::{handlers, Leaderboard};
use serde_json::Value;
use std::sync::Arc;

fn leaderboard_with(entries: &[(&str, i32)]) -> Arc<Leaderboard> {
    let lb = Arc::new(Leaderboard::new());
    for (handle, score) in entries {
        lb.add_competitor(handle, *score);
    }
    lb
}

fn fifteen() -> Arc<Leaderboard> {
    let lb = Arc::new(Leaderboard::new());
    for i in 1..=15 {
        lb.add_competitor(&format!("player{i:02}"), 5000 - i * 100);
    }
    lb
}

macro_rules! app {
    ($lb:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::from($lb.clone()))
                .configure(handlers::configure),
        )
        .await
    };
}

macro_rules! get_json {
    ($app:expr, $uri:expr) => {{
        let req = test::TestRequest::get().uri($uri).to_request();
        let resp = test::call_service(&$app, req).await;
        let status: StatusCode = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }};
}

#[actix_web::test]
async fn leaderboard_defaults_page_and_size() {
    let lb = fifteen();
    let app = app!(lb);

    let (status, body) = get_json!(app, "/api/leaderboard");

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"], 1);
    assert_eq!(body["pageSize"], 50);
    assert_eq!(body["totalUsers"], 15);
    assert_eq!(body["users"].as_array().unwrap().len(), 15);
    assert_eq!(
        body["users"][0],
        serde_json::json!({"username": "player01", "rating": 4900, "rank": 1})
    );
}

#[actix_web::test]
async fn leaderboard_second_page_is_partial() {
    let lb = fifteen();
    let app = app!(lb);

    let (_, body) = get_json!(app, "/api/leaderboard?page=2&pageSize=10");
    let users = body["users"].as_array().unwrap();

    assert_eq!(users.len(), 5);
    assert_eq!(users[0]["rank"], 11);
    assert_eq!(users[4]["rank"], 15);
}

#[actix_web::test]
async fn leaderboard_out_of_range_page_is_empty_not_error() {
    let lb = fifteen();
    let app = app!(lb);

    let (status, body) = get_json!(app, "/api/leaderboard?page=5&pageSize=10");

    assert_eq!(status, StatusCode::OK);
    assert!(body["users"].as_array().unwrap().is_empty());
    assert_eq!(body["totalUsers"], 15);
}

#[actix_web::test]
async fn leaderboard_invalid_params_fall_back_to_defaults() {
    let lb = fifteen();
    let app = app!(lb);

    let (status, body) = get_json!(app, "/api/leaderboard?page=0&pageSize=500");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"], 1);
    assert_eq!(body["pageSize"], 50);

    let (status, body) = get_json!(app, "/api/leaderboard?page=abc&pageSize=-3");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"], 1);
    assert_eq!(body["pageSize"], 50);
}

#[actix_web::test]
async fn leaderboard_reflects_ties() {
    let lb = leaderboard_with(&[("c", 4990), ("a", 5000), ("b", 5000)]);
    let app = app!(lb);

    let (_, body) = get_json!(app, "/api/leaderboard");
    let ranks: Vec<u64> = body["users"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["rank"].as_u64().unwrap())
        .collect();

    assert_eq!(ranks, vec![1, 1, 3]);
}

#[actix_web::test]
async fn search_is_case_insensitive_and_rank_ordered() {
    let lb = leaderboard_with(&[("raj", 4000), ("rajesh", 3000), ("anita", 4500)]);
    let app = app!(lb);

    let (status, body) = get_json!(app, "/api/search?q=RAJ");

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);
    let names: Vec<&str> = body["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["username"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["raj", "rajesh"]);
}

#[actix_web::test]
async fn search_without_term_is_bad_request() {
    let lb = leaderboard_with(&[("raj", 4000)]);
    let app = app!(lb);

    for uri in ["/api/search", "/api/search?q="] {
        let (status, body) = get_json!(app, uri);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            serde_json::json!({"error": "query parameter 'q' is required"})
        );
    }
}

#[actix_web::test]
async fn search_with_no_matches_is_empty() {
    let lb = leaderboard_with(&[("raj", 4000)]);
    let app = app!(lb);

    let (status, body) = get_json!(app, "/api/search?q=zzz");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({"results": [], "count": 0}));
}

#[actix_web::test]
async fn stats_reports_total_and_health() {
    let lb = fifteen();
    let app = app!(lb);

    let (status, body) = get_json!(app, "/api/stats");

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({"totalUsers": 15, "status": "healthy"}));
}

#[actix_web::test]
async fn root_reports_running() {
    let lb = fifteen();
    let app = app!(lb);

    let (status, body) = get_json!(app, "/");

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "running");
    assert_eq!(body["users"], 15);
}

#[actix_web::test]
async fn writes_through_shared_handle_are_visible() {
    let lb = leaderboard_with(&[("raj", 1000), ("anita", 2000)]);
    let app = app!(lb);

    let (_, before) = get_json!(app, "/api/leaderboard");
    assert_eq!(before["users"][0]["username"], "anita");

    lb.update_score("raj", 9000).unwrap();

    let (_, after) = get_json!(app, "/api/leaderboard");
    assert_eq!(after["users"][0]["username"], "raj");
    assert_eq!(after["users"][0]["rating"], 5000);
}
