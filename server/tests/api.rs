use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header::CONTENT_TYPE},
    response::Response,
};
use http_body_util::BodyExt;
use platemap_server::{app, catalog, config::Config, state::AppState};
use serde_json::{Value, json};
use tower::ServiceExt;

fn test_config(database_path: &str) -> Config {
    Config {
        port: 0,
        database_path: database_path.to_string(),
    }
}

fn test_app() -> Router {
    let state = AppState::init(test_config(":memory:")).expect("state init");
    app(state)
}

async fn get(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_json(app: &Router, uri: &str, body: Value) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn items_lists_seeded_catalog() {
    let app = test_app();

    let response = get(&app, "/items").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let items = body["items"].as_array().unwrap();

    assert_eq!(items.len(), catalog::DISHES.len());
    assert_eq!(items[0]["slug"], "ceviche");
    assert_eq!(items[0]["name"], "Ceviche");
    assert_eq!(items[0]["imageRef"], "/ceviche.png");
}

#[tokio::test]
async fn items_is_idempotent_across_calls() {
    let app = test_app();

    let first = body_json(get(&app, "/items").await).await;
    let second = body_json(get(&app, "/items").await).await;

    assert_eq!(first["items"], second["items"]);
}

#[tokio::test]
async fn submit_returns_count_of_tuples() {
    let app = test_app();

    let response = post_json(
        &app,
        "/votes",
        json!({ "votes": [
            { "itemId": 1, "x": 0.2, "y": 0.8 },
            { "itemId": 2, "x": 0.9, "y": 0.1 },
        ]}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["ok"], true);
    assert_eq!(body["count"], 2);
}

#[tokio::test]
async fn empty_submission_is_rejected() {
    let app = test_app();

    let response = post_json(&app, "/votes", json!({ "votes": [] })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["ok"], false);

    // Nothing persisted.
    let averages = body_json(get(&app, "/averages").await).await;
    for avg in averages.as_array().unwrap() {
        assert_eq!(avg["count"], 0);
    }
}

#[tokio::test]
async fn malformed_body_is_rejected() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/votes")
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from("not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["ok"], false);
}

#[tokio::test]
async fn out_of_range_coordinate_persists_no_rows() {
    let app = test_app();

    let response = post_json(
        &app,
        "/votes",
        json!({ "votes": [
            { "itemId": 1, "x": 0.5, "y": 0.5 },
            { "itemId": 1, "x": 1.2, "y": 0.5 },
        ]}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let averages = body_json(get(&app, "/averages").await).await;
    let first = &averages.as_array().unwrap()[0];
    assert_eq!(first["count"], 0);
    assert_eq!(first["avgX"], Value::Null);
    assert_eq!(first["avgY"], Value::Null);
}

#[tokio::test]
async fn unknown_item_is_rejected() {
    let app = test_app();

    let response = post_json(
        &app,
        "/votes",
        json!({ "votes": [{ "itemId": 9999, "x": 0.5, "y": 0.5 }] }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn averages_reflect_submissions() {
    let app = test_app();

    post_json(
        &app,
        "/votes",
        json!({ "votes": [
            { "itemId": 1, "x": 0.0, "y": 0.0 },
            { "itemId": 1, "x": 1.0, "y": 1.0 },
        ]}),
    )
    .await;

    let averages = body_json(get(&app, "/averages").await).await;
    let ceviche = averages
        .as_array()
        .unwrap()
        .iter()
        .find(|a| a["itemId"] == 1)
        .unwrap();

    assert_eq!(ceviche["avgX"], 0.5);
    assert_eq!(ceviche["avgY"], 0.5);
    assert_eq!(ceviche["count"], 2);
}

#[tokio::test]
async fn density_splits_on_exact_coordinates() {
    let app = test_app();

    for _ in 0..2 {
        post_json(
            &app,
            "/votes",
            json!({ "votes": [{ "itemId": 1, "x": 0.3, "y": 0.7 }] }),
        )
        .await;
    }
    post_json(
        &app,
        "/votes",
        json!({ "votes": [{ "itemId": 1, "x": 0.3, "y": 0.70001 }] }),
    )
    .await;

    let density = body_json(get(&app, "/density").await).await;
    let rows = density.as_array().unwrap();

    assert_eq!(rows.len(), 2);
    let stacked = rows.iter().find(|r| r["y"] == 0.7).unwrap();
    assert_eq!(stacked["count"], 2);
    let lone = rows.iter().find(|r| r["y"] == 0.70001).unwrap();
    assert_eq!(lone["count"], 1);
}

#[tokio::test]
async fn voter_id_is_accepted_and_votes_accumulate() {
    let app = test_app();

    for _ in 0..2 {
        let response = post_json(
            &app,
            "/votes",
            json!({ "votes": [{ "itemId": 3, "x": 0.4, "y": 0.6, "voterId": "anon-1" }] }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    // No dedup by voter: repeat submissions are weighted twice.
    let averages = body_json(get(&app, "/averages").await).await;
    let row = averages
        .as_array()
        .unwrap()
        .iter()
        .find(|a| a["itemId"] == 3)
        .unwrap();
    assert_eq!(row["count"], 2);
}

#[tokio::test]
async fn end_to_end_submission_and_averages() {
    let app = test_app();

    let response = post_json(
        &app,
        "/votes",
        json!({ "votes": [
            { "itemId": 1, "x": 0.2, "y": 0.8 },
            { "itemId": 2, "x": 0.9, "y": 0.1 },
        ]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["ok"], true);
    assert_eq!(body["count"], 2);

    let averages = body_json(get(&app, "/averages").await).await;
    let rows = averages.as_array().unwrap();

    let first = rows.iter().find(|a| a["itemId"] == 1).unwrap();
    assert_eq!(first["avgX"], 0.2);
    assert_eq!(first["avgY"], 0.8);
    assert_eq!(first["count"], 1);

    let second = rows.iter().find(|a| a["itemId"] == 2).unwrap();
    assert_eq!(second["avgX"], 0.9);
    assert_eq!(second["avgY"], 0.1);
    assert_eq!(second["count"], 1);
}

#[tokio::test]
async fn seeding_survives_reopen_with_stable_ids() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("votes.sqlite");
    let path = path.to_str().unwrap();

    let first_app = app(AppState::init(test_config(path)).unwrap());
    let first = body_json(get(&first_app, "/items").await).await;
    drop(first_app);

    let second_app = app(AppState::init(test_config(path)).unwrap());
    let second = body_json(get(&second_app, "/items").await).await;

    assert_eq!(first["items"], second["items"]);
    assert_eq!(
        second["items"].as_array().unwrap().len(),
        catalog::DISHES.len()
    );
}
