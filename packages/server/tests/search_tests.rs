//! Case-insensitive substring search over venue and artist names.

mod common;

use common::{create_test_artist, create_test_venue, TestHarness};
use serde_json::json;
use test_context::test_context;

#[test_context(TestHarness)]
#[tokio::test]
async fn empty_term_matches_every_venue(ctx: &TestHarness) {
    create_test_venue(&ctx.db_pool, "The Note", "Boston", "MA")
        .await
        .unwrap();
    create_test_venue(&ctx.db_pool, "Red Room", "Portland", "OR")
        .await
        .unwrap();
    create_test_venue(&ctx.db_pool, "Blue Door", "Austin", "TX")
        .await
        .unwrap();

    let (status, body) =
        common::post_json(ctx.app(), "/venues/search", json!({ "search_term": "" })).await;

    assert_eq!(status, axum::http::StatusCode::OK);
    assert_eq!(body["count"], 3);
    assert_eq!(body["results"].as_array().unwrap().len(), 3);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn artist_search_is_case_insensitive_substring(ctx: &TestHarness) {
    create_test_artist(&ctx.db_pool, "Anna").await.unwrap();
    create_test_artist(&ctx.db_pool, "Sandra").await.unwrap();
    create_test_artist(&ctx.db_pool, "Bob").await.unwrap();

    let (status, body) =
        common::post_json(ctx.app(), "/artists/search", json!({ "search_term": "an" })).await;

    assert_eq!(status, axum::http::StatusCode::OK);
    assert_eq!(body["count"], 2);

    let names: Vec<&str> = body["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Anna", "Sandra"]);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn venue_search_ignores_case(ctx: &TestHarness) {
    create_test_venue(&ctx.db_pool, "The Note", "Boston", "MA")
        .await
        .unwrap();
    create_test_venue(&ctx.db_pool, "Red Room", "Portland", "OR")
        .await
        .unwrap();

    let (status, body) =
        common::post_json(ctx.app(), "/venues/search", json!({ "search_term": "NOTE" })).await;

    assert_eq!(status, axum::http::StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(body["results"][0]["name"], "The Note");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn results_follow_storage_row_order(ctx: &TestHarness) {
    let first = create_test_venue(&ctx.db_pool, "Note A", "Boston", "MA")
        .await
        .unwrap();
    let second = create_test_venue(&ctx.db_pool, "Note B", "Boston", "MA")
        .await
        .unwrap();

    let (_, body) =
        common::post_json(ctx.app(), "/venues/search", json!({ "search_term": "note" })).await;

    let ids: Vec<i64> = body["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![first.id as i64, second.id as i64]);
}
