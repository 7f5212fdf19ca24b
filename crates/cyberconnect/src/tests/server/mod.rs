use std::net::SocketAddr;

use bytes::Bytes;
use hyper::{Body, Client, Method, Request, StatusCode};
use rstest::*;
use serde_json::{json, Value};

use crate::constants::FEED_SNAPSHOT_KEY;
use crate::data_storage::{DataStorage, DataStorageError, MockDataStorage};
use crate::feed::Feed;
use crate::routes::setup_server;
use crate::tests::common::InMemoryDataStorage;
use crate::tests::config::TestConfigBuilder;

#[fixture]
pub async fn setup_feed_server() -> SocketAddr {
    let config = TestConfigBuilder::new().build();
    setup_server(config).await
}

async fn send_json(addr: SocketAddr, method: Method, path: &str, body: Option<Value>) -> (StatusCode, Value) {
    let client = Client::new();
    let request = Request::builder()
        .method(method)
        .uri(format!("http://{}{}", addr, path))
        .header("content-type", "application/json")
        .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
        .expect("Failed to build request");

    let response = client.request(request).await.expect("Failed to send request");
    let status = response.status();
    let bytes = hyper::body::to_bytes(response.into_body()).await.expect("Failed to read body");
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).expect("Non-JSON body") };

    (status, value)
}

#[rstest]
#[tokio::test]
async fn test_health_endpoint(#[future] setup_feed_server: SocketAddr) {
    let addr = setup_feed_server.await;

    let client = Client::new();
    let response = client
        .request(Request::builder().uri(format!("http://{}/health", addr)).body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
    assert_eq!(&body[..], b"OK");
}

#[rstest]
#[tokio::test]
async fn unknown_route_is_404(#[future] setup_feed_server: SocketAddr) {
    let addr = setup_feed_server.await;

    let client = Client::new();
    let response = client
        .request(Request::builder().uri(format!("http://{}/nowhere", addr)).body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[tokio::test]
async fn login_with_the_shared_credential_grants_the_requested_role(#[future] setup_feed_server: SocketAddr) {
    let addr = setup_feed_server.await;

    let (status, body) = send_json(
        addr,
        Method::POST,
        "/auth/login",
        Some(json!({ "username": "1", "password": "1", "role": "vip" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["user_type"], json!("vip"));
}

#[rstest]
#[tokio::test]
async fn login_with_a_wrong_password_is_unauthorized(#[future] setup_feed_server: SocketAddr) {
    let addr = setup_feed_server.await;

    let (status, body) =
        send_json(addr, Method::POST, "/auth/login", Some(json!({ "username": "1", "password": "nope" }))).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], json!(false));
}

#[rstest]
#[tokio::test]
async fn normal_users_do_not_see_vip_posts(#[future] setup_feed_server: SocketAddr) {
    let addr = setup_feed_server.await;

    let (status, posts) = send_json(addr, Method::GET, "/feed/posts", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(posts.as_array().map(Vec::len), Some(1));

    let (status, posts) = send_json(addr, Method::GET, "/feed/posts?role=vip", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(posts.as_array().map(Vec::len), Some(2));
}

#[rstest]
#[tokio::test]
async fn created_posts_show_up_in_the_feed(#[future] setup_feed_server: SocketAddr) {
    let addr = setup_feed_server.await;

    let (status, created) = send_json(
        addr,
        Method::POST,
        "/feed/posts",
        Some(json!({ "title": "Fresh transmission", "content": "From the grid.", "author": "Netrunner" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["likes"], json!(0));

    let (_, posts) = send_json(addr, Method::GET, "/feed/posts", None).await;
    let titles: Vec<_> = posts.as_array().unwrap().iter().map(|p| p["title"].clone()).collect();
    assert!(titles.contains(&json!("Fresh transmission")));
}

#[rstest]
#[tokio::test]
async fn liking_a_post_increments_its_counter(#[future] setup_feed_server: SocketAddr) {
    let addr = setup_feed_server.await;

    let (_, posts) = send_json(addr, Method::GET, "/feed/posts", None).await;
    let post = &posts.as_array().unwrap()[0];
    let id = post["id"].as_str().unwrap().to_string();
    let likes_before = post["likes"].as_u64().unwrap();

    let (status, liked) = send_json(addr, Method::POST, &format!("/feed/posts/{}/like", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(liked["likes"].as_u64(), Some(likes_before + 1));
}

#[rstest]
#[tokio::test]
async fn commenting_appends_to_the_post(#[future] setup_feed_server: SocketAddr) {
    let addr = setup_feed_server.await;

    let (_, posts) = send_json(addr, Method::GET, "/feed/posts", None).await;
    let id = posts.as_array().unwrap()[0]["id"].as_str().unwrap().to_string();

    let (status, commented) = send_json(
        addr,
        Method::POST,
        &format!("/feed/posts/{}/comments", id),
        Some(json!({ "comment": "Great post!" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let comments = commented["comments"].as_array().unwrap();
    assert_eq!(comments.last(), Some(&json!("Great post!")));
}

#[rstest]
#[tokio::test]
async fn liking_an_unknown_post_is_404(#[future] setup_feed_server: SocketAddr) {
    let addr = setup_feed_server.await;

    let id = uuid::Uuid::new_v4();
    let (status, body) = send_json(addr, Method::POST, &format!("/feed/posts/{}/like", id), None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], json!(false));
}

#[rstest]
#[tokio::test]
async fn a_garbled_post_id_is_400(#[future] setup_feed_server: SocketAddr) {
    let addr = setup_feed_server.await;

    let (status, _) = send_json(addr, Method::POST, "/feed/posts/not-a-uuid/like", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[rstest]
#[tokio::test]
async fn trending_topics_are_served(#[future] setup_feed_server: SocketAddr) {
    let addr = setup_feed_server.await;

    let (status, topics) = send_json(addr, Method::GET, "/feed/trending", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(topics, json!(["#CyberImplants", "#NeonNights", "#VirtualReality"]));
}

#[rstest]
#[tokio::test]
async fn snapshot_then_restore_round_trips_the_feed(#[future] setup_feed_server: SocketAddr) {
    let addr = setup_feed_server.await;

    // persist the seeded feed, then mutate it
    let (status, _) = send_json(addr, Method::POST, "/feed/snapshot", None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, posts) = send_json(addr, Method::GET, "/feed/posts", None).await;
    let id = posts.as_array().unwrap()[0]["id"].as_str().unwrap().to_string();
    send_json(addr, Method::POST, &format!("/feed/posts/{}/like", id), None).await;

    // restoring rolls the mutation back
    let (status, restored) = send_json(addr, Method::POST, "/feed/restore", None).await;
    assert_eq!(status, StatusCode::OK);

    let restored_likes =
        restored.as_array().unwrap().iter().find(|p| p["id"] == json!(id)).unwrap()["likes"].as_u64().unwrap();
    let (_, posts_after) = send_json(addr, Method::GET, "/feed/posts", None).await;
    let likes_after =
        posts_after.as_array().unwrap().iter().find(|p| p["id"] == json!(id)).unwrap()["likes"].as_u64().unwrap();

    assert_eq!(likes_after, restored_likes);
}

#[rstest]
#[tokio::test]
async fn restore_without_a_snapshot_is_404(#[future] setup_feed_server: SocketAddr) {
    let addr = setup_feed_server.await;

    let (status, body) = send_json(addr, Method::POST, "/feed/restore", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], json!(false));
}

#[rstest]
#[tokio::test]
async fn an_empty_feed_serves_an_empty_list() {
    let config = TestConfigBuilder::new().configure_feed(Feed::new(Vec::new())).build();
    let addr = setup_server(config).await;

    let (status, posts) = send_json(addr, Method::GET, "/feed/posts?role=admin", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(posts, json!([]));
}

#[rstest]
#[tokio::test]
async fn a_failing_store_turns_snapshot_into_500() {
    let mut storage = MockDataStorage::new();
    storage.expect_put_data().returning(|_, key| {
        Err(DataStorageError::MalformedBody {
            key: key.to_string(),
            source: serde_json::from_str::<Value>("garbled").unwrap_err(),
        })
    });

    let config = TestConfigBuilder::new().configure_storage_client(Box::new(storage)).build();
    let addr = setup_server(config).await;

    let (status, body) = send_json(addr, Method::POST, "/feed/snapshot", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], json!(false));
}

#[rstest]
#[tokio::test]
async fn restore_of_a_garbled_snapshot_is_500_not_404() {
    let storage = InMemoryDataStorage::new();
    storage.put_data(Bytes::from_static(b"definitely not json"), FEED_SNAPSHOT_KEY).await.expect("put failed");

    let config = TestConfigBuilder::new().configure_storage_client(Box::new(storage)).build();
    let addr = setup_server(config).await;

    let (status, body) = send_json(addr, Method::POST, "/feed/restore", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], json!(false));
}
