use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use uuid::Uuid;

use crate::config::Config;
use crate::constants::FEED_SNAPSHOT_KEY;
use crate::data_storage::{get_json, put_json};
use crate::feed::{NewPost, Post, UserRole, TRENDING_TOPICS};
use crate::routes::error::FeedRouteError;
use crate::routes::types::{ApiResponse, PostId};

#[derive(Deserialize)]
struct RoleQuery {
    role: Option<UserRole>,
}

#[derive(Deserialize)]
struct NewComment {
    comment: String,
}

pub fn feed_router(config: Arc<Config>) -> Router {
    Router::new().nest("/feed", feed_routes(config))
}

fn feed_routes(config: Arc<Config>) -> Router {
    Router::new()
        .route("/posts", get(handle_list_posts).post(handle_create_post))
        .route("/posts/:id/like", post(handle_like_post))
        .route("/posts/:id/comments", post(handle_comment_post))
        .route("/trending", get(handle_trending))
        .route("/snapshot", post(handle_snapshot))
        .route("/restore", post(handle_restore))
        .with_state(config)
}

async fn handle_list_posts(Query(query): Query<RoleQuery>, State(config): State<Arc<Config>>) -> Json<Vec<Post>> {
    let role = query.role.unwrap_or(UserRole::Normal);
    Json(config.feed().visible_posts(role).await)
}

async fn handle_create_post(State(config): State<Arc<Config>>, Json(new_post): Json<NewPost>) -> Json<Post> {
    let post = config.feed().create_post(new_post).await;
    tracing::info!(post_id = %post.id, "Created post");
    Json(post)
}

async fn handle_like_post(
    Path(PostId { id }): Path<PostId>,
    State(config): State<Arc<Config>>,
) -> Result<Json<Post>, FeedRouteError> {
    let id = parse_post_id(&id)?;
    let post = config.feed().like(id).await?;
    Ok(Json(post))
}

async fn handle_comment_post(
    Path(PostId { id }): Path<PostId>,
    State(config): State<Arc<Config>>,
    Json(new_comment): Json<NewComment>,
) -> Result<Json<Post>, FeedRouteError> {
    let id = parse_post_id(&id)?;
    let post = config.feed().comment(id, new_comment.comment).await?;
    Ok(Json(post))
}

async fn handle_trending() -> Json<Vec<&'static str>> {
    Json(TRENDING_TOPICS.to_vec())
}

/// Persists the whole post list as one JSON blob under the well-known
/// key, overwriting the previous snapshot.
async fn handle_snapshot(State(config): State<Arc<Config>>) -> Result<Json<ApiResponse>, FeedRouteError> {
    let posts = config.feed().snapshot().await;
    put_json(config.storage(), FEED_SNAPSHOT_KEY, &posts).await?;
    tracing::info!(key = FEED_SNAPSHOT_KEY, posts = posts.len(), "Stored feed snapshot");
    Ok(Json(ApiResponse::success()))
}

/// Loads the stored snapshot and replaces the in-memory feed with it.
/// A missing snapshot is reported as not found, not as a failure.
async fn handle_restore(State(config): State<Arc<Config>>) -> Result<Json<Vec<Post>>, FeedRouteError> {
    let posts: Vec<Post> = get_json(config.storage(), FEED_SNAPSHOT_KEY)
        .await?
        .ok_or_else(|| FeedRouteError::SnapshotMissing(FEED_SNAPSHOT_KEY.to_string()))?;
    config.feed().replace(posts.clone()).await;
    tracing::info!(key = FEED_SNAPSHOT_KEY, posts = posts.len(), "Restored feed snapshot");
    Ok(Json(posts))
}

fn parse_post_id(id: &str) -> Result<Uuid, FeedRouteError> {
    Uuid::parse_str(id).map_err(|_| FeedRouteError::InvalidId(id.to_string()))
}
