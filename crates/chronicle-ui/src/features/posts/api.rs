//! API calls for the public feed and the author's own posts.

use chronicle_api_models::{ApiError, PageData, Post, PostPayload};

use crate::core::query::PostQuery;
use crate::services::http::ApiClient;

/// Vote direction for the feed's vote buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Vote {
    Up,
    Down,
}

impl Vote {
    const fn as_query(self) -> &'static str {
        match self {
            Self::Up => "UP",
            Self::Down => "DOWN",
        }
    }
}

pub(crate) async fn fetch_feed(
    client: &ApiClient,
    query: &PostQuery,
) -> Result<PageData<Post>, ApiError> {
    client
        .get_page_public(&format!("/user/public/posts?{}", query.to_query_string()))
        .await
}

pub(crate) async fn fetch_post(client: &ApiClient, id: i64) -> Result<Post, ApiError> {
    client.get_public(&format!("/user/public/posts/{id}")).await
}

/// Bump the view counter; fire-and-forget from the detail page.
pub(crate) async fn record_view(client: &ApiClient, id: i64) -> Result<String, ApiError> {
    client
        .post_public_message(&format!("/user/public/posts/{id}/view"))
        .await
}

/// Cast or flip a vote; the payload is the updated post.
pub(crate) async fn vote_post(client: &ApiClient, id: i64, vote: Vote) -> Result<Post, ApiError> {
    client
        .post_empty(&format!(
            "/user/public/posts/{id}/vote?type={}",
            vote.as_query()
        ))
        .await
}

/// Toggle the viewer's bookmark; the payload is the updated post.
pub(crate) async fn toggle_bookmark(client: &ApiClient, id: i64) -> Result<Post, ApiError> {
    client
        .post_empty(&format!("/user/blog/posts/{id}/bookmark"))
        .await
}

pub(crate) async fn fetch_my_posts(
    client: &ApiClient,
    query: &PostQuery,
) -> Result<PageData<Post>, ApiError> {
    client
        .get_page(&format!("/user/blog/posts?{}", query.to_query_string()))
        .await
}

pub(crate) async fn fetch_my_post(client: &ApiClient, id: i64) -> Result<Post, ApiError> {
    client.get(&format!("/user/blog/posts/{id}")).await
}

pub(crate) async fn create_post(
    client: &ApiClient,
    payload: &PostPayload,
) -> Result<Post, ApiError> {
    client.post("/user/blog/posts", payload).await
}

pub(crate) async fn update_post(
    client: &ApiClient,
    id: i64,
    payload: &PostPayload,
) -> Result<Post, ApiError> {
    client.put(&format!("/user/blog/posts/{id}"), payload).await
}

pub(crate) async fn delete_post(client: &ApiClient, id: i64) -> Result<String, ApiError> {
    client.delete(&format!("/user/blog/posts/{id}")).await
}
