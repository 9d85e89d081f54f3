//! API calls for post comments.

use chronicle_api_models::{ApiError, Comment, CommentPayload};

use crate::services::http::ApiClient;

/// Fetch the full comment forest for a post; the server returns it nested.
pub(crate) async fn fetch_comments(client: &ApiClient, post_id: i64) -> Result<Vec<Comment>, ApiError> {
    client
        .get_public(&format!("/user/public/posts/{post_id}/comments"))
        .await
}

pub(crate) async fn create_comment(
    client: &ApiClient,
    payload: &CommentPayload,
) -> Result<Comment, ApiError> {
    client.post("/user/comments", payload).await
}

pub(crate) async fn delete_comment(client: &ApiClient, id: i64) -> Result<String, ApiError> {
    client.delete(&format!("/user/comments/{id}")).await
}
