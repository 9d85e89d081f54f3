//! API calls for user administration.

use chronicle_api_models::{ApiError, PageData, User, UserPayload};

use crate::core::query::ListQuery;
use crate::services::http::ApiClient;

pub(crate) async fn fetch_users(
    client: &ApiClient,
    query: &ListQuery,
) -> Result<PageData<User>, ApiError> {
    client
        .get_page(&format!("/auth/users?{}", query.to_query_string()))
        .await
}

pub(crate) async fn fetch_user(client: &ApiClient, id: i64) -> Result<User, ApiError> {
    client.get(&format!("/auth/users/{id}")).await
}

pub(crate) async fn create_user(
    client: &ApiClient,
    payload: &UserPayload,
) -> Result<User, ApiError> {
    client.post("/auth/users", payload).await
}

pub(crate) async fn update_user(
    client: &ApiClient,
    id: i64,
    payload: &UserPayload,
) -> Result<User, ApiError> {
    client.put(&format!("/auth/users/{id}"), payload).await
}

pub(crate) async fn delete_user(client: &ApiClient, id: i64) -> Result<String, ApiError> {
    client.delete(&format!("/auth/users/{id}")).await
}
