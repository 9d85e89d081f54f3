//! API calls for role administration.

use chronicle_api_models::{ApiError, PageData, Role, RolePayload};

use crate::core::query::ListQuery;
use crate::services::http::ApiClient;

pub(crate) async fn fetch_roles(
    client: &ApiClient,
    query: &ListQuery,
) -> Result<PageData<Role>, ApiError> {
    client
        .get_page(&format!("/auth/roles?{}", query.to_query_string()))
        .await
}

pub(crate) async fn fetch_role(client: &ApiClient, id: i64) -> Result<Role, ApiError> {
    client.get(&format!("/auth/roles/{id}")).await
}

pub(crate) async fn create_role(
    client: &ApiClient,
    payload: &RolePayload,
) -> Result<Role, ApiError> {
    client.post("/auth/roles", payload).await
}

pub(crate) async fn update_role(
    client: &ApiClient,
    id: i64,
    payload: &RolePayload,
) -> Result<Role, ApiError> {
    client.put(&format!("/auth/roles/{id}"), payload).await
}

pub(crate) async fn delete_role(client: &ApiClient, id: i64) -> Result<String, ApiError> {
    client.delete(&format!("/auth/roles/{id}")).await
}
