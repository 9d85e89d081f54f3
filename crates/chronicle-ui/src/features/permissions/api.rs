//! API calls for permission administration.

use chronicle_api_models::{ApiError, PageData, Permission, PermissionPayload};

use crate::core::query::ListQuery;
use crate::services::http::ApiClient;

pub(crate) async fn fetch_permissions(
    client: &ApiClient,
    query: &ListQuery,
) -> Result<PageData<Permission>, ApiError> {
    client
        .get_page(&format!("/auth/permissions?{}", query.to_query_string()))
        .await
}

/// Fetch the whole catalog for the role form; one oversized page is enough
/// for the permission counts this deployment sees.
pub(crate) async fn fetch_permission_catalog(
    client: &ApiClient,
) -> Result<Vec<Permission>, ApiError> {
    let query = ListQuery {
        size: 200,
        sort_by: "name".to_string(),
        ..ListQuery::default()
    };
    let page = client
        .get_page(&format!("/auth/permissions?{}", query.to_query_string()))
        .await?;
    Ok(page.items)
}

pub(crate) async fn fetch_permission(client: &ApiClient, id: i64) -> Result<Permission, ApiError> {
    client.get(&format!("/auth/permissions/{id}")).await
}

pub(crate) async fn create_permission(
    client: &ApiClient,
    payload: &PermissionPayload,
) -> Result<Permission, ApiError> {
    client.post("/auth/permissions", payload).await
}

pub(crate) async fn update_permission(
    client: &ApiClient,
    id: i64,
    payload: &PermissionPayload,
) -> Result<Permission, ApiError> {
    client.put(&format!("/auth/permissions/{id}"), payload).await
}

pub(crate) async fn delete_permission(client: &ApiClient, id: i64) -> Result<String, ApiError> {
    client.delete(&format!("/auth/permissions/{id}")).await
}
