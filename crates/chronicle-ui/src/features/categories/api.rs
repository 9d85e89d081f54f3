//! API calls for category administration.

use chronicle_api_models::{ApiError, Category, CategoryPayload, PageData};

use crate::core::query::ListQuery;
use crate::services::http::ApiClient;

pub(crate) async fn fetch_categories(
    client: &ApiClient,
    query: &ListQuery,
) -> Result<PageData<Category>, ApiError> {
    client
        .get_page(&format!("/user/categories?{}", query.to_query_string()))
        .await
}

/// Fetch every category for the post form select.
pub(crate) async fn fetch_category_catalog(client: &ApiClient) -> Result<Vec<Category>, ApiError> {
    let query = ListQuery {
        size: 200,
        sort_by: "name".to_string(),
        ..ListQuery::default()
    };
    let page = client
        .get_page(&format!("/user/categories?{}", query.to_query_string()))
        .await?;
    Ok(page.items)
}

pub(crate) async fn fetch_category(client: &ApiClient, id: i64) -> Result<Category, ApiError> {
    client.get(&format!("/user/categories/{id}")).await
}

pub(crate) async fn create_category(
    client: &ApiClient,
    payload: &CategoryPayload,
) -> Result<Category, ApiError> {
    client.post("/user/categories", payload).await
}

pub(crate) async fn update_category(
    client: &ApiClient,
    id: i64,
    payload: &CategoryPayload,
) -> Result<Category, ApiError> {
    client.put(&format!("/user/categories/{id}"), payload).await
}

pub(crate) async fn delete_category(client: &ApiClient, id: i64) -> Result<String, ApiError> {
    client.delete(&format!("/user/categories/{id}")).await
}
