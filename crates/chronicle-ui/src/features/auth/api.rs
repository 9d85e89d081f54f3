//! API calls for sign-in, sign-up and sign-out.
//!
//! # Design
//! - Login and register go out unauthenticated; the returned session is
//!   normalized before anything else sees it.
//! - Logout is best-effort server-side; callers clear local state even
//!   when the call fails.

use chronicle_api_models::{ApiError, LoginPayload, RegisterPayload, Session};

use crate::services::http::ApiClient;

pub(crate) async fn login(client: &ApiClient, payload: &LoginPayload) -> Result<Session, ApiError> {
    let session: Session = client.post_public("/auth/login", payload).await?;
    Ok(session.normalized())
}

pub(crate) async fn register(
    client: &ApiClient,
    payload: &RegisterPayload,
) -> Result<Session, ApiError> {
    let session: Session = client.post_public("/auth/register", payload).await?;
    Ok(session.normalized())
}

pub(crate) async fn logout(client: &ApiClient) -> Result<String, ApiError> {
    client.post_message("/auth/logout").await
}
