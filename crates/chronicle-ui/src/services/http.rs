//! HTTP client with transparent token refresh.
//!
//! # Design
//! - Every response travels in the uniform envelope; helpers reduce it to a
//!   typed payload, a normalized page, or an outcome message.
//! - Authenticated calls retry exactly once after a 401: the refresh runs
//!   through [`RefreshGate`] so concurrent failures share a single refresh
//!   round trip.
//! - The refresh call itself goes out bare, with no retry, so an expired
//!   refresh token cannot loop.
//! - Bodies are buffered as JSON values so the retry resends the original
//!   payload unchanged.

use chronicle_api_models::{ApiError, Envelope, ListPayload, PageData, RefreshPayload, Session};
use gloo_net::http::Request;
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;
use yewdux::prelude::Dispatch;

use crate::core::store::AppStore;
use crate::services::refresh::{BeginOutcome, RefreshGate, should_refresh};
use crate::services::storage;

#[derive(Clone, Copy)]
enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

/// Shared HTTP client; cheap to clone, the refresh gate is the shared part.
#[derive(Clone, Default)]
pub(crate) struct ApiClient {
    base_url: String,
    gate: RefreshGate,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            gate: RefreshGate::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// One wire round trip: no envelope handling, no retry.
    async fn dispatch(
        &self,
        verb: Verb,
        path: &str,
        bearer: Option<&str>,
        body: Option<&serde_json::Value>,
    ) -> Result<(u16, String), ApiError> {
        let url = self.url(path);
        let mut req = match verb {
            Verb::Get => Request::get(&url),
            Verb::Post => Request::post(&url),
            Verb::Put => Request::put(&url),
            Verb::Delete => Request::delete(&url),
        };
        req = req.header("X-Request-ID", &Uuid::new_v4().to_string());
        if let Some(token) = bearer {
            req = req.header("Authorization", &format!("Bearer {token}"));
        }
        if let Some(value) = body {
            req = req.json(value).map_err(ApiError::transport)?;
        }
        let resp = req.send().await.map_err(ApiError::transport)?;
        let status = resp.status();
        let text = resp.text().await.map_err(ApiError::transport)?;
        Ok((status, text))
    }

    /// Authenticated round trip with the single refresh-and-retry cycle.
    async fn send_private(
        &self,
        verb: Verb,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<(u16, String), ApiError> {
        let bearer = storage::load_session().map(|session| session.access_token);
        let (status, text) = self
            .dispatch(verb, path, bearer.as_deref(), body.as_ref())
            .await?;
        if !should_refresh(status, false) {
            return Ok((status, text));
        }
        let fresh = match self.gate.begin() {
            BeginOutcome::Leader => {
                let outcome = self.run_refresh().await;
                self.gate.complete(&outcome);
                match outcome {
                    Ok(token) => token,
                    Err(err) => {
                        self.force_login();
                        return Err(err);
                    }
                }
            }
            BeginOutcome::Follower(rx) => match rx.await {
                Ok(Ok(token)) => token,
                Ok(Err(err)) => return Err(err),
                Err(_) => return Err(ApiError::Transport("refresh was abandoned".to_string())),
            },
        };
        self.dispatch(verb, path, Some(fresh.as_str()), body.as_ref())
            .await
    }

    /// Exchange the stored refresh token for a new session, persisting it
    /// and updating the auth slice so the displayed identity stays current.
    async fn run_refresh(&self) -> Result<String, ApiError> {
        let Some(session) = storage::load_session() else {
            return Err(ApiError::Api {
                status: 401,
                message: "no session to refresh".to_string(),
            });
        };
        let payload = serde_json::to_value(RefreshPayload {
            refresh_token: session.refresh_token,
        })
        .map_err(ApiError::transport)?;
        let (status, text) = self
            .dispatch(Verb::Post, "/auth/refresh-token", None, Some(&payload))
            .await?;
        let session = decode::<Session>(status, &text)?.normalized();
        storage::store_session(&session);
        Dispatch::<AppStore>::new().reduce_mut(|store| store.auth.sign_in(session.clone()));
        Ok(session.access_token)
    }

    /// Refresh is unrecoverable: drop the session and send the browser to
    /// the login page.
    fn force_login(&self) {
        storage::clear_session();
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.location().set_href("/login") {
                gloo::console::error!(format!("login redirect failed: {err:?}"));
            }
        }
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let (status, text) = self.send_private(Verb::Get, path, None).await?;
        decode(status, &text)
    }

    /// Authenticated GET where a successful empty payload is a valid answer.
    pub(crate) async fn get_optional<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<T>, ApiError> {
        let (status, text) = self.send_private(Verb::Get, path, None).await?;
        parse_envelope::<T>(status, &text)?.into_optional(status)
    }

    pub(crate) async fn get_page<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<PageData<T>, ApiError> {
        let (status, text) = self.send_private(Verb::Get, path, None).await?;
        parse_envelope::<ListPayload<T>>(status, &text)?.into_page(status)
    }

    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body).map_err(ApiError::transport)?;
        let (status, text) = self.send_private(Verb::Post, path, Some(body)).await?;
        decode(status, &text)
    }

    /// Body-less POST whose payload is the mutated record (vote, bookmark).
    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let (status, text) = self.send_private(Verb::Post, path, None).await?;
        decode(status, &text)
    }

    /// Body-less POST reduced to its outcome message (logout and friends).
    pub(crate) async fn post_message(&self, path: &str) -> Result<String, ApiError> {
        let (status, text) = self.send_private(Verb::Post, path, None).await?;
        parse_envelope::<serde_json::Value>(status, &text)?.into_message(status)
    }

    pub(crate) async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body).map_err(ApiError::transport)?;
        let (status, text) = self.send_private(Verb::Put, path, Some(body)).await?;
        decode(status, &text)
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<String, ApiError> {
        let (status, text) = self.send_private(Verb::Delete, path, None).await?;
        parse_envelope::<serde_json::Value>(status, &text)?.into_message(status)
    }

    pub(crate) async fn get_public<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let (status, text) = self.dispatch(Verb::Get, path, None, None).await?;
        decode(status, &text)
    }

    pub(crate) async fn get_page_public<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<PageData<T>, ApiError> {
        let (status, text) = self.dispatch(Verb::Get, path, None, None).await?;
        parse_envelope::<ListPayload<T>>(status, &text)?.into_page(status)
    }

    pub(crate) async fn post_public<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body).map_err(ApiError::transport)?;
        let (status, text) = self.dispatch(Verb::Post, path, None, Some(&body)).await?;
        decode(status, &text)
    }

    /// Unauthenticated fire-and-forget POST (view-count bumps).
    pub(crate) async fn post_public_message(&self, path: &str) -> Result<String, ApiError> {
        let (status, text) = self.dispatch(Verb::Post, path, None, None).await?;
        parse_envelope::<serde_json::Value>(status, &text)?.into_message(status)
    }
}

fn parse_envelope<T: DeserializeOwned>(status: u16, text: &str) -> Result<Envelope<T>, ApiError> {
    serde_json::from_str(text).map_err(|err| {
        if status >= 400 {
            ApiError::Api {
                status,
                message: format!("request failed with status {status}"),
            }
        } else {
            ApiError::transport(err)
        }
    })
}

fn decode<T: DeserializeOwned>(status: u16, text: &str) -> Result<T, ApiError> {
    parse_envelope::<T>(status, text)?.into_result(status)
}
