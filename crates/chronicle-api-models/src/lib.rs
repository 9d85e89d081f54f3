#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
//! Shared HTTP DTOs for the Chronicle blogging API.
//!
//! Every response from the backend arrives wrapped in a uniform envelope
//! (`status`/`data`/`message`/`errors`); list endpoints additionally carry
//! pagination, either Spring-style inside `data` or as a sibling `pageInfo`
//! object. The reductions from envelope to `Result` live here so the client
//! and its tests share one source of truth for error-message extraction.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sentinel permission slug that grants every permission check.
pub const FULL_ACCESS: &str = "FULL_ACCESS";

/// Envelope status value the backend uses for successful operations.
pub const STATUS_SUCCESS: &str = "SUCCESS";

/// Error surfaced by API calls after envelope reduction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server answered with a non-success envelope or HTTP status.
    #[error("{message}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Reduced human-readable message.
        message: String,
    },
    /// The request never produced a decodable response.
    #[error("{0}")]
    Transport(String),
}

impl ApiError {
    /// Build a transport-level error from any displayable source.
    pub fn transport(err: impl std::fmt::Display) -> Self {
        Self::Transport(err.to_string())
    }

    /// HTTP status code, when the server produced one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Transport(_) => None,
        }
    }

    /// Whether this error is an authentication failure (HTTP 401).
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

/// Reduce the server's message/errors pair to one display string.
///
/// Priority order: structured `message`, first entry of the `errors` array,
/// then the supplied fallback (typically the transport error display).
#[must_use]
pub fn reduce_message(message: Option<&str>, errors: &[String], fallback: &str) -> String {
    if let Some(message) = message
        && !message.trim().is_empty()
    {
        return message.to_string();
    }
    if let Some(first) = errors.iter().find(|entry| !entry.trim().is_empty()) {
        return first.clone();
    }
    fallback.to_string()
}

/// Uniform response wrapper used by every Chronicle endpoint.
///
/// The explicit bound keeps the derive from demanding `T: Default` for the
/// `#[serde(default)]` fields wrapping the payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    /// Server-side timestamp of the response.
    #[serde(default)]
    pub timestamp: Option<String>,
    /// Application-level status flag; anything but `SUCCESS` is a failure.
    pub status: String,
    /// Payload for successful operations.
    #[serde(default)]
    pub data: Option<T>,
    /// Human-readable outcome message.
    #[serde(default)]
    pub message: Option<String>,
    /// Structured validation errors, first entry first.
    #[serde(default)]
    pub errors: Vec<String>,
    /// Pagination block for list endpoints that keep `data` flat.
    #[serde(default)]
    pub page_info: Option<PageInfo>,
}

impl<T> Envelope<T> {
    /// Whether the envelope reports application-level success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }

    /// Reduce the envelope to its payload, treating a non-success status as
    /// an error even when the transport returned HTTP 200.
    ///
    /// # Errors
    /// Returns [`ApiError::Api`] when the status flag is not `SUCCESS` or the
    /// payload is missing.
    pub fn into_result(self, http_status: u16) -> Result<T, ApiError> {
        if !self.is_success() {
            return Err(ApiError::Api {
                status: http_status,
                message: reduce_message(
                    self.message.as_deref(),
                    &self.errors,
                    "request failed",
                ),
            });
        }
        self.data.ok_or(ApiError::Api {
            status: http_status,
            message: "response contained no data".to_string(),
        })
    }

    /// Like [`Envelope::into_result`], but a successful envelope with no
    /// payload reduces to `None` (endpoints where absence is a valid
    /// answer, such as the viewer's current subscription).
    ///
    /// # Errors
    /// Returns [`ApiError::Api`] when the status flag is not `SUCCESS`.
    pub fn into_optional(self, http_status: u16) -> Result<Option<T>, ApiError> {
        if self.is_success() {
            Ok(self.data)
        } else {
            Err(ApiError::Api {
                status: http_status,
                message: reduce_message(
                    self.message.as_deref(),
                    &self.errors,
                    "request failed",
                ),
            })
        }
    }

    /// Reduce the envelope to its outcome message (used by delete endpoints
    /// whose payload is empty).
    ///
    /// # Errors
    /// Returns [`ApiError::Api`] when the status flag is not `SUCCESS`.
    pub fn into_message(self, http_status: u16) -> Result<String, ApiError> {
        if self.is_success() {
            Ok(self.message.unwrap_or_else(|| "OK".to_string()))
        } else {
            Err(ApiError::Api {
                status: http_status,
                message: reduce_message(
                    self.message.as_deref(),
                    &self.errors,
                    "request failed",
                ),
            })
        }
    }
}

/// Pagination facts reported alongside every list payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Requested page size.
    pub size: u32,
    /// Zero-based page number.
    pub number: u32,
    /// Total matching records across all pages.
    pub total_elements: u64,
    /// Total page count for the current size.
    pub total_pages: u32,
}

impl Default for PageInfo {
    fn default() -> Self {
        Self {
            size: 10,
            number: 0,
            total_elements: 0,
            total_pages: 0,
        }
    }
}

/// The two wire shapes list endpoints use for their `data` field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    /// Spring-style page object with embedded pagination fields.
    Paged(SpringPage<T>),
    /// Flat array; pagination, if any, travels in the envelope's `pageInfo`.
    Flat(Vec<T>),
}

/// Spring Data page object embedded in `data` by the blog endpoints.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpringPage<T> {
    /// Records on this page.
    pub content: Vec<T>,
    /// Requested page size.
    pub size: u32,
    /// Zero-based page number.
    pub number: u32,
    /// Total matching records.
    pub total_elements: u64,
    /// Total page count.
    pub total_pages: u32,
}

/// Normalized list-fetch result every slice consumes.
#[derive(Debug, Clone, PartialEq)]
pub struct PageData<T> {
    /// Records on this page.
    pub items: Vec<T>,
    /// Pagination facts for the fetch.
    pub page: PageInfo,
}

impl<T> Envelope<ListPayload<T>> {
    /// Normalize either list wire shape into one `{items, page}` pair.
    ///
    /// A flat payload without a `pageInfo` block is treated as a complete,
    /// single-page result.
    ///
    /// # Errors
    /// Returns [`ApiError::Api`] when the status flag is not `SUCCESS` or the
    /// payload is missing.
    #[allow(clippy::cast_possible_truncation)]
    pub fn into_page(self, http_status: u16) -> Result<PageData<T>, ApiError> {
        let page_info = self.page_info;
        let payload = self.into_result(http_status)?;
        Ok(match payload {
            ListPayload::Paged(page) => PageData {
                page: PageInfo {
                    size: page.size,
                    number: page.number,
                    total_elements: page.total_elements,
                    total_pages: page.total_pages,
                },
                items: page.content,
            },
            ListPayload::Flat(items) => {
                let page = page_info.unwrap_or(PageInfo {
                    size: items.len() as u32,
                    number: 0,
                    total_elements: items.len() as u64,
                    total_pages: 1,
                });
                PageData { items, page }
            }
        })
    }
}

/// Authenticated session bundle returned by login, register and refresh.
///
/// The `full_access` flag is the single authorization override the client
/// consults; [`Session::normalized`] folds the legacy `FULL_ACCESS`
/// permission sentinel into it exactly once at the wire boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Short-lived bearer token attached to private requests.
    pub access_token: String,
    /// Long-lived token exchanged for a new bundle on expiry.
    pub refresh_token: String,
    /// Token scheme hint (always `Bearer` today).
    pub token_type: String,
    /// Access-token lifetime hint, in seconds.
    pub expires_in: u64,
    /// Authenticated user id.
    pub id: i64,
    /// Display name of the user.
    pub name: String,
    /// Email of the user.
    pub email: String,
    /// Flat permission slugs granted through roles and direct grants.
    #[serde(default)]
    pub permissions: Vec<String>,
    /// Role names held by the user.
    #[serde(default)]
    pub roles: Vec<String>,
    /// Authorization override satisfying every permission check.
    #[serde(default)]
    pub full_access: bool,
}

impl Session {
    /// Fold the legacy permission sentinel into the `full_access` flag.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if self.permissions.iter().any(|slug| slug == FULL_ACCESS) {
            self.full_access = true;
        }
        self
    }

    /// Whether the session grants the given permission slug.
    #[must_use]
    pub fn has_permission(&self, slug: &str) -> bool {
        self.full_access || self.permissions.iter().any(|held| held == slug)
    }

    /// Whether the session grants any of the given permission slugs.
    #[must_use]
    pub fn has_any_permission(&self, slugs: &[&str]) -> bool {
        self.full_access || slugs.iter().any(|slug| self.has_permission(slug))
    }
}

/// Login request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginPayload {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// Registration request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterPayload {
    /// Display name for the new account.
    pub name: String,
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// Refresh-token request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshPayload {
    /// Refresh token from the cached session.
    pub refresh_token: String,
}

/// Gender values accepted by the user endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    /// Male.
    Male,
    /// Female.
    Female,
    /// Other or undisclosed.
    Other,
}

/// Account approval workflow status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserStatus {
    /// Awaiting approval.
    Pending,
    /// Approved and usable.
    Approved,
    /// Rejected by an administrator.
    Rejected,
}

/// Role reference embedded in user records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRef {
    /// Role id.
    pub id: i64,
    /// Role name.
    pub name: String,
    /// Role description.
    #[serde(default)]
    pub description: String,
}

/// Administered user account.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Server-assigned id.
    pub id: i64,
    /// First name.
    pub first_name: String,
    /// Optional middle name.
    #[serde(default)]
    pub middle_name: Option<String>,
    /// Last name.
    pub last_name: String,
    /// Precomputed display name.
    pub name: String,
    /// Account email.
    pub email: String,
    /// Gender.
    pub gender: Gender,
    /// Contact phone number.
    #[serde(default)]
    pub phone: String,
    /// Birth date (ISO date string).
    #[serde(default)]
    pub date_of_birth: String,
    /// Roles held by the user.
    #[serde(default)]
    pub roles: Vec<RoleRef>,
    /// Direct permission slugs granted outside roles.
    #[serde(default)]
    pub permissions: Vec<String>,
    /// Whether the account is active.
    pub active: bool,
    /// Approval workflow status.
    pub user_status: UserStatus,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp.
    #[serde(default)]
    pub updated_at: String,
}

/// Create/update request body for users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    /// First name.
    pub first_name: String,
    /// Optional middle name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    /// Last name.
    pub last_name: String,
    /// Account email.
    pub email: String,
    /// Password; omitted to keep the existing one on update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Gender.
    pub gender: Gender,
    /// Contact phone number.
    pub phone: String,
    /// Birth date (ISO date string).
    pub date_of_birth: String,
    /// Role names to assign.
    pub roles: Vec<String>,
    /// Optional direct permission grants.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direct_permissions: Option<Vec<String>>,
    /// Whether the account is active.
    pub active: bool,
    /// Approval workflow status.
    pub user_status: UserStatus,
}

/// Atomic authorization unit aggregated by roles.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    /// Server-assigned id.
    pub id: i64,
    /// Human-readable name.
    pub name: String,
    /// Module/category label for grouping.
    #[serde(default)]
    pub category: String,
    /// Unique machine slug.
    pub slug: String,
    /// Target API URL this permission guards.
    #[serde(default)]
    pub api_url: String,
    /// Target API method this permission guards.
    #[serde(default)]
    pub api_method: String,
    /// Description.
    #[serde(default)]
    pub description: String,
}

/// Create/update request body for permissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionPayload {
    /// Human-readable name.
    pub name: String,
    /// Module/category label.
    pub category: String,
    /// Unique machine slug.
    pub slug: String,
    /// Target API URL.
    pub api_url: String,
    /// Target API method.
    pub api_method: String,
    /// Description.
    pub description: String,
}

/// Named aggregate of permissions assignable to users.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    /// Server-assigned id.
    pub id: i64,
    /// Role name.
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: String,
    /// Whether the role is active.
    pub active: bool,
    /// Terminal override ignoring the explicit permission list.
    #[serde(default)]
    pub full_access: bool,
    /// Permissions granted by this role.
    #[serde(default)]
    pub permissions: Vec<Permission>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp.
    #[serde(default)]
    pub updated_at: String,
}

/// Create/update request body for roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RolePayload {
    /// Role name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Ids of permissions to grant; ignored server-side when full access.
    pub permission_id: Vec<i64>,
    /// Whether the role is active.
    pub is_active: bool,
    /// Terminal full-access override.
    pub is_full_access: bool,
}

/// Blog post category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Server-assigned id.
    pub id: i64,
    /// Category name.
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: String,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Create/update request body for categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryPayload {
    /// Category name.
    pub name: String,
    /// Description.
    pub description: String,
}

/// Post visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PostType {
    /// Visible to everyone.
    Public,
    /// Visible to the author only.
    Private,
}

/// Blog post as served to the current viewer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Server-assigned id.
    pub id: i64,
    /// Title.
    pub title: String,
    /// Short teaser shown in lists.
    #[serde(default)]
    pub excerpt: String,
    /// Full body content.
    #[serde(default)]
    pub content: String,
    /// Author user id.
    pub author_id: i64,
    /// Author display name.
    #[serde(default)]
    pub author_name: String,
    /// Category the post belongs to.
    pub category: Category,
    /// Cover image URL.
    #[serde(default)]
    pub image: String,
    /// Visibility.
    #[serde(rename = "type")]
    pub kind: PostType,
    /// Total view count.
    #[serde(default)]
    pub view_count: u64,
    /// Net vote count.
    #[serde(default)]
    pub vote_count: i64,
    /// Comment count.
    #[serde(default)]
    pub comment_count: u64,
    /// Whether the current viewer bookmarked this post.
    #[serde(default)]
    pub is_bookmarked: bool,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp.
    #[serde(default)]
    pub updated_at: String,
}

/// Create/update request body for posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPayload {
    /// Title.
    pub title: String,
    /// Short teaser shown in lists.
    pub excerpt: String,
    /// Full body content.
    pub content: String,
    /// Id of the category to attach.
    pub category_id: i64,
    /// Optional cover image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Visibility.
    #[serde(rename = "type")]
    pub kind: PostType,
}

/// Comment node; replies nest recursively under their parent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Server-assigned id.
    pub id: i64,
    /// Comment body.
    pub content: String,
    /// Author user id.
    pub author_id: i64,
    /// Author display name.
    #[serde(default)]
    pub author_name: String,
    /// Post the comment belongs to.
    pub post_id: i64,
    /// Parent comment id; `None` marks a top-level comment.
    #[serde(default)]
    pub parent_id: Option<i64>,
    /// Ordered child replies.
    #[serde(default)]
    pub replies: Vec<Comment>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp.
    #[serde(default)]
    pub updated_at: String,
}

/// Create request body for comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentPayload {
    /// Comment body.
    pub content: String,
    /// Post to attach the comment to.
    pub post_id: i64,
    /// Parent comment id for replies; `None` posts at top level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
}

/// Purchasable subscription plan.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPlan {
    /// Server-assigned id.
    pub id: i64,
    /// Plan name.
    pub name: String,
    /// Price in the platform currency.
    pub price: f64,
    /// Posts allowed during the subscription.
    pub post_limit: u32,
    /// Subscription length in days.
    pub duration_days: u32,
    /// Marketing description.
    #[serde(default)]
    pub description: String,
}

/// Subscription lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SubscriptionStatus {
    /// Currently active.
    Active,
    /// Ran past its end date.
    Expired,
    /// Cancelled by the user.
    Cancelled,
    /// Superseded by a higher plan.
    Upgraded,
}

/// The viewer's subscription to a pricing plan.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    /// Server-assigned id.
    pub id: i64,
    /// Subscribing user id.
    pub user_id: i64,
    /// Plan subscribed to.
    pub plan: PricingPlan,
    /// Subscription start date.
    pub start_date: String,
    /// Subscription end date.
    pub end_date: String,
    /// Lifecycle status.
    pub status: SubscriptionStatus,
    /// Posts remaining under the plan limit.
    #[serde(default)]
    pub remaining_posts: Option<u32>,
}

/// Gateway order handle returned by order creation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOrder {
    /// Gateway order id.
    pub order_id: String,
    /// Public gateway key for the browser widget.
    pub razorpay_key: String,
    /// Amount in minor currency units.
    pub amount: u64,
    /// ISO currency code.
    pub currency: String,
    /// Gateway order status.
    pub status: String,
}

/// Order-creation request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderPayload {
    /// Plan being purchased.
    pub plan_id: i64,
    /// Amount in the platform currency.
    pub amount: f64,
    /// ISO currency code.
    pub currency: String,
}

/// Payment-verification request body; field names match the gateway callback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyPaymentPayload {
    /// Gateway order id.
    pub razorpay_order_id: String,
    /// Gateway payment id.
    pub razorpay_payment_id: String,
    /// Gateway signature over order and payment ids.
    pub razorpay_signature: String,
    /// Plan id, stringly typed to match the gateway callback.
    #[serde(rename = "planId")]
    pub plan_id: String,
}

#[cfg(test)]
mod tests {
    use super::{ApiError, Comment, Envelope, ListPayload, Session, User, reduce_message};

    fn session_fixture() -> Session {
        Session {
            access_token: "acc".to_string(),
            refresh_token: "ref".to_string(),
            token_type: "Bearer".to_string(),
            expires_in: 3600,
            id: 7,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            permissions: vec!["POST_READ".to_string()],
            roles: vec!["EDITOR".to_string()],
            full_access: false,
        }
    }

    #[test]
    fn envelope_success_yields_data() {
        let envelope: Envelope<u32> = serde_json::from_str(
            r#"{"timestamp":"2024-01-01T00:00:00Z","status":"SUCCESS","data":42,"message":"ok","errors":[]}"#,
        )
        .expect("decode envelope");
        assert_eq!(envelope.into_result(200), Ok(42));
    }

    #[test]
    fn non_success_status_is_an_error_even_on_http_200() {
        let envelope: Envelope<u32> = serde_json::from_str(
            r#"{"status":"FAILURE","data":42,"message":"quota exceeded","errors":[]}"#,
        )
        .expect("decode envelope");
        let err = envelope.into_result(200).expect_err("must reject");
        assert_eq!(
            err,
            ApiError::Api {
                status: 200,
                message: "quota exceeded".to_string()
            }
        );
    }

    #[test]
    fn optional_reduction_accepts_a_successful_empty_payload() {
        let envelope: Envelope<u32> =
            serde_json::from_str(r#"{"status":"SUCCESS","data":null,"message":"none yet"}"#)
                .expect("decode envelope");
        assert_eq!(envelope.into_optional(200), Ok(None));

        let envelope: Envelope<u32> =
            serde_json::from_str(r#"{"status":"FAILURE","message":"nope"}"#)
                .expect("decode envelope");
        assert!(envelope.into_optional(200).is_err());
    }

    #[test]
    fn envelope_decodes_payloads_without_a_default_impl() {
        let raw = r#"{
            "status": "SUCCESS",
            "data": {
                "accessToken": "acc", "refreshToken": "ref", "tokenType": "Bearer",
                "expiresIn": 3600, "id": 7, "name": "Ada", "email": "ada@example.com"
            }
        }"#;
        let envelope: Envelope<Session> = serde_json::from_str(raw).expect("decode envelope");
        let session = envelope.into_result(200).expect("success");
        assert_eq!(session.id, 7);
        assert!(session.permissions.is_empty());
    }

    #[test]
    fn message_reduction_priority_order() {
        assert_eq!(
            reduce_message(Some("primary"), &["secondary".to_string()], "transport"),
            "primary"
        );
        assert_eq!(
            reduce_message(None, &["secondary".to_string()], "transport"),
            "secondary"
        );
        assert_eq!(reduce_message(Some("  "), &[], "transport"), "transport");
    }

    #[test]
    fn spring_page_normalizes() {
        let raw = r#"{
            "status": "SUCCESS",
            "data": {
                "content": [{"id": 1, "content": "hi", "authorId": 2, "postId": 3}],
                "size": 10,
                "number": 0,
                "totalElements": 1,
                "totalPages": 1
            }
        }"#;
        let envelope: Envelope<ListPayload<Comment>> =
            serde_json::from_str(raw).expect("decode page");
        let page = envelope.into_page(200).expect("success");
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.page.total_elements, 1);
        assert_eq!(page.page.size, 10);
    }

    #[test]
    fn flat_page_with_sibling_page_info_normalizes() {
        let raw = r#"{
            "status": "SUCCESS",
            "data": [{
                "id": 5, "firstName": "Ada", "lastName": "Byron", "name": "Ada Byron",
                "email": "ada@example.com", "gender": "FEMALE", "active": true,
                "userStatus": "APPROVED"
            }],
            "pageInfo": {"size": 10, "number": 2, "totalElements": 21, "totalPages": 3}
        }"#;
        let envelope: Envelope<ListPayload<User>> =
            serde_json::from_str(raw).expect("decode page");
        let page = envelope.into_page(200).expect("success");
        assert_eq!(page.items[0].name, "Ada Byron");
        assert_eq!(page.page.number, 2);
        assert_eq!(page.page.total_elements, 21);
    }

    #[test]
    fn flat_page_without_page_info_is_single_page() {
        let raw = r#"{"status":"SUCCESS","data":[{"id":1,"name":"Tech"},{"id":2,"name":"Life"}]}"#;
        let envelope: Envelope<ListPayload<super::Category>> =
            serde_json::from_str(raw).expect("decode page");
        let page = envelope.into_page(200).expect("success");
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.page.total_elements, 2);
        assert_eq!(page.page.total_pages, 1);
    }

    #[test]
    fn comment_payload_carries_only_content_post_and_parent() {
        let body = serde_json::to_value(super::CommentPayload {
            content: "hi".to_string(),
            post_id: 3,
            parent_id: None,
        })
        .expect("encode payload");
        assert_eq!(body, serde_json::json!({"content": "hi", "postId": 3}));

        let body = serde_json::to_value(super::CommentPayload {
            content: "hi".to_string(),
            post_id: 3,
            parent_id: Some(9),
        })
        .expect("encode payload");
        assert_eq!(body["parentId"], serde_json::json!(9));
    }

    #[test]
    fn sentinel_permission_normalizes_to_full_access() {
        let mut session = session_fixture();
        session.permissions.push(super::FULL_ACCESS.to_string());
        let session = session.normalized();
        assert!(session.full_access);
        assert!(session.has_permission("ANYTHING_AT_ALL"));
    }

    #[test]
    fn full_access_flag_grants_every_check() {
        let mut session = session_fixture();
        session.full_access = true;
        assert!(session.has_permission("USER_DELETE"));
        assert!(session.has_any_permission(&["NOPE", "ALSO_NOPE"]));
    }

    #[test]
    fn plain_session_checks_the_permission_list() {
        let session = session_fixture().normalized();
        assert!(session.has_permission("POST_READ"));
        assert!(!session.has_permission("POST_WRITE"));
        assert!(session.has_any_permission(&["POST_WRITE", "POST_READ"]));
        assert!(!session.has_any_permission(&["POST_WRITE"]));
    }

    #[test]
    fn unauthorized_detection() {
        let err = ApiError::Api {
            status: 401,
            message: "expired".to_string(),
        };
        assert!(err.is_unauthorized());
        assert!(!ApiError::transport("boom").is_unauthorized());
    }
}
