//! API calls for pricing plans, subscriptions and checkout.

use chronicle_api_models::{
    ApiError, CreateOrderPayload, PaymentOrder, PricingPlan, Subscription, VerifyPaymentPayload,
};

use crate::services::http::ApiClient;

pub(crate) async fn fetch_plans(client: &ApiClient) -> Result<Vec<PricingPlan>, ApiError> {
    client.get_public("/payment/public/pricing-plans").await
}

/// The viewer's current subscription; `None` when they never subscribed.
pub(crate) async fn fetch_subscription(
    client: &ApiClient,
) -> Result<Option<Subscription>, ApiError> {
    client.get_optional("/payment/current-subscription").await
}

pub(crate) async fn create_order(
    client: &ApiClient,
    payload: &CreateOrderPayload,
) -> Result<PaymentOrder, ApiError> {
    client.post("/payment/create-order", payload).await
}

pub(crate) async fn verify_payment(
    client: &ApiClient,
    payload: &VerifyPaymentPayload,
) -> Result<Subscription, ApiError> {
    client.post("/payment/verify-payment", payload).await
}
