//! Pricing plans, the viewer's subscription, and checkout state.

use chronicle_api_models::{PaymentOrder, PricingPlan, Subscription};

/// Pricing slice of the app store.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct PricingState {
    /// Published plans, cheapest first as the server returns them.
    pub plans: Vec<PricingPlan>,
    /// The viewer's current subscription, if any.
    pub subscription: Option<Subscription>,
    /// Gateway order awaiting verification during checkout.
    pub order: Option<PaymentOrder>,
    /// Whether a plan or subscription fetch is in flight.
    pub loading: bool,
    /// Whether order creation or verification is in flight.
    pub payment_loading: bool,
    /// Display message for the last failed operation.
    pub error: Option<String>,
}

impl PricingState {
    /// Enter the pending state for a plan or subscription fetch.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Record a failed fetch.
    pub fn fail(&mut self, message: String) {
        self.loading = false;
        self.payment_loading = false;
        self.error = Some(message);
    }

    /// Replace the cached plan list.
    pub fn finish_plans(&mut self, plans: Vec<PricingPlan>) {
        self.loading = false;
        self.error = None;
        self.plans = plans;
    }

    /// Record the viewer's subscription; `None` means no active plan.
    pub fn finish_subscription(&mut self, subscription: Option<Subscription>) {
        self.loading = false;
        self.error = None;
        self.subscription = subscription;
    }

    /// Enter the pending state for order creation or verification.
    pub fn begin_payment(&mut self) {
        self.payment_loading = true;
        self.error = None;
    }

    /// Stash the gateway order pending verification.
    pub fn order_created(&mut self, order: PaymentOrder) {
        self.payment_loading = false;
        self.order = Some(order);
    }

    /// Checkout verified; the new subscription replaces the pending order.
    pub fn payment_verified(&mut self, subscription: Subscription) {
        self.payment_loading = false;
        self.order = None;
        self.subscription = Some(subscription);
    }
}

#[cfg(test)]
mod tests {
    use super::PricingState;
    use chronicle_api_models::{
        PaymentOrder, PricingPlan, Subscription, SubscriptionStatus,
    };

    fn plan() -> PricingPlan {
        PricingPlan {
            id: 1,
            name: "Starter".to_string(),
            price: 99.0,
            post_limit: 10,
            duration_days: 30,
            description: String::new(),
        }
    }

    fn subscription() -> Subscription {
        Subscription {
            id: 7,
            user_id: 1,
            plan: plan(),
            start_date: "2026-01-01".to_string(),
            end_date: "2026-01-31".to_string(),
            status: SubscriptionStatus::Active,
            remaining_posts: Some(10),
        }
    }

    fn order() -> PaymentOrder {
        PaymentOrder {
            order_id: "order_123".to_string(),
            razorpay_key: "rzp_test".to_string(),
            amount: 9900,
            currency: "INR".to_string(),
            status: "created".to_string(),
        }
    }

    #[test]
    fn verification_clears_the_pending_order() {
        let mut state = PricingState::default();
        state.begin_payment();
        state.order_created(order());
        assert!(state.order.is_some());
        state.begin_payment();
        state.payment_verified(subscription());
        assert_eq!(state.order, None);
        assert!(!state.payment_loading);
        assert_eq!(
            state.subscription.as_ref().map(|sub| sub.id),
            Some(7)
        );
    }

    #[test]
    fn payment_failure_clears_both_loading_flags() {
        let mut state = PricingState::default();
        state.begin_payment();
        state.fail("gateway rejected the order".to_string());
        assert!(!state.payment_loading);
        assert_eq!(state.error.as_deref(), Some("gateway rejected the order"));
    }
}
