//! Pricing and checkout pages.

use chronicle_api_models::{CreateOrderPayload, SubscriptionStatus, VerifyPaymentPayload};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

use crate::app::Route;
use crate::app::api::ApiCtx;
use crate::core::store::AppStore;
use crate::core::toast::ToastKind;
use crate::features::pricing::api;

#[function_component(PricingPage)]
pub(crate) fn pricing_page() -> Html {
    let Some(ctx) = use_context::<ApiCtx>() else {
        return html! {};
    };
    let navigator = use_navigator();
    let pricing = use_selector(|store: &AppStore| store.pricing.clone());
    let signed_in = use_selector(|store: &AppStore| store.auth.is_authenticated());

    {
        let client = ctx.client.clone();
        let signed_in = *signed_in;
        use_effect_with_deps(
            move |&signed_in: &bool| {
                let dispatch = Dispatch::<AppStore>::new();
                dispatch.reduce_mut(|store| store.pricing.begin());
                spawn_local(async move {
                    match api::fetch_plans(&client).await {
                        Ok(plans) => dispatch.reduce_mut(|store| store.pricing.finish_plans(plans)),
                        Err(err) => {
                            dispatch.reduce_mut(|store| store.pricing.fail(err.to_string()));
                            return;
                        }
                    }
                    if signed_in {
                        match api::fetch_subscription(&client).await {
                            Ok(subscription) => dispatch.reduce_mut(|store| {
                                store.pricing.finish_subscription(subscription);
                            }),
                            Err(err) => {
                                dispatch.reduce_mut(|store| store.pricing.fail(err.to_string()));
                            }
                        }
                    }
                });
            },
            signed_in,
        );
    }

    let on_choose = {
        let signed_in = signed_in.clone();
        Callback::from(move |plan_id: i64| {
            let Some(navigator) = navigator.clone() else {
                return;
            };
            if *signed_in {
                navigator.push(&Route::Checkout { plan_id });
            } else {
                navigator.push(&Route::Login);
            }
        })
    };

    let current_plan_id = pricing
        .subscription
        .as_ref()
        .filter(|sub| sub.status == SubscriptionStatus::Active)
        .map(|sub| sub.plan.id);

    html! {
        <div class="pricing-page">
            <h1>{"Pricing"}</h1>
            if let Some(subscription) = pricing.subscription.clone() {
                <p class="muted">
                    {format!(
                        "Current plan: {} (until {})",
                        subscription.plan.name, subscription.end_date
                    )}
                </p>
            }
            if let Some(message) = pricing.error.clone() {
                <p class="error" role="alert">{message}</p>
            }
            if pricing.loading {
                <p class="muted">{"Loading plans…"}</p>
            }
            <ul class="plan-cards">
                {for pricing.plans.iter().map(|plan| {
                    let id = plan.id;
                    let on_choose = on_choose.clone();
                    let current = current_plan_id == Some(id);
                    html! {
                        <li class="plan-card">
                            <h2>{plan.name.clone()}</h2>
                            <p class="price">{format!("₹{:.0}", plan.price)}</p>
                            <p class="muted">
                                {format!("{} posts · {} days", plan.post_limit, plan.duration_days)}
                            </p>
                            <p>{plan.description.clone()}</p>
                            <button
                                disabled={current}
                                onclick={Callback::from(move |_| on_choose.emit(id))}
                            >
                                {if current { "Current plan" } else { "Choose" }}
                            </button>
                        </li>
                    }
                })}
            </ul>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct CheckoutProps {
    pub plan_id: i64,
}

/// Checkout runs in two steps: create the gateway order, then confirm the
/// gateway's callback fields so the server can verify the signature.
#[function_component(CheckoutPage)]
pub(crate) fn checkout_page(props: &CheckoutProps) -> Html {
    let Some(ctx) = use_context::<ApiCtx>() else {
        return html! {};
    };
    let navigator = use_navigator();
    let pricing = use_selector(|store: &AppStore| store.pricing.clone());
    let payment_id = use_state(String::new);
    let signature = use_state(String::new);

    let plan = pricing
        .plans
        .iter()
        .find(|plan| plan.id == props.plan_id)
        .cloned();

    {
        let client = ctx.client.clone();
        let plan = plan.clone();
        use_effect_with_deps(
            move |&(plan_id, _): &(i64, bool)| {
                let dispatch = Dispatch::<AppStore>::new();
                let Some(plan) = plan else {
                    // Deep link without the plan list loaded; fetch it and
                    // let the next render kick off the order.
                    dispatch.reduce_mut(|store| store.pricing.begin());
                    spawn_local(async move {
                        match api::fetch_plans(&client).await {
                            Ok(plans) => {
                                dispatch.reduce_mut(|store| store.pricing.finish_plans(plans));
                            }
                            Err(err) => {
                                dispatch.reduce_mut(|store| store.pricing.fail(err.to_string()));
                            }
                        }
                    });
                    return;
                };
                let payload = CreateOrderPayload {
                    plan_id,
                    amount: plan.price,
                    currency: "INR".to_string(),
                };
                dispatch.reduce_mut(|store| store.pricing.begin_payment());
                spawn_local(async move {
                    match api::create_order(&client, &payload).await {
                        Ok(order) => dispatch.reduce_mut(|store| store.pricing.order_created(order)),
                        Err(err) => dispatch.reduce_mut(|store| store.pricing.fail(err.to_string())),
                    }
                });
            },
            (props.plan_id, plan.is_some()),
        );
    }

    let onsubmit = {
        let pricing = pricing.clone();
        let payment_id = payment_id.clone();
        let signature = signature.clone();
        let plan_id = props.plan_id;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(order) = pricing.order.clone() else {
                return;
            };
            let payload = VerifyPaymentPayload {
                razorpay_order_id: order.order_id,
                razorpay_payment_id: (*payment_id).clone(),
                razorpay_signature: (*signature).clone(),
                plan_id: plan_id.to_string(),
            };
            let client = ctx.client.clone();
            let navigator = navigator.clone();
            let dispatch = Dispatch::<AppStore>::new();
            dispatch.reduce_mut(|store| store.pricing.begin_payment());
            spawn_local(async move {
                match api::verify_payment(&client, &payload).await {
                    Ok(subscription) => {
                        dispatch.reduce_mut(|store| {
                            store.pricing.payment_verified(subscription);
                            store.toasts.push(ToastKind::Success, "Subscription active");
                        });
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Pricing);
                        }
                    }
                    Err(err) => {
                        dispatch.reduce_mut(|store| store.pricing.fail(err.to_string()));
                    }
                }
            });
        })
    };

    html! {
        <div class="checkout-page">
            <h1>{"Checkout"}</h1>
            if let Some(plan) = plan {
                <p>{format!("{} · ₹{:.0}", plan.name, plan.price)}</p>
            }
            if let Some(message) = pricing.error.clone() {
                <p class="error" role="alert">{message}</p>
            }
            if pricing.payment_loading {
                <p class="muted">{"Talking to the payment gateway…"}</p>
            }
            if let Some(order) = pricing.order.clone() {
                <p class="muted">{format!(
                    "Order {} · {} {}",
                    order.order_id,
                    order.currency,
                    order.amount / 100
                )}</p>
                <form class="card" {onsubmit}>
                    <label>
                        {"Payment id"}
                        <input required=true value={(*payment_id).clone()} oninput={{
                            let payment_id = payment_id.clone();
                            Callback::from(move |e: InputEvent| {
                                if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                                    payment_id.set(input.value());
                                }
                            })
                        }} />
                    </label>
                    <label>
                        {"Signature"}
                        <input required=true value={(*signature).clone()} oninput={{
                            let signature = signature.clone();
                            Callback::from(move |e: InputEvent| {
                                if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                                    signature.set(input.value());
                                }
                            })
                        }} />
                    </label>
                    <button type="submit" disabled={pricing.payment_loading}>
                        {"Confirm payment"}
                    </button>
                </form>
            }
        </div>
    }
}
