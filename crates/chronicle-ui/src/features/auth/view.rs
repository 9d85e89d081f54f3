//! Sign-in and sign-up pages.

use chronicle_api_models::{LoginPayload, RegisterPayload};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

use crate::app::Route;
use crate::app::api::ApiCtx;
use crate::core::store::AppStore;
use crate::core::toast::ToastKind;
use crate::features::auth::api;
use crate::services::storage;

fn input_value(e: &InputEvent) -> Option<String> {
    e.target_dyn_into::<web_sys::HtmlInputElement>()
        .map(|input| input.value())
}

#[function_component(LoginPage)]
pub(crate) fn login_page() -> Html {
    let Some(ctx) = use_context::<ApiCtx>() else {
        return html! {};
    };
    let navigator = use_navigator();
    let loading = use_selector(|store: &AppStore| store.auth.loading);
    let error = use_selector(|store: &AppStore| store.auth.error.clone());
    let email = use_state(String::new);
    let password = use_state(String::new);

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let client = ctx.client.clone();
            let navigator = navigator.clone();
            let dispatch = Dispatch::<AppStore>::new();
            let payload = LoginPayload {
                email: (*email).clone(),
                password: (*password).clone(),
            };
            dispatch.reduce_mut(|store| store.auth.begin());
            spawn_local(async move {
                match api::login(&client, &payload).await {
                    Ok(session) => {
                        storage::store_session(&session);
                        dispatch.reduce_mut(|store| {
                            store.auth.sign_in(session);
                            store.toasts.push(ToastKind::Success, "Welcome back");
                        });
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Home);
                        }
                    }
                    Err(err) => {
                        dispatch.reduce_mut(|store| store.auth.fail(err.to_string()));
                    }
                }
            });
        })
    };

    html! {
        <div class="auth-page">
            <form class="card" {onsubmit}>
                <h1>{"Sign in"}</h1>
                if let Some(message) = (*error).clone() {
                    <p class="error" role="alert">{message}</p>
                }
                <label>
                    {"Email"}
                    <input
                        type="email"
                        required=true
                        value={(*email).clone()}
                        oninput={{
                            let email = email.clone();
                            Callback::from(move |e: InputEvent| {
                                if let Some(value) = input_value(&e) {
                                    email.set(value);
                                }
                            })
                        }}
                    />
                </label>
                <label>
                    {"Password"}
                    <input
                        type="password"
                        required=true
                        value={(*password).clone()}
                        oninput={{
                            let password = password.clone();
                            Callback::from(move |e: InputEvent| {
                                if let Some(value) = input_value(&e) {
                                    password.set(value);
                                }
                            })
                        }}
                    />
                </label>
                <button type="submit" disabled={*loading}>
                    {if *loading { "Signing in…" } else { "Sign in" }}
                </button>
                <p class="muted">
                    {"No account yet? "}
                    <Link<Route> to={Route::Signup}>{"Sign up"}</Link<Route>>
                </p>
            </form>
        </div>
    }
}

#[function_component(SignupPage)]
pub(crate) fn signup_page() -> Html {
    let Some(ctx) = use_context::<ApiCtx>() else {
        return html! {};
    };
    let navigator = use_navigator();
    let loading = use_selector(|store: &AppStore| store.auth.loading);
    let error = use_selector(|store: &AppStore| store.auth.error.clone());
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let client = ctx.client.clone();
            let navigator = navigator.clone();
            let dispatch = Dispatch::<AppStore>::new();
            let payload = RegisterPayload {
                name: (*name).clone(),
                email: (*email).clone(),
                password: (*password).clone(),
            };
            dispatch.reduce_mut(|store| store.auth.begin());
            spawn_local(async move {
                match api::register(&client, &payload).await {
                    Ok(session) => {
                        storage::store_session(&session);
                        dispatch.reduce_mut(|store| {
                            store.auth.sign_in(session);
                            store.toasts.push(ToastKind::Success, "Account created");
                        });
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Home);
                        }
                    }
                    Err(err) => {
                        dispatch.reduce_mut(|store| store.auth.fail(err.to_string()));
                    }
                }
            });
        })
    };

    html! {
        <div class="auth-page">
            <form class="card" {onsubmit}>
                <h1>{"Sign up"}</h1>
                if let Some(message) = (*error).clone() {
                    <p class="error" role="alert">{message}</p>
                }
                <label>
                    {"Name"}
                    <input
                        required=true
                        value={(*name).clone()}
                        oninput={{
                            let name = name.clone();
                            Callback::from(move |e: InputEvent| {
                                if let Some(value) = input_value(&e) {
                                    name.set(value);
                                }
                            })
                        }}
                    />
                </label>
                <label>
                    {"Email"}
                    <input
                        type="email"
                        required=true
                        value={(*email).clone()}
                        oninput={{
                            let email = email.clone();
                            Callback::from(move |e: InputEvent| {
                                if let Some(value) = input_value(&e) {
                                    email.set(value);
                                }
                            })
                        }}
                    />
                </label>
                <label>
                    {"Password"}
                    <input
                        type="password"
                        required=true
                        minlength="8"
                        value={(*password).clone()}
                        oninput={{
                            let password = password.clone();
                            Callback::from(move |e: InputEvent| {
                                if let Some(value) = input_value(&e) {
                                    password.set(value);
                                }
                            })
                        }}
                    />
                </label>
                <button type="submit" disabled={*loading}>
                    {if *loading { "Creating…" } else { "Create account" }}
                </button>
                <p class="muted">
                    {"Already registered? "}
                    <Link<Route> to={Route::Login}>{"Sign in"}</Link<Route>>
                </p>
            </form>
        </div>
    }
}
