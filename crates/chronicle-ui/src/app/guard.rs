//! Route guarding for the admin area.

use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

use crate::app::Route;
use crate::core::store::AppStore;
use crate::features::auth::state::{GateOutcome, gate};

#[derive(Properties, PartialEq)]
pub(crate) struct GuardedProps {
    pub children: Children,
    /// Permission slug required beyond being signed in.
    #[prop_or_default]
    pub required: Option<AttrValue>,
}

/// Renders its children only when the viewer passes the route gate.
///
/// Unauthenticated viewers are redirected to the login page; signed-in
/// viewers lacking the permission see an access-denied notice instead.
#[function_component(Guarded)]
pub(crate) fn guarded(props: &GuardedProps) -> Html {
    let session = use_selector(|store: &AppStore| store.auth.session.clone());
    let bootstrapped = use_selector(|store: &AppStore| store.auth.bootstrapped);

    // Hold rendering until the stored session has been read, otherwise a
    // page reload flashes the login redirect for signed-in viewers.
    if !*bootstrapped {
        return html! {};
    }

    match gate((*session).as_ref(), props.required.as_deref()) {
        GateOutcome::Allow => html! { <>{for props.children.iter()}</> },
        GateOutcome::RedirectToLogin => html! { <Redirect<Route> to={Route::Login} /> },
        GateOutcome::Denied => html! {
            <div class="access-denied">
                <h1>{"Access denied"}</h1>
                <p class="muted">{"Your account does not have permission to view this page."}</p>
            </div>
        },
    }
}
