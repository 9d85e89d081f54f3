//! Application root: router, shells, guards and store bootstrap.

use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

use crate::app::api::ApiCtx;
use crate::app::guard::Guarded;
use crate::components::shell::{AdminShell, PublicShell};
use crate::components::toast::ToastHost;
use crate::core::store::AppStore;
use crate::core::toast::ToastKind;
use crate::features::auth::view::{LoginPage, SignupPage};
use crate::features::categories::view::{CategoriesPage, CategoryFormPage};
use crate::features::dashboard::view::DashboardPage;
use crate::features::permissions::view::{PermissionFormPage, PermissionsPage};
use crate::features::posts::view::{FeedPage, PostDetailPage, PostFormPage, PostsAdminPage};
use crate::features::pricing::view::{CheckoutPage, PricingPage};
use crate::features::roles::view::{RoleFormPage, RolesPage};
use crate::features::users::view::{UserFormPage, UsersPage};
use crate::services::storage;

pub(crate) mod api;
mod guard;
mod routes;

pub(crate) use routes::Route;

/// Base path every API call is made under; the dev server and the deployed
/// reverse proxy both mount the gateway here.
const API_BASE_URL: &str = "/api";

#[derive(Properties, PartialEq)]
struct PublicFrameProps {
    children: Children,
}

#[function_component(PublicFrame)]
fn public_frame(props: &PublicFrameProps) -> Html {
    let Some(ctx) = use_context::<ApiCtx>() else {
        return html! {};
    };
    let navigator = use_navigator();
    let session = use_selector(|store: &AppStore| store.auth.session.clone());

    let on_logout = Callback::from(move |()| {
        let client = ctx.client.clone();
        let navigator = navigator.clone();
        let dispatch = Dispatch::<AppStore>::new();
        spawn_local(async move {
            // Best-effort server-side revocation; local state goes either way.
            if let Err(err) = crate::features::auth::api::logout(&client).await {
                gloo::console::error!(format!("logout call failed: {err}"));
            }
            storage::clear_session();
            dispatch.reduce_mut(|store| {
                store.auth.sign_out();
                store.toasts.push(ToastKind::Info, "Signed out");
            });
            if let Some(navigator) = navigator {
                navigator.push(&Route::Home);
            }
        });
    });

    html! {
        <PublicShell session={(*session).clone()} on_logout={on_logout}>
            {for props.children.iter()}
        </PublicShell>
    }
}

#[derive(Properties, PartialEq)]
struct AdminFrameProps {
    children: Children,
    active: Route,
    #[prop_or_default]
    required: Option<AttrValue>,
}

#[function_component(AdminFrame)]
fn admin_frame(props: &AdminFrameProps) -> Html {
    let session = use_selector(|store: &AppStore| store.auth.session.clone());

    html! {
        <Guarded required={props.required.clone()}>
            <AdminShell active={props.active.clone()} session={(*session).clone()}>
                {for props.children.iter()}
            </AdminShell>
        </Guarded>
    }
}

#[allow(clippy::too_many_lines)]
fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <PublicFrame><FeedPage /></PublicFrame> },
        Route::PostDetail { id } => html! {
            <PublicFrame><PostDetailPage {id} /></PublicFrame>
        },
        Route::Login => html! { <PublicFrame><LoginPage /></PublicFrame> },
        Route::Signup => html! { <PublicFrame><SignupPage /></PublicFrame> },
        Route::Pricing => html! { <PublicFrame><PricingPage /></PublicFrame> },
        Route::Checkout { plan_id } => html! {
            <PublicFrame>
                <Guarded><CheckoutPage {plan_id} /></Guarded>
            </PublicFrame>
        },
        Route::AdminDashboard => html! {
            <AdminFrame active={Route::AdminDashboard}>
                <DashboardPage />
            </AdminFrame>
        },
        Route::Users => html! {
            <AdminFrame active={Route::Users} required="USER_READ">
                <UsersPage />
            </AdminFrame>
        },
        Route::UserCreate => html! {
            <AdminFrame active={Route::Users} required="USER_CREATE">
                <UserFormPage />
            </AdminFrame>
        },
        Route::UserEdit { id } => html! {
            <AdminFrame active={Route::Users} required="USER_UPDATE">
                <UserFormPage id={Some(id)} />
            </AdminFrame>
        },
        Route::Roles => html! {
            <AdminFrame active={Route::Roles} required="ROLE_READ">
                <RolesPage />
            </AdminFrame>
        },
        Route::RoleCreate => html! {
            <AdminFrame active={Route::Roles} required="ROLE_CREATE">
                <RoleFormPage />
            </AdminFrame>
        },
        Route::RoleEdit { id } => html! {
            <AdminFrame active={Route::Roles} required="ROLE_UPDATE">
                <RoleFormPage id={Some(id)} />
            </AdminFrame>
        },
        Route::Permissions => html! {
            <AdminFrame active={Route::Permissions} required="PERMISSION_READ">
                <PermissionsPage />
            </AdminFrame>
        },
        Route::PermissionCreate => html! {
            <AdminFrame active={Route::Permissions} required="PERMISSION_CREATE">
                <PermissionFormPage />
            </AdminFrame>
        },
        Route::PermissionEdit { id } => html! {
            <AdminFrame active={Route::Permissions} required="PERMISSION_UPDATE">
                <PermissionFormPage id={Some(id)} />
            </AdminFrame>
        },
        Route::Categories => html! {
            <AdminFrame active={Route::Categories} required="CATEGORY_READ">
                <CategoriesPage />
            </AdminFrame>
        },
        Route::CategoryCreate => html! {
            <AdminFrame active={Route::Categories} required="CATEGORY_CREATE">
                <CategoryFormPage />
            </AdminFrame>
        },
        Route::CategoryEdit { id } => html! {
            <AdminFrame active={Route::Categories} required="CATEGORY_UPDATE">
                <CategoryFormPage id={Some(id)} />
            </AdminFrame>
        },
        Route::Posts => html! {
            <AdminFrame active={Route::Posts} required="POST_READ">
                <PostsAdminPage />
            </AdminFrame>
        },
        Route::PostCreate => html! {
            <AdminFrame active={Route::Posts} required="POST_WRITE">
                <PostFormPage />
            </AdminFrame>
        },
        Route::PostEdit { id } => html! {
            <AdminFrame active={Route::Posts} required="POST_UPDATE">
                <PostFormPage id={Some(id)} />
            </AdminFrame>
        },
        Route::NotFound => html! {
            <PublicFrame>
                <div class="not-found">
                    <h1>{"404"}</h1>
                    <p class="muted">{"This page does not exist."}</p>
                </div>
            </PublicFrame>
        },
    }
}

/// Root component: bootstraps the session, provides the API client and
/// mounts the router.
#[function_component(ChronicleApp)]
pub(crate) fn chronicle_app() -> Html {
    let api_ctx = use_memo(|_| ApiCtx::new(API_BASE_URL), ());
    let toasts = use_selector(|store: &AppStore| store.toasts.toasts.clone());

    use_effect_with_deps(
        |_| {
            let raw = storage::load_raw_session();
            Dispatch::<AppStore>::new().reduce_mut(|store| store.auth.bootstrap(raw.as_deref()));
        },
        (),
    );

    let on_dismiss = Callback::from(|id: u64| {
        Dispatch::<AppStore>::new().reduce_mut(|store| store.toasts.dismiss(id));
    });

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
            <ToastHost toasts={(*toasts).clone()} on_dismiss={on_dismiss} />
        </ContextProvider<ApiCtx>>
    }
}

/// Mount the application onto the document body.
pub fn run_app() {
    console_error_panic_hook::set_once();
    yew::Renderer::<ChronicleApp>::new().render();
}
