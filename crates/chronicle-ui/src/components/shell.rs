//! Page chrome: public navbar and the admin sidebar layout.

use chronicle_api_models::Session;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::app::Route;

/// Permission slugs that unlock a link into the admin area.
const ADMIN_SLUGS: &[&str] = &[
    "USER_READ",
    "ROLE_READ",
    "PERMISSION_READ",
    "CATEGORY_READ",
    "POST_READ",
];

#[derive(Properties, PartialEq)]
pub(crate) struct PublicShellProps {
    pub children: Children,
    pub session: Option<Session>,
    pub on_logout: Callback<()>,
}

#[function_component(PublicShell)]
pub(crate) fn public_shell(props: &PublicShellProps) -> Html {
    let account = match &props.session {
        Some(session) => {
            let on_logout = props.on_logout.clone();
            let admin_link = session
                .has_any_permission(ADMIN_SLUGS)
                .then(|| html! { <Link<Route> to={Route::AdminDashboard}>{"Admin"}</Link<Route>> });
            html! {
                <>
                    {admin_link}
                    <span class="muted">{session.name.clone()}</span>
                    <button class="ghost" onclick={Callback::from(move |_| on_logout.emit(()))}>
                        {"Sign out"}
                    </button>
                </>
            }
        }
        None => html! {
            <>
                <Link<Route> to={Route::Login}>{"Sign in"}</Link<Route>>
                <Link<Route> to={Route::Signup} classes="accent">{"Sign up"}</Link<Route>>
            </>
        },
    };

    html! {
        <div class="public-shell">
            <header class="topbar">
                <Link<Route> to={Route::Home} classes="brand">{"Chronicle"}</Link<Route>>
                <nav>
                    <Link<Route> to={Route::Home}>{"Feed"}</Link<Route>>
                    <Link<Route> to={Route::Pricing}>{"Pricing"}</Link<Route>>
                </nav>
                <div class="account">{account}</div>
            </header>
            <main>{for props.children.iter()}</main>
            <footer class="muted">{"Chronicle"}</footer>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct AdminShellProps {
    pub children: Children,
    pub active: Route,
    pub session: Option<Session>,
}

#[function_component(AdminShell)]
pub(crate) fn admin_shell(props: &AdminShellProps) -> Html {
    let session = props.session.as_ref();
    let allowed = |slug: &str| session.is_some_and(|s| s.has_permission(slug));

    html! {
        <div class="admin-shell">
            <aside class="sidebar">
                <div class="brand">
                    <strong>{"Chronicle"}</strong>
                    <span class="muted">{"Admin"}</span>
                </div>
                <nav>
                    {nav_item(Route::AdminDashboard, "Dashboard", &props.active)}
                    {allowed("USER_READ").then(|| nav_item(Route::Users, "Users", &props.active))}
                    {allowed("ROLE_READ").then(|| nav_item(Route::Roles, "Roles", &props.active))}
                    {allowed("PERMISSION_READ")
                        .then(|| nav_item(Route::Permissions, "Permissions", &props.active))}
                    {allowed("CATEGORY_READ")
                        .then(|| nav_item(Route::Categories, "Categories", &props.active))}
                    {allowed("POST_READ").then(|| nav_item(Route::Posts, "Posts", &props.active))}
                </nav>
                <div class="sidebar-footer">
                    <Link<Route> to={Route::Home}>{"Back to site"}</Link<Route>>
                </div>
            </aside>
            <main class="admin-main">{for props.children.iter()}</main>
        </div>
    }
}

fn nav_item(route: Route, label: &str, active: &Route) -> Html {
    let class = if *active == route { "active" } else { "" };
    html! {
        <Link<Route> to={route} classes={classes!("nav-item", class)}>{label}</Link<Route>>
    }
}
