//! Admin landing page: a short greeting and shortcuts into each area.

use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

use crate::app::Route;
use crate::core::store::AppStore;

#[function_component(DashboardPage)]
pub(crate) fn dashboard_page() -> Html {
    let session = use_selector(|store: &AppStore| store.auth.session.clone());

    let shortcuts: &[(Route, &str, &str)] = &[
        (Route::Users, "Users", "USER_READ"),
        (Route::Roles, "Roles", "ROLE_READ"),
        (Route::Permissions, "Permissions", "PERMISSION_READ"),
        (Route::Categories, "Categories", "CATEGORY_READ"),
        (Route::Posts, "Posts", "POST_READ"),
    ];

    html! {
        <div class="dashboard">
            <h1>
                {match session.as_ref() {
                    Some(session) => format!("Welcome, {}", session.name),
                    None => "Welcome".to_string(),
                }}
            </h1>
            <ul class="shortcut-cards">
                {for shortcuts.iter().filter_map(|(route, label, slug)| {
                    let allowed = session
                        .as_ref()
                        .is_some_and(|session| session.has_permission(slug));
                    allowed.then(|| html! {
                        <li>
                            <Link<Route> to={route.clone()} classes="card">{*label}</Link<Route>>
                        </li>
                    })
                })}
            </ul>
        </div>
    }
}
