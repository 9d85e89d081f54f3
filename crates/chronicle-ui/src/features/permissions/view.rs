//! Permission administration pages.

use chronicle_api_models::PermissionPayload;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

use crate::app::Route;
use crate::app::api::ApiCtx;
use crate::components::pagination::Pagination;
use crate::components::search::SearchBox;
use crate::core::query::ListQuery;
use crate::core::store::AppStore;
use crate::core::toast::ToastKind;
use crate::features::permissions::api;

fn fetch_into_store(ctx: &ApiCtx, query: ListQuery) {
    let client = ctx.client.clone();
    let dispatch = Dispatch::<AppStore>::new();
    dispatch.reduce_mut(|store| store.permissions.list.begin());
    spawn_local(async move {
        match api::fetch_permissions(&client, &query).await {
            Ok(page) => dispatch.reduce_mut(|store| store.permissions.list.finish(page)),
            Err(err) => dispatch.reduce_mut(|store| store.permissions.list.fail(err.to_string())),
        }
    });
}

#[function_component(PermissionsPage)]
pub(crate) fn permissions_page() -> Html {
    let Some(ctx) = use_context::<ApiCtx>() else {
        return html! {};
    };
    let list = use_selector(|store: &AppStore| store.permissions.list.clone());
    let query = use_state(ListQuery::default);

    {
        let ctx = ctx.clone();
        use_effect_with_deps(
            move |query: &ListQuery| {
                fetch_into_store(&ctx, query.clone());
            },
            (*query).clone(),
        );
    }

    let on_search = {
        let query = query.clone();
        Callback::from(move |search: String| {
            query.set(ListQuery {
                search,
                page: 0,
                ..(*query).clone()
            });
        })
    };
    let on_page = {
        let query = query.clone();
        Callback::from(move |page: u32| {
            query.set(ListQuery {
                page,
                ..(*query).clone()
            });
        })
    };
    let on_delete = {
        let list = list.clone();
        let query = query.clone();
        Callback::from(move |id: i64| {
            if !gloo::dialogs::confirm("Delete this permission?") {
                return;
            }
            let client = ctx.client.clone();
            let step_back = list.items.len() == 1 && (*query).page > 0;
            let query = query.clone();
            let dispatch = Dispatch::<AppStore>::new();
            spawn_local(async move {
                match api::delete_permission(&client, id).await {
                    Ok(message) => {
                        dispatch.reduce_mut(|store| {
                            store.permissions.list.remove(id);
                            store.toasts.push(ToastKind::Success, message);
                        });
                        if step_back {
                            query.set(ListQuery {
                                page: (*query).page - 1,
                                ..(*query).clone()
                            });
                        }
                    }
                    Err(err) => dispatch.reduce_mut(|store| {
                        store.permissions.list.fail(err.to_string());
                    }),
                }
            });
        })
    };

    html! {
        <div class="admin-list">
            <header class="list-header">
                <h1>{"Permissions"}</h1>
                <SearchBox on_search={on_search} placeholder="Search permissions" />
                <Link<Route> to={Route::PermissionCreate} classes="accent">{"New permission"}</Link<Route>>
            </header>
            if let Some(message) = list.error.clone() {
                <p class="error" role="alert">{message}</p>
            }
            <table>
                <thead>
                    <tr>
                        <th>{"Name"}</th>
                        <th>{"Slug"}</th>
                        <th>{"Category"}</th>
                        <th aria-label="Actions"></th>
                    </tr>
                </thead>
                <tbody>
                    {for list.items.iter().map(|permission| {
                        let id = permission.id;
                        let on_delete = on_delete.clone();
                        html! {
                            <tr>
                                <td>{permission.name.clone()}</td>
                                <td><code>{permission.slug.clone()}</code></td>
                                <td>{permission.category.clone()}</td>
                                <td class="row-actions">
                                    <Link<Route> to={Route::PermissionEdit { id }}>{"Edit"}</Link<Route>>
                                    <button class="ghost danger" onclick={Callback::from(move |_| on_delete.emit(id))}>
                                        {"Delete"}
                                    </button>
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
            <Pagination page={list.page} on_page={on_page} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct PermissionFormProps {
    /// Permission to edit; `None` creates a new one.
    #[prop_or_default]
    pub id: Option<i64>,
}

#[function_component(PermissionFormPage)]
pub(crate) fn permission_form_page(props: &PermissionFormProps) -> Html {
    let Some(ctx) = use_context::<ApiCtx>() else {
        return html! {};
    };
    let navigator = use_navigator();
    let name = use_state(String::new);
    let category = use_state(String::new);
    let slug = use_state(String::new);
    let api_url = use_state(String::new);
    let api_method = use_state(String::new);
    let description = use_state(String::new);
    let saving = use_state(|| false);

    {
        let client = ctx.client.clone();
        let name = name.clone();
        let category = category.clone();
        let slug = slug.clone();
        let api_url = api_url.clone();
        let api_method = api_method.clone();
        let description = description.clone();
        use_effect_with_deps(
            move |id: &Option<i64>| {
                if let Some(id) = *id {
                    spawn_local(async move {
                        match api::fetch_permission(&client, id).await {
                            Ok(permission) => {
                                name.set(permission.name);
                                category.set(permission.category);
                                slug.set(permission.slug);
                                api_url.set(permission.api_url);
                                api_method.set(permission.api_method);
                                description.set(permission.description);
                            }
                            Err(err) => Dispatch::<AppStore>::new().reduce_mut(|store| {
                                store.toasts.push(ToastKind::Error, err.to_string());
                            }),
                        }
                    });
                }
            },
            props.id,
        );
    }

    let onsubmit = {
        let name = name.clone();
        let category = category.clone();
        let slug = slug.clone();
        let api_url = api_url.clone();
        let api_method = api_method.clone();
        let description = description.clone();
        let saving = saving.clone();
        let id = props.id;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let payload = PermissionPayload {
                name: (*name).clone(),
                category: (*category).clone(),
                slug: (*slug).clone(),
                api_url: (*api_url).clone(),
                api_method: (*api_method).clone(),
                description: (*description).clone(),
            };
            let client = ctx.client.clone();
            let navigator = navigator.clone();
            let saving = saving.clone();
            saving.set(true);
            let dispatch = Dispatch::<AppStore>::new();
            spawn_local(async move {
                let outcome = match id {
                    Some(id) => api::update_permission(&client, id, &payload).await,
                    None => api::create_permission(&client, &payload).await,
                };
                saving.set(false);
                match outcome {
                    Ok(_) => {
                        dispatch.reduce_mut(|store| {
                            store.toasts.push(ToastKind::Success, "Permission saved");
                        });
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Permissions);
                        }
                    }
                    Err(err) => dispatch.reduce_mut(|store| {
                        store.toasts.push(ToastKind::Error, err.to_string());
                    }),
                }
            });
        })
    };

    let text_field = |label: &'static str, required: bool, handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        let value = (*handle).clone();
        html! {
            <label>
                {label}
                <input
                    required={required}
                    {value}
                    oninput={Callback::from(move |e: InputEvent| {
                        if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                            handle.set(input.value());
                        }
                    })}
                />
            </label>
        }
    };

    html! {
        <form class="admin-form" {onsubmit}>
            <h1>{if props.id.is_some() { "Edit permission" } else { "New permission" }}</h1>
            {text_field("Name", true, &name)}
            {text_field("Category", false, &category)}
            {text_field("Slug", true, &slug)}
            {text_field("API URL", false, &api_url)}
            {text_field("API method", false, &api_method)}
            {text_field("Description", false, &description)}
            <button type="submit" disabled={*saving}>
                {if *saving { "Saving…" } else { "Save" }}
            </button>
        </form>
    }
}
