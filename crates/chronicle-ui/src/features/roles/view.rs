//! Role administration pages.

use chronicle_api_models::RolePayload;
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
use crate::features::roles::api;

fn fetch_into_store(ctx: &ApiCtx, query: ListQuery) {
    let client = ctx.client.clone();
    let dispatch = Dispatch::<AppStore>::new();
    dispatch.reduce_mut(|store| store.roles.list.begin());
    spawn_local(async move {
        match api::fetch_roles(&client, &query).await {
            Ok(page) => dispatch.reduce_mut(|store| store.roles.list.finish(page)),
            Err(err) => dispatch.reduce_mut(|store| store.roles.list.fail(err.to_string())),
        }
    });
}

#[function_component(RolesPage)]
pub(crate) fn roles_page() -> Html {
    let Some(ctx) = use_context::<ApiCtx>() else {
        return html! {};
    };
    let list = use_selector(|store: &AppStore| store.roles.list.clone());
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
            if !gloo::dialogs::confirm("Delete this role?") {
                return;
            }
            let client = ctx.client.clone();
            let step_back = list.items.len() == 1 && (*query).page > 0;
            let query = query.clone();
            let dispatch = Dispatch::<AppStore>::new();
            spawn_local(async move {
                match api::delete_role(&client, id).await {
                    Ok(message) => {
                        dispatch.reduce_mut(|store| {
                            store.roles.list.remove(id);
                            store.toasts.push(ToastKind::Success, message);
                        });
                        if step_back {
                            query.set(ListQuery {
                                page: (*query).page - 1,
                                ..(*query).clone()
                            });
                        }
                    }
                    Err(err) => dispatch.reduce_mut(|store| store.roles.list.fail(err.to_string())),
                }
            });
        })
    };

    html! {
        <div class="admin-list">
            <header class="list-header">
                <h1>{"Roles"}</h1>
                <SearchBox on_search={on_search} placeholder="Search roles" />
                <Link<Route> to={Route::RoleCreate} classes="accent">{"New role"}</Link<Route>>
            </header>
            if let Some(message) = list.error.clone() {
                <p class="error" role="alert">{message}</p>
            }
            <table>
                <thead>
                    <tr>
                        <th>{"Name"}</th>
                        <th>{"Permissions"}</th>
                        <th>{"Active"}</th>
                        <th aria-label="Actions"></th>
                    </tr>
                </thead>
                <tbody>
                    {for list.items.iter().map(|role| {
                        let id = role.id;
                        let on_delete = on_delete.clone();
                        let grants = if role.full_access {
                            "Full access".to_string()
                        } else {
                            role.permissions.len().to_string()
                        };
                        html! {
                            <tr>
                                <td>{role.name.clone()}</td>
                                <td>{grants}</td>
                                <td>{if role.active { "Yes" } else { "No" }}</td>
                                <td class="row-actions">
                                    <Link<Route> to={Route::RoleEdit { id }}>{"Edit"}</Link<Route>>
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
pub(crate) struct RoleFormProps {
    /// Role to edit; `None` creates a new one.
    #[prop_or_default]
    pub id: Option<i64>,
}

#[function_component(RoleFormPage)]
pub(crate) fn role_form_page(props: &RoleFormProps) -> Html {
    let Some(ctx) = use_context::<ApiCtx>() else {
        return html! {};
    };
    let navigator = use_navigator();
    let catalog = use_selector(|store: &AppStore| store.permissions.catalog.clone());
    let name = use_state(String::new);
    let description = use_state(String::new);
    let selected = use_state(Vec::<i64>::new);
    let is_active = use_state(|| true);
    let full_access = use_state(|| false);
    let saving = use_state(|| false);

    {
        let client = ctx.client.clone();
        use_effect_with_deps(
            move |_| {
                let dispatch = Dispatch::<AppStore>::new();
                spawn_local(async move {
                    match crate::features::permissions::api::fetch_permission_catalog(&client).await
                    {
                        Ok(catalog) => {
                            dispatch.reduce_mut(|store| store.permissions.catalog = catalog);
                        }
                        Err(err) => dispatch.reduce_mut(|store| {
                            store.toasts.push(ToastKind::Error, err.to_string());
                        }),
                    }
                });
            },
            (),
        );
    }

    {
        let client = ctx.client.clone();
        let name = name.clone();
        let description = description.clone();
        let selected = selected.clone();
        let is_active = is_active.clone();
        let full_access = full_access.clone();
        use_effect_with_deps(
            move |id: &Option<i64>| {
                if let Some(id) = *id {
                    spawn_local(async move {
                        match api::fetch_role(&client, id).await {
                            Ok(role) => {
                                name.set(role.name);
                                description.set(role.description);
                                selected.set(
                                    role.permissions.iter().map(|perm| perm.id).collect(),
                                );
                                is_active.set(role.active);
                                full_access.set(role.full_access);
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

    let toggle_permission = {
        let selected = selected.clone();
        Callback::from(move |id: i64| {
            let mut ids = (*selected).clone();
            if let Some(pos) = ids.iter().position(|entry| *entry == id) {
                ids.remove(pos);
            } else {
                ids.push(id);
            }
            selected.set(ids);
        })
    };

    let onsubmit = {
        let name = name.clone();
        let description = description.clone();
        let selected = selected.clone();
        let is_active = is_active.clone();
        let full_access = full_access.clone();
        let saving = saving.clone();
        let id = props.id;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let payload = RolePayload {
                name: (*name).clone(),
                description: (*description).clone(),
                permission_id: if *full_access {
                    Vec::new()
                } else {
                    (*selected).clone()
                },
                is_active: *is_active,
                is_full_access: *full_access,
            };
            let client = ctx.client.clone();
            let navigator = navigator.clone();
            let saving = saving.clone();
            saving.set(true);
            let dispatch = Dispatch::<AppStore>::new();
            spawn_local(async move {
                let outcome = match id {
                    Some(id) => api::update_role(&client, id, &payload).await,
                    None => api::create_role(&client, &payload).await,
                };
                saving.set(false);
                match outcome {
                    Ok(_) => {
                        dispatch.reduce_mut(|store| {
                            store.toasts.push(ToastKind::Success, "Role saved");
                        });
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Roles);
                        }
                    }
                    Err(err) => dispatch.reduce_mut(|store| {
                        store.toasts.push(ToastKind::Error, err.to_string());
                    }),
                }
            });
        })
    };

    html! {
        <form class="admin-form" {onsubmit}>
            <h1>{if props.id.is_some() { "Edit role" } else { "New role" }}</h1>
            <label>
                {"Name"}
                <input required=true value={(*name).clone()} oninput={{
                    let name = name.clone();
                    Callback::from(move |e: InputEvent| {
                        if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                            name.set(input.value());
                        }
                    })
                }} />
            </label>
            <label>
                {"Description"}
                <input value={(*description).clone()} oninput={{
                    let description = description.clone();
                    Callback::from(move |e: InputEvent| {
                        if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                            description.set(input.value());
                        }
                    })
                }} />
            </label>
            <label class="checkbox">
                <input type="checkbox" checked={*full_access} onchange={{
                    let full_access = full_access.clone();
                    Callback::from(move |_| full_access.set(!*full_access))
                }} />
                {"Full access (ignores the permission list)"}
            </label>
            <fieldset disabled={*full_access}>
                <legend>{"Permissions"}</legend>
                {for catalog.iter().map(|permission| {
                    let id = permission.id;
                    let checked = selected.contains(&id);
                    let toggle_permission = toggle_permission.clone();
                    html! {
                        <label class="checkbox">
                            <input
                                type="checkbox"
                                checked={checked}
                                onchange={Callback::from(move |_| toggle_permission.emit(id))}
                            />
                            {permission.name.clone()}
                        </label>
                    }
                })}
            </fieldset>
            <label class="checkbox">
                <input type="checkbox" checked={*is_active} onchange={{
                    let is_active = is_active.clone();
                    Callback::from(move |_| is_active.set(!*is_active))
                }} />
                {"Active"}
            </label>
            <button type="submit" disabled={*saving}>
                {if *saving { "Saving…" } else { "Save" }}
            </button>
        </form>
    }
}
