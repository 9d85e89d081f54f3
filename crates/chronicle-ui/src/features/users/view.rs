//! User administration pages.

use chronicle_api_models::{Gender, Role, UserPayload, UserStatus};
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
use crate::features::users::api;

fn fetch_into_store(ctx: &ApiCtx, query: ListQuery) {
    let client = ctx.client.clone();
    let dispatch = Dispatch::<AppStore>::new();
    dispatch.reduce_mut(|store| store.users.list.begin());
    spawn_local(async move {
        match api::fetch_users(&client, &query).await {
            Ok(page) => dispatch.reduce_mut(|store| store.users.list.finish(page)),
            Err(err) => dispatch.reduce_mut(|store| store.users.list.fail(err.to_string())),
        }
    });
}

#[function_component(UsersPage)]
pub(crate) fn users_page() -> Html {
    let Some(ctx) = use_context::<ApiCtx>() else {
        return html! {};
    };
    let list = use_selector(|store: &AppStore| store.users.list.clone());
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
            if !gloo::dialogs::confirm("Delete this user?") {
                return;
            }
            let client = ctx.client.clone();
            let step_back = list.items.len() == 1 && (*query).page > 0;
            let query = query.clone();
            let dispatch = Dispatch::<AppStore>::new();
            spawn_local(async move {
                match api::delete_user(&client, id).await {
                    Ok(message) => {
                        dispatch.reduce_mut(|store| {
                            store.users.list.remove(id);
                            store.toasts.push(ToastKind::Success, message);
                        });
                        if step_back {
                            query.set(ListQuery {
                                page: (*query).page - 1,
                                ..(*query).clone()
                            });
                        }
                    }
                    Err(err) => dispatch.reduce_mut(|store| store.users.list.fail(err.to_string())),
                }
            });
        })
    };

    html! {
        <div class="admin-list">
            <header class="list-header">
                <h1>{"Users"}</h1>
                <SearchBox on_search={on_search} placeholder="Search users" />
                <Link<Route> to={Route::UserCreate} classes="accent">{"New user"}</Link<Route>>
            </header>
            if let Some(message) = list.error.clone() {
                <p class="error" role="alert">{message}</p>
            }
            <table>
                <thead>
                    <tr>
                        <th>{"Name"}</th>
                        <th>{"Email"}</th>
                        <th>{"Roles"}</th>
                        <th>{"Status"}</th>
                        <th aria-label="Actions"></th>
                    </tr>
                </thead>
                <tbody>
                    {for list.items.iter().map(|user| {
                        let id = user.id;
                        let on_delete = on_delete.clone();
                        let roles = user
                            .roles
                            .iter()
                            .map(|role| role.name.clone())
                            .collect::<Vec<_>>()
                            .join(", ");
                        html! {
                            <tr>
                                <td>{user.name.clone()}</td>
                                <td>{user.email.clone()}</td>
                                <td>{roles}</td>
                                <td>{match user.user_status {
                                    UserStatus::Pending => "Pending",
                                    UserStatus::Approved => "Approved",
                                    UserStatus::Rejected => "Rejected",
                                }}</td>
                                <td class="row-actions">
                                    <Link<Route> to={Route::UserEdit { id }}>{"Edit"}</Link<Route>>
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
pub(crate) struct UserFormProps {
    /// User to edit; `None` creates a new one.
    #[prop_or_default]
    pub id: Option<i64>,
}

#[function_component(UserFormPage)]
pub(crate) fn user_form_page(props: &UserFormProps) -> Html {
    let Some(ctx) = use_context::<ApiCtx>() else {
        return html! {};
    };
    let navigator = use_navigator();
    let first_name = use_state(String::new);
    let middle_name = use_state(String::new);
    let last_name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let gender = use_state(|| Gender::Other);
    let phone = use_state(String::new);
    let date_of_birth = use_state(String::new);
    let selected_roles = use_state(Vec::<String>::new);
    let active = use_state(|| true);
    let status = use_state(|| UserStatus::Approved);
    let available_roles = use_state(Vec::<Role>::new);
    let saving = use_state(|| false);

    {
        let client = ctx.client.clone();
        let available_roles = available_roles.clone();
        use_effect_with_deps(
            move |_| {
                let query = ListQuery {
                    size: 200,
                    sort_by: "name".to_string(),
                    ..ListQuery::default()
                };
                spawn_local(async move {
                    match crate::features::roles::api::fetch_roles(&client, &query).await {
                        Ok(page) => available_roles.set(page.items),
                        Err(err) => Dispatch::<AppStore>::new().reduce_mut(|store| {
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
        let first_name = first_name.clone();
        let middle_name = middle_name.clone();
        let last_name = last_name.clone();
        let email = email.clone();
        let gender = gender.clone();
        let phone = phone.clone();
        let date_of_birth = date_of_birth.clone();
        let selected_roles = selected_roles.clone();
        let active = active.clone();
        let status = status.clone();
        use_effect_with_deps(
            move |id: &Option<i64>| {
                if let Some(id) = *id {
                    spawn_local(async move {
                        match api::fetch_user(&client, id).await {
                            Ok(user) => {
                                first_name.set(user.first_name);
                                middle_name.set(user.middle_name.unwrap_or_default());
                                last_name.set(user.last_name);
                                email.set(user.email);
                                gender.set(user.gender);
                                phone.set(user.phone);
                                date_of_birth.set(user.date_of_birth);
                                selected_roles
                                    .set(user.roles.into_iter().map(|role| role.name).collect());
                                active.set(user.active);
                                status.set(user.user_status);
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

    let toggle_role = {
        let selected_roles = selected_roles.clone();
        Callback::from(move |name: String| {
            let mut roles = (*selected_roles).clone();
            if let Some(pos) = roles.iter().position(|role| *role == name) {
                roles.remove(pos);
            } else {
                roles.push(name);
            }
            selected_roles.set(roles);
        })
    };

    let onsubmit = {
        let first_name = first_name.clone();
        let middle_name = middle_name.clone();
        let last_name = last_name.clone();
        let email = email.clone();
        let password = password.clone();
        let gender = gender.clone();
        let phone = phone.clone();
        let date_of_birth = date_of_birth.clone();
        let selected_roles = selected_roles.clone();
        let active = active.clone();
        let status = status.clone();
        let saving = saving.clone();
        let id = props.id;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let payload = UserPayload {
                first_name: (*first_name).clone(),
                middle_name: (!middle_name.is_empty()).then(|| (*middle_name).clone()),
                last_name: (*last_name).clone(),
                email: (*email).clone(),
                password: (!password.is_empty()).then(|| (*password).clone()),
                gender: *gender,
                phone: (*phone).clone(),
                date_of_birth: (*date_of_birth).clone(),
                roles: (*selected_roles).clone(),
                direct_permissions: None,
                active: *active,
                user_status: *status,
            };
            let client = ctx.client.clone();
            let navigator = navigator.clone();
            let saving = saving.clone();
            saving.set(true);
            let dispatch = Dispatch::<AppStore>::new();
            spawn_local(async move {
                let outcome = match id {
                    Some(id) => api::update_user(&client, id, &payload).await,
                    None => api::create_user(&client, &payload).await,
                };
                saving.set(false);
                match outcome {
                    Ok(_) => {
                        dispatch.reduce_mut(|store| {
                            store.toasts.push(ToastKind::Success, "User saved");
                        });
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Users);
                        }
                    }
                    Err(err) => dispatch.reduce_mut(|store| {
                        store.toasts.push(ToastKind::Error, err.to_string());
                    }),
                }
            });
        })
    };

    let text_field = |label: &'static str,
                      kind: &'static str,
                      required: bool,
                      handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        let value = (*handle).clone();
        html! {
            <label>
                {label}
                <input
                    type={kind}
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
            <h1>{if props.id.is_some() { "Edit user" } else { "New user" }}</h1>
            {text_field("First name", "text", true, &first_name)}
            {text_field("Middle name", "text", false, &middle_name)}
            {text_field("Last name", "text", true, &last_name)}
            {text_field("Email", "email", true, &email)}
            {text_field(
                if props.id.is_some() { "Password (leave blank to keep)" } else { "Password" },
                "password",
                props.id.is_none(),
                &password,
            )}
            <label>
                {"Gender"}
                <select onchange={{
                    let gender = gender.clone();
                    Callback::from(move |e: Event| {
                        if let Some(select) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
                            gender.set(match select.value().as_str() {
                                "MALE" => Gender::Male,
                                "FEMALE" => Gender::Female,
                                _ => Gender::Other,
                            });
                        }
                    })
                }}>
                    <option value="MALE" selected={*gender == Gender::Male}>{"Male"}</option>
                    <option value="FEMALE" selected={*gender == Gender::Female}>{"Female"}</option>
                    <option value="OTHER" selected={*gender == Gender::Other}>{"Other"}</option>
                </select>
            </label>
            {text_field("Phone", "tel", false, &phone)}
            {text_field("Date of birth", "date", false, &date_of_birth)}
            <fieldset>
                <legend>{"Roles"}</legend>
                {for available_roles.iter().map(|role| {
                    let name = role.name.clone();
                    let checked = selected_roles.contains(&name);
                    let toggle_role = toggle_role.clone();
                    html! {
                        <label class="checkbox">
                            <input
                                type="checkbox"
                                checked={checked}
                                onchange={Callback::from(move |_| toggle_role.emit(name.clone()))}
                            />
                            {role.name.clone()}
                        </label>
                    }
                })}
            </fieldset>
            <label class="checkbox">
                <input type="checkbox" checked={*active} onchange={{
                    let active = active.clone();
                    Callback::from(move |_| active.set(!*active))
                }} />
                {"Active"}
            </label>
            <label>
                {"Status"}
                <select onchange={{
                    let status = status.clone();
                    Callback::from(move |e: Event| {
                        if let Some(select) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
                            status.set(match select.value().as_str() {
                                "PENDING" => UserStatus::Pending,
                                "REJECTED" => UserStatus::Rejected,
                                _ => UserStatus::Approved,
                            });
                        }
                    })
                }}>
                    <option value="PENDING" selected={*status == UserStatus::Pending}>{"Pending"}</option>
                    <option value="APPROVED" selected={*status == UserStatus::Approved}>{"Approved"}</option>
                    <option value="REJECTED" selected={*status == UserStatus::Rejected}>{"Rejected"}</option>
                </select>
            </label>
            <button type="submit" disabled={*saving}>
                {if *saving { "Saving…" } else { "Save" }}
            </button>
        </form>
    }
}
