//! Category administration pages.

use chronicle_api_models::CategoryPayload;
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
use crate::features::categories::api;

fn fetch_into_store(ctx: &ApiCtx, query: ListQuery) {
    let client = ctx.client.clone();
    let dispatch = Dispatch::<AppStore>::new();
    dispatch.reduce_mut(|store| store.categories.list.begin());
    spawn_local(async move {
        match api::fetch_categories(&client, &query).await {
            Ok(page) => dispatch.reduce_mut(|store| store.categories.list.finish(page)),
            Err(err) => dispatch.reduce_mut(|store| store.categories.list.fail(err.to_string())),
        }
    });
}

#[function_component(CategoriesPage)]
pub(crate) fn categories_page() -> Html {
    let Some(ctx) = use_context::<ApiCtx>() else {
        return html! {};
    };
    let list = use_selector(|store: &AppStore| store.categories.list.clone());
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
            if !gloo::dialogs::confirm("Delete this category?") {
                return;
            }
            let client = ctx.client.clone();
            let step_back = list.items.len() == 1 && (*query).page > 0;
            let query = query.clone();
            let dispatch = Dispatch::<AppStore>::new();
            spawn_local(async move {
                match api::delete_category(&client, id).await {
                    Ok(message) => {
                        dispatch.reduce_mut(|store| {
                            store.categories.list.remove(id);
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
                        store.categories.list.fail(err.to_string());
                    }),
                }
            });
        })
    };

    html! {
        <div class="admin-list">
            <header class="list-header">
                <h1>{"Categories"}</h1>
                <SearchBox on_search={on_search} placeholder="Search categories" />
                <Link<Route> to={Route::CategoryCreate} classes="accent">{"New category"}</Link<Route>>
            </header>
            if let Some(message) = list.error.clone() {
                <p class="error" role="alert">{message}</p>
            }
            <table>
                <thead>
                    <tr>
                        <th>{"Name"}</th>
                        <th>{"Description"}</th>
                        <th aria-label="Actions"></th>
                    </tr>
                </thead>
                <tbody>
                    {for list.items.iter().map(|category| {
                        let id = category.id;
                        let on_delete = on_delete.clone();
                        html! {
                            <tr>
                                <td>{category.name.clone()}</td>
                                <td>{category.description.clone()}</td>
                                <td class="row-actions">
                                    <Link<Route> to={Route::CategoryEdit { id }}>{"Edit"}</Link<Route>>
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
pub(crate) struct CategoryFormProps {
    /// Category to edit; `None` creates a new one.
    #[prop_or_default]
    pub id: Option<i64>,
}

#[function_component(CategoryFormPage)]
pub(crate) fn category_form_page(props: &CategoryFormProps) -> Html {
    let Some(ctx) = use_context::<ApiCtx>() else {
        return html! {};
    };
    let navigator = use_navigator();
    let name = use_state(String::new);
    let description = use_state(String::new);
    let saving = use_state(|| false);

    {
        let client = ctx.client.clone();
        let name = name.clone();
        let description = description.clone();
        use_effect_with_deps(
            move |id: &Option<i64>| {
                if let Some(id) = *id {
                    spawn_local(async move {
                        match api::fetch_category(&client, id).await {
                            Ok(category) => {
                                name.set(category.name);
                                description.set(category.description);
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
        let description = description.clone();
        let saving = saving.clone();
        let id = props.id;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let payload = CategoryPayload {
                name: (*name).clone(),
                description: (*description).clone(),
            };
            let client = ctx.client.clone();
            let navigator = navigator.clone();
            let saving = saving.clone();
            saving.set(true);
            let dispatch = Dispatch::<AppStore>::new();
            spawn_local(async move {
                let outcome = match id {
                    Some(id) => api::update_category(&client, id, &payload).await,
                    None => api::create_category(&client, &payload).await,
                };
                saving.set(false);
                match outcome {
                    Ok(_) => {
                        dispatch.reduce_mut(|store| {
                            store.toasts.push(ToastKind::Success, "Category saved");
                        });
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Categories);
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
            <h1>{if props.id.is_some() { "Edit category" } else { "New category" }}</h1>
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
                <textarea value={(*description).clone()} oninput={{
                    let description = description.clone();
                    Callback::from(move |e: InputEvent| {
                        if let Some(area) = e.target_dyn_into::<web_sys::HtmlTextAreaElement>() {
                            description.set(area.value());
                        }
                    })
                }} />
            </label>
            <button type="submit" disabled={*saving}>
                {if *saving { "Saving…" } else { "Save" }}
            </button>
        </form>
    }
}
