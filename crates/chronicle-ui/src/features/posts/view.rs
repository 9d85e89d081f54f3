//! Post pages: public feed, post detail, the author's admin list and the
//! post form.

use chronicle_api_models::{PostPayload, PostType};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

use crate::app::Route;
use crate::app::api::ApiCtx;
use crate::components::pagination::Pagination;
use crate::components::search::SearchBox;
use crate::core::query::PostQuery;
use crate::core::store::AppStore;
use crate::core::toast::ToastKind;
use crate::features::comments::view::CommentSection;
use crate::features::posts::api::{self, Vote};

fn fetch_feed_into_store(ctx: &ApiCtx, query: PostQuery) {
    let client = ctx.client.clone();
    let dispatch = Dispatch::<AppStore>::new();
    dispatch.reduce_mut(|store| store.posts.feed.begin());
    spawn_local(async move {
        match api::fetch_feed(&client, &query).await {
            Ok(page) => dispatch.reduce_mut(|store| store.posts.feed.finish(page)),
            Err(err) => dispatch.reduce_mut(|store| store.posts.feed.fail(err.to_string())),
        }
    });
}

#[function_component(FeedPage)]
pub(crate) fn feed_page() -> Html {
    let Some(ctx) = use_context::<ApiCtx>() else {
        return html! {};
    };
    let feed = use_selector(|store: &AppStore| store.posts.feed.clone());
    let signed_in = use_selector(|store: &AppStore| store.auth.is_authenticated());
    let query = use_state(PostQuery::default);

    {
        let ctx = ctx.clone();
        use_effect_with_deps(
            move |query: &PostQuery| {
                fetch_feed_into_store(&ctx, query.clone());
            },
            (*query).clone(),
        );
    }

    let on_search = {
        let query = query.clone();
        Callback::from(move |search: String| {
            query.set(PostQuery {
                search,
                page: 0,
                ..(*query).clone()
            });
        })
    };
    let on_page = {
        let query = query.clone();
        Callback::from(move |page: u32| {
            query.set(PostQuery {
                page,
                ..(*query).clone()
            });
        })
    };
    let on_vote = {
        let ctx = ctx.clone();
        Callback::from(move |(id, vote): (i64, Vote)| {
            let client = ctx.client.clone();
            let dispatch = Dispatch::<AppStore>::new();
            spawn_local(async move {
                match api::vote_post(&client, id, vote).await {
                    Ok(post) => dispatch.reduce_mut(|store| store.posts.upsert(post)),
                    Err(err) => dispatch.reduce_mut(|store| {
                        store.toasts.push(ToastKind::Error, err.to_string());
                    }),
                }
            });
        })
    };

    html! {
        <div class="feed-page">
            <div class="feed-toolbar">
                <SearchBox on_search={on_search} placeholder="Search posts" />
            </div>
            if let Some(message) = feed.error.clone() {
                <p class="error" role="alert">{message}</p>
            }
            if feed.loading {
                <p class="muted">{"Loading posts…"}</p>
            }
            <ul class="post-cards">
                {for feed.items.iter().map(|post| {
                    let id = post.id;
                    let on_vote = on_vote.clone();
                    html! {
                        <li class="post-card">
                            <Link<Route> to={Route::PostDetail { id }}>
                                <h2>{post.title.clone()}</h2>
                            </Link<Route>>
                            <p class="muted">
                                {format!("{} · {} · {} views", post.author_name, post.category.name, post.view_count)}
                            </p>
                            <p>{post.excerpt.clone()}</p>
                            <div class="post-meta">
                                if *signed_in {
                                    <button class="ghost" onclick={{
                                        let on_vote = on_vote.clone();
                                        Callback::from(move |_| on_vote.emit((id, Vote::Up)))
                                    }}>{"▲"}</button>
                                }
                                <span>{post.vote_count}</span>
                                if *signed_in {
                                    <button class="ghost" onclick={{
                                        let on_vote = on_vote.clone();
                                        Callback::from(move |_| on_vote.emit((id, Vote::Down)))
                                    }}>{"▼"}</button>
                                }
                                <span class="muted">{format!("{} comments", post.comment_count)}</span>
                            </div>
                        </li>
                    }
                })}
            </ul>
            <Pagination page={feed.page} on_page={on_page} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct PostDetailProps {
    pub id: i64,
}

#[function_component(PostDetailPage)]
pub(crate) fn post_detail_page(props: &PostDetailProps) -> Html {
    let Some(ctx) = use_context::<ApiCtx>() else {
        return html! {};
    };
    let post = use_selector(|store: &AppStore| store.posts.current.clone());
    let signed_in = use_selector(|store: &AppStore| store.auth.is_authenticated());

    {
        let ctx = ctx.clone();
        use_effect_with_deps(
            move |id: &i64| {
                let id = *id;
                let client = ctx.client.clone();
                let dispatch = Dispatch::<AppStore>::new();
                spawn_local(async move {
                    match api::fetch_post(&client, id).await {
                        Ok(post) => dispatch.reduce_mut(|store| store.posts.set_current(post)),
                        Err(err) => dispatch.reduce_mut(|store| {
                            store.toasts.push(ToastKind::Error, err.to_string());
                        }),
                    }
                });
                // View bump is best-effort; the count refreshes on next load.
                let client = ctx.client.clone();
                spawn_local(async move {
                    if let Err(err) = api::record_view(&client, id).await {
                        gloo::console::error!(format!("view bump failed: {err}"));
                    }
                });
                let dispatch = Dispatch::<AppStore>::new();
                move || dispatch.reduce_mut(|store| store.posts.clear_current())
            },
            props.id,
        );
    }

    let on_vote = {
        let ctx = ctx.clone();
        let id = props.id;
        Callback::from(move |vote: Vote| {
            let client = ctx.client.clone();
            let dispatch = Dispatch::<AppStore>::new();
            spawn_local(async move {
                match api::vote_post(&client, id, vote).await {
                    Ok(post) => dispatch.reduce_mut(|store| store.posts.upsert(post)),
                    Err(err) => dispatch.reduce_mut(|store| {
                        store.toasts.push(ToastKind::Error, err.to_string());
                    }),
                }
            });
        })
    };
    let on_bookmark = {
        let id = props.id;
        Callback::from(move |_| {
            let client = ctx.client.clone();
            let dispatch = Dispatch::<AppStore>::new();
            spawn_local(async move {
                match api::toggle_bookmark(&client, id).await {
                    Ok(post) => dispatch.reduce_mut(|store| store.posts.upsert(post)),
                    Err(err) => dispatch.reduce_mut(|store| {
                        store.toasts.push(ToastKind::Error, err.to_string());
                    }),
                }
            });
        })
    };

    let Some(post) = (*post).clone() else {
        return html! { <p class="muted">{"Loading post…"}</p> };
    };

    html! {
        <article class="post-detail">
            <h1>{post.title.clone()}</h1>
            <p class="muted">
                {format!("{} · {} · {} views", post.author_name, post.category.name, post.view_count)}
            </p>
            if !post.image.is_empty() {
                <img src={post.image.clone()} alt="" />
            }
            <div class="post-body">{post.content.clone()}</div>
            if *signed_in {
                <div class="post-actions">
                    <button class="ghost" onclick={{
                        let on_vote = on_vote.clone();
                        Callback::from(move |_| on_vote.emit(Vote::Up))
                    }}>{"▲"}</button>
                    <span>{post.vote_count}</span>
                    <button class="ghost" onclick={Callback::from(move |_| on_vote.emit(Vote::Down))}>
                        {"▼"}
                    </button>
                    <button class="ghost" onclick={on_bookmark}>
                        {if post.is_bookmarked { "Bookmarked" } else { "Bookmark" }}
                    </button>
                </div>
            }
            <CommentSection post_id={post.id} />
        </article>
    }
}

fn fetch_mine_into_store(ctx: &ApiCtx, query: PostQuery) {
    let client = ctx.client.clone();
    let dispatch = Dispatch::<AppStore>::new();
    dispatch.reduce_mut(|store| store.posts.mine.begin());
    spawn_local(async move {
        match api::fetch_my_posts(&client, &query).await {
            Ok(page) => dispatch.reduce_mut(|store| store.posts.mine.finish(page)),
            Err(err) => dispatch.reduce_mut(|store| store.posts.mine.fail(err.to_string())),
        }
    });
}

#[function_component(PostsAdminPage)]
pub(crate) fn posts_admin_page() -> Html {
    let Some(ctx) = use_context::<ApiCtx>() else {
        return html! {};
    };
    let list = use_selector(|store: &AppStore| store.posts.mine.clone());
    let query = use_state(PostQuery::default);

    {
        let ctx = ctx.clone();
        use_effect_with_deps(
            move |query: &PostQuery| {
                fetch_mine_into_store(&ctx, query.clone());
            },
            (*query).clone(),
        );
    }

    let on_search = {
        let query = query.clone();
        Callback::from(move |search: String| {
            query.set(PostQuery {
                search,
                page: 0,
                ..(*query).clone()
            });
        })
    };
    let on_page = {
        let query = query.clone();
        Callback::from(move |page: u32| {
            query.set(PostQuery {
                page,
                ..(*query).clone()
            });
        })
    };
    let on_delete = {
        let list = list.clone();
        let query = query.clone();
        Callback::from(move |id: i64| {
            if !gloo::dialogs::confirm("Delete this post?") {
                return;
            }
            let client = ctx.client.clone();
            // Deleting the last row of a later page steps the pager back.
            let step_back = list.items.len() == 1 && (*query).page > 0;
            let query = query.clone();
            let dispatch = Dispatch::<AppStore>::new();
            spawn_local(async move {
                match api::delete_post(&client, id).await {
                    Ok(message) => {
                        dispatch.reduce_mut(|store| {
                            store.posts.mine.remove(id);
                            store.toasts.push(ToastKind::Success, message);
                        });
                        if step_back {
                            query.set(PostQuery {
                                page: (*query).page - 1,
                                ..(*query).clone()
                            });
                        }
                    }
                    Err(err) => dispatch.reduce_mut(|store| {
                        store.posts.mine.fail(err.to_string());
                    }),
                }
            });
        })
    };

    html! {
        <div class="admin-list">
            <header class="list-header">
                <h1>{"Posts"}</h1>
                <SearchBox on_search={on_search} placeholder="Search posts" />
                <Link<Route> to={Route::PostCreate} classes="accent">{"New post"}</Link<Route>>
            </header>
            if let Some(message) = list.error.clone() {
                <p class="error" role="alert">{message}</p>
            }
            <table>
                <thead>
                    <tr>
                        <th>{"Title"}</th>
                        <th>{"Category"}</th>
                        <th>{"Visibility"}</th>
                        <th>{"Votes"}</th>
                        <th>{"Views"}</th>
                        <th aria-label="Actions"></th>
                    </tr>
                </thead>
                <tbody>
                    {for list.items.iter().map(|post| {
                        let id = post.id;
                        let on_delete = on_delete.clone();
                        html! {
                            <tr>
                                <td>{post.title.clone()}</td>
                                <td>{post.category.name.clone()}</td>
                                <td>{match post.kind {
                                    PostType::Public => "Public",
                                    PostType::Private => "Private",
                                }}</td>
                                <td>{post.vote_count}</td>
                                <td>{post.view_count}</td>
                                <td class="row-actions">
                                    <Link<Route> to={Route::PostEdit { id }}>{"Edit"}</Link<Route>>
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
pub(crate) struct PostFormProps {
    /// Post to edit; `None` creates a new one.
    #[prop_or_default]
    pub id: Option<i64>,
}

#[function_component(PostFormPage)]
pub(crate) fn post_form_page(props: &PostFormProps) -> Html {
    let Some(ctx) = use_context::<ApiCtx>() else {
        return html! {};
    };
    let navigator = use_navigator();
    let catalog = use_selector(|store: &AppStore| store.categories.catalog.clone());
    let title = use_state(String::new);
    let excerpt = use_state(String::new);
    let content = use_state(String::new);
    let image = use_state(String::new);
    let category_id = use_state(|| None as Option<i64>);
    let kind = use_state(|| PostType::Public);
    let saving = use_state(|| false);

    {
        let client = ctx.client.clone();
        use_effect_with_deps(
            move |_| {
                let dispatch = Dispatch::<AppStore>::new();
                spawn_local(async move {
                    match crate::features::categories::api::fetch_category_catalog(&client).await {
                        Ok(catalog) => {
                            dispatch.reduce_mut(|store| store.categories.catalog = catalog);
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
        let title = title.clone();
        let excerpt = excerpt.clone();
        let content = content.clone();
        let image = image.clone();
        let category_id = category_id.clone();
        let kind = kind.clone();
        use_effect_with_deps(
            move |id: &Option<i64>| {
                if let Some(id) = *id {
                    let dispatch = Dispatch::<AppStore>::new();
                    spawn_local(async move {
                        match api::fetch_my_post(&client, id).await {
                            Ok(post) => {
                                title.set(post.title);
                                excerpt.set(post.excerpt);
                                content.set(post.content);
                                image.set(post.image);
                                category_id.set(Some(post.category.id));
                                kind.set(post.kind);
                            }
                            Err(err) => dispatch.reduce_mut(|store| {
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
        let title = title.clone();
        let excerpt = excerpt.clone();
        let content = content.clone();
        let image = image.clone();
        let category_id = category_id.clone();
        let kind = kind.clone();
        let saving = saving.clone();
        let id = props.id;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(category_id) = *category_id else {
                Dispatch::<AppStore>::new().reduce_mut(|store| {
                    store.toasts.push(ToastKind::Error, "Pick a category");
                });
                return;
            };
            let payload = PostPayload {
                title: (*title).clone(),
                excerpt: (*excerpt).clone(),
                content: (*content).clone(),
                category_id,
                image: (!image.is_empty()).then(|| (*image).clone()),
                kind: *kind,
            };
            let client = ctx.client.clone();
            let navigator = navigator.clone();
            let saving = saving.clone();
            saving.set(true);
            let dispatch = Dispatch::<AppStore>::new();
            spawn_local(async move {
                let outcome = match id {
                    Some(id) => api::update_post(&client, id, &payload).await,
                    None => api::create_post(&client, &payload).await,
                };
                saving.set(false);
                match outcome {
                    Ok(_) => {
                        dispatch.reduce_mut(|store| {
                            store.toasts.push(ToastKind::Success, "Post saved");
                        });
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Posts);
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
            <h1>{if props.id.is_some() { "Edit post" } else { "New post" }}</h1>
            <label>
                {"Title"}
                <input required=true value={(*title).clone()} oninput={{
                    let title = title.clone();
                    Callback::from(move |e: InputEvent| {
                        if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                            title.set(input.value());
                        }
                    })
                }} />
            </label>
            <label>
                {"Excerpt"}
                <input value={(*excerpt).clone()} oninput={{
                    let excerpt = excerpt.clone();
                    Callback::from(move |e: InputEvent| {
                        if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                            excerpt.set(input.value());
                        }
                    })
                }} />
            </label>
            <label>
                {"Content"}
                <textarea required=true value={(*content).clone()} oninput={{
                    let content = content.clone();
                    Callback::from(move |e: InputEvent| {
                        if let Some(area) = e.target_dyn_into::<web_sys::HtmlTextAreaElement>() {
                            content.set(area.value());
                        }
                    })
                }} />
            </label>
            <label>
                {"Category"}
                <select onchange={{
                    let category_id = category_id.clone();
                    Callback::from(move |e: Event| {
                        if let Some(select) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
                            category_id.set(select.value().parse().ok());
                        }
                    })
                }}>
                    <option value="" selected={category_id.is_none()}>{"Pick a category"}</option>
                    {for catalog.iter().map(|category| html! {
                        <option
                            value={category.id.to_string()}
                            selected={*category_id == Some(category.id)}
                        >
                            {category.name.clone()}
                        </option>
                    })}
                </select>
            </label>
            <label>
                {"Cover image URL"}
                <input value={(*image).clone()} oninput={{
                    let image = image.clone();
                    Callback::from(move |e: InputEvent| {
                        if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                            image.set(input.value());
                        }
                    })
                }} />
            </label>
            <label>
                {"Visibility"}
                <select onchange={{
                    let kind = kind.clone();
                    Callback::from(move |e: Event| {
                        if let Some(select) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
                            kind.set(if select.value() == "PRIVATE" {
                                PostType::Private
                            } else {
                                PostType::Public
                            });
                        }
                    })
                }}>
                    <option value="PUBLIC" selected={*kind == PostType::Public}>{"Public"}</option>
                    <option value="PRIVATE" selected={*kind == PostType::Private}>{"Private"}</option>
                </select>
            </label>
            <button type="submit" disabled={*saving}>
                {if *saving { "Saving…" } else { "Save" }}
            </button>
        </form>
    }
}
