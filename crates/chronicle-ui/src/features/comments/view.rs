//! Comment section rendered under a post, replies nested recursively.

use chronicle_api_models::{Comment, CommentPayload};
use yew::platform::spawn_local;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

use crate::app::api::ApiCtx;
use crate::core::store::AppStore;
use crate::core::toast::ToastKind;
use crate::features::comments::api;

#[derive(Properties, PartialEq)]
pub(crate) struct CommentSectionProps {
    pub post_id: i64,
}

#[function_component(CommentSection)]
pub(crate) fn comment_section(props: &CommentSectionProps) -> Html {
    let Some(ctx) = use_context::<ApiCtx>() else {
        return html! {};
    };
    let comments = use_selector(|store: &AppStore| store.comments.comments.clone());
    let loading = use_selector(|store: &AppStore| store.comments.loading);
    let signed_in = use_selector(|store: &AppStore| store.auth.is_authenticated());
    let viewer_id = use_selector(|store: &AppStore| {
        store.auth.session.as_ref().map(|session| session.id)
    });

    {
        let client = ctx.client.clone();
        use_effect_with_deps(
            move |post_id: &i64| {
                let post_id = *post_id;
                let dispatch = Dispatch::<AppStore>::new();
                dispatch.reduce_mut(|store| store.comments.begin());
                spawn_local(async move {
                    match api::fetch_comments(&client, post_id).await {
                        Ok(forest) => {
                            dispatch.reduce_mut(|store| store.comments.finish(forest));
                        }
                        Err(err) => {
                            dispatch.reduce_mut(|store| store.comments.fail(err.to_string()));
                        }
                    }
                });
                let dispatch = Dispatch::<AppStore>::new();
                move || dispatch.reduce_mut(|store| store.comments.clear())
            },
            props.post_id,
        );
    }

    let on_submit = {
        let ctx = ctx.clone();
        let post_id = props.post_id;
        Callback::from(move |(content, parent_id): (String, Option<i64>)| {
            let client = ctx.client.clone();
            let dispatch = Dispatch::<AppStore>::new();
            let payload = CommentPayload {
                content,
                post_id,
                parent_id,
            };
            spawn_local(async move {
                match api::create_comment(&client, &payload).await {
                    Ok(comment) => dispatch.reduce_mut(|store| store.comments.insert(comment)),
                    Err(err) => dispatch.reduce_mut(|store| {
                        store.toasts.push(ToastKind::Error, err.to_string());
                    }),
                }
            });
        })
    };

    let on_delete = {
        Callback::from(move |id: i64| {
            if !gloo::dialogs::confirm("Delete this comment and all its replies?") {
                return;
            }
            let client = ctx.client.clone();
            let dispatch = Dispatch::<AppStore>::new();
            spawn_local(async move {
                match api::delete_comment(&client, id).await {
                    Ok(_) => dispatch.reduce_mut(|store| store.comments.remove(id)),
                    Err(err) => dispatch.reduce_mut(|store| {
                        store.toasts.push(ToastKind::Error, err.to_string());
                    }),
                }
            });
        })
    };

    html! {
        <section class="comments">
            <h2>{"Comments"}</h2>
            if *signed_in {
                <CommentBox parent_id={None::<i64>} on_submit={on_submit.clone()} />
            } else {
                <p class="muted">{"Sign in to join the discussion."}</p>
            }
            if *loading {
                <p class="muted">{"Loading comments…"}</p>
            }
            <ul class="comment-list">
                {for comments.iter().map(|comment| html! {
                    <CommentNode
                        comment={comment.clone()}
                        viewer_id={*viewer_id}
                        signed_in={*signed_in}
                        on_submit={on_submit.clone()}
                        on_delete={on_delete.clone()}
                    />
                })}
            </ul>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct CommentNodeProps {
    comment: Comment,
    viewer_id: Option<i64>,
    signed_in: bool,
    on_submit: Callback<(String, Option<i64>)>,
    on_delete: Callback<i64>,
}

#[function_component(CommentNode)]
fn comment_node(props: &CommentNodeProps) -> Html {
    let replying = use_state(|| false);
    let comment = &props.comment;
    let own = props.viewer_id == Some(comment.author_id);
    let toggle_reply = {
        let replying = replying.clone();
        Callback::from(move |_| replying.set(!*replying))
    };
    let on_delete = {
        let on_delete = props.on_delete.clone();
        let id = comment.id;
        Callback::from(move |_| on_delete.emit(id))
    };
    let on_reply = {
        let on_submit = props.on_submit.clone();
        let replying = replying.clone();
        let parent_id = comment.id;
        Callback::from(move |(content, _): (String, Option<i64>)| {
            on_submit.emit((content, Some(parent_id)));
            replying.set(false);
        })
    };

    html! {
        <li class="comment">
            <div class="comment-head">
                <strong>{comment.author_name.clone()}</strong>
                <span class="muted">{comment.created_at.clone()}</span>
            </div>
            <p>{comment.content.clone()}</p>
            <div class="comment-actions">
                if props.signed_in {
                    <button class="ghost" onclick={toggle_reply}>
                        {if *replying { "Cancel" } else { "Reply" }}
                    </button>
                }
                if own {
                    <button class="ghost danger" onclick={on_delete}>{"Delete"}</button>
                }
            </div>
            if *replying {
                <CommentBox parent_id={Some(comment.id)} on_submit={on_reply} />
            }
            if !comment.replies.is_empty() {
                <ul class="comment-replies">
                    {for comment.replies.iter().map(|reply| html! {
                        <CommentNode
                            comment={reply.clone()}
                            viewer_id={props.viewer_id}
                            signed_in={props.signed_in}
                            on_submit={props.on_submit.clone()}
                            on_delete={props.on_delete.clone()}
                        />
                    })}
                </ul>
            }
        </li>
    }
}

#[derive(Properties, PartialEq)]
struct CommentBoxProps {
    parent_id: Option<i64>,
    on_submit: Callback<(String, Option<i64>)>,
}

#[function_component(CommentBox)]
fn comment_box(props: &CommentBoxProps) -> Html {
    let draft = use_state(String::new);
    let onsubmit = {
        let draft = draft.clone();
        let on_submit = props.on_submit.clone();
        let parent_id = props.parent_id;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let content = (*draft).trim().to_string();
            if content.is_empty() {
                return;
            }
            on_submit.emit((content, parent_id));
            draft.set(String::new());
        })
    };
    let oninput = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e.target_dyn_into::<web_sys::HtmlTextAreaElement>() {
                draft.set(area.value());
            }
        })
    };
    let placeholder = if props.parent_id.is_some() {
        "Write a reply"
    } else {
        "Write a comment"
    };

    html! {
        <form class="comment-box" {onsubmit}>
            <textarea {placeholder} value={(*draft).clone()} {oninput} />
            <button type="submit">{"Post"}</button>
        </form>
    }
}
