//! Debounced search box shared by the admin list pages.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use yew::prelude::*;

/// Milliseconds of quiet before a keystroke becomes a fetch.
const DEBOUNCE_MS: u32 = 500;

#[derive(Properties, PartialEq)]
pub(crate) struct SearchBoxProps {
    /// Fired with the settled search term after the debounce window.
    pub on_search: Callback<String>,
    #[prop_or_default]
    pub placeholder: AttrValue,
}

#[function_component(SearchBox)]
pub(crate) fn search_box(props: &SearchBoxProps) -> Html {
    let pending = use_mut_ref(|| None as Option<Timeout>);

    let oninput = {
        let on_search = props.on_search.clone();
        let pending: Rc<RefCell<Option<Timeout>>> = pending;
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                let value = input.value();
                let on_search = on_search.clone();
                // Replacing the handle drops and cancels the previous timer.
                *pending.borrow_mut() =
                    Some(Timeout::new(DEBOUNCE_MS, move || on_search.emit(value)));
            }
        })
    };

    html! {
        <input
            class="search"
            type="search"
            placeholder={props.placeholder.clone()}
            aria-label="Search"
            {oninput}
        />
    }
}
