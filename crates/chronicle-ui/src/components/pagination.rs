//! Pager shared by every list page.

use chronicle_api_models::PageInfo;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct PaginationProps {
    pub page: PageInfo,
    /// Fired with the zero-based page to load.
    pub on_page: Callback<u32>,
}

#[function_component(Pagination)]
pub(crate) fn pagination(props: &PaginationProps) -> Html {
    let PageInfo {
        number,
        total_pages,
        total_elements,
        ..
    } = props.page;
    if total_pages <= 1 {
        return html! {};
    }
    let on_prev = {
        let on_page = props.on_page.clone();
        Callback::from(move |_| on_page.emit(number.saturating_sub(1)))
    };
    let on_next = {
        let on_page = props.on_page.clone();
        Callback::from(move |_| on_page.emit(number + 1))
    };

    html! {
        <nav class="pagination" aria-label="Pagination">
            <button disabled={number == 0} onclick={on_prev}>{"Previous"}</button>
            <span>{format!("Page {} of {total_pages} ({total_elements} total)", number + 1)}</span>
            <button disabled={number + 1 >= total_pages} onclick={on_next}>{"Next"}</button>
        </nav>
    }
}
