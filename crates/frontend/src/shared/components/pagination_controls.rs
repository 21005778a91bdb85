use crate::shared::icons::icon;
use contracts::shared::pagination::PageButton;
use leptos::prelude::*;

/// Previous / numbered / Next page buttons with ellipsis gaps.
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Button layout from `page_buttons`
    #[prop(into)]
    buttons: Signal<Vec<PageButton>>,

    #[prop(into)]
    has_previous: Signal<bool>,

    #[prop(into)]
    has_next: Signal<bool>,

    /// Callback with the requested page (1-based)
    on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || !has_previous.get()
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            {move || {
                buttons
                    .get()
                    .into_iter()
                    .map(|button| match button {
                        PageButton::Page(page) => view! {
                            <button
                                class="pagination-btn"
                                class:pagination-btn--active=move || current_page.get() == page
                                on:click=move |_| on_page_change.run(page)
                            >
                                {page}
                            </button>
                        }
                        .into_any(),
                        PageButton::Ellipsis => view! {
                            <span class="pagination-ellipsis">"..."</span>
                        }
                        .into_any(),
                    })
                    .collect_view()
            }}
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page.get() + 1)
                disabled=move || !has_next.get()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
        </div>
    }
}
