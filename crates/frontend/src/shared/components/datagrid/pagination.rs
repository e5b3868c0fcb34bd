//! Page navigation controls: first/prev, a 5-wide numbered window, next/last
//! and a results readout. Boundary buttons disable themselves and the click
//! handlers guard the range, so the controls can never submit a page outside
//! `[1, total_pages]`.

use super::engine::page_window;
use leptos::prelude::*;

#[component]
pub fn PaginationNav(
    /// Current page (1-based).
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages.
    #[prop(into)]
    total_pages: Signal<usize>,

    /// 1-based index of the first visible row (0 when nothing is shown).
    #[prop(into)]
    shown_from: Signal<usize>,

    /// 1-based index of the last visible row.
    #[prop(into)]
    shown_to: Signal<usize>,

    /// Row count after filtering.
    #[prop(into)]
    total_count: Signal<usize>,

    /// Callback invoked with the requested page.
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let at_first = move || current_page.get() <= 1;
    let at_last = move || current_page.get() >= total_pages.get();

    view! {
        <div class="data-table__pagination">
            <p class="data-table__pagination-info">
                "Showing " <span class="data-table__pagination-em">{move || shown_from.get()}</span>
                " to " <span class="data-table__pagination-em">{move || shown_to.get()}</span>
                " of " <span class="data-table__pagination-em">{move || total_count.get()}</span>
                " results"
            </p>
            <nav class="data-table__pagination-nav" aria-label="Pagination">
                <button
                    class="pagination-btn"
                    disabled=at_first
                    on:click=move |_| {
                        if current_page.get() > 1 {
                            on_page_change.run(1);
                        }
                    }
                >
                    "First"
                </button>
                <button
                    class="pagination-btn"
                    disabled=at_first
                    on:click=move |_| {
                        let page = current_page.get();
                        if page > 1 {
                            on_page_change.run(page - 1);
                        }
                    }
                >
                    "Previous"
                </button>
                {move || {
                    let current = current_page.get();
                    page_window(current, total_pages.get())
                        .into_iter()
                        .map(|page| {
                            view! {
                                <button
                                    class=if page == current {
                                        "pagination-btn pagination-btn--active"
                                    } else {
                                        "pagination-btn"
                                    }
                                    on:click=move |_| on_page_change.run(page)
                                >
                                    {page}
                                </button>
                            }
                        })
                        .collect_view()
                }}
                <button
                    class="pagination-btn"
                    disabled=at_last
                    on:click=move |_| {
                        let page = current_page.get();
                        if page < total_pages.get() {
                            on_page_change.run(page + 1);
                        }
                    }
                >
                    "Next"
                </button>
                <button
                    class="pagination-btn"
                    disabled=at_last
                    on:click=move |_| {
                        let total = total_pages.get();
                        if current_page.get() < total {
                            on_page_change.run(total);
                        }
                    }
                >
                    "Last"
                </button>
            </nav>
        </div>
    }
}
