//! Generic data grid: a record collection flows through search, sort and
//! pagination before rendering; the view state driving the pipeline lives
//! in [`engine::GridState`].

pub mod column;
pub mod engine;
pub mod pagination;

pub use column::{Accessor, CellValue, Column, GridRecord};
pub use engine::GridState;

use self::engine::{page_bounds, sort_indicator, total_pages};
use self::pagination::PaginationNav;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Sortable, searchable, paginated table over any [`GridRecord`] collection.
///
/// The collection is treated as read-only; all view state (search term,
/// sort key/direction, current page) is owned by this component and reset
/// on remount.
#[component]
pub fn DataTable<T: GridRecord>(
    /// Record collection to display.
    #[prop(into)]
    data: Signal<Vec<T>>,

    /// Column descriptors, in display order.
    columns: Vec<Column<T>>,

    /// Render a free-text search box above the table.
    #[prop(optional)]
    searchable: bool,

    /// Slice the rows into pages; disabled shows everything.
    #[prop(default = true)]
    pagination: bool,

    /// Page size when pagination is enabled.
    #[prop(default = 10)]
    items_per_page: usize,

    /// Optional heading in the table header bar.
    #[prop(optional, into)]
    title: Option<String>,

    /// Optional action views placed next to the search box.
    #[prop(optional)]
    actions: Option<AnyView>,
) -> impl IntoView {
    let state = RwSignal::new(GridState::default());
    let column_count = columns.len();
    let has_header_bar = title.is_some() || searchable || actions.is_some();
    let columns = StoredValue::new(columns);

    // Full pipeline minus the page slice; totals derive from this.
    let processed = Memo::new(move |_| data.with(|items| state.with(|s| s.apply(items))));
    let filtered_count = Memo::new(move |_| processed.with(|rows| rows.len()));
    let pages = Memo::new(move |_| total_pages(filtered_count.get(), items_per_page));

    let visible = Memo::new(move |_| {
        let rows = processed.get();
        if pagination {
            let range = page_bounds(rows.len(), state.with(|s| s.page), items_per_page);
            rows[range].to_vec()
        } else {
            rows
        }
    });

    let shown_from = Signal::derive(move || {
        let range = page_bounds(filtered_count.get(), state.with(|s| s.page), items_per_page);
        if range.is_empty() {
            0
        } else {
            range.start + 1
        }
    });
    let shown_to = Signal::derive(move || {
        page_bounds(filtered_count.get(), state.with(|s| s.page), items_per_page).end
    });

    let header_cells = columns.with_value(|cols| {
        cols.iter()
            .map(|col| {
                let header = col.header;
                match col.sort_key() {
                    Some(field) => view! {
                        <th
                            class="data-table__th data-table__th--sortable"
                            on:click=move |_| state.update(|s| s.toggle_sort(field))
                        >
                            <span>{header}</span>
                            <span class="data-table__sort-indicator">
                                {move || {
                                    state.with(|s| {
                                        sort_indicator(s.sort_field, field, s.sort_ascending)
                                    })
                                }}
                            </span>
                        </th>
                    }
                    .into_any(),
                    None => view! { <th class="data-table__th">{header}</th> }.into_any(),
                }
            })
            .collect_view()
    });

    // The header bar's contents (title, actions) are fixed at construction,
    // so it is built once rather than behind a reactive Show.
    let header_bar = has_header_bar.then(|| {
        let search_box = searchable.then(|| {
            view! {
                <div class="data-table__search">
                    <span class="data-table__search-icon">{icon("search")}</span>
                    <input
                        type="text"
                        class="data-table__search-input"
                        placeholder="Search..."
                        prop:value=move || state.with(|s| s.search_term.clone())
                        on:input=move |ev| {
                            let term = event_target_value(&ev);
                            state.update(|s| s.set_search(term));
                        }
                    />
                </div>
            }
        });
        view! {
            <div class="data-table__header">
                {title.map(|t| view! { <h3 class="data-table__title">{t}</h3> })}
                <div class="data-table__header-right">{search_box} {actions}</div>
            </div>
        }
    });

    view! {
        <div class="data-table">
            {header_bar}

            <div class="data-table__scroll">
                <table class="data-table__table">
                    <thead class="data-table__head">
                        <tr>{header_cells}</tr>
                    </thead>
                    <tbody class="data-table__body">
                        <For
                            each=move || visible.get()
                            key=|row| row.row_key()
                            children=move |row| {
                                let cells = columns.with_value(|cols| {
                                    cols.iter()
                                        .map(|col| {
                                            view! {
                                                <td class="data-table__td">{col.cell(&row)}</td>
                                            }
                                            .into_any()
                                        })
                                        .collect_view()
                                });
                                view! { <tr class="data-table__row">{cells}</tr> }
                            }
                        />
                        <Show when=move || visible.with(|rows| rows.is_empty())>
                            <tr>
                                <td class="data-table__empty" colspan=column_count.to_string()>
                                    "No data available"
                                </td>
                            </tr>
                        </Show>
                    </tbody>
                </table>
            </div>

            <Show when=move || { pagination && pages.get() > 1 }>
                <PaginationNav
                    current_page=Signal::derive(move || state.with(|s| s.page))
                    total_pages=pages
                    shown_from=shown_from
                    shown_to=shown_to
                    total_count=filtered_count
                    on_page_change=Callback::new(move |page| state.update(|s| s.go_to_page(page)))
                />
            </Show>
        </div>
    }
}
