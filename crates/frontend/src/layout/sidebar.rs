use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Collapsible navigation rail. When collapsed only the icons remain.
#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = AppGlobalContext::expect();

    view! {
        <aside class="sidebar" class:sidebar--collapsed=move || !ctx.sidebar_open.get()>
            <div class="sidebar__brand">
                {icon("box")}
                <Show when=move || ctx.sidebar_open.get()>
                    <span class="sidebar__brand-name">"ComSys"</span>
                </Show>
            </div>
            <nav class="sidebar__nav">
                {Page::ALL
                    .into_iter()
                    .map(|page| {
                        view! {
                            <button
                                class="sidebar__link"
                                class:sidebar__link--active=move || ctx.active_page.get() == page
                                on:click=move |_| ctx.active_page.set(page)
                            >
                                <span class="sidebar__link-icon">{icon(page.icon_name())}</span>
                                <Show when=move || ctx.sidebar_open.get()>
                                    <span class="sidebar__link-label">{page.title()}</span>
                                </Show>
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}
