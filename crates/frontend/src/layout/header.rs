use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = AppGlobalContext::expect();
    let toggle_icon = move || {
        if ctx.sidebar_open.get() {
            icon("panel-left-close")
        } else {
            icon("panel-left-open")
        }
    };

    view! {
        <header class="header">
            <button
                class="header__toggle"
                on:click=move |_| ctx.sidebar_open.update(|open| *open = !*open)
            >
                {toggle_icon}
            </button>
            <h1 class="header__title">{move || ctx.active_page.get().title()}</h1>
        </header>
    }
}
