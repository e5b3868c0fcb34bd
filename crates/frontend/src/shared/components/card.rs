use leptos::prelude::*;

/// Plain content panel with an optional title row.
#[component]
pub fn Card(
    #[prop(optional, into)] title: Option<String>,
    /// Extra controls rendered on the right of the title row.
    #[prop(optional)]
    actions: Option<AnyView>,
    children: Children,
) -> impl IntoView {
    let header = if title.is_some() || actions.is_some() {
        Some(view! {
            <div class="card__header">
                {title.map(|t| view! { <h3 class="card__title">{t}</h3> })}
                {actions.map(|a| view! { <div class="card__actions">{a}</div> })}
            </div>
        })
    } else {
        None
    };

    view! {
        <div class="card">
            {header}
            <div class="card__body">{children()}</div>
        </div>
    }
}
