use contracts::domain::{BillingStatus, DeliveryStatus};
use leptos::prelude::*;

pub fn delivery_badge(status: DeliveryStatus) -> AnyView {
    let class = match status {
        DeliveryStatus::Delivered => "status-badge status-badge--green",
        DeliveryStatus::Pending => "status-badge status-badge--yellow",
        DeliveryStatus::Canceled => "status-badge status-badge--red",
    };
    view! { <span class=class>{status.label()}</span> }.into_any()
}

pub fn billing_badge(status: BillingStatus) -> AnyView {
    let class = match status {
        BillingStatus::Paid => "status-badge status-badge--green",
        BillingStatus::Billed => "status-badge status-badge--blue",
        BillingStatus::Pending => "status-badge status-badge--yellow",
    };
    view! { <span class=class>{status.label()}</span> }.into_any()
}
