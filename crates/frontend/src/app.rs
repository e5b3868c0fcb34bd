use crate::layout::{AppGlobalContext, Header, Page, Sidebar};
use crate::pages::{
    DashboardPage, ExpensesPage, InventoryPage, ProfitsPage, PurchasesPage, ReportsPage, SalesPage,
};
use crate::shared::data::AppStore;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppGlobalContext::provide();
    AppStore::provide();

    view! {
        <div class="app-shell">
            <Sidebar />
            <div class="app-shell__main">
                <Header />
                <main class="app-shell__content">
                    {move || match ctx.active_page.get() {
                        Page::Dashboard => view! { <DashboardPage /> }.into_any(),
                        Page::Purchases => view! { <PurchasesPage /> }.into_any(),
                        Page::Sales => view! { <SalesPage /> }.into_any(),
                        Page::Inventory => view! { <InventoryPage /> }.into_any(),
                        Page::Expenses => view! { <ExpensesPage /> }.into_any(),
                        Page::Profits => view! { <ProfitsPage /> }.into_any(),
                        Page::Reports => view! { <ReportsPage /> }.into_any(),
                    }}
                </main>
            </div>
        </div>
    }
}
