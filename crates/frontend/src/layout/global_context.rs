use leptos::prelude::*;

/// Top-level pages, switched in place without a router.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Purchases,
    Sales,
    Inventory,
    Expenses,
    Profits,
    Reports,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Dashboard,
        Page::Purchases,
        Page::Sales,
        Page::Inventory,
        Page::Expenses,
        Page::Profits,
        Page::Reports,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Purchases => "Purchases",
            Page::Sales => "Sales",
            Page::Inventory => "Inventory",
            Page::Expenses => "Expenses",
            Page::Profits => "Profits",
            Page::Reports => "Reports",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Page::Dashboard => "line-chart",
            Page::Purchases => "shopping-cart",
            Page::Sales => "tag",
            Page::Inventory => "store",
            Page::Expenses => "wallet",
            Page::Profits => "briefcase",
            Page::Reports => "line-chart",
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active_page: RwSignal<Page>,
    pub sidebar_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active_page: RwSignal::new(Page::Dashboard),
            sidebar_open: RwSignal::new(true),
        }
    }

    pub fn provide() -> Self {
        let ctx = Self::new();
        provide_context(ctx);
        ctx
    }

    pub fn expect() -> Self {
        use_context::<Self>().expect("AppGlobalContext provided at the application root")
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
