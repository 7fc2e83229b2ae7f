use crate::domain::a002_bill::store::BillingStore;
use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::system::shop::context::ShopProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Tab navigation for the whole app
    provide_context(AppGlobalContext::new());

    // Bills handed from the order desk to the bill view
    provide_context(BillingStore::new());

    view! {
        <ShopProvider>
            <AppRoutes />
        </ShopProvider>
    }
}
