use crate::layout::global_context::AppGlobalContext;
use crate::layout::AppFrame;
use crate::system::shop::context::use_shop;
use leptos::prelude::*;

#[component]
fn ShopWorkspace() -> impl IntoView {
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    tabs_store.bind_url();

    view! { <AppFrame /> }
}

#[component]
fn NoShopPage() -> impl IntoView {
    view! {
        <div style="max-width: 480px; margin: 15vh auto; text-align: center;">
            <h2>"No shop selected"</h2>
            <p>"Sign in to your shop account to manage its orders."</p>
        </div>
    }
}

/// Orders are only requested once a shop is known.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let shop = use_shop();

    view! {
        <Show
            when=move || shop.with(|s| s.shop_id.is_some())
            fallback=|| view! { <NoShopPage /> }
        >
            <ShopWorkspace />
        </Show>
    }
}
