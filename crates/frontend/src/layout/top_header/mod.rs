//! TopHeader component - application top bar with the shop identity

use crate::shared::icons::icon;
use crate::system::shop::context::use_shop;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let shop = use_shop();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Order Desk"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("store")}
                    <span>
                        {move || shop.get().shop_id
                            .map(|id| format!("Shop {}", id))
                            .unwrap_or_else(|| "No shop".to_string())}
                    </span>
                </div>
            </div>
        </div>
    }
}
