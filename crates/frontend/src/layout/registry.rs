//! Maps a tab key to the view it shows

use crate::domain::a001_shop_order::ui::desk::OrderDesk;
use crate::domain::a002_bill::ui::details::BillDetail;
use crate::domain::a002_bill::{parse_bill_tab_key, BILL_TAB_PREFIX};
use crate::layout::global_context::{AppGlobalContext, ORDER_DESK_TAB_KEY};
use leptos::prelude::*;

/// Render the content of a tab by its key.
///
/// `tabs_store` is used by detail views to close their own tab.
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();

    match key {
        ORDER_DESK_TAB_KEY => view! { <OrderDesk /> }.into_any(),
        k if k.starts_with(BILL_TAB_PREFIX) => match parse_bill_tab_key(k) {
            Some(bill_id) => view! {
                <BillDetail
                    bill_id=bill_id
                    on_close=Callback::new(move |_| {
                        tabs_store.close_tab(&key_for_close);
                    })
                />
            }
            .into_any(),
            None => {
                log::warn!("Malformed bill tab key: {}", k);
                view! { <div class="placeholder">"Bill not found"</div> }.into_any()
            }
        },
        _ => {
            log::warn!("Unknown tab key: {}", key);
            view! { <div class="placeholder">"Unknown tab"</div> }.into_any()
        }
    }
}
