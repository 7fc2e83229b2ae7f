use super::storage;
use contracts::system::shop::ShopId;
use leptos::prelude::*;

/// Shop the desk works for, resolved once at startup
#[derive(Clone, Debug, Default)]
pub struct ShopState {
    pub shop_id: Option<ShopId>,
}

/// Reads the shop identity from storage and provides it to the tree
#[component]
pub fn ShopProvider(children: ChildrenFn) -> impl IntoView {
    let shop_id = storage::get_shop_id();
    match &shop_id {
        Some(id) => log::info!("Shop resolved from storage: {}", id),
        None => log::warn!("No shop id in storage"),
    }

    let (shop_state, _) = signal(ShopState { shop_id });
    provide_context(shop_state);

    children()
}

/// Hook to access shop state
pub fn use_shop() -> ReadSignal<ShopState> {
    use_context::<ReadSignal<ShopState>>().expect("ShopProvider not found in component tree")
}
