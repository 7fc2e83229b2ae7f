use crate::shared::config::SHOP_ID_STORAGE_KEY;
use contracts::system::shop::ShopId;
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Read the shop id written by the sign-in flow
pub fn get_shop_id() -> Option<ShopId> {
    let raw = get_local_storage()?.get_item(SHOP_ID_STORAGE_KEY).ok()??;
    ShopId::new(raw)
}
