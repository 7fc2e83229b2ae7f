use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Key of the order desk tab
pub const ORDER_DESK_TAB_KEY: &str = "a001_shop_order";
const ORDER_DESK_TITLE: &str = "Orders";

/// Open tabs of the workspace.
///
/// The order desk is pinned and always first; bills open next to it and
/// can be closed.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
    pub pinned: bool,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        let desk = Tab {
            key: ORDER_DESK_TAB_KEY.to_string(),
            title: ORDER_DESK_TITLE.to_string(),
            pinned: true,
        };
        Self {
            opened: RwSignal::new(vec![desk]),
            active: RwSignal::new(Some(ORDER_DESK_TAB_KEY.to_string())),
        }
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.active.with(|active| active.as_deref() == Some(key))
    }

    /// Open a tab or bring an already opened one to front.
    pub fn open_tab(&self, key: &str, title: &str) {
        let known = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !known {
            log::debug!("Opening tab '{}' ({})", key, title);
            self.opened.update(|tabs| {
                tabs.push(Tab {
                    key: key.to_string(),
                    title: title.to_string(),
                    pinned: false,
                })
            });
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    /// Close a tab; the desk cannot be closed. Focus falls back to the
    /// previous tab in the strip.
    pub fn close_tab(&self, key: &str) {
        let position = self.opened.with_untracked(|tabs| {
            tabs.iter().position(|tab| tab.key == key && !tab.pinned)
        });
        let Some(position) = position else {
            return;
        };

        let mut fallback = None;
        self.opened.update(|tabs| {
            tabs.remove(position);
            fallback = tabs
                .get(position.saturating_sub(1))
                .map(|tab| tab.key.clone());
        });
        if self.active.with_untracked(|active| active.as_deref() == Some(key)) {
            self.active.set(fallback);
        }
    }

    /// Mirror the active tab into `?active=` of the page URL.
    ///
    /// Bill tabs live on in-memory records, so a reload always lands on the
    /// desk whatever the URL says.
    pub fn bind_url(&self) {
        if let Some(requested) = query_param("active").filter(|k| k != ORDER_DESK_TAB_KEY) {
            log::info!("Tab '{}' cannot be restored after reload", requested);
        }

        let active = self.active;
        Effect::new(move |_| {
            if let Some(key) = active.get() {
                replace_query(HashMap::from([("active".to_string(), key)]));
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

fn query_param(name: &str) -> Option<String> {
    let search = current_search();
    let mut params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.remove(name)
}

fn replace_query(params: HashMap<String, String>) {
    let Ok(query) = serde_qs::to_string(&params) else {
        return;
    };
    let url = format!("?{}", query);
    if current_search() == url {
        return;
    }
    let Some(history) = window().and_then(|w| w.history().ok()) else {
        return;
    };
    if let Err(e) = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url)) {
        log::warn!("Failed to update URL: {:?}", e);
    }
}
