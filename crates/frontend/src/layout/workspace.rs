//! Tab strip and tab panes of the main area

use super::global_context::{AppGlobalContext, Tab};
use super::registry::render_tab_content;
use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn Workspace() -> impl IntoView {
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    // The strip only matters once a bill is open next to the desk.
    let has_extra_tabs = move || tabs_store.opened.with(|tabs| tabs.len() > 1);

    view! {
        <div data-zone="center" class="tabs-container" style="flex: 1; overflow: auto;">
            <Show when=has_extra_tabs>
                <div class="tabs-bar">
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab| view! { <TabButton tab=tab tabs_store=tabs_store /> }
                    />
                </div>
            </Show>
            <div class="tab-content">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| view! { <TabPane tab=tab tabs_store=tabs_store /> }
                />
            </div>
        </div>
    }
}

#[component]
fn TabButton(tab: Tab, tabs_store: AppGlobalContext) -> impl IntoView {
    let key = StoredValue::new(tab.key.clone());
    let is_active = Memo::new(move |_| tabs_store.is_active(&key.get_value()));

    let close = (!tab.pinned).then(|| {
        let on_close = move |ev: ev::MouseEvent| {
            ev.stop_propagation();
            tabs_store.close_tab(&key.get_value());
        };
        view! { <button class="tab-close" title="Close" on:click=on_close>"×"</button> }
    });

    view! {
        <div
            class="tab"
            class:active=is_active
            on:click=move |_| tabs_store.activate_tab(&key.get_value())
        >
            {icon(if tab.pinned { "store" } else { "receipt" })}
            <span>{tab.title}</span>
            {close}
        </div>
    }
}

/// Content of one tab, built once and hidden while another tab is active
#[component]
fn TabPane(tab: Tab, tabs_store: AppGlobalContext) -> impl IntoView {
    let key = StoredValue::new(tab.key.clone());
    let content = render_tab_content(&tab.key, tabs_store);

    on_cleanup(move || log::debug!("Tab '{}' closed", key.get_value()));

    view! {
        <div
            class="tabs__item"
            class:tabs__item--hidden=move || !tabs_store.is_active(&key.get_value())
            data-tab-key=tab.key
        >
            {content}
        </div>
    }
}
