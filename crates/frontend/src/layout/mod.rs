pub mod global_context;
pub mod registry;
pub mod top_header;
pub mod workspace;

use leptos::prelude::*;
use top_header::TopHeader;
use workspace::Workspace;

/// Page frame: shop header above the tab workspace.
#[component]
pub fn AppFrame() -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />
            <main class="app-main">
                <Workspace />
            </main>
        </div>
    }
}
