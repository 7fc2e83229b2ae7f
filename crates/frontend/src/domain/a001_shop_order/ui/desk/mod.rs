//! Order desk: pending, accepted and past orders of the current shop

mod model;
mod order_card;
mod view_model;

pub use view_model::OrderDeskVm;

use crate::domain::a002_bill::store::use_billing_store;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::shop::context::use_shop;
use contracts::domain::a001_shop_order::OrderTab;
use leptos::prelude::*;
use order_card::OrderCard;
use thaw::*;

#[component]
pub fn OrderDesk() -> impl IntoView {
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let shop_id = use_shop().get_untracked().shop_id;
    let vm = OrderDeskVm::new(shop_id, tabs_store, use_billing_store());

    vm.load();

    let vm_tabs = vm.clone();
    let vm_list = vm.clone();
    let loading = vm.loading;
    let bills_count = vm.bills_count();

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h2>"Orders"</h2>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        size=ButtonSize::Medium
                        on_click={
                            let vm = vm.clone();
                            move |_| vm.load()
                        }
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { "Loading..." } else { "Refresh" }}
                    </Button>
                </div>
            </div>

            <TabBar vm=vm_tabs />

            <div class="page__content">
                <OrderList vm=vm_list />
            </div>

            <Show when=move || { bills_count.get() > 0 }>
                <div style="position: fixed; bottom: 16px; right: 16px; background: #3b82f6; color: white; padding: 8px 16px; border-radius: 8px; box-shadow: 0 4px 12px rgba(0,0,0,0.15);">
                    {move || format!("Bills Generated: {}", bills_count.get())}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn TabBar(vm: OrderDeskVm) -> impl IntoView {
    let active_tab = vm.active_tab;

    let buttons = OrderTab::all()
        .into_iter()
        .map(|tab| {
            let count = vm.tab_count(tab);
            let vm = vm.clone();
            view! {
                <Button
                    appearance=Signal::derive(move || {
                        if active_tab.get() == tab {
                            ButtonAppearance::Primary
                        } else {
                            ButtonAppearance::Subtle
                        }
                    })
                    size=ButtonSize::Small
                    attr:data-tab=tab.key()
                    on_click=move |_| vm.set_tab(tab)
                >
                    {tab.label()}
                    <Badge
                        appearance=BadgeAppearance::Tint
                        color=Signal::derive(move || {
                            if active_tab.get() == tab {
                                BadgeColor::Brand
                            } else {
                                BadgeColor::Informative
                            }
                        })
                        attr:style="margin-left: 6px;"
                    >
                        {move || count.get().to_string()}
                    </Badge>
                </Button>
            }
        })
        .collect_view();

    view! {
        <Flex
            gap=FlexGap::Small
            align=FlexAlign::Center
            justify=FlexJustify::Center
            style="margin-bottom: var(--spacing-md); padding: var(--spacing-sm); background: var(--color-bg-secondary); border-radius: var(--radius-lg); border: 1px solid var(--color-border);"
        >
            {buttons}
        </Flex>
    }
}

#[component]
fn OrderList(vm: OrderDeskVm) -> impl IntoView {
    let loading = vm.loading;
    let active_tab = vm.active_tab;
    let orders = vm.filtered_orders();

    move || {
        if loading.get() {
            view! {
                <Flex gap=FlexGap::Small style="align-items: center; padding: var(--spacing-4xl); justify-content: center;">
                    <Spinner />
                    <span>"Loading orders..."</span>
                </Flex>
            }
            .into_any()
        } else {
            let list = orders.get();
            if list.is_empty() {
                view! {
                    <div style="text-align: center; padding: 48px 16px; color: var(--color-text-secondary);">
                        <div style="margin-bottom: 12px;">{icon("eye")}</div>
                        <h3 style="margin: 0 0 8px;">"No orders found"</h3>
                        <p style="margin: 0;">{active_tab.get().empty_message()}</p>
                    </div>
                }
                .into_any()
            } else {
                let vm = vm.clone();
                list.into_iter()
                    .map(|order| view! { <OrderCard order=order vm=vm.clone() /> })
                    .collect_view()
                    .into_any()
            }
        }
    }
}
