use super::view_model::OrderDeskVm;
use crate::shared::date_utils::format_time_ago;
use crate::shared::icons::icon;
use crate::shared::number_format::format_amount;
use chrono::Utc;
use contracts::domain::a001_shop_order::{Order, OrderItem, OrderTab, SyncState};
use leptos::prelude::*;
use thaw::*;

/// Shown when a product image fails to load
const IMAGE_PLACEHOLDER: &str = "data:image/svg+xml;utf8,<svg xmlns='http://www.w3.org/2000/svg' width='32' height='32' viewBox='0 0 32 32'><rect width='32' height='32' fill='%23F3F4F6'/><path d='M16 8c-3.3 0-6 2.7-6 6v4c0 3.3 2.7 6 6 6s6-2.7 6-6v-4c0-3.3-2.7-6-6-6z' fill='%239CA9B4'/></svg>";

#[component]
pub fn OrderCard(order: Order, vm: OrderDeskVm) -> impl IntoView {
    let order_id = StoredValue::new(order.id.clone());
    let viewing = vm.viewing;
    let is_viewing = move || viewing.with(|v| v.as_ref() == Some(&order_id.get_value()));
    let active_tab = vm.active_tab.get_untracked();
    let sync_state = vm.sync_state(order.id.clone());

    let on_view = {
        let vm = vm.clone();
        move |_| vm.toggle_view(&order_id.get_value())
    };

    let actions = match active_tab {
        OrderTab::Orders => {
            let vm_accept = vm.clone();
            let vm_reject = vm.clone();
            view! {
                <Button
                    appearance=ButtonAppearance::Primary
                    size=ButtonSize::Small
                    on_click=move |_| vm_accept.accept(order_id.get_value())
                >
                    {icon("check")}
                    "Accept"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Small
                    on_click=move |_| vm_reject.reject(order_id.get_value())
                >
                    {icon("x")}
                    "Reject"
                </Button>
            }
            .into_any()
        }
        OrderTab::Accepted => {
            let vm_print = vm.clone();
            let vm_cancel = vm.clone();
            view! {
                <Button
                    appearance=ButtonAppearance::Primary
                    size=ButtonSize::Small
                    on_click=move |_| vm_print.print_bill(order_id.get_value())
                >
                    {icon("printer")}
                    "Print Bill"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Small
                    on_click=move |_| vm_cancel.cancel(order_id.get_value())
                >
                    {icon("ban")}
                    "Cancel Order"
                </Button>
            }
            .into_any()
        }
        OrderTab::History => view! {
            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                {order.status.display_name()}
            </Badge>
        }
        .into_any(),
    };

    let items = order.items.clone();
    let total = order.total();

    view! {
        <div
            class="order-card"
            style="background: white; border: 1px solid var(--color-border, #e5e7eb); border-radius: 8px; padding: 12px 16px; margin-bottom: 16px;"
        >
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center style="flex-wrap: wrap; gap: 12px;">
                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    <div style="width: 40px; height: 40px; border-radius: 50%; background: #fef3c7; color: #d97706; display: flex; align-items: center; justify-content: center; font-weight: 600;">
                        {order.consumer.initial().to_string()}
                    </div>
                    <div>
                        <div style="font-weight: 600;">{order.consumer.name.clone()}</div>
                        <div style="font-size: var(--font-size-sm); color: var(--color-text-secondary);">
                            {format_time_ago(order.created_at, Utc::now())}
                        </div>
                    </div>
                    <SyncBadge state=sync_state />
                </Flex>

                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    <Button appearance=ButtonAppearance::Subtle size=ButtonSize::Small on_click=on_view>
                        {icon("eye")}
                        "View"
                    </Button>
                    {actions}
                </Flex>
            </Flex>

            <Show when=is_viewing>
                <OrderItems items=items.clone() total=total />
            </Show>
        </div>
    }
}

#[component]
fn SyncBadge(state: Signal<SyncState>) -> impl IntoView {
    move || match state.get() {
        SyncState::Synced => ().into_any(),
        SyncState::PendingSync => view! {
            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Warning>
                "Saving..."
            </Badge>
        }
        .into_any(),
        SyncState::Failed(reason) => view! {
            <span title=reason>
                <Badge appearance=BadgeAppearance::Filled color=BadgeColor::Danger>
                    {icon("alert")}
                    "Not saved"
                </Badge>
            </span>
        }
        .into_any(),
    }
}

#[component]
fn OrderItems(items: Vec<OrderItem>, total: f64) -> impl IntoView {
    let cards = items
        .into_iter()
        .map(|item| {
            view! {
                <Flex
                    gap=FlexGap::Small
                    align=FlexAlign::Center
                    style="padding: 12px; background: #f9fafb; border-radius: 8px;"
                >
                    <img
                        src=item.image.clone()
                        alt=item.name.clone()
                        style="width: 32px; height: 32px; object-fit: cover; border-radius: 4px;"
                        on:error=|ev| {
                            event_target::<web_sys::HtmlImageElement>(&ev).set_src(IMAGE_PLACEHOLDER);
                        }
                    />
                    <div style="min-width: 0;">
                        <div style="font-weight: 500;">{item.name.clone()}</div>
                        <div style="font-size: var(--font-size-sm); color: var(--color-text-secondary);">
                            {format!("Quantity: {}", item.quantity)}
                        </div>
                        <div style="font-size: var(--font-size-sm); color: #16a34a; font-weight: 500;">
                            {format_amount(item.price)}
                        </div>
                    </div>
                </Flex>
            }
        })
        .collect_view();

    view! {
        <div style="border-top: 1px solid var(--color-border, #e5e7eb); margin-top: 12px; padding-top: 12px;">
            <div style="font-weight: 500; margin-bottom: 8px;">"Order Details:"</div>
            <div style="display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 12px;">
                {cards}
            </div>
            <div style="margin-top: 12px; text-align: right; font-weight: 600;">
                {format!("Total: {}", format_amount(total))}
            </div>
        </div>
    }
}
