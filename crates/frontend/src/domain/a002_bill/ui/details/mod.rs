//! Bill view opened after printing a bill from the order desk

use crate::domain::a002_bill::store::use_billing_store;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::number_format::format_amount;
use contracts::domain::a002_bill::{BillId, BillRecord};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn BillDetail(bill_id: BillId, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let store = use_billing_store();
    let bill = store.get(&bill_id);
    let missing = bill.is_none();

    let close = move |_| {
        store.remove(&bill_id);
        on_close.run(());
    };

    let print = move |_| {
        if let Some(w) = web_sys::window() {
            if let Err(e) = w.print() {
                log::error!("Print failed: {:?}", e);
            }
        }
    };

    view! {
        <div class="page page--detail">
            <div class="page__header">
                <div class="page__header-left">
                    {icon("receipt")}
                    <h2>"Bill"</h2>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        size=ButtonSize::Medium
                        on_click=print
                        disabled=missing
                    >
                        {icon("printer")}
                        "Print"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        size=ButtonSize::Medium
                        on_click=close
                    >
                        "Close"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {match bill {
                    Some(bill) => view! { <BillBody bill=bill /> }.into_any(),
                    None => view! {
                        <div style="padding: var(--spacing-lg); color: var(--color-text-secondary);">
                            "This bill is no longer available. Bills are kept only until the page is reloaded."
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn BillBody(bill: BillRecord) -> impl IntoView {
    let rows = bill
        .items
        .clone()
        .into_iter()
        .map(|item| {
            view! {
                <tr>
                    <td style="padding: 8px; border-bottom: 1px solid #eee;">
                        <Flex gap=FlexGap::Small align=FlexAlign::Center>
                            <img
                                src=item.image.clone()
                                alt=item.name.clone()
                                style="width: 32px; height: 32px; object-fit: cover; border-radius: 4px;"
                            />
                            <span>{item.name.clone()}</span>
                        </Flex>
                    </td>
                    <td style="padding: 8px; border-bottom: 1px solid #eee; text-align: right;">
                        {item.quantity}
                    </td>
                    <td style="padding: 8px; border-bottom: 1px solid #eee; text-align: right;">
                        {format_amount(item.price)}
                    </td>
                    <td style="padding: 8px; border-bottom: 1px solid #eee; text-align: right;">
                        {format_amount(item.total)}
                    </td>
                </tr>
            }
        })
        .collect_view();

    let customer = if bill.customer_username.is_empty() {
        bill.customer_name.clone()
    } else {
        format!("{} (@{})", bill.customer_name, bill.customer_username)
    };

    view! {
        <div class="bill" style="max-width: 720px; margin: 0 auto; padding: var(--spacing-lg);">
            <Flex justify=FlexJustify::SpaceBetween style="margin-bottom: var(--spacing-md);">
                <div>
                    <div style="font-weight: 600;">{format!("Order #{}", bill.order_id)}</div>
                    <div>{customer}</div>
                </div>
                <div style="text-align: right; color: var(--color-text-secondary);">
                    {format_datetime(bill.timestamp)}
                </div>
            </Flex>

            <table style="width: 100%; border-collapse: collapse;">
                <thead>
                    <tr style="background: #f5f5f5;">
                        <th style="padding: 8px; text-align: left;">"Item"</th>
                        <th style="padding: 8px; text-align: right;">"Qty"</th>
                        <th style="padding: 8px; text-align: right;">"Price"</th>
                        <th style="padding: 8px; text-align: right;">"Total"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>

            <div style="margin-top: var(--spacing-md); text-align: right; font-size: 1.125rem; font-weight: 600;">
                {format!("Total: {}", format_amount(bill.total_amount))}
            </div>
        </div>
    }
}
