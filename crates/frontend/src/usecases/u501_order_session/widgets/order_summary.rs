use super::super::view_model::OrderPageViewModel;
use crate::layout::global_context::AppGlobalContext;
use contracts::projections::p900_order_summary::OrderSummaryLine;
use leptos::prelude::*;
use thaw::*;

const EMPTY_ORDER_MESSAGE: &str = "THIS IS WHERE YOUR ORDERS ARE DISPLAYED.";

#[component]
pub fn OrderSummaryPanel() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let vm = leptos::context::use_context::<OrderPageViewModel>()
        .expect("OrderPageViewModel not found");

    let is_empty = move || vm.read(|s| s.summary().is_empty).unwrap_or(true);
    let lines = move || vm.read(|s| s.summary().lines.clone()).unwrap_or_default();
    let total = move || vm.read(|s| s.summary().total_label()).unwrap_or_default();
    let confirm_enabled = move || vm.read(|s| s.is_confirm_enabled()).unwrap_or(false);

    view! {
        <aside class="order-summary">
            <h2 class="order-summary__title">"ORDER SUMMARY"</h2>
            <Show
                when=move || !is_empty()
                fallback=|| view! { <p class="order-summary__empty">{EMPTY_ORDER_MESSAGE}</p> }
            >
                <table class="order-summary__table">
                    <thead>
                        <tr>
                            <th>"Item"</th>
                            <th class="text-right">"Price"</th>
                            <th class="text-right">"Qty"</th>
                            <th class="text-right">"Subtotal"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=lines
                            key=|line: &OrderSummaryLine| (line.item_id, line.quantity)
                            children=|line| view! {
                                <tr>
                                    <td>{line.item_name.clone()}</td>
                                    <td class="text-right">{line.unit_price_label()}</td>
                                    <td class="text-right">{line.quantity}</td>
                                    <td class="text-right">{line.subtotal_label()}</td>
                                </tr>
                            }
                        />
                    </tbody>
                </table>
            </Show>
            <div class="order-summary__total">
                <span>"Total: "</span>
                <strong>{total}</strong>
            </div>
            <Show when=confirm_enabled>
                <div class="order-summary__confirm">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.request_confirm(ctx)>
                        "Confirm Order"
                    </Button>
                </div>
            </Show>
        </aside>
    }
}
