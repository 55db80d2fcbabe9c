use super::view_model::OrderPageViewModel;
use super::widgets::{CategoryList, ConfirmForm, ItemDetails, ItemGrid, OrderSummaryPanel};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn MenuPage() -> impl IntoView {
    let vm = leptos::context::use_context::<OrderPageViewModel>()
        .expect("OrderPageViewModel not found");

    let is_ready = move || vm.session.with(|s| s.is_some());

    view! {
        <div class="menu-page">
            {move || vm.load_error.get().map(|e| view! {
                <MessageBar intent=MessageBarIntent::Error>
                    <span>{e}</span>
                </MessageBar>
            })}

            <Show when=move || vm.is_loading.get()>
                <div class="menu-page__loading">
                    <Spinner />
                </div>
            </Show>

            <Show when=is_ready>
                <div class="menu-page__layout">
                    <CategoryList />
                    <ItemGrid />
                    <OrderSummaryPanel />
                </div>
                <ConfirmForm />
                <ItemDetails />
            </Show>
        </div>
    }
}
