use super::super::view_model::OrderPageViewModel;
use crate::shared::modal::Modal;
use leptos::prelude::*;

/// Read-only item view opened by clicking a card
#[component]
pub fn ItemDetails() -> impl IntoView {
    let vm = leptos::context::use_context::<OrderPageViewModel>()
        .expect("OrderPageViewModel not found");

    view! {
        {move || vm.details.get().map(|details| view! {
            <Modal
                title=details.name.clone()
                class="menu-item-details"
                on_close=Callback::new(move |_| vm.close_details())
            >
                <div class="menu-item-details__image">
                    <img src=details.image_ref.clone() alt=details.name.clone() />
                </div>
                <p class="menu-item-details__price">{details.price_label.clone()}</p>
                <p class="menu-item-details__description">{details.description.clone()}</p>
            </Modal>
        })}
    }
}
