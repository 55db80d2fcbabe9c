use super::super::view_model::OrderPageViewModel;
use crate::shared::icons::icon;
use contracts::domain::a002_menu_item::MenuItem;
use contracts::domain::common::AggregateId;
use leptos::ev;
use leptos::prelude::*;

/// Items of the active category
#[component]
pub fn ItemGrid() -> impl IntoView {
    let vm = leptos::context::use_context::<OrderPageViewModel>()
        .expect("OrderPageViewModel not found");

    let header = move || vm.read(|s| s.header_label().to_string()).unwrap_or_default();
    let items = move || {
        vm.read(|s| s.visible_items().into_iter().cloned().collect::<Vec<_>>())
            .unwrap_or_default()
    };

    view! {
        <section class="menu-items">
            <h2 class="menu-items__header">{header}</h2>
            <div class="menu-items__grid">
                <For
                    each=items
                    key=|item: &MenuItem| item.id
                    children=move |item| view! { <ItemCard item=item /> }
                />
            </div>
        </section>
    }
}

#[component]
fn ItemCard(item: MenuItem) -> impl IntoView {
    let vm = leptos::context::use_context::<OrderPageViewModel>()
        .expect("OrderPageViewModel not found");

    let id = item.id;
    let quantity = move || vm.read(|s| s.quantity(id)).unwrap_or(0);
    let is_selected = move || vm.read(|s| s.is_selected(id)).unwrap_or(false);

    // Quantity buttons sit on the card, whose click opens the details
    let on_decrement = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        vm.decrement(id);
    };
    let on_increment = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        vm.increment(id);
    };

    view! {
        <div
            id=id.dom_id()
            class="menu-card"
            class:menu-card--selected=is_selected
            on:click=move |_| vm.show_details(id)
        >
            <img class="menu-card__image" src=item.image_ref.clone() alt=item.name.clone() />
            <div class="menu-card__name">{item.name.clone()}</div>
            <div class="menu-card__price">{item.price_label()}</div>
            <div class="menu-card__quantity">
                <button class="quantity-btn" title="Remove one" on:click=on_decrement>
                    {icon("minus")}
                </button>
                <span class="quantity-value">{move || quantity().to_string()}</span>
                <button class="quantity-btn" title="Add one" on:click=on_increment>
                    {icon("plus")}
                </button>
            </div>
        </div>
    }
}
