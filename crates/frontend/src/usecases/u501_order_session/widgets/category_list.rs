use super::super::view_model::OrderPageViewModel;
use crate::shared::icons::icon;
use contracts::domain::a001_menu_category::MenuCategory;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

/// Vertical category menu with per-category quantity badges
#[component]
pub fn CategoryList() -> impl IntoView {
    let vm = leptos::context::use_context::<OrderPageViewModel>()
        .expect("OrderPageViewModel not found");

    let categories = move || {
        vm.read(|s| s.catalog().categories().to_vec())
            .unwrap_or_default()
    };

    view! {
        <nav class="category-list">
            <label class="category-list__label">"MENU CATEGORIES"</label>
            <For
                each=categories
                key=|c: &MenuCategory| c.id
                children=move |category| {
                    let id = category.id;
                    let badge = move || vm.read(|s| s.badges().get(id).copied()).flatten();
                    let count_label = move || badge().map(|b| b.label()).unwrap_or_default();
                    let has_items = move || badge().map(|b| b.has_items()).unwrap_or(false);
                    let is_active = move || vm.read(|s| s.active_category() == Some(id)).unwrap_or(false);

                    view! {
                        <button
                            id=id.dom_id()
                            class="category-list__item"
                            class:category-list__item--active=is_active
                            class:has-items=has_items
                            on:click=move |_| vm.select_category(id)
                        >
                            {icon("utensils")}
                            <span class="category-list__name">{category.name}</span>
                            <Show when=has_items>
                                <span class="notification-badge">{count_label}</span>
                            </Show>
                        </button>
                    }
                }
            />
        </nav>
    }
}
