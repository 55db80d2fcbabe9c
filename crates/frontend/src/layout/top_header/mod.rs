//! TopHeader component - application top navigation bar.
//!
//! Contains:
//! - Restaurant title
//! - Cart counter
//! - Account dropdown with the signed-in user

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::usecases::u501_order_session::OrderPageViewModel;
use leptos::ev;
use leptos::prelude::*;
use thaw::*;

/// Where the identity provider ends the session
const LOGOUT_URL: &str = "/logout";

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let vm = leptos::context::use_context::<OrderPageViewModel>()
        .expect("OrderPageViewModel not found");

    let cart_count = move || vm.read(|s| s.ledger().total_quantity()).unwrap_or(0);

    // The dropdown lives under the root click handler that closes it
    let toggle_menu = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        ctx.toggle_account_menu();
    };
    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Cara's Food Haven"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__cart" title="Items in your order">
                    {icon("shopping-cart")}
                    <Show when=move || { cart_count() > 0 }>
                        <Badge appearance=BadgeAppearance::Filled color=BadgeColor::Brand>
                            {move || cart_count().to_string()}
                        </Badge>
                    </Show>
                </div>

                <div
                    class=move || {
                        if ctx.account_menu_open.get() {
                            "account-dropdown account-dropdown--open"
                        } else {
                            "account-dropdown"
                        }
                    }
                >
                    <button class="account-dropdown__toggle" on:click=toggle_menu>
                        {icon("user")}
                        <span class="account-dropdown__info">
                            <span class="account-dropdown__name">{move || vm.display_name.get()}</span>
                            <span class="account-dropdown__role">"User"</span>
                        </span>
                        {move || if ctx.account_menu_open.get() {
                            icon("chevron-up")
                        } else {
                            icon("chevron-down")
                        }}
                    </button>
                    <Show when=move || ctx.account_menu_open.get()>
                        <div class="account-dropdown__content" on:click=stop_propagation>
                            <a class="account-dropdown__item" href=LOGOUT_URL>
                                {icon("log-out")}
                                " Logout"
                            </a>
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}
