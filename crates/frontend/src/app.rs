use crate::layout::global_context::AppGlobalContext;
use crate::layout::notifications::NotificationArea;
use crate::layout::top_header::TopHeader;
use crate::usecases::u501_order_session::{MenuPage, OrderPageViewModel};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppGlobalContext::new();
    provide_context(ctx);

    // One ordering session per page load
    let vm = OrderPageViewModel::new();
    provide_context(vm);
    vm.load();

    view! {
        // Any click that reaches the root closes the account dropdown
        <div class="app" on:click=move |_| ctx.close_account_menu()>
            <TopHeader />
            <main class="app__content">
                <MenuPage />
            </main>
            <NotificationArea />
        </div>
    }
}
