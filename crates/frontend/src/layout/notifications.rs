//! Toast area in the bottom right corner.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn NotificationArea() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="notification-area" aria-live="polite">
            <For
                each=move || ctx.notifications.get()
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    view! {
                        <div class=n.kind.css_class() role="status">
                            <span class="notification__message">{n.message}</span>
                            <button
                                class="notification__close"
                                title="Dismiss"
                                on:click=move |_| ctx.dismiss(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
