use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// How long a toast stays on screen
const NOTIFICATION_TIMEOUT_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "notification notification--success",
            NotificationKind::Warning => "notification notification--warning",
            NotificationKind::Error => "notification notification--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

/// Page-wide UI state that is not part of the ordering session
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub account_menu_open: RwSignal<bool>,
    pub notifications: RwSignal<Vec<Notification>>,
    next_notification_id: RwSignal<u64>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            account_menu_open: RwSignal::new(false),
            notifications: RwSignal::new(vec![]),
            next_notification_id: RwSignal::new(1),
        }
    }

    pub fn toggle_account_menu(&self) {
        self.account_menu_open.update(|open| *open = !*open);
    }

    pub fn close_account_menu(&self) {
        if self.account_menu_open.get_untracked() {
            self.account_menu_open.set(false);
        }
    }

    /// Show a toast; it removes itself after a few seconds
    pub fn notify(&self, kind: NotificationKind, message: impl Into<String>) {
        let id = self.next_notification_id.get_untracked();
        self.next_notification_id.set(id + 1);
        self.notifications.update(|list| {
            list.push(Notification {
                id,
                kind,
                message: message.into(),
            })
        });

        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(NOTIFICATION_TIMEOUT_MS).await;
            this.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.notifications
            .update(|list| list.retain(|n| n.id != id));
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
