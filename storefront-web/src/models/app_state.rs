use gloo_timers::callback::Timeout;
use shared::notification::{NotificationLevel, NotificationQueue};
use shared::session::AuthState;
use yewdux::{Dispatch, Store};

/// Session state rendered by the navigation links and the home panel.
#[derive(Default, Clone, PartialEq, Eq, Store)]
pub struct SessionStore {
    pub auth: AuthState,
}

/// Notifications on screen for one mounted root.
#[derive(Default, Clone, PartialEq, Eq, Store)]
pub struct NotificationStore {
    pub queue: NotificationQueue,
}

/// Show a notification and schedule its removal after `lifetime_ms`.
pub fn notify(
    dispatch: &Dispatch<NotificationStore>,
    message: impl Into<String>,
    level: NotificationLevel,
    lifetime_ms: u32,
) {
    let message = message.into();
    match level {
        NotificationLevel::Error => log::warn!("notification: {message}"),
        _ => log::debug!("notification: {message}"),
    }

    let mut id = 0;
    dispatch.reduce_mut(|state| {
        id = state.queue.push_with_lifetime(message, level, lifetime_ms);
    });
    schedule_dismissal(dispatch, id, lifetime_ms);
}

/// Remove notification `id` once `lifetime_ms` has passed.
pub fn schedule_dismissal(dispatch: &Dispatch<NotificationStore>, id: u64, lifetime_ms: u32) {
    let dispatch = dispatch.clone();
    Timeout::new(lifetime_ms, move || {
        dispatch.reduce_mut(|state| {
            state.queue.dismiss(id);
        });
    })
    .forget();
}
