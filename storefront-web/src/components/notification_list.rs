use i18nrs::yew::use_translation;
use yew::prelude::*;
use yewdux::prelude::use_store;

use crate::models::app_state::NotificationStore;

/// Client-side notifications, oldest first.
#[function_component(NotificationList)]
pub fn notification_list() -> Html {
    let (i18n, ..) = use_translation();
    let (store, dispatch) = use_store::<NotificationStore>();

    html! {
        <div class="notification-stack" aria-live="polite">
            { for store.queue.items().iter().map(|notification| {
                let id = notification.id;
                let dispatch = dispatch.clone();
                let onclick = Callback::from(move |_: MouseEvent| {
                    dispatch.reduce_mut(|state| {
                        state.queue.dismiss(id);
                    });
                });
                html! {
                    <div key={id} class={notification.class()} role="status">
                        <span>{&notification.message}</span>
                        <button
                            type="button"
                            class="notification-close"
                            aria-label={i18n.t("modal.close")}
                            {onclick}
                        >
                            {"×"}
                        </button>
                    </div>
                }
            }) }
        </div>
    }
}
