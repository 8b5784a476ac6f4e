use i18nrs::yew::use_translation;
use shared::config::endpoints::pages;
use shared::session::AuthState;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::use_selector;

use crate::api::StorefrontClient;
use crate::browser;
use crate::components::loading::Loading;
use crate::models::app_state::SessionStore;
use crate::session::browser_session;

/// Invalidate the stored token and return to the home page. Without a token
/// nothing happens.
pub fn handle_logout() {
    let session = browser_session();
    let Some(token) = session.begin_logout() else {
        return;
    };
    spawn_local(async move {
        if let Err(err) = StorefrontClient::shared().logout(&token).await {
            log::error!("logout failed: {err}");
        }
        session.finish_logout();
        browser::redirect(pages::HOME);
    });
}

/// Login and signup links shown to guests.
#[function_component(GuestLinks)]
pub fn guest_links() -> Html {
    let (i18n, ..) = use_translation();
    html! {
        <>
            <a href={pages::LOGIN} class="auth-button">{i18n.t("auth.nav.login")}</a>
            <a href={pages::SIGNUP} class="auth-button register">{i18n.t("auth.nav.signup")}</a>
        </>
    }
}

/// Navigation links for the current session state.
#[function_component(AuthNav)]
pub fn auth_nav() -> Html {
    let (i18n, ..) = use_translation();
    let auth = use_selector(|state: &SessionStore| state.auth.clone());

    match &*auth {
        AuthState::Checking => html! { <Loading /> },
        AuthState::Guest => html! { <GuestLinks /> },
        AuthState::Authenticated { username } => {
            let onclick = Callback::from(|event: MouseEvent| {
                event.prevent_default();
                handle_logout();
            });
            html! {
                <>
                    <span class="user-greeting">
                        {format!("{} {username}", i18n.t("auth.nav.greeting"))}
                    </span>
                    <a href="#" class="auth-button">{i18n.t("auth.nav.profile")}</a>
                    <button id="logout-btn" class="auth-button logout" {onclick}>
                        {i18n.t("auth.nav.logout")}
                    </button>
                </>
            }
        }
    }
}
