use i18nrs::yew::use_translation;
use shared::config::endpoints::pages;
use shared::session::AuthState;
use yew::prelude::*;
use yewdux::prelude::use_selector;

use crate::components::auth_nav::GuestLinks;
use crate::models::app_state::SessionStore;

/// Home page panel: a welcome back for members, an invitation for guests.
#[function_component(AuthHome)]
pub fn auth_home() -> Html {
    let (i18n, ..) = use_translation();
    let auth = use_selector(|state: &SessionStore| state.auth.clone());

    match &*auth {
        AuthState::Checking => html! {},
        AuthState::Authenticated { .. } => html! {
            <div class="text-center user-actions">
                <h3>{i18n.t("auth.home.welcome_title")}</h3>
                <p>{i18n.t("auth.home.welcome_body")}</p>
                <a href={pages::PRODUCTS} class="btn btn-primary">
                    {i18n.t("auth.home.view_products")}
                </a>
            </div>
        },
        AuthState::Guest => html! {
            <div class="text-center guest-actions">
                <p>{i18n.t("auth.home.guest_prompt")}</p>
                <GuestLinks />
            </div>
        },
    }
}
