use shared::session::{AuthState, ProbeStart};
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use yew::create_portal;
use yew::prelude::*;
use yewdux::Dispatch;
use yewdux::prelude::use_dispatch;

use crate::api::{StorefrontClient, probe_outcome};
use crate::components::{AuthHome, AuthNav};
use crate::models::app_state::SessionStore;
use crate::session::browser_session;

#[derive(Properties, PartialEq)]
pub struct AuthControllerProps {
    /// Host for the navigation links, when the page has one.
    #[prop_or_default]
    pub nav_host: Option<Element>,
    /// Host for the home page panel, when the page has one.
    #[prop_or_default]
    pub content_host: Option<Element>,
}

/// Resolve the session state for this page load. Without a stored token the
/// guest state is published immediately and no request is made.
pub fn update_auth_ui(dispatch: Dispatch<SessionStore>) {
    let session = browser_session();
    match session.begin_probe() {
        ProbeStart::Guest => dispatch.set(SessionStore {
            auth: AuthState::Guest,
        }),
        ProbeStart::Probe { token } => spawn_local(async move {
            let result = StorefrontClient::shared().get_profile(&token).await;
            let auth = session.resolve_probe(probe_outcome(result));
            log::debug!("session resolved: authenticated={}", auth.is_authenticated());
            dispatch.set(SessionStore { auth });
        }),
    }
}

/// Probes the session once and renders into whichever hosts exist.
#[function_component(AuthController)]
pub fn auth_controller(props: &AuthControllerProps) -> Html {
    let dispatch = use_dispatch::<SessionStore>();

    use_effect_with((), move |_| {
        update_auth_ui(dispatch);
        || ()
    });

    let nav = props
        .nav_host
        .clone()
        .map_or_else(Html::default, |host| create_portal(html! { <AuthNav /> }, host));
    let content = props
        .content_host
        .clone()
        .map_or_else(Html::default, |host| create_portal(html! { <AuthHome /> }, host));

    html! {
        <>
            {nav}
            {content}
        </>
    }
}
