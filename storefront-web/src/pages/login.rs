use i18nrs::yew::use_translation;
use shared::config::CSRF_FORM_FIELD;
use shared::config::endpoints::pages;
use shared::errors::ClientError;
use shared::forms::{AuthFormKind, AuthFormState};
use shared::models::LoginRequest;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::StorefrontClient;
use crate::browser;
use crate::components::FormErrors;
use crate::pages::bind_input;
use crate::session::browser_session;

const KIND: AuthFormKind = AuthFormKind::Login;

#[derive(yew::Properties, PartialEq)]
pub struct LoginPageProps {
    /// Token rendered into the page by the server; the cookie is used when absent.
    #[prop_or_default]
    pub csrf_token: Option<String>,
}

#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let (i18n, ..) = use_translation();
    let username = use_state(String::new);
    let password = use_state(String::new);
    let form_state = use_state(AuthFormState::default);

    let onsubmit = {
        let username = username.clone();
        let password = password.clone();
        let form_state = form_state.clone();
        let csrf_token = props.csrf_token.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let mut next = (*form_state).clone();
            if !next.begin() {
                return;
            }
            form_state.set(next);

            let request = LoginRequest {
                username: (*username).clone(),
                password: (*password).clone(),
            };
            let form_state = form_state.clone();
            let csrf_token = csrf_token.clone();
            spawn_local(async move {
                let result = StorefrontClient::shared()
                    .login(&request, csrf_token.as_deref())
                    .await
                    .and_then(|response| {
                        browser_session()
                            .store_token(&response.token)
                            .map_err(ClientError::from)
                    });
                let error = match result {
                    Ok(()) => {
                        browser::redirect(pages::HOME);
                        None
                    }
                    Err(err) => {
                        log::warn!("login failed: {err}");
                        Some(KIND.failure(&err))
                    }
                };
                let mut done = AuthFormState::default();
                done.finish(error);
                form_state.set(done);
            });
        })
    };

    let submitting = form_state.submitting();

    html! {
        <form id="login-form" class="auth-form" {onsubmit}>
            <h2>{i18n.t("auth.login.title")}</h2>
            <input
                type="hidden"
                name={CSRF_FORM_FIELD}
                value={props.csrf_token.clone().unwrap_or_default()}
            />
            <div class="form-group">
                <label for="id_username">{i18n.t("auth.fields.username")}</label>
                <input
                    id="id_username"
                    name="username"
                    type="text"
                    autocomplete="username"
                    required=true
                    value={(*username).clone()}
                    oninput={bind_input(&username)}
                />
            </div>
            <div class="form-group">
                <label for="id_password">{i18n.t("auth.fields.password")}</label>
                <input
                    id="id_password"
                    name="password"
                    type="password"
                    autocomplete="current-password"
                    required=true
                    value={(*password).clone()}
                    oninput={bind_input(&password)}
                />
            </div>
            <FormErrors error={form_state.error().cloned()} fallback_key="auth.login.failed" />
            <button id="submit-btn" class="btn btn-primary" type="submit" disabled={submitting}>
                {i18n.t(form_state.label_key(KIND))}
            </button>
            <p class="auth-switch">
                <a href={pages::SIGNUP}>{i18n.t("auth.nav.signup")}</a>
            </p>
        </form>
    }
}
