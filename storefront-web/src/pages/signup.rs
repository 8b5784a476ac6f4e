use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use i18nrs::yew::use_translation;
use shared::config::CSRF_FORM_FIELD;
use shared::config::endpoints::pages;
use shared::config::timing::USERNAME_CHECK_DEBOUNCE_MS;
use shared::errors::ClientError;
use shared::forms::{AuthFormKind, AuthFormState};
use shared::models::{RegisterRequest, UsernameAvailability};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::StorefrontClient;
use crate::browser;
use crate::components::FormErrors;
use crate::pages::bind_input;
use crate::session::browser_session;

const KIND: AuthFormKind = AuthFormKind::Signup;

/// An availability answer only applies while the field still holds the name it
/// was asked about.
fn answer_is_current(current: &str, candidate: &str) -> bool {
    current.trim() == candidate
}

/// Availability hint under the username field.
#[derive(Debug, Clone, PartialEq, Eq)]
enum UsernameHint {
    Hidden,
    Checking,
    Answer(UsernameAvailability),
}

#[derive(yew::Properties, PartialEq)]
pub struct SignupPageProps {
    /// Token rendered into the page by the server; the cookie is used when absent.
    #[prop_or_default]
    pub csrf_token: Option<String>,
}

#[function_component(SignupPage)]
pub fn signup_page(props: &SignupPageProps) -> Html {
    let (i18n, ..) = use_translation();
    let username = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let password2 = use_state(String::new);
    let hint = use_state(|| UsernameHint::Hidden);
    let pending_check: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);
    let latest_username: Rc<RefCell<String>> = use_mut_ref(String::new);
    let form_state = use_state(AuthFormState::default);

    let on_username = {
        let username = username.clone();
        let hint = hint.clone();
        Callback::from(move |event: InputEvent| {
            let Some(input) = event.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            let value = input.value();
            username.set(value.clone());
            latest_username.borrow_mut().clone_from(&value);

            // Replacing the timeout cancels the previous check.
            let candidate = value.trim().to_string();
            if candidate.is_empty() {
                pending_check.borrow_mut().take();
                hint.set(UsernameHint::Hidden);
                return;
            }
            let hint = hint.clone();
            let latest_username = Rc::clone(&latest_username);
            let timeout = Timeout::new(USERNAME_CHECK_DEBOUNCE_MS, move || {
                hint.set(UsernameHint::Checking);
                spawn_local(async move {
                    let result = StorefrontClient::shared().check_username(&candidate).await;
                    if !answer_is_current(&latest_username.borrow(), &candidate) {
                        log::debug!("dropping stale username answer for {candidate}");
                        return;
                    }
                    match result {
                        Ok(answer) => hint.set(UsernameHint::Answer(answer)),
                        Err(err) => {
                            log::debug!("username check failed: {err}");
                            hint.set(UsernameHint::Hidden);
                        }
                    }
                });
            });
            *pending_check.borrow_mut() = Some(timeout);
        })
    };

    let onsubmit = {
        let username = username.clone();
        let email = email.clone();
        let password = password.clone();
        let password2 = password2.clone();
        let form_state = form_state.clone();
        let csrf_token = props.csrf_token.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let mut next = (*form_state).clone();
            if !next.begin() {
                return;
            }
            form_state.set(next);

            let request = RegisterRequest {
                username: (*username).clone(),
                email: (*email).clone(),
                password: (*password).clone(),
                password2: (*password2).clone(),
            };
            let form_state = form_state.clone();
            let csrf_token = csrf_token.clone();
            spawn_local(async move {
                let result = StorefrontClient::shared()
                    .register(&request, csrf_token.as_deref())
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
                        log::warn!("signup failed: {err}");
                        Some(KIND.failure(&err))
                    }
                };
                let mut done = AuthFormState::default();
                done.finish(error);
                form_state.set(done);
            });
        })
    };

    let hint_view = match &*hint {
        UsernameHint::Hidden => html! {},
        UsernameHint::Checking => html! {
            <small class="username-hint">{i18n.t("auth.signup.checking")}</small>
        },
        UsernameHint::Answer(answer) => {
            let class = if answer.available {
                "username-hint available"
            } else {
                "username-hint taken"
            };
            html! { <small {class}>{answer.message.clone()}</small> }
        }
    };

    let submitting = form_state.submitting();

    html! {
        <form id="signup-form" class="auth-form" {onsubmit}>
            <h2>{i18n.t("auth.signup.title")}</h2>
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
                    oninput={on_username}
                />
                {hint_view}
            </div>
            <div class="form-group">
                <label for="id_email">{i18n.t("auth.fields.email")}</label>
                <input
                    id="id_email"
                    name="email"
                    type="email"
                    autocomplete="email"
                    required=true
                    value={(*email).clone()}
                    oninput={bind_input(&email)}
                />
            </div>
            <div class="form-group">
                <label for="id_password">{i18n.t("auth.fields.password")}</label>
                <input
                    id="id_password"
                    name="password"
                    type="password"
                    autocomplete="new-password"
                    required=true
                    value={(*password).clone()}
                    oninput={bind_input(&password)}
                />
            </div>
            <div class="form-group">
                <label for="id_password2">{i18n.t("auth.fields.password2")}</label>
                <input
                    id="id_password2"
                    name="password2"
                    type="password"
                    autocomplete="new-password"
                    required=true
                    value={(*password2).clone()}
                    oninput={bind_input(&password2)}
                />
            </div>
            <FormErrors error={form_state.error().cloned()} fallback_key="auth.signup.failed" />
            <button id="submit-btn" class="btn btn-primary" type="submit" disabled={submitting}>
                {i18n.t(form_state.label_key(KIND))}
            </button>
            <p class="auth-switch">
                <a href={pages::LOGIN}>{i18n.t("auth.nav.login")}</a>
            </p>
        </form>
    }
}
