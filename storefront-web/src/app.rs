use std::collections::HashMap;

use i18nrs::yew::{I18nProvider, I18nProviderConfig};
use serde::de::DeserializeOwned;
use shared::forms::ProductFormPayload;
use shared::models::CatalogPayload;
use web_sys::Element;
use yew::{Html, Properties, Renderer, function_component, html};
use yewdux::YewduxRoot;

use crate::api::StorefrontClient;
use crate::browser;
use crate::components::NotificationList;
use crate::config::FrontendConfig;
use crate::containers::{AuthController, ProductList};
use crate::language::supported_languages;
use crate::pages::{LoginPage, ProductFormPage, SignupPage};

/// Containers the server may render, by element id.
pub mod mount_points {
    pub const AUTH_LINKS: &str = "auth-links-container";
    pub const AUTH_CONTENT: &str = "auth-content";
    pub const AUTH_ROOT: &str = "auth-controller-root";
    pub const LOGIN_FORM: &str = "login-form-root";
    pub const SIGNUP_FORM: &str = "signup-form-root";
    pub const PRODUCT_LIST: &str = "product-list-root";
    pub const PRODUCT_FORM: &str = "product-form-root";
    pub const CATALOG_DATA: &str = "catalog-data";
    pub const PRODUCT_FORM_DATA: &str = "product-form-data";
}

/// What a mounted root renders.
#[derive(Clone, PartialEq)]
pub enum RootView {
    Auth {
        nav_host: Option<Element>,
        content_host: Option<Element>,
    },
    Login {
        csrf_token: Option<String>,
    },
    Signup {
        csrf_token: Option<String>,
    },
    Catalog(CatalogPayload),
    ProductForm {
        payload: ProductFormPayload,
        csrf_token: Option<String>,
        action: String,
    },
}

fn default_language() -> String {
    "es".to_string()
}

#[derive(Properties, Clone, PartialEq)]
pub struct RootProps {
    pub view: RootView,
    #[prop_or_else(default_language)]
    pub language: String,
}

/// Every mounted root gets its own store context and translations.
#[function_component(Root)]
pub fn root(props: &RootProps) -> Html {
    let translations: HashMap<&str, &str> = supported_languages()
        .iter()
        .map(|(&key, value)| (key, value.translation))
        .collect();

    let config = I18nProviderConfig {
        translations,
        default_language: props.language.clone(),
        ..Default::default()
    };

    let body = match &props.view {
        RootView::Auth {
            nav_host,
            content_host,
        } => html! {
            <AuthController nav_host={nav_host.clone()} content_host={content_host.clone()} />
        },
        RootView::Login { csrf_token } => html! { <LoginPage csrf_token={csrf_token.clone()} /> },
        RootView::Signup { csrf_token } => html! { <SignupPage csrf_token={csrf_token.clone()} /> },
        RootView::Catalog(payload) => html! {
            <>
                <ProductList payload={payload.clone()} />
                <NotificationList />
            </>
        },
        RootView::ProductForm {
            payload,
            csrf_token,
            action,
        } => html! {
            <>
                <ProductFormPage
                    payload={payload.clone()}
                    csrf_token={csrf_token.clone()}
                    action={action.clone()}
                />
                <NotificationList />
            </>
        },
    };

    html! {
        <YewduxRoot>
            <I18nProvider ..config>
                {body}
            </I18nProvider>
        </YewduxRoot>
    }
}

fn render(element: Element, view: RootView, config: &FrontendConfig) {
    let props = RootProps {
        view,
        language: config.default_language.clone(),
    };
    Renderer::<Root>::with_root_and_props(element, props).render();
}

/// CSRF token from the container's `data-csrf-token`, else the cookie.
fn csrf_for(element: &Element) -> Option<String> {
    element
        .get_attribute("data-csrf-token")
        .filter(|token| !token.is_empty())
        .or_else(StorefrontClient::csrf_token)
}

/// Parse a JSON payload script. A missing script yields the default payload;
/// a malformed one is logged and yields `None`.
fn read_payload<T: DeserializeOwned + Default>(script_id: &str) -> Option<T> {
    let Some(raw) = browser::read_json_script(script_id) else {
        log::debug!("no #{script_id} payload; starting empty");
        return Some(T::default());
    };
    parse_payload(script_id, &raw)
}

pub(crate) fn parse_payload<T: DeserializeOwned + Default>(script_id: &str, raw: &str) -> Option<T> {
    if raw.trim().is_empty() {
        return Some(T::default());
    }
    match serde_json::from_str(raw) {
        Ok(payload) => Some(payload),
        Err(err) => {
            log::error!("malformed #{script_id} payload: {err}");
            None
        }
    }
}

fn mount_auth(config: &FrontendConfig) -> bool {
    let nav_host = browser::element_by_id(mount_points::AUTH_LINKS);
    let content_host = browser::element_by_id(mount_points::AUTH_CONTENT);
    if nav_host.is_none() && content_host.is_none() {
        return false;
    }
    for host in nav_host.iter().chain(content_host.iter()) {
        host.set_inner_html("");
    }

    let Some(document) = browser::document() else {
        return false;
    };
    let root = match document.create_element("div") {
        Ok(root) => root,
        Err(err) => {
            log::error!("could not create auth root: {err:?}");
            return false;
        }
    };
    root.set_id(mount_points::AUTH_ROOT);
    let attached = document
        .body()
        .is_some_and(|body| body.append_child(&root).is_ok());
    if !attached {
        log::error!("could not attach auth root to the document body");
        return false;
    }

    render(
        root,
        RootView::Auth {
            nav_host,
            content_host,
        },
        config,
    );
    true
}

/// Mount a component into every container present in the page and return
/// how many were mounted. Absent containers are skipped.
pub fn mount_all(config: &FrontendConfig) -> usize {
    let mut mounted = usize::from(mount_auth(config));

    if let Some(element) = browser::element_by_id(mount_points::LOGIN_FORM) {
        let csrf_token = csrf_for(&element);
        render(element, RootView::Login { csrf_token }, config);
        mounted += 1;
    }

    if let Some(element) = browser::element_by_id(mount_points::SIGNUP_FORM) {
        let csrf_token = csrf_for(&element);
        render(element, RootView::Signup { csrf_token }, config);
        mounted += 1;
    }

    if let Some(element) = browser::element_by_id(mount_points::PRODUCT_LIST)
        && let Some(payload) = read_payload::<CatalogPayload>(mount_points::CATALOG_DATA)
    {
        log::info!("catalog loaded with {} products", payload.products.len());
        render(element, RootView::Catalog(payload), config);
        mounted += 1;
    }

    if let Some(element) = browser::element_by_id(mount_points::PRODUCT_FORM)
        && let Some(payload) = read_payload::<ProductFormPayload>(mount_points::PRODUCT_FORM_DATA)
    {
        let csrf_token = csrf_for(&element);
        let action = element.get_attribute("data-action").unwrap_or_default();
        render(
            element,
            RootView::ProductForm {
                payload,
                csrf_token,
                action,
            },
            config,
        );
        mounted += 1;
    }

    mounted
}
