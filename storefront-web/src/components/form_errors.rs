use i18nrs::yew::use_translation;
use shared::forms::FormError;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FormErrorsProps {
    pub error: Option<FormError>,
    /// Translation key shown when the server gave no usable message.
    pub fallback_key: &'static str,
}

/// Error panel under the login and signup forms; hidden when empty.
#[function_component(FormErrors)]
pub fn form_errors(props: &FormErrorsProps) -> Html {
    let (i18n, ..) = use_translation();
    let Some(error) = &props.error else {
        return html! { <div id="error-messages" class="error-messages" style="display: none;"></div> };
    };

    let body = match error {
        FormError::Fields(items) => html! {
            <ul>
                { for items.iter().map(|item| html! { <li>{item.clone()}</li> }) }
            </ul>
        },
        FormError::Message(message) => html! { {message.clone()} },
        FormError::Rejected => html! { {i18n.t(props.fallback_key)} },
        FormError::Network => html! { {i18n.t("errors.network")} },
    };

    html! {
        <div id="error-messages" class="error-messages" role="alert" style="display: block;">
            {body}
        </div>
    }
}
