use i18nrs::yew::use_translation;
use shared::config::CSRF_FORM_FIELD;
use shared::config::endpoints::pages;
use shared::forms::product::{DESCRIPTION_MAX_CHARS, TITLE_MAX_CHARS};
use shared::forms::{CharCount, ProductFieldError, ProductFormErrors, ProductFormInput, ProductFormPayload};
use shared::modal::{ModalKind, ModalState};
use shared::models::FieldErrors;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yewdux::prelude::use_dispatch;

use crate::components::{FormProgress, ImagePreviewModal};
use crate::config::FrontendConfig;
use crate::hooks::{use_body_overflow, use_escape_key};
use crate::models::app_state::NotificationStore;
use crate::preview::{
    PreviewCheck, PreviewError, PreviewMessages, load_preview, notify_preview_failure,
    open_loaded_preview,
};

#[derive(Properties, PartialEq)]
pub struct ProductFormPageProps {
    pub payload: ProductFormPayload,
    #[prop_or_default]
    pub csrf_token: Option<String>,
    /// Form action; empty posts back to the current page.
    #[prop_or_default]
    pub action: String,
}

/// Message under one input: client-side errors once the user has tried to
/// submit, the server's errors before that.
fn field_message(
    client: Option<&ProductFormErrors>,
    pick: fn(&ProductFormErrors) -> Option<&ProductFieldError>,
    server: &FieldErrors,
    name: &str,
) -> Option<String> {
    match client {
        Some(errors) => pick(errors).map(ToString::to_string),
        None => server
            .get(name)
            .and_then(|error| error.first_message())
            .map(str::to_string),
    }
}

fn error_view(message: Option<String>) -> Html {
    message.map_or_else(
        Html::default,
        |message| html! { <span class="field-error">{message}</span> },
    )
}

fn counter_view(count: CharCount) -> Html {
    let class = if count.is_over() {
        "char-counter over"
    } else {
        "char-counter"
    };
    html! { <small {class}>{count.label()}</small> }
}

/// Apply `update` to the form values on every keystroke.
fn on_text(
    values: &UseStateHandle<ProductFormInput>,
    update: fn(&mut ProductFormInput, String),
) -> Callback<InputEvent> {
    let values = values.clone();
    Callback::from(move |event: InputEvent| {
        let value = event
            .target_dyn_into::<HtmlInputElement>()
            .map(|input| input.value())
            .or_else(|| {
                event
                    .target_dyn_into::<HtmlTextAreaElement>()
                    .map(|area| area.value())
            });
        if let Some(value) = value {
            let mut next = (*values).clone();
            update(&mut next, value);
            values.set(next);
        }
    })
}

#[function_component(ProductFormPage)]
pub fn product_form_page(props: &ProductFormPageProps) -> Html {
    let (i18n, ..) = use_translation();
    let notifications = use_dispatch::<NotificationStore>();
    let values = use_state(|| props.payload.values.clone());
    let client_errors = use_state(|| None::<ProductFormErrors>);
    let modals = use_state(ModalState::default);
    let categories = use_memo(props.payload.clone(), |payload| payload.category_choices());

    use_body_overflow(modals.body_overflow());
    {
        let modals = modals.clone();
        use_escape_key(Callback::from(move |()| {
            let mut next = (*modals).clone();
            next.close_all();
            modals.set(next);
        }));
    }

    let on_category = {
        let values = values.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                let mut next = (*values).clone();
                next.category = select.value();
                values.set(next);
            }
        })
    };

    let onsubmit = {
        let values = values.clone();
        let client_errors = client_errors.clone();
        Callback::from(move |event: SubmitEvent| {
            let errors = values.validate();
            if errors.is_empty() {
                // Let the browser post the form.
                return;
            }
            event.prevent_default();
            log::debug!("product form refused: {errors:?}");
            client_errors.set(Some(errors));
        })
    };

    let on_preview = {
        let values = values.clone();
        let modals = modals.clone();
        let messages = PreviewMessages {
            invalid: i18n.t(PreviewError::Invalid.translation_key()),
            load_failed: i18n.t(PreviewError::LoadFailed.translation_key()),
        };
        let lifetime_ms = FrontendConfig::new().notification_ms;
        Callback::from(move |_: MouseEvent| {
            let raw = values.image.clone();
            let modals = modals.clone();
            let notifications = notifications.clone();
            let messages = messages.clone();
            spawn_local(async move {
                let result = load_preview(&raw, PreviewCheck::UrlWithExtension).await;
                notify_preview_failure(&notifications, &result, &messages, lifetime_ms);
                if result.is_ok() {
                    let mut next = (*modals).clone();
                    open_loaded_preview(result, &mut next);
                    modals.set(next);
                }
            });
        })
    };

    let close_preview = {
        let modals = modals.clone();
        Callback::from(move |()| {
            let mut next = (*modals).clone();
            next.close(ModalKind::ImagePreview);
            modals.set(next);
        })
    };

    let server = &props.payload.errors;
    let client = client_errors.as_ref();
    let (heading, submit_label) = if props.payload.is_edit() {
        ("product_form.title_edit", "product_form.submit_edit")
    } else {
        ("product_form.title_new", "product_form.submit_new")
    };

    html! {
        <>
            <form class="forms product-form" method="post" action={props.action.clone()} {onsubmit} novalidate=true>
                <h2>{i18n.t(heading)}</h2>
                <FormProgress percent={values.progress()} />
                <input
                    type="hidden"
                    name={CSRF_FORM_FIELD}
                    value={props.csrf_token.clone().unwrap_or_default()}
                />
                if let Some(id) = props.payload.product_id {
                    <input type="hidden" name="id" value={id.to_string()} />
                }

                <div class="form-group">
                    <label for="id_titulo">{i18n.t("product_form.fields.title")}</label>
                    <input
                        id="id_titulo"
                        name="titulo"
                        type="text"
                        required=true
                        maxlength={TITLE_MAX_CHARS.to_string()}
                        placeholder={i18n.t("product_form.placeholders.title")}
                        value={values.title.clone()}
                        oninput={on_text(&values, |form, value| form.title = value)}
                    />
                    {counter_view(CharCount::of(&values.title, TITLE_MAX_CHARS))}
                    {error_view(field_message(client, |e| e.title.as_ref(), server, "titulo"))}
                </div>

                <div class="form-group">
                    <label for="id_precio">{i18n.t("product_form.fields.price")}</label>
                    <input
                        id="id_precio"
                        name="precio"
                        type="number"
                        step="0.01"
                        min="0.01"
                        required=true
                        placeholder={i18n.t("product_form.placeholders.price")}
                        value={values.price.clone()}
                        oninput={on_text(&values, |form, value| form.price = value)}
                    />
                    {error_view(field_message(client, |e| e.price.as_ref(), server, "precio"))}
                </div>

                <div class="form-group">
                    <label for="id_descripcion">{i18n.t("product_form.fields.description")}</label>
                    <textarea
                        id="id_descripcion"
                        name="descripcion"
                        rows="4"
                        required=true
                        maxlength={DESCRIPTION_MAX_CHARS.to_string()}
                        placeholder={i18n.t("product_form.placeholders.description")}
                        value={values.description.clone()}
                        oninput={on_text(&values, |form, value| form.description = value)}
                    />
                    {counter_view(CharCount::of(&values.description, DESCRIPTION_MAX_CHARS))}
                    {error_view(field_message(client, |e| e.description.as_ref(), server, "descripcion"))}
                </div>

                <div class="form-group">
                    <label for="id_categoria">{i18n.t("product_form.fields.category")}</label>
                    <select id="id_categoria" name="categoria" required=true onchange={on_category}>
                        <option value="" selected={values.category.is_empty()}>
                            {i18n.t("product_form.select_category")}
                        </option>
                        { for categories.iter().map(|category| {
                            let id = category.id.to_string();
                            let selected = values.category == id;
                            html! {
                                <option key={category.id} {selected} value={id}>
                                    {&category.name}
                                </option>
                            }
                        }) }
                    </select>
                    {error_view(field_message(client, |e| e.category.as_ref(), server, "categoria"))}
                </div>

                <div class="form-group">
                    <label for="id_imagen1">{i18n.t("product_form.fields.image")}</label>
                    <div class="input-with-action">
                        <input
                            id="id_imagen1"
                            name="imagen1"
                            type="url"
                            required=true
                            placeholder={i18n.t("product_form.placeholders.image")}
                            value={values.image.clone()}
                            oninput={on_text(&values, |form, value| form.image = value)}
                        />
                        <button type="button" class="btn preview-btn" onclick={on_preview}>
                            <Icon icon_id={IconId::HeroiconsOutlinePhoto} class="h-4 w-4" />
                            {i18n.t("product_form.preview")}
                        </button>
                    </div>
                    {error_view(field_message(client, |e| e.image.as_ref(), server, "imagen1"))}
                </div>

                <div class="form-actions">
                    <a href={pages::PRODUCTS} class="btn btn-secondary">{i18n.t("product_form.cancel")}</a>
                    <button type="submit" class="btn btn-primary">{i18n.t(submit_label)}</button>
                </div>
            </form>
            <ImagePreviewModal
                src={modals.preview_src().map(str::to_string)}
                on_close={close_preview}
            />
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server_errors() -> FieldErrors {
        serde_json::from_str(r#"{"titulo":["Ya existe un producto con este título."]}"#).unwrap()
    }

    #[test]
    fn test_server_errors_shown_before_first_submit() {
        assert_eq!(
            field_message(None, |e| e.title.as_ref(), &server_errors(), "titulo"),
            Some("Ya existe un producto con este título.".to_string())
        );
        assert_eq!(
            field_message(None, |e| e.price.as_ref(), &server_errors(), "precio"),
            None
        );
    }

    #[test]
    fn test_client_errors_replace_server_errors() {
        let client = ProductFormErrors {
            price: Some(ProductFieldError::PriceNotPositive),
            ..ProductFormErrors::default()
        };
        assert_eq!(
            field_message(Some(&client), |e| e.title.as_ref(), &server_errors(), "titulo"),
            None
        );
        assert_eq!(
            field_message(Some(&client), |e| e.price.as_ref(), &server_errors(), "precio"),
            Some("El precio debe ser mayor a 0".to_string())
        );
    }
}
