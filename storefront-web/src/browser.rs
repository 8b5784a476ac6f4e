//! Thin wrappers over the browser APIs the components need.

use gloo_timers::callback::Timeout;
use js_sys::Promise;
use shared::config::timing::FLASH_FADE_MS;
use shared::image::ImageProbe;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Document, Element, HtmlDocument, HtmlElement, HtmlFormElement, HtmlImageElement,
    HtmlInputElement, Window,
};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Origin of the current page, e.g. `https://tienda.example.com`.
pub fn origin() -> Option<String> {
    window()?.location().origin().ok()
}

/// Read and URI-decode a cookie value.
pub fn read_cookie(name: &str) -> Option<String> {
    let html_doc: HtmlDocument = document()?.dyn_into().ok()?;
    let cookie_string = html_doc.cookie().ok()?;
    parse_cookie(&cookie_string, name).map(|raw| {
        js_sys::decode_uri_component(&raw)
            .ok()
            .and_then(|decoded| decoded.as_string())
            .unwrap_or(raw)
    })
}

/// Find `name` in a `document.cookie` string.
pub fn parse_cookie(cookie_string: &str, name: &str) -> Option<String> {
    cookie_string.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key.trim() == name).then(|| value.trim().to_string())
    })
}

/// Navigate away from the current page.
pub fn redirect(path: &str) {
    if let Some(window) = window()
        && let Err(err) = window.location().set_href(path)
    {
        log::error!("redirect to {path} failed: {err:?}");
    }
}

/// Reload the current page.
pub fn reload() {
    if let Some(window) = window()
        && let Err(err) = window.location().reload()
    {
        log::error!("reload failed: {err:?}");
    }
}

/// Blocking confirmation prompt; a missing window counts as declined.
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Set `overflow` on the body element.
pub fn set_body_overflow(value: &str) {
    if let Some(body) = document().and_then(|doc| doc.body())
        && let Err(err) = body.style().set_property("overflow", value)
    {
        log::warn!("could not update body overflow: {err:?}");
    }
}

/// Text content of an inline `<script type="application/json">` block.
pub fn read_json_script(id: &str) -> Option<String> {
    element_by_id(id)?.text_content()
}

/// Ask the browser to load `url` as an image, off screen.
pub async fn probe_image(url: &str) -> ImageProbe {
    let Ok(image) = HtmlImageElement::new() else {
        return ImageProbe::Failed;
    };
    let promise = Promise::new(&mut |resolve, reject| {
        image.set_onload(Some(&resolve));
        image.set_onerror(Some(&reject));
    });
    image.set_src(url);

    let outcome = JsFuture::from(promise).await;
    image.set_onload(None);
    image.set_onerror(None);
    match outcome {
        Ok(_) => ImageProbe::Loaded,
        Err(_) => ImageProbe::Failed,
    }
}

/// Build a hidden form with `fields` and submit it with POST.
pub fn submit_hidden_form(action: &str, fields: &[(&str, String)]) -> Result<(), JsValue> {
    let document = document().ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;

    let form: HtmlFormElement = document.create_element("form")?.dyn_into()?;
    form.set_method("POST");
    form.set_action(action);
    form.style().set_property("display", "none")?;

    for (name, value) in fields {
        let input: HtmlInputElement = document.create_element("input")?.dyn_into()?;
        input.set_type("hidden");
        input.set_name(name);
        input.set_value(value);
        form.append_child(&input)?;
    }

    body.append_child(&form)?;
    form.submit()
}

/// Fade out and remove server-rendered `.notification` elements present at
/// load, after `lifetime_ms`.
pub fn schedule_flash_dismissal(lifetime_ms: u32) {
    let Some(document) = document() else {
        return;
    };
    let Ok(nodes) = document.query_selector_all(".notification") else {
        return;
    };

    for index in 0..nodes.length() {
        let Some(element) = nodes
            .item(index)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };
        Timeout::new(lifetime_ms, move || {
            // The element may already be gone if something else removed it.
            if !element.is_connected() {
                return;
            }
            let style = element.style();
            let _ = style.set_property("transition", "opacity 0.5s ease");
            let _ = style.set_property("opacity", "0");
            Timeout::new(FLASH_FADE_MS, move || element.remove()).forget();
        })
        .forget();
    }
}
