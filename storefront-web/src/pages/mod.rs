pub(crate) mod login;
pub(crate) mod product_form;
pub(crate) mod signup;

pub use login::LoginPage;
pub use product_form::ProductFormPage;
pub use signup::SignupPage;

use web_sys::HtmlInputElement;
use yew::{Callback, InputEvent, TargetCast, UseStateHandle};

/// `oninput` handler that mirrors an input's value into `handle`.
pub(crate) fn bind_input(handle: &UseStateHandle<String>) -> Callback<InputEvent> {
    let handle = handle.clone();
    Callback::from(move |event: InputEvent| {
        if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
            handle.set(input.value());
        }
    })
}
