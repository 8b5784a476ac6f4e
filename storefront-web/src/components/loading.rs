use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};

#[function_component(Loading)]
pub fn loading() -> Html {
    let (i18n, ..) = use_translation();
    html! {
        <span class="auth-loading" aria-busy="true">{i18n.t("app.loading")}</span>
    }
}
