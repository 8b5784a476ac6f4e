use i18nrs::yew::use_translation;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FormProgressProps {
    pub percent: u8,
}

#[function_component(FormProgress)]
pub fn form_progress(props: &FormProgressProps) -> Html {
    let (i18n, ..) = use_translation();
    html! {
        <div class="progress-container">
            <div class="progress-bar" style={format!("width: {}%;", props.percent)}></div>
            <span class="progress-text">
                {format!("{}% {}", props.percent, i18n.t("product_form.progress"))}
            </span>
        </div>
    }
}
