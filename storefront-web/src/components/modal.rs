use i18nrs::yew::use_translation;
use shared::models::ProductCard;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

/// Close callback that only fires for clicks on the backdrop itself.
fn backdrop_click(on_close: &Callback<()>) -> Callback<MouseEvent> {
    let on_close = on_close.clone();
    Callback::from(move |event: MouseEvent| {
        if event.target() == event.current_target() {
            on_close.emit(());
        }
    })
}

fn close_button(on_close: &Callback<()>, label: String) -> Html {
    let on_close = on_close.clone();
    let onclick = Callback::from(move |_: MouseEvent| on_close.emit(()));
    html! {
        <button type="button" class="modal-close" aria-label={label} {onclick}>
            <Icon icon_id={IconId::HeroiconsSolidXMark} class="h-5 w-5" />
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct ImagePreviewModalProps {
    /// Image to show; the modal is hidden while `None`.
    pub src: Option<String>,
    pub on_close: Callback<()>,
}

#[function_component(ImagePreviewModal)]
pub fn image_preview_modal(props: &ImagePreviewModalProps) -> Html {
    let (i18n, ..) = use_translation();
    let Some(src) = props.src.clone() else {
        return html! {};
    };

    html! {
        <div
            id="imagePreviewModal"
            class="modal"
            style="display: flex;"
            role="dialog"
            aria-modal="true"
            onclick={backdrop_click(&props.on_close)}
        >
            <div class="modal-content">
                {close_button(&props.on_close, i18n.t("modal.close"))}
                <img id="previewImage" {src} alt={i18n.t("modal.preview_title")} />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProductDetailModalProps {
    pub card: Option<ProductCard>,
    pub on_close: Callback<()>,
}

#[function_component(ProductDetailModal)]
pub fn product_detail_modal(props: &ProductDetailModalProps) -> Html {
    let (i18n, ..) = use_translation();
    let Some(card) = &props.card else {
        return html! {};
    };

    html! {
        <div
            id="productDetailModal"
            class="modal"
            style="display: flex;"
            role="dialog"
            aria-modal="true"
            onclick={backdrop_click(&props.on_close)}
        >
            <div class="modal-content product-detail">
                {close_button(&props.on_close, i18n.t("modal.close"))}
                if !card.image.is_empty() {
                    <img class="detail-image" src={card.image.clone()} alt={card.title.clone()} />
                }
                <h2 class="detail-title">{&card.title}</h2>
                <dl class="detail-fields">
                    <dt>{i18n.t("product.price")}</dt>
                    <dd class="detail-price">{card.price_label()}</dd>
                    <dt>{i18n.t("product.category")}</dt>
                    <dd class="detail-category">{&card.category}</dd>
                    <dt>{i18n.t("product.description")}</dt>
                    <dd class="detail-description">{&card.description}</dd>
                </dl>
            </div>
        </div>
    }
}
