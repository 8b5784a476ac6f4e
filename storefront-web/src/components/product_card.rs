use i18nrs::yew::use_translation;
use shared::deletion::DeletionPhase;
use shared::models::ProductCard;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct ProductCardProps {
    pub card: ProductCard,
    #[prop_or_default]
    pub phase: DeletionPhase,
    pub on_view: Callback<ProductCard>,
    pub on_edit: Callback<ProductCard>,
    pub on_delete: Callback<u64>,
    /// Clicking the image previews it full size.
    pub on_preview: Callback<String>,
}

#[function_component(ProductCardView)]
pub fn product_card_view(props: &ProductCardProps) -> Html {
    let (i18n, ..) = use_translation();
    let card = &props.card;
    let presentation = props.phase.presentation();

    let on_view = {
        let on_view = props.on_view.clone();
        let card = card.clone();
        Callback::from(move |_: MouseEvent| on_view.emit(card.clone()))
    };
    let on_edit = {
        let on_edit = props.on_edit.clone();
        let card = card.clone();
        Callback::from(move |_: MouseEvent| on_edit.emit(card.clone()))
    };
    let on_delete = {
        let on_delete = props.on_delete.clone();
        let id = card.id;
        Callback::from(move |_: MouseEvent| on_delete.emit(id))
    };
    let on_preview = {
        let on_preview = props.on_preview.clone();
        let image = card.image.clone();
        Callback::from(move |_: MouseEvent| on_preview.emit(image.clone()))
    };

    html! {
        <div
            class="product-card"
            data-id={card.id.to_string()}
            data-category={card.category.clone()}
            style={presentation.style()}
        >
            <div class="product-image">
                if card.image.is_empty() {
                    <div class="product-image-placeholder">{i18n.t("product.no_image")}</div>
                } else {
                    <img src={card.image.clone()} alt={card.title.clone()} loading="lazy" onclick={on_preview} />
                }
            </div>
            <div class="product-info">
                <h3 class="product-title">{&card.title}</h3>
                <span class="product-category">{&card.category}</span>
                <p class="product-price">{card.price_label()}</p>
            </div>
            <div class="product-actions">
                <button type="button" class="btn btn-view" onclick={on_view}>
                    <Icon icon_id={IconId::HeroiconsOutlineEye} class="h-4 w-4" />
                    {i18n.t("product.view")}
                </button>
                <button type="button" class="btn btn-edit" onclick={on_edit}>
                    <Icon icon_id={IconId::HeroiconsOutlinePencilSquare} class="h-4 w-4" />
                    {i18n.t("product.edit")}
                </button>
                <button
                    type="button"
                    class="btn btn-delete"
                    disabled={presentation.button_disabled}
                    onclick={on_delete}
                >
                    <Icon icon_id={IconId::HeroiconsOutlineTrash} class="h-4 w-4" />
                    {i18n.t("product.delete")}
                </button>
            </div>
        </div>
    }
}
