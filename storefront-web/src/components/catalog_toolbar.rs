use i18nrs::yew::use_translation;
use shared::catalog::{CatalogCounts, CatalogView, SortOrder};
use shared::config::endpoints::pages;
use shared::models::Category;
use strum::IntoEnumIterator;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct CatalogToolbarProps {
    pub categories: Vec<Category>,
    pub view: CatalogView,
    pub counts: CatalogCounts,
    pub on_category: Callback<String>,
    pub on_query: Callback<String>,
    pub on_sort: Callback<SortOrder>,
    pub on_refresh: Callback<()>,
}

const fn sort_label_key(order: SortOrder) -> &'static str {
    match order {
        SortOrder::Server => "catalog.sort.server",
        SortOrder::Title => "catalog.sort.title",
        SortOrder::PriceLow => "catalog.sort.price_low",
        SortOrder::PriceHigh => "catalog.sort.price_high",
    }
}

/// Filter, search and sort controls with the visible/total count.
#[function_component(CatalogToolbar)]
pub fn catalog_toolbar(props: &CatalogToolbarProps) -> Html {
    let (i18n, ..) = use_translation();

    let on_category = {
        let on_category = props.on_category.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                on_category.emit(select.value());
            }
        })
    };
    let on_query = {
        let on_query = props.on_query.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                on_query.emit(input.value());
            }
        })
    };
    let on_sort = {
        let on_sort = props.on_sort.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                on_sort.emit(SortOrder::from_selector(&select.value()));
            }
        })
    };
    let on_refresh = {
        let on_refresh = props.on_refresh.clone();
        Callback::from(move |_: MouseEvent| on_refresh.emit(()))
    };

    html! {
        <div class="catalog-toolbar">
            <label class="toolbar-field">
                <span>{i18n.t("catalog.filter.label")}</span>
                <select id="category-filter" onchange={on_category}>
                    <option value="" selected={props.view.category.is_empty()}>
                        {i18n.t("catalog.filter.all")}
                    </option>
                    { for props.categories.iter().map(|category| html! {
                        <option
                            key={category.id}
                            value={category.name.clone()}
                            selected={props.view.category == category.name}
                        >
                            {&category.name}
                        </option>
                    }) }
                </select>
            </label>
            <label class="toolbar-field search-field">
                <Icon icon_id={IconId::HeroiconsOutlineMagnifyingGlass} class="h-4 w-4" />
                <input
                    id="search-input"
                    type="search"
                    placeholder={i18n.t("catalog.search.placeholder")}
                    value={props.view.query.clone()}
                    oninput={on_query}
                />
            </label>
            <label class="toolbar-field">
                <span>{i18n.t("catalog.sort.label")}</span>
                <select id="sort-select" onchange={on_sort}>
                    { for SortOrder::iter().map(|order| html! {
                        <option value={order.as_ref().to_string()} selected={props.view.sort == order}>
                            {i18n.t(sort_label_key(order))}
                        </option>
                    }) }
                </select>
            </label>
            <span id="product-count" class="product-count">
                {format!(
                    "{} {} {} {} {}",
                    i18n.t("catalog.count.showing"),
                    props.counts.visible,
                    i18n.t("catalog.count.of"),
                    props.counts.total,
                    i18n.t("catalog.count.products"),
                )}
            </span>
            <div class="toolbar-actions">
                <button type="button" class="btn btn-secondary" onclick={on_refresh}>
                    <Icon icon_id={IconId::HeroiconsOutlineArrowPath} class="h-4 w-4" />
                    {i18n.t("catalog.refresh")}
                </button>
                <a href={pages::NEW_PRODUCT} class="btn btn-primary">
                    <Icon icon_id={IconId::HeroiconsOutlinePlus} class="h-4 w-4" />
                    {i18n.t("catalog.new")}
                </a>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_sort_order_has_a_label() {
        for order in SortOrder::iter() {
            assert!(sort_label_key(order).starts_with("catalog.sort."));
        }
    }
}
