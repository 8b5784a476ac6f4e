use std::rc::Rc;

use gloo_timers::callback::Timeout;
use i18nrs::yew::use_translation;
use shared::catalog::{CatalogView, SortOrder};
use shared::config::CSRF_FORM_FIELD;
use shared::config::endpoints;
use shared::config::timing::CARD_REMOVAL_MS;
use shared::deletion::{DeletionPhase, DeletionTracker};
use shared::modal::{ModalKind, ModalState};
use shared::models::{CatalogPayload, Category, EditProductForm, ProductCard};
use shared::notification::NotificationLevel;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::use_dispatch;

use crate::api::StorefrontClient;
use crate::browser;
use crate::components::{CatalogToolbar, ImagePreviewModal, ProductCardView, ProductDetailModal};
use crate::config::FrontendConfig;
use crate::hooks::{use_body_overflow, use_escape_key};
use crate::models::app_state::{NotificationStore, notify};
use crate::preview::{
    PreviewCheck, PreviewError, PreviewMessages, PreviewResult, load_preview, notify_preview_failure,
    open_loaded_preview,
};

/// Everything the product grid renders from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogState {
    pub cards: Vec<ProductCard>,
    pub view: CatalogView,
    pub deletions: DeletionTracker,
    pub modals: ModalState,
}

impl CatalogState {
    pub fn new(cards: Vec<ProductCard>) -> Self {
        Self {
            cards,
            ..Self::default()
        }
    }
}

pub enum CatalogAction {
    Filter(String),
    Search(String),
    Sort(SortOrder),
    BeginDelete(u64),
    ConfirmDelete(u64),
    RollBackDelete(u64),
    FinishDelete(u64),
    PreviewFinished(PreviewResult),
    OpenDetail(ProductCard),
    CloseModal(ModalKind),
    CloseModals,
}

impl Reducible for CatalogState {
    type Action = CatalogAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CatalogAction::Filter(category) => next.view = next.view.with_category(category),
            CatalogAction::Search(query) => next.view = next.view.with_query(query),
            CatalogAction::Sort(sort) => next.view = next.view.with_sort(sort),
            CatalogAction::BeginDelete(id) => {
                next.deletions.begin(id);
            }
            CatalogAction::ConfirmDelete(id) => next.deletions.confirm(id),
            CatalogAction::RollBackDelete(id) => next.deletions.roll_back(id),
            CatalogAction::FinishDelete(id) => {
                if !next.deletions.finish(id, &mut next.cards) {
                    return self;
                }
            }
            CatalogAction::PreviewFinished(result) => open_loaded_preview(result, &mut next.modals),
            CatalogAction::OpenDetail(card) => next.modals.open_detail(card),
            CatalogAction::CloseModal(kind) => next.modals.close(kind),
            CatalogAction::CloseModals => next.modals.close_all(),
        }
        next.into()
    }
}

#[derive(Properties, PartialEq)]
pub struct ProductListProps {
    pub payload: CatalogPayload,
}

/// The product grid with its toolbar, per-card actions and modals.
#[function_component(ProductList)]
pub fn product_list(props: &ProductListProps) -> Html {
    let (i18n, ..) = use_translation();
    let notifications = use_dispatch::<NotificationStore>();
    let lifetime_ms = use_memo((), |_| FrontendConfig::new().notification_ms);
    let categories: Rc<Vec<Category>> =
        use_memo(props.payload.clone(), |payload| payload.category_choices());
    let state = {
        let payload = props.payload.clone();
        use_reducer(move || CatalogState::new(payload.cards()))
    };

    use_body_overflow(state.modals.body_overflow());
    {
        let state = state.clone();
        use_escape_key(Callback::from(move |()| {
            state.dispatch(CatalogAction::CloseModals);
        }));
    }

    let on_category = {
        let state = state.clone();
        Callback::from(move |category: String| state.dispatch(CatalogAction::Filter(category)))
    };
    let on_query = {
        let state = state.clone();
        Callback::from(move |query: String| state.dispatch(CatalogAction::Search(query)))
    };
    let on_sort = {
        let state = state.clone();
        Callback::from(move |sort: SortOrder| state.dispatch(CatalogAction::Sort(sort)))
    };
    let on_refresh = Callback::from(|()| browser::reload());

    let on_view = {
        let state = state.clone();
        Callback::from(move |card: ProductCard| state.dispatch(CatalogAction::OpenDetail(card)))
    };

    let on_edit = Callback::from(|card: ProductCard| {
        let mut fields = EditProductForm::from(&card).fields();
        fields.push((
            CSRF_FORM_FIELD,
            StorefrontClient::csrf_token().unwrap_or_default(),
        ));
        if let Err(err) = browser::submit_hidden_form(endpoints::EDIT_PRODUCT, &fields) {
            log::error!("could not submit edit form for product {}: {err:?}", card.id);
        }
    });

    let on_delete = {
        let state = state.clone();
        let notifications = notifications.clone();
        let confirm_message = i18n.t("product.confirm_delete");
        let lifetime_ms = *lifetime_ms;
        Callback::from(move |id: u64| {
            if state.deletions.phase(id) != DeletionPhase::Idle {
                return;
            }
            if !browser::confirm(&confirm_message) {
                return;
            }
            state.dispatch(CatalogAction::BeginDelete(id));

            let state = state.clone();
            let notifications = notifications.clone();
            spawn_local(async move {
                match StorefrontClient::shared().delete_product(id).await {
                    Ok(message) => {
                        notify(&notifications, message, NotificationLevel::Success, lifetime_ms);
                        state.dispatch(CatalogAction::ConfirmDelete(id));
                        Timeout::new(CARD_REMOVAL_MS, move || {
                            state.dispatch(CatalogAction::FinishDelete(id));
                        })
                        .forget();
                    }
                    Err(err) => {
                        log::error!("deleting product {id} failed: {err}");
                        notify(
                            &notifications,
                            err.user_message(),
                            NotificationLevel::Error,
                            lifetime_ms,
                        );
                        state.dispatch(CatalogAction::RollBackDelete(id));
                    }
                }
            });
        })
    };

    let on_preview = {
        let state = state.clone();
        let notifications = notifications.clone();
        let messages = PreviewMessages {
            invalid: i18n.t(PreviewError::Invalid.translation_key()),
            load_failed: i18n.t(PreviewError::LoadFailed.translation_key()),
        };
        let lifetime_ms = *lifetime_ms;
        Callback::from(move |src: String| {
            let state = state.clone();
            let notifications = notifications.clone();
            let messages = messages.clone();
            spawn_local(async move {
                let result = load_preview(&src, PreviewCheck::Url).await;
                notify_preview_failure(&notifications, &result, &messages, lifetime_ms);
                state.dispatch(CatalogAction::PreviewFinished(result));
            });
        })
    };

    let close_preview = {
        let state = state.clone();
        Callback::from(move |()| state.dispatch(CatalogAction::CloseModal(ModalKind::ImagePreview)))
    };
    let close_detail = {
        let state = state.clone();
        Callback::from(move |()| state.dispatch(CatalogAction::CloseModal(ModalKind::ProductDetail)))
    };

    let visible = state.view.visible(&state.cards);
    let counts = state.view.counts(&state.cards);

    html! {
        <section class="product-list">
            <CatalogToolbar
                categories={(*categories).clone()}
                view={state.view.clone()}
                {counts}
                {on_category}
                {on_query}
                {on_sort}
                {on_refresh}
            />
            if visible.is_empty() {
                <p class="catalog-empty">{i18n.t("catalog.empty")}</p>
            }
            <div class="products-grid">
                { for visible.into_iter().map(|card| html! {
                    <ProductCardView
                        key={card.id}
                        card={card.clone()}
                        phase={state.deletions.phase(card.id)}
                        on_view={on_view.clone()}
                        on_edit={on_edit.clone()}
                        on_delete={on_delete.clone()}
                        on_preview={on_preview.clone()}
                    />
                }) }
            </div>
            <ImagePreviewModal
                src={state.modals.preview_src().map(str::to_string)}
                on_close={close_preview}
            />
            <ProductDetailModal card={state.modals.detail().cloned()} on_close={close_detail} />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use shared::image::ImageProbe;

    use super::*;
    use crate::preview::finish_probe;

    fn card(id: u64, title: &str, price: f64, category: &str) -> ProductCard {
        ProductCard {
            id,
            title: title.to_string(),
            price,
            category: category.to_string(),
            category_id: 1,
            description: String::new(),
            image: format!("https://cdn.example.com/{id}.png"),
        }
    }

    fn state() -> Rc<CatalogState> {
        Rc::new(CatalogState::new(vec![
            card(1, "Silla", 45.0, "Muebles"),
            card(2, "Camisa", 20.0, "Ropa"),
            card(3, "Mesa", 120.0, "Muebles"),
        ]))
    }

    #[test]
    fn test_successful_delete_removes_exactly_one_card() {
        let before = state();
        let total = before.view.counts(&before.cards).total;

        let next = before
            .reduce(CatalogAction::BeginDelete(2))
            .reduce(CatalogAction::ConfirmDelete(2));
        assert_eq!(next.deletions.phase(2), DeletionPhase::Removing);
        assert_eq!(next.cards.len(), 3);

        let next = next.reduce(CatalogAction::FinishDelete(2));
        assert_eq!(next.view.counts(&next.cards).total, total - 1);
        assert!(next.cards.iter().all(|card| card.id != 2));
        assert_eq!(next.deletions.phase(2), DeletionPhase::Idle);
    }

    #[test]
    fn test_failed_delete_restores_card() {
        let next = state()
            .reduce(CatalogAction::BeginDelete(1))
            .reduce(CatalogAction::RollBackDelete(1));
        let presentation = next.deletions.phase(1).presentation();
        assert_eq!(next.cards.len(), 3);
        assert!((presentation.opacity - 1.0).abs() < f32::EPSILON);
        assert!(presentation.interactive);
        assert!(!presentation.button_disabled);
    }

    #[test]
    fn test_finish_without_confirmation_keeps_state() {
        let before = state().reduce(CatalogAction::BeginDelete(3));
        let after = Rc::clone(&before).reduce(CatalogAction::FinishDelete(3));
        assert!(Rc::ptr_eq(&before, &after));
        assert_eq!(after.cards.len(), 3);
    }

    #[test]
    fn test_filter_and_search_combine() {
        let next = state()
            .reduce(CatalogAction::Filter("muebles".to_string()))
            .reduce(CatalogAction::Search("me".to_string()));
        let titles: Vec<&str> = next
            .view
            .visible(&next.cards)
            .iter()
            .map(|card| card.title.as_str())
            .collect();
        assert_eq!(titles, ["Mesa"]);
        assert_eq!(next.view.counts(&next.cards).visible, 1);
    }

    #[test]
    fn test_escape_closes_every_modal() {
        let next = state()
            .reduce(CatalogAction::PreviewFinished(Ok("https://cdn.example.com/1.png".into())))
            .reduce(CatalogAction::OpenDetail(card(1, "Silla", 45.0, "Muebles")));
        assert_eq!(next.modals.body_overflow(), "hidden");

        let next = next.reduce(CatalogAction::CloseModal(ModalKind::ImagePreview));
        assert!(next.modals.scroll_locked());

        let next = next.reduce(CatalogAction::CloseModals);
        assert!(!next.modals.scroll_locked());
        assert_eq!(next.modals.body_overflow(), "");
    }

    #[test]
    fn test_failed_preview_leaves_modal_closed() {
        let result = finish_probe("https://cdn.example.com/9.png".to_string(), ImageProbe::Failed);
        let next = state().reduce(CatalogAction::PreviewFinished(result));
        assert_eq!(next.modals.preview_src(), None);
        assert_eq!(next.modals.body_overflow(), "");
    }
}
