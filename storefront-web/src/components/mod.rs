pub(crate) mod auth_home;
pub(crate) mod auth_nav;
pub(crate) mod catalog_toolbar;
pub(crate) mod form_errors;
pub(crate) mod form_progress;
pub(crate) mod loading;
pub(crate) mod modal;
pub(crate) mod notification_list;
pub(crate) mod product_card;

// Re-export components for convenience
pub use auth_home::AuthHome;
pub use auth_nav::AuthNav;
pub use catalog_toolbar::CatalogToolbar;
pub use form_errors::FormErrors;
pub use form_progress::FormProgress;
pub use modal::{ImagePreviewModal, ProductDetailModal};
pub use notification_list::NotificationList;
pub use product_card::ProductCardView;
