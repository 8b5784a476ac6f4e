//! # Modals
//!
//! The page has two singleton modals: the image preview and the product
//! detail view. Body scrolling is locked exactly while at least one of them is
//! open, so every close path (close button, backdrop, Escape) goes through
//! this state and the lock can never be left behind.

use crate::models::ProductCard;

/// Which modal a close action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    ImagePreview,
    ProductDetail,
}

/// Open/closed state of both modals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModalState {
    preview_src: Option<String>,
    detail: Option<ProductCard>,
}

impl ModalState {
    /// Show the image preview. Only call with a URL that has loaded.
    pub fn open_preview(&mut self, src: impl Into<String>) {
        self.preview_src = Some(src.into());
    }

    /// Show the detail modal, replacing whatever card it showed before.
    pub fn open_detail(&mut self, card: ProductCard) {
        self.detail = Some(card);
    }

    pub fn close(&mut self, kind: ModalKind) {
        match kind {
            ModalKind::ImagePreview => self.preview_src = None,
            ModalKind::ProductDetail => self.detail = None,
        }
    }

    /// Escape closes both modals, whichever is open.
    pub fn close_all(&mut self) {
        self.preview_src = None;
        self.detail = None;
    }

    #[must_use]
    pub fn preview_src(&self) -> Option<&str> {
        self.preview_src.as_deref()
    }

    #[must_use]
    pub const fn detail(&self) -> Option<&ProductCard> {
        self.detail.as_ref()
    }

    #[must_use]
    pub const fn is_open(&self, kind: ModalKind) -> bool {
        match kind {
            ModalKind::ImagePreview => self.preview_src.is_some(),
            ModalKind::ProductDetail => self.detail.is_some(),
        }
    }

    /// Whether body scrolling must be suppressed.
    #[must_use]
    pub const fn scroll_locked(&self) -> bool {
        self.preview_src.is_some() || self.detail.is_some()
    }

    /// Value for the body's `overflow` style.
    #[must_use]
    pub const fn body_overflow(&self) -> &'static str {
        if self.scroll_locked() { "hidden" } else { "" }
    }
}
