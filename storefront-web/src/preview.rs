use shared::image::{ImageProbe, has_image_extension, validate_image_url};
use shared::modal::ModalState;
use shared::notification::{NotificationLevel, NotificationQueue};
use yewdux::Dispatch;

use crate::browser;
use crate::models::app_state::{NotificationStore, schedule_dismissal};

/// How strictly a preview URL is checked before the load probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewCheck {
    /// A parseable http(s) URL.
    Url,
    /// Also require a known image extension, as typed product form URLs do.
    UrlWithExtension,
}

/// Why a preview was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewError {
    Invalid,
    LoadFailed,
}

impl PreviewError {
    pub const fn translation_key(self) -> &'static str {
        match self {
            Self::Invalid => "image.invalid",
            Self::LoadFailed => "image.load_failed",
        }
    }
}

/// Translated text for each [`PreviewError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewMessages {
    pub invalid: String,
    pub load_failed: String,
}

impl PreviewMessages {
    pub fn for_error(&self, error: PreviewError) -> String {
        match error {
            PreviewError::Invalid => self.invalid.clone(),
            PreviewError::LoadFailed => self.load_failed.clone(),
        }
    }
}

pub type PreviewResult = Result<String, PreviewError>;

/// Refuse a URL without touching the network.
pub fn precheck(raw: &str, check: PreviewCheck) -> PreviewResult {
    if check == PreviewCheck::UrlWithExtension && !has_image_extension(raw) {
        return Err(PreviewError::Invalid);
    }
    validate_image_url(raw)
        .map(|url| url.to_string())
        .map_err(|err| {
            log::debug!("refusing preview url {raw:?}: {err}");
            PreviewError::Invalid
        })
}

/// Validate `raw` and wait for the browser to load it. Only a URL returned in
/// `Ok` may be shown in the preview modal.
pub async fn load_preview(raw: &str, check: PreviewCheck) -> PreviewResult {
    let url = precheck(raw, check)?;
    let probe = browser::probe_image(&url).await;
    finish_probe(url, probe)
}

/// Turn the browser's answer for a prechecked URL into a preview result.
pub fn finish_probe(url: String, probe: ImageProbe) -> PreviewResult {
    match probe {
        ImageProbe::Loaded => Ok(url),
        ImageProbe::Failed => {
            log::warn!("preview image failed to load: {url}");
            Err(PreviewError::LoadFailed)
        }
    }
}

/// Open the preview modal for a URL that loaded. Failures leave it untouched.
pub fn open_loaded_preview(result: PreviewResult, modals: &mut ModalState) {
    if let Ok(url) = result {
        modals.open_preview(url);
    }
}

/// Queue the error notification for a failed attempt and return its id.
pub fn queue_preview_failure(
    result: &PreviewResult,
    queue: &mut NotificationQueue,
    messages: &PreviewMessages,
    lifetime_ms: u32,
) -> Option<u64> {
    let error = *result.as_ref().err()?;
    Some(queue.push_with_lifetime(
        messages.for_error(error),
        NotificationLevel::Error,
        lifetime_ms,
    ))
}

/// Show the error notification for a failed attempt, if any.
pub fn notify_preview_failure(
    dispatch: &Dispatch<NotificationStore>,
    result: &PreviewResult,
    messages: &PreviewMessages,
    lifetime_ms: u32,
) {
    let mut queued = None;
    dispatch.reduce_mut(|store| {
        queued = queue_preview_failure(result, &mut store.queue, messages, lifetime_ms);
    });
    if let Some(id) = queued {
        schedule_dismissal(dispatch, id, lifetime_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precheck_accepts_http_urls() {
        assert_eq!(
            precheck("https://cdn.example.com/a.png", PreviewCheck::Url),
            Ok("https://cdn.example.com/a.png".to_string())
        );
        assert!(precheck("http://cdn.example.com/b.jpg", PreviewCheck::UrlWithExtension).is_ok());
    }

    #[test]
    fn test_precheck_refuses_bad_urls() {
        assert_eq!(precheck("", PreviewCheck::Url), Err(PreviewError::Invalid));
        assert_eq!(precheck("not a url", PreviewCheck::Url), Err(PreviewError::Invalid));
        assert_eq!(
            precheck("ftp://example.com/a.png", PreviewCheck::Url),
            Err(PreviewError::Invalid)
        );
    }

    #[test]
    fn test_error_keys() {
        assert_eq!(PreviewError::Invalid.translation_key(), "image.invalid");
        assert_eq!(PreviewError::LoadFailed.translation_key(), "image.load_failed");
    }

    fn messages() -> PreviewMessages {
        PreviewMessages {
            invalid: "URL inválida".to_string(),
            load_failed: "No se pudo cargar".to_string(),
        }
    }

    #[test]
    fn test_failed_load_keeps_modal_closed_and_warns() {
        let url = precheck("https://cdn.example.com/missing.png", PreviewCheck::Url).unwrap();
        let result = finish_probe(url, ImageProbe::Failed);
        let mut modals = ModalState::default();
        let mut queue = NotificationQueue::default();

        open_loaded_preview(result.clone(), &mut modals);
        let id = queue_preview_failure(&result, &mut queue, &messages(), 5_000);

        assert_eq!(modals.preview_src(), None);
        assert!(!modals.scroll_locked());
        assert!(id.is_some());
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].level, NotificationLevel::Error);
        assert_eq!(queue.items()[0].message, "No se pudo cargar");
    }

    #[test]
    fn test_loaded_image_opens_modal_without_notification() {
        let result = finish_probe("https://cdn.example.com/a.png".to_string(), ImageProbe::Loaded);
        let mut modals = ModalState::default();
        let mut queue = NotificationQueue::default();

        open_loaded_preview(result.clone(), &mut modals);

        assert_eq!(queue_preview_failure(&result, &mut queue, &messages(), 5_000), None);
        assert_eq!(modals.preview_src(), Some("https://cdn.example.com/a.png"));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_refused_url_uses_invalid_message() {
        let result = precheck("imagen.png", PreviewCheck::Url);
        let mut queue = NotificationQueue::default();
        queue_preview_failure(&result, &mut queue, &messages(), 5_000);
        assert_eq!(queue.items()[0].message, "URL inválida");
    }

    #[test]
    fn test_extension_rule_only_for_typed_urls() {
        let url = "https://cdn.example.com/render?id=4";
        assert!(precheck(url, PreviewCheck::Url).is_ok());
        assert_eq!(
            precheck(url, PreviewCheck::UrlWithExtension),
            Err(PreviewError::Invalid)
        );
        assert!(precheck("https://cdn.example.com/a.WEBP", PreviewCheck::UrlWithExtension).is_ok());
    }
}
