//! Image URL checks run before the preview modal opens.
//!
//! A URL must parse as an absolute http(s) URL before the browser is asked to
//! load it; the preview only opens once that load succeeds.

use thiserror::Error;
use url::Url;

const IMAGE_EXTENSIONS: [&str; 5] = ["jpeg", "jpg", "gif", "png", "webp"];

/// Reasons an image URL is refused before any load is attempted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageUrlError {
    #[error("No image URL provided")]
    Empty,

    #[error("Malformed image URL: {0}")]
    Malformed(#[from] url::ParseError),

    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),
}

/// Parse and check an image URL.
///
/// # Errors
/// Returns an [`ImageUrlError`] when the input is blank, does not parse, or
/// uses a scheme other than http/https.
pub fn validate_image_url(raw: &str) -> Result<Url, ImageUrlError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ImageUrlError::Empty);
    }

    let url = Url::parse(trimmed)?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ImageUrlError::UnsupportedScheme(other.to_string())),
    }
}

/// Whether the URL path ends in a known image extension. Used by the product
/// form as a quick check before probing the image itself.
#[must_use]
pub fn has_image_extension(raw: &str) -> bool {
    let trimmed = raw.trim().to_lowercase();
    trimmed
        .rsplit_once('.')
        .is_some_and(|(_, ext)| IMAGE_EXTENSIONS.contains(&ext))
}

/// Result of asking the browser to load an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageProbe {
    Loaded,
    Failed,
}
