//! # Configuration
//!
//! Constants shared by every storefront component: endpoint paths, storage
//! keys and UI timings.

pub mod endpoints;
pub mod timing;

/// Local-storage key holding the session token.
pub const AUTH_TOKEN_KEY: &str = "authToken";

/// Cookie carrying the CSRF token issued by the backend.
pub const CSRF_COOKIE_NAME: &str = "csrftoken";

/// Header the backend expects the CSRF token in.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Form field name the backend expects the CSRF token in.
pub const CSRF_FORM_FIELD: &str = "csrfmiddlewaretoken";
