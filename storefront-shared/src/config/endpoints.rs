//! Backend routes consumed by the client, relative to the site origin.

/// Profile of the token's owner; doubles as the session probe.
pub const PROFILE: &str = "/accounts/api/profile/";

/// Invalidates the session token.
pub const LOGOUT: &str = "/accounts/api/logout/";

/// Creates an account and returns its token.
pub const REGISTER: &str = "/accounts/api/register/";

/// Exchanges credentials for a token.
pub const LOGIN: &str = "/accounts/api/login/";

/// Username availability, queried with `?username=`.
pub const CHECK_USERNAME: &str = "/accounts/api/check-username/";

/// Deletes a product; takes a JSON `{id}` body.
pub const DELETE_PRODUCT: &str = "/eliminar_producto/";

/// Server-rendered edit route, posted to as a form.
pub const EDIT_PRODUCT: &str = "/editar_producto/";

/// Pages the client navigates to.
pub mod pages {
    /// Site root, where logout lands.
    pub const HOME: &str = "/";

    /// Login page.
    pub const LOGIN: &str = "/accounts/login/";

    /// Signup page.
    pub const SIGNUP: &str = "/accounts/signup/";

    /// Product grid.
    pub const PRODUCTS: &str = "/productos/";

    /// Empty product form.
    pub const NEW_PRODUCT: &str = "/producto/nuevo/";
}
