//! Form lifecycles and client-side validation.

pub mod auth;
pub mod product;

pub use auth::{AuthFormKind, AuthFormState, FormError, field_error_items};
pub use product::{
    CharCount, ProductFieldError, ProductFormErrors, ProductFormInput, ProductFormPayload,
};
