pub mod auth;
pub mod catalog;
pub mod product;

pub use auth::{
    ApiErrorResponse, AuthResponse, FieldError, FieldErrors, LoginRequest, NON_FIELD_ERRORS,
    ProfileResponse, RegisterRequest, UserSummary, UsernameAvailability,
};
pub use catalog::{DeleteProductRequest, DeleteProductResponse, EditProductForm};
pub use product::{CatalogPayload, Category, Product, ProductCard};
