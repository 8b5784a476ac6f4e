pub(crate) mod auth_controller;
pub(crate) mod product_list;

pub use auth_controller::AuthController;
pub use product_list::ProductList;
