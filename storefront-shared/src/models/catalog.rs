use serde::{Deserialize, Serialize};

use super::product::ProductCard;

/// Message shown when the server confirms a deletion without saying anything.
pub const DEFAULT_DELETE_SUCCESS: &str = "Producto eliminado";

/// Message shown when the server rejects a deletion without an explanation.
pub const DEFAULT_DELETE_FAILURE: &str = "Error desconocido del servidor.";

/// Body of the delete request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteProductRequest {
    /// Identifier of the product to delete.
    pub id: u64,
}

/// Body returned by the delete endpoint, on success or failure.
///
/// Older server builds answer with `ok` rather than `success`; both are honoured.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteProductResponse {
    #[serde(default)]
    pub success: Option<bool>,

    #[serde(default)]
    pub ok: Option<bool>,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub error: Option<String>,
}

impl DeleteProductResponse {
    /// Resolve a parsed body together with the HTTP status into a user-facing
    /// outcome. Callers must not fabricate a body for an unreadable response.
    ///
    /// # Errors
    /// Returns the most specific failure message available when the status is
    /// not ok or the body carries an explicit `false` flag.
    pub fn into_outcome(self, status_ok: bool) -> Result<String, String> {
        let flagged_failure = self.success == Some(false) || self.ok == Some(false);
        if status_ok && !flagged_failure {
            return Ok(self
                .message
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| DEFAULT_DELETE_SUCCESS.to_string()));
        }

        Err(self
            .error
            .filter(|error| !error.is_empty())
            .or(self.message.filter(|message| !message.is_empty()))
            .unwrap_or_else(|| DEFAULT_DELETE_FAILURE.to_string()))
    }
}

/// Fields of the hidden form submitted to the server-rendered edit route.
#[derive(Debug, Clone, PartialEq)]
pub struct EditProductForm {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category_id: u64,
    pub image: String,
}

impl EditProductForm {
    /// Form field names and values in submission order, without the CSRF field.
    #[must_use]
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("id", self.id.to_string()),
            ("titulo", self.title.clone()),
            ("precio", self.price.to_string()),
            ("descripcion", self.description.clone()),
            ("categoria", self.category_id.to_string()),
            ("imagen1", self.image.clone()),
        ]
    }
}

impl From<&ProductCard> for EditProductForm {
    fn from(card: &ProductCard) -> Self {
        Self {
            id: card.id,
            title: card.title.clone(),
            price: card.price,
            description: card.description.clone(),
            category_id: card.category_id,
            image: card.image.clone(),
        }
    }
}
