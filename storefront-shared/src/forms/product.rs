//! Client-side feedback for the product form: completion progress, character
//! counters and the same field rules the server applies.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::image::validate_image_url;
use crate::models::{Category, FieldErrors};

pub const TITLE_MAX_CHARS: usize = 100;
pub const TITLE_MIN_CHARS: usize = 3;
pub const DESCRIPTION_MAX_CHARS: usize = 500;
pub const DESCRIPTION_MIN_CHARS: usize = 10;
pub const PRICE_MAX: f64 = 999_999.0;

/// A product form field that failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProductFieldError {
    #[error("Este campo es obligatorio")]
    Required,

    #[error("El título debe tener al menos 3 caracteres")]
    TitleTooShort,

    #[error("El título no puede superar los 100 caracteres")]
    TitleTooLong,

    #[error("La descripción debe tener al menos 10 caracteres")]
    DescriptionTooShort,

    #[error("La descripción no puede superar los 500 caracteres")]
    DescriptionTooLong,

    #[error("Ingresa un precio válido")]
    PriceNotANumber,

    #[error("El precio debe ser mayor a 0")]
    PriceNotPositive,

    #[error("El precio no puede ser mayor a $999,999")]
    PriceTooHigh,

    #[error("Ingresa una URL válida")]
    InvalidImageUrl,
}

/// Raw values of the product form inputs. Field names on the wire are the
/// ones the server form posts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFormInput {
    #[serde(default, rename = "titulo", alias = "title")]
    pub title: String,
    #[serde(default, rename = "precio", alias = "price")]
    pub price: String,
    #[serde(default, rename = "descripcion", alias = "description")]
    pub description: String,
    /// Selected category identifier.
    #[serde(default, rename = "categoria", alias = "category")]
    pub category: String,
    #[serde(default, rename = "imagen1", alias = "image")]
    pub image: String,
}

/// Server-rendered state of the product form page: initial values, the
/// category choices and any errors from a rejected submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProductFormPayload {
    #[serde(default)]
    pub values: ProductFormInput,
    #[serde(default, alias = "categorias")]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub errors: FieldErrors,
    /// Present when editing an existing product.
    #[serde(default)]
    pub product_id: Option<u64>,
}

impl ProductFormPayload {
    /// Parse the embedded JSON payload.
    ///
    /// # Errors
    /// Returns the underlying [`serde_json::Error`] when the payload is malformed.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Categories to offer, falling back to [`Category::defaults`].
    #[must_use]
    pub fn category_choices(&self) -> Vec<Category> {
        if self.categories.is_empty() {
            Category::defaults()
        } else {
            self.categories.clone()
        }
    }

    #[must_use]
    pub const fn is_edit(&self) -> bool {
        self.product_id.is_some()
    }
}

/// Errors for every invalid field, keyed by input name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFormErrors {
    pub title: Option<ProductFieldError>,
    pub price: Option<ProductFieldError>,
    pub description: Option<ProductFieldError>,
    pub category: Option<ProductFieldError>,
    pub image: Option<ProductFieldError>,
}

impl ProductFormErrors {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.price.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.image.is_none()
    }
}

impl ProductFormInput {
    /// Values of the required inputs, in form order.
    #[must_use]
    pub fn required_values(&self) -> [&str; 5] {
        [
            self.title.as_str(),
            self.price.as_str(),
            self.description.as_str(),
            self.category.as_str(),
            self.image.as_str(),
        ]
    }

    /// Completion of the required fields, see [`progress_percent`].
    #[must_use]
    pub fn progress(&self) -> u8 {
        progress_percent(&self.required_values())
    }

    #[must_use]
    pub fn validate(&self) -> ProductFormErrors {
        ProductFormErrors {
            title: validate_title(&self.title).err(),
            price: validate_price(&self.price).err(),
            description: validate_description(&self.description).err(),
            category: required(&self.category).err(),
            image: validate_image(&self.image).err(),
        }
    }
}

fn required(value: &str) -> Result<&str, ProductFieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ProductFieldError::Required)
    } else {
        Ok(trimmed)
    }
}

/// # Errors
/// Returns a [`ProductFieldError`] when the title is blank or out of bounds.
pub fn validate_title(title: &str) -> Result<(), ProductFieldError> {
    let length = required(title)?.chars().count();
    if length < TITLE_MIN_CHARS {
        return Err(ProductFieldError::TitleTooShort);
    }
    if length > TITLE_MAX_CHARS {
        return Err(ProductFieldError::TitleTooLong);
    }
    Ok(())
}

/// # Errors
/// Returns a [`ProductFieldError`] when the description is blank or out of bounds.
pub fn validate_description(description: &str) -> Result<(), ProductFieldError> {
    let length = required(description)?.chars().count();
    if length < DESCRIPTION_MIN_CHARS {
        return Err(ProductFieldError::DescriptionTooShort);
    }
    if length > DESCRIPTION_MAX_CHARS {
        return Err(ProductFieldError::DescriptionTooLong);
    }
    Ok(())
}

/// # Errors
/// Returns a [`ProductFieldError`] unless `0 < price <= 999999`.
pub fn validate_price(price: &str) -> Result<f64, ProductFieldError> {
    let value: f64 = required(price)?
        .parse()
        .map_err(|_| ProductFieldError::PriceNotANumber)?;
    if !value.is_finite() {
        return Err(ProductFieldError::PriceNotANumber);
    }
    if value <= 0.0 {
        return Err(ProductFieldError::PriceNotPositive);
    }
    if value > PRICE_MAX {
        return Err(ProductFieldError::PriceTooHigh);
    }
    Ok(value)
}

/// # Errors
/// Returns a [`ProductFieldError`] when the image URL is blank or invalid.
pub fn validate_image(image: &str) -> Result<(), ProductFieldError> {
    required(image)?;
    validate_image_url(image)
        .map(|_| ())
        .map_err(|_| ProductFieldError::InvalidImageUrl)
}

/// Percentage of non-blank values, rounded to the nearest integer. Zero when
/// there are no required fields.
#[must_use]
pub fn progress_percent(values: &[&str]) -> u8 {
    let total = values.len();
    if total == 0 {
        return 0;
    }
    let filled = values.iter().filter(|value| !value.trim().is_empty()).count();
    // Round half up: (filled * 100 + total / 2) / total, never above 100.
    let percent = (filled * 100 + total / 2) / total;
    u8::try_from(percent).unwrap_or(100)
}

/// Character usage of a length-limited input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharCount {
    pub used: usize,
    pub max: usize,
}

impl CharCount {
    #[must_use]
    pub fn of(text: &str, max: usize) -> Self {
        Self {
            used: text.chars().count(),
            max,
        }
    }

    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.max.saturating_sub(self.used)
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.used > self.max
    }

    /// Counter text, e.g. `42/100`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}/{}", self.used, self.max)
    }
}
