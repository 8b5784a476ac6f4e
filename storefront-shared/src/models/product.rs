use serde::{Deserialize, Deserializer, Serialize};

/// A product category as delivered by the catalog API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Canonical category identifier, used when submitting product forms.
    pub id: u64,

    /// Display name shown on cards and in the filter selector.
    pub name: String,
}

impl Category {
    /// Categories offered when the catalog API delivers none.
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        [
            (1, "Ropa"),
            (2, "Electrónicos"),
            (3, "Muebles"),
            (4, "Zapatos"),
            (5, "Otros"),
        ]
        .into_iter()
        .map(|(id, name)| Self {
            id,
            name: name.to_string(),
        })
        .collect()
    }
}

/// A product exactly as the catalog API serializes it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: u64,

    /// Product title.
    pub title: String,

    /// Price in USD. Accepts a JSON number or a decimal string.
    #[serde(deserialize_with = "deserialize_price")]
    pub price: f64,

    /// Long-form description.
    #[serde(default)]
    pub description: String,

    /// Category the product belongs to.
    pub category: Category,

    /// Image URLs, the first one is the main image.
    #[serde(default)]
    pub images: Vec<String>,
}

/// Page payload embedded by the server alongside the product grid.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CatalogPayload {
    /// Products in server order.
    #[serde(default, alias = "productos")]
    pub products: Vec<Product>,

    /// Categories available for filtering and editing.
    #[serde(default, alias = "categorias")]
    pub categories: Vec<Category>,
}

impl CatalogPayload {
    /// Parse the embedded JSON payload.
    ///
    /// # Errors
    /// Returns the underlying [`serde_json::Error`] when the payload is malformed.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Build the card view models, preserving server order.
    #[must_use]
    pub fn cards(&self) -> Vec<ProductCard> {
        self.products.iter().map(ProductCard::from).collect()
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
}

/// Client-side view model of a rendered product card.
///
/// Built once from a [`Product`]; every interaction (view, edit, delete,
/// filter, sort) reads from this record rather than from markup attributes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductCard {
    pub id: u64,
    pub title: String,
    pub price: f64,
    /// Category display name.
    pub category: String,
    /// Canonical category identifier, required by the edit flow.
    pub category_id: u64,
    pub description: String,
    /// Main image URL, empty when the product has none.
    pub image: String,
}

impl ProductCard {
    /// Price formatted with two decimals, as shown on cards.
    #[must_use]
    pub fn price_label(&self) -> String {
        format!("${:.2}", self.price)
    }
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            price: product.price,
            category: product.category.name.clone(),
            category_id: product.category.id,
            description: product.description.clone(),
            image: product.images.first().cloned().unwrap_or_default(),
        }
    }
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Number(f64),
        Text(String),
    }

    match RawPrice::deserialize(deserializer)? {
        RawPrice::Number(value) => Ok(value),
        RawPrice::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|err| serde::de::Error::custom(format!("invalid price {text:?}: {err}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRODUCT_JSON: &str = r#"{
        "id": 7,
        "title": "Classic Red Jogger",
        "price": 98,
        "description": "Comfortable joggers",
        "category": {"id": 1, "name": "Clothes", "image": "https://i.imgur.com/QkIa5tT.jpeg"},
        "images": ["https://i.imgur.com/9LFjwpI.jpeg", "https://i.imgur.com/vzrTgUR.jpeg"]
    }"#;

    #[test]
    fn test_product_deserialization() {
        let product: Product = serde_json::from_str(PRODUCT_JSON).unwrap();
        assert_eq!(product.id, 7);
        assert!((product.price - 98.0).abs() < f64::EPSILON);
        assert_eq!(product.category.name, "Clothes");
        assert_eq!(product.images.len(), 2);
    }

    #[test]
    fn test_price_from_decimal_string() {
        let json = r#"{"id":1,"title":"Mug","price":"12.50","category":{"id":3,"name":"Muebles"}}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!((product.price - 12.5).abs() < f64::EPSILON);
        assert!(product.images.is_empty());
        assert!(product.description.is_empty());
    }

    #[test]
    fn test_price_rejects_garbage() {
        let json = r#"{"id":1,"title":"Mug","price":"cheap","category":{"id":3,"name":"Muebles"}}"#;
        let err = serde_json::from_str::<Product>(json).unwrap_err();
        assert!(err.to_string().contains("invalid price"));
    }

    #[test]
    fn test_card_from_product() {
        let product: Product = serde_json::from_str(PRODUCT_JSON).unwrap();
        let card = ProductCard::from(&product);

        assert_eq!(card.id, 7);
        assert_eq!(card.category, "Clothes");
        assert_eq!(card.category_id, 1);
        assert_eq!(card.image, "https://i.imgur.com/9LFjwpI.jpeg");
        assert_eq!(card.price_label(), "$98.00");
    }

    #[test]
    fn test_payload_spanish_keys() {
        let raw = format!(r#"{{"productos":[{PRODUCT_JSON}],"categorias":[{{"id":1,"name":"Clothes"}}]}}"#);
        let payload = CatalogPayload::from_json(&raw).unwrap();

        assert_eq!(payload.products.len(), 1);
        assert_eq!(payload.cards()[0].title, "Classic Red Jogger");
        assert_eq!(payload.category_choices().len(), 1);
    }

    #[test]
    fn test_payload_falls_back_to_default_categories() {
        let payload = CatalogPayload::from_json("{}").unwrap();
        let choices = payload.category_choices();

        assert!(payload.cards().is_empty());
        assert_eq!(choices.len(), 5);
        assert_eq!(choices[0].name, "Ropa");
        assert_eq!(choices[4].id, 5);
    }
}
