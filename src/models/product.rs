//! Product catalog request/response models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::products;
use crate::models::common::{json_list, required};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductCategory {
    Clothing,
    Electronics,
    Home,
    Beauty,
    Books,
    Sports,
    Other,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 7] = [
        ProductCategory::Clothing,
        ProductCategory::Electronics,
        ProductCategory::Home,
        ProductCategory::Beauty,
        ProductCategory::Books,
        ProductCategory::Sports,
        ProductCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Clothing => "clothing",
            ProductCategory::Electronics => "electronics",
            ProductCategory::Home => "home",
            ProductCategory::Beauty => "beauty",
            ProductCategory::Books => "books",
            ProductCategory::Sports => "sports",
            ProductCategory::Other => "other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

fn parse_category(value: &str) -> Result<ProductCategory, String> {
    ProductCategory::from_str(value).ok_or_else(|| {
        format!(
            "Invalid category: '{}'. Must be one of: clothing, electronics, home, beauty, books, sports, other",
            value
        )
    })
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryOptions {
    #[serde(rename = "isCOD")]
    pub is_cod: bool,
    pub is_returnable: bool,
    pub delivery_time: String,
    pub shipping_cost: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryUpdate {
    #[serde(rename = "isCOD")]
    pub is_cod: Option<bool>,
    pub is_returnable: Option<bool>,
    pub delivery_time: Option<String>,
    pub shipping_cost: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Rating {
    pub average: f64,
    pub count: i32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: i32,
    pub seller_id: i32,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub original_price: f64,
    pub category: String,
    pub subcategory: String,
    pub size: String,
    pub material: String,
    pub stock: i32,
    pub images: Vec<String>,
    pub colors: Vec<String>,
    pub tags: Vec<String>,
    pub units_sold: i32,
    pub is_active: bool,
    pub is_featured: bool,
    pub delivery: DeliveryOptions,
    pub rating: Rating,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<products::Model> for ProductResponse {
    fn from(p: products::Model) -> Self {
        Self {
            id: p.id,
            seller_id: p.seller_id,
            images: json_list(&p.images),
            colors: json_list(&p.colors),
            tags: json_list(&p.tags),
            title: p.title,
            description: p.description,
            price: p.price,
            original_price: p.original_price,
            category: p.category,
            subcategory: p.subcategory,
            size: p.size,
            material: p.material,
            stock: p.stock,
            units_sold: p.units_sold,
            is_active: p.is_active,
            is_featured: p.is_featured,
            delivery: DeliveryOptions {
                is_cod: p.is_cod,
                is_returnable: p.is_returnable,
                delivery_time: p.delivery_time,
                shipping_cost: p.shipping_cost,
            },
            rating: Rating {
                average: p.rating_average,
                count: p.rating_count,
            },
            created_at: p.created_at.with_timezone(&Utc),
            updated_at: p.updated_at.with_timezone(&Utc),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub original_price: Option<f64>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub size: Option<String>,
    pub material: Option<String>,
    pub stock: Option<i32>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub is_active: Option<bool>,
    pub is_featured: Option<bool>,
    pub delivery: Option<DeliveryUpdate>,
}

/// Required fields of a new product after validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedProduct {
    pub title: String,
    pub price: f64,
    pub category: ProductCategory,
}

impl CreateProductRequest {
    pub fn validate(&self) -> Result<ValidatedProduct, String> {
        let (Some(title), Some(price), Some(category)) =
            (required(&self.title), self.price, required(&self.category))
        else {
            return Err("Title, price, and category are required".to_string());
        };

        if !price.is_finite() || price < 0.0 {
            return Err("Price must be a non-negative number".to_string());
        }
        if self.stock.is_some_and(|s| s < 0) {
            return Err("Stock cannot be negative".to_string());
        }

        Ok(ValidatedProduct {
            title: title.to_string(),
            price,
            category: parse_category(category)?,
        })
    }
}

/// Partial product update; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub original_price: Option<f64>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub size: Option<String>,
    pub material: Option<String>,
    pub stock: Option<i32>,
    pub images: Option<Vec<String>>,
    pub colors: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub is_active: Option<bool>,
    pub is_featured: Option<bool>,
    pub delivery: Option<DeliveryUpdate>,
}

impl UpdateProductRequest {
    pub fn validate(&self) -> Result<Option<ProductCategory>, String> {
        if self.title.as_ref().is_some_and(|t| t.trim().is_empty()) {
            return Err("Title cannot be empty".to_string());
        }
        if self.price.is_some_and(|p| !p.is_finite() || p < 0.0) {
            return Err("Price must be a non-negative number".to_string());
        }
        if self.stock.is_some_and(|s| s < 0) {
            return Err("Stock cannot be negative".to_string());
        }
        self.category.as_deref().map(parse_category).transpose()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductMutationResponse {
    pub message: String,
    pub product: ProductResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_request() -> CreateProductRequest {
        CreateProductRequest {
            title: Some("Linen shirt".to_string()),
            price: Some(1299.0),
            category: Some("clothing".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_validation_valid() {
        let validated = create_request().validate().unwrap();
        assert_eq!(validated.title, "Linen shirt");
        assert_eq!(validated.category, ProductCategory::Clothing);
    }

    #[test]
    fn test_create_validation_missing_fields() {
        let request = CreateProductRequest {
            title: Some("   ".to_string()),
            ..create_request()
        };
        assert_eq!(
            request.validate().unwrap_err(),
            "Title, price, and category are required"
        );

        let request = CreateProductRequest {
            price: None,
            ..create_request()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_validation_unknown_category() {
        let request = CreateProductRequest {
            category: Some("groceries".to_string()),
            ..create_request()
        };
        assert!(request.validate().unwrap_err().contains("Invalid category"));
    }

    #[test]
    fn test_create_validation_negative_values() {
        let request = CreateProductRequest {
            price: Some(-1.0),
            ..create_request()
        };
        assert!(request.validate().is_err());

        let request = CreateProductRequest {
            stock: Some(-3),
            ..create_request()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_update_validation() {
        assert_eq!(UpdateProductRequest::default().validate(), Ok(None));

        let request = UpdateProductRequest {
            category: Some("books".to_string()),
            ..Default::default()
        };
        assert_eq!(request.validate(), Ok(Some(ProductCategory::Books)));

        let request = UpdateProductRequest {
            title: Some(String::new()),
            ..Default::default()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_delivery_cod_field_name() {
        let delivery: DeliveryUpdate =
            serde_json::from_str(r#"{"isCOD": true, "deliveryTime": "1-2 days"}"#).unwrap();
        assert_eq!(delivery.is_cod, Some(true));
        assert_eq!(delivery.delivery_time.as_deref(), Some("1-2 days"));
    }
}
