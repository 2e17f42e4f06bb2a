//! Order request/response models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{orders, products};
use crate::models::common::json_list;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(OrderStatus::Pending),
            "confirmed" => Some(OrderStatus::Confirmed),
            "shipped" => Some(OrderStatus::Shipped),
            "delivered" => Some(OrderStatus::Delivered),
            "cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Refunded => "refunded",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(PaymentStatus::Pending),
            "paid" => Some(PaymentStatus::Paid),
            "failed" => Some(PaymentStatus::Failed),
            "refunded" => Some(PaymentStatus::Refunded),
            _ => None,
        }
    }
}

/// Customer contact details attached to an order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// Product fields shown alongside an order
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderProduct {
    pub id: i32,
    pub title: String,
    pub price: f64,
    pub images: Vec<String>,
}

impl From<products::Model> for OrderProduct {
    fn from(product: products::Model) -> Self {
        Self {
            id: product.id,
            images: json_list(&product.images),
            title: product.title,
            price: product.price,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: i32,
    pub order_id: String,
    pub seller_id: i32,
    pub product_id: i32,
    /// Populated on listings; None if the product has since been removed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<OrderProduct>,
    pub quantity: i32,
    pub price: f64,
    pub total_amount: f64,
    pub status: String,
    pub customer_info: CustomerInfo,
    pub payment_method: String,
    pub payment_status: String,
    pub tracking_number: String,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OrderResponse {
    pub fn from_model(order: orders::Model, product: Option<products::Model>) -> Self {
        Self {
            id: order.id,
            order_id: order.order_number,
            seller_id: order.seller_id,
            product_id: order.product_id,
            product: product.map(OrderProduct::from),
            quantity: order.quantity,
            price: order.price,
            total_amount: order.total_amount,
            status: order.status,
            customer_info: CustomerInfo {
                name: order.customer_name,
                email: order.customer_email,
                phone: order.customer_phone,
                address: order.customer_address,
            },
            payment_method: order.payment_method,
            payment_status: order.payment_status,
            tracking_number: order.tracking_number,
            notes: order.notes,
            created_at: order.created_at.with_timezone(&Utc),
            updated_at: order.updated_at.with_timezone(&Utc),
        }
    }
}

/// Fields a seller may change on an order
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderRequest {
    pub status: Option<String>,
    pub payment_status: Option<String>,
    pub tracking_number: Option<String>,
    pub notes: Option<String>,
}

impl UpdateOrderRequest {
    /// Validate enum-valued fields
    pub fn validate(&self) -> Result<(Option<OrderStatus>, Option<PaymentStatus>), String> {
        let status = match &self.status {
            Some(s) => Some(OrderStatus::from_str(s).ok_or_else(|| {
                format!(
                    "Invalid status: '{}'. Must be one of: pending, confirmed, shipped, delivered, cancelled",
                    s
                )
            })?),
            None => None,
        };

        let payment_status = match &self.payment_status {
            Some(s) => Some(PaymentStatus::from_str(s).ok_or_else(|| {
                format!(
                    "Invalid payment status: '{}'. Must be one of: pending, paid, failed, refunded",
                    s
                )
            })?),
            None => None,
        };

        Ok((status, payment_status))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderUpdatedResponse {
    pub message: String,
    pub order: OrderResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_round_trip() {
        for status in ["pending", "confirmed", "shipped", "delivered", "cancelled"] {
            assert_eq!(OrderStatus::from_str(status).unwrap().as_str(), status);
        }
        assert!(OrderStatus::from_str("lost").is_none());
    }

    #[test]
    fn test_update_validation() {
        let request = UpdateOrderRequest {
            status: Some("shipped".to_string()),
            payment_status: Some("paid".to_string()),
            ..Default::default()
        };
        let (status, payment) = request.validate().unwrap();
        assert_eq!(status, Some(OrderStatus::Shipped));
        assert_eq!(payment, Some(PaymentStatus::Paid));

        let request = UpdateOrderRequest {
            status: Some("teleported".to_string()),
            ..Default::default()
        };
        assert!(request.validate().unwrap_err().contains("Invalid status"));

        let request = UpdateOrderRequest {
            payment_status: Some("maybe".to_string()),
            ..Default::default()
        };
        assert!(request.validate().unwrap_err().contains("Invalid payment status"));
    }
}
