//! Order Model

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Rating;

/// Order status lifecycle
///
/// ```text
/// PENDING ──▶ ACCEPTED ──▶ READY
///    └──────▶ REJECTED
/// ```
///
/// REJECTED and READY are terminal: no outgoing edges, no path back to
/// PENDING, no skipping.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
    Ready,
}

impl OrderStatus {
    /// All known statuses, in lifecycle order
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Accepted,
        OrderStatus::Rejected,
        OrderStatus::Ready,
    ];

    /// Whether `self → target` is a legal lifecycle edge
    pub fn can_transition_to(self, target: OrderStatus) -> bool {
        matches!(
            (self, target),
            (OrderStatus::Pending, OrderStatus::Accepted)
                | (OrderStatus::Pending, OrderStatus::Rejected)
                | (OrderStatus::Accepted, OrderStatus::Ready)
        )
    }

    /// Terminal statuses have no outgoing edges
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Rejected | OrderStatus::Ready)
    }

    /// Parse the wire form ("PENDING", "ACCEPTED", "REJECTED", "READY")
    pub fn parse(s: &str) -> Option<OrderStatus> {
        match s {
            "PENDING" => Some(OrderStatus::Pending),
            "ACCEPTED" => Some(OrderStatus::Accepted),
            "REJECTED" => Some(OrderStatus::Rejected),
            "READY" => Some(OrderStatus::Ready),
            _ => None,
        }
    }

    /// Wire form
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Accepted => "ACCEPTED",
            OrderStatus::Rejected => "REJECTED",
            OrderStatus::Ready => "READY",
        }
    }

    /// Lower-case form pushed to the status-indicator device
    pub fn device_form(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Accepted => "accepted",
            OrderStatus::Rejected => "rejected",
            OrderStatus::Ready => "ready",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One ordered line — a menu item snapshot taken at order time, so
/// historical orders are unaffected by later menu changes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub menu_item_id: i64,
    pub quantity: i32,
    pub name: String,
    /// Unit price at order time, not current catalog price
    pub price: f64,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl OrderItem {
    /// Line total (unit price × quantity)
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
    pub created_at: String,
    pub updated_at: String,
}

impl Order {
    /// Order total (sum of line totals)
    pub fn total(&self) -> f64 {
        self.items.iter().map(OrderItem::line_total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_three_edges_are_legal() {
        let legal = [
            (OrderStatus::Pending, OrderStatus::Accepted),
            (OrderStatus::Pending, OrderStatus::Rejected),
            (OrderStatus::Accepted, OrderStatus::Ready),
        ];
        for from in OrderStatus::ALL {
            for to in OrderStatus::ALL {
                assert_eq!(
                    from.can_transition_to(to),
                    legal.contains(&(from, to)),
                    "unexpected verdict for {} -> {}",
                    from,
                    to
                );
            }
        }
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(OrderStatus::Rejected.is_terminal());
        assert!(OrderStatus::Ready.is_terminal());
        assert!(!OrderStatus::Pending.is_terminal());
        assert!(!OrderStatus::Accepted.is_terminal());

        // terminal = no outgoing edge at all
        for to in OrderStatus::ALL {
            assert!(!OrderStatus::Rejected.can_transition_to(to));
            assert!(!OrderStatus::Ready.can_transition_to(to));
        }
    }

    #[test]
    fn test_parse_roundtrip() {
        for status in OrderStatus::ALL {
            assert_eq!(OrderStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(OrderStatus::parse("COOKING"), None);
        assert_eq!(OrderStatus::parse("pending"), None);
    }

    #[test]
    fn test_wire_serialization_is_screaming_snake() {
        let json = serde_json::to_string(&OrderStatus::Pending).unwrap();
        assert_eq!(json, "\"PENDING\"");
    }

    #[test]
    fn test_order_total() {
        let order = Order {
            id: "order:abc".to_string(),
            status: OrderStatus::Pending,
            items: vec![
                OrderItem {
                    menu_item_id: 1,
                    quantity: 2,
                    name: "Margherita Pizza".to_string(),
                    price: 12.99,
                    notes: String::new(),
                    image: None,
                },
                OrderItem {
                    menu_item_id: 6,
                    quantity: 1,
                    name: "Chocolate Cake".to_string(),
                    price: 7.99,
                    notes: String::new(),
                    image: None,
                },
            ],
            rating: None,
            created_at: "2025-01-01T12:00:00Z".to_string(),
            updated_at: "2025-01-01T12:00:00Z".to_string(),
        };
        assert!((order.total() - 33.97).abs() < 1e-9);
    }

    #[test]
    fn test_order_json_is_camel_case() {
        let item = OrderItem {
            menu_item_id: 1,
            quantity: 2,
            name: "Margherita Pizza".to_string(),
            price: 12.99,
            notes: String::new(),
            image: None,
        };
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["menuItemId"], 1);
        assert_eq!(value["quantity"], 2);
    }
}
