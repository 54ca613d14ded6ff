//! 推送事件契约
//!
//! 服务端在每次订单/评分变更成功落库后，通过通知通道推送这些事件。
//! 仪表盘订阅全局 `orders` 频道，顾客订单页订阅自己订单的频道，
//! 收到事件后用事件携带的完整实体替换本地状态。

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod payload;
pub use payload::{OrderPayload, RatingPayload};

/// Notification topic — a named pub/sub channel
///
/// Typed instead of ad hoc `order-{id}` string construction, so the
/// publish contract can be tested in isolation and channel names cannot
/// collide by accident.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topic {
    /// Global orders channel (staff dashboard)
    Orders,
    /// Single-order channel (customer order view), keyed by order id
    Order(String),
}

impl Topic {
    /// Channel name on the wire
    pub fn channel(&self) -> String {
        match self {
            Topic::Orders => "orders".to_string(),
            Topic::Order(id) => format!("order-{id}"),
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.channel())
    }
}

/// Push event names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventName {
    OrderCreated,
    OrderUpdated,
    RatingCreated,
    RatingUpdated,
}

impl EventName {
    /// Wire form ("order-created", ...)
    pub fn as_str(self) -> &'static str {
        match self {
            EventName::OrderCreated => "order-created",
            EventName::OrderUpdated => "order-updated",
            EventName::RatingCreated => "rating-created",
            EventName::RatingUpdated => "rating-updated",
        }
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single push event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushEvent {
    /// Event id (用于消息追踪)
    pub id: Uuid,
    /// Channel the event is published on
    pub topic: Topic,
    pub event: EventName,
    /// Monotonic per-channel version, assigned at publish time.
    /// Consumers drop events older than what they already hold.
    pub version: u64,
    /// Event payload (`{"order": …}` or `{"rating": …}`)
    pub payload: serde_json::Value,
}

impl PushEvent {
    /// Create an unversioned event (version is assigned by the hub)
    pub fn new(topic: Topic, event: EventName, payload: serde_json::Value) -> Self {
        Self {
            id: Uuid::new_v4(),
            topic,
            event,
            version: 0,
            payload,
        }
    }

    /// Event carrying a full order
    pub fn order(topic: Topic, event: EventName, order: &crate::models::Order) -> Self {
        let payload = serde_json::to_value(OrderPayload {
            order: order.clone(),
        })
        .expect("Failed to serialize order payload");
        Self::new(topic, event, payload)
    }

    /// Event carrying a full rating
    pub fn rating(topic: Topic, event: EventName, rating: &crate::models::Rating) -> Self {
        let payload = serde_json::to_value(RatingPayload {
            rating: rating.clone(),
        })
        .expect("Failed to serialize rating payload");
        Self::new(topic, event, payload)
    }

    /// 设置版本号 (发布时由通知中心调用)
    pub fn with_version(mut self, version: u64) -> Self {
        self.version = version;
        self
    }

    /// 解析载荷为指定类型
    pub fn parse_payload<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.payload.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Order, OrderItem, OrderStatus};

    fn sample_order() -> Order {
        Order {
            id: "order:abc123".to_string(),
            status: OrderStatus::Pending,
            items: vec![OrderItem {
                menu_item_id: 1,
                quantity: 2,
                name: "Margherita Pizza".to_string(),
                price: 12.99,
                notes: String::new(),
                image: None,
            }],
            rating: None,
            created_at: "2025-01-01T12:00:00Z".to_string(),
            updated_at: "2025-01-01T12:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_channel_names() {
        assert_eq!(Topic::Orders.channel(), "orders");
        assert_eq!(
            Topic::Order("order:abc123".to_string()).channel(),
            "order-order:abc123"
        );
    }

    #[test]
    fn test_event_names_are_kebab_case() {
        assert_eq!(EventName::OrderCreated.as_str(), "order-created");
        assert_eq!(
            serde_json::to_string(&EventName::RatingUpdated).unwrap(),
            "\"rating-updated\""
        );
    }

    #[test]
    fn test_order_event_payload_roundtrip() {
        let order = sample_order();
        let event = PushEvent::order(Topic::Orders, EventName::OrderCreated, &order);

        assert_eq!(event.event, EventName::OrderCreated);
        assert!(!event.id.is_nil());

        let parsed: OrderPayload = event.parse_payload().unwrap();
        assert_eq!(parsed.order.id, order.id);
        assert_eq!(parsed.order.items.len(), 1);
    }

    #[test]
    fn test_version_assignment() {
        let order = sample_order();
        let event =
            PushEvent::order(Topic::Orders, EventName::OrderCreated, &order).with_version(42);
        assert_eq!(event.version, 42);
    }
}
