//! 通知中心核心实现
//!
//! # 架构
//!
//! ```text
//! OrderService ──▶ publish() ──▶ broadcast::Sender<PushEvent>
//!                                       │
//!                    ┌──────────────────┼──────────────────┐
//!                    ▼                  ▼                  ▼
//!              仪表盘订阅          顾客订单页订阅        桥接层订阅
//!              (orders 频道)      (order-{id} 频道)    (WS/TCP 推送)
//! ```
//!
//! 发布发生在写库成功之后；发布失败（无在线订阅者/通道滞后）只记录
//! 日志，永不回滚已提交的写入。轮询读取接口是订阅端的兜底手段。
//!
//! 每个事件在发布时由 [`ResourceVersions`] 按频道递增版本号，
//! 订阅端据此丢弃迟到的旧事件。

use std::sync::Arc;

use shared::message::{PushEvent, Topic};
use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;

use crate::core::state::ResourceVersions;

/// 默认通道容量
const DEFAULT_CAPACITY: usize = 1024;

/// 通知中心 - 推送事件的发布/订阅枢纽
#[derive(Debug, Clone)]
pub struct NotificationHub {
    /// 服务器到订阅者的广播通道
    tx: broadcast::Sender<PushEvent>,
    /// 按频道递增的版本号
    versions: Arc<ResourceVersions>,
    /// 关闭信号令牌
    shutdown_token: CancellationToken,
}

impl NotificationHub {
    /// 创建默认容量的通知中心
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// 创建指定容量的通知中心
    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self {
            tx,
            versions: Arc::new(ResourceVersions::new()),
            shutdown_token: CancellationToken::new(),
        }
    }

    /// 发布事件 (服务器 -> 所有订阅者)
    ///
    /// 版本号在此按频道分配。发送失败只说明当前没有在线订阅者，
    /// 记录日志后返回已定版的事件，调用方不处理失败。
    pub fn publish(&self, event: PushEvent) -> PushEvent {
        let version = self.versions.increment(&event.topic.channel());
        let event = event.with_version(version);

        if let Err(e) = self.tx.send(event.clone()) {
            tracing::debug!(
                channel = %event.topic,
                event = %event.event,
                "No live subscribers for push event: {}",
                e
            );
        }

        event
    }

    /// 订阅全部推送事件
    pub fn subscribe(&self) -> broadcast::Receiver<PushEvent> {
        self.tx.subscribe()
    }

    /// 订阅单个频道 (预过滤)
    pub fn subscribe_topic(&self, topic: Topic) -> TopicSubscription {
        TopicSubscription {
            topic,
            rx: self.tx.subscribe(),
        }
    }

    /// 当前订阅者数量
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }

    /// 指定频道的当前版本号
    pub fn channel_version(&self, topic: &Topic) -> u64 {
        self.versions.get(&topic.channel())
    }

    /// 获取关闭令牌 (用于桥接层监控关闭信号)
    pub fn shutdown_token(&self) -> &CancellationToken {
        &self.shutdown_token
    }

    /// 优雅关闭通知中心
    pub fn shutdown(&self) {
        tracing::info!("Shutting down notification hub");
        self.shutdown_token.cancel();
    }
}

impl Default for NotificationHub {
    fn default() -> Self {
        Self::new()
    }
}

/// 单频道订阅 — 只透出目标频道的事件
pub struct TopicSubscription {
    topic: Topic,
    rx: broadcast::Receiver<PushEvent>,
}

impl TopicSubscription {
    /// 下一个本频道事件；通知中心关闭后返回 None
    pub async fn recv(&mut self) -> Option<PushEvent> {
        loop {
            match self.rx.recv().await {
                Ok(event) if event.topic == self.topic => return Some(event),
                Ok(_) => continue,
                Err(broadcast::error::RecvError::Lagged(missed)) => {
                    tracing::warn!(missed, channel = %self.topic, "Push subscriber lagged");
                    continue;
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::message::EventName;
    use shared::models::{Order, OrderStatus};

    fn sample_order(id: &str) -> Order {
        Order {
            id: id.to_string(),
            status: OrderStatus::Pending,
            items: Vec::new(),
            rating: None,
            created_at: "2025-01-01T12:00:00Z".to_string(),
            updated_at: "2025-01-01T12:00:00Z".to_string(),
        }
    }

    #[tokio::test]
    async fn test_publish_reaches_subscriber() {
        let hub = NotificationHub::with_capacity(16);
        let mut rx = hub.subscribe();

        let order = sample_order("order:a");
        hub.publish(PushEvent::order(
            Topic::Orders,
            EventName::OrderCreated,
            &order,
        ));

        let event = rx.recv().await.unwrap();
        assert_eq!(event.topic, Topic::Orders);
        assert_eq!(event.event, EventName::OrderCreated);
    }

    #[tokio::test]
    async fn test_versions_are_monotonic_per_channel() {
        let hub = NotificationHub::with_capacity(16);
        let order = sample_order("order:a");

        let first = hub.publish(PushEvent::order(
            Topic::Orders,
            EventName::OrderCreated,
            &order,
        ));
        let second = hub.publish(PushEvent::order(
            Topic::Orders,
            EventName::OrderUpdated,
            &order,
        ));
        // a different channel keeps its own counter
        let scoped = hub.publish(PushEvent::order(
            Topic::Order("order:a".to_string()),
            EventName::OrderUpdated,
            &order,
        ));

        assert_eq!(first.version, 1);
        assert_eq!(second.version, 2);
        assert_eq!(scoped.version, 1);
        assert_eq!(hub.channel_version(&Topic::Orders), 2);
    }

    #[tokio::test]
    async fn test_topic_subscription_filters() {
        let hub = NotificationHub::with_capacity(16);
        let mut scoped = hub.subscribe_topic(Topic::Order("order:a".to_string()));

        let order = sample_order("order:a");
        hub.publish(PushEvent::order(
            Topic::Orders,
            EventName::OrderUpdated,
            &order,
        ));
        hub.publish(PushEvent::order(
            Topic::Order("order:b".to_string()),
            EventName::OrderUpdated,
            &order,
        ));
        hub.publish(PushEvent::order(
            Topic::Order("order:a".to_string()),
            EventName::OrderUpdated,
            &order,
        ));

        let event = scoped.recv().await.unwrap();
        assert_eq!(event.topic, Topic::Order("order:a".to_string()));
    }

    #[tokio::test]
    async fn test_publish_without_subscribers_is_not_fatal() {
        let hub = NotificationHub::with_capacity(16);
        let order = sample_order("order:a");
        // no receiver attached — publish still assigns a version
        let event = hub.publish(PushEvent::order(
            Topic::Orders,
            EventName::OrderCreated,
            &order,
        ));
        assert_eq!(event.version, 1);
    }
}
