//! 实时通知模块
//!
//! 订单/评分变更的进程内发布/订阅扇出

pub mod hub;

pub use hub::{NotificationHub, TopicSubscription};
