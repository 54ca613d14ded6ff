//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`menu`] - 菜单接口
//! - [`orders`] - 订单接口
//! - [`ratings`] - 评分接口
//! - [`device`] - 状态设备接口
//! - [`seed`] - 开发用菜单种子

pub mod convert;

pub mod device;
pub mod health;
pub mod menu;
pub mod orders;
pub mod ratings;
pub mod seed;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
