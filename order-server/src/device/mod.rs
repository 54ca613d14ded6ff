//! 状态设备桥接
//!
//! 把订单状态变更转发给局域网内的物理状态指示器

pub mod client;

pub use client::DeviceClient;
