//! 订单生命周期引擎
//!
//! 订单和评分的唯一写入路径：状态机校验、持久化编排、推送扇出、
//! 设备通知。读取接口直接走仓储层。

pub mod service;

#[cfg(test)]
mod tests;

pub use service::OrderService;
