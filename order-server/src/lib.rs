//! Comanda Order Server - 餐厅点餐系统服务端
//!
//! # 架构概述
//!
//! 本模块是 Order Server 的主入口，提供以下核心功能：
//!
//! - **订单生命周期** (`orders`): 状态机校验、持久化编排、推送扇出
//! - **通知中心** (`message`): 面向仪表盘/顾客视图的实时推送
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储
//! - **设备桥接** (`device`): 状态指示设备的尽力而为推送
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! order-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 数据库层 (模型 + 仓储)
//! ├── orders/        # 订单生命周期引擎
//! ├── message/       # 通知中心 (发布/订阅)
//! ├── device/        # 状态设备客户端
//! └── utils/         # 错误、日志
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod device;
pub mod message;
pub mod orders;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState, build_router};
pub use device::DeviceClient;
pub use message::NotificationHub;
pub use orders::OrderService;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境 (dotenv + 日志)
///
/// 必须在 [`Config::from_env`] 之前调用
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    init_logger();
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   ______
  / ____/___  ____ ___  ____ _____  ____/ /___ _
 / /   / __ \/ __ `__ \/ __ `/ __ \/ __  / __ `/
/ /___/ /_/ / / / / / / /_/ / / / / /_/ / /_/ /
\____/\____/_/ /_/ /_/\__,_/_/ /_/\__,_/\__,_/
    "#
    );
}
