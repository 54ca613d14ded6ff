use std::sync::Arc;

use dashmap::DashMap;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::Config;
use crate::db::DbService;
use crate::device::DeviceClient;
use crate::message::NotificationHub;
use crate::orders::OrderService;

/// 资源版本管理器
///
/// 使用 DashMap 实现无锁并发的版本号管理。
/// 每个推送频道维护独立的版本号，支持原子递增。
///
/// # 使用场景
///
/// 通知中心发布事件时自动生成递增的版本号，
/// 订阅端据此丢弃迟到的旧事件，避免轮询结果被过期推送覆盖。
#[derive(Debug)]
pub struct ResourceVersions {
    versions: DashMap<String, u64>,
}

impl ResourceVersions {
    /// 创建空的版本管理器
    pub fn new() -> Self {
        Self {
            versions: DashMap::new(),
        }
    }

    /// 递增指定频道的版本号并返回新值
    ///
    /// 如果频道不存在，从 0 开始递增（返回 1）
    pub fn increment(&self, channel: &str) -> u64 {
        let mut entry = self.versions.entry(channel.to_string()).or_insert(0);
        *entry += 1;
        *entry
    }

    /// 获取指定频道的当前版本号
    ///
    /// 如果频道不存在，返回 0
    pub fn get(&self, channel: &str) -> u64 {
        self.versions.get(channel).map(|v| *v).unwrap_or(0)
    }
}

impl Default for ResourceVersions {
    fn default() -> Self {
        Self::new()
    }
}

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc 实现浅拷贝，所有权成本极低。
///
/// # 服务组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Surreal<Db> | 嵌入式数据库 |
/// | hub | NotificationHub | 通知中心 |
/// | device | Arc<DeviceClient> | 状态设备客户端 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库 (SurrealDB)
    pub db: Surreal<Db>,
    /// 通知中心
    pub hub: NotificationHub,
    /// 状态设备客户端 (显式注入，自带连接状态)
    pub device: Arc<DeviceClient>,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录结构 (确保目录存在)
    /// 2. 数据库 (work_dir/database/comanda.db)
    /// 3. 通知中心、设备客户端
    ///
    /// # Panics
    ///
    /// 数据库初始化失败时 panic
    pub async fn initialize(config: &Config) -> Self {
        config
            .ensure_work_dir_structure()
            .expect("Failed to create work directory structure");

        let db_path = config.database_dir().join("comanda.db");
        let db_service = DbService::new(&db_path.to_string_lossy())
            .await
            .expect("Failed to initialize database");

        Self::with_db(config, db_service.db)
    }

    /// 初始化内存数据库状态 (测试、演示)
    pub async fn initialize_in_memory(config: &Config) -> Self {
        let db_service = DbService::new_in_memory()
            .await
            .expect("Failed to initialize in-memory database");
        Self::with_db(config, db_service.db)
    }

    fn with_db(config: &Config, db: Surreal<Db>) -> Self {
        let hub = NotificationHub::with_capacity(config.bus_capacity);
        let device = Arc::new(DeviceClient::from_config(config));

        Self {
            config: config.clone(),
            db,
            hub,
            device,
        }
    }

    /// 启动后台任务
    ///
    /// 配置了设备地址时，启动时探测一次连通性
    pub fn start_background_tasks(&self) {
        if self.device.is_configured() {
            let device = self.device.clone();
            tokio::spawn(async move {
                device.probe().await;
            });
        }
    }

    /// 获取数据库实例
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    /// 构造订单生命周期服务 (唯一的订单/评分写入路径)
    pub fn order_service(&self) -> OrderService {
        OrderService::new(self.db.clone(), self.hub.clone(), self.device.clone())
    }
}
