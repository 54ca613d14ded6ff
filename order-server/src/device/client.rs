//! 状态设备客户端
//!
//! 向物理状态指示器转发订单状态。推送是 fire-and-forget：失败只影响
//! 本地连接标志，永不回滚或阻塞已提交的订单变更。
//!
//! # 设备接口
//!
//! | 路径 | 方法 | 说明 | 超时 |
//! |------|------|------|------|
//! | /info | GET | 可达性探测 | ~3s |
//! | /update | POST `{orderId, status}` | 状态推送 (小写) | ~5s |
//!
//! PENDING 永不转发（设备没有"待接单"形态）。已成功转发过的
//! (订单, 状态) 组合会被跳过；该去重集合在探测成功（重连）时清空。

use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use dashmap::DashSet;
use shared::models::OrderStatus;

use crate::core::Config;

/// Injectable device client with its own connectivity state
#[derive(Debug)]
pub struct DeviceClient {
    http: reqwest::Client,
    /// Device address (host or host:port), runtime-configurable
    ip: RwLock<Option<String>>,
    /// Last known connectivity, shown in the UI
    connected: AtomicBool,
    /// "(order id):(status)" pairs already delivered — cleared on reconnect
    sent: DashSet<String>,
    probe_timeout: Duration,
    push_timeout: Duration,
}

impl DeviceClient {
    pub fn from_config(config: &Config) -> Self {
        let http = reqwest::Client::builder()
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http,
            ip: RwLock::new(config.device_ip.clone()),
            connected: AtomicBool::new(false),
            sent: DashSet::new(),
            probe_timeout: Duration::from_millis(config.device_probe_timeout_ms),
            push_timeout: Duration::from_millis(config.device_push_timeout_ms),
        }
    }

    /// Whether a device address is configured
    pub fn is_configured(&self) -> bool {
        self.ip().is_some()
    }

    /// Configured device address
    pub fn ip(&self) -> Option<String> {
        self.ip.read().expect("device ip lock poisoned").clone()
    }

    /// Point the client at a new address; connectivity must be re-probed
    pub fn set_ip(&self, ip: String) {
        *self.ip.write().expect("device ip lock poisoned") = Some(ip);
        self.connected.store(false, Ordering::SeqCst);
    }

    /// Last known connectivity
    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    /// Drop the connectivity flag (UI disconnect action)
    pub fn disconnect(&self) {
        self.connected.store(false, Ordering::SeqCst);
    }

    /// Reachability probe — GET /info with a short timeout.
    ///
    /// Success marks the device connected and clears the delivered-set,
    /// so statuses can be re-sent after a reconnect.
    pub async fn probe(&self) -> bool {
        let Some(ip) = self.ip() else {
            return false;
        };

        let url = format!("http://{ip}/info");
        match self
            .http
            .get(&url)
            .timeout(self.probe_timeout)
            .send()
            .await
        {
            Ok(resp) if resp.status().is_success() => {
                self.connected.store(true, Ordering::SeqCst);
                self.sent.clear();
                tracing::info!(device = %ip, "Device connected");
                true
            }
            Ok(resp) => {
                tracing::warn!(device = %ip, status = %resp.status(), "Device probe rejected");
                self.connected.store(false, Ordering::SeqCst);
                false
            }
            Err(e) => {
                tracing::warn!(device = %ip, error = %e, "Device probe failed");
                self.connected.store(false, Ordering::SeqCst);
                false
            }
        }
    }

    /// Forward a status change to the device.
    ///
    /// Returns whether a push was actually delivered. PENDING is never
    /// forwarded; duplicate (order, status) pairs are skipped; a timeout
    /// keeps the connectivity flag, any other failure clears it.
    pub async fn push_status(&self, order_id: &str, status: OrderStatus) -> bool {
        if status == OrderStatus::Pending {
            return false;
        }
        if !self.is_connected() {
            return false;
        }
        let Some(ip) = self.ip() else {
            return false;
        };

        let marker = format!("{}:{}", order_id, status.device_form());
        if self.sent.contains(&marker) {
            tracing::debug!(order = %order_id, status = %status, "Device push already delivered");
            return false;
        }

        let url = format!("http://{ip}/update");
        let body = serde_json::json!({
            "orderId": order_id,
            "status": status.device_form(),
        });

        match self
            .http
            .post(&url)
            .json(&body)
            .timeout(self.push_timeout)
            .send()
            .await
        {
            Ok(resp) if resp.status().is_success() => {
                self.sent.insert(marker);
                tracing::info!(order = %order_id, status = %status, "Device status updated");
                true
            }
            Ok(resp) => {
                tracing::warn!(order = %order_id, status = %resp.status(), "Device update rejected");
                self.connected.store(false, Ordering::SeqCst);
                false
            }
            Err(e) if e.is_timeout() => {
                // 超时不翻转连接标志：设备可能只是忙
                tracing::warn!(order = %order_id, "Device update timed out");
                false
            }
            Err(e) => {
                tracing::warn!(order = %order_id, error = %e, "Device update failed");
                self.connected.store(false, Ordering::SeqCst);
                false
            }
        }
    }
}
