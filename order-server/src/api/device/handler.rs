//! Device API Handlers

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// Device connectivity as shown in the UI
#[derive(Debug, Serialize)]
pub struct DeviceStatusResponse {
    pub ip: Option<String>,
    pub connected: bool,
}

impl DeviceStatusResponse {
    fn from_state(state: &ServerState) -> Self {
        Self {
            ip: state.device.ip(),
            connected: state.device.is_connected(),
        }
    }
}

/// GET /api/device - 当前设备状态
pub async fn status(State(state): State<ServerState>) -> Json<DeviceStatusResponse> {
    Json(DeviceStatusResponse::from_state(&state))
}

#[derive(Debug, Default, Deserialize)]
pub struct ConnectRequest {
    #[serde(default)]
    pub ip: Option<String>,
}

/// POST /api/device/connect - 探测设备 (可同时设置新地址)
pub async fn connect(
    State(state): State<ServerState>,
    payload: Option<Json<ConnectRequest>>,
) -> AppResult<Json<DeviceStatusResponse>> {
    if let Some(Json(ConnectRequest { ip: Some(ip) })) = payload {
        state.device.set_ip(ip);
    }

    if !state.device.is_configured() {
        return Err(AppError::validation("No device address configured"));
    }

    state.device.probe().await;
    Ok(Json(DeviceStatusResponse::from_state(&state)))
}

/// POST /api/device/disconnect - 断开设备 (仅清除连接标志)
pub async fn disconnect(State(state): State<ServerState>) -> Json<DeviceStatusResponse> {
    state.device.disconnect();
    Json(DeviceStatusResponse::from_state(&state))
}
