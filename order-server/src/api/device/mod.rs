//! 状态设备接口
//!
//! 前端据此展示/控制状态指示设备的连接状态

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/device", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::status))
        .route("/connect", post(handler::connect))
        .route("/disconnect", post(handler::disconnect))
}
