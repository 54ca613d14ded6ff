//! 开发用菜单种子
//!
//! POST /api/seed — 开发环境初始化菜单数据；菜单非空时不做任何事。

use axum::{Json, Router, extract::State, routing::post};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::models::MenuItem;
use crate::db::repository::MenuItemRepository;
use crate::utils::{AppError, AppResult};

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/seed", post(seed))
}

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=200&width=300";

/// (name, description, price, category)
const SEED_ITEMS: &[(&str, &str, f64, &str)] = &[
    (
        "Margherita Pizza",
        "Classic pizza with tomato sauce, mozzarella, and basil",
        12.99,
        "Pizza",
    ),
    (
        "Pepperoni Pizza",
        "Pizza topped with pepperoni slices and cheese",
        14.99,
        "Pizza",
    ),
    (
        "Caesar Salad",
        "Fresh romaine lettuce with Caesar dressing and croutons",
        8.99,
        "Salad",
    ),
    (
        "Spaghetti Carbonara",
        "Pasta with creamy sauce, pancetta, and Parmesan cheese",
        15.99,
        "Pasta",
    ),
    (
        "Grilled Salmon",
        "Fresh salmon fillet with lemon butter sauce and vegetables",
        18.99,
        "Main Course",
    ),
    (
        "Chocolate Cake",
        "Rich chocolate cake with a scoop of vanilla ice cream",
        7.99,
        "Dessert",
    ),
];

#[derive(Serialize)]
pub struct SeedResponse {
    pub message: String,
    pub count: usize,
}

/// POST /api/seed - 写入初始菜单
pub async fn seed(State(state): State<ServerState>) -> AppResult<Json<SeedResponse>> {
    let repo = MenuItemRepository::new(state.db.clone());

    let existing = repo
        .count()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    if existing > 0 {
        return Ok(Json(SeedResponse {
            message: "Database already seeded".to_string(),
            count: existing,
        }));
    }

    let now = chrono::Utc::now().to_rfc3339();
    for (idx, (name, description, price, category)) in SEED_ITEMS.iter().enumerate() {
        repo.create_with_id(
            idx as i64 + 1,
            MenuItem {
                id: None,
                name: (*name).to_string(),
                description: (*description).to_string(),
                price: *price,
                image: Some(PLACEHOLDER_IMAGE.to_string()),
                category: (*category).to_string(),
                created_at: now.clone(),
                updated_at: now.clone(),
            },
        )
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    }

    tracing::info!(count = SEED_ITEMS.len(), "Menu seeded");

    Ok(Json(SeedResponse {
        message: "Database seeded successfully".to_string(),
        count: SEED_ITEMS.len(),
    }))
}
