use std::sync::Arc;

use shared::models::OrderStatus;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::Config;
use crate::db::DbService;
use crate::db::models::{OrderCreate, OrderItemInput};
use crate::device::DeviceClient;
use crate::message::NotificationHub;
use crate::orders::OrderService;

mod test_notifications;
mod test_ratings;

struct TestContext {
    service: OrderService,
    hub: NotificationHub,
    db: Surreal<Db>,
}

/// Service over an in-memory store, no device configured
async fn setup() -> TestContext {
    let db = DbService::new_in_memory().await.unwrap().db;
    let hub = NotificationHub::with_capacity(64);

    let mut config = Config::with_overrides("/tmp/comanda-test", 0);
    config.device_ip = None;
    let device = Arc::new(DeviceClient::from_config(&config));

    TestContext {
        service: OrderService::new(db.clone(), hub.clone(), device),
        hub,
        db,
    }
}

fn margherita(quantity: i32) -> OrderItemInput {
    OrderItemInput {
        menu_item_id: 1,
        quantity,
        name: "Margherita Pizza".to_string(),
        price: 12.99,
        notes: None,
        image: None,
    }
}

fn single_item_order() -> OrderCreate {
    OrderCreate {
        items: vec![margherita(2)],
    }
}

/// Drive a fresh order into the requested status through legal edges
async fn order_in_status(service: &OrderService, status: OrderStatus) -> String {
    let order = service.create_order(single_item_order()).await.unwrap();
    let id = order.id.clone();
    match status {
        OrderStatus::Pending => {}
        OrderStatus::Accepted => {
            service
                .request_transition(&id, OrderStatus::Accepted)
                .await
                .unwrap();
        }
        OrderStatus::Rejected => {
            service
                .request_transition(&id, OrderStatus::Rejected)
                .await
                .unwrap();
        }
        OrderStatus::Ready => {
            service
                .request_transition(&id, OrderStatus::Accepted)
                .await
                .unwrap();
            service
                .request_transition(&id, OrderStatus::Ready)
                .await
                .unwrap();
        }
    }
    id
}
