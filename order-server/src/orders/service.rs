//! Order Lifecycle Service
//!
//! Owns the valid-transition rules and the mutation/fan-out ordering:
//! validate → persist → publish → (best-effort) device push. The store
//! write must succeed before anything is published; publish and device
//! failures never unwind a committed write.

use std::sync::Arc;

use shared::message::{EventName, PushEvent, Topic};
use shared::models::{self as api, OrderStatus, Rating as ApiRating};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::models::{OrderCreate, OrderItem, Rating};
use crate::db::repository::{MenuItemRepository, OrderRepository, RatingRepository};
use crate::device::DeviceClient;
use crate::message::NotificationHub;
use crate::utils::{AppError, AppResult};

#[derive(Clone)]
pub struct OrderService {
    orders: OrderRepository,
    ratings: RatingRepository,
    menu: MenuItemRepository,
    hub: NotificationHub,
    device: Arc<DeviceClient>,
}

impl OrderService {
    pub fn new(db: Surreal<Db>, hub: NotificationHub, device: Arc<DeviceClient>) -> Self {
        Self {
            orders: OrderRepository::new(db.clone()),
            ratings: RatingRepository::new(db.clone()),
            menu: MenuItemRepository::new(db),
            hub,
            device,
        }
    }

    fn now() -> String {
        chrono::Utc::now().to_rfc3339()
    }

    /// Create a new PENDING order from a non-empty item list
    pub async fn create_order(&self, input: OrderCreate) -> AppResult<api::Order> {
        if input.items.is_empty() {
            return Err(AppError::validation("Invalid order items"));
        }

        let mut items = Vec::with_capacity(input.items.len());
        for item in input.items {
            if item.quantity < 1 {
                return Err(AppError::validation(format!(
                    "Invalid quantity for item {}",
                    item.name
                )));
            }
            if item.price < 0.0 {
                return Err(AppError::validation(format!(
                    "Invalid price for item {}",
                    item.name
                )));
            }
            items.push(OrderItem {
                menu_item_id: item.menu_item_id,
                quantity: item.quantity,
                name: item.name,
                price: item.price,
                notes: item.notes.unwrap_or_default(),
                image: item.image,
            });
        }

        // Denormalize the catalog image onto the line so later menu edits
        // cannot change what this order shows
        for item in &mut items {
            if item.image.is_none()
                && let Some(menu_item) = self.menu.find_by_id(item.menu_item_id).await?
            {
                item.image = menu_item.image;
            }
        }

        let now = Self::now();
        let created = self.orders.create(items, &now).await?;
        let order = api::Order::from(created);

        self.hub.publish(PushEvent::order(
            Topic::Orders,
            EventName::OrderCreated,
            &order,
        ));

        Ok(order)
    }

    /// Apply a status transition
    ///
    /// Legality is checked against the status read here, then re-checked
    /// inside the UPDATE itself — a concurrent transition leaves this
    /// request empty-handed instead of double-applying.
    pub async fn request_transition(
        &self,
        order_id: &str,
        target: OrderStatus,
    ) -> AppResult<api::Order> {
        let existing = self
            .orders
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Order {} not found", order_id)))?;

        let current = existing.status;
        if !current.can_transition_to(target) {
            return Err(AppError::illegal_transition(current, target));
        }

        let now = Self::now();
        let updated = match self
            .orders
            .update_status_checked(order_id, current, target, &now)
            .await?
        {
            Some(order) => order,
            None => {
                // Lost the race — report against the fresh status
                let fresh = self
                    .orders
                    .find_by_id(order_id)
                    .await?
                    .ok_or_else(|| AppError::not_found(format!("Order {} not found", order_id)))?;
                return Err(AppError::illegal_transition(fresh.status, target));
            }
        };

        let mut order = api::Order::from(updated);
        order.rating = existing.rating.into_iter().next().map(Into::into);

        // Fan out: the order's own channel first, then the dashboard channel
        self.hub.publish(PushEvent::order(
            Topic::Order(order.id.clone()),
            EventName::OrderUpdated,
            &order,
        ));
        self.hub.publish(PushEvent::order(
            Topic::Orders,
            EventName::OrderUpdated,
            &order,
        ));

        // Best-effort device push, off the request path
        let device = self.device.clone();
        let pushed_id = order.id.clone();
        tokio::spawn(async move {
            device.push_status(&pushed_id, target).await;
        });

        Ok(order)
    }

    /// Create or update the rating for a READY order
    ///
    /// Returns the rating and whether it was newly created.
    pub async fn submit_rating(
        &self,
        order_id: &str,
        score: i32,
        comment: Option<String>,
    ) -> AppResult<(ApiRating, bool)> {
        if !ApiRating::valid_score(score) {
            return Err(AppError::validation("Score must be between 1 and 5"));
        }

        let order = self
            .orders
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Order {} not found", order_id)))?;

        if order.status != OrderStatus::Ready {
            return Err(AppError::invalid_state("Can only rate orders that are ready"));
        }

        let order_record_id = order
            .id
            .clone()
            .ok_or_else(|| AppError::internal("Order record is missing its id"))?;
        let wire_order_id = order_record_id.to_string();

        let existing = self.ratings.find_by_order(&order_record_id).await?;

        match existing {
            Some(rating) => {
                let rating_id = rating
                    .id
                    .ok_or_else(|| AppError::internal("Rating record is missing its id"))?;
                let updated = self
                    .ratings
                    .update(&rating_id, score, comment.unwrap_or_default())
                    .await?;
                let rating = ApiRating::from(updated);

                self.hub.publish(PushEvent::rating(
                    Topic::Order(wire_order_id),
                    EventName::RatingUpdated,
                    &rating,
                ));

                Ok((rating, false))
            }
            None => {
                let created = self
                    .ratings
                    .create(Rating {
                        id: None,
                        score,
                        comment: comment.unwrap_or_default(),
                        order: order_record_id,
                        created_at: Self::now(),
                    })
                    .await?;
                let rating = ApiRating::from(created);

                self.hub.publish(PushEvent::rating(
                    Topic::Order(wire_order_id),
                    EventName::RatingCreated,
                    &rating,
                ));

                Ok((rating, true))
            }
        }
    }
}
