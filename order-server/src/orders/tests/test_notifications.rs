//! 推送扇出契约测试
//!
//! 每次成功落库必须扇出约定的事件：频道、事件名、完整实体载荷。

use shared::message::{EventName, OrderPayload, PushEvent, RatingPayload, Topic};

use super::*;

/// Drain everything currently buffered on a subscriber
fn drain(rx: &mut tokio::sync::broadcast::Receiver<PushEvent>) -> Vec<PushEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

#[tokio::test]
async fn test_create_publishes_order_created_on_global_channel() {
    let ctx = setup().await;
    let mut rx = ctx.hub.subscribe();

    let order = ctx
        .service
        .create_order(single_item_order())
        .await
        .unwrap();

    let events = drain(&mut rx);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].topic, Topic::Orders);
    assert_eq!(events[0].event, EventName::OrderCreated);

    let payload: OrderPayload = events[0].parse_payload().unwrap();
    assert_eq!(payload.order.id, order.id);
    assert_eq!(payload.order.status, OrderStatus::Pending);
    assert_eq!(payload.order.items.len(), 1);
}

#[tokio::test]
async fn test_transition_publishes_on_both_scopes() {
    let ctx = setup().await;
    let id = order_in_status(&ctx.service, OrderStatus::Pending).await;

    let mut rx = ctx.hub.subscribe();
    ctx.service
        .request_transition(&id, OrderStatus::Accepted)
        .await
        .unwrap();

    let events = drain(&mut rx);
    assert_eq!(events.len(), 2, "exactly one event per scope");

    // order-scoped first, then the global dashboard channel
    assert_eq!(events[0].topic, Topic::Order(id.clone()));
    assert_eq!(events[1].topic, Topic::Orders);
    for event in &events {
        assert_eq!(event.event, EventName::OrderUpdated);
        let payload: OrderPayload = event.parse_payload().unwrap();
        assert_eq!(payload.order.id, id);
        assert_eq!(payload.order.status, OrderStatus::Accepted);
    }
}

#[tokio::test]
async fn test_two_transitions_observed_in_order() {
    let ctx = setup().await;
    let id = order_in_status(&ctx.service, OrderStatus::Pending).await;

    let mut rx = ctx.hub.subscribe();
    ctx.service
        .request_transition(&id, OrderStatus::Accepted)
        .await
        .unwrap();
    ctx.service
        .request_transition(&id, OrderStatus::Ready)
        .await
        .unwrap();

    let global: Vec<PushEvent> = drain(&mut rx)
        .into_iter()
        .filter(|e| e.topic == Topic::Orders)
        .collect();
    assert_eq!(global.len(), 2);

    let statuses: Vec<OrderStatus> = global
        .iter()
        .map(|e| e.parse_payload::<OrderPayload>().unwrap().order.status)
        .collect();
    assert_eq!(statuses, vec![OrderStatus::Accepted, OrderStatus::Ready]);

    // versions grow monotonically on the channel
    assert!(global[0].version < global[1].version);
}

#[tokio::test]
async fn test_rejected_transition_publishes_nothing() {
    let ctx = setup().await;
    let id = order_in_status(&ctx.service, OrderStatus::Pending).await;

    let mut rx = ctx.hub.subscribe();
    ctx.service
        .request_transition(&id, OrderStatus::Ready)
        .await
        .unwrap_err();

    assert!(drain(&mut rx).is_empty());
}

#[tokio::test]
async fn test_rating_events_are_order_scoped() {
    let ctx = setup().await;
    let id = order_in_status(&ctx.service, OrderStatus::Ready).await;

    let mut rx = ctx.hub.subscribe();
    let (first, _) = ctx
        .service
        .submit_rating(&id, 5, None)
        .await
        .unwrap();
    ctx.service
        .submit_rating(&id, 3, None)
        .await
        .unwrap();

    let events = drain(&mut rx);
    assert_eq!(events.len(), 2);

    assert_eq!(events[0].topic, Topic::Order(id.clone()));
    assert_eq!(events[0].event, EventName::RatingCreated);
    assert_eq!(events[1].topic, Topic::Order(id.clone()));
    assert_eq!(events[1].event, EventName::RatingUpdated);

    let payload: RatingPayload = events[1].parse_payload().unwrap();
    assert_eq!(payload.rating.id, first.id);
    assert_eq!(payload.rating.score, 3);
}

#[tokio::test]
async fn test_mutation_succeeds_with_no_subscribers() {
    let ctx = setup().await;
    // no subscriber attached anywhere
    let order = ctx
        .service
        .create_order(single_item_order())
        .await
        .unwrap();
    let accepted = ctx
        .service
        .request_transition(&order.id, OrderStatus::Accepted)
        .await
        .unwrap();
    assert_eq!(accepted.status, OrderStatus::Accepted);
}
