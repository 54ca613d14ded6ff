//! 评分提交与幂等更新测试

use super::*;
use crate::db::repository::RatingRepository;
use crate::utils::AppError;

#[tokio::test]
async fn test_rating_requires_ready_order() {
    let ctx = setup().await;

    for status in [
        OrderStatus::Pending,
        OrderStatus::Accepted,
        OrderStatus::Rejected,
    ] {
        let id = order_in_status(&ctx.service, status).await;
        let err = ctx
            .service
            .submit_rating(&id, 5, None)
            .await
            .unwrap_err();
        assert!(
            matches!(err, AppError::InvalidState(_)),
            "rating a {} order must fail with InvalidState",
            status
        );
    }

    // nothing persisted
    let repo = RatingRepository::new(ctx.db.clone());
    assert!(repo.find_all_with_orders().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_rating_score_out_of_range_rejected() {
    let ctx = setup().await;
    let id = order_in_status(&ctx.service, OrderStatus::Ready).await;

    for score in [0, 6, -1, 100] {
        let err = ctx
            .service
            .submit_rating(&id, score, None)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    let repo = RatingRepository::new(ctx.db.clone());
    assert!(repo.find_all_with_orders().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_rating_created_on_ready_order() {
    let ctx = setup().await;
    let id = order_in_status(&ctx.service, OrderStatus::Ready).await;

    let (rating, created) = ctx
        .service
        .submit_rating(&id, 5, Some("Great pizza".to_string()))
        .await
        .unwrap();

    assert!(created);
    assert!(!rating.id.is_empty());
    assert_eq!(rating.score, 5);
    assert_eq!(rating.comment.as_deref(), Some("Great pizza"));
    assert_eq!(rating.order_id, id);
}

#[tokio::test]
async fn test_rating_resubmission_updates_in_place() {
    let ctx = setup().await;
    let id = order_in_status(&ctx.service, OrderStatus::Ready).await;

    let (first, created_first) = ctx
        .service
        .submit_rating(&id, 5, Some("Great".to_string()))
        .await
        .unwrap();
    let (second, created_second) = ctx
        .service
        .submit_rating(&id, 2, Some("Changed my mind".to_string()))
        .await
        .unwrap();

    assert!(created_first);
    assert!(!created_second);
    // identity preserved, content replaced
    assert_eq!(first.id, second.id);
    assert_eq!(second.score, 2);
    assert_eq!(second.comment.as_deref(), Some("Changed my mind"));

    // still exactly one rating for this order
    let repo = RatingRepository::new(ctx.db.clone());
    assert_eq!(repo.find_all_with_orders().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_rating_unknown_order_not_found() {
    let ctx = setup().await;

    let err = ctx
        .service
        .submit_rating("order:missing", 4, None)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_order_detail_includes_rating() {
    let ctx = setup().await;
    let id = order_in_status(&ctx.service, OrderStatus::Ready).await;

    ctx.service
        .submit_rating(&id, 4, None)
        .await
        .unwrap();

    let repo = crate::db::repository::OrderRepository::new(ctx.db.clone());
    let stored = repo.find_by_id(&id).await.unwrap().unwrap();
    assert_eq!(stored.rating.len(), 1);
    assert_eq!(stored.rating[0].score, 4);
}

#[tokio::test]
async fn test_ratings_listing_embeds_order() {
    let ctx = setup().await;
    let id = order_in_status(&ctx.service, OrderStatus::Ready).await;

    ctx.service
        .submit_rating(&id, 3, None)
        .await
        .unwrap();

    let repo = RatingRepository::new(ctx.db.clone());
    let listed = repo.find_all_with_orders().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].order.id.as_ref().unwrap().to_string(), id);
    assert_eq!(listed[0].order.items.len(), 1);
}
