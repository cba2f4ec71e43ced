//! API integration tests
//!
//! Run with: cargo test -p integration-tests
//!
//! Requires:
//! - PostgreSQL running with DATABASE_URL set
//! - JWT_SECRET set (tokens are minted locally with it)

use integration_tests::*;
use reqwest::StatusCode;
use serde_json::json;
use uuid::Uuid;

/// Owner with one wishlist holding one item
async fn wishlist_with_item(server: &TestServer) -> (TestUser, WishlistResponse, ItemResponse) {
    let owner = TestUser::new(&server.config).unwrap();

    let response = server
        .post("/api/v1/wishlists", Some(&owner.token), &CreateWishlistRequest::unique())
        .await
        .unwrap();
    let wishlist: WishlistResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post(
            &format!("/api/v1/wishlists/{}/items", wishlist.id),
            Some(&owner.token),
            &ItemRequest::unique(),
        )
        .await
        .unwrap();
    let item: ItemResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    (owner, wishlist, item)
}

async fn reserve(server: &TestServer, item_id: Uuid, name: &str) -> reqwest::Response {
    server
        .post(
            &format!("/api/v1/items/{item_id}/reservations"),
            None,
            &ReserveRequest::new(name),
        )
        .await
        .unwrap()
}

// ============================================================================
// Health Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health", None).await.unwrap();
    let health: HealthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(health.status, "healthy");

    let response = server.get("/health/ready", None).await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["database"], "healthy");
}

// ============================================================================
// Wishlist Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_list_wishlists() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (owner, wishlist, item) = wishlist_with_item(&server).await;

    assert_eq!(wishlist.user_id, owner.id);
    assert!(!wishlist.is_public);

    let response = server.get("/api/v1/wishlists", Some(&owner.token)).await.unwrap();
    let lists: Vec<WishlistWithItemsResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(lists.len(), 1);
    assert_eq!(lists[0].wishlist.id, wishlist.id);
    assert_eq!(lists[0].items.len(), 1);
    assert_eq!(lists[0].items[0].id, item.id);
}

#[tokio::test]
async fn test_update_wishlist_keeps_omitted_fields() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (owner, wishlist, _) = wishlist_with_item(&server).await;

    let response = server
        .patch(
            &format!("/api/v1/wishlists/{}", wishlist.id),
            &owner.token,
            &json!({ "title": "Wedding" }),
        )
        .await
        .unwrap();
    let updated: WishlistResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(updated.title, "Wedding");
    assert_eq!(updated.description, wishlist.description);
    assert!(updated.updated_at >= wishlist.updated_at);
    assert_eq!(updated.created_at, wishlist.created_at);
}

#[tokio::test]
async fn test_non_owner_cannot_modify_wishlist() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (owner, wishlist, item) = wishlist_with_item(&server).await;
    let stranger = TestUser::new(&server.config).unwrap();
    let path = format!("/api/v1/wishlists/{}", wishlist.id);

    let response = server
        .patch(&path, &stranger.token, &json!({ "title": "Mine now" }))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(code, "NOT_WISHLIST_OWNER");

    let response = server.delete(&path, &stranger.token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .delete(&format!("/api/v1/items/{}", item.id), &stranger.token)
        .await
        .unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(body["error"]["code"], "NOT_WISHLIST_OWNER");
    assert_eq!(body["error"]["message"], "Not authorized to edit this item");

    // Record is untouched
    let response = server.get(&path, Some(&owner.token)).await.unwrap();
    let detail: WishlistDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.wishlist.title, wishlist.title);
    assert_eq!(detail.items.len(), 1);
}

#[tokio::test]
async fn test_delete_wishlist_removes_items() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (owner, wishlist, item) = wishlist_with_item(&server).await;

    let response = server
        .delete(&format!("/api/v1/wishlists/{}", wishlist.id), &owner.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get(&format!("/api/v1/wishlists/{}", wishlist.id), Some(&owner.token))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_WISHLIST");

    let response = reserve(&server, item.id, "Alice").await;
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_ITEM");
}

// ============================================================================
// Item Tests
// ============================================================================

#[tokio::test]
async fn test_replace_item() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (owner, _, item) = wishlist_with_item(&server).await;

    let response = server
        .put(
            &format!("/api/v1/items/{}", item.id),
            &owner.token,
            &json!({ "name": "Floor lamp" }),
        )
        .await
        .unwrap();
    let updated: ItemResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(updated.id, item.id);
    assert_eq!(updated.name, "Floor lamp");
    assert_eq!(updated.price, None);
}

// ============================================================================
// Reservation Tests
// ============================================================================

#[tokio::test]
async fn test_reserve_conflict_cancel_and_reserve_again() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (owner, wishlist, item) = wishlist_with_item(&server).await;

    let response = reserve(&server, item.id, "Alice").await;
    let alice: ReserveResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(alice.item_id, item.id);
    assert_eq!(alice.status, "reserved");
    assert!(alice.cancellation_url.contains(&alice.cancellation_token));

    let response = reserve(&server, item.id, "Bob").await;
    let code = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(code, "ITEM_ALREADY_RESERVED");

    let response = server
        .post_empty(&cancel_path(&alice.cancellation_token))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = reserve(&server, item.id, "Bob").await;
    let bob: ReserveResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_ne!(bob.reservation_id, alice.reservation_id);

    // Owner sees both, newest first
    let response = server
        .get(&format!("/api/v1/wishlists/{}", wishlist.id), Some(&owner.token))
        .await
        .unwrap();
    let detail: WishlistDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    let reservations = &detail.items[0].reservations;
    assert_eq!(reservations.len(), 2);
    assert_eq!(reservations[0].id, bob.reservation_id);
    assert_eq!(reservations[0].reserver_name, "Bob");
    assert_eq!(reservations[1].status, "cancelled");
}

#[tokio::test]
async fn test_cancel_twice_and_unknown_token() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, _, item) = wishlist_with_item(&server).await;

    let response = reserve(&server, item.id, "Alice").await;
    let reservation: ReserveResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = cancel_path(&reservation.cancellation_token);

    let response = server.post_empty(&path).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.post_empty(&path).await.unwrap();
    let code = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(code, "RESERVATION_ALREADY_CANCELLED");

    let response = server
        .post_empty(&cancel_path("no-such-token"))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "INVALID_CANCELLATION_TOKEN");
}

#[tokio::test]
async fn test_reserve_with_account_records_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (owner, wishlist, item) = wishlist_with_item(&server).await;
    let friend = TestUser::new(&server.config).unwrap();

    let response = server
        .post(
            &format!("/api/v1/items/{}/reservations", item.id),
            Some(&friend.token),
            &ReserveRequest::new("Carol"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get(&format!("/api/v1/wishlists/{}", wishlist.id), Some(&owner.token))
        .await
        .unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(
        body["items"][0]["reservations"][0]["user_id"],
        json!(friend.id.to_string())
    );
}

#[tokio::test]
async fn test_owner_marks_reservation_purchased() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (owner, _, item) = wishlist_with_item(&server).await;

    let response = reserve(&server, item.id, "Alice").await;
    let reservation: ReserveResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/api/v1/reservations/{}", reservation.reservation_id);

    let stranger = TestUser::new(&server.config).unwrap();
    let response = server
        .patch(&path, &stranger.token, &json!({ "status": "purchased" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .patch(&path, &owner.token, &json!({ "status": "purchased" }))
        .await
        .unwrap();
    let updated: ReservationResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.status, "purchased");
    assert_eq!(updated.item_id, item.id);
}

// ============================================================================
// Public View Tests
// ============================================================================

#[tokio::test]
async fn test_public_view_requires_visibility_and_hides_reservers() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (owner, wishlist, item) = wishlist_with_item(&server).await;
    let public_path = format!("/api/v1/public/{}", wishlist.id);

    let response = server.get(&public_path, None).await.unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_WISHLIST");

    let response = server
        .put(
            &format!("/api/v1/wishlists/{}/visibility", wishlist.id),
            &owner.token,
            &json!({ "is_public": true }),
        )
        .await
        .unwrap();
    let updated: WishlistResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(updated.is_public);

    let response = server
        .get(&format!("/api/v1/wishlists/{}/share", wishlist.id), Some(&owner.token))
        .await
        .unwrap();
    let share: ShareLinkResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(share.wishlist_id, wishlist.id);
    assert!(share.is_public);
    assert!(share.url.ends_with(&wishlist.id.to_string()));

    let reserver = ReserveRequest::new("Alice");
    let response = server
        .post(&format!("/api/v1/items/{}/reservations", item.id), None, &reserver)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.get(&public_path, None).await.unwrap();
    let text = response.text().await.unwrap();
    assert!(!text.contains(&reserver.reserver_email));
    assert!(!text.contains("Alice"));

    let public: PublicWishlistResponse = serde_json::from_str(&text).unwrap();
    assert_eq!(public.id, wishlist.id);
    assert_eq!(public.title, wishlist.title);
    assert_eq!(public.items[0].id, item.id);
    assert!(public.items[0].is_reserved);
    assert_eq!(public.items[0].reservation_status.as_deref(), Some("reserved"));
}

#[tokio::test]
async fn test_unknown_public_wishlist() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .get(&format!("/api/v1/public/{}", Uuid::new_v4()), None)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}
