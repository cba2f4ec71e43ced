//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use std::collections::HashMap;

use uuid::Uuid;
use wish_core::entities::{Reservation, Wishlist, WishlistItem};
use wish_core::ReservationStatus;

use super::responses::{
    ItemResponse, ItemWithReservationsResponse, PublicItemResponse, PublicWishlistResponse,
    ReservationResponse, WishlistDetailResponse, WishlistResponse, WishlistWithItemsResponse,
};

// ============================================================================
// Wishlist Mappers
// ============================================================================

impl From<&Wishlist> for WishlistResponse {
    fn from(wishlist: &Wishlist) -> Self {
        Self {
            id: wishlist.id,
            user_id: wishlist.user_id,
            title: wishlist.title.clone(),
            description: wishlist.description.clone(),
            is_public: wishlist.is_public,
            created_at: wishlist.created_at,
            updated_at: wishlist.updated_at,
        }
    }
}

impl From<Wishlist> for WishlistResponse {
    fn from(wishlist: Wishlist) -> Self {
        Self::from(&wishlist)
    }
}

/// Wishlist with items (dashboard listing)
pub struct WishlistWithItems {
    pub wishlist: Wishlist,
    pub items: Vec<WishlistItem>,
}

impl From<WishlistWithItems> for WishlistWithItemsResponse {
    fn from(data: WishlistWithItems) -> Self {
        Self {
            wishlist: WishlistResponse::from(&data.wishlist),
            items: data.items.iter().map(ItemResponse::from).collect(),
        }
    }
}

/// Wishlist with items and each item's reservations
pub struct WishlistDetail {
    pub wishlist: Wishlist,
    pub items: Vec<ItemWithReservations>,
}

impl WishlistDetail {
    /// Attach reservations to their items, preserving item order
    pub fn assemble(
        wishlist: Wishlist,
        items: Vec<WishlistItem>,
        reservations: Vec<Reservation>,
    ) -> Self {
        let mut by_item: HashMap<Uuid, Vec<Reservation>> = HashMap::new();
        for reservation in reservations {
            by_item.entry(reservation.item_id).or_default().push(reservation);
        }

        let items = items
            .into_iter()
            .map(|item| {
                let mut reservations = by_item.remove(&item.id).unwrap_or_default();
                reservations.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                ItemWithReservations { item, reservations }
            })
            .collect();

        Self { wishlist, items }
    }
}

impl From<WishlistDetail> for WishlistDetailResponse {
    fn from(detail: WishlistDetail) -> Self {
        Self {
            wishlist: WishlistResponse::from(&detail.wishlist),
            items: detail
                .items
                .into_iter()
                .map(ItemWithReservationsResponse::from)
                .collect(),
        }
    }
}

impl From<WishlistDetail> for PublicWishlistResponse {
    fn from(detail: WishlistDetail) -> Self {
        Self {
            id: detail.wishlist.id,
            title: detail.wishlist.title,
            description: detail.wishlist.description,
            items: detail.items.into_iter().map(PublicItemResponse::from).collect(),
        }
    }
}

// ============================================================================
// Item Mappers
// ============================================================================

impl From<&WishlistItem> for ItemResponse {
    fn from(item: &WishlistItem) -> Self {
        Self {
            id: item.id,
            wishlist_id: item.wishlist_id,
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price,
            purchase_url: item.purchase_url.clone(),
            image_url: item.image_url.clone(),
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

impl From<WishlistItem> for ItemResponse {
    fn from(item: WishlistItem) -> Self {
        Self::from(&item)
    }
}

/// Item with its reservations, newest first
pub struct ItemWithReservations {
    pub item: WishlistItem,
    pub reservations: Vec<Reservation>,
}

impl ItemWithReservations {
    /// The reservation that currently takes the item off the list
    ///
    /// Cancelled reservations are ignored; a purchased item stays taken.
    pub fn current_claim(&self) -> Option<&Reservation> {
        self.reservations
            .iter()
            .find(|r| r.status == ReservationStatus::Reserved)
            .or_else(|| {
                self.reservations
                    .iter()
                    .find(|r| r.status == ReservationStatus::Purchased)
            })
    }
}

impl From<ItemWithReservations> for ItemWithReservationsResponse {
    fn from(data: ItemWithReservations) -> Self {
        Self {
            item: ItemResponse::from(&data.item),
            reservations: data.reservations.iter().map(ReservationResponse::from).collect(),
        }
    }
}

impl From<ItemWithReservations> for PublicItemResponse {
    fn from(data: ItemWithReservations) -> Self {
        let claim = data.current_claim().map(|r| (r.status, r.created_at));
        let item = data.item;

        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            price: item.price,
            purchase_url: item.purchase_url,
            image_url: item.image_url,
            is_reserved: claim.is_some(),
            reservation_status: claim.map(|(status, _)| status),
            reserved_at: claim.map(|(_, at)| at),
        }
    }
}

// ============================================================================
// Reservation Mappers
// ============================================================================

impl From<&Reservation> for ReservationResponse {
    fn from(reservation: &Reservation) -> Self {
        Self {
            id: reservation.id,
            item_id: reservation.item_id,
            reserver_name: reservation.reserver_name.clone(),
            reserver_email: reservation.reserver_email.clone(),
            user_id: reservation.user_id,
            status: reservation.status,
            created_at: reservation.created_at,
            updated_at: reservation.updated_at,
        }
    }
}

impl From<Reservation> for ReservationResponse {
    fn from(reservation: Reservation) -> Self {
        Self::from(&reservation)
    }
}
