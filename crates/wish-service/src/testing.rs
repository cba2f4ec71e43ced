//! In-memory repositories and notifiers for service tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use uuid::Uuid;
use wish_core::entities::{Reservation, Wishlist, WishlistItem};
use wish_core::traits::{ItemRepository, RepoResult, ReservationRepository, WishlistRepository};
use wish_core::{DomainError, ReservationStatus};

use crate::services::{ReservationNotice, ReservationNotifier, ServiceContext};

pub const BASE_URL: &str = "https://wish.example";

#[derive(Default)]
struct State {
    wishlists: HashMap<Uuid, Wishlist>,
    items: HashMap<Uuid, WishlistItem>,
    reservations: HashMap<Uuid, Reservation>,
}

impl State {
    fn owner_of_wishlist(&self, wishlist_id: Uuid) -> Option<Uuid> {
        self.wishlists.get(&wishlist_id).map(|w| w.user_id)
    }

    fn owner_of_item(&self, item_id: Uuid) -> Option<Uuid> {
        self.items
            .get(&item_id)
            .and_then(|i| self.owner_of_wishlist(i.wishlist_id))
    }

    fn has_other_active(&self, item_id: Uuid, except: Uuid) -> bool {
        self.reservations
            .values()
            .any(|r| r.item_id == item_id && r.id != except && r.is_active())
    }

    fn remove_item(&mut self, item_id: Uuid) {
        self.items.remove(&item_id);
        self.reservations.retain(|_, r| r.item_id != item_id);
    }
}

/// One store backing all three repository traits, with the same cascade and
/// single-active-reservation rules as the Postgres schema
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    /// Insert a wishlist with one item
    pub fn seed(&self, owner: Uuid, is_public: bool) -> (Wishlist, WishlistItem) {
        let mut wishlist = Wishlist::new(Uuid::new_v4(), owner, "Birthday".to_string());
        wishlist.set_public(is_public);
        let mut item = WishlistItem::new(Uuid::new_v4(), wishlist.id, "Desk lamp".to_string());
        item.price = Some(24.5);

        let mut state = self.lock();
        state.wishlists.insert(wishlist.id, wishlist.clone());
        state.items.insert(item.id, item.clone());
        (wishlist, item)
    }

    pub fn wishlist(&self, id: Uuid) -> Option<Wishlist> {
        self.lock().wishlists.get(&id).cloned()
    }

    pub fn item(&self, id: Uuid) -> Option<WishlistItem> {
        self.lock().items.get(&id).cloned()
    }

    pub fn reservation(&self, id: Uuid) -> Option<Reservation> {
        self.lock().reservations.get(&id).cloned()
    }
}

#[async_trait]
impl WishlistRepository for InMemoryStore {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Wishlist>> {
        Ok(self.wishlist(id))
    }

    async fn find_public(&self, id: Uuid) -> RepoResult<Option<Wishlist>> {
        Ok(self.wishlist(id).filter(|w| w.is_public))
    }

    async fn find_by_user(&self, user_id: Uuid) -> RepoResult<Vec<Wishlist>> {
        let mut wishlists: Vec<Wishlist> = self
            .lock()
            .wishlists
            .values()
            .filter(|w| w.user_id == user_id)
            .cloned()
            .collect();
        wishlists.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(wishlists)
    }

    async fn find_owner(&self, id: Uuid) -> RepoResult<Option<Uuid>> {
        Ok(self.lock().owner_of_wishlist(id))
    }

    async fn create(&self, wishlist: &Wishlist) -> RepoResult<()> {
        self.lock().wishlists.insert(wishlist.id, wishlist.clone());
        Ok(())
    }

    async fn update(&self, wishlist: &Wishlist) -> RepoResult<()> {
        let mut state = self.lock();
        match state.wishlists.get_mut(&wishlist.id) {
            Some(stored) => {
                *stored = wishlist.clone();
                Ok(())
            }
            None => Err(DomainError::WishlistNotFound(wishlist.id)),
        }
    }

    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let mut state = self.lock();
        if state.wishlists.remove(&id).is_none() {
            return Err(DomainError::WishlistNotFound(id));
        }
        let item_ids: Vec<Uuid> = state
            .items
            .values()
            .filter(|i| i.wishlist_id == id)
            .map(|i| i.id)
            .collect();
        for item_id in item_ids {
            state.remove_item(item_id);
        }
        Ok(())
    }
}

#[async_trait]
impl ItemRepository for InMemoryStore {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<WishlistItem>> {
        Ok(self.item(id))
    }

    async fn find_by_wishlist(&self, wishlist_id: Uuid) -> RepoResult<Vec<WishlistItem>> {
        let mut items: Vec<WishlistItem> = self
            .lock()
            .items
            .values()
            .filter(|i| i.wishlist_id == wishlist_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(items)
    }

    async fn find_owner(&self, item_id: Uuid) -> RepoResult<Option<Uuid>> {
        Ok(self.lock().owner_of_item(item_id))
    }

    async fn create(&self, item: &WishlistItem) -> RepoResult<()> {
        let mut state = self.lock();
        if !state.wishlists.contains_key(&item.wishlist_id) {
            return Err(DomainError::WishlistNotFound(item.wishlist_id));
        }
        state.items.insert(item.id, item.clone());
        Ok(())
    }

    async fn update(&self, item: &WishlistItem) -> RepoResult<()> {
        let mut state = self.lock();
        match state.items.get_mut(&item.id) {
            Some(stored) => {
                *stored = item.clone();
                Ok(())
            }
            None => Err(DomainError::ItemNotFound(item.id)),
        }
    }

    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let mut state = self.lock();
        if !state.items.contains_key(&id) {
            return Err(DomainError::ItemNotFound(id));
        }
        state.remove_item(id);
        Ok(())
    }
}

#[async_trait]
impl ReservationRepository for InMemoryStore {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Reservation>> {
        Ok(self.reservation(id))
    }

    async fn find_by_token(&self, token: &str) -> RepoResult<Option<Reservation>> {
        Ok(self
            .lock()
            .reservations
            .values()
            .find(|r| r.cancellation_token == token)
            .cloned())
    }

    async fn find_active_by_item(&self, item_id: Uuid) -> RepoResult<Option<Reservation>> {
        Ok(self
            .lock()
            .reservations
            .values()
            .find(|r| r.item_id == item_id && r.is_active())
            .cloned())
    }

    async fn find_by_items(&self, item_ids: &[Uuid]) -> RepoResult<Vec<Reservation>> {
        let mut reservations: Vec<Reservation> = self
            .lock()
            .reservations
            .values()
            .filter(|r| item_ids.contains(&r.item_id))
            .cloned()
            .collect();
        reservations.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(reservations)
    }

    async fn find_owner(&self, reservation_id: Uuid) -> RepoResult<Option<Uuid>> {
        let state = self.lock();
        Ok(state
            .reservations
            .get(&reservation_id)
            .and_then(|r| state.owner_of_item(r.item_id)))
    }

    async fn create(&self, reservation: &Reservation) -> RepoResult<()> {
        let mut state = self.lock();
        if !state.items.contains_key(&reservation.item_id) {
            return Err(DomainError::ItemNotFound(reservation.item_id));
        }
        if reservation.is_active() && state.has_other_active(reservation.item_id, reservation.id) {
            return Err(DomainError::ItemAlreadyReserved);
        }
        state.reservations.insert(reservation.id, reservation.clone());
        Ok(())
    }

    async fn update_status(&self, id: Uuid, status: ReservationStatus) -> RepoResult<()> {
        let mut state = self.lock();
        let item_id = state
            .reservations
            .get(&id)
            .map(|r| r.item_id)
            .ok_or(DomainError::ReservationNotFound(id))?;

        if status.is_active() && state.has_other_active(item_id, id) {
            return Err(DomainError::ItemAlreadyReserved);
        }

        if let Some(reservation) = state.reservations.get_mut(&id) {
            reservation.set_status(status);
        }
        Ok(())
    }

    async fn cancel_by_token(&self, token: &str) -> RepoResult<bool> {
        let mut state = self.lock();
        match state
            .reservations
            .values_mut()
            .find(|r| r.cancellation_token == token && !r.status.is_cancelled())
        {
            Some(reservation) => {
                reservation.set_status(ReservationStatus::Cancelled);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Keeps every notice it receives
#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<ReservationNotice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<ReservationNotice> {
        self.notices.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReservationNotifier for RecordingNotifier {
    async fn reservation_created(&self, notice: &ReservationNotice) -> anyhow::Result<()> {
        self.notices.lock().unwrap().push(notice.clone());
        Ok(())
    }
}

/// Always fails, like an unreachable mail relay
pub struct FailingNotifier;

#[async_trait]
impl ReservationNotifier for FailingNotifier {
    async fn reservation_created(&self, _notice: &ReservationNotice) -> anyhow::Result<()> {
        anyhow::bail!("smtp relay unreachable")
    }
}

pub fn context(store: &Arc<InMemoryStore>) -> ServiceContext {
    context_with(store, Arc::new(RecordingNotifier::default()))
}

pub fn context_with(
    store: &Arc<InMemoryStore>,
    notifier: Arc<dyn ReservationNotifier>,
) -> ServiceContext {
    ServiceContext::new(store.clone(), store.clone(), store.clone(), notifier, BASE_URL)
}
