//! Service context - dependency container for services
//!
//! Holds the repositories, the reservation notifier and the public base URL
//! used to build share and cancellation links.

use std::sync::Arc;

use wish_core::traits::{ItemRepository, ReservationRepository, WishlistRepository};

use super::error::{ServiceError, ServiceResult};
use super::notifier::{LoggingNotifier, ReservationNotifier};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    wishlist_repo: Arc<dyn WishlistRepository>,
    item_repo: Arc<dyn ItemRepository>,
    reservation_repo: Arc<dyn ReservationRepository>,
    notifier: Arc<dyn ReservationNotifier>,
    public_base_url: Arc<str>,
}

impl ServiceContext {
    pub fn new(
        wishlist_repo: Arc<dyn WishlistRepository>,
        item_repo: Arc<dyn ItemRepository>,
        reservation_repo: Arc<dyn ReservationRepository>,
        notifier: Arc<dyn ReservationNotifier>,
        public_base_url: &str,
    ) -> Self {
        Self {
            wishlist_repo,
            item_repo,
            reservation_repo,
            notifier,
            public_base_url: Arc::from(public_base_url.trim_end_matches('/')),
        }
    }

    // === Repositories ===

    pub fn wishlist_repo(&self) -> &dyn WishlistRepository {
        self.wishlist_repo.as_ref()
    }

    pub fn item_repo(&self) -> &dyn ItemRepository {
        self.item_repo.as_ref()
    }

    pub fn reservation_repo(&self) -> &dyn ReservationRepository {
        self.reservation_repo.as_ref()
    }

    // === Collaborators ===

    pub fn notifier(&self) -> &dyn ReservationNotifier {
        self.notifier.as_ref()
    }

    /// Base URL of the visitor-facing site, without trailing slash
    pub fn public_base_url(&self) -> &str {
        &self.public_base_url
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("public_base_url", &self.public_base_url)
            .finish_non_exhaustive()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    wishlist_repo: Option<Arc<dyn WishlistRepository>>,
    item_repo: Option<Arc<dyn ItemRepository>>,
    reservation_repo: Option<Arc<dyn ReservationRepository>>,
    notifier: Option<Arc<dyn ReservationNotifier>>,
    public_base_url: Option<String>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wishlist_repo(mut self, repo: Arc<dyn WishlistRepository>) -> Self {
        self.wishlist_repo = Some(repo);
        self
    }

    pub fn item_repo(mut self, repo: Arc<dyn ItemRepository>) -> Self {
        self.item_repo = Some(repo);
        self
    }

    pub fn reservation_repo(mut self, repo: Arc<dyn ReservationRepository>) -> Self {
        self.reservation_repo = Some(repo);
        self
    }

    /// Defaults to [`LoggingNotifier`] when not set
    pub fn notifier(mut self, notifier: Arc<dyn ReservationNotifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn public_base_url(mut self, url: impl Into<String>) -> Self {
        self.public_base_url = Some(url.into());
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let public_base_url = self
            .public_base_url
            .ok_or_else(|| ServiceError::validation("public_base_url is required"))?;

        Ok(ServiceContext::new(
            self.wishlist_repo
                .ok_or_else(|| ServiceError::validation("wishlist_repo is required"))?,
            self.item_repo
                .ok_or_else(|| ServiceError::validation("item_repo is required"))?,
            self.reservation_repo
                .ok_or_else(|| ServiceError::validation("reservation_repo is required"))?,
            self.notifier.unwrap_or_else(|| Arc::new(LoggingNotifier)),
            &public_base_url,
        ))
    }
}
