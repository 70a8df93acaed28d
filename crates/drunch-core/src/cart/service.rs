//! Session-bound cart service.
//!
//! Binds the in-memory [`Cart`] to a session id and the durable KV store:
//! the cart is rehydrated from the `drunchCart` key (malformed or absent
//! snapshots yield an empty cart) and every mutation writes the whole
//! snapshot back before returning. Writes are whole-snapshot overwrites, so
//! rapid successive mutations are each individually durable with no torn
//! state.

use drunch_types::catalog::MenuItem;
use drunch_types::error::RepositoryError;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::cart::engine::Cart;
use crate::storage::kv_store::KvStore;

/// Storage key the cart snapshot is mirrored to.
pub const CART_STORAGE_KEY: &str = "drunchCart";

/// Cart operations for a session, persisted through a [`KvStore`].
///
/// Generic over the store to keep the engine testable without a database.
pub struct CartService<K: KvStore> {
    kv: K,
}

impl<K: KvStore> CartService<K> {
    pub fn new(kv: K) -> Self {
        Self { kv }
    }

    /// Rehydrate the session's cart from storage.
    ///
    /// A read failure is treated the same as a malformed snapshot: the
    /// session starts with an empty cart, never an error.
    pub async fn load(&self, session_id: &Uuid) -> Cart {
        match self.kv.get(session_id, CART_STORAGE_KEY).await {
            Ok(snapshot) => Cart::from_snapshot(snapshot.as_ref()),
            Err(e) => {
                warn!(session_id = %session_id, error = %e, "cart read failed, starting empty");
                Cart::new()
            }
        }
    }

    async fn persist(&self, session_id: &Uuid, cart: &Cart) -> Result<(), RepositoryError> {
        self.kv
            .set(session_id, CART_STORAGE_KEY, &cart.to_snapshot())
            .await
    }

    /// Add one unit of a catalog item and persist the new snapshot.
    pub async fn add_item(
        &self,
        session_id: &Uuid,
        item: &MenuItem,
    ) -> Result<Cart, RepositoryError> {
        let mut cart = self.load(session_id).await;
        cart.add_item(item);
        self.persist(session_id, &cart).await?;
        debug!(session_id = %session_id, item_id = %item.id, count = cart.total_item_count(), "item added to cart");
        Ok(cart)
    }

    /// Replace a line's quantity (<= 0 removes it) and persist.
    pub async fn set_quantity(
        &self,
        session_id: &Uuid,
        item_id: &Uuid,
        quantity: i64,
    ) -> Result<Cart, RepositoryError> {
        let mut cart = self.load(session_id).await;
        cart.set_quantity(item_id, quantity);
        self.persist(session_id, &cart).await?;
        Ok(cart)
    }

    /// Remove a line and persist.
    pub async fn remove_item(
        &self,
        session_id: &Uuid,
        item_id: &Uuid,
    ) -> Result<Cart, RepositoryError> {
        let mut cart = self.load(session_id).await;
        cart.remove_item(item_id);
        self.persist(session_id, &cart).await?;
        Ok(cart)
    }

    /// Empty the cart and persist the empty snapshot.
    pub async fn clear(&self, session_id: &Uuid) -> Result<Cart, RepositoryError> {
        let mut cart = self.load(session_id).await;
        cart.clear();
        self.persist(session_id, &cart).await?;
        debug!(session_id = %session_id, "cart cleared");
        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory KvStore for exercising the service without a database.
    #[derive(Default)]
    struct MemoryKv {
        entries: Mutex<HashMap<(Uuid, String), serde_json::Value>>,
    }

    impl KvStore for MemoryKv {
        async fn get(
            &self,
            session_id: &Uuid,
            key: &str,
        ) -> Result<Option<serde_json::Value>, RepositoryError> {
            let entries = self.entries.lock().unwrap();
            Ok(entries.get(&(*session_id, key.to_string())).cloned())
        }

        async fn set(
            &self,
            session_id: &Uuid,
            key: &str,
            value: &serde_json::Value,
        ) -> Result<(), RepositoryError> {
            let mut entries = self.entries.lock().unwrap();
            entries.insert((*session_id, key.to_string()), value.clone());
            Ok(())
        }

        async fn delete(&self, session_id: &Uuid, key: &str) -> Result<(), RepositoryError> {
            let mut entries = self.entries.lock().unwrap();
            entries.remove(&(*session_id, key.to_string()));
            Ok(())
        }
    }

    fn item(name: &str, price: i64) -> MenuItem {
        MenuItem {
            id: Uuid::now_v7(),
            name: name.to_string(),
            description: String::new(),
            price: Decimal::from(price),
            image_url: String::new(),
            category: "lunch".to_string(),
            is_available: true,
            is_featured: false,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_mutations_are_mirrored_to_storage() {
        let service = CartService::new(MemoryKv::default());
        let session = Uuid::now_v7();
        let a = item("a", 100);

        service.add_item(&session, &a).await.unwrap();
        service.add_item(&session, &a).await.unwrap();

        // A fresh load sees the persisted snapshot, not in-memory state.
        let cart = service.load(&session).await;
        assert_eq!(cart.total_item_count(), 2);
        assert_eq!(cart.total_price(), Decimal::from(200));
    }

    #[tokio::test]
    async fn test_load_with_no_snapshot_is_empty() {
        let service = CartService::new(MemoryKv::default());
        let cart = service.load(&Uuid::now_v7()).await;
        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn test_load_with_corrupt_snapshot_is_empty() {
        let kv = MemoryKv::default();
        let session = Uuid::now_v7();
        kv.set(&session, CART_STORAGE_KEY, &serde_json::json!("not an array"))
            .await
            .unwrap();

        let service = CartService::new(kv);
        assert!(service.load(&session).await.is_empty());
    }

    #[tokio::test]
    async fn test_clear_persists_empty_array() {
        let service = CartService::new(MemoryKv::default());
        let session = Uuid::now_v7();
        service.add_item(&session, &item("a", 100)).await.unwrap();
        service.clear(&session).await.unwrap();

        let snapshot = service.kv.get(&session, CART_STORAGE_KEY).await.unwrap();
        assert_eq!(snapshot, Some(serde_json::json!([])));
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let service = CartService::new(MemoryKv::default());
        let first = Uuid::now_v7();
        let second = Uuid::now_v7();
        service.add_item(&first, &item("a", 100)).await.unwrap();

        assert!(service.load(&second).await.is_empty());
        assert_eq!(service.load(&first).await.total_item_count(), 1);
    }
}
