//! # Cart Store
//!
//! The persisted cart repository: every operation reads the whole line
//! collection, applies a pure mutation from `serendib-core`, writes the
//! whole collection back, and then notifies observers.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operation                                 │
//! │                                                                         │
//! │  add_to_cart / remove_from_cart / set_qty / clear_cart                  │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  read cart_v1 ──(missing/malformed)──► empty cart, warn!                │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  pure Cart mutation ──(no change)──► done, nothing persisted            │
//! │        │ changed                                                        │
//! │        ▼                                                                │
//! │  write cart_v1 (single atomic replace of the whole collection)          │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  notify observers(total_quantity)  ◄── badge projection hangs here     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Read-modify-write with no isolation is deliberate: there is exactly one
//! logical actor per store, so the last writer wins and nothing conflicts.

use serendib_core::{Cart, CartLine, CartSnapshot, Catalog};
use tracing::{debug, warn};

use crate::error::StoreResult;
use crate::storage::KeyValueStorage;

/// Storage key for the serialized cart line collection.
///
/// Versioned so a future format change can migrate instead of misparsing;
/// matches the key the storefront frontend already uses.
pub const CART_KEY: &str = "cart_v1";

/// Receives a notification after every successful cart mutation.
///
/// This is the seam the spec's redesign carved out of the original's
/// side-effecting mutators: state mutation is a pure function in the core,
/// and projection (the badge) is an explicit callback here.
pub trait CartObserver {
    /// Called with the new total quantity across all lines.
    fn cart_changed(&self, total_quantity: u64);
}

/// Persisted cart over a [`KeyValueStorage`] backend.
pub struct CartStore<S: KeyValueStorage> {
    storage: S,
    catalog: Catalog,
    observers: Vec<Box<dyn CartObserver>>,
}

impl<S: KeyValueStorage> CartStore<S> {
    /// Creates a store over `storage`, resolving products against `catalog`.
    pub fn new(storage: S, catalog: Catalog) -> Self {
        CartStore {
            storage,
            catalog,
            observers: Vec::new(),
        }
    }

    /// Registers an observer notified after every successful mutation.
    pub fn register_observer(&mut self, observer: Box<dyn CartObserver>) {
        self.observers.push(observer);
    }

    /// The catalog this store resolves against.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Reads the current persisted cart.
    ///
    /// Strict typed deserialization of the stored payload; any storage-read
    /// or decode failure degrades to an empty cart (logged, never surfaced),
    /// and line quantities are clamped to the >= 1 invariant in case the
    /// payload predates it.
    pub fn cart(&self) -> Cart {
        let raw = match self.storage.get(CART_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Cart::new(),
            Err(err) => {
                warn!(%err, "cart storage read failed, treating as empty");
                return Cart::new();
            }
        };

        match serde_json::from_str::<Vec<CartLine>>(&raw) {
            Ok(mut lines) => {
                for line in &mut lines {
                    line.qty = line.qty.max(1);
                }
                Cart::from_lines(lines)
            }
            Err(err) => {
                warn!(%err, "malformed cart data, treating as empty");
                Cart::new()
            }
        }
    }

    /// Derives the resolved snapshot of the current cart.
    pub fn summary(&self) -> CartSnapshot {
        self.cart().summarize(&self.catalog)
    }

    /// Total quantity across all lines (what the badge shows).
    pub fn total_quantity(&self) -> u64 {
        self.cart().total_quantity()
    }

    /// Adds `qty` of a product; unknown ids are silently ignored.
    pub fn add_to_cart(&mut self, product_id: &str, qty: u32) -> StoreResult<()> {
        debug!(product_id, qty, "add_to_cart");
        self.mutate(|cart, catalog| cart.add(catalog, product_id, qty))
    }

    /// Adds a single unit of a product (the storefront's click-to-add path).
    pub fn add_one(&mut self, product_id: &str) -> StoreResult<()> {
        self.add_to_cart(product_id, 1)
    }

    /// Removes the line for `product_id`; absent lines are a no-op.
    pub fn remove_from_cart(&mut self, product_id: &str) -> StoreResult<()> {
        debug!(product_id, "remove_from_cart");
        self.mutate(|cart, _| cart.remove(product_id))
    }

    /// Replaces a line's quantity (clamped to >= 1); absent lines no-op.
    pub fn set_qty(&mut self, product_id: &str, qty: u32) -> StoreResult<()> {
        debug!(product_id, qty, "set_qty");
        self.mutate(|cart, _| cart.set_qty(product_id, qty))
    }

    /// Replaces the collection with an empty one.
    pub fn clear_cart(&mut self) -> StoreResult<()> {
        debug!("clear_cart");
        self.mutate(|cart, _| cart.clear())
    }

    /// Re-projects the current count to all observers without mutating.
    ///
    /// The view-load analog: run once after wiring up surfaces so badges
    /// show the persisted cart before any interaction.
    pub fn refresh_badges(&self) {
        self.notify(self.total_quantity());
    }

    /// Read-modify-write helper: persists and notifies only when the pure
    /// mutation reports a change.
    fn mutate<F>(&mut self, f: F) -> StoreResult<()>
    where
        F: FnOnce(&mut Cart, &Catalog) -> bool,
    {
        let mut cart = self.cart();
        if !f(&mut cart, &self.catalog) {
            return Ok(());
        }

        let payload = serde_json::to_string(cart.lines())?;
        self.storage.set(CART_KEY, &payload)?;
        self.notify(cart.total_quantity());
        Ok(())
    }

    fn notify(&self, total_quantity: u64) {
        for observer in &self.observers {
            observer.cart_changed(total_quantity);
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct RecordingObserver {
        counts: Rc<RefCell<Vec<u64>>>,
    }

    impl CartObserver for RecordingObserver {
        fn cart_changed(&self, total_quantity: u64) {
            self.counts.borrow_mut().push(total_quantity);
        }
    }

    fn store() -> CartStore<MemoryStorage> {
        CartStore::new(MemoryStorage::new(), Catalog::builtin())
    }

    #[test]
    fn test_add_merges_and_persists() {
        let mut store = store();
        store.add_to_cart("netflix", 2).unwrap();
        store.add_to_cart("netflix", 3).unwrap();

        let cart = store.cart();
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].qty, 5);
    }

    #[test]
    fn test_add_unknown_product_leaves_storage_untouched() {
        let mut store = store();
        store.add_to_cart("unknown-id", 1).unwrap();

        assert!(store.cart().is_empty());
        // Nothing was ever written under the cart key
        assert_eq!(store.storage.get(CART_KEY).unwrap(), None);
    }

    #[test]
    fn test_persisted_payload_shape() {
        let mut store = store();
        store.add_to_cart("netflix", 2).unwrap();

        let raw = store.storage.get(CART_KEY).unwrap().unwrap();
        assert_eq!(raw, r#"[{"productId":"netflix","qty":2}]"#);
    }

    #[test]
    fn test_malformed_payload_reads_as_empty() {
        let mut store = store();
        store.storage.set(CART_KEY, "not json at all").unwrap();
        assert!(store.cart().is_empty());

        store.storage.set(CART_KEY, r#"{"productId":"netflix"}"#).unwrap();
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_stored_zero_qty_clamped_on_read() {
        let mut store = store();
        store
            .storage
            .set(CART_KEY, r#"[{"productId":"netflix","qty":0}]"#)
            .unwrap();
        assert_eq!(store.cart().lines()[0].qty, 1);
    }

    #[test]
    fn test_set_qty_and_remove() {
        let mut store = store();
        store.add_to_cart("netflix", 1).unwrap();
        store.add_to_cart("ai", 1).unwrap();

        store.set_qty("netflix", 4).unwrap();
        assert_eq!(store.cart().lines()[0].qty, 4);

        store.set_qty("netflix", 0).unwrap();
        assert_eq!(store.cart().lines()[0].qty, 1);

        store.remove_from_cart("ai").unwrap();
        assert_eq!(store.cart().lines().len(), 1);

        // Nonexistent remove: unchanged, no error
        store.remove_from_cart("linkedin").unwrap();
        assert_eq!(store.cart().lines().len(), 1);
    }

    #[test]
    fn test_clear_cart() {
        let mut store = store();
        store.add_to_cart("netflix", 2).unwrap();
        store.clear_cart().unwrap();

        assert!(store.cart().is_empty());
        assert_eq!(store.storage.get(CART_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_summary_totals() {
        let mut store = store();
        store.add_to_cart("netflix", 2).unwrap();
        store.add_to_cart("ai", 1).unwrap();

        let snapshot = store.summary();
        assert_eq!(snapshot.total.rupees(), 9500);
        // Idempotent without intervening mutation
        assert_eq!(store.summary(), snapshot);
    }

    #[test]
    fn test_observers_fire_only_on_real_changes() {
        let counts = Rc::new(RefCell::new(Vec::new()));
        let mut store = store();
        store.register_observer(Box::new(RecordingObserver {
            counts: Rc::clone(&counts),
        }));

        store.add_to_cart("netflix", 2).unwrap();
        store.add_to_cart("unknown-id", 1).unwrap(); // no-op, no notification
        store.set_qty("netflix", 5).unwrap();
        store.remove_from_cart("netflix").unwrap();

        assert_eq!(*counts.borrow(), vec![2, 5, 0]);
    }

    #[test]
    fn test_refresh_badges_projects_current_count() {
        let counts = Rc::new(RefCell::new(Vec::new()));
        let mut store = store();
        store.add_to_cart("linkedin", 3).unwrap();

        store.register_observer(Box::new(RecordingObserver {
            counts: Rc::clone(&counts),
        }));
        store.refresh_badges();

        assert_eq!(*counts.borrow(), vec![3]);
    }
}
