//! # serendib-store: Persistence and Projection for Serendib Shop
//!
//! Everything stateful lives here: the key-value storage seam standing in
//! for browser `localStorage`, the persisted cart repository, the cart-count
//! badge projection, and theme persistence.
//!
//! ## Layering
//! ```text
//! serendib_store/
//! ├── lib.rs          ◄─── You are here (exports)
//! ├── storage.rs      ◄─── KeyValueStorage trait, MemoryStorage, FileStorage
//! ├── cart_store.rs   ◄─── Persisted cart: mutators, recovery, observers
//! ├── badge.rs        ◄─── Cart-count projection onto display surfaces
//! ├── theme_store.rs  ◄─── Theme load/apply/toggle persistence
//! └── error.rs        ◄─── StoreError
//! ```
//!
//! ## Execution Model
//! Single-threaded, synchronous, user-initiated actions only. Each store
//! operation is a whole-collection read-modify-write; there is exactly one
//! logical actor, so no locking and no transactional isolation. Cross-process
//! concurrent mutation is last-writer-wins by design.

pub mod badge;
pub mod cart_store;
pub mod error;
pub mod storage;
pub mod theme_store;

pub use badge::{BadgeSurface, CartBadge};
pub use cart_store::{CartObserver, CartStore, CART_KEY};
pub use error::{StoreError, StoreResult};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use theme_store::{ThemeStore, ThemeSurface, THEME_KEY};
