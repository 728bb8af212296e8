//! # Cart
//!
//! Pure cart state: line items, mutations, and snapshot derivation.
//!
//! ## Mutation vs Projection
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations Flow                                 │
//! │                                                                         │
//! │  UI Action              Pure Mutation (here)      Store Layer           │
//! │  ─────────              ────────────────────      ───────────           │
//! │                                                                         │
//! │  Click Add ───────────► Cart::add() ────────────► persist + notify     │
//! │  Change Quantity ─────► Cart::set_qty() ────────► persist + notify     │
//! │  Click Remove ────────► Cart::remove() ─────────► persist + notify     │
//! │  Click Clear ─────────► Cart::clear() ──────────► persist + notify     │
//! │  View Cart ───────────► Cart::summarize()         (read only)          │
//! │                                                                         │
//! │  Every mutation returns whether the cart actually changed, so the      │
//! │  store layer only persists and re-projects on real changes.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line per distinct product id (adding merges quantities)
//! - Line quantity is always >= 1 (inputs are clamped, never rejected)
//! - Insertion order is preserved

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::{Catalog, Product};
use crate::money::Money;
use crate::MIN_LINE_QTY;

// =============================================================================
// Cart Line
// =============================================================================

/// One entry in the cart associating a product identifier with a quantity.
///
/// This is exactly the persisted record shape: the serialized form
/// (`{"productId": "...", "qty": n}`) is byte-compatible with what the
/// storefront frontend keeps under its cart storage key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLine {
    /// References a catalog product; lines whose id no longer resolves are
    /// dropped from snapshots but kept in storage.
    pub product_id: String,

    /// Always >= 1.
    pub qty: u32,
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart: an ordered collection of lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Creates a cart from already-validated lines (used by the store layer
    /// after deserializing persisted data).
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        Cart { lines }
    }

    /// Adds a product to the cart or merges into the existing line.
    ///
    /// ## Behavior
    /// - Unknown product id: no-op (silently ignored, per the recovery policy)
    /// - Product already in cart: quantity increases by `qty`
    /// - Otherwise: a new line is appended
    /// - `qty` is clamped to a minimum of 1 and merging saturates instead
    ///   of overflowing; the upstream storefront left this path
    ///   unvalidated, which could corrupt totals - fixed here
    ///
    /// ## Returns
    /// `true` when the cart changed.
    pub fn add(&mut self, catalog: &Catalog, product_id: &str, qty: u32) -> bool {
        if !catalog.contains(product_id) {
            return false;
        }
        let qty = qty.max(MIN_LINE_QTY);

        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.qty = line.qty.saturating_add(qty);
        } else {
            self.lines.push(CartLine {
                product_id: product_id.to_string(),
                qty,
            });
        }
        true
    }

    /// Removes the line for `product_id` if present.
    ///
    /// ## Returns
    /// `true` when a line was removed; removing a nonexistent id is a no-op.
    pub fn remove(&mut self, product_id: &str) -> bool {
        let initial_len = self.lines.len();
        self.lines.retain(|l| l.product_id != product_id);
        self.lines.len() != initial_len
    }

    /// Replaces the quantity of an existing line.
    ///
    /// ## Behavior
    /// - No matching line: no-op
    /// - `qty` is clamped to a minimum of 1 (a zero or coerced-invalid input
    ///   silently becomes 1)
    ///
    /// ## Returns
    /// `true` when the stored quantity changed. Setting a line to the value
    /// it already holds reports `false`, so the store layer neither persists
    /// nor re-projects; the upstream storefront re-projected on every call,
    /// but the resulting state is identical.
    pub fn set_qty(&mut self, product_id: &str, qty: u32) -> bool {
        let qty = qty.max(MIN_LINE_QTY);
        match self.lines.iter_mut().find(|l| l.product_id == product_id) {
            Some(line) if line.qty != qty => {
                line.qty = qty;
                true
            }
            _ => false,
        }
    }

    /// Empties the cart.
    ///
    /// ## Returns
    /// `true` when there was anything to clear.
    pub fn clear(&mut self) -> bool {
        if self.lines.is_empty() {
            return false;
        }
        self.lines.clear();
        true
    }

    /// The raw lines, in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Checks if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total quantity across all lines (the badge count).
    pub fn total_quantity(&self) -> u64 {
        self.lines.iter().map(|l| l.qty as u64).sum()
    }

    /// Derives a resolved, point-in-time view of the cart.
    ///
    /// Each line is resolved against the catalog; lines whose product id no
    /// longer resolves are silently dropped from the snapshot (storage is
    /// untouched). Per-line and aggregate totals are integer math.
    ///
    /// Pure and deterministic: calling this twice without an intervening
    /// mutation yields identical snapshots.
    pub fn summarize(&self, catalog: &Catalog) -> CartSnapshot {
        let lines: Vec<SnapshotLine> = self
            .lines
            .iter()
            .filter_map(|l| {
                catalog.get(&l.product_id).map(|product| SnapshotLine {
                    product_id: l.product_id.clone(),
                    qty: l.qty,
                    line_total: product.price() * l.qty,
                    product: product.clone(),
                })
            })
            .collect();
        let total = lines.iter().map(|l| l.line_total).sum();

        CartSnapshot { lines, total }
    }
}

// =============================================================================
// Cart Snapshot
// =============================================================================

/// One resolved line in a [`CartSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SnapshotLine {
    pub product_id: String,
    pub qty: u32,
    /// Frozen copy of the catalog entry the line resolved to.
    pub product: Product,
    /// price × qty.
    pub line_total: Money,
}

/// A derived, never-persisted view of the cart combined with catalog data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartSnapshot {
    /// Resolved lines, in cart order.
    pub lines: Vec<SnapshotLine>,

    /// Sum of all line totals.
    pub total: Money,
}

impl CartSnapshot {
    /// Checks if the snapshot has zero resolved lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
