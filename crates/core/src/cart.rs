//! Session cart contents and mutation rules.
//!
//! A cart maps product IDs to quantities. Mutation is expressed as two
//! single-unit primitives (add one / remove one) rather than set-quantity,
//! which rules out negative or zero quantities by construction: a key is
//! present if and only if its quantity is at least 1.
//!
//! Keys are stored as strings so the cart serializes to a plain JSON
//! object inside the session blob.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use serde::{Deserialize, Serialize};

use crate::types::ProductId;

/// Per-session shopping cart: product ID -> quantity.
///
/// Serializes transparently as a JSON object, e.g. `{"2": 1, "3": 4}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: BTreeMap<String, u32>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: BTreeMap::new(),
        }
    }

    /// Add one unit of a product, creating the entry at quantity 1.
    pub fn add(&mut self, id: ProductId) {
        *self.items.entry(id.to_string()).or_insert(0) += 1;
    }

    /// Remove one unit of a product.
    ///
    /// At quantity 1 the entry is deleted rather than stored as zero.
    /// Removing an absent product is a no-op.
    pub fn remove(&mut self, id: ProductId) {
        if let Entry::Occupied(mut entry) = self.items.entry(id.to_string()) {
            if *entry.get() > 1 {
                *entry.get_mut() -= 1;
            } else {
                entry.remove();
            }
        }
    }

    /// Quantity of a product, 0 when absent.
    #[must_use]
    pub fn quantity(&self, id: ProductId) -> u32 {
        self.items.get(&id.to_string()).copied().unwrap_or(0)
    }

    /// Total number of units across all products.
    #[must_use]
    pub fn total_count(&self) -> u32 {
        self.items.values().sum()
    }

    /// Whether the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct products in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}
