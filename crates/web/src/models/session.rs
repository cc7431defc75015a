//! Session-related types.
//!
//! The only state this shop keeps in the session is the cart. An absent
//! key means an empty cart, never an error.

/// Session keys for shop data.
pub mod keys {
    /// Key for storing the cart mapping (product ID -> quantity).
    pub const CART: &str = "cart";
}
