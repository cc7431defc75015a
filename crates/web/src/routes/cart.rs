//! Cart route handlers.
//!
//! Cart mutations are HTMX fragments: each response re-renders the cart
//! badge and carries an out-of-band span so the mutated product's quantity
//! updates in the same round trip.
//!
//! The cart itself lives in the session; this module is the only place
//! that reads or writes it.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use tower_sessions::Session;
use tracing::instrument;

use pocket_shop_core::{Cart, Catalog, ProductId};

use crate::error::Result;
use crate::models::session::keys;
use crate::state::AppState;

/// Cart badge fragment template (badge + OOB product quantity).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_badge.html")]
pub struct CartBadgeTemplate {
    pub cart_count: u32,
    pub product_id: i32,
    pub product_qty: u32,
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Load the session's cart, defaulting to empty when absent.
pub(crate) async fn load_cart(session: &Session) -> Result<Cart> {
    Ok(session.get::<Cart>(keys::CART).await?.unwrap_or_default())
}

/// Persist the cart back to the session.
async fn save_cart(session: &Session, cart: &Cart) -> Result<()> {
    session.insert(keys::CART, cart).await?;
    Ok(())
}

// =============================================================================
// Mutation Rules
// =============================================================================

/// Add one unit if the product exists in the catalog.
///
/// Unknown product IDs are a silent no-op. Returns whether the cart changed.
fn apply_add(cart: &mut Cart, catalog: &Catalog, id: ProductId) -> bool {
    if catalog.contains(id) {
        cart.add(id);
        true
    } else {
        false
    }
}

/// Remove one unit if the product is in the cart.
///
/// Absent products are a no-op. Returns whether the cart changed.
fn apply_remove(cart: &mut Cart, id: ProductId) -> bool {
    if cart.quantity(id) > 0 {
        cart.remove(id);
        true
    } else {
        false
    }
}

/// Build the badge fragment for the current cart and mutated product.
fn badge(cart: &Cart, id: ProductId) -> CartBadgeTemplate {
    CartBadgeTemplate {
        cart_count: cart.total_count(),
        product_id: id.as_i32(),
        product_qty: cart.quantity(id),
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Add one unit of a product to the cart (HTMX fragment).
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Path(product_id): Path<i32>,
) -> Result<CartBadgeTemplate> {
    let id = ProductId::new(product_id);
    let mut cart = load_cart(&session).await?;

    if apply_add(&mut cart, state.catalog(), id) {
        save_cart(&session, &cart).await?;
    } else {
        tracing::debug!(%id, "ignoring add for unknown product");
    }

    Ok(badge(&cart, id))
}

/// Remove one unit of a product from the cart (HTMX fragment).
#[instrument(skip(state, session))]
pub async fn remove(
    State(state): State<AppState>,
    session: Session,
    Path(product_id): Path<i32>,
) -> Result<CartBadgeTemplate> {
    let id = ProductId::new(product_id);
    let mut cart = load_cart(&session).await?;

    if apply_remove(&mut cart, id) {
        save_cart(&session, &cart).await?;
    }

    Ok(badge(&cart, id))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use tower_sessions::MemoryStore;

    use super::*;

    fn test_session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    #[tokio::test]
    async fn test_fresh_session_yields_empty_cart() {
        let session = test_session();
        let cart = load_cart(&session).await.unwrap();
        assert!(cart.is_empty());
        assert_eq!(cart.total_count(), 0);
    }

    #[tokio::test]
    async fn test_cart_round_trips_through_session() {
        let session = test_session();
        let catalog = Catalog::demo();

        let mut cart = load_cart(&session).await.unwrap();
        assert!(apply_add(&mut cart, &catalog, ProductId::new(2)));
        assert!(apply_add(&mut cart, &catalog, ProductId::new(2)));
        save_cart(&session, &cart).await.unwrap();

        let reloaded = load_cart(&session).await.unwrap();
        assert_eq!(reloaded, cart);
        assert_eq!(reloaded.quantity(ProductId::new(2)), 2);
        assert_eq!(reloaded.total_count(), 2);
    }

    #[tokio::test]
    async fn test_unknown_product_add_leaves_session_cart_unchanged() {
        let session = test_session();
        let catalog = Catalog::demo();

        let mut cart = load_cart(&session).await.unwrap();
        apply_add(&mut cart, &catalog, ProductId::new(1));
        save_cart(&session, &cart).await.unwrap();

        let mut cart = load_cart(&session).await.unwrap();
        assert!(!apply_add(&mut cart, &catalog, ProductId::new(99)));

        let reloaded = load_cart(&session).await.unwrap();
        assert_eq!(reloaded.quantity(ProductId::new(1)), 1);
        assert_eq!(reloaded.quantity(ProductId::new(99)), 0);
        assert_eq!(reloaded.total_count(), 1);
    }

    #[test]
    fn test_add_known_product() {
        let catalog = Catalog::demo();
        let mut cart = Cart::new();
        let id = ProductId::new(2);

        assert!(apply_add(&mut cart, &catalog, id));
        assert_eq!(cart.quantity(id), 1);
        assert_eq!(cart.total_count(), 1);
    }

    #[test]
    fn test_add_unknown_product_leaves_cart_unchanged() {
        let catalog = Catalog::demo();
        let mut cart = Cart::new();
        cart.add(ProductId::new(1));
        let before = cart.clone();

        assert!(!apply_add(&mut cart, &catalog, ProductId::new(99)));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_absent_product_is_noop() {
        let mut cart = Cart::new();
        assert!(!apply_remove(&mut cart, ProductId::new(3)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_badge_reflects_cart_and_product() {
        let catalog = Catalog::demo();
        let mut cart = Cart::new();
        let id = ProductId::new(2);
        apply_add(&mut cart, &catalog, id);
        apply_add(&mut cart, &catalog, id);
        apply_add(&mut cart, &catalog, ProductId::new(3));

        let fragment = badge(&cart, id);
        assert_eq!(fragment.cart_count, 3);
        assert_eq!(fragment.product_id, 2);
        assert_eq!(fragment.product_qty, 2);
    }

    #[test]
    fn test_badge_for_unknown_product_shows_zero_quantity() {
        let cart = Cart::new();
        let fragment = badge(&cart, ProductId::new(99));
        assert_eq!(fragment.cart_count, 0);
        assert_eq!(fragment.product_qty, 0);
    }
}
