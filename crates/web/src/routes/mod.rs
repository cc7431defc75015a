//! HTTP route handlers for the shop.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                          - Full page (like count, products, cart total)
//! GET  /health                    - Health check (in main.rs)
//!
//! # Fragments (HTMX)
//! GET|POST /like-counter/         - Increment likes, return counter fragment
//! GET  /update-content/           - Random quote/color/timestamp fragment
//! GET  /online-status/            - Random online/offline status fragment
//! GET|POST /cart/add/{id}/        - Add one unit, return badge + OOB qty
//! GET|POST /cart/remove/{id}/     - Remove one unit, return badge + OOB qty
//! ```
//!
//! Mutating routes accept GET as well as POST; the original demo exempted
//! them from CSRF and HTMX issues plain POSTs without a token.

pub mod cart;
pub mod content;
pub mod home;
pub mod likes;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create the cart fragment routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/add/{product_id}/", get(cart::add).post(cart::add))
        .route("/remove/{product_id}/", get(cart::remove).post(cart::remove))
}

/// Create all routes for the shop.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Full page
        .route("/", get(home::index))
        // Fragments
        .route(
            "/like-counter/",
            get(likes::like_counter).post(likes::like_counter),
        )
        .route("/update-content/", get(content::update_content))
        .route("/online-status/", get(content::online_status))
        // Cart fragments
        .nest("/cart", cart_routes())
}
