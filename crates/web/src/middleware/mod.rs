//! Tower middleware for the shop.

pub mod session;

pub use session::create_session_layer;
