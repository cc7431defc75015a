//! Model types for the web layer.

pub mod session;
