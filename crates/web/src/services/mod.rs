//! Services for the web layer.

pub mod random;
