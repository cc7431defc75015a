//! Pocket Shop Core - Shared domain types.
//!
//! This crate provides the domain model used by the web binary:
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and prices
//! - [`catalog`] - The fixed demo product catalog
//! - [`cart`] - Session cart contents and mutation rules
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no database
//! access, no HTTP. This keeps it lightweight and allows it to be tested
//! without a running server.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod types;

pub use cart::Cart;
pub use catalog::{Catalog, Product};
pub use types::*;
