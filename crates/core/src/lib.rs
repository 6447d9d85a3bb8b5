//! APA Core - Shared types and cart logic.
//!
//! This crate provides the types used across all APA components:
//! - `apa-store` - JSON-file data store and app state container
//! - `apa-cli` - Command-line access to the store
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no file access,
//! no logging. Cart updates return new values instead of mutating in place.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, prices and quantities
//! - [`document`] - Records mirroring the persisted JSON document
//! - [`catalog`] - Catalog products with resolved images
//! - [`cart`] - The live cart and its update rules
//! - [`share`] - Plain-text cart summaries

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod document;
pub mod share;
pub mod types;

pub use cart::Cart;
pub use catalog::{ImageHandle, Product};
pub use document::{CartLineRecord, Document, LastPurchaseRecord, ProductRecord, SavedCartRecord};
pub use share::share_text;
pub use types::*;
