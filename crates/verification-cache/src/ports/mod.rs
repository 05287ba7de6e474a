//! # Ports Layer
//!
//! Trait definitions for the hexagonal architecture.
//!
//! - **Inbound** (`inbound.rs`): the capability every cached checker offers
//! - **Outbound** (`outbound.rs`): the cryptographic primitives checkers call
//!   on a cache miss

pub mod inbound;
pub mod outbound;
