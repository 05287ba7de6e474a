//! # Domain Layer
//!
//! Verification requests, cache entries, configuration and the ECDSA
//! primitive. No locking and no I/O.

pub mod config;
pub mod ecdsa;
pub mod entities;
pub mod entry;
pub mod errors;
