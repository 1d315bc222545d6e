//! Clients domain module.
//!
//! Client records and the directory used to resolve them when invoices are
//! drafted, implemented purely as deterministic domain logic (no IO, no HTTP,
//! no storage).

pub mod client;
pub mod directory;

pub use client::{Client, RegisterClient, UpdateClient};
pub use directory::ClientDirectory;
