//! `invoicer-core` — shared domain building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! record identifiers, the domain error model, money helpers and the lenient
//! decoders used to absorb malformed upstream records.

pub mod entity;
pub mod error;
pub mod id;
pub mod lenient;
pub mod money;

pub use entity::{Entity, find_by_id};
pub use error::{DomainError, DomainResult};
pub use id::{ClientId, InvoiceId};
pub use money::{Currency, parse_decimal, parse_number};
