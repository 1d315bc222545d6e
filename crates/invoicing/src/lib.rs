//! Invoicing domain module.
//!
//! This crate contains the invoice financial model: line-item arithmetic,
//! draft submission, the invoice record and its status commands, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod draft;
pub mod invoice;
pub mod line_item;

pub use draft::{InvoiceDraft, Submission, SubmissionItem, ValidationError, prepare_submission};
pub use invoice::{
    ChangeStatus, Invoice, InvoiceCommand, InvoiceStatus, MarkOverdue, StatusChanged,
    next_invoice_number, overdue_sweep,
};
pub use line_item::{LineItem, LineItemField, invoice_total, update_item};
