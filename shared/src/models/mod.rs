//! Data models
//!
//! Canonical shapes for every backend collection the dashboard reads.
//! Each read model implements [`Normalize`](crate::normalize::Normalize);
//! write payloads (`*Create`, `*Update`) serialize in the casing the
//! corresponding endpoint expects. All IDs are `String` because the
//! backend mixes numeric and string identifiers.

pub mod asset;
pub mod bill;
pub mod booking;
pub mod catalog;
pub mod common;
pub mod facility;
pub mod feedback;
pub mod follow_up;
pub mod lead;
pub mod member;
pub mod payroll;
pub mod production;
pub mod staff;
pub mod transaction;
pub mod voucher;
pub mod workflow;

// Re-exports
pub use asset::*;
pub use bill::*;
pub use booking::*;
pub use catalog::*;
pub use common::*;
pub use facility::*;
pub use feedback::*;
pub use follow_up::*;
pub use lead::*;
pub use member::*;
pub use payroll::*;
pub use production::*;
pub use staff::*;
pub use transaction::*;
pub use voucher::*;
pub use workflow::*;
