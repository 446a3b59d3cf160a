//! Shared types for GymDesk
//!
//! Canonical entity models, the normalizers that adapt loosely-shaped
//! backend JSON into them, response envelopes and money helpers.
//! Used by both `gymdesk-client` and the `gymdesk` aggregation crate.

pub mod models;
pub mod money;
pub mod normalize;
pub mod response;
pub mod util;

// Re-exports
pub use normalize::{Normalize, days_until, format_aed, format_date, parse_currency, parse_currency_str};
pub use response::{ItemEnvelope, ListEnvelope};
pub use serde::{Deserialize, Serialize};
