//! GymDesk Client - typed HTTP client for the GymDesk backend
//!
//! Every list endpoint is normalized at this boundary: envelope shapes are
//! unwrapped and field aliases resolved, so callers work with the canonical
//! models from `shared::models`.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod loader;
pub mod mutation;
pub mod session;

pub use client::GymClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};
pub use loader::{Degraded, Loaded, SourceFailure, tolerant};
pub use mutation::{Keyed, MutationTicket, OptimisticList};
pub use session::{Session, SessionHandle};
