//! Typed resource APIs
//!
//! One small accessor struct per backend resource, borrowed from
//! [`GymClient`](crate::GymClient). Lists and records come back normalized.

pub mod assets;
pub mod directory;
pub mod experience;
pub mod facilities;
pub mod followups;
pub mod leads;
pub mod payroll;
pub mod production;
pub mod staff;
pub mod transactions;
pub mod vouchers;
pub mod workflows;

pub use assets::AssetsApi;
pub use directory::DirectoryApi;
pub use experience::ExperienceApi;
pub use facilities::FacilitiesApi;
pub use followups::FollowUpsApi;
pub use leads::LeadsApi;
pub use payroll::PayrollApi;
pub use production::ProductionApi;
pub use staff::StaffApi;
pub use transactions::TransactionsApi;
pub use vouchers::{PaymentVouchersApi, ReceiptVouchersApi};
pub use workflows::WorkflowsApi;

/// `base/id`
pub(crate) fn item_path(base: &str, id: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), id)
}
