//! Domain model for the task ledger.
//!
//! The ledger domain models open/closed work intervals and the date window
//! used for effort reporting, keeping all infrastructure concerns outside
//! of the domain boundary.

mod error;
mod ids;
mod task;
mod window;

pub use error::LedgerDomainError;
pub use ids::TaskId;
pub use task::{PersistedTaskData, Task};
pub use window::ReportWindow;
