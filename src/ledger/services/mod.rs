//! Application services for task ledger orchestration.

mod ledger;

pub use ledger::{
    LedgerError, LedgerResult, OpenTaskPolicy, StartTaskRequest, TaskLedgerService,
};
