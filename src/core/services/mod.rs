pub mod plan_service;
pub mod record_service;
pub mod summary_service;
pub mod trash_service;

pub use plan_service::PlanService;
pub use record_service::RecordService;
pub use summary_service::{BalanceStatus, Summary, SummaryService};
pub use trash_service::TrashService;

#[cfg(test)]
mod tests;
