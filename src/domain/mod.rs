pub mod common;
pub mod ledger;
pub mod plan;
pub mod record;

pub use common::{Displayable, Identifiable};
pub use ledger::{Ledger, TrashBin};
pub use plan::{Plan, PlanDraft, PlanStatus};
pub use record::{Record, RecordDraft, RecordKind};
