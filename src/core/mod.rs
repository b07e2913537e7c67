pub mod checker;
pub mod filter;
pub mod report;

pub use crate::domain::model::{AvailabilityReport, RunSummary, TimeSlot};
pub use crate::domain::ports::{FareSource, Notifier};
pub use crate::utils::error::Result;
