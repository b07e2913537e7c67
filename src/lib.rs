pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{HttpFareSource, SmtpNotifier};
pub use config::{CheckerConfig, SenderCredentials, SmtpSettings};
pub use core::checker::SnapChecker;
pub use domain::model::{AvailabilityReport, Destination, RunSummary, TimeSlot};
pub use utils::error::{CheckerError, Result};
