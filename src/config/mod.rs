pub mod credentials;

use crate::domain::model::Destination;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::time::Duration;
use url::Url;

#[cfg(feature = "cli")]
use clap::Parser;

pub use credentials::SenderCredentials;

pub const DEFAULT_API_BASE: &str = "https://snap.eurostar.com";
pub const DEFAULT_BUILD_ID: &str = "bmR4ZJH0w6ti5FN6-tty8";
pub const DEFAULT_OUTBOUND_DATE: &str = "2025-10-22";
pub const DEFAULT_OUTBOUND_SLOT: &str = "13:00";
pub const DEFAULT_SUBJECT: &str = "Eurostar Snap Tickets Available!";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "snap-watch")]
#[command(about = "Check Eurostar Snap fares and email when any are available")]
pub struct CliConfig {
    #[arg(long, default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS, help = "Per-request HTTP timeout in seconds")]
    pub request_timeout: u64,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
}

impl Default for SmtpSettings {
    fn default() -> Self {
        Self {
            host: "smtp.gmail.com".to_string(),
            port: 465,
        }
    }
}

/// Everything one run needs, built once at startup.
#[derive(Debug, Clone)]
pub struct CheckerConfig {
    pub api_base: String,
    pub build_id: String,
    pub locale: String,
    pub adults: u8,
    pub origin: Destination,
    pub outbound_date: String,
    pub outbound_slot: String,
    pub destinations: Vec<Destination>,
    pub smtp: SmtpSettings,
    pub subject: String,
    pub currency_symbol: String,
    pub request_timeout: Duration,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            build_id: DEFAULT_BUILD_ID.to_string(),
            locale: "uk-en".to_string(),
            adults: 1,
            origin: Destination::new("London", "7015400"),
            outbound_date: DEFAULT_OUTBOUND_DATE.to_string(),
            outbound_slot: DEFAULT_OUTBOUND_SLOT.to_string(),
            destinations: vec![
                Destination::new("Paris", "8727100"),
                Destination::new("Brussels", "8814001"),
                Destination::new("Lille", "8722326"),
                Destination::new("Amsterdam", "8400058"),
                Destination::new("Rotterdam", "8400530"),
            ],
            smtp: SmtpSettings::default(),
            subject: DEFAULT_SUBJECT.to_string(),
            currency_symbol: "£".to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl CheckerConfig {
    #[cfg(feature = "cli")]
    pub fn from_cli(cli: &CliConfig) -> Self {
        Self {
            request_timeout: Duration::from_secs(cli.request_timeout),
            ..Self::default()
        }
    }

    /// Search URL for one destination; every other parameter is fixed by the config.
    pub fn search_url(&self, destination_code: &str) -> Result<Url> {
        let mut url = Url::parse(&format!(
            "{}/_next/data/{}/{}/search.json",
            self.api_base.trim_end_matches('/'),
            self.build_id,
            self.locale
        ))?;

        url.query_pairs_mut()
            .append_pair("adult", &self.adults.to_string())
            .append_pair("origin", &self.origin.code)
            .append_pair("outbound", &self.outbound_date)
            .append_pair("outslot", &self.outbound_slot)
            .append_pair("destination", destination_code);

        Ok(url)
    }
}

impl Validate for CheckerConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api_base", &self.api_base)?;
        validation::validate_non_empty_string("build_id", &self.build_id)?;
        validation::validate_non_empty_string("locale", &self.locale)?;
        validation::validate_range("adults", self.adults, 1, 9)?;
        validation::validate_non_empty_string("origin.code", &self.origin.code)?;
        validation::validate_date("outbound_date", &self.outbound_date)?;
        validation::validate_time_of_day("outbound_slot", &self.outbound_slot)?;

        if self.destinations.is_empty() {
            return Err(crate::utils::error::CheckerError::InvalidConfigValueError {
                field: "destinations".to_string(),
                value: "[]".to_string(),
                reason: "At least one destination is required".to_string(),
            });
        }
        for destination in &self.destinations {
            validation::validate_non_empty_string(
                &format!("destinations.{}.code", destination.name),
                &destination.code,
            )?;
        }

        validation::validate_non_empty_string("smtp.host", &self.smtp.host)?;
        validation::validate_range("smtp.port", self.smtp.port, 1, u16::MAX)?;
        validation::validate_range("request_timeout", self.request_timeout.as_secs(), 1, 300)?;

        Ok(())
    }
}
