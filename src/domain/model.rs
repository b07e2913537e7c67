use serde::{Deserialize, Serialize};
use std::fmt;

/// A station the fare API knows by an opaque code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub name: String,
    pub code: String,
}

impl Destination {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub departure_window: Option<DepartureWindow>,
    pub fare: Option<FareInfo>,
}

impl TimeSlot {
    /// A slot is bookable only while a fare is attached to it.
    pub fn is_available(&self) -> bool {
        self.fare.is_some()
    }
}

/// Both bounds are `"<date> <time>"` strings as sent by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DepartureWindow {
    pub earliest: Option<String>,
    pub latest: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FareInfo {
    pub prices: Option<Prices>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prices {
    pub display_price: Option<DisplayPrice>,
}

/// The API has been seen sending prices both as text and as numbers. Any
/// other shape is kept as raw JSON so one odd slot cannot fail the list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DisplayPrice {
    Text(String),
    Number(serde_json::Number),
    Other(serde_json::Value),
}

impl fmt::Display for DisplayPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayPrice::Text(text) => f.write_str(text),
            DisplayPrice::Number(number) => write!(f, "{}", number),
            DisplayPrice::Other(value) => write!(f, "{}", value),
        }
    }
}

/// Lines collected over one run, grouped per destination.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AvailabilityReport {
    lines: Vec<String>,
}

impl AvailabilityReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, lines: impl IntoIterator<Item = String>) {
        self.lines.extend(lines);
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[cfg(test)]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn body(&self) -> String {
        self.lines.join("\n")
    }
}

/// What a single pass over the destinations produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub destinations_checked: usize,
    pub destinations_failed: usize,
    pub available_slots: usize,
    pub notified: bool,
}
