use crate::config::CheckerConfig;
use crate::core::filter::available_slots;
use crate::core::report::format_destination;
use crate::core::{AvailabilityReport, FareSource, Notifier, RunSummary};
use crate::utils::error::Result;

/// One pass over every configured destination, then at most one email.
pub struct SnapChecker<S: FareSource, N: Notifier> {
    config: CheckerConfig,
    source: S,
    notifier: N,
}

impl<S: FareSource, N: Notifier> SnapChecker<S, N> {
    pub fn new(config: CheckerConfig, source: S, notifier: N) -> Self {
        Self {
            config,
            source,
            notifier,
        }
    }

    /// Fetch failures are logged and skipped. Only a failed send is returned
    /// as an error.
    pub async fn run(&self) -> Result<RunSummary> {
        tracing::info!(
            "Checking Snap availability from {} on {} ({} destinations)",
            self.config.origin.name,
            self.config.outbound_date,
            self.config.destinations.len()
        );

        let mut summary = RunSummary::default();
        let mut report = AvailabilityReport::new();

        for destination in &self.config.destinations {
            tracing::info!("Checking {} ({})", destination.name, destination.code);

            let slots = match self.source.fetch_time_slots(&destination.code).await {
                Ok(slots) => slots,
                Err(e) => {
                    tracing::error!(
                        "Skipping {}: {} (Category: {:?})",
                        destination.name,
                        e,
                        e.category()
                    );
                    summary.destinations_failed += 1;
                    continue;
                }
            };
            summary.destinations_checked += 1;

            let available = available_slots(&slots);
            if available.is_empty() {
                tracing::info!(
                    "No available tickets for {} ({} slots listed)",
                    destination.name,
                    slots.len()
                );
                continue;
            }

            tracing::info!(
                "Found {} available slot(s) for {}",
                available.len(),
                destination.name
            );
            summary.available_slots += available.len();
            report.extend(format_destination(
                &self.config.origin.name,
                &destination.name,
                &available,
                &self.config.currency_symbol,
            ));
        }

        if report.is_empty() {
            tracing::info!("No available tickets found at this time");
        } else {
            tracing::debug!("Report:\n{}", report.body());
            self.notifier
                .send(&self.config.subject, &report.body())
                .await?;
            summary.notified = true;
            tracing::info!("Notification email sent");
        }

        tracing::info!(
            "Run finished: {} checked, {} failed, {} available slot(s), notified: {}",
            summary.destinations_checked,
            summary.destinations_failed,
            summary.available_slots,
            summary.notified
        );

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{DepartureWindow, Destination, DisplayPrice, FareInfo, Prices, TimeSlot};
    use crate::utils::error::CheckerError;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    /// Fare source answering from a fixed table; unknown codes fail like a 500.
    struct StubSource {
        slots: HashMap<String, Vec<TimeSlot>>,
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl StubSource {
        fn new(entries: Vec<(&str, Vec<TimeSlot>)>) -> Self {
            Self {
                slots: entries
                    .into_iter()
                    .map(|(code, slots)| (code.to_string(), slots))
                    .collect(),
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait]
    impl FareSource for StubSource {
        async fn fetch_time_slots(&self, destination_code: &str) -> Result<Vec<TimeSlot>> {
            self.calls.lock().unwrap().push(destination_code.to_string());
            self.slots
                .get(destination_code)
                .cloned()
                .ok_or_else(|| CheckerError::HttpStatusError {
                    status: 500,
                    url: format!("stub://{}", destination_code),
                })
        }
    }

    #[derive(Clone, Default)]
    struct RecordingNotifier {
        sent: Arc<Mutex<Vec<(String, String)>>>,
        fail: bool,
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn send(&self, subject: &str, body: &str) -> Result<()> {
            if self.fail {
                let unsendable = lettre::Message::builder()
                    .body(body.to_string())
                    .unwrap_err();
                return Err(unsendable.into());
            }
            self.sent
                .lock()
                .unwrap()
                .push((subject.to_string(), body.to_string()));
            Ok(())
        }
    }

    fn available(price: &str) -> TimeSlot {
        TimeSlot {
            departure_window: Some(DepartureWindow {
                earliest: Some("2025-10-22 09:15".to_string()),
                latest: Some("2025-10-22 09:45".to_string()),
            }),
            fare: Some(FareInfo {
                prices: Some(Prices {
                    display_price: Some(DisplayPrice::Text(price.to_string())),
                }),
            }),
        }
    }

    fn sold_out() -> TimeSlot {
        TimeSlot {
            departure_window: None,
            fare: None,
        }
    }

    fn config_for(destinations: &[(&str, &str)]) -> CheckerConfig {
        CheckerConfig {
            destinations: destinations
                .iter()
                .map(|(name, code)| Destination::new(*name, *code))
                .collect(),
            ..CheckerConfig::default()
        }
    }

    #[tokio::test]
    async fn test_no_available_slots_sends_nothing() {
        let source = StubSource::new(vec![
            ("1", vec![sold_out(), sold_out()]),
            ("2", vec![]),
        ]);
        let notifier = RecordingNotifier::default();
        let checker = SnapChecker::new(
            config_for(&[("Lille", "1"), ("Brussels", "2")]),
            source,
            notifier.clone(),
        );

        let summary = checker.run().await.unwrap();

        assert!(!summary.notified);
        assert_eq!(summary.destinations_checked, 2);
        assert_eq!(summary.available_slots, 0);
        assert!(notifier.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_header_only_for_destinations_with_slots() {
        let source = StubSource::new(vec![
            ("1", vec![sold_out(), available("42")]),
            ("2", vec![sold_out()]),
        ]);
        let notifier = RecordingNotifier::default();
        let checker = SnapChecker::new(
            config_for(&[("Lille", "1"), ("Brussels", "2")]),
            source,
            notifier.clone(),
        );

        let summary = checker.run().await.unwrap();
        assert!(summary.notified);
        assert_eq!(summary.available_slots, 1);

        let sent = notifier.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        let (subject, body) = &sent[0];
        assert_eq!(subject, "Eurostar Snap Tickets Available!");
        assert_eq!(
            body,
            "Found 1 available slot(s) for London to Lille:\n  - Window: 09:15 - 09:45, Price: £42"
        );
        assert!(!body.contains("Brussels"));
    }

    #[tokio::test]
    async fn test_fetch_failure_does_not_stop_the_run() {
        let source = StubSource::new(vec![("lille", vec![available("55")])]);
        let calls = source.calls.clone();
        let notifier = RecordingNotifier::default();
        let checker = SnapChecker::new(
            config_for(&[("Amsterdam", "ams"), ("Lille", "lille")]),
            source,
            notifier.clone(),
        );

        let summary = checker.run().await.unwrap();

        assert_eq!(*calls.lock().unwrap(), vec!["ams".to_string(), "lille".to_string()]);
        assert_eq!(summary.destinations_failed, 1);
        assert_eq!(summary.destinations_checked, 1);

        let sent = notifier.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].1.contains("London to Lille"));
        assert!(!sent[0].1.contains("Amsterdam"));
    }

    #[tokio::test]
    async fn test_report_follows_configured_order() {
        let source = StubSource::new(vec![
            ("p", vec![available("30")]),
            ("b", vec![available("31"), available("32")]),
        ]);
        let notifier = RecordingNotifier::default();
        let checker = SnapChecker::new(
            config_for(&[("Paris", "p"), ("Brussels", "b")]),
            source,
            notifier.clone(),
        );

        checker.run().await.unwrap();

        let sent = notifier.sent.lock().unwrap();
        let lines: Vec<&str> = sent[0].1.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Found 1 available slot(s) for London to Paris:");
        assert_eq!(lines[2], "Found 2 available slot(s) for London to Brussels:");
    }

    #[tokio::test]
    async fn test_send_failure_is_returned() {
        let source = StubSource::new(vec![("1", vec![available("42")])]);
        let notifier = RecordingNotifier {
            fail: true,
            ..RecordingNotifier::default()
        };
        let checker = SnapChecker::new(config_for(&[("Lille", "1")]), source, notifier);

        assert!(checker.run().await.is_err());
    }
}
