use crate::adapters::{HttpFareSource, SmtpNotifier};
use crate::config::{CheckerConfig, SenderCredentials, SmtpSettings};
use crate::core::checker::SnapChecker;
use crate::core::{FareSource, Notifier, RunSummary};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// Pre-flight first (config, credentials, notifier), then the scan. Nothing
/// touches `source` unless pre-flight succeeds.
pub async fn run_once<S, N, L, F>(
    config: CheckerConfig,
    env_lookup: L,
    source: S,
    make_notifier: F,
) -> Result<RunSummary>
where
    S: FareSource,
    N: Notifier,
    L: Fn(&str) -> Option<String>,
    F: FnOnce(&SmtpSettings, &SenderCredentials) -> Result<N>,
{
    config.validate()?;
    let credentials = SenderCredentials::from_lookup(env_lookup)?;
    tracing::debug!("Sender credentials loaded: {:?}", credentials);
    let notifier = make_notifier(&config.smtp, &credentials)?;

    SnapChecker::new(config, source, notifier).run().await
}

/// The real thing: HTTP fare lookups, SMTP notifications, process environment.
pub async fn run_from_env(config: CheckerConfig) -> Result<RunSummary> {
    let source = HttpFareSource::new(config.clone())?;
    run_once(
        config,
        |name| std::env::var(name).ok(),
        source,
        SmtpNotifier::new,
    )
    .await
}
