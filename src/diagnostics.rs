//! Development-time translation completeness monitor.

use lingogi_core::config::DiagnosticsConfig;
use lingogi_i18n::{check_completeness, CompletenessReport, LocaleCatalog};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Runs the completeness checker once per session and after every
/// user-initiated UI language change. Does nothing when disabled.
pub struct CompletenessMonitor {
    catalog: Arc<LocaleCatalog>,
    enabled: bool,
    startup_delay: Duration,
    started: bool,
    startup: Option<JoinHandle<CompletenessReport>>,
}

impl CompletenessMonitor {
    pub fn new(catalog: Arc<LocaleCatalog>, config: &DiagnosticsConfig) -> Self {
        Self {
            catalog,
            enabled: config.check_translations,
            startup_delay: Duration::from_millis(config.startup_delay_ms),
            started: false,
            startup: None,
        }
    }

    /// Schedule the delayed startup check. Only the first call per session
    /// does anything.
    pub fn on_session_start(&mut self) {
        if !self.enabled || self.started {
            return;
        }
        self.started = true;

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!("translation check skipped: no async runtime");
            return;
        };
        let catalog = self.catalog.clone();
        let delay = self.startup_delay;
        self.startup = Some(runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            let report = check_completeness(&catalog);
            report.log();
            report
        }));
        debug!("translation check scheduled in {}ms", delay.as_millis());
    }

    /// Check again right away after the user switched the UI language.
    pub fn on_ui_language_changed(&self) -> Option<CompletenessReport> {
        if !self.enabled {
            return None;
        }
        let report = check_completeness(&self.catalog);
        report.log();
        Some(report)
    }

    /// End of session. Returns the startup report, running the check now
    /// if its delay has not elapsed yet, so every enabled session reports
    /// once however short it is.
    pub async fn finish(&mut self) -> Option<CompletenessReport> {
        let handle = self.startup.take()?;
        if handle.is_finished() {
            match handle.await {
                Ok(report) => return Some(report),
                Err(e) => debug!("translation check did not finish: {e}"),
            }
        } else {
            handle.abort();
            debug!("translation check still pending at shutdown, running it now");
        }
        let report = check_completeness(&self.catalog);
        report.log();
        Some(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lingogi_core::LocaleCode;

    fn monitor(enabled: bool, delay_ms: u64) -> CompletenessMonitor {
        let catalog = Arc::new(LocaleCatalog::embedded(LocaleCode::En).unwrap());
        CompletenessMonitor::new(
            catalog,
            &DiagnosticsConfig {
                check_translations: enabled,
                startup_delay_ms: delay_ms,
            },
        )
    }

    #[tokio::test]
    async fn test_startup_check_runs_once() {
        let mut m = monitor(true, 0);
        m.on_session_start();
        tokio::time::sleep(Duration::from_millis(20)).await;
        let report = m.finish().await.unwrap();
        assert!(!report.missing_for(LocaleCode::Ja).is_empty());

        m.on_session_start();
        assert!(m.finish().await.is_none());
    }

    #[tokio::test]
    async fn test_disabled_monitor_does_nothing() {
        let mut m = monitor(false, 0);
        m.on_session_start();
        assert!(m.finish().await.is_none());
        assert!(m.on_ui_language_changed().is_none());
    }

    #[tokio::test]
    async fn test_language_change_checks_immediately() {
        let m = monitor(true, 60_000);
        let report = m.on_ui_language_changed().unwrap();
        assert_eq!(report.base, LocaleCode::En);
        assert_eq!(m.on_ui_language_changed().unwrap(), report);
    }

    #[tokio::test]
    async fn test_finish_runs_pending_check_without_waiting() {
        let mut m = monitor(true, 60_000);
        m.on_session_start();
        let report = tokio::time::timeout(Duration::from_secs(5), m.finish())
            .await
            .expect("finish must not wait for the startup delay")
            .unwrap();
        assert!(!report.missing_for(LocaleCode::Fr).is_empty());
        assert!(m.finish().await.is_none());
    }

    #[test]
    fn test_no_runtime_skips_startup_check() {
        let mut m = monitor(true, 0);
        m.on_session_start();
        assert!(m.startup.is_none());
    }
}
