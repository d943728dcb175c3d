use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use metrics_exporter_prometheus::PrometheusHandle;

use meridian_site::config::ContentConfig;
use meridian_site::content::{ContentCatalog, HttpContentStore};
use meridian_site::mail::{Email, MailError, Mailer};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) content: ContentCatalog,
}

/// Catalog over the configured content store, or defaults-only when no
/// store is configured.
pub(crate) fn build_catalog(config: &ContentConfig) -> ContentCatalog {
    match HttpContentStore::from_config(config) {
        Some(store) => ContentCatalog::with_source(Arc::new(store)),
        None => ContentCatalog::fallback_only(),
    }
}

/// Mailer that records instead of transmitting, for the offline demo.
#[derive(Default, Clone)]
pub(crate) struct RecordingMailer {
    sent: Arc<Mutex<Vec<Email>>>,
}

impl RecordingMailer {
    pub(crate) fn sent(&self) -> Vec<Email> {
        self.sent.lock().expect("mailer mutex poisoned").clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: &Email) -> Result<(), MailError> {
        self.sent
            .lock()
            .expect("mailer mutex poisoned")
            .push(email.clone());
        Ok(())
    }
}
