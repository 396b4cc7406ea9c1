use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

use bonusperme::catalog::CatalogCache;
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) cache: Arc<CatalogCache>,
    pub(crate) refresh_interval: Duration,
}
