use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_operational_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use bonusperme::catalog::CatalogCache;
use bonusperme::config::AppConfig;
use bonusperme::error::AppError;
use bonusperme::matcher::MatchService;
use bonusperme::scraper::Scraper;
use bonusperme::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let cache = Arc::new(CatalogCache::new());
    if config.scraper.enabled {
        let scraper = Arc::new(Scraper::new(
            cache.clone(),
            &config.scraper,
            &config.linkcheck,
        )?);
        info!(
            sources = scraper.sources().len(),
            interval_secs = scraper.interval().as_secs(),
            "catalog refresh scheduled"
        );
        let _refresh_task = scraper.spawn();
    }

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        cache: cache.clone(),
        refresh_interval: config.scraper.interval,
    };

    let match_service = Arc::new(MatchService::new(cache, &config.profile));
    let app = with_operational_routes(match_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "bonusperme service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
