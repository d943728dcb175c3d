use crate::cli::ServeArgs;
use crate::infra::{build_catalog, AppState};
use crate::routes::with_site_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

use meridian_site::config::AppConfig;
use meridian_site::error::AppError;
use meridian_site::forms::SubmissionService;
use meridian_site::mail::SmtpMailer;
use meridian_site::telemetry;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));

    let catalog = build_catalog(&config.content);
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        content: catalog.clone(),
    };

    let mailer = Arc::new(SmtpMailer::from_config(&config.mail)?);
    let service = Arc::new(SubmissionService::new(
        mailer,
        Arc::new(catalog),
        config.mail.from.clone(),
        config.recipients.clone(),
        config.uploads.max_resume_bytes(),
    ));

    let app = with_site_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "meridian site backend ready");

    axum::serve(listener, app).await?;
    Ok(())
}
