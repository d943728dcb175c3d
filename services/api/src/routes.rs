use std::sync::Arc;

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json};
use serde_json::json;

use meridian_site::content::{
    AboutPage, CareersPage, ContactPage, ProjectsPage, ServicesPage,
};
use meridian_site::forms::{form_router, PositionDirectory, SubmissionService};
use meridian_site::mail::Mailer;

use crate::infra::AppState;

/// Form endpoints plus the operational and content document routes.
pub(crate) fn with_site_routes<M, P>(service: Arc<SubmissionService<M, P>>) -> axum::Router
where
    M: Mailer,
    P: PositionDirectory + 'static,
{
    form_router(service)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/content/about", get(about_endpoint))
        .route("/api/content/services", get(services_endpoint))
        .route("/api/content/projects", get(projects_endpoint))
        .route("/api/content/careers", get(careers_endpoint))
        .route("/api/content/contact", get(contact_endpoint))
        .route("/api/careers/positions", get(positions_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn about_endpoint(Extension(state): Extension<AppState>) -> Json<AboutPage> {
    Json(state.content.about_page().await)
}

pub(crate) async fn services_endpoint(
    Extension(state): Extension<AppState>,
) -> Json<ServicesPage> {
    Json(state.content.services_page().await)
}

pub(crate) async fn projects_endpoint(
    Extension(state): Extension<AppState>,
) -> Json<ProjectsPage> {
    Json(state.content.projects_page().await)
}

pub(crate) async fn careers_endpoint(Extension(state): Extension<AppState>) -> Json<CareersPage> {
    Json(state.content.careers_page().await)
}

pub(crate) async fn contact_endpoint(Extension(state): Extension<AppState>) -> Json<ContactPage> {
    Json(state.content.contact_page().await)
}

pub(crate) async fn positions_endpoint(
    Extension(state): Extension<AppState>,
) -> Json<serde_json::Value> {
    let positions = state.content.open_positions().await;
    Json(json!({ "positions": positions }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use axum_prometheus::PrometheusMetricLayer;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::infra::RecordingMailer;
    use meridian_site::config::RecipientConfig;
    use meridian_site::content::ContentCatalog;
    use meridian_site::forms::StaticPositions;

    fn test_state(ready: bool) -> AppState {
        let (_layer, handle) = PrometheusMetricLayer::pair();
        AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(handle),
            content: ContentCatalog::fallback_only(),
        }
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn careers_endpoint_serves_fallback_document() {
        let Json(page) = careers_endpoint(Extension(test_state(true))).await;
        assert_eq!(page.title, "Join Our Team");
        assert_eq!(page.job_positions.len(), 3);
    }

    #[tokio::test]
    async fn positions_endpoint_lists_fallback_openings() {
        let Json(body) = positions_endpoint(Extension(test_state(true))).await;
        let positions = body
            .get("positions")
            .and_then(|value| value.as_array())
            .expect("positions array");
        assert_eq!(positions.len(), 3);
        assert_eq!(positions[0], "Fiber Optic Technician");
    }

    #[tokio::test]
    async fn composed_router_serves_content_and_forms() {
        let mailer = RecordingMailer::default();
        let service = Arc::new(SubmissionService::new(
            Arc::new(mailer.clone()),
            Arc::new(StaticPositions(vec!["Project Supervisor".to_string()])),
            "noreply@meridian-infra.nl",
            RecipientConfig {
                contact_inbox: "info@meridian-infra.nl".to_string(),
                applications_inbox: "careers@meridian-infra.nl".to_string(),
            },
            5 * 1024 * 1024,
        ));
        let router = with_site_routes(service).layer(Extension(test_state(true)));

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/content/careers")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let page: serde_json::Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(
            page.get("title").and_then(|v| v.as_str()),
            Some("Join Our Team")
        );

        let contact = json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "subject": "Pricing",
            "message": "Please send me a quote for cabling work.",
        });
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/contact")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        serde_json::to_vec(&contact).expect("serialize payload"),
                    ))
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(mailer.sent().len(), 2);
    }

    #[tokio::test]
    async fn readiness_flips_with_the_flag() {
        let state = test_state(false);
        let response = readiness_endpoint(Extension(state.clone())).await;
        assert_eq!(
            response.into_response().status(),
            StatusCode::SERVICE_UNAVAILABLE
        );

        state.readiness.store(true, Ordering::Release);
        let response = readiness_endpoint(Extension(state)).await;
        assert_eq!(response.into_response().status(), StatusCode::OK);
    }
}
