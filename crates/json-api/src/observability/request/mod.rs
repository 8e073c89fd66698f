//! Request-level logging, request IDs, and parent trace extraction.

mod parent_context;
mod request_ids;
mod spans;

use std::time::{Duration, Instant};

use salvo::{
    Request, handler,
    http::StatusCode,
    prelude::{Depot, FlowCtrl, Response},
};
use tracing::{Instrument as _, Span, error, field, info, info_span, warn};
use tracing_opentelemetry::OpenTelemetrySpanExt as _;

use self::{
    request_ids::{REQUEST_ID_HEADER, RequestId},
    spans::RouteName,
};
use super::{metrics, settings};

const REQUEST_ID_DEPOT_KEY: &str = "request_id";

/// Paths served without request spans or metrics.
const UNTRACED_PATHS: [&str; 2] = ["/metrics", "/healthcheck"];

#[handler]
pub(crate) async fn request_logging(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    if UNTRACED_PATHS.contains(&req.uri().path()) {
        ctrl.call_next(req, depot, res).await;

        return;
    }

    let started = Instant::now();

    let request_id = RequestId::from_header(req.header::<String>(REQUEST_ID_HEADER));

    depot.insert(REQUEST_ID_DEPOT_KEY, request_id.as_str().to_owned());
    request_id.echo(res);

    let method = req.method().to_string();
    let path = req.uri().path().to_owned();
    let names = RouteName::new(&method, &path);
    let _in_flight_request = metrics::InFlightRequestGuard::track();

    let span = info_span!(
        parent: None,
        "http.request",
        otel.name = %names.span_name,
        http.route = %names.route,
        otel.kind = "server",
        request_id = %request_id,
        method = %method,
        path = %path,
        remote_addr = %req.remote_addr(),
        status = field::Empty,
        duration_ms = field::Empty
    );

    if settings::otel_parent_propagation_enabled()
        && let Some(parent_context) = parent_context::extract_parent_context(req.headers())
        && let Err(source) = span.set_parent(parent_context)
    {
        warn!("failed to set parent context on request span: {source}");
    }

    ctrl.call_next(req, depot, res)
        .instrument(span.clone())
        .await;

    let outcome = RequestOutcome {
        status: res.status_code.unwrap_or(StatusCode::OK),
        duration: started.elapsed(),
    };

    metrics::observe_request(
        &method,
        &names.route,
        outcome.status.as_u16(),
        outcome.duration.as_secs_f64(),
    );

    outcome.log(&span, &method, &path, request_id.as_str());
}

#[derive(Debug, Clone, Copy)]
struct RequestOutcome {
    status: StatusCode,
    duration: Duration,
}

impl RequestOutcome {
    fn log(self, span: &Span, method: &str, path: &str, request_id: &str) {
        let status = self.status.as_u16();
        let duration_ms = self.duration.as_millis();
        let threshold_ms = u128::from(settings::slow_request_threshold_ms());

        span.record("status", status);
        span.record("duration_ms", duration_ms);

        span.in_scope(|| {
            info!(status, duration_ms, "request.completed");

            if self.status.is_server_error() {
                error!(status, method, path, request_id, "server error response");
            } else if self.status.is_client_error() {
                warn!(status, method, path, request_id, "client error response");
            }

            if duration_ms > threshold_ms {
                warn!(
                    method,
                    path,
                    request_id,
                    duration_ms,
                    threshold_ms,
                    "slow request detected"
                );
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use salvo::{prelude::*, test::TestClient};

    use super::*;

    #[handler]
    async fn ok() -> &'static str {
        "ok"
    }

    fn service() -> Service {
        Service::new(
            Router::new()
                .hoop(request_logging)
                .push(Router::with_path("products").get(ok)),
        )
    }

    #[tokio::test]
    async fn echoes_incoming_request_id() {
        let res = TestClient::get("http://example.com/products")
            .add_header(REQUEST_ID_HEADER, "req-123", true)
            .send(&service())
            .await;

        let request_id = res
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok());

        assert_eq!(request_id, Some("req-123"));
    }

    #[tokio::test]
    async fn generates_missing_request_id() {
        let res = TestClient::get("http://example.com/products")
            .send(&service())
            .await;

        let request_id = res
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();

        assert!(
            uuid::Uuid::parse_str(request_id).is_ok(),
            "expected a generated uuid, got {request_id:?}"
        );
    }
}
