use axum::{body::Body, http::Request, response::Response};
use opentelemetry::{
    global,
    trace::{SpanKind, TraceContextExt, Tracer},
    Context, KeyValue,
};
use opentelemetry_otlp::{WithExportConfig, WithTonicConfig};
use std::{
    future::Future,
    pin::Pin,
    sync::OnceLock,
    task::{Context as TaskContext, Poll},
};
use tower::{Layer, Service};

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Keep the LoggerProvider alive for the process lifetime.
static LOGGER_PROVIDER: OnceLock<opentelemetry_sdk::logs::SdkLoggerProvider> = OnceLock::new();

/// Runtime for the OTLP gRPC exporters. Tonic's `connect_lazy()` spawns on
/// the ambient Tokio runtime, which `dioxus::serve` may not have entered yet
/// when the init closure runs.
static OTEL_RUNTIME: OnceLock<tokio::runtime::Runtime> = OnceLock::new();

/// Configure OTLP trace and log export.
///
/// Dioxus owns the `tracing` subscriber; this only installs the global
/// tracer provider used by [`OtelTraceLayer`] and bridges the `log` crate.
///
/// Reads:
///   - `OTEL_EXPORTER_OTLP_ENDPOINT`: collector gRPC address (required)
///   - `OTEL_SERVICE_NAME`: service name (default `caredesk`)
///   - `DEPLOY_ENV`: deployment environment tag (default `development`)
pub fn init_telemetry() {
    let _ = dotenvy::dotenv();

    let Ok(endpoint) = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT") else {
        tracing::warn!("OTEL_EXPORTER_OTLP_ENDPOINT not set, skipping OTLP telemetry");
        return;
    };

    let service_name =
        std::env::var("OTEL_SERVICE_NAME").unwrap_or_else(|_| "caredesk".to_string());
    let environment = std::env::var("DEPLOY_ENV").unwrap_or_else(|_| "development".to_string());

    if OTEL_RUNTIME.get().is_none() {
        match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .worker_threads(1)
            .build()
        {
            Ok(rt) => {
                let _ = OTEL_RUNTIME.set(rt);
            }
            Err(e) => {
                tracing::error!("failed to create OTEL runtime: {e}");
                return;
            }
        }
    }
    let Some(rt) = OTEL_RUNTIME.get() else {
        return;
    };
    let _guard = rt.enter();

    let tls = endpoint.starts_with("https://");

    let mut span_builder = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(&endpoint);
    if tls {
        span_builder = span_builder.with_tls_config(
            opentelemetry_otlp::tonic_types::transport::ClientTlsConfig::new().with_native_roots(),
        );
    }
    let span_exporter = match span_builder.build() {
        Ok(exporter) => exporter,
        Err(e) => {
            tracing::error!("failed to create OTLP span exporter: {e}");
            return;
        }
    };

    let resource = opentelemetry_sdk::Resource::builder()
        .with_service_name(service_name)
        .with_attribute(KeyValue::new("service.version", APP_VERSION))
        .with_attribute(KeyValue::new("deployment.environment", environment))
        .build();

    let provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
        .with_batch_exporter(span_exporter)
        .with_resource(resource.clone())
        .build();
    global::set_tracer_provider(provider);

    let mut log_builder = opentelemetry_otlp::LogExporter::builder()
        .with_tonic()
        .with_endpoint(&endpoint);
    if tls {
        log_builder = log_builder.with_tls_config(
            opentelemetry_otlp::tonic_types::transport::ClientTlsConfig::new().with_native_roots(),
        );
    }
    let log_exporter = match log_builder.build() {
        Ok(exporter) => exporter,
        Err(e) => {
            tracing::error!("failed to create OTLP log exporter: {e}");
            return;
        }
    };

    let logger_provider = LOGGER_PROVIDER.get_or_init(|| {
        opentelemetry_sdk::logs::SdkLoggerProvider::builder()
            .with_batch_exporter(log_exporter)
            .with_resource(resource)
            .build()
    });

    let bridge = opentelemetry_appender_log::OpenTelemetryLogBridge::new(logger_provider);
    match log::set_boxed_logger(Box::new(bridge)) {
        Ok(()) => log::set_max_level(log::LevelFilter::Info),
        Err(_) => tracing::warn!("log bridge skipped, a logger is already installed"),
    }

    tracing::info!(%endpoint, "telemetry initialized v{APP_VERSION}");
}

/// Span name for a request: method plus path without the query string.
fn span_name(method: &str, uri_path: &str) -> String {
    let path = uri_path.split(['?', '#']).next().unwrap_or("/");
    let path = if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    };
    format!("{method} {path}")
}

/// Tower layer that creates an OpenTelemetry span for each HTTP request.
#[derive(Clone)]
pub struct OtelTraceLayer;

impl<S> Layer<S> for OtelTraceLayer {
    type Service = OtelTraceService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        OtelTraceService { inner }
    }
}

#[derive(Clone)]
pub struct OtelTraceService<S> {
    inner: S,
}

impl<S> Service<Request<Body>> for OtelTraceService<S>
where
    S: Service<Request<Body>, Response = Response> + Send + Clone + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut TaskContext<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let tracer = global::tracer("caredesk");
        let method = req.method().to_string();
        let path = req.uri().path().to_string();
        let request_id = req
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        let span = tracer
            .span_builder(span_name(&method, &path))
            .with_kind(SpanKind::Server)
            .with_attributes(vec![
                KeyValue::new("http.method", method),
                KeyValue::new("http.target", path),
                KeyValue::new("http.request_id", request_id),
            ])
            .start(&tracer);

        let cx = Context::current_with_span(span);
        let mut inner = self.inner.clone();

        let guard = cx.clone().attach();
        let future = inner.call(req);
        drop(guard);

        Box::pin(async move {
            let response = future.await?;

            let span = cx.span();
            let status = response.status();
            span.set_attribute(KeyValue::new("http.status_code", status.as_u16() as i64));
            if status.is_server_error() {
                span.set_status(opentelemetry::trace::Status::error(status.to_string()));
            }

            Ok(response)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_name_strips_query_and_trailing_slash() {
        assert_eq!(
            span_name("GET", "/dashboard/doctor/appointments/?page=2"),
            "GET /dashboard/doctor/appointments"
        );
        assert_eq!(span_name("POST", "/api/v1/auth/login"), "POST /api/v1/auth/login");
    }

    #[test]
    fn span_name_keeps_root() {
        assert_eq!(span_name("GET", "/"), "GET /");
    }
}
