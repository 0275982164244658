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
const TRACER_NAME: &str = "mentoring-ai";

pub use shared_types::ROLE_HEADER;

/// Keeps the LoggerProvider alive for the process lifetime.
static LOGGER_PROVIDER: OnceLock<opentelemetry_sdk::logs::SdkLoggerProvider> = OnceLock::new();

/// Tonic's `connect_lazy()` needs a Tokio runtime context, which the
/// `dioxus::serve` init closure may not have yet.
static OTEL_RUNTIME: OnceLock<tokio::runtime::Runtime> = OnceLock::new();

struct ExportTarget {
    endpoint: String,
}

impl ExportTarget {
    fn from_env() -> Option<Self> {
        Self::from_endpoint(std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT").ok())
    }

    fn from_endpoint(endpoint: Option<String>) -> Option<Self> {
        let endpoint = endpoint.filter(|e| !e.trim().is_empty())?;
        Some(Self { endpoint })
    }

    fn tls(&self) -> bool {
        self.endpoint.starts_with("https://")
    }
}

/// Register OTLP trace and log exporters when the `telemetry` flag is on
/// and `OTEL_EXPORTER_OTLP_ENDPOINT` is set.
///
/// Dioxus owns the tracing subscriber; this only wires the exporters.
/// Environment:
///   - `OTEL_EXPORTER_OTLP_ENDPOINT`: collector gRPC address
///   - `OTEL_SERVICE_NAME`: service name tag (default `mentoring-ai`)
///   - `OTEL_EXPORTER_OTLP_HEADERS`: extra exporter headers, read by the
///     OTLP exporter itself
///   - `DEPLOY_ENV`: environment tag (default `development`)
pub fn init_telemetry() {
    let _ = dotenvy::dotenv();

    if !crate::config::feature_flags().telemetry {
        tracing::info!("telemetry flag off, skipping OTLP export");
        return;
    }
    let Some(target) = ExportTarget::from_env() else {
        tracing::info!("OTEL_EXPORTER_OTLP_ENDPOINT not set, skipping OTLP export");
        return;
    };

    let service_name =
        std::env::var("OTEL_SERVICE_NAME").unwrap_or_else(|_| TRACER_NAME.to_string());
    let environment = std::env::var("DEPLOY_ENV").unwrap_or_else(|_| "development".to_string());

    let rt = match OTEL_RUNTIME.get() {
        Some(rt) => rt,
        None => {
            let built = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .worker_threads(1)
                .build();
            match built {
                Ok(rt) => OTEL_RUNTIME.get_or_init(|| rt),
                Err(e) => {
                    tracing::warn!(error = %e, "could not start telemetry runtime");
                    return;
                }
            }
        }
    };
    let _guard = rt.enter();

    let resource = opentelemetry_sdk::Resource::builder()
        .with_service_name(service_name)
        .with_attribute(KeyValue::new("service.version", APP_VERSION))
        .with_attribute(KeyValue::new("deployment.environment", environment))
        .build();

    // -- Traces --
    let mut span_builder = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(&target.endpoint);
    if target.tls() {
        span_builder = span_builder.with_tls_config(
            opentelemetry_otlp::tonic_types::transport::ClientTlsConfig::new().with_native_roots(),
        );
    }
    let span_exporter = match span_builder.build() {
        Ok(exporter) => exporter,
        Err(e) => {
            tracing::warn!(error = %e, "OTLP span exporter failed to build");
            return;
        }
    };
    let provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
        .with_batch_exporter(span_exporter)
        .with_resource(resource.clone())
        .build();
    global::set_tracer_provider(provider);

    // -- Logs, bridged from the `log` crate --
    let mut log_builder = opentelemetry_otlp::LogExporter::builder()
        .with_tonic()
        .with_endpoint(&target.endpoint);
    if target.tls() {
        log_builder = log_builder.with_tls_config(
            opentelemetry_otlp::tonic_types::transport::ClientTlsConfig::new().with_native_roots(),
        );
    }
    match log_builder.build() {
        Ok(log_exporter) => {
            let logger_provider = LOGGER_PROVIDER.get_or_init(|| {
                opentelemetry_sdk::logs::SdkLoggerProvider::builder()
                    .with_batch_exporter(log_exporter)
                    .with_resource(resource)
                    .build()
            });
            let bridge = opentelemetry_appender_log::OpenTelemetryLogBridge::new(logger_provider);
            match log::set_boxed_logger(Box::new(bridge)) {
                Ok(()) => log::set_max_level(log::LevelFilter::Info),
                Err(_) => tracing::info!("log bridge skipped, a logger is already set"),
            }
        }
        Err(e) => tracing::warn!(error = %e, "OTLP log exporter failed to build"),
    }

    tracing::info!(
        version = APP_VERSION,
        endpoint = %target.endpoint,
        tls = target.tls(),
        "telemetry initialized"
    );
}

/// Client platform from User-Agent, unless `X-Client-Platform` names it.
fn detect_platform(ua: &str, explicit: Option<&str>) -> &'static str {
    if let Some(p) = explicit {
        return match p {
            "desktop" => "desktop",
            "mobile" => "mobile",
            "web" => "web",
            _ => "unknown",
        };
    }

    if ua.is_empty() || ua == "unknown" {
        return "native";
    }
    if ua.contains("iPhone") || ua.contains("iPad") || ua.contains("Android") {
        "mobile"
    } else if ua.contains("Mozilla") || ua.contains("Chrome") || ua.contains("Safari") {
        "web"
    } else {
        "native"
    }
}

/// Normalised role from the role header; anything else is `anonymous`.
fn role_attribute(header: Option<&str>) -> &'static str {
    match header.map(str::to_ascii_uppercase).as_deref() {
        Some("STUDENT") => "student",
        Some("MENTOR") => "mentor",
        Some("ADMIN") => "admin",
        _ => "anonymous",
    }
}

/// Tower layer that opens an OpenTelemetry server span per request.
///
/// Records method, path, user agent, platform, request id, acting role
/// and response status.
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
        let tracer = global::tracer(TRACER_NAME);
        let method = req.method().to_string();
        let path = req.uri().path().to_string();
        let header = |name: &str| req.headers().get(name).and_then(|v| v.to_str().ok());

        let user_agent = header("user-agent").unwrap_or("unknown").to_string();
        let client_platform = detect_platform(&user_agent, header("x-client-platform"));
        let request_id = header("x-request-id").unwrap_or("").to_string();
        let role = role_attribute(header(ROLE_HEADER));

        let attributes = vec![
            KeyValue::new("http.method", method.clone()),
            KeyValue::new("http.target", path.clone()),
            KeyValue::new("http.user_agent", user_agent),
            KeyValue::new("client.platform", client_platform),
            KeyValue::new("http.request_id", request_id),
            KeyValue::new("user.role", role),
        ];

        let span = tracer
            .span_builder(format!("{method} {path}"))
            .with_kind(SpanKind::Server)
            .with_attributes(attributes)
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
            } else if status.is_client_error() {
                span.set_attribute(KeyValue::new("error.type", "client_error"));
            }

            Ok(response)
        })
    }
}
