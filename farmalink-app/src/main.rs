//! # FarmaLink Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize the payment registry adapter
//! - Create the payment service
//! - Start the HTTP server

mod config;

use opentelemetry::global;
use opentelemetry_sdk::{propagation::TraceContextPropagator, trace as sdktrace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use farmalink_hex::{PaymentService, inbound::HttpServer};
use farmalink_repo::build_repo;
use farmalink_types::PaymentRepository;

fn init_tracer() -> anyhow::Result<(sdktrace::Tracer, sdktrace::SdkTracerProvider)> {
    global::set_text_map_propagator(TraceContextPropagator::new());

    // gRPC exporter with batch processing (non-blocking); the endpoint comes
    // from OTEL_EXPORTER_OTLP_ENDPOINT.
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .build()?;

    let provider = sdktrace::SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .build();

    global::set_tracer_provider(provider.clone());

    use opentelemetry::trace::TracerProvider as _;
    Ok((provider.tracer("farmalink-payments"), provider))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = config::Config::from_env()?;

    // OpenTelemetry export is opt-in
    let (telemetry, otel_provider) = match &config.otlp_endpoint {
        Some(_) => {
            let (tracer, provider) = init_tracer()?;
            (
                Some(tracing_opentelemetry::layer().with_tracer(tracer)),
                Some(provider),
            )
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,farmalink_app=debug,farmalink_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(telemetry)
        .init();

    tracing::info!("Starting FarmaLink payments server on {}", config.bind_addr());
    if let Some(endpoint) = &config.otlp_endpoint {
        tracing::info!("Exporting traces to {}", endpoint);
    }

    // Build repository (handles connection and migration)
    let repo = build_repo(config.database_url.as_deref()).await?;
    match repo.backend() {
        "memory" => tracing::warn!("Using in-memory payment registry: records are lost on restart"),
        backend => tracing::info!("Using {} payment registry", backend),
    }

    let service = PaymentService::new(repo);

    let server = HttpServer::new(service);
    server.run(&config.bind_addr()).await?;

    // Ensure traces are flushed before exit
    if let Some(provider) = otel_provider {
        let _ = provider.shutdown();
    }
    Ok(())
}
