use opentelemetry::global;
use opentelemetry::trace::TracerProvider;
use opentelemetry::KeyValue;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::trace::{BatchConfigBuilder, Config, Tracer};
use opentelemetry_sdk::{runtime, Resource};
use tracing::Level;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;
use url::Url;

#[derive(Debug, Clone)]
pub struct InstrumentationParams {
    pub service_name: String,
    pub collector_endpoint: Option<Url>,
    pub log_level: Level,
}

/// Installs the global tracing subscriber. The OTLP trace layer is only
/// added when a collector endpoint is configured; plain fmt logging is
/// always on.
pub fn setup_analytics(instrumentation: &InstrumentationParams) {
    let level_filter = tracing_subscriber::filter::LevelFilter::from_level(instrumentation.log_level);
    let registry = tracing_subscriber::registry().with(level_filter).with(tracing_subscriber::fmt::layer());

    match &instrumentation.collector_endpoint {
        Some(endpoint) => {
            let tracer = init_tracer_provider(&instrumentation.service_name, endpoint.as_str());
            registry.with(OpenTelemetryLayer::new(tracer)).init();
        }
        None => registry.init(),
    }
}

pub fn shutdown_analytics(instrumentation: &InstrumentationParams) {
    if instrumentation.collector_endpoint.is_some() {
        global::shutdown_tracer_provider();
    }
}

fn init_tracer_provider(service_name: &str, collector_endpoint: &str) -> Tracer {
    let batch_config = BatchConfigBuilder::default().build();

    let provider = opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_exporter(opentelemetry_otlp::new_exporter().tonic().with_endpoint(collector_endpoint))
        .with_trace_config(Config::default().with_resource(Resource::new(vec![KeyValue::new(
            opentelemetry_semantic_conventions::resource::SERVICE_NAME,
            format!("{}{}", service_name, "_trace_service"),
        )])))
        .with_batch_config(batch_config)
        .install_batch(runtime::Tokio)
        .expect("Failed to install the OTLP tracer provider");

    global::set_tracer_provider(provider.clone());

    provider.tracer(format!("{}{}", service_name, "_subscriber"))
}
