//! Telemetry lifecycle.

use opentelemetry::global;
use opentelemetry_sdk::{propagation::TraceContextPropagator, trace::SdkTracerProvider};
use tracing::{error, info};

use crate::config::ServerConfig;

use super::{ObservabilityError, logging, otel, settings};

/// Flushes exported spans when dropped.
#[derive(Debug)]
pub(crate) struct TelemetryGuard {
    tracer_provider: Option<SdkTracerProvider>,
}

/// Install the global subscriber, and the OTLP pipeline when export is enabled.
pub(crate) fn init(config: &ServerConfig) -> Result<TelemetryGuard, ObservabilityError> {
    settings::apply(&config.telemetry);

    let tracer_provider = config
        .telemetry
        .enabled
        .then(|| {
            global::set_text_map_propagator(TraceContextPropagator::new());

            otel::build_tracer_provider(&config.telemetry)
        })
        .transpose()?;

    logging::init_subscriber(config, tracer_provider.as_ref())?;

    if tracer_provider.is_some() {
        info!(endpoint = %config.telemetry.endpoint, "exporting spans over OTLP");
    }

    Ok(TelemetryGuard { tracer_provider })
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        if let Some(provider) = self.tracer_provider.take()
            && let Err(source) = provider.shutdown()
        {
            error!("failed to shutdown tracer provider: {source}");
        }
    }
}
