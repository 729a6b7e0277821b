//! Notes service entry-point: loads settings, wires the REST endpoints and
//! OpenAPI docs, then serves until shutdown.

mod server;

#[cfg(feature = "metrics")]
use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use notes_backend::config::NotesSettings;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = NotesSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;
    let shaping = settings.response_shaping().map_err(std::io::Error::other)?;
    info!(
        marker_header = %shaping.marker_header(),
        preview_length = shaping.preview_length(),
        "response shaping configured"
    );

    let config = ServerConfig::new(bind_addr, shaping);
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(initialize_metrics(|| {
        PrometheusMetricsBuilder::new("notes")
            .endpoint("/metrics")
            .build()
    }));
    info!(bind_addr = %config.bind_addr(), "starting notes service");

    create_server(config)?.await
}

/// Build Prometheus middleware, logging and continuing without metrics on
/// failure.
#[cfg(feature = "metrics")]
fn initialize_metrics<F, E>(build: F) -> Option<PrometheusMetrics>
where
    F: FnOnce() -> Result<PrometheusMetrics, E>,
    E: std::fmt::Display,
{
    match build() {
        Ok(metrics) => Some(metrics),
        Err(error) => {
            warn!(%error, "metrics initialisation failed; continuing without metrics");
            None
        }
    }
}
