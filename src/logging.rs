//! src/logging.rs
//!
//! Journalisation `tracing` -> stderr (natif seulement).
//!
//! - `RUST_LOG` prime sur `--log-level` quand il est défini.
//! - Installé une seule fois, au démarrage ; un second appel échoue sans effet.

use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter, Layer,
    Registry,
};

use crate::cli::{FormatLog, NiveauLog};

pub fn filtre(niveau: NiveauLog) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(niveau.directive()))
}

pub fn init_logging(niveau: NiveauLog, format: FormatLog) -> Result<(), TryInitError> {
    let couche: Box<dyn Layer<Registry> + Send + Sync> = match format {
        FormatLog::Compact => fmt::layer()
            .compact()
            .with_target(false)
            .with_writer(std::io::stderr)
            .boxed(),
        FormatLog::Pretty => fmt::layer().pretty().with_writer(std::io::stderr).boxed(),
    };

    tracing_subscriber::registry()
        .with(couche)
        .with(filtre(niveau))
        .try_init()
}
