use anyhow::{Context, Result};
use lb_probe_core::Config;
use lb_probe_storage::PgStore;

/// Unlike the serve path, an initialization failure here is fatal:
/// the operator asked for it explicitly and wants the error.
pub(crate) async fn run(config: &Config) -> Result<()> {
    let store = PgStore::connect(config).context("failed to configure database pool")?;
    store.init_schema().await.context("schema initialization failed")?;
    store.close().await;
    tracing::info!("requests table initialized");
    Ok(())
}
