mod config;
mod error;
mod probe;
mod requests;
mod responses;

use crate::config::ProbeConfig;
use crate::error::ProbeError;
use crate::probe::Probe;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), ProbeError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let config = ProbeConfig::local()?;
    tracing::info!("probing {}", config.base_url);

    let probe = Probe::new(config);
    let report = probe.run(&mut std::io::stdout()).await?;

    if report.published() {
        tracing::info!("probe finished");
    } else {
        tracing::info!(
            "probe finished without publishing (topic creation answered {})",
            report.creation.status
        );
    }
    Ok(())
}
