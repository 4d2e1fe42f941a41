use distributed_calc::config::AgentConfig;
use distributed_calc::worker::WorkerAgent;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = AgentConfig::from_env();
    tracing::info!(
        "Starting {} workers with delay {:?}, orchestrator url is {}",
        config.computing_power,
        config.delay,
        config.orchestrator_url
    );

    let handles = WorkerAgent::new(&config).start();

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down {} workers", handles.len());
    for handle in handles {
        handle.abort();
    }

    Ok(())
}
