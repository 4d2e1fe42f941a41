use distributed_calc::calculator::DistributedCalculator;
use distributed_calc::config::OrchestratorConfig;
use distributed_calc::expressions::registry::ExpressionRegistry;
use distributed_calc::scheduler::registry::TaskRegistry;
use distributed_calc::server;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        // .with_max_level(tracing::Level::DEBUG)
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = OrchestratorConfig::from_env();
    tracing::info!("Operation timings: {:?}", config.timings);

    // 1. Registries:
    let tasks = Arc::new(TaskRegistry::new());
    let expressions = Arc::new(ExpressionRegistry::new());

    // 2. Calculator bridging evaluation and tasks:
    let calculator = DistributedCalculator::new(tasks, expressions, config.timings);

    // 3. Start HTTP server:
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!("HTTP server listening on {}", config.addr);
    tracing::info!("Press Ctrl+C to shutdown");

    server::serve(listener, calculator).await?;

    Ok(())
}
