use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

use sample_worker::{Controller, EventLog, WorkerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr; stdout is reserved for the event log.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let controller = Controller::new(WorkerConfig::default(), EventLog::stdout());
    let stdin = BufReader::new(tokio::io::stdin());
    controller.run(stdin).await?;

    Ok(())
}
