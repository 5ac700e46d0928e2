use tokio::net::TcpListener;
use tracing::info;

use crate::config::ServeConfig;
use crate::error::Result;
use crate::http::TaskServer;
use crate::service::TaskService;
use crate::telemetry;

pub fn handle_serve(config: ServeConfig) -> Result<()> {
    telemetry::init(config.log_format);

    let service = if config.seed {
        TaskService::with_sample_data()?
    } else {
        TaskService::new()
    };
    info!(
        seeded = config.seed,
        last_task_id = service.last_task_id(),
        last_note_id = service.last_note_id(),
        "task service ready"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async move {
        let listener = TcpListener::bind(config.bind).await?;
        TaskServer::new(service).serve(listener).await
    })
}
