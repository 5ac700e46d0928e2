//! HTTP server for the task service.
//!
//! Exposes task and note CRUD as JSON over axum. All handlers share one
//! [`TaskService`] behind a tokio mutex.

pub mod error;
pub mod handlers;
pub mod payloads;

use std::sync::Arc;

use axum::routing::{delete, get};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::error::Result;
use crate::service::TaskService;
use handlers::*;

/// Shared state handed to every route.
#[derive(Clone)]
pub struct TaskServer {
    pub service: Arc<Mutex<TaskService>>,
}

impl TaskServer {
    pub fn new(service: TaskService) -> Self {
        Self {
            service: Arc::new(Mutex::new(service)),
        }
    }

    /// Build the route table.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(health))
            .route("/tasks", get(list_tasks).post(create_task))
            .route(
                "/tasks/{id}",
                get(get_task).patch(update_task).delete(delete_task),
            )
            .route("/tasks/{id}/notes", get(list_notes).post(add_note))
            .route("/tasks/{id}/notes/{note_id}", delete(delete_note))
            .layer(TraceLayer::new_for_http())
            .with_state(self.clone())
    }

    /// Serve on `listener` until Ctrl-C.
    pub async fn serve(self, listener: TcpListener) -> Result<()> {
        let addr = listener.local_addr()?;
        {
            let service = self.service.lock().await;
            info!(
                %addr,
                tasks = service.task_count(),
                notes = service.note_count(),
                "taskmgr listening"
            );
        }

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("taskmgr stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(e) => {
            warn!(error = %e, "failed to listen for Ctrl-C; running until killed");
            std::future::pending::<()>().await;
        }
    }
}
