pub mod cli;
pub mod config;
pub mod entity;
pub mod error;
pub mod http;
pub mod service;
pub mod storage;
pub mod telemetry;

pub use error::{Result, TaskmgrError};
pub use http::TaskServer;
pub use service::{TaskService, TaskUpdate};
