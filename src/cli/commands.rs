use std::net::SocketAddr;

use clap::{Parser, Subcommand};

use crate::config::{LogFormat, ServeConfig};

#[derive(Parser, Debug)]
#[command(name = "taskmgr")]
#[command(version, about = "A minimal in-memory task tracking service")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve {
        /// Address to listen on
        #[arg(long, env = "TASKMGR_BIND", default_value_t = ServeConfig::default().bind)]
        bind: SocketAddr,

        /// Start without the sample tasks and notes
        #[arg(long)]
        empty: bool,

        /// Log output format (text, json)
        #[arg(long, env = "TASKMGR_LOG_FORMAT", default_value_t = ServeConfig::default().log_format)]
        log_format: LogFormat,
    },
}

impl Commands {
    /// Server settings for `serve`.
    pub fn serve_config(&self) -> ServeConfig {
        match self {
            Commands::Serve {
                bind,
                empty,
                log_format,
            } => ServeConfig {
                bind: *bind,
                seed: !empty,
                log_format: *log_format,
            },
        }
    }
}
