use clap::Parser;
use taskmgr::cli::{handle_serve, Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        cmd @ Commands::Serve { .. } => handle_serve(cmd.serve_config()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
