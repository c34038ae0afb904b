use std::env;
use std::error::Error;
use std::process;

use rusty_ledger::run_async;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run_app().await {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

async fn run_app() -> Result<(), Box<dyn Error + Send + Sync>> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        return Err("Usage: cargo run --example async_main -- operations.csv".into());
    }

    run_async(args[1].clone(), std::io::stdout()).await
}
