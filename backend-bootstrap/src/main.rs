use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Attendance reward backend server.
#[derive(Parser, Debug)]
#[command(name = "attendance-backend", version)]
struct Args {
    /// Config file path; falls back to ATTEND_CONFIG, then ./config.toml
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    backend_bootstrap::run_standalone(args.config).await
}
