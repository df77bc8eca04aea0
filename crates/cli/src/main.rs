use anyhow::Result;
use clap::{Parser, Subcommand};
use lb_probe_core::Config;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "lb-probe")]
#[command(about = "Load-balancer demo HTTP service backed by PostgreSQL", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server.
    Serve {
        /// Listen port; overrides the PORT environment variable.
        #[arg(short, long)]
        port: Option<u16>,
        #[arg(short = 'H', long, default_value = "0.0.0.0")]
        host: String,
    },
    /// Create the requests table and exit.
    InitDb,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();

    match cli.command {
        Commands::Serve { port, host } => {
            let port = port.unwrap_or(config.port);
            commands::serve::run(config, host, port).await
        },
        Commands::InitDb => commands::init_db::run(&config).await,
    }
}
