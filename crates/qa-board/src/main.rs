//! Q&A board server - entry point.

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use qa_board::config::Config;
use qa_board::server;

#[derive(Parser, Debug)]
#[command(name = "qa-board")]
#[command(about = "Q&A board backend with GitHub sign-in")]
#[command(version)]
struct Cli {
    /// GitHub OAuth application client id
    #[arg(long, env = "GITHUB_CLIENT")]
    github_client: String,

    /// GitHub OAuth application client secret
    #[arg(long, env = "GITHUB_SECRET")]
    github_secret: String,

    /// OAuth callback URL registered with GitHub
    #[arg(long, env = "GITHUB_CALLBACK")]
    github_callback: String,

    /// Frontend base URL for the post-login redirect
    #[arg(long, env = "CLIENT_URL")]
    client_url: String,

    /// Secret used to sign session tokens
    #[arg(long, env = "JWT_SECRET")]
    jwt_secret: String,

    /// HTTP server port
    #[arg(long, default_value = "3000", env = "PORT")]
    port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), port = cli.port, "Starting qa-board");

    let config = Config::new(
        cli.github_client,
        cli.github_secret,
        cli.github_callback,
        cli.client_url,
        cli.jwt_secret,
    );

    server::run(config, cli.port).await
}
