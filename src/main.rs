use anyhow::Result;
use clap::Parser;
use resume_match::cli::{run, Cli};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(
            EnvFilter::from_default_env()
                .add_directive("resume_match=info".parse().expect("Invalid log directive")),
        )
        .init();

    run(Cli::parse()).await
}
