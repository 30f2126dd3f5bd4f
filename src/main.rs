use anyhow::Result;
use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use rekomendo::{Commands, Container, Router, Settings};

#[derive(Parser)]
#[command(name = "rekomendo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use the built-in catalog and a canned generator instead of live services
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if dotenvy::dotenv().is_ok() {
        debug!("Loaded environment from .env");
    }

    let container = if cli.offline {
        Container::offline()
    } else {
        let settings = Settings::from_env()?;
        Container::new(&settings)?
    };

    let router = Router::new(&container);
    let output = router.route(cli.command).await?;
    println!("{output}");

    Ok(())
}
