use std::path::PathBuf;
use std::process;

use clap::Parser;
use nowplaying::{render, run, Config};
use tracing::error;

#[derive(Debug, Parser)]
#[command(name = "nowplaying", version, about = "Write the current Spotify track and its lyrics to a README")]
struct Cli {
    /// File to overwrite with the rendered document.
    #[arg(long, short, default_value = "README.md")]
    output: PathBuf,

    /// Print the rendered document instead of writing it.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = start(cli).await {
        error!("{:#}", e);
        process::exit(1);
    }
}

async fn start(cli: Cli) -> anyhow::Result<()> {
    let mut config = Config::from_env()?;
    config.output = cli.output;

    let client = reqwest::Client::new();
    let outcome = if cli.dry_run {
        render(&config, &client).await?
    } else {
        run(&config, &client).await?
    };

    println!("{outcome}");
    Ok(())
}
