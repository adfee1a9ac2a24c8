mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use mirrorbox::api::{self, ContentId, models::MirrorsResponse};
use mirrorbox::config::Config;
use mirrorbox::observability;
use mirrorbox::resolver::MirrorResolver;

type AnyError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), AnyError> {
    observability::init_tracing();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Server(args) => api::run(config, args.address).await?,
        Commands::Resolve(args) => resolve(&config, &args.identifier)?,
    }

    Ok(())
}

/// One-shot resolution printed as the same envelope the API returns
fn resolve(config: &Config, identifier: &str) -> Result<(), AnyError> {
    let id = ContentId::parse(identifier)?;
    let mirrors = MirrorResolver::from_config(config).resolve(id.as_str())?;

    println!(
        "{}",
        serde_json::to_string_pretty(&MirrorsResponse::new(mirrors))?
    );

    Ok(())
}
