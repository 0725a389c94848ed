use clap::Parser as _;
use scoreboard::{
    cli::{Cli, Command},
    config, Config, Scoreboard,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt as _};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command() {
        Command::ConfigTemplate => {
            config::print_config_template();
            return Ok(());
        }
        Command::ConfigInit => {
            config::init_config(cli.config_path)?;
            return Ok(());
        }
        Command::Serve => {}
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{}=debug,tower_http=debug", env!("CARGO_CRATE_NAME")).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load(cli.config_path)?;
    Scoreboard::new(config).serve().await?;

    Ok(())
}
