use anyhow::Result;
use std::sync::Arc;
use tokio::sync::broadcast;
use unicodemoticon::config::AppConfig;
use unicodemoticon::tray::TrayManager;
use unicodemoticon::{cli, process};

fn main() -> Result<()> {
    let flags = cli::parse_args(std::env::args_os());
    if flags.help {
        print!("{}", cli::usage());
        return Ok(());
    }
    if flags.version {
        println!("{}", cli::version());
        return Ok(());
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();

    log::info!("Starting UnicodEmoticon...");

    let config = Arc::new(AppConfig::load()?);
    let runtime = process::build_runtime(&config)?;
    runtime.block_on(run(config))
}

async fn run(config: Arc<AppConfig>) -> Result<()> {
    let (shutdown_tx, mut shutdown_rx) = broadcast::channel::<()>(1);

    let _tray = TrayManager::new(config, tokio::runtime::Handle::current(), shutdown_tx)?;

    log::info!("UnicodEmoticon started, pick 1 emoticon and use CTRL+V to paste it");

    shutdown_rx.recv().await.ok();
    log::info!("Shutdown signal received, exiting...");
    Ok(())
}
