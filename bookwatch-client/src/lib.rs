use tracing::info;

pub mod app;
pub mod cli;
pub mod config;
pub mod notify;
pub mod platform;
pub mod source;
pub mod surface;
pub mod widget;

#[cfg(test)]
pub(crate) mod testing;

pub use cli::{Cli, Command};
pub use config::{ClientConfig, load_config, resolve_config_path};
pub use widget::Widget;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),
    #[error("http error: {0}")]
    Http(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    // stdout belongs to the console surface
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

pub async fn run(cli: Cli) -> Result<(), AppError> {
    init_tracing();

    let (cfg_path, mut cfg) = ClientConfig::find_and_load(cli.config.clone())?;
    info!(path=?cfg_path, "loaded config");
    cfg.apply_overrides(cli.server.as_deref(), cli.mins.as_deref());

    match &cli.command {
        Some(Command::Fetch) => app::fetch::run(&cfg).await,
        None => app::console::run(cfg).await,
    }
}
