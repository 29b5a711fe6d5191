mod config;
pub mod roster;

use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;
use types::{Result, err};

pub use crate::config::{CONFIG_FILE, Config};
pub use crate::roster::Roster;

struct State {
    config: Config,
    roster: Roster,
}

static STATE: OnceLock<State> = OnceLock::new();

/// Load configuration and the roster, and start logging.
pub fn init() -> Result<()> {
    let config = Config::load()?;
    init_tracing(&config.log_filter);

    let roster = match &config.roster_path {
        Some(path) => Roster::load(path)?,
        None => {
            tracing::warn!("no roster_path configured, serving an empty roster");
            Roster::default()
        }
    };

    tracing::info!(
        federation = %config.federation_name,
        locale = %config.locale,
        "server initialized"
    );

    STATE
        .set(State { config, roster })
        .map_err(|_| err!("server already initialized"))?;

    Ok(())
}

/// `RUST_LOG` wins over the configured filter.
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn state() -> Result<&'static State> {
    Ok(STATE.get().ok_or_else(|| err!("server not initialized"))?)
}

pub fn config() -> Result<&'static Config> {
    Ok(&state()?.config)
}

pub fn roster() -> Result<&'static Roster> {
    Ok(&state()?.roster)
}
