//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ServerConfig;

/// Filter directives used when `RUST_LOG` is not set.
///
/// Workspace crates log at the configured level; `tower_http` request
/// tracing is raised to `debug` when `DEBUG` is on.
pub fn default_directives(config: &ServerConfig) -> String {
    let level = config.log_level.as_directive();
    let http_level = if config.debug { "debug" } else { level };
    format!("todo_api={level},todo_db={level},tower_http={http_level}")
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init(config: &ServerConfig) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directives(config).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
