//! Handler for the `serve` command.

use tracing::info;

use crate::adapter::inbound::cli::command::ServeArgs;
use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;

/// Execute the serve command.
///
/// # Errors
/// Returns an error if configuration is invalid or the server fails.
pub async fn execute(args: &ServeArgs) -> Result<()> {
    let mut config = Config::load(&args.config)?;
    apply_overrides(&mut config, args);
    config.bind_addr()?;

    if !args.json_logs && !output::is_quiet() {
        output::header(env!("CARGO_PKG_VERSION"));
        output::field("Config", args.config.display());
        output::field("Bind", &config.server.bind);
        output::field("Storage", format!("{:?}", config.storage.backend).to_lowercase());
    }

    config.init_logging();
    info!(version = env!("CARGO_PKG_VERSION"), "catalogue starting");

    bootstrap::serve(config).await
}

fn apply_overrides(config: &mut Config, args: &ServeArgs) {
    if let Some(bind) = &args.bind {
        config.server.bind = bind.clone();
    }
    if let Some(level) = &args.log_level {
        config.logging.level = level.clone();
    }
    if args.json_logs {
        config.logging.format = "json".to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn overrides_replace_file_values() {
        let mut config = Config::default();
        let args = ServeArgs {
            config: PathBuf::from("config.toml"),
            bind: Some("0.0.0.0:9000".to_string()),
            log_level: Some("debug".to_string()),
            json_logs: true,
        };

        apply_overrides(&mut config, &args);

        assert_eq!(config.server.bind, "0.0.0.0:9000");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn absent_overrides_keep_file_values() {
        let mut config = Config::default();
        let args = ServeArgs {
            config: PathBuf::from("config.toml"),
            bind: None,
            log_level: None,
            json_logs: false,
        };

        apply_overrides(&mut config, &args);

        assert_eq!(config.server.bind, "127.0.0.1:8081");
        assert_eq!(config.logging.format, "pretty");
    }
}
