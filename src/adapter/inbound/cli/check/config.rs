use std::path::Path;

use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::config::storage::StorageBackend;

/// Validate the configuration file without starting the server.
///
/// # Errors
/// Returns an error if the file cannot be read or fails validation.
pub fn execute_config<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let path = config_path.as_ref();
    let config = Config::load(path)?;

    output::section("Configuration Check");
    output::field("Config", path.display());
    output::success("Configuration file is valid");

    output::section("Summary");
    output::field("Bind", &config.server.bind);
    output::field(
        "Base path",
        if config.server.base_path.is_empty() {
            "/"
        } else {
            config.server.base_path.as_str()
        },
    );
    output::field("Storage", storage_summary(&config));
    output::field("Locale", &config.messages.default_locale);
    if let Some(dir) = &config.messages.directory {
        output::field("Messages", dir.display());
    }

    if config.auth.enabled {
        output::field("Scope header", &config.auth.scope_header);
    } else {
        output::warning("Scope checks disabled (auth.enabled = false)");
    }

    output::success("Configuration check complete");

    Ok(())
}

fn storage_summary(config: &Config) -> String {
    match config.storage.backend {
        StorageBackend::Memory => "memory".to_string(),
        StorageBackend::Sqlite => format!("sqlite ({})", config.storage.database),
    }
}
