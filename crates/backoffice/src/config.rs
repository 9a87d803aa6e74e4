//! CLI configuration: thin wrapper around `backoffice_config` shared types.
//!
//! Adds resolution that respects `GlobalOpts` overrides (--profile,
//! --base-url, --timeout, --output).

use std::time::Duration;

use clap::ValueEnum;
use url::Url;

use backoffice_api::{TransportConfig, normalize_base_url};
use backoffice_config::Dashboard;

use crate::cli::{GlobalOpts, OutputFormat};
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use backoffice_config::{
    Config, Profile, config_path, load_config, load_config_or_default, save_config,
};

/// Everything a network command needs to build its client.
#[derive(Debug)]
pub struct Target {
    pub profile: Option<String>,
    pub dashboard: Option<Dashboard>,
    pub base_url: Url,
    pub transport: TransportConfig,
}

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "co".into())
}

/// Pick the output format: flag > config default > table.
pub fn output_format(global: &GlobalOpts, config: &Config) -> OutputFormat {
    global
        .output
        .or_else(|| OutputFormat::from_str(&config.defaults.output, true).ok())
        .unwrap_or(OutputFormat::Table)
}

/// Translate config + global flags into a request target.
///
/// `--base-url` wins over the profile's URL. A profile named explicitly
/// with `--profile` must exist; the implicit default may be absent when
/// `--base-url` is given, in which case the target is built from flags alone.
pub fn resolve_target(global: &GlobalOpts, config: &Config) -> Result<Target, CliError> {
    let profile_name = active_profile_name(global, config);
    let profile = config.profiles.get(&profile_name);

    if profile.is_none() && global.profile.is_some() {
        return Err(missing_profile(config, &profile_name));
    }

    let base_url = match (&global.base_url, profile) {
        (Some(raw), _) => normalize_base_url(raw)?,
        (None, Some(profile)) => profile.base_url()?,
        (None, None) if config.profiles.is_empty() => {
            return Err(CliError::NoConfig {
                path: config_path().display().to_string(),
            });
        }
        (None, None) => return Err(missing_profile(config, &profile_name)),
    };

    let transport = match profile {
        Some(profile) => profile.transport_config(&config.defaults),
        None => TransportConfig::default().with_timeout(Duration::from_secs(config.defaults.timeout)),
    };
    let transport = match global.timeout {
        Some(secs) => transport.with_timeout(Duration::from_secs(secs)),
        None => transport,
    };

    Ok(Target {
        profile: profile.map(|_| profile_name),
        dashboard: profile.map(|p| p.dashboard),
        base_url,
        transport,
    })
}

fn missing_profile(config: &Config, name: &str) -> CliError {
    let available = config.profile_names();
    CliError::ProfileNotFound {
        name: name.to_owned(),
        available: if available.is_empty() {
            "(none)".into()
        } else {
            available.join(", ")
        },
    }
}
