//! Config subcommand handlers.

use tracing::info;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts, OutputFormat};
use crate::config::{self, Profile};
use crate::error::CliError;
use crate::output;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Init {
            name,
            dashboard,
            url,
            default,
        } => {
            let profile = Profile {
                dashboard,
                base_url: url,
                timeout: None,
            };
            profile.base_url()?;

            let mut cfg = config::load_config()?;
            info!(%name, %dashboard, "saving profile");
            cfg.profiles.insert(name.clone(), profile);
            if default {
                cfg.default_profile = Some(name.clone());
            }
            config::save_config(&cfg)?;

            if !global.quiet {
                eprintln!("Profile '{name}' saved to {}", config::config_path().display());
            }
            Ok(())
        }

        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), global.quiet);
            Ok(())
        }

        // Effective config: file + env layered over defaults
        ConfigCommand::Show => {
            let cfg = config::load_config()?;
            let out = match config::output_format(global, &cfg) {
                OutputFormat::Table | OutputFormat::Plain => toml::to_string_pretty(&cfg)?,
                structured => output::render_structured(structured, &cfg)?,
            };
            output::print_output(out.trim_end(), global.quiet);
            Ok(())
        }
    }
}
