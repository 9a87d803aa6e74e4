mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use backoffice_api::{HttpTransport, ServiceClient};

use crate::cli::{Cli, Command, GlobalOpts, OutputFormat};
use crate::commands::Client;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let Cli { global, command } = cli;

    match command {
        // Local commands never touch the network
        Command::Config(args) => commands::config_cmd::handle(args, &global),

        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "backoffice", &mut std::io::stdout());
            Ok(())
        }

        Command::Spacing => {
            let cfg = config::load_config_or_default();
            commands::spacing::handle(config::output_format(&global, &cfg), global.quiet)
        }

        Command::Qr(args) => {
            let (client, format) = connect(&global)?;
            commands::qr::handle(&client, args, format, global.quiet).await
        }

        Command::Merchant(args) => {
            let (client, format) = connect(&global)?;
            commands::merchant::handle(&client, args, format, global.quiet).await
        }
    }
}

/// Build a client for the active profile, honouring flag overrides.
fn connect(global: &GlobalOpts) -> Result<(Client, OutputFormat), CliError> {
    let cfg = config::load_config()?;
    let target = config::resolve_target(global, &cfg)?;
    let format = config::output_format(global, &cfg);

    let transport = HttpTransport::new(&target.transport)?;
    let client = ServiceClient::new(transport, target.base_url.as_str());

    tracing::debug!(
        profile = target.profile.as_deref().unwrap_or("-"),
        dashboard = target.dashboard.map_or("-", Into::into),
        base_url = client.base_url(),
        "resolved target"
    );
    Ok((client, format))
}
