//! Clap derive structures for the `backoffice` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};

use backoffice_config::Dashboard;

// ── Top-Level CLI ────────────────────────────────────────────────────

/// backoffice -- query the CO and Principal dashboard services
#[derive(Debug, Parser)]
#[command(
    name = "backoffice",
    version,
    about = "Query the CO and Principal back-office dashboard services",
    long_about = "Command-line client for the back-office dashboard services.\n\n\
        Lists QR catalogue data, generates merchant QRs and prints\n\
        transaction histories against a configured dashboard profile.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Dashboard profile to use
    #[arg(long, short = 'p', env = "BACKOFFICE_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Service base URL (overrides profile)
    #[arg(long, short = 'b', env = "BACKOFFICE_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Output format [default: from config, else table]
    #[arg(long, short = 'o', env = "BACKOFFICE_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Request timeout in seconds [default: from profile, else 30]
    #[arg(long, env = "BACKOFFICE_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output Enum ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

impl OutputFormat {
    /// Formats that serialize the full response instead of a row view.
    pub fn is_structured(self) -> bool {
        matches!(self, Self::Json | Self::JsonCompact | Self::Yaml)
    }
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// QR catalogue: location types and QR types
    Qr(QrArgs),

    /// Merchant operations: QR generation, transaction history
    #[command(alias = "m")]
    Merchant(MerchantArgs),

    /// Show the spacing scale design tokens
    Spacing,

    /// Inspect the configuration file
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── QR ───────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct QrArgs {
    #[command(subcommand)]
    pub command: QrCommand,
}

#[derive(Debug, Subcommand)]
pub enum QrCommand {
    /// List QR location types
    #[command(alias = "lt")]
    LocationTypes {
        /// Page number
        #[arg(long)]
        page: Option<u32>,
        /// Page size
        #[arg(long)]
        size: Option<u32>,
        /// Filter by location type ID
        #[arg(long)]
        id: Option<String>,
        /// Filter by name
        #[arg(long)]
        name: Option<String>,
    },

    /// List QR types
    Types {
        /// Page number
        #[arg(long)]
        page: Option<u32>,
        /// Page size
        #[arg(long)]
        size: Option<u32>,
        /// Filter by QR type code
        #[arg(long)]
        qr_type: Option<String>,
    },
}

// ── Merchant ─────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct MerchantArgs {
    #[command(subcommand)]
    pub command: MerchantCommand,
}

#[derive(Debug, Subcommand)]
pub enum MerchantCommand {
    /// Generate a merchant QR for an amount
    CreateQr {
        /// Amount to encode in the QR
        #[arg(long)]
        amount: u64,
        /// Merchant code
        #[arg(long)]
        merchant_code: String,
    },

    /// Render a transaction history document and print its URL
    Print {
        /// Transaction ID
        #[arg(long)]
        id: String,
    },
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Add or replace a dashboard profile in the config file
    Init {
        /// Profile name
        name: String,
        /// Dashboard the profile talks to (co, principal)
        #[arg(long)]
        dashboard: Dashboard,
        /// Service base URL for this profile
        #[arg(long)]
        url: String,
        /// Make this the default profile
        #[arg(long)]
        default: bool,
    },
    /// Print the config file path
    Path,
    /// Print the effective configuration
    Show,
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell
    pub shell: clap_complete::Shell,
}
