//! Command handlers: bridge CLI args -> fetchers -> output formatting.

pub mod config_cmd;
pub mod merchant;
pub mod qr;
pub mod spacing;

use backoffice_api::{HttpTransport, ServiceClient};

/// The client every network-bound handler talks through.
pub type Client = ServiceClient<HttpTransport>;
