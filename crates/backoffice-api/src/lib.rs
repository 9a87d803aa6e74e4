// backoffice-api: typed service client shared by the CO and Principal dashboards

pub mod error;
pub mod fetchers;
pub mod request;
pub mod transport;
pub mod types;

pub use error::Error;
pub use fetchers::ServiceClient;
pub use request::{Method, Request, normalize_base_url};
pub use transport::{HttpTransport, Transport, TransportConfig};
