// Adapters layer: concrete implementations of the domain ports.

pub mod email;
pub mod http;

pub use email::SmtpNotifier;
pub use http::HttpFareSource;
