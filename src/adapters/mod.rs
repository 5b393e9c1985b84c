// Adapters layer: concrete implementations of the domain ports.

pub mod http;
pub mod units;

pub use http::HttpTransport;
pub use units::StandardUnits;
