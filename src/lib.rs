//! Request metadata helpers for HTTP servers: the public address of a client behind reverse
//! proxies, and parsing and ranking of quality value lists such as `Accept`.

pub mod client_ip;
pub mod config;
pub mod error;
pub mod quality;
pub mod util;

pub use client_ip::ClientIpResolver;
pub use client_ip::resolve_client_ip;
pub use config::ResolverConfig;
pub use error::QualityValueError;
pub use quality::Accept;
pub use quality::QualityValue;
pub use quality::Specificity;
pub use quality::parse_quality_values;
pub use quality::sort_quality_values;
pub use util::request_ext::RequestExt;
