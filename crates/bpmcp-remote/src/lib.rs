pub mod error;
pub mod http;

pub use error::RemoteError;
pub use http::HttpTransport;
