pub mod catalog;
pub mod dispatch;
pub mod error;
pub mod request;
pub mod traits;
pub mod types;

pub use catalog::{find_operation, OPERATIONS};
pub use dispatch::dispatch;
pub use error::Error;
pub use traits::RemoteTransport;
pub use types::{
    ArgKind, ArgSpec, ArgValue, Encoding, HttpMethod, Inclusion, Operation, OutboundRequest,
    Payload, RemoteResponse,
};
