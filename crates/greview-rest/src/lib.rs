pub mod error;
pub mod http_client;
pub mod transport;

pub use error::RestError;
pub use http_client::HttpReviewClient;
pub use transport::{Credentials, RemoteConfig, ReviewTransport};
