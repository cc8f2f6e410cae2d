//! Repositories for the gateway's static configuration data.

mod endpoint;
mod error;

pub use endpoint::{EndpointRepository, EndpointRepositoryTrait};
pub use error::RepositoryError;
