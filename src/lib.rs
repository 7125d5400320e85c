pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::client::GatewayClient;
pub use config::{Environment, GatewayConfig};
pub use domain::credentials::Credentials;
pub use domain::response::TransactionResponse;
pub use domain::transaction::{SoftDescriptor, TransactionRequest, TransactionType};
pub use error::{GatewayError, Result};
