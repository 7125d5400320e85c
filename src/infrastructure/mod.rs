//! Transport implementations.

pub mod http;
pub mod stub;
