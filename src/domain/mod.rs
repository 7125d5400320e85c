//! Gateway domain: credentials, requests, signing, responses and code tables.

pub mod codes;
pub mod credentials;
pub mod ports;
pub mod response;
pub mod signature;
pub mod transaction;
