//! Static lookup tables for the codes the gateway returns.
//!
//! All tables are compiled in and read-only.

pub mod avs;
pub mod bank;
pub mod cvv;
pub mod gateway;

pub use avs::{AvsMatch, AvsResult};
pub use bank::{BankResponse, BankResponseCategory};
pub use cvv::{CvvMatch, CvvResult};
