//! Application layer: the gateway client that ties signing, transport and
//! response classification together.

pub mod client;
