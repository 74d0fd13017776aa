// Remote recipe gateway access. The gateway owns all data; this module is
// the only place that talks to it.

pub mod client;
pub mod models;

pub use client::GatewayClient;
