//! Transiter HTTP API client.

mod client;
mod config;

pub use client::TransiterClient;
pub use config::{DEFAULT_ADDR, DEFAULT_SYSTEM, TransiterConfig};
