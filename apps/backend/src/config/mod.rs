//! Environment-driven configuration, read once at startup.

pub mod db;
pub mod server;
