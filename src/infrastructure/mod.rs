//! External integrations: configuration loading and the HTTP scheduler
//! client.

pub mod config;
pub mod scheduler;
