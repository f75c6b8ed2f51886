//! Command handlers.

pub mod config;
pub mod create;
pub mod interactive;
