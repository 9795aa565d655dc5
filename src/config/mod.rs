//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Core config struct definitions (Config, ServerConfig)
//! - [`listen`]: HTTP listener configuration (ListenConfig)
//! - [`auth`]: Optional HTTP Basic credentials (AuthConfig)
//! - [`fleet`]: Robot, device, connection and command blocks, and fleet bootstrap
//! - [`validation`]: Startup validation of the whole document

mod auth;
mod defaults;
mod fleet;
mod listen;
mod types;
pub mod validation;

pub use auth::AuthConfig;
pub use fleet::build_fleet;
pub use types::Config;
