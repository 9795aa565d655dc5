//! Integration test common infrastructure.
//!
//! Provides utilities for spawning gateway processes and issuing requests
//! against them.

pub mod server;

#[allow(unused_imports)]
pub use server::TestServer;
