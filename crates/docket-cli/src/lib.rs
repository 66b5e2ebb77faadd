//! docket-cli library root.
//!
//! Exposes the session, command grammar, config and host bridges so that
//! integration tests can drive a session without a terminal.

pub mod commands;
pub mod config;
pub mod hosts;
pub mod repl;
pub mod session;
