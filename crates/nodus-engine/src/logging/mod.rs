//! Logging setup.
//!
//! Engine code logs through the `log` facade; this module installs the
//! `env_logger` backend for binaries.

mod init;

pub use init::{LoggingConfig, init_logging};
