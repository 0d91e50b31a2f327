//! Logging setup.
//!
//! The engine itself only emits through the `log` facade. Binaries call
//! [`init_logging`] once to install `env_logger` as the backend.

mod init;

pub use init::{LoggingConfig, init_logging};
