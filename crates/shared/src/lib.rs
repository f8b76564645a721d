//! # Shared
//! Logging and failure handling shared by the WPS client crates.
//!

#![warn(missing_docs)]

mod failure;
mod logger;

pub use failure::{Failure, log_and_panic};
pub use logger::{LoggerError, init_logger};
