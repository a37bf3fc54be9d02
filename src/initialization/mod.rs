//! Application initialization.
//!
//! Currently only logger setup; kept as a module so the binary has one
//! place to pull startup routines from.

mod logger;

pub use logger::init_logger_with;
