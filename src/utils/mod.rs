//! Utility functions shared by the library and the binary.
//!
//! ## Modules
//!
//! - [`app_data`] - Configuration and app data directory (XDG-compliant)
//! - [`encoding`] - Native-endian record helpers

pub mod app_data;
pub mod encoding;

pub use app_data::*;
pub use encoding::*;
