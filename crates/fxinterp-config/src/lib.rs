//! fxinterp Configuration Layer
//!
//! User settings for the fxinterp tools: how results are displayed and which
//! epoch convention new engines use. Sample data is never persisted here.
//!
//! # Example
//!
//! ```rust
//! use fxinterp_config::{ConfigKey, InterpConfig, Validate};
//!
//! let mut config = InterpConfig::default();
//! assert_eq!(config.precision, 4);
//!
//! config.set(ConfigKey::Precision, "2").unwrap();
//! config.set(ConfigKey::Epoch, "reference:2002-01-01").unwrap();
//! assert!(config.is_valid());
//!
//! assert!(config.set(ConfigKey::Precision, "42").is_err());
//! ```
//!
//! # Storage
//!
//! [`ConfigStore`] reads and writes the settings as JSON, by default at
//! `<config dir>/fxinterp/config.json`. A missing file means defaults.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod settings;
mod store;

pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use settings::{ConfigKey, DisplayFormat, InterpConfig, MAX_PRECISION, MIN_PRECISION};
pub use store::ConfigStore;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{ConfigError, ConfigResult, Validate};
    pub use crate::settings::{ConfigKey, DisplayFormat, InterpConfig};
    pub use crate::store::ConfigStore;
}
