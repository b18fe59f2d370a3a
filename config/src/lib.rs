//! # Config Crate
//!
//! Centralized configuration for the mesh generation pipeline. Every default
//! and every validated setting consumed by the generators lives here, so the
//! generator crates never parse raw properties themselves.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_DEBUG, DEFAULT_INTERPOLATE};
//! use config::settings::GeneratorSettings;
//!
//! let settings = GeneratorSettings::default();
//! assert_eq!(settings.debug, DEFAULT_DEBUG);
//! assert_eq!(settings.interpolate, DEFAULT_INTERPOLATE);
//!
//! let parsed = GeneratorSettings::from_properties([("debug", "yes")]).unwrap();
//! assert!(parsed.debug);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: defaults defined once, used everywhere
//! - **Fail Fast**: malformed properties are rejected before generation starts
//! - **Immutable Snapshots**: settings are plain `Copy` values

pub mod constants;
pub mod error;
pub mod scales;
pub mod settings;

pub use error::ConfigError;
pub use scales::Nondimensional;
pub use settings::GeneratorSettings;
