//! # Generator Errors
//!
//! Error types for the generation lifecycle.
//!
//! ## Error Policy
//!
//! - Calling-sequence mistakes (unconfigured, reconfigured, no construction
//!   algorithm) are fatal to the call
//! - Instrumentation misuse fails fast
//! - A failed fault adjustment aborts generation and is not rolled back

use config::ConfigError;
use event_log::EventError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while generating or adjusting a mesh.
#[derive(Debug, Error)]
pub enum MeshGenError {
    /// `generate` was called before `configure`.
    #[error("generator '{0}' used before it was configured")]
    NotConfigured(String),

    /// `configure` was called a second time.
    #[error("generator '{0}' is already configured")]
    AlreadyConfigured(String),

    /// The generator has no mesh construction algorithm.
    #[error("generator '{0}': mesh construction not implemented")]
    NotImplemented(String),

    /// Requested dimension is out of range or unsupported by the strategy.
    #[error("Invalid dimension {dimension}: {message}")]
    InvalidDimension {
        /// Requested dimension
        dimension: usize,
        /// Why it was rejected
        message: String,
    },

    /// Construction parameters that cannot produce a mesh.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Cells or groups referencing vertices that do not exist.
    #[error("Invalid topology: {0}")]
    InvalidTopology(String),

    /// A fault interface could not modify the mesh.
    #[error("Topology adjustment for fault '{label}' failed: {message}")]
    TopologyAdjustment {
        /// Fault label
        label: String,
        /// Error details
        message: String,
    },

    /// Begin/end bookkeeping misuse.
    #[error(transparent)]
    Event(#[from] EventError),

    /// Invalid settings or scales.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl MeshGenError {
    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology(message.into())
    }

    /// Creates an invalid geometry error.
    pub fn invalid_geometry(message: impl Into<String>) -> Self {
        Self::InvalidGeometry(message.into())
    }

    /// Creates a topology adjustment error for the fault `label`.
    pub fn adjustment(label: impl Into<String>, message: impl Into<String>) -> Self {
        Self::TopologyAdjustment {
            label: label.into(),
            message: message.into(),
        }
    }

    /// True for errors caused by calling the lifecycle in the wrong order.
    pub fn is_configuration_misuse(&self) -> bool {
        matches!(
            self,
            Self::NotConfigured(_) | Self::AlreadyConfigured(_) | Self::NotImplemented(_)
        )
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for generator operations.
pub type MeshGenResult<T> = Result<T, MeshGenError>;
