//! Centralized constants shared across the mesh generation pipeline.
//!
//! Each public item documents its purpose and provides a minimal usage
//! example so downstream crates can stay declarative and avoid scattering
//! literals.

// =============================================================================
// GENERATOR DEFAULTS
// =============================================================================

/// Default value of the `debug` property.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_DEBUG;
/// assert!(!DEFAULT_DEBUG);
/// ```
pub const DEFAULT_DEBUG: bool = false;

/// Default value of the `interpolate` property. When false, generators only
/// build the cell-vertex structure.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_INTERPOLATE;
/// assert!(!DEFAULT_INTERPOLATE);
/// ```
pub const DEFAULT_INTERPOLATE: bool = false;

/// Identity given to a generator when the caller does not name it.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_GENERATOR_NAME;
/// assert_eq!(DEFAULT_GENERATOR_NAME, "meshgenerator");
/// ```
pub const DEFAULT_GENERATOR_NAME: &str = "meshgenerator";

/// Class name reported alongside generator timing events.
///
/// # Examples
/// ```
/// use config::constants::GENERATOR_EVENT_CLASS;
/// assert!(!GENERATOR_EVENT_CLASS.is_empty());
/// ```
pub const GENERATOR_EVENT_CLASS: &str = "Mesh Generator";

/// Separator placed between a generator identity and its event names.
///
/// # Examples
/// ```
/// use config::constants::EVENT_PREFIX_SEPARATOR;
/// let name = format!("box{EVENT_PREFIX_SEPARATOR}create");
/// assert_eq!(name, "box.create");
/// ```
pub const EVENT_PREFIX_SEPARATOR: &str = ".";

// =============================================================================
// PROPERTY KEYS
// =============================================================================

/// Property key holding the debug flag.
pub const PROPERTY_DEBUG: &str = "debug";

/// Property key holding the interpolate flag.
pub const PROPERTY_INTERPOLATE: &str = "interpolate";

// =============================================================================
// LIMITS
// =============================================================================

/// Largest spatial dimension a generator may be asked for.
///
/// # Examples
/// ```
/// use config::constants::MAX_DIMENSION;
/// assert_eq!(MAX_DIMENSION, 3);
/// ```
pub const MAX_DIMENSION: usize = 3;

// =============================================================================
// SCALES
// =============================================================================

/// Default length scale (meters).
pub const DEFAULT_LENGTH_SCALE: f64 = 1.0e3;

/// Default pressure scale (pascals).
pub const DEFAULT_PRESSURE_SCALE: f64 = 3.0e10;

/// Default time scale (seconds).
pub const DEFAULT_TIME_SCALE: f64 = 1.0;

/// Default density scale (kilograms per cubic meter).
pub const DEFAULT_DENSITY_SCALE: f64 = 3.0e3;
