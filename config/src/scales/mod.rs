//! Scales used to nondimensionalize physical quantities.
//!
//! Generators receive a [`Nondimensional`] policy and pass it through to the
//! construction strategy, which uses the length scale to turn dimensional
//! coordinates into nondimensional ones.

use crate::constants::{
    DEFAULT_DENSITY_SCALE, DEFAULT_LENGTH_SCALE, DEFAULT_PRESSURE_SCALE, DEFAULT_TIME_SCALE,
};
use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// Set of positive scales for length, pressure, time and density.
///
/// # Examples
/// ```
/// use config::Nondimensional;
/// let scales = Nondimensional::default();
/// let x = scales.nondimensionalize(2000.0, scales.length_scale());
/// assert_eq!(x, 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Nondimensional {
    length: f64,
    pressure: f64,
    time: f64,
    density: f64,
}

impl Nondimensional {
    /// Builds a set of scales, rejecting any that is not strictly positive.
    pub fn new(length: f64, pressure: f64, time: f64, density: f64) -> ConfigResult<Self> {
        Ok(Self {
            length: check_scale("length", length)?,
            pressure: check_scale("pressure", pressure)?,
            time: check_scale("time", time)?,
            density: check_scale("density", density)?,
        })
    }

    /// Scales with every value equal to one; coordinates pass through unchanged.
    pub fn identity() -> Self {
        Self {
            length: 1.0,
            pressure: 1.0,
            time: 1.0,
            density: 1.0,
        }
    }

    /// Returns a copy with a different length scale.
    pub fn with_length_scale(self, length: f64) -> ConfigResult<Self> {
        Ok(Self {
            length: check_scale("length", length)?,
            ..self
        })
    }

    #[inline]
    pub fn length_scale(&self) -> f64 {
        self.length
    }

    #[inline]
    pub fn pressure_scale(&self) -> f64 {
        self.pressure
    }

    #[inline]
    pub fn time_scale(&self) -> f64 {
        self.time
    }

    #[inline]
    pub fn density_scale(&self) -> f64 {
        self.density
    }

    /// Divides a dimensional value by `scale`.
    #[inline]
    pub fn nondimensionalize(&self, value: f64, scale: f64) -> f64 {
        value / scale
    }

    /// Multiplies a nondimensional value by `scale`.
    #[inline]
    pub fn dimensionalize(&self, value: f64, scale: f64) -> f64 {
        value * scale
    }
}

impl Default for Nondimensional {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH_SCALE,
            pressure: DEFAULT_PRESSURE_SCALE,
            time: DEFAULT_TIME_SCALE,
            density: DEFAULT_DENSITY_SCALE,
        }
    }
}

fn check_scale(name: &'static str, value: f64) -> ConfigResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidScale { name, value })
    }
}
