//! # Mesh Generator
//!
//! Mesh generation lifecycle with fault-interface topology adjustment.
//!
//! ## Architecture
//!
//! ```text
//! GeneratorSettings (config) → MeshGenerator::configure
//!                                   ↓
//! MeshStrategy::build  →  Mesh  →  FaultInterface::adjust_topology (in order)
//!                                   ↓
//!                      EventLog: <prefix>create ⊃ <prefix>adjustTopology
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use config::{GeneratorSettings, Nondimensional};
//! use event_log::EventTracer;
//! use glam::DVec3;
//! use mesh_generator::{BoxMesher, FaultCohesive, FaultInterface, MeshGenerator};
//!
//! let tracer = Arc::new(EventTracer::new("Mesh Generator"));
//! let mesher = BoxMesher::rectangle((2, 0.0, 2000.0), (2, 0.0, 2000.0)).with_plane("x_mid", 0, 1);
//! let mut generator = MeshGenerator::new("box", Box::new(mesher), tracer);
//! generator.configure(&GeneratorSettings::new(false, true)).unwrap();
//!
//! let fault = FaultCohesive::new("fault", "x_mid", DVec3::X);
//! let faults: [&dyn FaultInterface; 1] = [&fault];
//! let mesh = generator
//!     .generate(2, &Nondimensional::default(), Some(&faults[..]))
//!     .unwrap();
//! assert_eq!(mesh.vertex_count(), 12);
//! ```

pub mod error;
pub mod faults;
pub mod generator;
pub mod mesh;
pub mod strategies;

pub use config::{GeneratorSettings, Nondimensional};
pub use error::{MeshGenError, MeshGenResult};
pub use faults::{FaultCohesive, FaultInterface};
pub use generator::{
    BuildContext, ConfigurableGenerator, MeshGenerator, MeshStrategy, Unextended,
    ADJUST_TOPOLOGY_EVENT, CREATE_EVENT,
};
pub use mesh::{Cell, CellKind, Mesh};
pub use strategies::{Axis, BoxMesher, PlaneGroup};
