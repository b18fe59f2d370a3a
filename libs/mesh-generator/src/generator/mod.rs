//! # Mesh Generator
//!
//! The generation lifecycle:
//!
//! ```text
//! MeshGenerator::new → configure(settings) → generate(dim, scales, faults)
//!                                             ├─ <prefix>create
//!                                             │   ├─ strategy.build()
//!                                             │   └─ <prefix>adjustTopology
//!                                             │       └─ fault.adjust_topology() in order
//!                                             └─ Mesh
//! ```
//!
//! `adjustTopology` is always nested inside `create`, and both events are
//! closed on every exit path.

use crate::error::{MeshGenError, MeshGenResult};
use crate::faults::FaultInterface;
use crate::mesh::Mesh;
use config::constants::{
    DEFAULT_GENERATOR_NAME, EVENT_PREFIX_SEPARATOR, GENERATOR_EVENT_CLASS, MAX_DIMENSION,
};
use config::{GeneratorSettings, Nondimensional};
use event_log::{in_event, EventLog, EventTracer};
use std::sync::Arc;
use tracing::debug;

/// Phase bracketing a whole `generate` call.
pub const CREATE_EVENT: &str = "create";

/// Phase bracketing the fault pass.
pub const ADJUST_TOPOLOGY_EVENT: &str = "adjustTopology";

const EVENTS: [&str; 2] = [CREATE_EVENT, ADJUST_TOPOLOGY_EVENT];

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Identity plus the settings consumed by construction strategies.
///
/// Settings are copied in exactly once; until then the flags read as their
/// defaults and generation is refused.
#[derive(Debug, Clone)]
pub struct ConfigurableGenerator {
    identity: String,
    settings: Option<GeneratorSettings>,
}

impl ConfigurableGenerator {
    pub fn new(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            settings: None,
        }
    }

    #[inline]
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Copies the validated settings into this generator.
    ///
    /// Fails if the generator was already configured.
    pub fn configure(&mut self, settings: &GeneratorSettings) -> MeshGenResult<()> {
        if self.settings.is_some() {
            return Err(MeshGenError::AlreadyConfigured(self.identity.clone()));
        }
        self.settings = Some(*settings);
        Ok(())
    }

    #[inline]
    pub fn is_configured(&self) -> bool {
        self.settings.is_some()
    }

    pub fn debug(&self) -> bool {
        self.settings.unwrap_or_default().debug
    }

    pub fn interpolate(&self) -> bool {
        self.settings.unwrap_or_default().interpolate
    }

    /// The configured settings, or a configuration-misuse error.
    pub fn settings(&self) -> MeshGenResult<GeneratorSettings> {
        self.settings
            .ok_or_else(|| MeshGenError::NotConfigured(self.identity.clone()))
    }
}

impl Default for ConfigurableGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_GENERATOR_NAME)
    }
}

// =============================================================================
// CONSTRUCTION STRATEGY
// =============================================================================

/// Everything a strategy may consult while building a mesh.
#[derive(Debug, Clone, Copy)]
pub struct BuildContext<'a> {
    /// Spatial dimension requested by the caller.
    pub dimension: usize,
    /// Scales used to nondimensionalize coordinates.
    pub normalizer: &'a Nondimensional,
    /// Configured flags.
    pub settings: GeneratorSettings,
    /// Identity of the generator running the strategy.
    pub identity: &'a str,
}

/// Mesh construction algorithm plugged into a [`MeshGenerator`].
///
/// Implementations should honor `settings.interpolate` (build intermediate
/// topology) and `settings.debug` (extra diagnostics).
pub trait MeshStrategy {
    fn build(&self, ctx: &BuildContext<'_>) -> MeshGenResult<Mesh>;
}

/// Strategy of a generator with no construction algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unextended;

impl MeshStrategy for Unextended {
    fn build(&self, ctx: &BuildContext<'_>) -> MeshGenResult<Mesh> {
        Err(MeshGenError::NotImplemented(ctx.identity.to_string()))
    }
}

// =============================================================================
// GENERATOR
// =============================================================================

/// Orchestrates mesh construction and fault topology adjustment.
///
/// Calling [`generate`](Self::generate) twice is allowed but is not promised
/// to give identical meshes; that depends on the strategy.
///
/// # Example
///
/// ```rust
/// use config::{GeneratorSettings, Nondimensional};
/// use mesh_generator::{BoxMesher, MeshGenerator};
///
/// let tracer = MeshGenerator::default_tracer();
/// let mut generator =
///     MeshGenerator::new("box", Box::new(BoxMesher::line(4, 0.0, 1.0)), tracer.clone());
/// generator.configure(&GeneratorSettings::default()).unwrap();
///
/// let mesh = generator.generate(1, &Nondimensional::identity(), None).unwrap();
/// assert_eq!(mesh.cell_count(), 4);
/// assert!(tracer.running_events().is_empty());
/// ```
pub struct MeshGenerator {
    base: ConfigurableGenerator,
    logging_prefix: String,
    strategy: Box<dyn MeshStrategy>,
    events: Arc<dyn EventLog>,
}

impl MeshGenerator {
    /// Creates a generator and registers its events, prefixed by `identity`.
    pub fn new(
        identity: impl Into<String>,
        strategy: Box<dyn MeshStrategy>,
        events: Arc<dyn EventLog>,
    ) -> Self {
        let base = ConfigurableGenerator::new(identity);
        let logging_prefix = format!("{}{EVENT_PREFIX_SEPARATOR}", base.identity());
        let generator = Self {
            base,
            logging_prefix,
            strategy,
            events,
        };
        generator.register_events();
        generator
    }

    /// Creates a generator under the default identity, `meshgenerator`.
    pub fn unnamed(strategy: Box<dyn MeshStrategy>, events: Arc<dyn EventLog>) -> Self {
        Self::new(DEFAULT_GENERATOR_NAME, strategy, events)
    }

    /// Tracer reporting under the generator class name, `Mesh Generator`.
    pub fn default_tracer() -> Arc<EventTracer> {
        Arc::new(EventTracer::new(GENERATOR_EVENT_CLASS))
    }

    /// Creates a generator without a construction algorithm.
    ///
    /// Generating with it fails with [`MeshGenError::NotImplemented`].
    pub fn base(identity: impl Into<String>, events: Arc<dyn EventLog>) -> Self {
        Self::new(identity, Box::new(Unextended), events)
    }

    /// Replaces the event prefix and registers the events under it.
    pub fn with_logging_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.logging_prefix = prefix.into();
        self.register_events();
        self
    }

    pub fn configure(&mut self, settings: &GeneratorSettings) -> MeshGenResult<()> {
        self.base.configure(settings)
    }

    #[inline]
    pub fn identity(&self) -> &str {
        self.base.identity()
    }

    #[inline]
    pub fn logging_prefix(&self) -> &str {
        &self.logging_prefix
    }

    #[inline]
    pub fn is_configured(&self) -> bool {
        self.base.is_configured()
    }

    #[inline]
    pub fn debug(&self) -> bool {
        self.base.debug()
    }

    #[inline]
    pub fn interpolate(&self) -> bool {
        self.base.interpolate()
    }

    /// Full event name for `phase` under this generator's prefix.
    pub fn event_name(&self, phase: &str) -> String {
        format!("{}{phase}", self.logging_prefix)
    }

    /// Builds a mesh and applies `faults` to it, in order.
    ///
    /// Fails without opening any event if the generator is unconfigured.
    /// A fault failure aborts the call; earlier faults are not undone.
    pub fn generate(
        &self,
        dimension: usize,
        normalizer: &Nondimensional,
        faults: Option<&[&dyn FaultInterface]>,
    ) -> MeshGenResult<Mesh> {
        let settings = self.base.settings()?;
        in_event(&*self.events, &self.event_name(CREATE_EVENT), || {
            if dimension == 0 || dimension > MAX_DIMENSION {
                return Err(MeshGenError::InvalidDimension {
                    dimension,
                    message: format!("expected 1..={MAX_DIMENSION}"),
                });
            }
            let ctx = BuildContext {
                dimension,
                normalizer,
                settings,
                identity: self.identity(),
            };
            let mut mesh = self.strategy.build(&ctx)?;
            if settings.debug {
                debug!(
                    generator = self.identity(),
                    vertices = mesh.vertex_count(),
                    cells = mesh.cell_count(),
                    "Mesh constructed."
                );
            }
            self.adjust_topology(&mut mesh, faults)?;
            Ok(mesh)
        })
    }

    /// Applies each fault's topology change to `mesh`, strictly in order.
    ///
    /// With no faults this only emits the event pair.
    pub fn adjust_topology(
        &self,
        mesh: &mut Mesh,
        faults: Option<&[&dyn FaultInterface]>,
    ) -> MeshGenResult<()> {
        in_event(&*self.events, &self.event_name(ADJUST_TOPOLOGY_EVENT), || {
            for fault in faults.unwrap_or_default() {
                debug!(
                    generator = self.identity(),
                    fault = fault.label(),
                    "Adjusting topology for fault."
                );
                fault.adjust_topology(mesh)?;
            }
            Ok(())
        })
    }

    fn register_events(&self) {
        for phase in EVENTS {
            self.events.register_event(&self.event_name(phase));
        }
    }
}

impl std::fmt::Debug for MeshGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MeshGenerator")
            .field("base", &self.base)
            .field("logging_prefix", &self.logging_prefix)
            .finish_non_exhaustive()
    }
}
