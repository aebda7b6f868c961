use glam::{Vec2, Vec3};
use morphos_audio::{AudioModulator, BandEnergies};
use morphos_core::constants::ACQUISITION_SHOCKWAVE;
use morphos_core::{MorphosError, ShapeKind, SimConfig};
use morphos_shapes::{ShapeField, ShapeLibrary};

use crate::collision::{resolve_collisions, CollisionParams};
pub use crate::commands::SimCommand;
use crate::commands::MAX_COMMANDS;
use crate::grid::SpatialHashGrid;
use crate::integrator::{integrate, ForceContext};
pub use crate::interaction::{AcquisitionEvent, PointerSample};
use crate::interaction::InteractionResolver;
use crate::particles::ParticleBuffer;
use crate::state::SimulationState;

/// External inputs sampled once at the top of a frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub pointer: PointerSample,
    /// None when no audio source is attached.
    pub audio: Option<BandEnergies>,
}

/// Read-only scalars for rendering and colour logic.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Telemetry {
    pub time: f64,
    pub bass_factor: f32,
    pub mid_level: f32,
    pub high_level: f32,
    pub shockwave: f32,
    pub current_scale: f32,
    pub effective_scale: f32,
    pub current_rotation: Vec2,
}

/// Everything a host needs from one `tick`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameReport {
    /// False when paused and no single step was pending.
    pub ticked: bool,
    pub acquisition: Option<AcquisitionEvent>,
    /// Pointer is over the hittable shape (cursor highlight).
    pub cursor_hit: bool,
    pub telemetry: Telemetry,
    /// Particles inside the grid domain this frame.
    pub grid_occupancy: usize,
}

/// Single public struct owning the whole particle simulation.
///
/// All buffers are allocated at construction; `tick` does no allocation.
pub struct SimPipeline {
    config: SimConfig,
    library: ShapeLibrary,
    particles: ParticleBuffer,
    grid: SpatialHashGrid,
    state: SimulationState,
    audio: AudioModulator,
    interaction: InteractionResolver,
    pending_commands: Vec<SimCommand>,
    last_report: FrameReport,
    tick_count: u64,
    paused: bool,
    single_step_requested: bool,
}

impl SimPipeline {
    /// Validate the config, generate every configured shape and scatter the particles.
    pub fn new(config: SimConfig) -> Result<Self, MorphosError> {
        config.validate()?;
        let library = ShapeLibrary::generate(&config.shapes, config.particle_count, config.seed);
        Self::with_library(config, library)
    }

    /// Build around an already generated library.
    pub fn with_library(config: SimConfig, library: ShapeLibrary) -> Result<Self, MorphosError> {
        config.validate()?;
        if library.particle_count() != config.particle_count {
            return Err(MorphosError::ParticleCountMismatch {
                expected: config.particle_count,
                actual: library.particle_count(),
            });
        }
        if !library.contains(config.initial_shape) {
            return Err(MorphosError::UnknownShape(config.initial_shape.to_string()));
        }

        let count = config.particle_count;
        let particles = ParticleBuffer::scattered(count, config.initial_spread, config.seed);
        let state = SimulationState::new(config.initial_shape);

        log::info!(
            "SimPipeline: {} particles, {} shapes, initial shape '{}'",
            count,
            library.kinds().count(),
            config.initial_shape
        );

        let mut pipeline = Self {
            config,
            library,
            particles,
            grid: SpatialHashGrid::new(count),
            state,
            audio: AudioModulator::new(),
            interaction: InteractionResolver::new(),
            pending_commands: Vec::with_capacity(MAX_COMMANDS),
            last_report: FrameReport::default(),
            tick_count: 0,
            paused: false,
            single_step_requested: false,
        };
        pipeline.last_report.telemetry = pipeline.telemetry(pipeline.effective_scale());
        Ok(pipeline)
    }

    /// Switch the active shape immediately.
    ///
    /// Unknown or non-generated names are rejected and the active shape is kept.
    pub fn set_active_shape(&mut self, name: &str) -> Result<(), MorphosError> {
        let kind = name
            .parse::<ShapeKind>()
            .ok()
            .filter(|k| self.library.contains(*k));
        match kind {
            Some(kind) => {
                self.switch_shape(kind);
                Ok(())
            }
            None => {
                log::warn!(
                    "Rejected shape switch to '{}', keeping '{}'",
                    name,
                    self.state.active_shape
                );
                Err(MorphosError::UnknownShape(name.to_string()))
            }
        }
    }

    fn switch_shape(&mut self, kind: ShapeKind) {
        if kind != self.state.active_shape {
            log::info!("Active shape: '{}' -> '{}'", self.state.active_shape, kind);
            self.state.active_shape = kind;
        }
    }

    /// Enqueue a host command for the next tick. Dropped when the queue is full.
    pub fn enqueue_command(&mut self, cmd: SimCommand) {
        if self.pending_commands.len() < MAX_COMMANDS {
            self.pending_commands.push(cmd);
        } else {
            log::warn!("Command queue full, dropping {:?}", cmd);
        }
    }

    fn apply_commands(&mut self) {
        let mut commands = std::mem::take(&mut self.pending_commands);
        for cmd in commands.drain(..) {
            match cmd {
                SimCommand::SetShape(kind) => {
                    if self.library.contains(kind) {
                        self.switch_shape(kind);
                    } else {
                        log::warn!("Ignoring SetShape('{}'): shape was not generated", kind);
                    }
                }
                SimCommand::SetTargetScale(scale) => self.state.set_target_scale(scale),
                SimCommand::SetTargetRotation(rotation) => {
                    self.state.set_target_rotation(rotation)
                }
            }
        }
        // Hand the (now empty) allocation back.
        self.pending_commands = commands;
    }

    /// Run one frame: commands, audio, state, pointer, integration + grid, collisions.
    pub fn tick(&mut self, input: &FrameInput) -> FrameReport {
        self.apply_commands();

        if self.paused && !self.single_step_requested {
            return self.skipped_report();
        }

        let shape = self.state.active_shape;
        let Some(field) = self.library.get(shape) else {
            // Switches are validated against the library, so this only
            // trips if the two drift apart. Nothing advances.
            log::warn!("No field for active shape '{}', frame skipped", shape);
            return self.skipped_report();
        };
        self.single_step_requested = false;

        self.audio.update(input.audio.as_ref(), &mut self.state.shockwave);
        self.state.advance();
        let effective_scale = self.effective_scale();

        let outcome = self
            .interaction
            .resolve(&input.pointer, shape, effective_scale);
        if let Some(event) = outcome.event {
            log::debug!("Target acquired at ({:.3}, {:.3})", event.x, event.y);
            self.state.shockwave.inject(ACQUISITION_SHOCKWAVE);
        }

        let shockwave = self.state.shockwave;
        let ctx = ForceContext {
            effective_scale,
            pointer: outcome.point.filter(|_| !shape.is_stable()),
            jitter: if shockwave.is_jittering() { shockwave.value() } else { 0.0 },
            scan_band: (shape == ShapeKind::Earth).then(|| self.state.scan_band()),
            stiffness: self.config.spring_stiffness,
            damping: self.config.damping,
            frame: self.tick_count as u32,
        };
        let grid_occupancy = integrate(&mut self.particles, field, &ctx, &mut self.grid);

        if self.config.collisions_enabled {
            let params = CollisionParams {
                radius: self.config.collision_radius,
                softening: self.config.collision_softening,
                max_visits: self.config.max_neighbor_visits,
            };
            resolve_collisions(self.particles.positions_mut(), &self.grid, &params);
        }

        self.tick_count += 1;
        self.last_report = FrameReport {
            ticked: true,
            acquisition: outcome.event,
            cursor_hit: outcome.hit,
            telemetry: self.telemetry(effective_scale),
            grid_occupancy,
        };
        self.last_report
    }

    /// Previous frame's report, marked as not ticked.
    fn skipped_report(&self) -> FrameReport {
        FrameReport {
            ticked: false,
            acquisition: None,
            ..self.last_report
        }
    }

    fn effective_scale(&self) -> f32 {
        self.state.effective_scale(
            self.config.breathing_amplitude,
            self.config.audio_scale_gain,
            self.audio.bass_factor(),
        )
    }

    fn telemetry(&self, effective_scale: f32) -> Telemetry {
        Telemetry {
            time: self.state.time,
            bass_factor: self.audio.bass_factor(),
            mid_level: self.audio.mid_level(),
            high_level: self.audio.high_level(),
            shockwave: self.state.shockwave.value(),
            current_scale: self.state.current_scale,
            effective_scale,
            current_rotation: self.state.current_rotation,
        }
    }

    /// Particle positions, updated in place every frame.
    pub fn positions(&self) -> &[Vec3] {
        self.particles.positions()
    }

    /// N×3 floats for upload to a renderer.
    pub fn position_buffer(&self) -> &[f32] {
        self.particles.as_flat()
    }

    /// Move every particle to one point, at rest.
    pub fn reset_particles(&mut self, position: Vec3) {
        self.particles.reset(position);
    }

    /// Field of the active shape.
    pub fn active_field(&self) -> Option<&ShapeField> {
        self.library.get(self.state.active_shape)
    }

    pub fn active_shape(&self) -> ShapeKind {
        self.state.active_shape
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Telemetry as of the last completed frame.
    pub fn last_telemetry(&self) -> Telemetry {
        self.last_report.telemetry
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn set_audio_enabled(&mut self, enabled: bool) {
        self.audio.set_enabled(enabled);
    }

    /// Pause or resume. Commands are still applied while paused.
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Toggle pause state.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Request a single simulation step (advances by exactly 1 tick).
    pub fn request_single_step(&mut self) {
        self.single_step_requested = true;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}
