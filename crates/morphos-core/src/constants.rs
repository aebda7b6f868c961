//! Single source of truth for shared simulation constants.
//! Values are tuned for one physics step per rendered frame at ~60 Hz.

/// Default particle population.
pub const DEFAULT_PARTICLE_COUNT: usize = 25_000;

/// Cells per axis of the spatial hash grid.
pub const GRID_DIM: u32 = 60;

/// Side length of a grid cell in world units.
pub const CELL_SIZE: f32 = 1.0;

/// Offset added to world coordinates so `[-30, 30]` maps onto `[0, GRID_DIM)`.
pub const GRID_OFFSET: f32 = GRID_DIM as f32 * CELL_SIZE * 0.5;

/// Total cells in the grid (60^3).
pub const GRID_CELLS: usize = (GRID_DIM * GRID_DIM * GRID_DIM) as usize;

/// Sentinel for "no particle" in the grid's head/next arrays.
pub const EMPTY_SLOT: u32 = 0xFFFFFFFF;

/// Maximum linked-list entries visited per neighbor query.
pub const MAX_NEIGHBOR_VISITS: usize = 8;

/// Spring stiffness pulling particles toward their scaled target.
pub const SPRING_STIFFNESS: f32 = 0.03;

/// Multiplicative velocity drag applied every frame.
pub const VELOCITY_DAMPING: f32 = 0.92;

/// Squared planar radius inside which the pointer repels particles.
pub const POINTER_RADIUS_SQ: f32 = 150.0;

/// Distance at which the pointer falloff reaches zero.
pub const POINTER_FALLOFF: f32 = 12.0;

/// Peak pointer repulsion strength.
pub const POINTER_STRENGTH: f32 = 1.2;

/// Normalized pointer coordinates beyond this magnitude mean "inactive".
pub const POINTER_ACTIVE_LIMIT: f32 = 2.0;

/// Sentinel coordinate written by hosts when no pointer is present.
pub const POINTER_INACTIVE: f32 = 9999.0;

/// Shockwave level above which particles receive random jitter.
pub const JITTER_THRESHOLD: f32 = 0.1;

/// Per-axis jitter half-range at shockwave = 1.
pub const JITTER_SCALE: f32 = 0.5;

/// Distance below which two particles are considered overlapping.
pub const COLLISION_RADIUS: f32 = 0.5;

/// Fraction of the overlap corrected per pass.
pub const COLLISION_SOFTENING: f32 = 0.5;

/// Shockwave multiplicative decay per frame.
pub const SHOCKWAVE_DECAY: f32 = 0.95;

/// Upper bound for the shockwave impulse.
pub const SHOCKWAVE_MAX: f32 = 2.0;

/// Shockwave added when a pointer acquisition fires.
pub const ACQUISITION_SHOCKWAVE: f32 = 1.0;

/// Bass factor decay per frame while no audio is attached.
pub const BASS_DECAY: f32 = 0.95;

/// Lerp factor smoothing band energies toward the latest sample.
pub const BAND_SMOOTHING: f32 = 0.3;

/// Bass factor above which the shockwave is re-injected.
pub const BASS_SHOCK_THRESHOLD: f32 = 0.8;

/// Shockwave gain per unit of bass factor when above threshold.
pub const BASS_SHOCK_GAIN: f32 = 0.5;

/// Fraction of spectrum bins (from the bottom) treated as the low band.
pub const LOW_BAND_FRACTION: f32 = 0.1;

/// Fraction of spectrum bins (from the bottom) where the mid band ends.
pub const MID_BAND_END_FRACTION: f32 = 0.5;

/// Radius of the sphere-like ("earth") shape; also the hit-test base radius.
pub const SPHERE_BASE_RADIUS: f32 = 10.0;

/// Simulation time advanced per frame.
pub const TIME_STEP: f32 = 0.016;

/// Angular rate of the breathing scale oscillation (radians per time unit).
pub const BREATH_RATE: f32 = 1.5;

/// Lerp factor for current scale toward target scale.
pub const SCALE_LERP: f32 = 0.1;

/// Lerp factor for current rotation toward target rotation.
pub const ROTATION_LERP: f32 = 0.08;

/// Bounds for the manually driven target scale.
pub const MIN_SCALE: f32 = 0.2;
pub const MAX_SCALE: f32 = 3.0;

/// Half-height of the cosmetic scan band on the sphere-like shape.
pub const SCAN_BAND_HALF_WIDTH: f32 = 0.4;

/// Per-axis jitter applied to targets inside the scan band.
pub const SCAN_JITTER: f32 = 0.3;

/// Angular rate of the scan band sweep.
pub const SCAN_RATE: f32 = 0.8;
