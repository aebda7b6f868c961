use glam::Vec2;
use morphos_core::constants::{
    BREATH_RATE, MAX_SCALE, MIN_SCALE, ROTATION_LERP, SCALE_LERP, SCAN_RATE, SPHERE_BASE_RADIUS,
    TIME_STEP,
};
use morphos_core::math::{approach, approach_vec2};
use morphos_core::types::Shockwave;
use morphos_core::ShapeKind;

/// Process-wide simulation scalars, advanced once per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    /// Seconds of simulated time. Kept in `f64` so a long-running process
    /// still advances by `TIME_STEP` every frame.
    pub time: f64,
    pub current_scale: f32,
    pub target_scale: f32,
    pub current_rotation: Vec2,
    pub target_rotation: Vec2,
    pub active_shape: ShapeKind,
    pub shockwave: Shockwave,
}

impl SimulationState {
    pub fn new(active_shape: ShapeKind) -> Self {
        Self {
            time: 0.0,
            current_scale: 1.0,
            target_scale: 1.0,
            current_rotation: Vec2::ZERO,
            target_rotation: Vec2::ZERO,
            active_shape,
            shockwave: Shockwave::default(),
        }
    }

    /// One frame-locked step: time, then scale and rotation smoothing.
    pub fn advance(&mut self) {
        self.time += f64::from(TIME_STEP);
        self.current_scale = approach(self.current_scale, self.target_scale, SCALE_LERP);
        self.current_rotation =
            approach_vec2(self.current_rotation, self.target_rotation, ROTATION_LERP);
    }

    /// Scale applied to target positions this frame.
    pub fn effective_scale(&self, breathing_amplitude: f32, audio_gain: f32, bass_factor: f32) -> f32 {
        let breath = 1.0 + breathing_amplitude * phase_sin(self.time, BREATH_RATE);
        let audio = 1.0 + audio_gain * bass_factor;
        self.current_scale * breath * audio
    }

    /// Height of the earth scan band, sweeping pole to pole.
    pub fn scan_band(&self) -> f32 {
        phase_sin(self.time, SCAN_RATE) * SPHERE_BASE_RADIUS
    }

    /// Clamped to `[MIN_SCALE, MAX_SCALE]`; non-finite values are ignored.
    pub fn set_target_scale(&mut self, scale: f32) {
        if scale.is_finite() {
            self.target_scale = scale.clamp(MIN_SCALE, MAX_SCALE);
        }
    }

    pub fn set_target_rotation(&mut self, rotation: Vec2) {
        if rotation.is_finite() {
            self.target_rotation = rotation;
        }
    }
}

/// `sin(time * rate)` evaluated in double precision.
fn phase_sin(time: f64, rate: f32) -> f32 {
    (time * f64::from(rate)).sin() as f32
}
