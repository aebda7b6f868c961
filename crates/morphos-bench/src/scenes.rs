use std::f32::consts::TAU;

use glam::{Vec2, Vec3};
use morphos_audio::BandEnergies;
use morphos_core::math::Ray;
use morphos_core::ShapeKind;
use morphos_sim::interaction::PointerSample;
use morphos_sim::FrameInput;

/// Camera distance used to synthesize pointer rays.
const CAMERA_Z: f32 = 40.0;

/// Half-extent of the z=0 plane visible at the camera's field of view.
const VIEW_HALF_EXTENT: f32 = 20.0;

/// Scripted pointer behaviour for a scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerScript {
    None,
    /// Circle the origin, pressing every other second.
    Sweep,
    /// Hold a pinch over the centre of the shape.
    Hold,
}

/// Scripted audio input for a scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AudioScript {
    Silent,
    /// Bass pulse once per second (60 frames), enough to trigger shockwaves.
    BassPulse,
}

/// Configuration for a single benchmark scene.
pub struct SceneConfig {
    pub name: &'static str,
    pub particle_count: usize,
    pub shape: ShapeKind,
    pub collisions: bool,
    pub pointer: PointerScript,
    pub audio: AudioScript,
}

/// Return the standard suite of benchmark scenes (5K to 100K particles).
pub fn standard_scenes() -> Vec<SceneConfig> {
    vec![
        SceneConfig {
            name: "5K-earth-idle",
            particle_count: 5_000,
            shape: ShapeKind::Earth,
            collisions: true,
            pointer: PointerScript::None,
            audio: AudioScript::Silent,
        },
        SceneConfig {
            name: "25K-earth-pinch",
            particle_count: 25_000,
            shape: ShapeKind::Earth,
            collisions: true,
            pointer: PointerScript::Hold,
            audio: AudioScript::Silent,
        },
        SceneConfig {
            name: "25K-galaxy-sweep",
            particle_count: 25_000,
            shape: ShapeKind::Galaxy,
            collisions: true,
            pointer: PointerScript::Sweep,
            audio: AudioScript::Silent,
        },
        SceneConfig {
            name: "25K-heart-bass",
            particle_count: 25_000,
            shape: ShapeKind::Heart,
            collisions: true,
            pointer: PointerScript::None,
            audio: AudioScript::BassPulse,
        },
        SceneConfig {
            name: "50K-cube-dense",
            particle_count: 50_000,
            shape: ShapeKind::Cube,
            collisions: true,
            pointer: PointerScript::Sweep,
            audio: AudioScript::BassPulse,
        },
        SceneConfig {
            name: "100K-mobius-nocollide",
            particle_count: 100_000,
            shape: ShapeKind::Mobius,
            collisions: false,
            pointer: PointerScript::None,
            audio: AudioScript::Silent,
        },
    ]
}

/// Pointer ray from the camera through a point on the z=0 plane.
fn pointer_toward(ndc: Vec2, activation: bool) -> PointerSample {
    let origin = Vec3::new(0.0, 0.0, CAMERA_Z);
    let on_plane = Vec3::new(ndc.x * VIEW_HALF_EXTENT, ndc.y * VIEW_HALF_EXTENT, 0.0);
    PointerSample::new(ndc, Ray::new(origin, on_plane - origin), activation)
}

/// Deterministic per-frame input for a scene.
pub fn frame_input(config: &SceneConfig, frame: u32) -> FrameInput {
    let pointer = match config.pointer {
        PointerScript::None => PointerSample::inactive(),
        PointerScript::Hold => pointer_toward(Vec2::ZERO, true),
        PointerScript::Sweep => {
            let angle = frame as f32 / 120.0 * TAU;
            let ndc = Vec2::new(angle.cos(), angle.sin()) * 0.4;
            pointer_toward(ndc, (frame / 60) % 2 == 1)
        }
    };

    let audio = match config.audio {
        AudioScript::Silent => None,
        AudioScript::BassPulse => {
            let beat = frame % 60;
            let low = if beat < 10 { 1.0 } else { 0.2 };
            Some(BandEnergies::new(low, 0.4, 0.2))
        }
    };

    FrameInput { pointer, audio }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_names_unique() {
        let scenes = standard_scenes();
        for (i, a) in scenes.iter().enumerate() {
            for b in &scenes[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_hold_pointer_is_active_and_hits_plane_centre() {
        let scene = &standard_scenes()[1];
        let input = frame_input(scene, 0);
        assert!(input.pointer.is_active());
        let ray = input.pointer.ray.expect("ray");
        let p = ray.intersect_z_plane().expect("hits plane");
        assert!(p.length() < 1e-4);
    }

    #[test]
    fn test_sweep_alternates_activation() {
        let scene = &standard_scenes()[2];
        assert!(!frame_input(scene, 0).pointer.activation);
        assert!(frame_input(scene, 60).pointer.activation);
    }

    #[test]
    fn test_bass_pulse_shape() {
        let scene = &standard_scenes()[3];
        let loud = frame_input(scene, 0).audio.expect("audio");
        let quiet = frame_input(scene, 30).audio.expect("audio");
        assert!(loud.low > quiet.low);
        assert!(frame_input(&standard_scenes()[0], 0).audio.is_none());
    }
}
