/// Frame-level scenario tests driving the full pipeline on the CPU.

#[cfg(test)]
mod tests {
    use glam::{Vec2, Vec3};
    use morphos_audio::BandEnergies;
    use morphos_core::math::Ray;
    use morphos_core::{MorphosError, ShapeKind, SimConfig};
    use morphos_shapes::ShapeLibrary;

    use crate::commands::SimCommand;
    use crate::grid::SpatialHashGrid;
    use crate::integrator::{integrate, ForceContext};
    use crate::interaction::PointerSample;
    use crate::particles::ParticleBuffer;
    use crate::pipeline::{FrameInput, SimPipeline};

    fn small_config() -> SimConfig {
        SimConfig {
            particle_count: 400,
            shapes: vec![ShapeKind::Earth, ShapeKind::Heart, ShapeKind::Galaxy],
            initial_shape: ShapeKind::Earth,
            ..SimConfig::default()
        }
    }

    fn mean_distance_to_targets(pipeline: &SimPipeline) -> f32 {
        let field = pipeline.active_field().expect("active field");
        let scale = pipeline.last_telemetry().effective_scale;
        let total: f32 = pipeline
            .positions()
            .iter()
            .zip(field.points())
            .map(|(p, t)| p.distance(*t * scale))
            .sum();
        total / pipeline.positions().len() as f32
    }

    fn pointer_at_origin(activation: bool) -> PointerSample {
        PointerSample::new(
            Vec2::new(0.05, 0.1),
            Ray::new(Vec3::new(0.0, 0.0, 40.0), Vec3::new(0.0, 0.0, -1.0)),
            activation,
        )
    }

    #[test]
    fn test_spring_convergence_from_origin() {
        let config = SimConfig {
            collisions_enabled: false,
            breathing_amplitude: 0.0,
            ..small_config()
        };
        let mut pipeline = SimPipeline::new(config).expect("pipeline");
        pipeline.reset_particles(Vec3::ZERO);
        pipeline.set_active_shape("heart").expect("heart generated");

        let input = FrameInput::default();
        let initial = mean_distance_to_targets(&pipeline);
        assert!(initial > 1.0);

        let mut history = vec![initial];
        for _ in 0..120 {
            pipeline.tick(&input);
            history.push(mean_distance_to_targets(&pipeline));
        }

        // Monotone approach up to the first overshoot.
        for frame in 1..=10 {
            assert!(
                history[frame] < history[frame - 1],
                "distance rose at frame {frame}: {} -> {}",
                history[frame - 1],
                history[frame]
            );
        }
        assert!(history[40] < initial * 0.25, "frame 40: {}", history[40]);
        let late_peak = history[100..=120].iter().copied().fold(0.0f32, f32::max);
        assert!(late_peak < initial * 0.05, "late peak {late_peak}");
    }

    #[test]
    fn test_unknown_shape_keeps_active() {
        let mut pipeline = SimPipeline::new(small_config()).expect("pipeline");
        let err = pipeline.set_active_shape("teapot").unwrap_err();
        assert!(matches!(err, MorphosError::UnknownShape(ref n) if n == "teapot"));
        assert_eq!(pipeline.active_shape(), ShapeKind::Earth);

        // Valid name, but not generated for this run.
        assert!(pipeline.set_active_shape("mobius").is_err());
        assert_eq!(pipeline.active_shape(), ShapeKind::Earth);

        pipeline.set_active_shape("  Galaxy ").expect("galaxy generated");
        assert_eq!(pipeline.active_shape(), ShapeKind::Galaxy);
    }

    #[test]
    fn test_switching_reuses_cached_field() {
        let mut pipeline = SimPipeline::new(small_config()).expect("pipeline");
        let before = pipeline.active_field().expect("earth").points().to_vec();
        pipeline.set_active_shape("heart").expect("heart");
        pipeline.tick(&FrameInput::default());
        pipeline.set_active_shape("earth").expect("earth");
        assert_eq!(pipeline.active_field().expect("earth").points(), before.as_slice());
    }

    #[test]
    fn test_acquisition_fires_once_and_injects_shockwave() {
        let mut pipeline = SimPipeline::new(small_config()).expect("pipeline");
        let held = FrameInput {
            pointer: pointer_at_origin(true),
            audio: None,
        };

        let first = pipeline.tick(&held);
        assert!(first.cursor_hit);
        let event = first.acquisition.expect("first frame acquires");
        assert_eq!((event.x, event.y), (0.05, 0.1));
        assert!(first.telemetry.shockwave > 0.9);

        let mut extra = 0;
        for _ in 0..8 {
            extra += usize::from(pipeline.tick(&held).acquisition.is_some());
        }
        assert_eq!(extra, 0);

        let released = FrameInput {
            pointer: pointer_at_origin(false),
            audio: None,
        };
        assert!(pipeline.tick(&released).acquisition.is_none());
        assert!(pipeline.tick(&held).acquisition.is_some());
    }

    #[test]
    fn test_pointer_ignored_on_other_shapes_for_hits() {
        let mut pipeline = SimPipeline::new(small_config()).expect("pipeline");
        pipeline.set_active_shape("heart").expect("heart");
        let report = pipeline.tick(&FrameInput {
            pointer: pointer_at_origin(true),
            audio: None,
        });
        assert!(!report.cursor_hit);
        assert!(report.acquisition.is_none());
    }

    fn run_frames(shape: &str, pointer: PointerSample, frames: usize) -> Vec<Vec3> {
        let config = SimConfig {
            collisions_enabled: false,
            ..small_config()
        };
        let mut pipeline = SimPipeline::new(config).expect("pipeline");
        pipeline.set_active_shape(shape).expect("shape generated");
        let input = FrameInput {
            pointer,
            audio: None,
        };
        for _ in 0..frames {
            pipeline.tick(&input);
        }
        pipeline.positions().to_vec()
    }

    #[test]
    fn test_pointer_repels_except_on_earth() {
        let frames = 8;

        let earth_idle = run_frames("earth", PointerSample::inactive(), frames);
        let earth_pointed = run_frames("earth", pointer_at_origin(false), frames);
        assert_eq!(earth_idle, earth_pointed);

        let heart_idle = run_frames("heart", PointerSample::inactive(), frames);
        let heart_pointed = run_frames("heart", pointer_at_origin(false), frames);
        let near: Vec<usize> = heart_idle
            .iter()
            .enumerate()
            .filter(|(_, p)| p.truncate().length() < 8.0)
            .map(|(i, _)| i)
            .collect();
        assert!(!near.is_empty());
        let idle_spread: f32 = near.iter().map(|&i| heart_idle[i].truncate().length()).sum();
        let pointed_spread: f32 = near
            .iter()
            .map(|&i| heart_pointed[i].truncate().length())
            .sum();
        assert!(
            pointed_spread > idle_spread * 1.2,
            "pointer did not push particles out: {pointed_spread} vs {idle_spread}"
        );
        // Repulsion acts in the XY plane only.
        for &i in &near {
            assert_eq!(heart_idle[i].z, heart_pointed[i].z);
        }
    }

    /// Same frames as the pipeline with no pointer, no shockwave and no scan band.
    fn run_plain_springs(config: &SimConfig, kind: ShapeKind, frames: u32) -> Vec<Vec3> {
        let library = ShapeLibrary::generate(&config.shapes, config.particle_count, config.seed);
        let field = library.get(kind).expect("shape generated");
        let mut particles =
            ParticleBuffer::scattered(config.particle_count, config.initial_spread, config.seed);
        let mut grid = SpatialHashGrid::new(config.particle_count);
        for frame in 0..frames {
            let ctx = ForceContext {
                effective_scale: 1.0,
                pointer: None,
                jitter: 0.0,
                scan_band: None,
                stiffness: config.spring_stiffness,
                damping: config.damping,
                frame,
            };
            integrate(&mut particles, field, &ctx, &mut grid);
        }
        particles.positions().to_vec()
    }

    #[test]
    fn test_scan_band_noise_only_on_earth() {
        let config = SimConfig {
            collisions_enabled: false,
            breathing_amplitude: 0.0,
            ..small_config()
        };
        let frames = 30;

        let mut heart = SimPipeline::new(config.clone()).expect("pipeline");
        heart.set_active_shape("heart").expect("heart");
        let mut earth = SimPipeline::new(config.clone()).expect("pipeline");
        for _ in 0..frames {
            heart.tick(&FrameInput::default());
            earth.tick(&FrameInput::default());
        }

        let heart_plain = run_plain_springs(&config, ShapeKind::Heart, frames);
        assert_eq!(heart.positions(), heart_plain.as_slice());

        let earth_plain = run_plain_springs(&config, ShapeKind::Earth, frames);
        let disturbed = earth
            .positions()
            .iter()
            .zip(&earth_plain)
            .filter(|(a, b)| a != b)
            .count();
        assert!(disturbed > 0);
        assert!(disturbed < earth_plain.len());
    }

    #[test]
    fn test_loud_bass_stays_finite() {
        let mut pipeline = SimPipeline::new(small_config()).expect("pipeline");
        pipeline.set_active_shape("galaxy").expect("galaxy");
        let input = FrameInput {
            pointer: pointer_at_origin(true),
            audio: Some(BandEnergies::new(1.0, 0.8, 0.6)),
        };
        let mut peak_shock = 0.0f32;
        for _ in 0..200 {
            let report = pipeline.tick(&input);
            peak_shock = peak_shock.max(report.telemetry.shockwave);
            assert!(report.telemetry.shockwave <= 2.0);
        }
        assert!(peak_shock > 1.0);
        assert!(pipeline.last_telemetry().bass_factor > 0.9);
        assert!(pipeline.position_buffer().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_commands_apply_on_next_tick() {
        let mut pipeline = SimPipeline::new(small_config()).expect("pipeline");
        pipeline.enqueue_command(SimCommand::SetShape(ShapeKind::Heart));
        pipeline.enqueue_command(SimCommand::SetTargetScale(2.0));
        pipeline.enqueue_command(SimCommand::SetTargetRotation(Vec2::new(0.5, -0.5)));
        assert_eq!(pipeline.active_shape(), ShapeKind::Earth);

        pipeline.tick(&FrameInput::default());
        assert_eq!(pipeline.active_shape(), ShapeKind::Heart);
        assert_eq!(pipeline.state().target_scale, 2.0);
        assert_eq!(pipeline.state().target_rotation, Vec2::new(0.5, -0.5));
        assert!(pipeline.state().current_scale > 1.0);

        // Not generated: ignored
        pipeline.enqueue_command(SimCommand::SetShape(ShapeKind::Cube));
        pipeline.tick(&FrameInput::default());
        assert_eq!(pipeline.active_shape(), ShapeKind::Heart);
    }

    #[test]
    fn test_pause_and_single_step() {
        let mut pipeline = SimPipeline::new(small_config()).expect("pipeline");
        pipeline.set_paused(true);
        let before = pipeline.positions().to_vec();

        let report = pipeline.tick(&FrameInput::default());
        assert!(!report.ticked);
        assert_eq!(pipeline.tick_count(), 0);
        assert_eq!(pipeline.positions(), before.as_slice());

        pipeline.request_single_step();
        assert!(pipeline.tick(&FrameInput::default()).ticked);
        assert_eq!(pipeline.tick_count(), 1);
        assert!(!pipeline.tick(&FrameInput::default()).ticked);

        // Commands still land while paused.
        pipeline.enqueue_command(SimCommand::SetShape(ShapeKind::Galaxy));
        pipeline.tick(&FrameInput::default());
        assert_eq!(pipeline.active_shape(), ShapeKind::Galaxy);

        pipeline.toggle_pause();
        assert!(!pipeline.is_paused());
        assert!(pipeline.tick(&FrameInput::default()).ticked);
    }

    #[test]
    fn test_position_buffer_is_flat_view() {
        let pipeline = SimPipeline::new(small_config()).expect("pipeline");
        let flat = pipeline.position_buffer();
        assert_eq!(flat.len(), 400 * 3);
        let p = pipeline.positions()[7];
        assert_eq!(&flat[21..24], &[p.x, p.y, p.z]);
    }

    #[test]
    fn test_library_count_mismatch_rejected() {
        let library = ShapeLibrary::generate(&[ShapeKind::Earth], 10, 1);
        let config = SimConfig {
            particle_count: 20,
            shapes: vec![ShapeKind::Earth],
            ..SimConfig::default()
        };
        let err = SimPipeline::with_library(config, library).err().expect("mismatch");
        assert!(matches!(
            err,
            MorphosError::ParticleCountMismatch {
                expected: 20,
                actual: 10
            }
        ));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SimConfig {
            particle_count: 0,
            ..SimConfig::default()
        };
        assert!(matches!(
            SimPipeline::new(config).err(),
            Some(MorphosError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_grid_occupancy_reported() {
        let mut pipeline = SimPipeline::new(small_config()).expect("pipeline");
        let report = pipeline.tick(&FrameInput::default());
        assert!(report.ticked);
        assert_eq!(report.grid_occupancy, 400);
    }
}
