use std::time::Instant;

use morphos_core::{MorphosError, ShapeKind, SimConfig};
use morphos_sim::SimPipeline;

use crate::scenes::{self, SceneConfig};

/// Timing data for a single benchmark run.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TimingSeries {
    pub mean_ms: f64,
    pub median_ms: f64,
    pub p95_ms: f64,
    pub p99_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
}

/// Result of a single scene benchmark.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct BenchmarkResult {
    pub scene_name: String,
    pub shape: ShapeKind,
    pub particle_count: usize,
    pub frame_count: u32,
    pub acquisitions: u32,
    pub mean_grid_occupancy: f64,
    pub timings: TimingSeries,
}

/// Runs scenes on the CPU pipeline, one `tick` per timed frame.
pub struct BenchmarkRunner {
    base_config: SimConfig,
    frame_count: u32,
}

impl BenchmarkRunner {
    /// `base_config` supplies the physics parameters; each scene overrides
    /// particle count, shape and collisions.
    pub fn new(base_config: SimConfig, frame_count: u32) -> Self {
        Self {
            base_config,
            frame_count,
        }
    }

    fn scene_config(&self, scene: &SceneConfig) -> SimConfig {
        SimConfig {
            particle_count: scene.particle_count,
            shapes: vec![scene.shape],
            initial_shape: scene.shape,
            collisions_enabled: scene.collisions,
            ..self.base_config.clone()
        }
    }

    /// Run a single benchmark scene and return timing results.
    pub fn run_scene(&self, scene: &SceneConfig) -> Result<BenchmarkResult, MorphosError> {
        log::info!(
            "Running scene '{}' ({} particles, shape '{}')...",
            scene.name,
            scene.particle_count,
            scene.shape
        );

        let setup_start = Instant::now();
        let mut sim = SimPipeline::new(self.scene_config(scene))?;
        log::info!(
            "  Setup in {:.2}ms",
            setup_start.elapsed().as_secs_f64() * 1000.0
        );

        let mut frame_times = Vec::with_capacity(self.frame_count as usize);
        let mut acquisitions = 0u32;
        let mut occupancy_sum = 0u64;

        for frame in 0..self.frame_count {
            let input = scenes::frame_input(scene, frame);

            let frame_start = Instant::now();
            let report = sim.tick(&input);
            let elapsed = frame_start.elapsed().as_secs_f64() * 1000.0;

            frame_times.push(elapsed);
            acquisitions += u32::from(report.acquisition.is_some());
            occupancy_sum += report.grid_occupancy as u64;
        }

        let non_finite = sim.position_buffer().iter().filter(|v| !v.is_finite()).count();
        if non_finite > 0 {
            log::warn!("  {} non-finite position components after run", non_finite);
        }

        let timings = compute_timings(&frame_times);
        log::info!(
            "  Done: mean={:.2}ms, p95={:.2}ms, p99={:.2}ms",
            timings.mean_ms,
            timings.p95_ms,
            timings.p99_ms
        );

        let mean_grid_occupancy = if self.frame_count > 0 {
            occupancy_sum as f64 / self.frame_count as f64
        } else {
            0.0
        };

        Ok(BenchmarkResult {
            scene_name: scene.name.to_string(),
            shape: scene.shape,
            particle_count: scene.particle_count,
            frame_count: self.frame_count,
            acquisitions,
            mean_grid_occupancy,
            timings,
        })
    }
}

/// Compute timing statistics from a list of frame times in milliseconds.
pub fn compute_timings(times: &[f64]) -> TimingSeries {
    if times.is_empty() {
        return TimingSeries {
            mean_ms: 0.0,
            median_ms: 0.0,
            p95_ms: 0.0,
            p99_ms: 0.0,
            min_ms: 0.0,
            max_ms: 0.0,
        };
    }

    let mut sorted = times.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = sorted.len();
    let mean = sorted.iter().sum::<f64>() / n as f64;
    let median = if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    };
    let p95_idx = ((n as f64) * 0.95).ceil() as usize;
    let p99_idx = ((n as f64) * 0.99).ceil() as usize;

    TimingSeries {
        mean_ms: mean,
        median_ms: median,
        p95_ms: sorted[p95_idx.min(n - 1)],
        p99_ms: sorted[p99_idx.min(n - 1)],
        min_ms: sorted[0],
        max_ms: sorted[n - 1],
    }
}
