pub mod collision;
pub mod commands;
pub mod grid;
pub mod integrator;
pub mod interaction;
pub mod particles;
pub mod pipeline;
pub mod state;

mod rng;

#[cfg(test)]
mod test_harness;

pub use pipeline::{FrameInput, FrameReport, SimPipeline, Telemetry};
