pub mod bands;

pub use bands::BandEnergies;

use morphos_core::constants::{
    BAND_SMOOTHING, BASS_DECAY, BASS_SHOCK_GAIN, BASS_SHOCK_THRESHOLD,
};
use morphos_core::math::approach;
use morphos_core::types::Shockwave;

/// Audio-reactive modulator. Smooths raw band energies into the bass factor
/// and mid/high levels, and is the only path that re-injects shockwave energy
/// from sound. When disabled, every frame takes the no-signal path.
#[derive(Debug, Clone)]
pub struct AudioModulator {
    bass_factor: f32,
    mid_level: f32,
    high_level: f32,
    enabled: bool,
}

impl Default for AudioModulator {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioModulator {
    pub fn new() -> Self {
        Self {
            bass_factor: 0.0,
            mid_level: 0.0,
            high_level: 0.0,
            enabled: true,
        }
    }

    /// Enable or disable audio reaction. Disabling does not reset the smoothed
    /// levels; they decay over the following frames.
    pub fn set_enabled(&mut self, enabled: bool) {
        if enabled == self.enabled {
            return;
        }
        self.enabled = enabled;
        if enabled {
            log::info!("Audio modulation enabled");
        } else {
            log::info!("Audio modulation disabled");
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Smoothed low-band energy in `[0, 1]`.
    pub fn bass_factor(&self) -> f32 {
        self.bass_factor
    }

    pub fn mid_level(&self) -> f32 {
        self.mid_level
    }

    pub fn high_level(&self) -> f32 {
        self.high_level
    }

    /// Advance one frame.
    ///
    /// The shockwave decays first, unconditionally. With a signal, the bands
    /// lerp toward the sample and a bass factor above the threshold injects
    /// energy; without one, the levels decay toward zero.
    pub fn update(&mut self, signal: Option<&BandEnergies>, shockwave: &mut Shockwave) {
        shockwave.decay();

        match signal.filter(|_| self.enabled) {
            Some(bands) => {
                self.bass_factor = approach(self.bass_factor, bands.low, BAND_SMOOTHING);
                self.mid_level = approach(self.mid_level, bands.mid, BAND_SMOOTHING);
                self.high_level = approach(self.high_level, bands.high, BAND_SMOOTHING);

                if self.bass_factor > BASS_SHOCK_THRESHOLD {
                    shockwave.inject(self.bass_factor * BASS_SHOCK_GAIN);
                }
            }
            None => {
                self.bass_factor *= BASS_DECAY;
                self.mid_level *= BASS_DECAY;
                self.high_level *= BASS_DECAY;
            }
        }
    }
}
