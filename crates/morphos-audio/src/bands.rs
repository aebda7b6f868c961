use morphos_core::constants::{LOW_BAND_FRACTION, MID_BAND_END_FRACTION};

/// Largest value a byte-range spectrum bin can hold.
const BYTE_RANGE: f32 = 255.0;

/// Per-frame band energies, each normalized to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BandEnergies {
    pub low: f32,
    pub mid: f32,
    pub high: f32,
}

impl BandEnergies {
    /// Build from already-normalized energies. Values are clamped to `[0, 1]`;
    /// non-finite values read as silence.
    pub fn new(low: f32, mid: f32, high: f32) -> Self {
        Self {
            low: normalize(low),
            mid: normalize(mid),
            high: normalize(high),
        }
    }

    /// Average a byte-range frequency spectrum into three bands.
    ///
    /// The lowest 10% of bins are the low band, bins up to the midpoint are
    /// the mid band, everything above is the high band. Returns None for an
    /// empty spectrum.
    pub fn from_spectrum(bins: &[u8]) -> Option<Self> {
        if bins.is_empty() {
            return None;
        }
        let n = bins.len();
        let low_end = ((n as f32 * LOW_BAND_FRACTION) as usize).clamp(1, n);
        let mid_end = ((n as f32 * MID_BAND_END_FRACTION) as usize).clamp(low_end, n);

        Some(Self::new(
            mean(&bins[..low_end]),
            mean(&bins[low_end..mid_end]),
            mean(&bins[mid_end..]),
        ))
    }
}

fn mean(bins: &[u8]) -> f32 {
    if bins.is_empty() {
        return 0.0;
    }
    let sum: u32 = bins.iter().map(|&b| b as u32).sum();
    sum as f32 / bins.len() as f32 / BYTE_RANGE
}

fn normalize(v: f32) -> f32 {
    if v.is_finite() {
        v.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_spectrum() {
        assert!(BandEnergies::from_spectrum(&[]).is_none());
    }

    #[test]
    fn test_low_band_is_bottom_tenth() {
        let mut bins = vec![0u8; 100];
        for b in &mut bins[..10] {
            *b = 255;
        }
        let bands = BandEnergies::from_spectrum(&bins).expect("non-empty");
        assert!((bands.low - 1.0).abs() < 1e-6);
        assert_eq!(bands.mid, 0.0);
        assert_eq!(bands.high, 0.0);
    }

    #[test]
    fn test_mid_and_high_split() {
        let mut bins = vec![0u8; 100];
        for b in &mut bins[10..50] {
            *b = 51;
        }
        for b in &mut bins[50..] {
            *b = 102;
        }
        let bands = BandEnergies::from_spectrum(&bins).expect("non-empty");
        assert_eq!(bands.low, 0.0);
        assert!((bands.mid - 0.2).abs() < 1e-6);
        assert!((bands.high - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_tiny_spectrum_keeps_a_low_bin() {
        let bands = BandEnergies::from_spectrum(&[200, 0, 0]).expect("non-empty");
        assert!(bands.low > 0.7);
    }

    #[test]
    fn test_new_sanitizes() {
        let bands = BandEnergies::new(-1.0, f32::NAN, 4.0);
        assert_eq!(bands, BandEnergies::new(0.0, 0.0, 1.0));
    }
}
