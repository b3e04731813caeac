use super::{Algorithm, ActivationUpdate, ColorUpdate, NeuronTarget, FADE_RATE};
use neuroplay_data::{AlgorithmKind, Color, LiveNeuron};

/// Wavefront expansion speed in units per second.
pub const SPEED: f32 = 0.5;
/// Gaussian width of the wavefront band.
pub const WIDTH: f32 = 4.0;
pub const PEAK: f32 = 0.95;
/// Falloff above which a neuron counts as inside the band.
pub const BAND_THRESHOLD: f32 = 0.2;

/// A spherical wavefront expanding from the origin.
#[derive(Debug, Clone, Copy, Default)]
pub struct WavePropagation;

#[must_use]
pub fn falloff(elapsed: f32, distance: f32) -> f32 {
    let offset = distance - elapsed * SPEED;
    (-(offset * offset) / WIDTH).exp()
}

impl Algorithm for WavePropagation {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::WavePropagation
    }

    fn targets(&self, elapsed: f32, neurons: &[LiveNeuron]) -> Vec<NeuronTarget> {
        neurons
            .iter()
            .map(|neuron| {
                let strength = falloff(elapsed, neuron.position.length());
                let color = if strength > BAND_THRESHOLD {
                    ColorUpdate::Set(Color::CYAN)
                } else {
                    ColorUpdate::FadeBack(FADE_RATE)
                };
                NeuronTarget {
                    activation: ActivationUpdate::Set(strength * PEAK),
                    color,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::test_support::scattered;
    use neuroplay_data::Vec3;

    #[test]
    fn test_falloff_peaks_on_the_wavefront() {
        assert_eq!(falloff(4.0, 2.0), 1.0);
        assert!(falloff(4.0, 0.0) < falloff(4.0, 1.0));
        assert!(falloff(4.0, 6.0) < falloff(4.0, 3.0));
    }

    #[test]
    fn test_band_is_cyan_and_outside_fades() {
        let mut neurons = scattered(2, 1);
        neurons[0].position = Vec3::new(3.0, 0.0, 0.0);
        neurons[1].position = Vec3::new(0.0, 9.0, 0.0);

        let targets = WavePropagation.targets(6.0, &neurons);
        assert_eq!(targets[0].color, ColorUpdate::Set(Color::CYAN));
        assert_eq!(targets[0].activation, ActivationUpdate::Set(PEAK));
        assert_eq!(targets[1].color, ColorUpdate::FadeBack(FADE_RATE));
    }
}
