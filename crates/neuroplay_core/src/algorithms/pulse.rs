use super::{intensity_color, Algorithm, ActivationUpdate, NeuronTarget};
use neuroplay_data::{AlgorithmKind, Color, LiveNeuron};
use std::f32::consts::TAU;

/// Pulse frequency in Hz.
pub const FREQUENCY: f32 = 0.25;
/// Frequency of the independent pink/purple color cycle in Hz.
pub const COLOR_FREQUENCY: f32 = 0.1;
pub const PHASE_SCALE: f32 = 0.05;
pub const PEAK: f32 = 0.9;
pub const HARD_THRESHOLD: f32 = 0.5;

/// The whole network breathing in a slow, slightly staggered pulse.
#[derive(Debug, Clone, Copy, Default)]
pub struct PulseNetwork;

#[must_use]
pub fn pulse(elapsed: f32, phase: f32) -> f32 {
    ((TAU * FREQUENCY * elapsed + phase).sin() + 1.0) / 2.0
}

impl Algorithm for PulseNetwork {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::PulseNetwork
    }

    fn targets(&self, elapsed: f32, neurons: &[LiveNeuron]) -> Vec<NeuronTarget> {
        neurons
            .iter()
            .map(|neuron| {
                let p = neuron.position;
                let phase = (p.x + p.y + p.z) * PHASE_SCALE;
                let level = pulse(elapsed, phase);
                let shade = ((TAU * COLOR_FREQUENCY * elapsed + phase).sin() + 1.0) / 2.0;
                NeuronTarget {
                    activation: ActivationUpdate::Set(level * PEAK),
                    color: intensity_color(
                        Color::PINK.lerp(&Color::PURPLE, shade),
                        level,
                        HARD_THRESHOLD,
                    ),
                }
            })
            .collect()
    }
}
