use super::{Algorithm, ActivationUpdate, ColorUpdate, NeuronTarget};
use neuroplay_data::{AlgorithmKind, Color, LiveNeuron};
use std::f32::consts::PI;

/// Length of each neuron's activation bump in seconds.
pub const BUMP_DURATION: f32 = 3.0;
/// Time between the first and last neuron starting their bump.
pub const SPREAD_DURATION: f32 = 6.0;
/// The cascade repeats once the last bump has finished.
pub const PERIOD: f32 = SPREAD_DURATION + BUMP_DURATION;

/// A diagonal sweep that fires neurons one after another.
#[derive(Debug, Clone, Copy, Default)]
pub struct CascadeActivation;

fn sweep_key(neuron: &LiveNeuron) -> f32 {
    0.5 * neuron.position.x + 0.5 * neuron.position.y
}

/// Rank of every neuron along the sweep, in storage order. Ties keep storage order.
#[must_use]
pub fn sweep_ranks(neurons: &[LiveNeuron]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..neurons.len()).collect();
    order.sort_by(|&a, &b| sweep_key(&neurons[a]).total_cmp(&sweep_key(&neurons[b])));
    let mut ranks = vec![0; neurons.len()];
    for (rank, &index) in order.iter().enumerate() {
        ranks[index] = rank;
    }
    ranks
}

impl Algorithm for CascadeActivation {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::CascadeActivation
    }

    fn targets(&self, elapsed: f32, neurons: &[LiveNeuron]) -> Vec<NeuronTarget> {
        let count = neurons.len().max(1) as f32;
        let cycle_time = elapsed.rem_euclid(PERIOD);

        sweep_ranks(neurons)
            .into_iter()
            .map(|rank| {
                let start = rank as f32 / count * SPREAD_DURATION;
                let local = cycle_time - start;
                if !(0.0..BUMP_DURATION).contains(&local) {
                    return NeuronTarget::resting();
                }
                let progress = local / BUMP_DURATION;
                NeuronTarget {
                    activation: ActivationUpdate::Set((PI * progress).sin()),
                    color: ColorUpdate::Set(Color::GREEN.lerp(&Color::ORANGE, progress)),
                }
            })
            .collect()
    }
}
