use super::{Algorithm, ActivationUpdate, ColorUpdate, NeuronTarget};
use neuroplay_data::{AlgorithmKind, Color, LiveNeuron};

/// Walker steps per second.
pub const STEP_RATE: f32 = 0.8;
/// Neighbors within this distance of the walker light up.
pub const RADIUS: f32 = 4.5;
pub const NEIGHBOR_BOOST: f32 = 0.7;
pub const PEAK: f32 = 0.95;

/// A hash-driven walker hopping between neurons and lighting its neighborhood.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomWalker;

#[must_use]
pub fn step_at(elapsed: f32) -> u64 {
    (elapsed.max(0.0) * STEP_RATE).floor() as u64
}

/// Neuron visited at `step`, or `None` once the walk is over.
///
/// A pure function of `step` and `count`: the walk lasts `2 * count` steps.
#[must_use]
pub fn walker_index(step: u64, count: usize) -> Option<usize> {
    if count == 0 || step >= 2 * count as u64 {
        return None;
    }
    let hash = ((step as f64 * 12.9898).sin() * 43758.5453).floor();
    Some((hash.abs() as u64 % count as u64) as usize)
}

impl Algorithm for RandomWalker {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::RandomWalker
    }

    fn targets(&self, elapsed: f32, neurons: &[LiveNeuron]) -> Vec<NeuronTarget> {
        let Some(selected) = walker_index(step_at(elapsed), neurons.len()) else {
            return vec![NeuronTarget::resting(); neurons.len()];
        };
        let center = neurons[selected].position;

        neurons
            .iter()
            .enumerate()
            .map(|(index, neuron)| {
                if index == selected {
                    return NeuronTarget {
                        activation: ActivationUpdate::Set(PEAK),
                        color: ColorUpdate::Set(Color::ORANGE),
                    };
                }
                let distance = neuron.position.distance(&center);
                if distance < RADIUS {
                    let closeness = 1.0 - distance / RADIUS;
                    NeuronTarget {
                        activation: ActivationUpdate::Raise(closeness * closeness * NEIGHBOR_BOOST),
                        color: ColorUpdate::Set(Color::GREEN),
                    }
                } else {
                    NeuronTarget::resting()
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
    fn test_selection_is_reproducible() {
        for step in 0..40 {
            assert_eq!(walker_index(step, 25), walker_index(step, 25));
            let index = walker_index(step, 25).unwrap();
            assert!(index < 25);
        }
    }

    #[test]
    fn test_walk_halts_after_window() {
        assert!(walker_index(19, 10).is_some());
        assert_eq!(walker_index(20, 10), None);
        assert_eq!(walker_index(0, 0), None);
    }

    #[test]
    fn test_step_timing() {
        assert_eq!(step_at(0.0), 0);
        assert_eq!(step_at(1.2), 0);
        assert_eq!(step_at(1.25), 1);
        assert_eq!(step_at(10.0), 8);
    }

    #[test]
    fn test_neighborhood_targets() {
        let mut neurons = scattered(3, 8);
        let selected = walker_index(0, 3).unwrap();
        for (i, neuron) in neurons.iter_mut().enumerate() {
            neuron.position = Vec3::new(100.0 * i as f32, 0.0, 0.0);
        }
        let near = (selected + 1) % 3;
        neurons[near].position = Vec3::new(100.0 * selected as f32 + 2.25, 0.0, 0.0);

        let targets = RandomWalker.targets(0.0, &neurons);
        assert_eq!(targets[selected].activation, ActivationUpdate::Set(PEAK));
        assert_eq!(targets[selected].color, ColorUpdate::Set(Color::ORANGE));
        assert_eq!(targets[near].color, ColorUpdate::Set(Color::GREEN));
        let ActivationUpdate::Raise(boost) = targets[near].activation else {
            panic!("neighbors are boosted");
        };
        assert!((boost - 0.25 * NEIGHBOR_BOOST).abs() < 1e-5);

        let far = (selected + 2) % 3;
        assert_eq!(targets[far], NeuronTarget::resting());
    }

    #[test]
    fn test_everything_rests_after_walk() {
        let neurons = scattered(4, 8);
        let targets = RandomWalker.targets(20.0, &neurons);
        assert!(targets.iter().all(|t| *t == NeuronTarget::resting()));
    }
}
