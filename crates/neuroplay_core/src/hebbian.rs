//! Pattern-driven Hebbian training for the living graph.
//!
//! Every tick reads an immutable snapshot of the previous activations, computes
//! all new activations and weights into a write buffer, and only then commits.
//! The result does not depend on the order neurons are stored in.

use crate::lifecycle::{calculate_health, update_connection_weight};
use neuroplay_data::{sigmoid, LiveConnection, LiveNeuron, NeuronType};
use std::collections::HashMap;
use uuid::Uuid;

/// Default learning rate for the correlation-driven weight update.
pub const DEFAULT_LEARNING_RATE: f32 = 0.05;

struct NeuronWrite {
    index: usize,
    activation: f32,
}

struct ConnectionWrite {
    index: usize,
    weight: f32,
    source_activation: f32,
}

/// Sets input-neuron activations from `pattern`, in storage order.
///
/// Values are clamped to `[0, 1]`; inputs beyond the pattern keep their value.
pub fn apply_pattern(neurons: &mut [LiveNeuron], pattern: &[f32]) {
    let inputs = neurons
        .iter_mut()
        .filter(|n| n.neuron_type == NeuronType::Input);
    for (neuron, &value) in inputs.zip(pattern) {
        neuron.activation = value.clamp(0.0, 1.0);
    }
}

/// Runs one simultaneous Hebbian update over all non-input neurons.
///
/// Each neuron with at least one incoming connection receives
/// `sigmoid(sum(source * weight))`; every incoming weight moves by
/// `source * new_activation * learning_rate`. Neurons without incoming
/// connections are left untouched. Returns the number of neurons updated.
pub fn hebbian_step(
    neurons: &mut [LiveNeuron],
    connections: &mut [LiveConnection],
    learning_rate: f32,
) -> usize {
    let snapshot: HashMap<Uuid, f32> = neurons.iter().map(|n| (n.id, n.activation)).collect();

    let mut incoming: HashMap<Uuid, Vec<usize>> = HashMap::new();
    for (idx, connection) in connections.iter().enumerate() {
        if snapshot.contains_key(&connection.from) {
            incoming.entry(connection.to).or_default().push(idx);
        }
    }

    let mut neuron_writes = Vec::new();
    let mut connection_writes = Vec::new();

    for (index, neuron) in neurons.iter().enumerate() {
        if neuron.neuron_type == NeuronType::Input {
            continue;
        }
        let Some(edges) = incoming.get(&neuron.id) else {
            continue;
        };

        let sum: f32 = edges
            .iter()
            .map(|&idx| snapshot[&connections[idx].from] * connections[idx].weight)
            .sum();
        let activation = sigmoid(f64::from(sum)) as f32;

        for &idx in edges {
            let connection = &connections[idx];
            let source_activation = snapshot[&connection.from];
            let correlation = source_activation * activation;
            connection_writes.push(ConnectionWrite {
                index: idx,
                weight: update_connection_weight(connection, correlation, learning_rate),
                source_activation,
            });
        }
        neuron_writes.push(NeuronWrite { index, activation });
    }

    for write in &connection_writes {
        let connection = &mut connections[write.index];
        connection.weight = write.weight;
        connection.strength = write.weight.abs();
        connection.last_activation = write.source_activation;
    }
    for write in &neuron_writes {
        let neuron = &mut neurons[write.index];
        neuron.activation = write.activation.clamp(0.0, 1.0);
        neuron.training_count += 1;
        neuron.health = calculate_health(neuron);
    }

    tracing::trace!(
        neurons = neuron_writes.len(),
        connections = connection_writes.len(),
        "Hebbian step committed"
    );
    neuron_writes.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::{create_connection_with_rng, create_neuron_with_rng};
    use neuroplay_data::Vec3;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// Two inputs feeding a hidden neuron that feeds an output neuron.
    fn chain() -> (Vec<LiveNeuron>, Vec<LiveConnection>) {
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let a = create_neuron_with_rng(Vec3::default(), NeuronType::Input, &mut rng);
        let b = create_neuron_with_rng(Vec3::default(), NeuronType::Input, &mut rng);
        let h = create_neuron_with_rng(Vec3::default(), NeuronType::Hidden, &mut rng);
        let o = create_neuron_with_rng(Vec3::default(), NeuronType::Output, &mut rng);
        let mut connections = vec![
            create_connection_with_rng(a.id, h.id, &mut rng),
            create_connection_with_rng(b.id, h.id, &mut rng),
            create_connection_with_rng(h.id, o.id, &mut rng),
        ];
        connections[0].weight = 0.5;
        connections[1].weight = -0.25;
        connections[2].weight = 0.8;
        (vec![a, b, h, o], connections)
    }

    #[test]
    fn test_apply_pattern_sets_inputs_only() {
        let (mut neurons, _) = chain();
        apply_pattern(&mut neurons, &[0.9, 1.7, 0.3]);
        assert_eq!(neurons[0].activation, 0.9);
        assert_eq!(neurons[1].activation, 1.0);
        assert_eq!(neurons[2].activation, 0.0);
    }

    #[test]
    fn test_step_reads_previous_tick() {
        let (mut neurons, mut connections) = chain();
        apply_pattern(&mut neurons, &[1.0, 1.0]);
        neurons[2].activation = 0.2;

        let updated = hebbian_step(&mut neurons, &mut connections, 0.1);
        assert_eq!(updated, 2);

        let hidden = sigmoid(0.25) as f32;
        assert!((neurons[2].activation - hidden).abs() < 1e-6);
        // The output sees the hidden activation from before this tick.
        let output = sigmoid(f64::from(0.2f32 * 0.8)) as f32;
        assert!((neurons[3].activation - output).abs() < 1e-6);

        let expected = (0.5 + 1.0 * hidden * 0.1).clamp(-1.0, 1.0);
        assert!((connections[0].weight - expected).abs() < 1e-6);
        assert_eq!(connections[0].strength, connections[0].weight.abs());
        assert_eq!(connections[2].last_activation, 0.2);
    }

    #[test]
    fn test_step_increments_training_and_keeps_inputs() {
        let (mut neurons, mut connections) = chain();
        apply_pattern(&mut neurons, &[0.4, 0.6]);
        hebbian_step(&mut neurons, &mut connections, 0.1);
        assert_eq!(neurons[0].training_count, 0);
        assert_eq!(neurons[0].activation, 0.4);
        assert_eq!(neurons[2].training_count, 1);
        assert!(neurons[2].health <= 1.0);
    }

    #[test]
    fn test_step_is_order_independent() {
        let (mut forward, mut forward_connections) = chain();
        apply_pattern(&mut forward, &[0.7, 0.1]);
        let mut reversed = forward.clone();
        reversed.reverse();
        let mut reversed_connections = forward_connections.clone();

        for _ in 0..5 {
            hebbian_step(&mut forward, &mut forward_connections, 0.1);
            hebbian_step(&mut reversed, &mut reversed_connections, 0.1);
        }

        for neuron in &forward {
            let twin = reversed.iter().find(|n| n.id == neuron.id).unwrap();
            assert_eq!(neuron.activation, twin.activation);
        }
        assert_eq!(forward_connections, reversed_connections);
    }

    #[test]
    fn test_weights_stay_clamped() {
        let (mut neurons, mut connections) = chain();
        apply_pattern(&mut neurons, &[1.0, 1.0]);
        for _ in 0..200 {
            hebbian_step(&mut neurons, &mut connections, 0.5);
        }
        for c in &connections {
            assert!((-1.0..=1.0).contains(&c.weight));
        }
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(64))]

            #[test]
            fn test_step_keeps_state_in_range(
                pattern in prop::collection::vec(-2.0f32..2.0, 0..4),
                weights in prop::array::uniform3(-1.0f32..=1.0),
                learning_rate in 0.0f32..2.0,
                ticks in 1usize..30,
            ) {
                let (mut neurons, mut connections) = chain();
                for (connection, weight) in connections.iter_mut().zip(weights) {
                    connection.weight = weight;
                }
                let mut previous_health: Vec<f32> = neurons.iter().map(|n| n.health).collect();

                for _ in 0..ticks {
                    apply_pattern(&mut neurons, &pattern);
                    hebbian_step(&mut neurons, &mut connections, learning_rate);

                    for connection in &connections {
                        prop_assert!((-1.0..=1.0).contains(&connection.weight));
                        prop_assert_eq!(connection.strength, connection.weight.abs());
                    }
                    for (neuron, previous) in neurons.iter().zip(&previous_health) {
                        prop_assert!((0.0..=1.0).contains(&neuron.activation));
                        prop_assert!(neuron.health <= *previous);
                    }
                    previous_health = neurons.iter().map(|n| n.health).collect();
                }
            }
        }
    }
}
