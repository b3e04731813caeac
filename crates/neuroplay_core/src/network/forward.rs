use super::topology;
use crate::error::{EngineError, Result};
use neuroplay_data::Network;

pub fn forward(network: &mut Network, inputs: &[f64]) -> Result<f64> {
    if network.layers.len() < 2 {
        return Err(EngineError::invalid_configuration(
            "network needs an input and an output layer",
        ));
    }
    let expected = network.input_size();
    if inputs.len() != expected {
        return Err(EngineError::DimensionMismatch {
            expected,
            actual: inputs.len(),
        });
    }
    if !topology::index_is_current(network) {
        topology::initialize_index(network);
    }

    for (node, &value) in network.layers[0].iter_mut().zip(inputs) {
        node.output = value;
    }

    let activation = network.params.activation;
    for layer in 1..network.layers.len() {
        let (done, pending) = network.layers.split_at_mut(layer);
        let prev = &done[layer - 1];
        for (index, node) in pending[0].iter_mut().enumerate() {
            let mut total = node.bias;
            for &link_idx in &network.incoming[layer][index] {
                let link = &network.links[link_idx];
                total += prev[link.source.index].output * link.weight;
            }
            node.total_input = total;
            node.output = activation.apply(total);
        }
    }

    network.forward_pending = true;
    network
        .output_layer()
        .first()
        .map(|node| node.output)
        .ok_or_else(|| EngineError::invalid_configuration("network has no output node"))
}

/// Output values of the whole output layer from the most recent forward pass.
#[must_use]
pub fn outputs(network: &Network) -> Vec<f64> {
    network.output_layer().iter().map(|n| n.output).collect()
}
