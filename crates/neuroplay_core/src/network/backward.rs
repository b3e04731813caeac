use super::topology;
use crate::error::{EngineError, Result};
use neuroplay_data::{Network, NetworkParams};

/// Backpropagates the squared error against `target` and applies one
/// gradient-descent step. Every output node is compared with the same target.
///
/// All deltas are computed before any weight changes, so propagation always
/// sees the weights used by the forward pass.
pub fn backward(network: &mut Network, target: f64) -> Result<()> {
    if !network.forward_pending {
        return Err(EngineError::StaleState);
    }
    if !topology::index_is_current(network) {
        topology::initialize_index(network);
    }
    network.forward_pending = false;

    let NetworkParams {
        learning_rate,
        activation,
        regularization,
        regularization_rate,
    } = network.params;
    let last = network.layers.len() - 1;

    for node in &mut network.layers[last] {
        node.delta = (node.output - target) * activation.derivative(node.total_input);
    }

    for layer in (1..last).rev() {
        let (head, tail) = network.layers.split_at_mut(layer + 1);
        let next = &tail[0];
        for (index, node) in head[layer].iter_mut().enumerate() {
            let mut error = 0.0;
            for &link_idx in &network.outgoing[layer][index] {
                let link = &network.links[link_idx];
                error += next[link.dest.index].delta * link.weight;
            }
            node.delta = error * activation.derivative(node.total_input);
        }
    }

    for link in &mut network.links {
        let source = &network.layers[link.source.layer][link.source.index];
        let dest = &network.layers[link.dest.layer][link.dest.index];
        let gradient = source.output * dest.delta;
        let penalty = regularization.term(link.weight, regularization_rate);
        link.weight -= learning_rate * (gradient + penalty);
    }

    for node in network.layers.iter_mut().skip(1).flatten() {
        node.bias -= learning_rate * node.delta;
    }

    Ok(())
}
