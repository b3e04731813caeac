use crate::error::{EngineError, Result};
use neuroplay_data::{Link, Network, NetworkParams, Node, NodeId};
use rand::Rng;

/// Half-width of the uniform range used for initial link weights.
pub const INITIAL_WEIGHT_RANGE: f64 = 0.5;

pub fn validate(layer_sizes: &[usize], params: &NetworkParams) -> Result<()> {
    if layer_sizes.len() < 2 {
        return Err(EngineError::invalid_configuration(format!(
            "need at least 2 layers, got {}",
            layer_sizes.len()
        )));
    }
    if let Some(layer) = layer_sizes.iter().position(|&size| size == 0) {
        return Err(EngineError::invalid_configuration(format!(
            "layer {layer} has no nodes"
        )));
    }
    if !params.learning_rate.is_finite() || params.learning_rate <= 0.0 {
        return Err(EngineError::invalid_configuration(format!(
            "learning rate must be positive, got {}",
            params.learning_rate
        )));
    }
    if !params.regularization_rate.is_finite() || params.regularization_rate < 0.0 {
        return Err(EngineError::invalid_configuration(format!(
            "regularization rate must be non-negative, got {}",
            params.regularization_rate
        )));
    }
    Ok(())
}

pub fn create_network_with_rng<R: Rng>(
    layer_sizes: &[usize],
    params: NetworkParams,
    rng: &mut R,
) -> Result<Network> {
    validate(layer_sizes, &params)?;

    let layers: Vec<Vec<Node>> = layer_sizes
        .iter()
        .enumerate()
        .map(|(layer, &size)| {
            (0..size)
                .map(|index| Node::new(NodeId::new(layer, index)))
                .collect()
        })
        .collect();

    let link_count = layer_sizes.windows(2).map(|w| w[0] * w[1]).sum();
    let mut links = Vec::with_capacity(link_count);
    for layer in 1..layer_sizes.len() {
        for dest in 0..layer_sizes[layer] {
            for source in 0..layer_sizes[layer - 1] {
                links.push(Link {
                    source: NodeId::new(layer - 1, source),
                    dest: NodeId::new(layer, dest),
                    weight: rng.gen_range(-INITIAL_WEIGHT_RANGE..INITIAL_WEIGHT_RANGE),
                });
            }
        }
    }

    let mut network = Network {
        layers,
        links,
        params,
        incoming: Vec::new(),
        outgoing: Vec::new(),
        forward_pending: false,
    };
    initialize_index(&mut network);

    tracing::debug!(
        layers = ?layer_sizes,
        links = network.links.len(),
        activation = %params.activation,
        "Network created"
    );
    Ok(network)
}

/// Rebuilds the per-node incoming/outgoing link index.
///
/// Links whose endpoints fall outside the layer structure are skipped.
pub fn initialize_index(network: &mut Network) {
    let empty_index = |layers: &[Vec<Node>]| -> Vec<Vec<Vec<usize>>> {
        layers
            .iter()
            .map(|layer| vec![Vec::new(); layer.len()])
            .collect()
    };
    let mut incoming = empty_index(&network.layers);
    let mut outgoing = empty_index(&network.layers);

    for (link_idx, link) in network.links.iter().enumerate() {
        if let Some(slot) = incoming
            .get_mut(link.dest.layer)
            .and_then(|layer| layer.get_mut(link.dest.index))
        {
            slot.push(link_idx);
        }
        if let Some(slot) = outgoing
            .get_mut(link.source.layer)
            .and_then(|layer| layer.get_mut(link.source.index))
        {
            slot.push(link_idx);
        }
    }

    network.incoming = incoming;
    network.outgoing = outgoing;
}

#[must_use]
pub fn index_is_current(network: &Network) -> bool {
    network.incoming.len() == network.layers.len() && network.outgoing.len() == network.layers.len()
}
