pub mod backward;
pub mod forward;
pub mod topology;

use crate::error::Result;
pub use neuroplay_data::{Activation, Link, Network, NetworkParams, Node, NodeId, Regularization};
use rand::Rng;

pub use topology::create_network_with_rng;

/// Trait defining the training logic of the layered feed-forward network.
pub trait NetworkLogic: Sized {
    fn new_random(layer_sizes: &[usize], params: NetworkParams) -> Result<Self>;
    fn new_random_with_rng<R: Rng>(
        layer_sizes: &[usize],
        params: NetworkParams,
        rng: &mut R,
    ) -> Result<Self>;

    /// Runs a forward pass and returns the first output node's value.
    fn forward(&mut self, inputs: &[f64]) -> Result<f64>;

    /// Backpropagates against `target` and updates weights and biases.
    /// Must directly follow a successful [`NetworkLogic::forward`].
    fn backward(&mut self, target: f64) -> Result<()>;

    /// One `forward`/`backward` pair; returns the prediction made before the update.
    fn train_sample(&mut self, inputs: &[f64], target: f64) -> Result<f64>;

    #[must_use]
    fn outputs(&self) -> Vec<f64>;

    #[must_use]
    fn link_weight(&self, source: NodeId, dest: NodeId) -> Option<f64>;

    fn initialize_index(&mut self);
}

impl NetworkLogic for Network {
    fn new_random(layer_sizes: &[usize], params: NetworkParams) -> Result<Self> {
        let mut rng = rand::thread_rng();
        Self::new_random_with_rng(layer_sizes, params, &mut rng)
    }

    fn new_random_with_rng<R: Rng>(
        layer_sizes: &[usize],
        params: NetworkParams,
        rng: &mut R,
    ) -> Result<Self> {
        topology::create_network_with_rng(layer_sizes, params, rng)
    }

    fn forward(&mut self, inputs: &[f64]) -> Result<f64> {
        forward::forward(self, inputs)
    }

    fn backward(&mut self, target: f64) -> Result<()> {
        backward::backward(self, target)
    }

    fn train_sample(&mut self, inputs: &[f64], target: f64) -> Result<f64> {
        let prediction = self.forward(inputs)?;
        self.backward(target)?;
        Ok(prediction)
    }

    fn outputs(&self) -> Vec<f64> {
        forward::outputs(self)
    }

    fn link_weight(&self, source: NodeId, dest: NodeId) -> Option<f64> {
        let incoming = self.incoming.get(dest.layer)?.get(dest.index)?;
        incoming
            .iter()
            .map(|&idx| &self.links[idx])
            .find(|link| link.source == source)
            .map(|link| link.weight)
    }

    fn initialize_index(&mut self) {
        topology::initialize_index(self)
    }
}

/// Resolves an activation by name, falling back to `tanh` for unknown names.
#[must_use]
pub fn activation_from_name(name: &str) -> Activation {
    name.parse().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Falling back to tanh activation");
        Activation::Tanh
    })
}
