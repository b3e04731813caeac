use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Scalar non-linearity applied to a node's weighted input sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    Relu,
    #[default]
    Tanh,
    Sigmoid,
    Linear,
}

impl Activation {
    pub const ALL: [Activation; 4] = [
        Activation::Relu,
        Activation::Tanh,
        Activation::Sigmoid,
        Activation::Linear,
    ];

    #[must_use]
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Activation::Relu => x.max(0.0),
            Activation::Tanh => x.tanh(),
            Activation::Sigmoid => sigmoid(x),
            Activation::Linear => x,
        }
    }

    /// Derivative with respect to the pre-activation value.
    ///
    /// ReLU is not differentiable at zero; the derivative there is taken as 0.
    #[must_use]
    pub fn derivative(self, x: f64) -> f64 {
        match self {
            Activation::Relu => {
                if x > 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
            Activation::Tanh => {
                let t = x.tanh();
                1.0 - t * t
            }
            Activation::Sigmoid => {
                let s = sigmoid(x);
                s * (1.0 - s)
            }
            Activation::Linear => 1.0,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Activation::Relu => "relu",
            Activation::Tanh => "tanh",
            Activation::Sigmoid => "sigmoid",
            Activation::Linear => "linear",
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Activation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Activation::ALL
            .into_iter()
            .find(|activation| activation.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown activation: {s}"))
    }
}

/// Logistic function, shared by the sigmoid activation and the Hebbian step.
#[must_use]
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Weight penalty added to the gradient during backpropagation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Regularization {
    #[default]
    None,
    L1,
    L2,
}

impl Regularization {
    /// Penalty term for a single weight at the given rate.
    #[must_use]
    pub fn term(self, weight: f64, rate: f64) -> f64 {
        match self {
            Regularization::None => 0.0,
            Regularization::L1 => {
                if weight > 0.0 {
                    rate
                } else if weight < 0.0 {
                    -rate
                } else {
                    0.0
                }
            }
            Regularization::L2 => rate * weight,
        }
    }
}

/// Positional identity of a node: layer index and index within the layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId {
    pub layer: usize,
    pub index: usize,
}

impl NodeId {
    #[must_use]
    pub const fn new(layer: usize, index: usize) -> Self {
        Self { layer, index }
    }
}

/// A single unit of the layered network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub bias: f64,
    /// Post-activation value.
    pub output: f64,
    /// Pre-activation weighted sum.
    pub total_input: f64,
    /// Error gradient w.r.t. `total_input`; only meaningful after a backward pass.
    pub delta: f64,
}

impl Node {
    pub const DEFAULT_BIAS: f64 = 0.1;

    #[must_use]
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            bias: Self::DEFAULT_BIAS,
            output: 0.0,
            total_input: 0.0,
            delta: 0.0,
        }
    }
}

/// Directed weighted edge between nodes of consecutive layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub source: NodeId,
    pub dest: NodeId,
    pub weight: f64,
}

/// Engine-wide hyperparameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NetworkParams {
    pub learning_rate: f64,
    pub activation: Activation,
    pub regularization: Regularization,
    pub regularization_rate: f64,
}

impl Default for NetworkParams {
    fn default() -> Self {
        Self {
            learning_rate: 0.03,
            activation: Activation::Tanh,
            regularization: Regularization::None,
            regularization_rate: 0.0,
        }
    }
}

/// Fully-connected feed-forward network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Network {
    /// Ordered layers; the first is the input layer, the last the output layer.
    pub layers: Vec<Vec<Node>>,
    /// Every link between consecutive layers.
    pub links: Vec<Link>,
    pub params: NetworkParams,
    /// Link indices entering each node, `[layer][index]` (not serialized).
    #[serde(skip, default = "Vec::new")]
    pub incoming: Vec<Vec<Vec<usize>>>,
    /// Link indices leaving each node, `[layer][index]` (not serialized).
    #[serde(skip, default = "Vec::new")]
    pub outgoing: Vec<Vec<Vec<usize>>>,
    /// Set by a forward pass and consumed by the backward pass that follows it.
    #[serde(skip)]
    pub forward_pending: bool,
}

impl Network {
    #[must_use]
    pub fn input_size(&self) -> usize {
        self.layers.first().map_or(0, Vec::len)
    }

    #[must_use]
    pub fn output_layer(&self) -> &[Node] {
        self.layers.last().map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.layers.get(id.layer)?.get(id.index)
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.layers.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn layer_sizes(&self) -> Vec<usize> {
        self.layers.iter().map(Vec::len).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_derivative_identities() {
        assert!((Activation::Sigmoid.derivative(0.0) - 0.25).abs() < 1e-12);
        assert!((Activation::Tanh.derivative(0.0) - 1.0).abs() < 1e-12);
        assert_eq!(Activation::Relu.derivative(-0.5), 0.0);
        assert_eq!(Activation::Relu.derivative(0.0), 0.0);
        assert_eq!(Activation::Relu.derivative(0.5), 1.0);
        assert_eq!(Activation::Linear.derivative(42.0), 1.0);
    }

    #[test]
    fn test_activation_values() {
        assert_eq!(Activation::Relu.apply(-3.0), 0.0);
        assert_eq!(Activation::Relu.apply(3.0), 3.0);
        assert!((Activation::Sigmoid.apply(0.0) - 0.5).abs() < 1e-12);
        assert_eq!(Activation::Linear.apply(-1.5), -1.5);
        assert!((Activation::Tanh.apply(1.0) - 1.0f64.tanh()).abs() < 1e-12);
    }

    #[test]
    fn test_activation_parse() {
        for activation in Activation::ALL {
            assert_eq!(activation.name().parse::<Activation>(), Ok(activation));
        }
        assert_eq!(" ReLU ".parse::<Activation>(), Ok(Activation::Relu));
        assert!("softmax".parse::<Activation>().is_err());
    }

    #[test]
    fn test_regularization_terms() {
        assert_eq!(Regularization::None.term(0.4, 0.1), 0.0);
        assert_eq!(Regularization::L1.term(0.4, 0.1), 0.1);
        assert_eq!(Regularization::L1.term(-0.4, 0.1), -0.1);
        assert_eq!(Regularization::L1.term(0.0, 0.1), 0.0);
        assert!((Regularization::L2.term(0.4, 0.1) - 0.04).abs() < 1e-12);
    }
}
