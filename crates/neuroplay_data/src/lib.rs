pub mod data;

pub use data::dataset::{DatasetKind, Point};
pub use data::living::{
    AlgorithmKind, Color, LiveConnection, LiveNeuron, NeuronType, TrainingIssues, Vec3,
};
pub use data::network::{
    sigmoid, Activation, Link, Network, NetworkParams, Node, NodeId, Regularization,
};
