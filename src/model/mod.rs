pub use neuroplay_core::NetworkLogic;
pub mod network {
    pub use neuroplay_core::network::*;
}
pub mod dataset {
    pub use neuroplay_core::dataset::*;
    pub use neuroplay_data::{DatasetKind, Point};
}
pub mod training {
    pub use neuroplay_core::training::*;
}
pub mod config {
    pub use neuroplay_core::config::*;
}
pub mod error {
    pub use neuroplay_core::error::*;
}
pub mod lifecycle {
    pub use neuroplay_core::lifecycle::*;
}
pub mod hebbian {
    pub use neuroplay_core::hebbian::*;
}
pub mod graph {
    pub use neuroplay_core::graph::*;
}
pub mod algorithms {
    pub use neuroplay_core::algorithms::*;
}
pub mod metrics {
    pub use neuroplay_core::metrics::*;
}
pub mod living {
    pub use neuroplay_data::{
        AlgorithmKind, Color, LiveConnection, LiveNeuron, NeuronType, TrainingIssues, Vec3,
    };
}
