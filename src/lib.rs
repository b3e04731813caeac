//! Interactive neural-network playground.
//!
//! [`playground::Playground`] bundles a trainable network, its datasets and a
//! living neuron graph into one session driven by an external tick loop.

pub mod model;
pub mod playground;

pub use model::config::AppConfig;
pub use playground::Playground;
