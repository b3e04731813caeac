//! # Neuroplay Core
//!
//! Engines behind an interactive neural-network playground.
//!
//! This crate contains:
//! - A layered feed-forward network with backpropagation and L1/L2 regularization
//! - Synthetic 2D classification datasets and epoch-level training
//! - A "living" graph of neurons that age, lose health and learn by Hebbian updates
//! - Five decorative animation algorithms driven over the living graph
//! - Configuration, metrics and structured logging
//!
//! ## Example
//!
//! ```
//! use neuroplay_core::network::NetworkLogic;
//! use neuroplay_data::{Network, NetworkParams};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let mut network =
//!     Network::new_random_with_rng(&[2, 4, 1], NetworkParams::default(), &mut rng).unwrap();
//!
//! let prediction = network.forward(&[0.5, -0.5]).unwrap();
//! assert!((-1.0..=1.0).contains(&prediction));
//! network.backward(1.0).unwrap();
//! ```

/// Animation strategies and the runner that applies them
pub mod algorithms;
/// Session configuration loaded from `config.toml`
pub mod config;
/// Synthetic labeled point sets
pub mod dataset;
/// Engine error type
pub mod error;
/// Owning collection of living neurons and connections
pub mod graph;
/// Hebbian training for the living graph
pub mod hebbian;
/// Living neuron creation, health, aging and training diagnosis
pub mod lifecycle;
/// Session counters and logging setup
pub mod metrics;
/// Feed-forward network construction, forward and backward passes
pub mod network;
/// Epoch training and evaluation
pub mod training;

pub use algorithms::{Algorithm, AlgorithmRunner};
pub use config::AppConfig;
pub use error::{EngineError, Result};
pub use graph::LivingGraph;
pub use metrics::{init_logging, Metrics};
pub use network::NetworkLogic;
pub use training::EpochReport;
