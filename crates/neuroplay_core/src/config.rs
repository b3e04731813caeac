//! Configuration for a playground session.
//!
//! Strongly-typed structures that map to a `config.toml` file. Any section or
//! field may be omitted and falls back to the defaults.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [network]
//! layer_sizes = [2, 4, 2, 1]
//! learning_rate = 0.03
//! activation = "tanh"
//! regularization = "l2"
//! regularization_rate = 0.001
//! seed = 42
//!
//! [dataset]
//! kind = "spiral"
//! noise = 10
//!
//! [living]
//! hebbian_learning_rate = 0.05
//! ```

use crate::hebbian;
use neuroplay_data::{Activation, DatasetKind, NetworkParams, Regularization};
use serde::{Deserialize, Serialize};

/// Topology and hyperparameters of the trained network.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct NetworkConfig {
    pub layer_sizes: Vec<usize>,
    pub learning_rate: f64,
    pub activation: Activation,
    pub regularization: Regularization,
    pub regularization_rate: f64,
    /// Fixed seed for reproducible sessions; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        let params = NetworkParams::default();
        Self {
            layer_sizes: vec![2, 4, 2, 1],
            learning_rate: params.learning_rate,
            activation: params.activation,
            regularization: params.regularization,
            regularization_rate: params.regularization_rate,
            seed: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DatasetConfig {
    pub kind: DatasetKind,
    pub count: usize,
    /// Jitter amount; offsets per axis stay within `noise / 20`.
    pub noise: u32,
    pub train_ratio: f64,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            kind: DatasetKind::Circle,
            count: 500,
            noise: 0,
            train_ratio: 0.5,
        }
    }
}

/// Living-graph training and pruning.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LivingConfig {
    pub hebbian_learning_rate: f32,
    /// Neurons whose health drops below this are removed on aging ticks.
    pub prune_health_threshold: f32,
}

impl Default for LivingConfig {
    fn default() -> Self {
        Self {
            hebbian_learning_rate: hebbian::DEFAULT_LEARNING_RATE,
            prune_health_threshold: 0.05,
        }
    }
}

/// Cadences the host loop should drive the session at.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TimingConfig {
    pub training_hz: f32,
    pub aging_hz: f32,
    pub animation_fps: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            training_hz: 10.0,
            aging_hz: 1.0,
            animation_fps: 60,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub network: NetworkConfig,
    pub dataset: DatasetConfig,
    pub living: LivingConfig,
    pub timing: TimingConfig,
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Err` describing the first failing rule.
    pub fn validate(&self) -> anyhow::Result<()> {
        // Network validation
        anyhow::ensure!(
            self.network.layer_sizes.len() >= 2,
            "Network needs at least an input and an output layer"
        );
        anyhow::ensure!(
            self.network.layer_sizes.iter().all(|&size| size > 0),
            "Layer sizes must be positive"
        );
        anyhow::ensure!(
            self.network.layer_sizes[0] == 2,
            "Input layer must have 2 nodes for 2D datasets"
        );
        anyhow::ensure!(
            self.network.learning_rate.is_finite() && self.network.learning_rate > 0.0,
            "Learning rate must be positive"
        );
        anyhow::ensure!(
            self.network.regularization_rate.is_finite()
                && self.network.regularization_rate >= 0.0,
            "Regularization rate must be non-negative"
        );

        // Dataset validation
        anyhow::ensure!(self.dataset.count > 0, "Dataset count must be positive");
        anyhow::ensure!(
            self.dataset.count <= 100_000,
            "Dataset count too large (max 100000)"
        );
        anyhow::ensure!(self.dataset.noise <= 50, "Noise too large (max 50)");
        anyhow::ensure!(
            self.dataset.train_ratio > 0.0 && self.dataset.train_ratio <= 1.0,
            "Train ratio must be in (0.0, 1.0]"
        );

        // Living graph validation
        anyhow::ensure!(
            self.living.hebbian_learning_rate >= 0.0,
            "Hebbian learning rate must be non-negative"
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.living.prune_health_threshold),
            "Prune health threshold must be in [0.0, 1.0]"
        );

        // Timing validation
        anyhow::ensure!(self.timing.training_hz > 0.0, "Training rate must be positive");
        anyhow::ensure!(self.timing.aging_hz > 0.0, "Aging rate must be positive");
        anyhow::ensure!(self.timing.animation_fps > 0, "Animation FPS must be positive");
        anyhow::ensure!(
            self.timing.animation_fps <= 240,
            "Animation FPS too high (max 240)"
        );

        Ok(())
    }

    /// Parses and validates a `config.toml` document.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn network_params(&self) -> NetworkParams {
        NetworkParams {
            learning_rate: self.network.learning_rate,
            activation: self.network.activation,
            regularization: self.network.regularization,
            regularization_rate: self.network.regularization_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_single_layer_rejected() {
        let config = AppConfig {
            network: NetworkConfig {
                layer_sizes: vec![2],
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_width_layer_rejected() {
        let config = AppConfig {
            network: NetworkConfig {
                layer_sizes: vec![2, 0, 1],
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_learning_rate() {
        let config = AppConfig {
            network: NetworkConfig {
                learning_rate: 0.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_train_ratio() {
        let config = AppConfig {
            dataset: DatasetConfig {
                train_ratio: 1.5,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_animation_fps() {
        let config = AppConfig {
            timing: TimingConfig {
                animation_fps: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_toml_partial_document() {
        let config = AppConfig::from_toml(
            r#"
            [network]
            layer_sizes = [2, 8, 1]
            activation = "relu"
            regularization = "l1"
            regularization_rate = 0.003
            seed = 7

            [dataset]
            kind = "xor"
            noise = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.network.layer_sizes, vec![2, 8, 1]);
        assert_eq!(config.network.activation, Activation::Relu);
        assert_eq!(config.network.regularization, Regularization::L1);
        assert_eq!(config.network.seed, Some(7));
        assert_eq!(config.network.learning_rate, 0.03);
        assert_eq!(config.dataset.kind, DatasetKind::Xor);
        assert_eq!(config.dataset.count, 500);
        assert_eq!(config.living, LivingConfig::default());

        let params = config.network_params();
        assert_eq!(params.activation, Activation::Relu);
        assert_eq!(params.regularization_rate, 0.003);
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = AppConfig::default();
        config.network.seed = Some(99);
        config.dataset.kind = DatasetKind::Spiral;
        let text = toml::to_string(&config).unwrap();
        assert_eq!(AppConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_from_toml_rejects_invalid_values() {
        assert!(AppConfig::from_toml("[network]\nlayer_sizes = [2]\n").is_err());
        assert!(AppConfig::from_toml("[dataset]\nkind = \"moons\"\n").is_err());
    }
}
