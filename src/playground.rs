use anyhow::Result;
use neuroplay_core::algorithms::AlgorithmRunner;
use neuroplay_core::config::AppConfig;
use neuroplay_core::dataset;
use neuroplay_core::error::EngineError;
use neuroplay_core::graph::LivingGraph;
use neuroplay_core::lifecycle::{self, create_neuron_with_rng};
use neuroplay_core::metrics::Metrics;
use neuroplay_core::network::NetworkLogic;
use neuroplay_core::training::{self, EpochReport};
use neuroplay_data::{AlgorithmKind, Network, NeuronType, Point, TrainingIssues, Vec3};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

/// Distance between layers of a seeded living graph along the x axis.
pub const LAYER_SPACING: f32 = 4.0;
/// Distance between neurons of the same layer along the y axis.
pub const NEURON_SPACING: f32 = 2.0;
/// Maximum depth offset applied to seeded neurons.
pub const DEPTH_JITTER: f32 = 0.5;

/// One playground session.
///
/// Owns everything the four loops touch: epoch training, Hebbian ticks, aging
/// ticks and animation frames. The host decides the cadence of each loop;
/// [`AppConfig::timing`] carries the suggested rates.
pub struct Playground {
    config: AppConfig,
    network: Network,
    train: Vec<Point>,
    test: Vec<Point>,
    graph: LivingGraph,
    runner: AlgorithmRunner,
    metrics: Metrics,
    epoch: u64,
    last_report: Option<EpochReport>,
    rng: ChaCha8Rng,
}

impl Playground {
    pub fn new(config: AppConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = match config.network.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let network = Network::new_random_with_rng(
            &config.network.layer_sizes,
            config.network_params(),
            &mut rng,
        )?;

        let mut playground = Self {
            config,
            network,
            train: Vec::new(),
            test: Vec::new(),
            graph: LivingGraph::new(),
            runner: AlgorithmRunner::new(),
            metrics: Metrics::new(),
            epoch: 0,
            last_report: None,
            rng,
        };
        playground.regenerate_data();

        tracing::info!(
            layers = ?playground.config.network.layer_sizes,
            dataset = %playground.config.dataset.kind,
            "Playground created"
        );
        Ok(playground)
    }

    /// Trains one epoch and evaluates on both point sets.
    pub fn training_tick(&mut self) -> neuroplay_core::Result<EpochReport> {
        self.epoch += 1;
        let report =
            training::run_epoch(&mut self.network, self.epoch, &self.train, &self.test)?;
        self.metrics.record_training(self.train.len(), report.train_loss);
        self.last_report = Some(report);
        Ok(report)
    }

    /// Draws a fresh dataset and split. The network keeps its weights.
    pub fn regenerate_data(&mut self) {
        let settings = &self.config.dataset;
        let points = dataset::generate_with_rng(
            settings.kind,
            settings.count,
            settings.noise,
            &mut self.rng,
        );
        let (train, test) = dataset::split(points, settings.train_ratio, &mut self.rng);
        tracing::debug!(train = train.len(), test = test.len(), "Dataset split");
        self.train = train;
        self.test = test;
    }

    /// Reinitializes the network weights and restarts the epoch counter.
    pub fn reset_network(&mut self) -> Result<()> {
        self.network = Network::new_random_with_rng(
            &self.config.network.layer_sizes,
            self.config.network_params(),
            &mut self.rng,
        )?;
        self.epoch = 0;
        self.last_report = None;
        tracing::info!("Network reset");
        Ok(())
    }

    /// Diagnosis of the latest epoch.
    ///
    /// Clear before the first epoch and whenever there is no held-out test set,
    /// since validation accuracy is undefined then.
    #[must_use]
    pub fn training_issues(&self) -> TrainingIssues {
        if self.test.is_empty() {
            return TrainingIssues::default();
        }
        self.last_report
            .map(|report| {
                lifecycle::detect_training_issues(
                    report.train_accuracy,
                    report.test_accuracy,
                    self.epoch,
                )
            })
            .unwrap_or_default()
    }

    /// Presents `pattern` to the input neurons and runs one Hebbian step.
    ///
    /// Returns the number of neurons updated.
    pub fn hebbian_tick(&mut self, pattern: &[f32]) -> usize {
        self.graph.apply_pattern(pattern);
        let updated = self
            .graph
            .hebbian_step(self.config.living.hebbian_learning_rate);
        self.metrics.record_hebbian_tick();
        updated
    }

    /// Ages the living graph and prunes neurons that fell below the health
    /// threshold. Returns the number of neurons removed.
    pub fn aging_tick(&mut self) -> usize {
        self.graph.age_step();
        self.metrics.record_aging_tick();
        self.graph
            .prune_unhealthy(self.config.living.prune_health_threshold)
    }

    pub fn start_algorithm(&mut self, kind: AlgorithmKind) {
        self.runner.start(kind, self.graph.neurons_mut());
    }

    pub fn stop_algorithm(&mut self) {
        self.runner.stop(self.graph.neurons_mut());
    }

    /// Advances the running algorithm using wall-clock time.
    pub fn animation_frame(&mut self) -> bool {
        let advanced = self.runner.update(self.graph.neurons_mut());
        self.count_frame(advanced)
    }

    /// Advances the running algorithm at an explicit time in seconds.
    pub fn animation_frame_at(&mut self, elapsed: f32) -> bool {
        let advanced = self.runner.update_at(elapsed, self.graph.neurons_mut());
        self.count_frame(advanced)
    }

    fn count_frame(&self, advanced: bool) -> bool {
        if advanced {
            self.metrics.record_animation_frame();
        }
        advanced
    }

    /// Replaces the living graph with fully-connected layers of the given widths.
    ///
    /// The first layer holds input neurons and the last output neurons. Any
    /// running algorithm is stopped first.
    pub fn seed_graph(&mut self, layer_widths: &[usize]) -> Result<()> {
        if layer_widths.is_empty() || layer_widths.contains(&0) {
            return Err(EngineError::invalid_configuration(
                "living graph layers must be non-empty",
            )
            .into());
        }
        self.stop_algorithm();

        let mut graph = LivingGraph::new();
        let mut previous: Vec<Uuid> = Vec::new();
        let center = (layer_widths.len() - 1) as f32 / 2.0;

        for (layer, &width) in layer_widths.iter().enumerate() {
            let neuron_type = if layer == 0 {
                NeuronType::Input
            } else if layer + 1 == layer_widths.len() {
                NeuronType::Output
            } else {
                NeuronType::Hidden
            };
            let x = (layer as f32 - center) * LAYER_SPACING;
            let row_center = (width - 1) as f32 / 2.0;

            let mut current = Vec::with_capacity(width);
            for index in 0..width {
                let position = Vec3::new(
                    x,
                    (index as f32 - row_center) * NEURON_SPACING,
                    self.rng.gen_range(-DEPTH_JITTER..=DEPTH_JITTER),
                );
                let neuron = create_neuron_with_rng(position, neuron_type, &mut self.rng);
                let id = graph.add_neuron(neuron);
                for &from in &previous {
                    graph.connect_with_rng(from, id, &mut self.rng)?;
                }
                current.push(id);
            }
            previous = current;
        }

        tracing::info!(
            neurons = graph.len(),
            connections = graph.connections().len(),
            "Living graph seeded"
        );
        self.graph = graph;
        Ok(())
    }

    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[must_use]
    pub fn network(&self) -> &Network {
        &self.network
    }

    #[must_use]
    pub fn train_points(&self) -> &[Point] {
        &self.train
    }

    #[must_use]
    pub fn test_points(&self) -> &[Point] {
        &self.test
    }

    #[must_use]
    pub fn graph(&self) -> &LivingGraph {
        &self.graph
    }

    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    #[must_use]
    pub fn last_report(&self) -> Option<EpochReport> {
        self.last_report
    }

    #[must_use]
    pub fn current_algorithm(&self) -> Option<AlgorithmKind> {
        self.runner.current_algorithm()
    }

    #[must_use]
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}
