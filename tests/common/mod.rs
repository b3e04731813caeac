use neuroplay_lib::model::dataset::DatasetKind;
use neuroplay_lib::model::living::{LiveNeuron, NeuronType, Vec3};
use neuroplay_lib::model::lifecycle::create_neuron_with_rng;
use neuroplay_lib::{AppConfig, Playground};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[allow(dead_code)]
pub struct PlaygroundBuilder {
    config: AppConfig,
    graph_layers: Option<Vec<usize>>,
}

#[allow(dead_code)]
impl PlaygroundBuilder {
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.network.seed = Some(42);
        config.dataset.count = 200;
        Self {
            config,
            graph_layers: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.network.seed = Some(seed);
        self
    }

    pub fn with_dataset(mut self, kind: DatasetKind) -> Self {
        self.config.dataset.kind = kind;
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn with_graph(mut self, layers: &[usize]) -> Self {
        self.graph_layers = Some(layers.to_vec());
        self
    }

    pub fn build(self) -> Playground {
        let mut playground = Playground::new(self.config).expect("valid test config");
        if let Some(layers) = self.graph_layers {
            playground.seed_graph(&layers).expect("valid graph layers");
        }
        playground
    }
}

/// Hidden neurons scattered through a cube of half-width `extent`.
#[allow(dead_code)]
pub fn scattered_neurons(count: usize, extent: f32, seed: u64) -> Vec<LiveNeuron> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let position = Vec3::new(
                rng.gen_range(-extent..extent),
                rng.gen_range(-extent..extent),
                rng.gen_range(-extent..extent),
            );
            create_neuron_with_rng(position, NeuronType::Hidden, &mut rng)
        })
        .collect()
}
