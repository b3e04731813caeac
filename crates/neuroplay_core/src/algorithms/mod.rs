//! Decorative animation algorithms for the living network.
//!
//! Each algorithm is a pure strategy: given the seconds elapsed since it
//! started and a snapshot of the neurons, it returns one [`NeuronTarget`] per
//! neuron. [`AlgorithmRunner`] owns the shared policy for applying targets:
//! clamping activation, hard-setting or blending colors, and fading back to
//! the colors captured when the algorithm started.

pub mod cascade;
pub mod pulse;
pub mod spiral;
pub mod walker;
pub mod wave;

use neuroplay_data::{AlgorithmKind, Color, LiveNeuron};
use std::collections::HashMap;
use std::time::Instant;
use uuid::Uuid;

pub use cascade::CascadeActivation;
pub use pulse::PulseNetwork;
pub use spiral::SpiralGrowth;
pub use walker::RandomWalker;
pub use wave::WavePropagation;

/// Per-frame rate at which untargeted neurons return to their original color.
pub const FADE_RATE: f32 = 0.03;
/// Per-frame rate used when blending toward a low-intensity target color.
pub const BLEND_RATE: f32 = 0.2;
/// Per-frame activation multiplier for neurons outside an algorithm's focus.
pub const DECAY: f32 = 0.98;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActivationUpdate {
    Set(f32),
    /// Multiply the current activation.
    Scale(f32),
    /// Raise the current activation to at least this value.
    Raise(f32),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorUpdate {
    Set(Color),
    Blend { target: Color, rate: f32 },
    /// Move toward the color captured at start.
    FadeBack(f32),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeuronTarget {
    pub activation: ActivationUpdate,
    pub color: ColorUpdate,
}

impl NeuronTarget {
    /// Decay activation and fade back to the original color.
    #[must_use]
    pub const fn resting() -> Self {
        Self {
            activation: ActivationUpdate::Scale(DECAY),
            color: ColorUpdate::FadeBack(FADE_RATE),
        }
    }
}

/// Hard-set `color` when `intensity` exceeds `threshold`, otherwise blend.
#[must_use]
pub fn intensity_color(color: Color, intensity: f32, threshold: f32) -> ColorUpdate {
    if intensity > threshold {
        ColorUpdate::Set(color)
    } else {
        ColorUpdate::Blend {
            target: color,
            rate: BLEND_RATE,
        }
    }
}

/// A time-parametrized animation strategy.
pub trait Algorithm {
    fn kind(&self) -> AlgorithmKind;

    /// Targets for every neuron, in the same order as `neurons`.
    fn targets(&self, elapsed: f32, neurons: &[LiveNeuron]) -> Vec<NeuronTarget>;
}

#[must_use]
pub fn algorithm_for(kind: AlgorithmKind) -> Box<dyn Algorithm> {
    match kind {
        AlgorithmKind::WavePropagation => Box::new(WavePropagation),
        AlgorithmKind::SpiralGrowth => Box::new(SpiralGrowth),
        AlgorithmKind::CascadeActivation => Box::new(CascadeActivation),
        AlgorithmKind::PulseNetwork => Box::new(PulseNetwork),
        AlgorithmKind::RandomWalker => Box::new(RandomWalker),
    }
}

/// Applies `targets` to `neurons`, using `originals` for fade-back.
///
/// Neurons without a captured original color keep their color on fade-back.
pub fn apply_targets(
    neurons: &mut [LiveNeuron],
    targets: &[NeuronTarget],
    originals: &HashMap<Uuid, Color>,
) {
    for (neuron, target) in neurons.iter_mut().zip(targets) {
        let activation = match target.activation {
            ActivationUpdate::Set(value) => value,
            ActivationUpdate::Scale(factor) => neuron.activation * factor,
            ActivationUpdate::Raise(floor) => neuron.activation.max(floor),
        };
        neuron.activation = if activation.is_finite() {
            activation.clamp(0.0, 1.0)
        } else {
            0.0
        };

        neuron.color = match target.color {
            ColorUpdate::Set(color) => color,
            ColorUpdate::Blend { target, rate } => neuron.color.lerp(&target, rate),
            ColorUpdate::FadeBack(rate) => match originals.get(&neuron.id) {
                Some(original) => neuron.color.lerp(original, rate),
                None => neuron.color,
            },
        };
    }
}

/// Drives at most one running algorithm over a caller-owned set of neurons.
#[derive(Default)]
pub struct AlgorithmRunner {
    current: Option<Box<dyn Algorithm>>,
    started_at: Option<Instant>,
    original_colors: HashMap<Uuid, Color>,
}

impl AlgorithmRunner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts `kind`, capturing the current colors. A running algorithm is
    /// stopped first so its colors are restored before the new capture.
    pub fn start(&mut self, kind: AlgorithmKind, neurons: &mut [LiveNeuron]) {
        if self.is_active() {
            self.stop(neurons);
        }
        self.original_colors = neurons.iter().map(|n| (n.id, n.color)).collect();
        self.current = Some(algorithm_for(kind));
        self.started_at = Some(Instant::now());
        tracing::info!(algorithm = %kind, neurons = neurons.len(), "Algorithm started");
    }

    /// Restores every captured color and releases the snapshot.
    pub fn stop(&mut self, neurons: &mut [LiveNeuron]) {
        for neuron in neurons.iter_mut() {
            if let Some(original) = self.original_colors.get(&neuron.id) {
                neuron.color = *original;
            }
        }
        if let Some(algorithm) = self.current.take() {
            tracing::info!(algorithm = %algorithm.kind(), "Algorithm stopped");
        }
        self.original_colors.clear();
        self.started_at = None;
    }

    /// Advances one frame using wall-clock time since [`AlgorithmRunner::start`].
    /// Returns `false` when nothing is running.
    pub fn update(&mut self, neurons: &mut [LiveNeuron]) -> bool {
        let Some(started_at) = self.started_at else {
            return false;
        };
        let elapsed = started_at.elapsed().as_secs_f32();
        self.update_at(elapsed, neurons)
    }

    /// Advances one frame at an explicit `elapsed` time in seconds.
    pub fn update_at(&mut self, elapsed: f32, neurons: &mut [LiveNeuron]) -> bool {
        let Some(algorithm) = &self.current else {
            return false;
        };
        let targets = algorithm.targets(elapsed.max(0.0), neurons);
        apply_targets(neurons, &targets, &self.original_colors);
        true
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    #[must_use]
    pub fn current_algorithm(&self) -> Option<AlgorithmKind> {
        self.current.as_ref().map(|a| a.kind())
    }
}
