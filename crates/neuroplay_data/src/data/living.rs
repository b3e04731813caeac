use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Position in the 3D scene.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    #[must_use]
    pub fn distance(&self, other: &Vec3) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// RGB color with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const CYAN: Color = Color::new(0.0, 1.0, 1.0);
    pub const GREEN: Color = Color::new(0.2, 1.0, 0.4);
    pub const ORANGE: Color = Color::new(1.0, 0.55, 0.1);
    pub const PURPLE: Color = Color::new(0.6, 0.2, 1.0);
    pub const PINK: Color = Color::new(1.0, 0.35, 0.75);

    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Linear interpolation toward `target`; `t` is clamped to `[0, 1]`.
    /// Both endpoints are reproduced exactly.
    #[must_use]
    pub fn lerp(&self, target: &Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        if t >= 1.0 {
            return *target;
        }
        Color {
            r: self.r + (target.r - self.r) * t,
            g: self.g + (target.g - self.g) * t,
            b: self.b + (target.b - self.b) * t,
        }
    }
}

/// Role of a neuron in the living graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NeuronType {
    Input,
    Hidden,
    Output,
}

impl NeuronType {
    /// Fixed base hue for each neuron role.
    #[must_use]
    pub fn base_color(self) -> Color {
        match self {
            NeuronType::Input => Color::new(0.29, 0.87, 0.5),
            NeuronType::Hidden => Color::new(0.38, 0.65, 0.98),
            NeuronType::Output => Color::new(0.98, 0.45, 0.09),
        }
    }
}

/// A neuron of the decorative living network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveNeuron {
    pub id: Uuid,
    pub position: Vec3,
    /// Volatile activation in `[0, 1]`.
    pub activation: f32,
    /// Ticks since creation.
    pub age: u64,
    pub health: f32,
    pub training_count: u64,
    pub neuron_type: NeuronType,
    pub color: Color,
    /// Ids of attached connections.
    pub connections: Vec<Uuid>,
}

/// A directed weighted connection between two living neurons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveConnection {
    pub id: Uuid,
    pub from: Uuid,
    pub to: Uuid,
    /// Always within `[-1, 1]`.
    pub weight: f32,
    /// `|weight|`, used for rendering opacity.
    pub strength: f32,
    pub age: u64,
    pub last_activation: f32,
}

/// Result of a training diagnosis. Both flags may be set at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TrainingIssues {
    pub is_overfitted: bool,
    pub is_underfitted: bool,
}

/// The five decorative animation algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlgorithmKind {
    WavePropagation,
    SpiralGrowth,
    CascadeActivation,
    PulseNetwork,
    RandomWalker,
}

impl AlgorithmKind {
    pub const ALL: [AlgorithmKind; 5] = [
        AlgorithmKind::WavePropagation,
        AlgorithmKind::SpiralGrowth,
        AlgorithmKind::CascadeActivation,
        AlgorithmKind::PulseNetwork,
        AlgorithmKind::RandomWalker,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            AlgorithmKind::WavePropagation => "wave-propagation",
            AlgorithmKind::SpiralGrowth => "spiral-growth",
            AlgorithmKind::CascadeActivation => "cascade-activation",
            AlgorithmKind::PulseNetwork => "pulse-network",
            AlgorithmKind::RandomWalker => "random-walker",
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AlgorithmKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        AlgorithmKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| format!("unknown algorithm: {s}"))
    }
}
