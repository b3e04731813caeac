use neuroplay_data::{Color, LiveConnection, LiveNeuron, NeuronType, TrainingIssues, Vec3};
use rand::Rng;
use uuid::Uuid;

/// Ticks after which the age term of a neuron's health reaches zero.
pub const MAX_AGE_TICKS: f32 = 300.0;
/// Training steps after which the overtraining term reaches zero.
pub const OVERTRAINING_LIMIT: f32 = 10_000.0;
/// Train/validation accuracy gap that signals overfitting.
pub const OVERFIT_GAP: f64 = 0.15;
pub const OVERFIT_MIN_EPOCHS: u64 = 100;
pub const UNDERFIT_ACCURACY: f64 = 0.7;
pub const UNDERFIT_MIN_EPOCHS: u64 = 50;
pub const INITIAL_STRENGTH: f32 = 0.5;

const WITHERED: Color = Color::new(0.25, 0.25, 0.28);

pub fn create_neuron_with_rng<R: Rng>(
    position: Vec3,
    neuron_type: NeuronType,
    rng: &mut R,
) -> LiveNeuron {
    LiveNeuron {
        id: Uuid::from_u128(rng.gen::<u128>()),
        position,
        activation: 0.0,
        age: 0,
        health: 1.0,
        training_count: 0,
        neuron_type,
        color: neuron_type.base_color(),
        connections: Vec::new(),
    }
}

pub fn create_neuron(position: Vec3, neuron_type: NeuronType) -> LiveNeuron {
    let mut rng = rand::thread_rng();
    create_neuron_with_rng(position, neuron_type, &mut rng)
}

pub fn create_connection_with_rng<R: Rng>(from: Uuid, to: Uuid, rng: &mut R) -> LiveConnection {
    LiveConnection {
        id: Uuid::from_u128(rng.gen::<u128>()),
        from,
        to,
        weight: rng.gen_range(-1.0..=1.0),
        strength: INITIAL_STRENGTH,
        age: 0,
        last_activation: 0.0,
    }
}

pub fn create_connection(from: Uuid, to: Uuid) -> LiveConnection {
    let mut rng = rand::thread_rng();
    create_connection_with_rng(from, to, &mut rng)
}

/// Health derived from age and training exposure, scaled by current health.
///
/// Never exceeds the neuron's current health.
#[must_use]
pub fn calculate_health(neuron: &LiveNeuron) -> f32 {
    let age_decay = (1.0 - neuron.age as f32 / MAX_AGE_TICKS).max(0.0);
    let overtraining = (1.0 - neuron.training_count as f32 / OVERTRAINING_LIMIT).max(0.0);
    ((age_decay + overtraining) / 2.0 * neuron.health).min(1.0)
}

/// Flags overfitting and underfitting. The two flags are independent.
#[must_use]
pub fn detect_training_issues(
    train_accuracy: f64,
    validation_accuracy: f64,
    epochs: u64,
) -> TrainingIssues {
    TrainingIssues {
        is_overfitted: (train_accuracy - validation_accuracy) > OVERFIT_GAP
            && epochs > OVERFIT_MIN_EPOCHS,
        is_underfitted: train_accuracy < UNDERFIT_ACCURACY && epochs > UNDERFIT_MIN_EPOCHS,
    }
}

#[must_use]
pub fn update_connection_weight(
    connection: &LiveConnection,
    error: f32,
    learning_rate: f32,
) -> f32 {
    (connection.weight + error * learning_rate).clamp(-1.0, 1.0)
}

/// Base type color dimmed toward grey as health drops.
#[must_use]
pub fn health_color(neuron: &LiveNeuron) -> Color {
    WITHERED.lerp(&neuron.neuron_type.base_color(), neuron.health)
}

/// Advances every neuron and connection by one tick and refreshes health.
pub fn age_step(neurons: &mut [LiveNeuron], connections: &mut [LiveConnection]) {
    for neuron in neurons.iter_mut() {
        neuron.age += 1;
        neuron.health = calculate_health(neuron);
    }
    for connection in connections.iter_mut() {
        connection.age += 1;
    }
}
