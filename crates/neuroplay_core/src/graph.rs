//! Owning collection for living neurons and their connections.

use crate::error::{EngineError, Result};
use crate::{hebbian, lifecycle};
use neuroplay_data::{LiveConnection, LiveNeuron};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LivingGraph {
    neurons: Vec<LiveNeuron>,
    connections: Vec<LiveConnection>,
}

impl LivingGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_neuron(&mut self, neuron: LiveNeuron) -> Uuid {
        let id = neuron.id;
        self.neurons.push(neuron);
        id
    }

    /// Creates a connection between two existing neurons.
    pub fn connect_with_rng<R: Rng>(
        &mut self,
        from: Uuid,
        to: Uuid,
        rng: &mut R,
    ) -> Result<Uuid> {
        for id in [from, to] {
            if self.neuron(id).is_none() {
                return Err(EngineError::UnknownNeuron(id));
            }
        }
        let connection = lifecycle::create_connection_with_rng(from, to, rng);
        let id = connection.id;
        for neuron in self
            .neurons
            .iter_mut()
            .filter(|n| n.id == from || n.id == to)
        {
            neuron.connections.push(id);
        }
        self.connections.push(connection);
        Ok(id)
    }

    pub fn connect(&mut self, from: Uuid, to: Uuid) -> Result<Uuid> {
        let mut rng = rand::thread_rng();
        self.connect_with_rng(from, to, &mut rng)
    }

    /// Removes a neuron along with every connection that touched it.
    ///
    /// Surviving neurons keep their insertion order.
    pub fn remove_neuron(&mut self, id: Uuid) -> Option<LiveNeuron> {
        let index = self.neurons.iter().position(|n| n.id == id)?;
        let removed = self.neurons.remove(index);

        let mut dropped = Vec::new();
        self.connections.retain(|c| {
            let dangling = c.from == id || c.to == id;
            if dangling {
                dropped.push(c.id);
            }
            !dangling
        });
        if !dropped.is_empty() {
            for neuron in &mut self.neurons {
                neuron.connections.retain(|c| !dropped.contains(c));
            }
        }

        tracing::debug!(neuron = %id, connections = dropped.len(), "Neuron removed");
        Some(removed)
    }

    /// Removes every neuron whose health fell below `threshold`.
    pub fn prune_unhealthy(&mut self, threshold: f32) -> usize {
        let doomed: Vec<Uuid> = self
            .neurons
            .iter()
            .filter(|n| n.health < threshold)
            .map(|n| n.id)
            .collect();
        for id in &doomed {
            self.remove_neuron(*id);
        }
        if !doomed.is_empty() {
            tracing::info!(removed = doomed.len(), threshold, "Pruned unhealthy neurons");
        }
        doomed.len()
    }

    pub fn apply_pattern(&mut self, pattern: &[f32]) {
        hebbian::apply_pattern(&mut self.neurons, pattern);
    }

    pub fn hebbian_step(&mut self, learning_rate: f32) -> usize {
        hebbian::hebbian_step(&mut self.neurons, &mut self.connections, learning_rate)
    }

    pub fn age_step(&mut self) {
        lifecycle::age_step(&mut self.neurons, &mut self.connections);
    }

    #[must_use]
    pub fn neuron(&self, id: Uuid) -> Option<&LiveNeuron> {
        self.neurons.iter().find(|n| n.id == id)
    }

    #[must_use]
    pub fn neurons(&self) -> &[LiveNeuron] {
        &self.neurons
    }

    /// Mutable view for algorithms; the set of neurons cannot change through it.
    pub fn neurons_mut(&mut self) -> &mut [LiveNeuron] {
        &mut self.neurons
    }

    #[must_use]
    pub fn connections(&self) -> &[LiveConnection] {
        &self.connections
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.neurons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.neurons.is_empty()
    }
}
