//! Epoch-level training and evaluation over labeled point sets.

use crate::error::Result;
use crate::network::NetworkLogic;
use neuroplay_data::{Network, Point};
use serde::{Deserialize, Serialize};

/// Summary of one training epoch.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EpochReport {
    pub epoch: u64,
    pub train_loss: f64,
    pub test_loss: f64,
    pub train_accuracy: f64,
    pub test_accuracy: f64,
}

fn squared_error(prediction: f64, label: f64) -> f64 {
    0.5 * (prediction - label).powi(2)
}

/// Mean half squared error over `points`. Empty sets have zero loss.
pub fn loss(network: &mut Network, points: &[Point]) -> Result<f64> {
    if points.is_empty() {
        return Ok(0.0);
    }
    let mut total = 0.0;
    for point in points {
        total += squared_error(network.forward(&point.inputs())?, point.label);
    }
    Ok(total / points.len() as f64)
}

/// Fraction of points whose prediction has the same sign as the label.
pub fn accuracy(network: &mut Network, points: &[Point]) -> Result<f64> {
    if points.is_empty() {
        return Ok(0.0);
    }
    let mut correct = 0usize;
    for point in points {
        let prediction = network.forward(&point.inputs())?;
        if (prediction >= 0.0) == (point.label >= 0.0) {
            correct += 1;
        }
    }
    Ok(correct as f64 / points.len() as f64)
}

/// One pass of online gradient descent over `points`, in order.
///
/// Returns the mean loss of the predictions made before each update.
pub fn train_epoch(network: &mut Network, points: &[Point]) -> Result<f64> {
    if points.is_empty() {
        return Ok(0.0);
    }
    let mut total = 0.0;
    for point in points {
        let prediction = network.train_sample(&point.inputs(), point.label)?;
        total += squared_error(prediction, point.label);
    }
    Ok(total / points.len() as f64)
}

/// Trains one epoch on `train` and evaluates on both sets.
pub fn run_epoch(
    network: &mut Network,
    epoch: u64,
    train: &[Point],
    test: &[Point],
) -> Result<EpochReport> {
    train_epoch(network, train)?;
    let report = EpochReport {
        epoch,
        train_loss: loss(network, train)?,
        test_loss: loss(network, test)?,
        train_accuracy: accuracy(network, train)?,
        test_accuracy: accuracy(network, test)?,
    };
    tracing::trace!(
        epoch,
        train_loss = report.train_loss,
        test_loss = report.test_loss,
        "Epoch complete"
    );
    Ok(report)
}
