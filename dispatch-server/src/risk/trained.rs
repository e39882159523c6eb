//! Delay classifier fit offline on historical delay records.
//!
//! A logistic regression over a handful of inputs derived from the
//! [`FeatureVector`], trained with deterministic full-batch gradient descent.
//! Identical data and options always produce an identical model, and the
//! fitted weights round-trip through JSON.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::error::ModelError;
use super::features::FeatureVector;
use super::model::DelayRiskModel;

/// Width of the derived input vector.
pub const NUM_INPUTS: usize = 6;

/// A feature vector with its observed outcome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabeledExample {
    pub features: FeatureVector,
    pub delayed: bool,
}

/// Gradient descent parameters.
#[derive(Debug, Clone)]
pub struct TrainOptions {
    /// Full passes over the dataset.
    pub epochs: usize,

    /// Step size applied to the mean gradient.
    pub learning_rate: f64,

    /// L2 penalty on the weights (not the bias).
    pub l2: f64,
}

impl Default for TrainOptions {
    fn default() -> Self {
        Self {
            epochs: 2000,
            learning_rate: 0.5,
            l2: 1e-3,
        }
    }
}

/// A fitted logistic-regression delay classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainedModel {
    weights: Vec<f64>,
    bias: f64,

    /// Number of examples the model was fit on.
    examples: usize,
}

impl TrainedModel {
    /// Fit a model on labeled examples.
    pub fn train(examples: &[LabeledExample], options: &TrainOptions) -> Result<Self, ModelError> {
        if examples.is_empty() {
            return Err(ModelError::EmptyDataset);
        }

        let inputs: Vec<[f64; NUM_INPUTS]> =
            examples.iter().map(|e| derive_inputs(&e.features)).collect();
        let labels: Vec<f64> = examples
            .iter()
            .map(|e| if e.delayed { 1.0 } else { 0.0 })
            .collect();

        let n = examples.len() as f64;
        let mut weights = [0.0; NUM_INPUTS];
        let mut bias = 0.0;

        for epoch in 0..options.epochs {
            let mut grad_w = [0.0; NUM_INPUTS];
            let mut grad_b = 0.0;

            for (x, y) in inputs.iter().zip(&labels) {
                let err = sigmoid(dot(&weights, x) + bias) - y;
                for (g, xi) in grad_w.iter_mut().zip(x) {
                    *g += err * xi;
                }
                grad_b += err;
            }

            for (w, g) in weights.iter_mut().zip(&grad_w) {
                *w -= options.learning_rate * (g / n + options.l2 * *w);
            }
            bias -= options.learning_rate * grad_b / n;

            if epoch % 500 == 0 {
                debug!(epoch, bias, "training delay model");
            }
        }

        info!(
            examples = examples.len(),
            epochs = options.epochs,
            "trained delay model"
        );

        Ok(Self {
            weights: weights.to_vec(),
            bias,
            examples: examples.len(),
        })
    }

    /// Number of examples the model was fit on.
    pub fn examples(&self) -> usize {
        self.examples
    }

    /// Write the model as JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ModelError> {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Read a model previously written by [`TrainedModel::save`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let reader = BufReader::new(File::open(path)?);
        let model: TrainedModel = serde_json::from_reader(reader)?;

        if model.weights.len() != NUM_INPUTS {
            return Err(ModelError::FeatureWidth {
                expected: NUM_INPUTS,
                found: model.weights.len(),
            });
        }

        Ok(model)
    }
}

impl DelayRiskModel for TrainedModel {
    fn predict(&self, features: &FeatureVector) -> f64 {
        let x = derive_inputs(features);
        let z: f64 = self.weights.iter().zip(&x).map(|(w, xi)| w * xi).sum();
        sigmoid(z + self.bias)
    }

    fn name(&self) -> &'static str {
        "trained"
    }
}

/// Inputs seen by the classifier, all scaled to [0, 1].
fn derive_inputs(f: &FeatureVector) -> [f64; NUM_INPUTS] {
    let flag = |b: bool| if b { 1.0 } else { 0.0 };
    [
        flag(f.is_peak_hour()),
        flag(f.is_weekend()),
        f64::from(f.weather_code) / 3.0,
        flag(f.is_adverse_weather()),
        f64::from(f.station_code) / 9.0,
        f64::from(f.hour) / 23.0,
    ]
}

fn dot(w: &[f64; NUM_INPUTS], x: &[f64; NUM_INPUTS]) -> f64 {
    w.iter().zip(x).map(|(a, b)| a * b).sum()
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}
