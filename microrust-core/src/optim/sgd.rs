use crate::error::MicroRustError;
use crate::optim::optimizer_trait::Optimizer;
use crate::value::{NodeId, Value};
use std::collections::HashMap;

/// Hyperparameters of [`SgdOptimizer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SgdOptions {
    /// Learning rate.
    pub lr: f64,
    /// Momentum factor (0 disables momentum).
    pub momentum: f64,
    /// Weight decay (L2 penalty) factor added to each gradient.
    pub weight_decay: f64,
    /// Enables Nesterov momentum. Requires a non-zero momentum.
    pub nesterov: bool,
}

impl Default for SgdOptions {
    fn default() -> Self {
        SgdOptions {
            lr: 0.1,
            momentum: 0.0,
            weight_decay: 0.0,
            nesterov: false,
        }
    }
}

impl SgdOptions {
    pub fn with_lr(lr: f64) -> Self {
        SgdOptions {
            lr,
            ..SgdOptions::default()
        }
    }

    pub fn validate(&self) -> Result<(), MicroRustError> {
        if !(self.lr.is_finite() && self.lr >= 0.0) {
            return Err(MicroRustError::InvalidConfig(format!(
                "Invalid learning rate: {}",
                self.lr
            )));
        }
        if !(self.momentum.is_finite() && self.momentum >= 0.0) {
            return Err(MicroRustError::InvalidConfig(format!(
                "Invalid momentum value: {}",
                self.momentum
            )));
        }
        if !(self.weight_decay.is_finite() && self.weight_decay >= 0.0) {
            return Err(MicroRustError::InvalidConfig(format!(
                "Invalid weight_decay value: {}",
                self.weight_decay
            )));
        }
        if self.nesterov && self.momentum == 0.0 {
            return Err(MicroRustError::InvalidConfig(
                "Nesterov momentum requires a non-zero momentum".to_string(),
            ));
        }
        Ok(())
    }
}

/// Implements the Stochastic Gradient Descent (SGD) optimizer.
///
/// Without momentum or weight decay a step is `p.data -= lr * p.grad` for
/// every parameter. With them, for each parameter:
///
/// ```text
/// d   = grad + weight_decay * data
/// buf = momentum * buf + d          (buf = d on the first step)
/// d   = d + momentum * buf          (nesterov)
///     | buf                         (otherwise)
/// data -= lr * d
/// ```
#[derive(Debug)]
pub struct SgdOptimizer {
    params: Vec<Value>,
    options: SgdOptions,
    momentum_buffers: HashMap<NodeId, f64>,
    step_count: usize,
}

impl SgdOptimizer {
    /// Creates a new `SgdOptimizer`.
    ///
    /// # Arguments
    ///
    /// * `params`: The parameters to optimize, usually `module.parameters()`.
    /// * `options`: Hyperparameters; see [`SgdOptions`].
    ///
    /// # Errors
    /// `InvalidConfig` if the options do not validate.
    pub fn new(
        params: impl IntoIterator<Item = Value>,
        options: SgdOptions,
    ) -> Result<Self, MicroRustError> {
        options.validate()?;
        let params: Vec<Value> = params.into_iter().collect();
        log::debug!(
            "SgdOptimizer::new: {} parameters, {:?}",
            params.len(),
            options
        );
        Ok(SgdOptimizer {
            params,
            options,
            momentum_buffers: HashMap::new(),
            step_count: 0,
        })
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }

    pub fn options(&self) -> &SgdOptions {
        &self.options
    }

    /// Number of completed steps.
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Clears the momentum state.
    pub fn reset_state(&mut self) {
        self.momentum_buffers.clear();
    }
}

impl Optimizer for SgdOptimizer {
    fn step(&mut self) -> Result<(), MicroRustError> {
        let SgdOptions {
            lr,
            momentum,
            weight_decay,
            nesterov,
        } = self.options;

        for param in &self.params {
            let data = param.data();
            let mut d_p = param.grad();
            if !d_p.is_finite() {
                log::warn!(
                    "SgdOptimizer::step: non-finite gradient {} on parameter '{}'",
                    d_p,
                    param.label()
                );
            }

            if weight_decay != 0.0 {
                d_p += weight_decay * data;
            }

            if momentum != 0.0 {
                let buffer = self
                    .momentum_buffers
                    .entry(param.node_id())
                    .and_modify(|buf| *buf = momentum * *buf + d_p)
                    .or_insert(d_p);
                d_p = if nesterov { d_p + momentum * *buffer } else { *buffer };
            }

            param.set_data(data - lr * d_p);
        }
        self.step_count += 1;
        log::trace!("SgdOptimizer::step {} done (lr={})", self.step_count, lr);
        Ok(())
    }

    fn zero_grad(&mut self) {
        for param in &self.params {
            param.zero_grad();
        }
    }

    fn lr(&self) -> f64 {
        self.options.lr
    }

    fn set_lr(&mut self, lr: f64) {
        self.options.lr = lr;
    }
}
