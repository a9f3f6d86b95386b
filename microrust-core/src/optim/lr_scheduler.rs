use crate::error::MicroRustError;
use crate::optim::optimizer_trait::Optimizer;

/// Defines the interface for learning-rate schedulers.
///
/// A scheduler wraps an optimizer (owned, or borrowed as `&mut O`) and
/// rewrites its learning rate according to a fixed policy.
pub trait LRScheduler<O: Optimizer> {
    /// Advances the schedule by one step.
    ///
    /// Call once per epoch (or iteration, depending on the policy), after the
    /// optimizer step.
    fn step(&mut self) -> Result<(), MicroRustError>;

    /// Returns the learning rate most recently set on the optimizer.
    fn get_last_lr(&self) -> f64;

    /// Number of scheduler steps taken so far.
    fn last_epoch(&self) -> usize;

    /// Returns a reference to the wrapped optimizer.
    fn optimizer(&self) -> &O;

    /// Returns a mutable reference to the wrapped optimizer.
    fn optimizer_mut(&mut self) -> &mut O;
}

/// Implements the StepLR learning rate scheduler.
///
/// Multiplies the learning rate by `gamma` every `step_size` steps.
#[derive(Debug)]
pub struct StepLR<O: Optimizer> {
    optimizer: O,
    step_size: usize,
    gamma: f64,
    last_epoch: usize,
}

impl<O: Optimizer> StepLR<O> {
    /// Creates a new `StepLR` scheduler.
    ///
    /// # Arguments
    ///
    /// * `optimizer` - The optimizer.
    /// * `step_size` - Period of learning rate decay.
    /// * `gamma` - Multiplicative factor of learning rate decay.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if `step_size` is 0.
    pub fn new(optimizer: O, step_size: usize, gamma: f64) -> Result<Self, MicroRustError> {
        if step_size == 0 {
            return Err(MicroRustError::InvalidConfig(
                "StepLR: step_size cannot be zero.".to_string(),
            ));
        }
        Ok(StepLR {
            optimizer,
            step_size,
            gamma,
            last_epoch: 0,
        })
    }
}

impl<O: Optimizer> LRScheduler<O> for StepLR<O> {
    fn step(&mut self) -> Result<(), MicroRustError> {
        self.last_epoch += 1;
        if self.last_epoch % self.step_size == 0 {
            let new_lr = self.optimizer.lr() * self.gamma;
            self.optimizer.set_lr(new_lr);
            log::debug!("StepLR: epoch {}: lr set to {:.4e}", self.last_epoch, new_lr);
        }
        Ok(())
    }

    fn get_last_lr(&self) -> f64 {
        self.optimizer.lr()
    }

    fn last_epoch(&self) -> usize {
        self.last_epoch
    }

    fn optimizer(&self) -> &O {
        &self.optimizer
    }

    fn optimizer_mut(&mut self) -> &mut O {
        &mut self.optimizer
    }
}

/// Scales the learning rate linearly from `start_factor * base_lr` to
/// `end_factor * base_lr` over `total_iters` steps, then holds it.
///
/// After `k` steps the rate is
/// `base_lr * (start + (end - start) * min(k, total_iters) / total_iters)`.
/// `LinearLR::new(opt, 1.0, 0.1, n)` gives `base_lr * (1 - 0.9 * k / n)`.
#[derive(Debug)]
pub struct LinearLR<O: Optimizer> {
    optimizer: O,
    base_lr: f64,
    start_factor: f64,
    end_factor: f64,
    total_iters: usize,
    last_epoch: usize,
}

impl<O: Optimizer> LinearLR<O> {
    /// Creates the scheduler and immediately sets the optimizer's rate to
    /// `start_factor * base_lr`, where `base_lr` is the optimizer's current
    /// rate.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if `total_iters` is 0 or a factor is negative or not
    /// finite.
    pub fn new(
        mut optimizer: O,
        start_factor: f64,
        end_factor: f64,
        total_iters: usize,
    ) -> Result<Self, MicroRustError> {
        if total_iters == 0 {
            return Err(MicroRustError::InvalidConfig(
                "LinearLR: total_iters cannot be zero.".to_string(),
            ));
        }
        for factor in [start_factor, end_factor] {
            if !(factor.is_finite() && factor >= 0.0) {
                return Err(MicroRustError::InvalidConfig(format!(
                    "LinearLR: invalid factor {}",
                    factor
                )));
            }
        }
        let base_lr = optimizer.lr();
        optimizer.set_lr(base_lr * start_factor);
        Ok(LinearLR {
            optimizer,
            base_lr,
            start_factor,
            end_factor,
            total_iters,
            last_epoch: 0,
        })
    }

    fn factor_at(&self, epoch: usize) -> f64 {
        let progress = epoch.min(self.total_iters) as f64 / self.total_iters as f64;
        self.start_factor + (self.end_factor - self.start_factor) * progress
    }
}

impl<O: Optimizer> LRScheduler<O> for LinearLR<O> {
    fn step(&mut self) -> Result<(), MicroRustError> {
        self.last_epoch += 1;
        let new_lr = self.base_lr * self.factor_at(self.last_epoch);
        self.optimizer.set_lr(new_lr);
        log::trace!("LinearLR: step {}: lr set to {:.4e}", self.last_epoch, new_lr);
        Ok(())
    }

    fn get_last_lr(&self) -> f64 {
        self.optimizer.lr()
    }

    fn last_epoch(&self) -> usize {
        self.last_epoch
    }

    fn optimizer(&self) -> &O {
        &self.optimizer
    }

    fn optimizer_mut(&mut self) -> &mut O {
        &mut self.optimizer
    }
}

#[cfg(test)]
#[path = "lr_scheduler_tests.rs"]
mod tests;
