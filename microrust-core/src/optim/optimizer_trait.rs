use crate::error::MicroRustError;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers are responsible for updating parameter values based on their
/// gradients. They hold clones of the parameter handles, so an update is
/// visible to every model that shares those nodes.
pub trait Optimizer {
    /// Performs a single optimization step.
    ///
    /// Applies the update rule to every managed parameter using the gradient
    /// it currently holds. Gradients are left untouched.
    fn step(&mut self) -> Result<(), MicroRustError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// The reverse pass accumulates, so this is typically called before the
    /// backward pass of every training iteration.
    fn zero_grad(&mut self);

    /// Returns the current learning rate.
    fn lr(&self) -> f64;

    /// Sets the learning rate used by subsequent steps.
    fn set_lr(&mut self, lr: f64);
}

impl<O: Optimizer + ?Sized> Optimizer for &mut O {
    fn step(&mut self) -> Result<(), MicroRustError> {
        (**self).step()
    }

    fn zero_grad(&mut self) {
        (**self).zero_grad()
    }

    fn lr(&self) -> f64 {
        (**self).lr()
    }

    fn set_lr(&mut self, lr: f64) {
        (**self).set_lr(lr)
    }
}
