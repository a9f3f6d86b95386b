use microrust_core::nn::{mse_loss, Mlp, Module, Reduction};
use microrust_core::optim::{Optimizer, SgdOptimizer, SgdOptions};
use microrust_core::{MicroRustError, Value};
use rand::rngs::StdRng;
use rand::SeedableRng;

mod common;
use common::{init_logger, leaves, tiny_dataset};

fn predictions(model: &Mlp, xs: &[Vec<f64>]) -> Result<Vec<Value>, MicroRustError> {
    let mut preds = Vec::with_capacity(xs.len());
    for x in xs {
        preds.push(model.forward(&leaves(x))?[0].clone());
    }
    Ok(preds)
}

#[test]
fn test_loss_decreases_with_manual_updates() -> Result<(), MicroRustError> {
    init_logger();
    let mut rng = StdRng::seed_from_u64(1337);
    let model = Mlp::new(3, &[4, 4, 1], &mut rng);
    let (xs, ys) = tiny_dataset();

    let mut losses = Vec::new();
    for _ in 0..20 {
        let loss = mse_loss(&predictions(&model, &xs)?, &ys, Reduction::Sum)?;
        model.zero_grad();
        loss.backward();
        for p in model.parameters() {
            p.set_data(p.data() - 0.05 * p.grad());
        }
        losses.push(loss.data());
    }

    for pair in losses[..10].windows(2) {
        assert!(pair[1] < pair[0], "loss went up: {:?}", losses);
    }
    assert!(losses[19] < losses[0]);
    Ok(())
}

#[test]
fn test_loss_decreases_with_sgd() -> Result<(), MicroRustError> {
    let mut rng = StdRng::seed_from_u64(7);
    let model = Mlp::new(3, &[4, 4, 1], &mut rng);
    let (xs, ys) = tiny_dataset();
    let mut optimizer = SgdOptimizer::new(model.parameters(), SgdOptions::with_lr(0.05))?;

    let mut losses = Vec::new();
    for _ in 0..10 {
        optimizer.zero_grad();
        let loss = mse_loss(&predictions(&model, &xs)?, &ys, Reduction::Sum)?;
        loss.backward();
        optimizer.step()?;
        losses.push(loss.data());
    }
    for pair in losses.windows(2) {
        assert!(pair[1] < pair[0], "loss went up: {:?}", losses);
    }
    Ok(())
}

#[test]
fn test_stale_gradients_are_contaminated_without_zeroing() -> Result<(), MicroRustError> {
    let mut rng = StdRng::seed_from_u64(3);
    let model = Mlp::new(3, &[2, 1], &mut rng);
    let x = leaves(&[1.0, -1.0, 0.5]);

    let out = model.forward(&x)?;
    out[0].backward();
    let once: Vec<f64> = model.parameters().iter().map(Value::grad).collect();

    let out = model.forward(&x)?;
    out[0].backward();
    let twice: Vec<f64> = model.parameters().iter().map(Value::grad).collect();
    for (a, b) in once.iter().zip(twice.iter()) {
        approx::assert_relative_eq!(*b, 2.0 * a, epsilon = 1e-12);
    }

    model.zero_grad();
    let out = model.forward(&x)?;
    out[0].backward();
    let fresh: Vec<f64> = model.parameters().iter().map(Value::grad).collect();
    assert_eq!(once, fresh);
    Ok(())
}
