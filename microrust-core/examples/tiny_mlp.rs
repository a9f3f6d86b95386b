//! # Training a tiny MLP
//!
//! Fits a 3 -> 4 -> 4 -> 1 tanh network to four hand-written examples with a
//! summed squared-error loss and plain SGD.
//!
//! ## Steps shown
//! 1.  Seeded construction of an [`Mlp`].
//! 2.  Forward pass over every example and [`mse_loss`].
//! 3.  `zero_grad` / `backward` / `step` with [`SgdOptimizer`].
//!
//! ## Running
//! `RUST_LOG=info cargo run --example tiny_mlp`

use microrust_core::nn::{mse_loss, Mlp, Module, Reduction};
use microrust_core::optim::{Optimizer, SgdOptimizer, SgdOptions};
use microrust_core::{MicroRustError, Value};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), MicroRustError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let xs = [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];
    let ys = [1.0, -1.0, -1.0, 1.0];

    let mut rng = StdRng::seed_from_u64(42);
    let model = Mlp::new(3, &[4, 4, 1], &mut rng);
    log::info!("{} with {} parameters", model, model.num_parameters());

    let mut optimizer = SgdOptimizer::new(model.parameters(), SgdOptions::with_lr(0.05))?;

    let mut preds: Vec<Value> = Vec::new();
    for step in 0..50 {
        preds.clear();
        for x in &xs {
            let inputs: Vec<Value> = x.iter().map(|&v| Value::new(v)).collect();
            preds.push(model.forward(&inputs)?[0].clone());
        }
        let loss = mse_loss(&preds, &ys, Reduction::Sum)?;

        optimizer.zero_grad();
        loss.backward();
        optimizer.step()?;

        if step % 10 == 0 {
            log::info!("step {:>3}: loss {:.6}", step, loss.data());
        }
    }

    for (pred, target) in preds.iter().zip(ys.iter()) {
        println!("target {:>4}  prediction {:>8.4}", target, pred.data());
    }
    Ok(())
}
