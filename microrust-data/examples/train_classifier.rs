//! # Training a binary classifier
//!
//! Trains a 2 -> 16 -> 16 -> 1 tanh network with a max-margin (hinge) loss,
//! a small L2 penalty and a linearly decaying learning rate.
//!
//! The data comes from two comma-separated files (`index, x0, x1` rows and
//! `index, label` rows with labels in {-1, 1}) or, without arguments, from two
//! interleaved half-moons generated with a fixed seed.
//!
//! ## Running
//! `cargo run --example train_classifier -- [features.csv labels.csv] [--epochs N] [--batch-size B]`
//!
//! Set `RUST_LOG=debug` for per-step output.

use microrust_core::nn::{accuracy, hinge_loss, l2_regularization, Mlp, Module, Reduction};
use microrust_core::optim::{LRScheduler, LinearLR, Optimizer, SgdOptimizer, SgdOptions};
use microrust_core::{MicroRustError, Value};
use microrust_data::{load_samples, read_features, read_labels, DataLoader, Dataset, RandomSampler, Sample, VecDataset};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;
use std::path::PathBuf;

const SEED: u64 = 1337;
const ALPHA: f64 = 1e-4;

/// Trains a small tanh network as a binary classifier.
#[derive(Parser, Debug)]
#[command(name = "train_classifier")]
#[command(about, long_about = None)]
struct Args {
    /// Features file (`index, x0, x1` rows)
    #[arg(value_name = "FEATURES", requires = "labels")]
    features: Option<PathBuf>,

    /// Labels file (`index, label` rows, labels in {-1, 1})
    #[arg(value_name = "LABELS", requires = "features")]
    labels: Option<PathBuf>,

    /// Number of passes over the data
    #[arg(long, default_value_t = 100)]
    epochs: usize,

    /// Samples per batch (at least 1); the whole dataset when omitted
    #[arg(long, value_name = "B")]
    batch_size: Option<usize>,
}

/// Two interleaved half circles with a little uniform noise.
fn make_moons(n: usize, noise: f64, rng: &mut StdRng) -> VecDataset<Sample> {
    let mut samples = Vec::with_capacity(n);
    for i in 0..n {
        let t = rng.gen_range(0.0..PI);
        let (mut x, mut y, label) = if i % 2 == 0 {
            (t.cos(), t.sin(), -1.0)
        } else {
            (1.0 - t.cos(), 0.5 - t.sin(), 1.0)
        };
        x += rng.gen_range(-noise..noise);
        y += rng.gen_range(-noise..noise);
        samples.push(Sample::new(vec![x, y], label));
    }
    VecDataset::new(samples)
}

fn scores(model: &Mlp, batch: &[Sample]) -> Result<Vec<Value>, MicroRustError> {
    let mut out = Vec::with_capacity(batch.len());
    for sample in batch {
        out.push(model.forward(&sample.to_values())?[0].clone());
    }
    Ok(out)
}

fn main() -> Result<(), MicroRustError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let mut rng = StdRng::seed_from_u64(SEED);

    let dataset = match (&args.features, &args.labels) {
        (Some(features), Some(labels)) => {
            load_samples(read_features(features)?, read_labels(labels)?)?
        }
        _ => make_moons(100, 0.1, &mut rng),
    };
    log::info!("Loaded {} samples", dataset.len());

    let batch_size = args.batch_size.unwrap_or(dataset.len()).max(1);
    let sampler = RandomSampler::new(false, None, Some(SEED));
    let loader = DataLoader::new(dataset, batch_size, sampler, false)?;

    let model = Mlp::new(2, &[16, 16, 1], &mut rng);
    log::info!("{} ({} parameters)", model, model.num_parameters());

    let total_steps = args.epochs * loader.num_batches();
    let mut optimizer = SgdOptimizer::new(model.parameters(), SgdOptions::with_lr(1.0))?;
    let mut scheduler = LinearLR::new(&mut optimizer, 1.0, 0.1, total_steps.max(1))?;

    for epoch in 0..args.epochs {
        let mut epoch_loss = 0.0;
        let mut epoch_acc = 0.0;
        let mut batches = 0;
        for batch in loader.batches() {
            let batch = batch?;
            let labels: Vec<f64> = batch.iter().map(|s| s.label).collect();
            let batch_scores = scores(&model, &batch)?;

            let data_loss = hinge_loss(&batch_scores, &labels, Reduction::Mean)?;
            let loss = data_loss + l2_regularization(&model.parameters(), ALPHA);

            scheduler.optimizer_mut().zero_grad();
            loss.backward();
            scheduler.optimizer_mut().step()?;
            scheduler.step()?;

            epoch_loss += loss.data();
            epoch_acc += accuracy(&batch_scores, &labels)?;
            batches += 1;
            log::debug!(
                "epoch {} batch {}: loss {:.6}, lr {:.4}",
                epoch,
                batches,
                loss.data(),
                scheduler.get_last_lr()
            );
        }
        if batches > 0 {
            log::info!(
                "epoch {:>3}: loss {:.6}, accuracy {:.1}%",
                epoch,
                epoch_loss / batches as f64,
                100.0 * epoch_acc / batches as f64
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["train_classifier"]).expect("no arguments is valid");
        assert!(args.features.is_none() && args.labels.is_none());
        assert_eq!(args.epochs, 100);
        assert_eq!(args.batch_size, None);
    }

    #[test]
    fn test_args_files_and_flags() {
        let args = Args::try_parse_from([
            "train_classifier",
            "x.csv",
            "y.csv",
            "--epochs=5",
            "--batch-size",
            "8",
        ])
        .expect("valid arguments");
        assert_eq!(args.features, Some(PathBuf::from("x.csv")));
        assert_eq!(args.labels, Some(PathBuf::from("y.csv")));
        assert_eq!(args.epochs, 5);
        assert_eq!(args.batch_size, Some(8));
    }

    #[test]
    fn test_args_rejects_bad_input() {
        assert!(Args::try_parse_from(["train_classifier", "--lr", "0.5"]).is_err());
        assert!(Args::try_parse_from(["train_classifier", "x.csv"]).is_err());
        assert!(Args::try_parse_from(["train_classifier", "--epochs", "many"]).is_err());
    }
}
