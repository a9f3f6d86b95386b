use approx::assert_relative_eq;
use microrust_core::nn::{hinge_loss, Mlp, Module, Reduction};
use microrust_core::optim::{Optimizer, SgdOptimizer, SgdOptions};
use microrust_core::{MicroRustError, Value};
use microrust_data::{load_samples, parse_features, parse_labels, DataLoader, Dataset, SequentialSampler};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Cursor;

const FEATURES: &str = "\
0, -1.0, -1.2
1, -0.8, -1.0
2, -1.1, -0.7
3, 1.0, 0.9
4, 0.7, 1.2
5, 1.2, 1.0
";

const LABELS: &str = "\
0, -1
1, -1
2, -1
3, 1
4, 1
5, 1
";

#[test]
fn test_train_on_parsed_csv() -> Result<(), MicroRustError> {
    let _ = env_logger::builder().is_test(true).try_init();

    let dataset = load_samples(
        parse_features(Cursor::new(FEATURES))?,
        parse_labels(Cursor::new(LABELS))?,
    )?;
    assert_eq!(dataset.len(), 6);
    assert_relative_eq!(dataset.get(4)?.features[1], 1.2);

    let loader = DataLoader::new(dataset, 6, SequentialSampler::new(), false)?;
    let model = Mlp::new(2, &[4, 1], &mut StdRng::seed_from_u64(5));
    let mut optimizer = SgdOptimizer::new(model.parameters(), SgdOptions::with_lr(0.1))?;

    let mut losses = Vec::new();
    for _ in 0..30 {
        for batch in loader.batches() {
            let batch = batch?;
            let labels: Vec<f64> = batch.iter().map(|s| s.label).collect();
            let mut scores: Vec<Value> = Vec::new();
            for sample in &batch {
                scores.push(model.forward(&sample.to_values())?[0].clone());
            }
            let loss = hinge_loss(&scores, &labels, Reduction::Mean)?;
            optimizer.zero_grad();
            loss.backward();
            optimizer.step()?;
            losses.push(loss.data());
        }
    }
    assert_eq!(losses.len(), 30);
    assert!(losses[29] < losses[0], "loss did not improve: {:?}", losses);
    Ok(())
}
