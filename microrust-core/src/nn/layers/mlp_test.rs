use super::*;
use crate::utils::testing::TEST_SEED;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn leaves(xs: &[f64]) -> Vec<Value> {
    xs.iter().map(|&x| Value::new(x)).collect()
}

#[test]
fn test_mlp_structure() {
    let mut rng = StdRng::seed_from_u64(TEST_SEED);
    let mlp = Mlp::new(3, &[4, 4, 1], &mut rng);
    assert_eq!(mlp.layers().len(), 3);
    assert_eq!(mlp.in_features(), 3);
    assert_eq!(mlp.out_features(), 1);
    // (3+1)*4 + (4+1)*4 + (4+1)*1
    assert_eq!(mlp.parameters().len(), 41);
    assert_eq!(mlp.num_parameters(), 41);
}

#[test]
fn test_mlp_forward_and_backward() -> Result<(), MicroRustError> {
    let mut rng = StdRng::seed_from_u64(TEST_SEED);
    let mlp = Mlp::new(3, &[4, 4, 1], &mut rng);
    let out = mlp.forward(&leaves(&[2.0, 3.0, -1.0]))?;
    assert_eq!(out.len(), 1);
    assert!(out[0].data() > -1.0 && out[0].data() < 1.0);
    out[0].backward();
    // every parameter is on a path to the output
    assert!(mlp.parameters().iter().any(|p| p.grad() != 0.0));
    mlp.zero_grad();
    assert!(mlp.parameters().iter().all(|p| p.grad() == 0.0));
    Ok(())
}

#[test]
fn test_mlp_parameters_are_stable() {
    let mut rng = StdRng::seed_from_u64(TEST_SEED);
    let mlp = Mlp::new(2, &[3, 1], &mut rng);
    assert_eq!(mlp.parameters(), mlp.parameters());
    let (name, first) = &mlp.named_parameters()[0];
    assert_eq!(name, "layer0.neuron0.w0");
    assert!(first.ptr_eq(&mlp.parameters()[0]));
}

#[test]
fn test_mlp_same_seed_same_network() -> Result<(), MicroRustError> {
    let a = Mlp::new(2, &[3, 1], &mut StdRng::seed_from_u64(11));
    let b = Mlp::new(2, &[3, 1], &mut StdRng::seed_from_u64(11));
    let da: Vec<f64> = a.parameters().iter().map(Value::data).collect();
    let db: Vec<f64> = b.parameters().iter().map(Value::data).collect();
    assert_eq!(da, db);
    let x = leaves(&[0.3, -0.7]);
    assert_eq!(a.forward(&x)?[0].data(), b.forward(&x)?[0].data());
    Ok(())
}

#[test]
fn test_mlp_wrong_input_size() {
    let mut rng = StdRng::seed_from_u64(TEST_SEED);
    let mlp = Mlp::new(3, &[2], &mut rng);
    assert_eq!(
        mlp.forward(&leaves(&[1.0])).unwrap_err(),
        MicroRustError::InputSizeMismatch {
            expected: 3,
            actual: 1
        }
    );
}

#[test]
fn test_mlp_display() {
    let mut rng = StdRng::seed_from_u64(TEST_SEED);
    let mlp = Mlp::new(2, &[1], &mut rng);
    assert_eq!(mlp.to_string(), "MLP of [Layer of [TanhNeuron(2)]]");
}
