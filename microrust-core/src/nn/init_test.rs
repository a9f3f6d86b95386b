use super::*;
use crate::utils::testing::TEST_SEED;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_uniform_within_bounds() {
    let mut rng = StdRng::seed_from_u64(TEST_SEED);
    for _ in 0..1000 {
        let x = uniform(&mut rng, -0.5, 0.25).unwrap();
        assert!((-0.5..=0.25).contains(&x));
    }
}

#[test]
fn test_uniform_is_reproducible() {
    let mut a = StdRng::seed_from_u64(7);
    let mut b = StdRng::seed_from_u64(7);
    let xs = uniform_values(&mut a, 8, -1.0, 1.0).unwrap();
    let ys = uniform_values(&mut b, 8, -1.0, 1.0).unwrap();
    let xs: Vec<f64> = xs.iter().map(Value::data).collect();
    let ys: Vec<f64> = ys.iter().map(Value::data).collect();
    assert_eq!(xs, ys);
}

#[test]
fn test_uniform_value_is_leaf() {
    let mut rng = StdRng::seed_from_u64(TEST_SEED);
    let v = uniform_value(&mut rng, 2.0, 2.0).unwrap();
    assert!(v.is_leaf());
    assert_eq!(v.data(), 2.0);
    assert_eq!(v.grad(), 0.0);
}

#[test]
fn test_uniform_rejects_bad_bounds() {
    let mut rng = StdRng::seed_from_u64(TEST_SEED);
    assert!(matches!(
        uniform(&mut rng, 1.0, -1.0),
        Err(MicroRustError::InvalidConfig(_))
    ));
    assert!(matches!(
        uniform_values(&mut rng, 3, f64::NEG_INFINITY, 0.0),
        Err(MicroRustError::InvalidConfig(_))
    ));
}

#[test]
fn test_default_parameter_in_unit_range() {
    let mut rng = StdRng::seed_from_u64(TEST_SEED);
    for i in 0..100 {
        let p = default_parameter(&mut rng, format!("w{}", i));
        assert!((-1.0..=1.0).contains(&p.data()));
        assert_eq!(p.label(), format!("w{}", i));
    }
}
