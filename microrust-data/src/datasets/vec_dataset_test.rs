use super::*;

#[test]
fn test_vec_dataset_new() {
    let data = vec![1, 2, 3, 4, 5];
    let dataset = VecDataset::new(data.clone());
    assert_eq!(dataset.len(), 5);
    assert!(!dataset.is_empty());
    assert_eq!(dataset.items(), data.as_slice());
}

#[test]
fn test_vec_dataset_get_valid_index() {
    let dataset = VecDataset::new(vec![10, 20, 30]);
    assert_eq!(dataset.get(0), Ok(10));
    assert_eq!(dataset.get(1), Ok(20));
    assert_eq!(dataset.get(2), Ok(30));
}

#[test]
fn test_vec_dataset_get_invalid_index() {
    let dataset = VecDataset::new(vec![10, 20, 30]);
    assert_eq!(
        dataset.get(3),
        Err(MicroRustError::IndexOutOfBounds { index: 3, len: 3 })
    );
}

#[test]
fn test_vec_dataset_empty() {
    let dataset: VecDataset<f64> = VecDataset::new(Vec::new());
    assert!(dataset.is_empty());
    assert!(dataset.get(0).is_err());
}

#[test]
fn test_vec_dataset_into_inner() {
    let dataset = VecDataset::new(vec![3, 1, 2]);
    assert_eq!(dataset.get(1), Ok(1));
    assert_eq!(dataset.into_inner(), vec![3, 1, 2]);
}
