#[cfg(test)]
mod tests {
    use crate::dataloader::DataLoader;
    use crate::datasets::{Dataset, VecDataset};
    use crate::samplers::{RandomSampler, SequentialSampler};
    use microrust_core::MicroRustError;

    fn collect_batches<D: Dataset, S: crate::samplers::Sampler>(
        loader: &DataLoader<D, S>,
    ) -> Vec<Vec<D::Item>> {
        loader
            .batches()
            .map(|batch| batch.expect("Batch should not error"))
            .collect()
    }

    #[test]
    fn test_dataloader_sequential() {
        let dataset = VecDataset::new(vec![1, 2, 3, 4, 5, 6]);
        let loader = DataLoader::new(dataset, 2, SequentialSampler::new(), false).unwrap();
        let batches = collect_batches(&loader);
        assert_eq!(batches, vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
        assert_eq!(loader.num_batches(), 3);
    }

    #[test]
    fn test_dataloader_drop_last() {
        let dataset = VecDataset::new(vec![1, 2, 3, 4, 5]);
        let loader = DataLoader::new(dataset, 2, SequentialSampler::new(), true).unwrap();
        let batches = collect_batches(&loader);
        // the trailing batch of size 1 is skipped
        assert_eq!(batches, vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(loader.num_batches(), 2);
    }

    #[test]
    fn test_dataloader_keeps_partial_batch() {
        let dataset = VecDataset::new(vec![1, 2, 3, 4, 5]);
        let loader = DataLoader::new(dataset, 2, SequentialSampler::new(), false).unwrap();
        let batches = collect_batches(&loader);
        assert_eq!(batches.last(), Some(&vec![5]));
        assert_eq!(loader.num_batches(), 3);
    }

    #[test]
    fn test_dataloader_is_reusable() {
        let dataset = VecDataset::new(vec![1, 2, 3]);
        let loader = DataLoader::new(dataset, 3, SequentialSampler::new(), false).unwrap();
        assert_eq!(collect_batches(&loader), collect_batches(&loader));
    }

    #[test]
    fn test_dataloader_random_covers_dataset() {
        let dataset = VecDataset::new((0..10).collect::<Vec<i32>>());
        let sampler = RandomSampler::new(false, None, Some(3));
        let loader = DataLoader::new(dataset, 4, sampler, false).unwrap();
        let mut seen: Vec<i32> = collect_batches(&loader).into_iter().flatten().collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..10).collect::<Vec<i32>>());
    }

    #[test]
    fn test_dataloader_zero_batch_size() {
        let dataset = VecDataset::new(vec![1]);
        assert!(matches!(
            DataLoader::new(dataset, 0, SequentialSampler::new(), false),
            Err(MicroRustError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_dataloader_empty_dataset() {
        let dataset: VecDataset<i32> = VecDataset::new(Vec::new());
        let loader = DataLoader::new(dataset, 2, SequentialSampler::new(), false).unwrap();
        assert_eq!(loader.batches().count(), 0);
    }

    #[test]
    fn test_dataloader_num_batches_matches_oversampling_sampler() {
        let dataset = VecDataset::new(vec![1, 2, 3, 4]);
        let sampler = RandomSampler::new(false, Some(10), Some(1));
        let loader = DataLoader::new(dataset, 2, sampler, false).unwrap();
        assert_eq!(loader.batches().count(), 0);
        assert_eq!(loader.num_batches(), 0);
    }

    #[test]
    fn test_dataloader_num_batches_matches_random_sampler_on_empty_dataset() {
        let dataset: VecDataset<i32> = VecDataset::new(Vec::new());
        let sampler = RandomSampler::new(true, Some(6), Some(1));
        let loader = DataLoader::new(dataset, 2, sampler, false).unwrap();
        assert_eq!(loader.batches().count(), 0);
        assert_eq!(loader.num_batches(), 0);
    }
}
