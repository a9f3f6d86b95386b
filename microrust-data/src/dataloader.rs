// dataloader.rs
//! # DataLoader
//!
//! Groups the samples of a [`Dataset`] into batches, in the order given by a
//! [`Sampler`].
//!
//! ## Basic usage
//!
//! ```rust
//! use microrust_data::dataloader::DataLoader;
//! use microrust_data::datasets::VecDataset;
//! use microrust_data::samplers::SequentialSampler;
//!
//! let dataset = VecDataset::new(vec![1, 2, 3, 4, 5, 6]);
//! let loader = DataLoader::new(dataset, 2, SequentialSampler::new(), false).unwrap();
//! for epoch in 0..2 {
//!     for batch in loader.batches() {
//!         let batch = batch.expect("no error expected");
//!         println!("epoch {}: {:?}", epoch, batch);
//!     }
//! }
//! ```

use crate::datasets::Dataset;
use crate::samplers::Sampler;
use microrust_core::MicroRustError;

/// Batching over a dataset.
///
/// # Type parameters
/// - `D`: The dataset type, implementing [`Dataset`].
/// - `S`: The sampler type, implementing [`Sampler`].
///
/// The loader itself holds no iteration state: every call to
/// [`DataLoader::batches`] asks the sampler for a fresh pass, so one loader
/// serves any number of epochs.
#[derive(Debug)]
pub struct DataLoader<D: Dataset, S: Sampler> {
    dataset: D,
    batch_size: usize,
    sampler: S,
    drop_last: bool,
}

impl<D: Dataset, S: Sampler> DataLoader<D, S> {
    /// Creates a new DataLoader.
    ///
    /// # Arguments
    /// - `dataset`: The dataset to draw from.
    /// - `batch_size`: The number of samples per batch.
    /// - `sampler`: Produces the index order of each pass.
    /// - `drop_last`: If true, a final incomplete batch is skipped.
    ///
    /// # Errors
    /// `InvalidConfig` if `batch_size` is 0.
    pub fn new(
        dataset: D,
        batch_size: usize,
        sampler: S,
        drop_last: bool,
    ) -> Result<Self, MicroRustError> {
        if batch_size == 0 {
            return Err(MicroRustError::InvalidConfig(
                "DataLoader: batch_size cannot be zero.".to_string(),
            ));
        }
        Ok(Self {
            dataset,
            batch_size,
            sampler,
            drop_last,
        })
    }

    pub fn dataset(&self) -> &D {
        &self.dataset
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Number of batches one pass yields.
    pub fn num_batches(&self) -> usize {
        let n = self.sampler.len(self.dataset.len());
        if self.drop_last {
            n / self.batch_size
        } else {
            (n + self.batch_size - 1) / self.batch_size
        }
    }

    /// Starts one pass over the dataset.
    pub fn batches(&self) -> Batches<'_, D> {
        Batches {
            dataset: &self.dataset,
            batch_size: self.batch_size,
            drop_last: self.drop_last,
            indices_iter: self.sampler.iter(self.dataset.len()),
        }
    }
}

/// Iterator over the batches of one pass; see [`DataLoader::batches`].
pub struct Batches<'a, D: Dataset> {
    dataset: &'a D,
    batch_size: usize,
    drop_last: bool,
    indices_iter: Box<dyn Iterator<Item = usize>>,
}

impl<'a, D: Dataset> Iterator for Batches<'a, D> {
    type Item = Result<Vec<<D as Dataset>::Item>, MicroRustError>;

    /// Returns the next batch.
    ///
    /// # Returns
    /// - `Some(Ok(batch))`: a batch of samples.
    /// - `Some(Err(e))`: fetching an item failed.
    /// - `None`: the pass is over.
    fn next(&mut self) -> Option<Self::Item> {
        let mut batch = Vec::with_capacity(self.batch_size);
        for idx in self.indices_iter.by_ref().take(self.batch_size) {
            match self.dataset.get(idx) {
                Ok(item) => batch.push(item),
                Err(e) => return Some(Err(e)),
            }
        }
        if batch.is_empty() || (self.drop_last && batch.len() < self.batch_size) {
            return None;
        }
        Some(Ok(batch))
    }
}
