//! # microrust-data
//!
//! Loading and batching of small numeric datasets for microrust models:
//! delimited-text readers, an in-memory dataset, index samplers and a
//! data loader that groups samples into batches.

pub mod dataloader;
pub mod datasets;
pub mod reader;
pub mod samplers;

// Re-export main components
pub use dataloader::DataLoader;
pub use datasets::{Dataset, Sample, VecDataset};
pub use reader::{load_samples, parse_features, parse_labels, read_features, read_labels};
pub use samplers::{RandomSampler, Sampler, SequentialSampler};

#[cfg(test)]
mod dataloader_test;
