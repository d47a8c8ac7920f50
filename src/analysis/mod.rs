// Threshold classifiers on top of the language model's raw scores.

pub mod sentiment;
pub mod similarity;
pub mod summary;
