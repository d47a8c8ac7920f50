// reviewmood: sentiment and similarity analysis for product reviews
//
// This is the library root. Data flows dataset -> text -> nlp -> analysis,
// with pipeline orchestrating and output printing the results.

pub mod analysis;
pub mod config;
pub mod dataset;
pub mod error;
pub mod nlp;
pub mod output;
pub mod pipeline;
pub mod text;

pub use error::{DatasetError, ReviewError};
pub use pipeline::{ReviewAnalyzer, ReviewReport};
