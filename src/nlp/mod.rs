// Language model layer — documents, tokenization, vectors, and sentiment.
//
// The LanguageModel and PolarityScorer traits are the seams. The lexical
// model and lexicon scorer work out of the box; the ONNX embedder needs
// `reviewmood download-model` first.

pub mod document;
pub mod download;
pub mod lexical;
pub mod lexicon;
pub mod onnx;
pub mod traits;
