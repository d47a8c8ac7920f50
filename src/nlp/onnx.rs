// ONNX sentence-embedding language model (all-MiniLM-L6-v2).
//
// Tokens and stop-word flags come from the same whitespace tokenizer the
// lexical model uses; only the document vector differs. Text is run through
// the BERT model and mean-pooled over the attention mask into a
// 384-dimensional vector, so "battery died" and "stopped charging" land
// near each other even though they share no words.

use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use ort::session::Session;
use ort::value::Tensor;
use tokenizers::Tokenizer;
use tracing::debug;

use super::document::{DocVector, Document};
use super::lexical::tokenize;
use super::traits::LanguageModel;
use crate::text::stopwords::StopWords;

/// Embedding dimension for all-MiniLM-L6-v2.
pub const EMBEDDING_DIM: usize = 384;

pub struct OnnxModel {
    // ort::Session::run takes &mut self; the pipeline only holds &self.
    session: Mutex<Session>,
    tokenizer: Tokenizer,
    stop_words: StopWords,
}

impl OnnxModel {
    /// Load the embedding model and tokenizer from the given directory.
    ///
    /// Expects `model.onnx` and `tokenizer.json` in the directory.
    /// Run `reviewmood download-model` first if they don't exist.
    pub fn load(model_dir: &Path, stop_words: StopWords) -> Result<Self> {
        let model_path = model_dir.join("model.onnx");
        let tokenizer_path = model_dir.join("tokenizer.json");

        if !model_path.exists() {
            anyhow::bail!(
                "Embedding model not found: {}\nRun `reviewmood download-model` to download it.",
                model_path.display()
            );
        }
        if !tokenizer_path.exists() {
            anyhow::bail!(
                "Embedding tokenizer not found: {}\nRun `reviewmood download-model` to download it.",
                tokenizer_path.display()
            );
        }

        let session = Session::builder()
            .context("Failed to create ONNX session builder")?
            .commit_from_file(&model_path)
            .with_context(|| {
                format!(
                    "Failed to load embedding model from {}",
                    model_path.display()
                )
            })?;

        let tokenizer = Tokenizer::from_file(&tokenizer_path)
            .map_err(|e| anyhow::anyhow!("Failed to load embedding tokenizer: {}", e))?;

        debug!(
            "Loaded sentence embedding model from {}",
            model_dir.display()
        );

        Ok(Self {
            session: Mutex::new(session),
            tokenizer,
            stop_words,
        })
    }

    /// Embed one text into a mean-pooled vector.
    pub fn embed(&self, text: &str) -> Result<Vec<f64>> {
        let encoding = self
            .tokenizer
            .encode(text, true)
            .map_err(|e| anyhow::anyhow!("Tokenization failed: {}", e))?;

        let ids = encoding.get_ids();
        let seq_len = ids.len();
        if seq_len == 0 {
            return Ok(vec![0.0; EMBEDDING_DIM]);
        }

        // Single-sentence input: token_type_ids are all zero.
        let input_ids: Vec<i64> = ids.iter().map(|&id| id as i64).collect();
        let attention_mask: Vec<i64> = encoding
            .get_attention_mask()
            .iter()
            .map(|&m| m as i64)
            .collect();
        let token_type_ids = vec![0i64; seq_len];

        let shape = [1_i64, seq_len as i64];

        let input_ids_tensor =
            Tensor::from_array((shape, input_ids)).context("Failed to create input_ids tensor")?;
        let attention_mask_tensor = Tensor::from_array((shape, attention_mask.clone()))
            .context("Failed to create attention_mask tensor")?;
        let token_type_ids_tensor = Tensor::from_array((shape, token_type_ids))
            .context("Failed to create token_type_ids tensor")?;

        // Output is last_hidden_state: [1, seq_len, 384]
        let hidden_states = {
            let mut session = self
                .session
                .lock()
                .map_err(|e| anyhow::anyhow!("Session lock poisoned: {}", e))?;

            let outputs = session
                .run(ort::inputs! {
                    "input_ids" => input_ids_tensor,
                    "attention_mask" => attention_mask_tensor,
                    "token_type_ids" => token_type_ids_tensor
                })
                .context("Embedding ONNX inference failed")?;

            let (_shape, data) = outputs[0]
                .try_extract_tensor::<f32>()
                .context("Failed to extract embedding output tensor")?;

            data.to_vec()
        };

        if hidden_states.len() < seq_len * EMBEDDING_DIM {
            anyhow::bail!(
                "Unexpected embedding output size {} for {} tokens",
                hidden_states.len(),
                seq_len
            );
        }

        Ok(mean_pool(&hidden_states, &attention_mask, EMBEDDING_DIM))
    }
}

impl LanguageModel for OnnxModel {
    fn name(&self) -> &str {
        "onnx"
    }

    fn parse(&self, text: &str) -> Result<Document> {
        let tokens = tokenize(text, &self.stop_words);
        let vector = self.embed(text)?;
        Ok(Document::new(text, tokens, DocVector::Dense(vector)))
    }
}

/// Average token embeddings weighted by the attention mask.
///
/// `hidden` is row-major `[seq_len, dim]`.
pub fn mean_pool(hidden: &[f32], mask: &[i64], dim: usize) -> Vec<f64> {
    let mut sum = vec![0.0_f64; dim];
    let mut mask_sum = 0.0_f64;

    for (j, &m) in mask.iter().enumerate() {
        let weight = m as f64;
        if weight > 0.0 {
            mask_sum += weight;
            let offset = j * dim;
            for (k, acc) in sum.iter_mut().enumerate() {
                *acc += hidden[offset + k] as f64 * weight;
            }
        }
    }

    if mask_sum > 0.0 {
        for val in &mut sum {
            *val /= mask_sum;
        }
    }

    sum
}
