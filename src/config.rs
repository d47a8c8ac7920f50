use std::env;
use std::path::PathBuf;

use anyhow::Result;

/// Default review CSV, relative to the working directory.
pub const DEFAULT_CSV_PATH: &str = "amazon_product_reviews.csv";

/// Default review text column.
pub const DEFAULT_TEXT_FIELD: &str = "reviews.text";

/// Which language model backs document similarity.
#[derive(Debug, Clone, PartialEq)]
pub enum SimilarityBackend {
    /// Term-count cosine (default). No model files needed.
    Lexical,
    /// all-MiniLM-L6-v2 sentence embeddings via ONNX. Needs `download-model`.
    Onnx,
}

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. CLI flags
/// override the dataset path and text field.
#[derive(Debug, Clone)]
pub struct Config {
    pub csv_path: PathBuf,
    pub text_field: String,
    pub similarity_backend: SimilarityBackend,
    /// Directory containing the ONNX model files
    pub model_dir: PathBuf,
    /// Optional JSON file extending the built-in sentiment lexicon
    pub lexicon_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables. Everything has a
    /// default except the custom lexicon.
    pub fn load() -> Result<Self> {
        let similarity_backend = match env::var("REVIEWMOOD_SIMILARITY").as_deref() {
            Ok("onnx") => SimilarityBackend::Onnx,
            Ok("lexical") | Err(_) => SimilarityBackend::Lexical,
            Ok(other) => anyhow::bail!(
                "Unknown REVIEWMOOD_SIMILARITY value '{other}' (expected 'lexical' or 'onnx')"
            ),
        };

        let model_dir = env::var("REVIEWMOOD_MODEL_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| crate::nlp::download::default_model_dir());

        Ok(Self {
            csv_path: env::var("REVIEWMOOD_CSV")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_CSV_PATH)),
            text_field: env::var("REVIEWMOOD_TEXT_FIELD")
                .unwrap_or_else(|_| DEFAULT_TEXT_FIELD.to_string()),
            similarity_backend,
            model_dir,
            lexicon_path: env::var("REVIEWMOOD_LEXICON")
                .ok()
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
        })
    }

    /// Check that the review CSV exists.
    /// Call this before any command that reads reviews.
    pub fn require_dataset(&self) -> Result<()> {
        if !self.csv_path.exists() {
            anyhow::bail!(
                "Review CSV not found: {}\n\
                 Pass --csv <path> or set REVIEWMOOD_CSV in your .env file.",
                self.csv_path.display()
            );
        }
        Ok(())
    }

    /// Validate that the chosen similarity backend has what it needs.
    pub fn require_model(&self) -> Result<()> {
        match self.similarity_backend {
            SimilarityBackend::Lexical => Ok(()),
            SimilarityBackend::Onnx => {
                if !crate::nlp::download::embedding_files_present(&self.model_dir) {
                    anyhow::bail!(
                        "ONNX embedding model not found in {}\n\
                         Run `reviewmood download-model` to download it.\n\
                         Or set REVIEWMOOD_SIMILARITY=lexical to use term-based similarity instead.",
                        self.model_dir.display()
                    );
                }
                Ok(())
            }
        }
    }
}
