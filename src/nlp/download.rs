// Embedding model download helper.
//
// Fetches all-MiniLM-L6-v2 (ONNX export + tokenizer) from HuggingFace into a
// platform-appropriate directory (~/.local/share/reviewmood/models/ on
// Linux) so it persists across runs. Only the `onnx` similarity backend
// needs it.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

/// HuggingFace repo for the sentence embedding model.
const EMBEDDING_HF_URL: &str =
    "https://huggingface.co/sentence-transformers/all-MiniLM-L6-v2/resolve/main";

/// Remote paths within the HuggingFace repo.
const EMBEDDING_MODEL_FILE: &str = "onnx/model.onnx";
const EMBEDDING_TOKENIZER_FILE: &str = "tokenizer.json";

/// Returns the default directory for storing model files.
pub fn default_model_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("reviewmood")
        .join("models")
}

/// Subdirectory within model_dir for the sentence embedding model.
pub fn embedding_model_dir(base: &Path) -> PathBuf {
    base.join("all-MiniLM-L6-v2")
}

/// Check whether both embedding model files exist.
pub fn embedding_files_present(base: &Path) -> bool {
    let embed_dir = embedding_model_dir(base);
    embed_dir.join("model.onnx").exists() && embed_dir.join("tokenizer.json").exists()
}

/// Download the embedding model into `base`. Skips files that already exist.
pub async fn download_model(base: &Path) -> Result<()> {
    let embed_dir = embedding_model_dir(base);
    std::fs::create_dir_all(&embed_dir).with_context(|| {
        format!(
            "Failed to create embedding model directory: {}",
            embed_dir.display()
        )
    })?;

    println!("\nSentence embedding model (all-MiniLM-L6-v2):");

    let tokenizer_path = embed_dir.join("tokenizer.json");
    if tokenizer_path.exists() {
        info!("Embedding tokenizer already exists, skipping");
        println!("  tokenizer.json (already exists)");
    } else {
        println!("  Downloading tokenizer.json...");
        download_file(
            &format!("{}/{}", EMBEDDING_HF_URL, EMBEDDING_TOKENIZER_FILE),
            &tokenizer_path,
            false,
        )
        .await?;
    }

    let model_path = embed_dir.join("model.onnx");
    if model_path.exists() {
        info!("Embedding model already exists, skipping");
        println!("  model.onnx (already exists)");
    } else {
        println!("  Downloading model.onnx (~90 MB)...");
        download_file(
            &format!("{}/{}", EMBEDDING_HF_URL, EMBEDDING_MODEL_FILE),
            &model_path,
            true,
        )
        .await?;
    }

    Ok(())
}

/// Download a single file, optionally with a progress bar.
async fn download_file(url: &str, dest: &Path, show_progress: bool) -> Result<()> {
    let client = reqwest::Client::new();
    let mut response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Failed to download {}", url))?;

    if !response.status().is_success() {
        anyhow::bail!("Download failed with status {}: {}", response.status(), url);
    }

    let pb = if show_progress {
        let pb = match response.content_length() {
            Some(size) => {
                let pb = ProgressBar::new(size);
                pb.set_style(
                    ProgressStyle::default_bar()
                        .template("    [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
                        .context("Invalid progress bar template")?
                        .progress_chars("=> "),
                );
                pb
            }
            None => {
                let pb = ProgressBar::new_spinner();
                pb.set_style(
                    ProgressStyle::default_spinner()
                        .template("    {spinner} {bytes}")
                        .context("Invalid progress spinner template")?,
                );
                pb
            }
        };
        Some(pb)
    } else {
        None
    };

    let mut bytes: Vec<u8> = Vec::new();
    while let Some(chunk) = response
        .chunk()
        .await
        .context("Failed to read response body")?
    {
        bytes.extend_from_slice(&chunk);
        if let Some(ref pb) = pb {
            pb.set_position(bytes.len() as u64);
        }
    }

    std::fs::write(dest, &bytes).with_context(|| format!("Failed to write {}", dest.display()))?;

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    info!("Downloaded {} to {}", url, dest.display());
    Ok(())
}
