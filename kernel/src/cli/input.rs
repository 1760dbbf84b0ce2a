use anyhow::{Context, Result};
use std::path::Path;
use tokio::io::AsyncReadExt;

/// Reads pasted text from `source`, or from stdin when it is absent or `-`.
pub async fn read_input(source: Option<&Path>) -> Result<String> {
    match source {
        Some(path) if path != Path::new("-") => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read input file {}", path.display())),
        _ => {
            let mut text = String::new();
            tokio::io::stdin()
                .read_to_string(&mut text)
                .await
                .context("Failed to read input from stdin")?;
            Ok(text)
        }
    }
}
