// Copyright 2025 Doc Analysis Team
//
// Licensed under the Apache License, Version 2.0 (the "License");

//! A deterministic, dependency-free `Embedder` reference implementation.
//!
//! Production deployments inject a real embedding model behind the
//! `Embedder` trait; this implementation exists so the rest of the
//! document-analysis core can be developed and tested without one. It
//! hashes each text into a fixed-width vector, so identical input always
//! produces identical output and unrelated inputs land far apart, but it
//! carries none of the semantic structure a trained model would.

use async_trait::async_trait;
use doc_analysis_core::{CoreResult, Embedder};
use sha2::{Digest, Sha256};

/// Fixed dimensionality produced by `HashEmbedder`.
const DEFAULT_DIMENSIONS: usize = 32;

/// Hashes text into a fixed-width, L2-normalized vector.
#[derive(Debug, Clone, Copy)]
pub struct HashEmbedder {
    dimensions: usize,
}

impl HashEmbedder {
    /// Construct an embedder producing vectors of `dimensions` length.
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    fn embed_one(&self, text: &str) -> Vec<f32> {
        let mut out = vec![0.0f32; self.dimensions];
        let mut counter: u32 = 0;
        let mut filled = 0;
        while filled < self.dimensions {
            let mut hasher = Sha256::new();
            hasher.update(text.as_bytes());
            hasher.update(counter.to_le_bytes());
            let digest = hasher.finalize();
            for byte in digest.iter() {
                if filled >= self.dimensions {
                    break;
                }
                out[filled] = (*byte as f32 / 255.0) * 2.0 - 1.0;
                filled += 1;
            }
            counter += 1;
        }

        let norm: f32 = out.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in out.iter_mut() {
                *v /= norm;
            }
        }
        out
    }
}

impl Default for HashEmbedder {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSIONS)
    }
}

#[async_trait]
impl Embedder for HashEmbedder {
    async fn embed(&self, text: &str) -> CoreResult<Vec<f32>> {
        Ok(self.embed_one(text))
    }

    async fn embed_batch(&self, texts: &[String]) -> CoreResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.embed_one(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_embed_is_deterministic() {
        let embedder = HashEmbedder::default();
        let a = embedder.embed("hello world").await.unwrap();
        let b = embedder.embed("hello world").await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_embed_respects_dimensions() {
        let embedder = HashEmbedder::new(16);
        let v = embedder.embed("text").await.unwrap();
        assert_eq!(v.len(), 16);
        assert_eq!(embedder.dimensions(), 16);
    }

    #[tokio::test]
    async fn test_embed_batch_preserves_order() {
        let embedder = HashEmbedder::default();
        let texts = vec!["one".to_string(), "two".to_string(), "three".to_string()];
        let batch = embedder.embed_batch(&texts).await.unwrap();
        for (i, text) in texts.iter().enumerate() {
            assert_eq!(batch[i], embedder.embed(text).await.unwrap());
        }
    }

    #[tokio::test]
    async fn test_different_texts_differ() {
        let embedder = HashEmbedder::default();
        let a = embedder.embed("alpha").await.unwrap();
        let b = embedder.embed("beta").await.unwrap();
        assert_ne!(a, b);
    }
}
