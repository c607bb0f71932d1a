// Copyright 2025 Doc Analysis Team
//
// Licensed under the Apache License, Version 2.0 (the "License");

//! An in-memory, content-addressed `VectorStore` reference implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use doc_analysis_core::{ChunkRecord, CoreResult, ScoredRecord, VectorStore};
use tokio::sync::RwLock;

/// An in-memory `VectorStore` keyed by chunk hash. Suitable for tests, local
/// runs, and any deployment that does not need the index to outlive the
/// process.
#[derive(Debug, Default)]
pub struct MemoryVectorStore {
    records: Arc<RwLock<HashMap<String, ChunkRecord>>>,
}

impl MemoryVectorStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
        if a.len() != b.len() || a.is_empty() {
            return 0.0;
        }
        let mut dot = 0.0f32;
        let mut norm_a = 0.0f32;
        let mut norm_b = 0.0f32;
        for i in 0..a.len() {
            dot += a[i] * b[i];
            norm_a += a[i] * a[i];
            norm_b += b[i] * b[i];
        }
        let denom = norm_a.sqrt() * norm_b.sqrt();
        if denom > 0.0 {
            dot / denom
        } else {
            0.0
        }
    }
}

#[async_trait]
impl VectorStore for MemoryVectorStore {
    async fn insert(&self, records: Vec<ChunkRecord>) -> CoreResult<()> {
        let mut store = self.records.write().await;
        for record in records {
            store.insert(record.chunk_hash.clone(), record);
        }
        Ok(())
    }

    async fn search(&self, vector: &[f32], k: usize) -> CoreResult<Vec<ScoredRecord>> {
        let store = self.records.read().await;
        let mut scored: Vec<ScoredRecord> = store
            .values()
            .map(|record| {
                let similarity = Self::cosine_similarity(vector, &record.vector);
                ScoredRecord {
                    record: record.clone(),
                    distance: 1.0 - similarity,
                }
            })
            .collect();

        scored.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored.truncate(k);
        Ok(scored)
    }

    async fn reset(&self) -> CoreResult<()> {
        self.records.write().await.clear();
        Ok(())
    }

    async fn count(&self) -> CoreResult<usize> {
        Ok(self.records.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doc_analysis_core::Chunk;

    fn record(hash: &str, vector: Vec<f32>) -> ChunkRecord {
        let chunk = Chunk::new(0, "text".to_string(), 0, 4);
        let mut record = ChunkRecord::from_chunk(&chunk, vector);
        record.chunk_hash = hash.to_string();
        record
    }

    #[tokio::test]
    async fn test_insert_and_count() {
        let store = MemoryVectorStore::new();
        store
            .insert(vec![record("a", vec![1.0, 0.0]), record("b", vec![0.0, 1.0])])
            .await
            .unwrap();
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_search_orders_by_ascending_distance() {
        let store = MemoryVectorStore::new();
        store
            .insert(vec![
                record("close", vec![1.0, 0.0]),
                record("far", vec![0.0, 1.0]),
            ])
            .await
            .unwrap();

        let results = store.search(&[1.0, 0.0], 2).await.unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].record.chunk_hash, "close");
        assert!(results[0].distance < results[1].distance);
    }

    #[tokio::test]
    async fn test_reset_clears_store() {
        let store = MemoryVectorStore::new();
        store.insert(vec![record("a", vec![1.0])]).await.unwrap();
        store.reset().await.unwrap();
        assert_eq!(store.count().await.unwrap(), 0);
    }
}
