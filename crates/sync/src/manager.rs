// Copyright 2025 Doc Analysis Team
//
// Licensed under the Apache License, Version 2.0 (the "License");

//! `DocSyncManager`: a two-tier content-addressed synchronizer between
//! document state and a vector index.

use std::collections::HashSet;
use std::sync::Arc;

use doc_analysis_chunking::{chunk_with_hierarchy, hash_document};
use doc_analysis_core::{ChunkOptions, ChunkRecord, Embedder, HierarchyMap, HierarchyOptions, ScoredRecord, VectorStore};
use doc_analysis_hierarchy::extract_hierarchy;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::error::{Result, SyncError};

/// Options accompanying `sync_if_needed`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyncOptions {
    /// Chunking options used for the hierarchy-aware chunk pass.
    pub chunk: ChunkOptions,
    /// Hierarchy extraction options.
    pub hierarchy: HierarchyOptions,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            chunk: ChunkOptions::default(),
            hierarchy: HierarchyOptions::default(),
        }
    }
}

/// Options accompanying `query_with_sync`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryOptions {
    /// The sync pass run before searching.
    pub sync: SyncOptions,
    /// Number of nearest neighbors to return.
    pub limit: usize,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            sync: SyncOptions::default(),
            limit: 10,
        }
    }
}

/// The result of `query_with_sync`: the nearest-neighbor matches plus the
/// hierarchy used to produce them, for the caller to attach context.
#[derive(Debug, Clone)]
pub struct QueryResult {
    /// Matches, ascending by distance.
    pub results: Vec<ScoredRecord>,
    /// The hierarchy cached by the sync that preceded this search.
    pub hierarchy: HierarchyMap,
}

#[derive(Default)]
struct State {
    last_doc_hash: Option<String>,
    stored_hashes: HashSet<String>,
    last_hierarchy: Option<HierarchyMap>,
}

/// Two-tier content-addressed synchronizer between a document's text and
/// an external vector index. Created empty; all bookkeeping lives in
/// memory and does not survive a process restart.
pub struct DocSyncManager {
    embedder: Arc<dyn Embedder>,
    vector_store: Arc<dyn VectorStore>,
    state: Mutex<State>,
}

impl DocSyncManager {
    /// Construct a manager over the given embedder and vector store.
    pub fn new(embedder: Arc<dyn Embedder>, vector_store: Arc<dyn VectorStore>) -> Self {
        Self {
            embedder,
            vector_store,
            state: Mutex::new(State::default()),
        }
    }

    /// Reconcile the vector index with `text`. Returns `false` immediately
    /// (no embedder, vector store, or hierarchy-extraction calls are made)
    /// when `text` is unchanged since the last sync.
    ///
    /// The whole operation runs under an exclusive lock, so concurrent
    /// callers serialize; bookkeeping is only updated after a store
    /// mutation completes successfully, so a cancelled or failed sync
    /// leaves the manager's state exactly as it was.
    pub async fn sync_if_needed(&self, text: &str, opts: &SyncOptions) -> Result<bool> {
        let doc_hash = hash_document(text);
        let mut state = self.state.lock().await;

        if state.last_doc_hash.as_deref() == Some(doc_hash.as_str()) {
            debug!("document unchanged, skipping sync");
            return Ok(false);
        }

        let hierarchy = extract_hierarchy(text, Some(self.embedder.as_ref()), &opts.hierarchy).await?;
        let chunks = chunk_with_hierarchy(text, &hierarchy, &opts.chunk);
        let current_hashes: HashSet<String> = chunks.iter().map(|c| c.hash.clone()).collect();

        let to_delete: Vec<&String> = state.stored_hashes.difference(&current_hashes).collect();
        let to_insert: Vec<_> = chunks.iter().filter(|c| !state.stored_hashes.contains(&c.hash)).collect();

        if !to_delete.is_empty() {
            info!(deleted = to_delete.len(), "chunk deletions detected, running full resync");
            let texts: Vec<String> = chunks.iter().map(|c| c.text.clone()).collect();
            let vectors = self
                .embedder
                .embed_batch(&texts)
                .await
                .map_err(|e| SyncError::Embedder(e.to_string()))?;
            let records: Vec<ChunkRecord> = chunks
                .iter()
                .zip(vectors)
                .map(|(chunk, vector)| ChunkRecord::from_chunk(chunk, vector))
                .collect();

            self.vector_store.reset().await.map_err(|e| SyncError::VectorStore(e.to_string()))?;
            self.vector_store
                .insert(records)
                .await
                .map_err(|e| SyncError::VectorStore(e.to_string()))?;
        } else if !to_insert.is_empty() {
            debug!(inserted = to_insert.len(), "appending new chunks");
            let texts: Vec<String> = to_insert.iter().map(|c| c.text.clone()).collect();
            let vectors = self
                .embedder
                .embed_batch(&texts)
                .await
                .map_err(|e| SyncError::Embedder(e.to_string()))?;
            let records: Vec<ChunkRecord> = to_insert
                .iter()
                .zip(vectors)
                .map(|(chunk, vector)| ChunkRecord::from_chunk(chunk, vector))
                .collect();

            self.vector_store
                .insert(records)
                .await
                .map_err(|e| SyncError::VectorStore(e.to_string()))?;
        } else {
            debug!("document changed but chunk set is identical, no store mutation");
        }

        state.stored_hashes = current_hashes;
        state.last_doc_hash = Some(doc_hash);
        state.last_hierarchy = Some(hierarchy);
        Ok(true)
    }

    /// Sync, then run a nearest-neighbor search for `question` with
    /// `opts.limit` results.
    pub async fn query_with_sync(&self, text: &str, question: &str, opts: &QueryOptions) -> Result<QueryResult> {
        self.sync_if_needed(text, &opts.sync).await?;

        let query_vector = self
            .embedder
            .embed(question)
            .await
            .map_err(|e| SyncError::Embedder(e.to_string()))?;
        let results = self
            .vector_store
            .search(&query_vector, opts.limit)
            .await
            .map_err(|e| SyncError::VectorStore(e.to_string()))?;

        let hierarchy = self
            .state
            .lock()
            .await
            .last_hierarchy
            .clone()
            .ok_or(SyncError::MissingHierarchy)?;

        Ok(QueryResult { results, hierarchy })
    }

    /// Drop the vector table and clear all bookkeeping.
    pub async fn reset(&self) -> Result<()> {
        self.vector_store.reset().await.map_err(|e| SyncError::VectorStore(e.to_string()))?;
        let mut state = self.state.lock().await;
        state.last_doc_hash = None;
        state.stored_hashes.clear();
        state.last_hierarchy = None;
        Ok(())
    }

    /// A snapshot of the hierarchy cached by the most recent sync, if any.
    pub async fn last_hierarchy(&self) -> Option<HierarchyMap> {
        self.state.lock().await.last_hierarchy.clone()
    }
}
