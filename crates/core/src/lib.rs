// Copyright 2025 Doc Analysis Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Doc Analysis Core Data Types
//!
//! This crate provides the fundamental data structures shared by every
//! component of the document-analysis core: chunks, hierarchy nodes, the
//! options that tune them, and the capability traits (`Embedder`,
//! `VectorStore`, `Agent`) that the rest of the workspace depends on as
//! opaque collaborators.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod capability;
mod chunk;
mod error;
mod hierarchy;
mod options;

pub use capability::{Agent, Embedder, GenerateOptions, Message, VectorStore};
pub use chunk::{hash_text, AnalysisResult, Chunk, ChunkRecord, ScoredRecord, TextStats};
pub use error::{CoreError, CoreResult};
pub use hierarchy::{HeadingNode, HierarchyMap, HierarchyStrategy};
pub use options::{ChunkOptions, HierarchyOptions};

/// Re-exports commonly used types.
pub mod prelude {
    pub use crate::{
        Agent, Chunk, ChunkOptions, CoreError, Embedder, HeadingNode, HierarchyMap,
        HierarchyOptions, VectorStore,
    };
}
