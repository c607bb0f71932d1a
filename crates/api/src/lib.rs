// Copyright 2025 Doc Analysis Team
//
// Licensed under the Apache License, Version 2.0 (the "License");

//! The thin HTTP surface over the document-analysis core: chunking,
//! hierarchy extraction, doc/vector-index sync, and LLM orchestration,
//! each exposed as a single `POST /analyze/*` route plus `GET /health`.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod error;
mod models;
mod rest;
mod state;

pub use config::DocAnalysisConfig;
pub use error::{ApiError, ApiResult};
pub use rest::{create_router, run_server};
pub use state::AppState;

/// Re-exports commonly used types.
pub mod prelude {
    pub use crate::{create_router, run_server, ApiError, AppState, DocAnalysisConfig};
}
