//! # pngprompt extract
//!
//! Picks the positive prompt out of the text chunks an image generator left
//! in a PNG.
//!
//! ## Architecture
//!
//! ```text
//! TextChunk[]
//!     │
//!     ├──> Relevance ranking (keyword: workflow > prompt > parameters > other)
//!     │
//!     └──> Prompt selector, first phase with an answer wins
//!            ├─ A metadata-json:      metadata object fields, raw_workflow graph
//!            ├─ B raw-workflow-json:  blob is itself a node graph
//!            └─ C fallback-long-text: longest long plain-text blob
//! ```
//!
//! ## Example
//!
//! ```rust
//! use pngprompt_extract::{PromptSelector, PromptSource};
//!
//! let blob = r#"{"6":{"class_type":"CLIPTextEncode","_meta":{"title":"Positive"},"inputs":{"text":"a cat"}}}"#;
//! let result = PromptSelector::default().select(&[blob]);
//!
//! assert_eq!(result.prompt(), Some("a cat"));
//! assert_eq!(result.source(), PromptSource::RawWorkflowJson);
//! ```

mod config;
mod error;
mod json;
mod pipeline;
mod relevance;
mod selector;
mod text;
mod types;
mod workflow;

pub use config::ExtractorConfig;
pub use error::{ExtractError, Result};
pub use json::{is_wrapper_prompt, parse_object, JsonObject};
pub use pipeline::{extract_from_png, PromptExtractor};
pub use relevance::{rank_by_relevance, relevance_score};
pub use selector::PromptSelector;
pub use text::{normalize_prompt, pick_best_candidate, pick_best_string};
pub use types::{Candidate, CandidateOrigin, ExtractionResult, PromptSource};
pub use workflow::{
    extract_from_metadata_object, extract_from_metadata_object_with, extract_from_workflow_graph,
    WorkflowNode,
};

pub use pngprompt_chunks::{ChunkError, ChunkKind, ReaderConfig, TextChunk, PNG_SIGNATURE};
