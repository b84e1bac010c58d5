use serde::{Deserialize, Serialize};
use std::fmt;

/// Which heuristic phase produced a prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PromptSource {
    /// A metadata object field or its embedded `raw_workflow` graph
    MetadataJson,
    /// A blob that was itself a workflow node graph
    RawWorkflowJson,
    /// The longest long plain-text blob
    FallbackLongText,
    /// Nothing qualified
    None,
}

impl PromptSource {
    /// Get the wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MetadataJson => "metadata-json",
            Self::RawWorkflowJson => "raw-workflow-json",
            Self::FallbackLongText => "fallback-long-text",
            Self::None => "none",
        }
    }
}

impl fmt::Display for PromptSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one extraction. `source` is `None` exactly when `prompt` is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    prompt: Option<String>,
    source: PromptSource,
}

impl ExtractionResult {
    /// No prompt found
    #[must_use]
    pub const fn none() -> Self {
        Self {
            prompt: None,
            source: PromptSource::None,
        }
    }

    pub(crate) fn found(prompt: String, source: PromptSource) -> Self {
        debug_assert!(source != PromptSource::None);
        Self {
            prompt: Some(prompt),
            source,
        }
    }

    #[must_use]
    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }

    #[must_use]
    pub const fn source(&self) -> PromptSource {
        self.source
    }

    #[must_use]
    pub const fn is_found(&self) -> bool {
        self.prompt.is_some()
    }

    #[must_use]
    pub fn into_prompt(self) -> Option<String> {
        self.prompt
    }
}

impl Default for ExtractionResult {
    fn default() -> Self {
        Self::none()
    }
}

/// Where a candidate string was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateOrigin {
    /// `inputs.<field>` of a workflow node
    NodeInput { node_id: String, field: &'static str },
    /// Top-level field of a metadata object
    MetadataField(String),
    /// Whole text blob at this index of the ranked input
    Blob(usize),
}

impl fmt::Display for CandidateOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NodeInput { node_id, field } => write!(f, "node {node_id} inputs.{field}"),
            Self::MetadataField(key) => write!(f, "metadata field {key:?}"),
            Self::Blob(index) => write!(f, "blob #{index}"),
        }
    }
}

/// A string that might be the prompt, with its provenance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub text: String,
    pub origin: CandidateOrigin,
}

impl Candidate {
    pub fn new(text: impl Into<String>, origin: CandidateOrigin) -> Self {
        Self {
            text: text.into(),
            origin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn none_result_has_no_prompt() {
        let result = ExtractionResult::none();
        assert_eq!(result.prompt(), None);
        assert_eq!(result.source(), PromptSource::None);
        assert!(!result.is_found());
    }

    #[test]
    fn result_serializes_with_kebab_case_source() {
        let result = ExtractionResult::found("a cat".into(), PromptSource::RawWorkflowJson);
        let json = serde_json::to_string(&result).expect("serialize");
        assert_eq!(json, r#"{"prompt":"a cat","source":"raw-workflow-json"}"#);

        let none = serde_json::to_string(&ExtractionResult::none()).expect("serialize");
        assert_eq!(none, r#"{"prompt":null,"source":"none"}"#);
    }

    #[test]
    fn source_display_matches_serde_name() {
        for source in [
            PromptSource::MetadataJson,
            PromptSource::RawWorkflowJson,
            PromptSource::FallbackLongText,
            PromptSource::None,
        ] {
            let json = serde_json::to_string(&source).expect("serialize");
            assert_eq!(json, format!("\"{source}\""));
        }
    }

    #[test]
    fn origin_display() {
        let origin = CandidateOrigin::NodeInput {
            node_id: "6".into(),
            field: "text",
        };
        assert_eq!(origin.to_string(), "node 6 inputs.text");
        assert_eq!(CandidateOrigin::Blob(2).to_string(), "blob #2");
    }
}
