use crate::config::ExtractorConfig;
use crate::error::{ExtractError, Result};
use crate::json::{has_numeric_key, is_wrapper_prompt, parse_object, JsonObject};
use crate::text::{finish, pick_best_candidate};
use crate::types::{Candidate, CandidateOrigin, ExtractionResult, PromptSource};
use crate::workflow::{extract_from_metadata_object_with, extract_from_workflow_graph};

/// Runs the three heuristic phases over ranked text blobs
#[derive(Debug, Clone, Default)]
pub struct PromptSelector {
    config: ExtractorConfig,
}

impl PromptSelector {
    /// Create a new selector with configuration
    pub fn new(config: ExtractorConfig) -> Result<Self> {
        config.validate().map_err(ExtractError::invalid_config)?;
        Ok(Self { config })
    }

    #[must_use]
    pub const fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Choose the prompt from blobs already ordered by relevance.
    ///
    /// Every blob is tried in a phase before the next phase starts, so the
    /// order only decides which blob wins inside a phase.
    pub fn select<S: AsRef<str>>(&self, blobs: &[S]) -> ExtractionResult {
        let objects: Vec<Option<JsonObject>> =
            blobs.iter().map(|blob| parse_object(blob.as_ref())).collect();

        if let Some(prompt) = self.metadata_phase(&objects) {
            return Self::found(prompt, PromptSource::MetadataJson);
        }
        if let Some(prompt) = Self::raw_workflow_phase(&objects) {
            return Self::found(prompt, PromptSource::RawWorkflowJson);
        }
        if let Some(prompt) = self.fallback_phase(blobs) {
            return Self::found(prompt, PromptSource::FallbackLongText);
        }

        log::debug!("no prompt found in {} blobs", blobs.len());
        ExtractionResult::none()
    }

    fn found(prompt: String, source: PromptSource) -> ExtractionResult {
        log::debug!("prompt found via {source} ({} chars)", prompt.chars().count());
        ExtractionResult::found(prompt, source)
    }

    /// Phase A: blobs that are generator metadata objects
    fn metadata_phase(&self, objects: &[Option<JsonObject>]) -> Option<String> {
        objects
            .iter()
            .flatten()
            .find_map(|obj| extract_from_metadata_object_with(obj, &self.config))
    }

    /// Phase B: blobs that are node graphs themselves
    fn raw_workflow_phase(objects: &[Option<JsonObject>]) -> Option<String> {
        objects
            .iter()
            .flatten()
            .filter(|obj| has_numeric_key(obj))
            .find_map(extract_from_workflow_graph)
    }

    /// Phase C: longest long plain-text blob
    fn fallback_phase<S: AsRef<str>>(&self, blobs: &[S]) -> Option<String> {
        let min_chars = self.config.fallback_min_chars;
        let candidates = blobs.iter().enumerate().filter_map(|(index, blob)| {
            let text = blob.as_ref().trim();
            (text.chars().count() > min_chars && !is_wrapper_prompt(text))
                .then(|| Candidate::new(text, CandidateOrigin::Blob(index)))
        });
        let best = pick_best_candidate(candidates)?;
        finish(&best.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_input_finds_nothing() {
        let result = PromptSelector::default().select::<&str>(&[]);
        assert_eq!(result, ExtractionResult::none());
    }

    #[test]
    fn metadata_phase_beats_earlier_raw_workflow_blob() {
        let graph = r#"{"1":{"inputs":{"positive":"graph prompt"}}}"#;
        let metadata = r#"{"positive":"metadata prompt"}"#;
        let result = PromptSelector::default().select(&[graph, metadata]);
        assert_eq!(result.prompt(), Some("metadata prompt"));
        assert_eq!(result.source(), PromptSource::MetadataJson);
    }

    #[test]
    fn raw_workflow_needs_numeric_key() {
        let not_graph = r#"{"node":{"inputs":{"positive":"hidden"}}}"#;
        let result = PromptSelector::default().select(&[not_graph]);
        assert_eq!(result, ExtractionResult::none());
    }

    #[test]
    fn first_blob_wins_within_phase() {
        let first = r#"{"5":{"inputs":{"positive":"first"}}}"#;
        let second = r#"{"5":{"inputs":{"positive":"second and longer"}}}"#;
        let result = PromptSelector::default().select(&[first, second]);
        assert_eq!(result.prompt(), Some("first"));
    }

    #[test]
    fn fallback_threshold_is_strict() {
        let exactly = "a".repeat(200);
        let result = PromptSelector::default().select(&[exactly.as_str()]);
        assert_eq!(result.source(), PromptSource::None);

        let longer = "a".repeat(201);
        let result = PromptSelector::default().select(&[exactly.as_str(), longer.as_str()]);
        assert_eq!(result.prompt(), Some(longer.as_str()));
        assert_eq!(result.source(), PromptSource::FallbackLongText);
    }

    #[test]
    fn long_json_without_prompt_keys_falls_back_to_text() {
        let long_json = format!(r#"{{"note":"{}"}}"#, "z".repeat(250));
        let result = PromptSelector::default().select(&[long_json.as_str()]);
        assert_eq!(result.source(), PromptSource::FallbackLongText);
        assert_eq!(result.prompt(), Some(long_json.as_str()));
    }

    #[test]
    fn long_prompt_inside_wrapper_is_metadata() {
        let value = "z".repeat(250);
        let wrapper = format!(r#"{{"prompt":"{value}"}}"#);
        let result = PromptSelector::default().select(&[wrapper.as_str()]);
        assert_eq!(result.prompt(), Some(value.as_str()));
        assert_eq!(result.source(), PromptSource::MetadataJson);
    }

    #[test]
    fn fallback_skips_wrapper_blobs() {
        // Metadata threshold above the value length leaves the wrapper to the fallback phase.
        let selector = PromptSelector::new(ExtractorConfig {
            metadata_prompt_min_chars: 10_000,
            ..Default::default()
        })
        .expect("config");
        let wrapper = format!(r#"{{"prompt":"{}"}}"#, "z".repeat(250));
        assert_eq!(selector.select(&[wrapper.as_str()]), ExtractionResult::none());

        let plain = "y".repeat(240);
        let result = selector.select(&[wrapper.as_str(), plain.as_str()]);
        assert_eq!(result.prompt(), Some(plain.as_str()));
        assert_eq!(result.source(), PromptSource::FallbackLongText);
    }

    #[test]
    fn configured_fallback_threshold() {
        let selector = PromptSelector::new(ExtractorConfig {
            fallback_min_chars: 5,
            ..Default::default()
        })
        .expect("config");
        let result = selector.select(&["a short caption"]);
        assert_eq!(result.prompt(), Some("a short caption"));
    }

    #[test]
    fn rejects_invalid_config() {
        let err = PromptSelector::new(ExtractorConfig {
            metadata_prompt_keys: vec![String::new()],
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, ExtractError::InvalidConfig(_)));
    }
}
