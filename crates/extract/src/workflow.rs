use crate::config::ExtractorConfig;
use crate::json::{is_wrapper_prompt, object_field, parse_object, str_field, JsonObject};
use crate::text::{finish, pick_best_candidate};
use crate::types::{Candidate, CandidateOrigin};
use serde_json::Value;

/// Input that is a candidate on any node
const ALWAYS_INPUTS: &[&str] = &["positive"];

/// Inputs that are candidates only on nodes that look positive
const POSITIVE_NODE_INPUTS: &[&str] = &["text", "prompt"];

#[derive(Debug, Clone, Copy)]
enum NodeField {
    ClassType,
    Title,
}

#[derive(Debug, Clone, Copy)]
enum Matcher {
    ContainsIgnoreCase(&'static str),
    Exact(&'static str),
}

/// One rule of the "looks positive" table
#[derive(Debug, Clone, Copy)]
struct PositiveSignal {
    field: NodeField,
    matcher: Matcher,
}

/// A node looks positive when any of these match. Extend here, not in code.
const POSITIVE_SIGNALS: &[PositiveSignal] = &[
    PositiveSignal {
        field: NodeField::ClassType,
        matcher: Matcher::ContainsIgnoreCase("positive"),
    },
    PositiveSignal {
        field: NodeField::Title,
        matcher: Matcher::ContainsIgnoreCase("positive"),
    },
    PositiveSignal {
        field: NodeField::Title,
        matcher: Matcher::Exact("Positive"),
    },
];

impl Matcher {
    fn matches(self, value: &str) -> bool {
        match self {
            Self::ContainsIgnoreCase(needle) => value.to_lowercase().contains(needle),
            Self::Exact(expected) => value == expected,
        }
    }
}

/// A node of a workflow graph, borrowed from the parsed JSON
#[derive(Debug, Clone, Copy)]
pub struct WorkflowNode<'a> {
    pub id: &'a str,

    /// `class_type`, empty when missing or not a string
    pub class_type: &'a str,

    /// `_meta.title`, empty when missing
    pub title: &'a str,

    /// `inputs`; `None` reads as an empty object
    pub inputs: Option<&'a JsonObject>,
}

impl<'a> WorkflowNode<'a> {
    /// Build a node from one graph entry. Only object values are nodes.
    #[must_use]
    pub fn from_entry(id: &'a str, value: &'a Value) -> Option<Self> {
        let node = value.as_object()?;
        Some(Self {
            id,
            class_type: str_field(node, "class_type").unwrap_or_default(),
            title: object_field(node, "_meta")
                .and_then(|meta| str_field(meta, "title"))
                .unwrap_or_default(),
            inputs: object_field(node, "inputs"),
        })
    }

    /// Non-empty string input
    #[must_use]
    pub fn input_str(&self, field: &str) -> Option<&'a str> {
        self.inputs
            .and_then(|inputs| str_field(inputs, field))
            .filter(|s| !s.trim().is_empty())
    }

    #[must_use]
    pub fn looks_positive(&self) -> bool {
        POSITIVE_SIGNALS.iter().any(|signal| {
            let value = match signal.field {
                NodeField::ClassType => self.class_type,
                NodeField::Title => self.title,
            };
            signal.matcher.matches(value)
        })
    }

    /// Prompt candidates this node contributes, in input order
    pub fn candidates(&self) -> Vec<Candidate> {
        let positive_inputs: &[&'static str] = if self.looks_positive() {
            POSITIVE_NODE_INPUTS
        } else {
            &[]
        };

        ALWAYS_INPUTS
            .iter()
            .chain(positive_inputs)
            .filter_map(|&field| {
                self.input_str(field).map(|text| {
                    Candidate::new(
                        text,
                        CandidateOrigin::NodeInput {
                            node_id: self.id.to_string(),
                            field,
                        },
                    )
                })
            })
            .collect()
    }
}

/// Canonical array-index ids ("0", "7", "42") sort numerically, like the
/// producers' own JSON engines enumerate them.
fn array_index(id: &str) -> Option<u32> {
    if id.is_empty() || (id.len() > 1 && id.starts_with('0')) {
        return None;
    }
    if !id.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    id.parse::<u32>().ok().filter(|&n| n != u32::MAX)
}

/// Nodes of a graph: numeric ids ascending, then the rest in document order
fn ordered_nodes(graph: &JsonObject) -> Vec<WorkflowNode<'_>> {
    let mut nodes: Vec<WorkflowNode<'_>> = graph
        .iter()
        .filter_map(|(id, value)| WorkflowNode::from_entry(id, value))
        .collect();
    nodes.sort_by_key(|node| match array_index(node.id) {
        Some(n) => (0, n),
        None => (1, 0),
    });
    nodes
}

/// Best positive prompt in a workflow node graph
#[must_use]
pub fn extract_from_workflow_graph(graph: &JsonObject) -> Option<String> {
    let candidates = ordered_nodes(graph)
        .iter()
        .flat_map(|node| node.candidates())
        .collect::<Vec<_>>();
    log::trace!("workflow graph yielded {} candidates", candidates.len());

    let best = pick_best_candidate(candidates)?;
    log::debug!("workflow prompt taken from {}", best.origin);
    finish(&best.text)
}

/// [`extract_from_metadata_object_with`] using the default configuration
#[must_use]
pub fn extract_from_metadata_object(obj: &JsonObject) -> Option<String> {
    extract_from_metadata_object_with(obj, &ExtractorConfig::default())
}

/// Prompt from a generator metadata object. First success wins:
/// embedded `raw_workflow` graph, a long `prompt` field, then the
/// configured fallback keys.
#[must_use]
pub fn extract_from_metadata_object_with(
    obj: &JsonObject,
    config: &ExtractorConfig,
) -> Option<String> {
    if let Some(prompt) = str_field(obj, "raw_workflow")
        .and_then(parse_object)
        .and_then(|graph| extract_from_workflow_graph(&graph))
    {
        return Some(prompt);
    }

    if let Some(prompt) = str_field(obj, "prompt")
        .filter(|p| {
            p.trim().chars().count() > config.metadata_prompt_min_chars && !is_wrapper_prompt(p)
        })
        .and_then(finish)
    {
        log::debug!("metadata prompt taken from \"prompt\"");
        return Some(prompt);
    }

    config.metadata_prompt_keys.iter().find_map(|key| {
        let value = str_field(obj, key)?;
        if value.trim().is_empty() || is_wrapper_prompt(value) {
            return None;
        }
        log::debug!("metadata prompt taken from {key:?}");
        finish(value)
    })
}
