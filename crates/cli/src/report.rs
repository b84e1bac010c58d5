use pngprompt_chunks::TextChunk;
use pngprompt_extract::{relevance_score, ExtractionResult, PromptSource};
use serde::Serialize;

/// Short description of one decoded text chunk
#[derive(Debug, Clone, Serialize)]
pub struct ChunkSummary {
    pub kind: &'static str,
    pub keyword: String,
    pub chars: usize,
    pub relevance: u8,
}

impl From<&TextChunk> for ChunkSummary {
    fn from(chunk: &TextChunk) -> Self {
        Self {
            kind: chunk.kind.as_str(),
            keyword: chunk.keyword.clone(),
            chars: chunk.text.chars().count(),
            relevance: relevance_score(&chunk.keyword),
        }
    }
}

/// Outcome for one input file
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub file: String,
    #[serde(flatten)]
    pub result: ExtractionResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunks: Option<Vec<ChunkSummary>>,
}

pub fn render_json(report: &FileReport) -> String {
    serde_json::to_string(report).unwrap_or_else(|e| {
        log::error!("failed to serialize report for {}: {e}", report.file);
        String::from("{}")
    })
}

pub fn render_text(report: &FileReport, show_file: bool) -> String {
    let mut out = String::new();
    if show_file {
        out.push_str(&format!("== {}\n", report.file));
    }

    if let Some(chunks) = &report.chunks {
        for chunk in chunks {
            out.push_str(&format!(
                "[{}] {:?} ({} chars, relevance {})\n",
                chunk.kind, chunk.keyword, chunk.chars, chunk.relevance
            ));
        }
    }

    match report.result.prompt() {
        Some(prompt) => {
            if report.chunks.is_some() || show_file {
                out.push_str(&format!("source: {}\n", report.result.source()));
            }
            out.push_str(prompt);
            out.push('\n');
        }
        None => {
            debug_assert_eq!(report.result.source(), PromptSource::None);
            out.push_str("(no prompt found)\n");
        }
    }
    out
}
