use pngprompt_chunks::TextChunk;
use std::cmp::Reverse;

/// Keyword fragments and their scores, checked in order (first match wins)
const KEYWORD_SCORES: &[(&str, u8)] = &[("workflow", 3), ("prompt", 2), ("parameters", 1)];

/// How likely a chunk with this keyword carries the prompt. Case-insensitive.
#[must_use]
pub fn relevance_score(keyword: &str) -> u8 {
    let keyword = keyword.to_lowercase();
    KEYWORD_SCORES
        .iter()
        .find(|(fragment, _)| keyword.contains(fragment))
        .map_or(0, |&(_, score)| score)
}

/// Chunks ordered by descending keyword score, file order within a score
#[must_use]
pub fn rank_by_relevance(chunks: &[TextChunk]) -> Vec<&TextChunk> {
    let mut ranked: Vec<&TextChunk> = chunks.iter().collect();
    ranked.sort_by_key(|chunk| Reverse(relevance_score(&chunk.keyword)));
    ranked
}
