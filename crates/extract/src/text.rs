use crate::json::is_wrapper_prompt;
use crate::types::{Candidate, CandidateOrigin};

/// Fold escaped and real line breaks into `\n`, then trim.
///
/// Handles the literal four-character `\r\n` escape, the literal two-character
/// `\n` escape, and real CRLF pairs.
#[must_use]
pub fn normalize_prompt(s: &str) -> String {
    s.replace("\\r\\n", "\n")
        .replace("\\n", "\n")
        .replace("\r\n", "\n")
        .trim()
        .to_string()
}

/// Normalize, treating a result that normalizes to nothing as absent
pub(crate) fn finish(s: &str) -> Option<String> {
    Some(normalize_prompt(s)).filter(|p| !p.is_empty())
}

/// Longest candidate after trimming, ignoring blanks and wrapper JSON.
///
/// Length is counted in chars. Ties keep the earliest candidate. The returned
/// candidate carries the trimmed text.
pub fn pick_best_candidate(
    candidates: impl IntoIterator<Item = Candidate>,
) -> Option<Candidate> {
    let mut best: Option<(usize, Candidate)> = None;
    for candidate in candidates {
        let text = candidate.text.trim();
        if text.is_empty() || is_wrapper_prompt(text) {
            continue;
        }
        let len = text.chars().count();
        if best.as_ref().map_or(true, |(best_len, _)| len > *best_len) {
            let text = text.to_string();
            best = Some((len, Candidate { text, ..candidate }));
        }
    }

    best.map(|(_, candidate)| {
        log::trace!("best candidate from {}", candidate.origin);
        candidate
    })
}

/// [`pick_best_candidate`] over plain strings
pub fn pick_best_string<I, S>(candidates: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    pick_best_candidate(
        candidates
            .into_iter()
            .enumerate()
            .map(|(i, s)| Candidate::new(s.as_ref(), CandidateOrigin::Blob(i))),
    )
    .map(|candidate| candidate.text)
}
