//! Remark summarization.
//!
//! The summarizer boundary is total-failure-free: `summarize` always returns a
//! usable remark string. An internal LLM failure degrades to a fallback that
//! embeds the error and the first 50 characters of each context; the caller
//! treats that fallback as a normal remark.

pub mod groq;

use crate::utils::text::truncate_chars;

/// Number of context characters embedded in the failure fallback.
const FALLBACK_CONTEXT_CHARS: usize = 50;

pub trait Summarizer {
    fn summarize(&self, issue_context: &str, vcs_context: &str, date: &str) -> String;
}

/// Fallback remark for an internal summarization failure.
pub(crate) fn failure_fallback(error: &str, issue_context: &str, vcs_context: &str) -> String {
    format!(
        "LLM Error: {error}. Raw Data: {}... {}...",
        truncate_chars(issue_context, FALLBACK_CONTEXT_CHARS),
        truncate_chars(vcs_context, FALLBACK_CONTEXT_CHARS),
    )
}

/// Used when no LLM credentials are configured.
pub struct UnconfiguredSummarizer;

impl Summarizer for UnconfiguredSummarizer {
    fn summarize(&self, _issue_context: &str, _vcs_context: &str, _date: &str) -> String {
        "LLM not configured. Raw Data gathered.".to_string()
    }
}

/// Deterministic summarizer for offline re-export from stored snapshots: it
/// cannot replay the original LLM remark, so it composes one from the stored
/// contexts.
pub struct LocalSummarizer;

impl Summarizer for LocalSummarizer {
    fn summarize(&self, issue_context: &str, vcs_context: &str, _date: &str) -> String {
        let mut parts: Vec<String> = Vec::new();

        if let Some(line) = issue_context.lines().next()
            && !line.trim().is_empty()
        {
            parts.push(line.trim().to_string());
        }

        let updates = vcs_context.lines().filter(|l| l.starts_with("- ")).count();
        if updates > 0 {
            parts.push(format!("{updates} source-control update(s)."));
        }

        if parts.is_empty() {
            "No recorded activity.".to_string()
        } else {
            parts.join(" ")
        }
    }
}

/// Pick the summarizer configured for online assembly.
pub fn from_config(cfg: &crate::config::Config) -> Box<dyn Summarizer> {
    match groq::GroqSummarizer::from_config(&cfg.groq) {
        Some(s) => Box::new(s),
        None => Box::new(UnconfiguredSummarizer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_fallback_embeds_error_and_truncated_contexts() {
        let issue = "a".repeat(80);
        let fb = failure_fallback("timeout", &issue, "short vcs");
        assert!(fb.starts_with("LLM Error: timeout. Raw Data: "));
        assert!(fb.contains(&"a".repeat(50)));
        assert!(!fb.contains(&"a".repeat(51)));
        assert!(fb.contains("short vcs..."));
    }

    #[test]
    fn local_summarizer_composes_from_contexts() {
        let s = LocalSummarizer;
        let remark = s.summarize(
            "[P-1] Fix login (status: Done)\nlong description",
            "- [acme/api] Fix build\n- [acme/api] Bump deps",
            "2024-01-01",
        );
        assert_eq!(
            remark,
            "[P-1] Fix login (status: Done) 2 source-control update(s)."
        );

        assert_eq!(s.summarize("", "", "2024-01-01"), "No recorded activity.");
    }

    #[test]
    fn unconfigured_summarizer_returns_static_remark() {
        let s = UnconfiguredSummarizer;
        assert_eq!(
            s.summarize("x", "y", "2024-01-01"),
            "LLM not configured. Raw Data gathered."
        );
    }
}
