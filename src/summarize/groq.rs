//! Groq chat-completions summarizer.

use crate::config::GroqConfig;
use crate::summarize::{Summarizer, failure_fallback};
use serde_json::{Value, json};
use std::time::Duration;

const API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const SYSTEM_PROMPT: &str =
    "You are a helpful assistant that summarizes work activity for timesheets.";
const MAX_TOKENS: u32 = 150;

pub struct GroqSummarizer {
    api_key: String,
    model: String,
    client: reqwest::blocking::Client,
}

impl GroqSummarizer {
    /// `None` when no API key is configured.
    pub fn from_config(cfg: &GroqConfig) -> Option<Self> {
        if cfg.api_key.trim().is_empty() {
            return None;
        }
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .ok()?;
        Some(Self {
            api_key: cfg.api_key.clone(),
            model: cfg.model.clone(),
            client,
        })
    }

    fn call(&self, prompt: &str) -> Result<String, String> {
        let body = json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": prompt}
            ],
            "max_tokens": MAX_TOKENS,
        });

        let resp = self
            .client
            .post(API_URL)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .map_err(|e| e.to_string())?;

        let status = resp.status();
        if !status.is_success() {
            return Err(format!("HTTP {}", status.as_u16()));
        }

        let payload: Value = resp.json().map_err(|e| e.to_string())?;
        payload["choices"][0]["message"]["content"]
            .as_str()
            .map(|s| s.trim().to_string())
            .ok_or_else(|| "no completion in response".to_string())
    }
}

impl Summarizer for GroqSummarizer {
    fn summarize(&self, issue_context: &str, vcs_context: &str, date: &str) -> String {
        let prompt = build_prompt(issue_context, vcs_context, date);

        match self.call(&prompt) {
            Ok(text) => text,
            Err(e) => failure_fallback(&e, issue_context, vcs_context),
        }
    }
}

fn build_prompt(issue_context: &str, vcs_context: &str, date: &str) -> String {
    format!(
        "Create a concise daily timesheet summary for the following activities on {date}.\n\n\
         Jira Activity:\n{issue_context}\n\n\
         GitHub Activity:\n{vcs_context}\n\n\
         Format the output as a single paragraph describing the work done."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_both_contexts_and_date() {
        let p = build_prompt("JIRA-CTX", "VCS-CTX", "2024-05-01");
        assert!(p.contains("on 2024-05-01"));
        assert!(p.contains("Jira Activity:\nJIRA-CTX"));
        assert!(p.contains("GitHub Activity:\nVCS-CTX"));
        assert!(p.ends_with("single paragraph describing the work done."));
    }

    #[test]
    fn missing_api_key_yields_no_summarizer() {
        let cfg = GroqConfig {
            api_key: String::new(),
            model: "llama-3.1-8b-instant".into(),
        };
        assert!(GroqSummarizer::from_config(&cfg).is_none());
    }
}
