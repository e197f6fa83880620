//! Token usage accounting for a session.

use std::collections::HashMap;

use crate::TokenUsage;

/// Cumulative token usage, in total and per model.
#[derive(Debug, Clone, Default)]
pub struct TokenTracker {
    total: TokenUsage,
    by_model: HashMap<String, TokenUsage>,
    call_count: u64,
}

impl TokenTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record usage from one model call.
    pub fn record(&mut self, model: &str, usage: &TokenUsage) {
        add(&mut self.total, usage);
        add(self.by_model.entry(model.to_string()).or_default(), usage);
        self.call_count += 1;
    }

    pub fn total(&self) -> &TokenUsage {
        &self.total
    }

    pub fn for_model(&self, model: &str) -> Option<&TokenUsage> {
        self.by_model.get(model)
    }

    pub fn total_tokens(&self) -> u64 {
        self.total.total_tokens()
    }

    /// Number of model calls recorded, including tool rounds.
    pub fn call_count(&self) -> u64 {
        self.call_count
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn add(into: &mut TokenUsage, usage: &TokenUsage) {
    into.input_tokens = into.input_tokens.saturating_add(usage.input_tokens);
    into.output_tokens = into.output_tokens.saturating_add(usage.output_tokens);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usage(input: u64, output: u64) -> TokenUsage {
        TokenUsage {
            input_tokens: input,
            output_tokens: output,
        }
    }

    #[test]
    fn records_per_model_and_total() {
        let mut tracker = TokenTracker::new();
        tracker.record("gemini-2.0-flash", &usage(100, 20));
        tracker.record("gemini-2.0-flash", &usage(50, 10));
        tracker.record("search", &usage(5, 5));

        assert_eq!(tracker.call_count(), 3);
        assert_eq!(tracker.total_tokens(), 190);
        assert_eq!(
            tracker.for_model("gemini-2.0-flash"),
            Some(&usage(150, 30))
        );
        assert!(tracker.for_model("other").is_none());
    }

    #[test]
    fn reset_clears_everything() {
        let mut tracker = TokenTracker::new();
        tracker.record("m", &usage(1, 1));
        tracker.reset();
        assert_eq!(tracker.call_count(), 0);
        assert_eq!(tracker.total_tokens(), 0);
        assert!(tracker.for_model("m").is_none());
    }
}
