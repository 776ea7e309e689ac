//! Mock portfolio assistant.
//!
//! Picks a canned answer for free-text visitor messages by keyword
//! containment over an ordered [`RuleTable`]. First match wins; no scoring.

pub mod rules;

pub use rules::{Intent, ResponseRule, RuleTable};

/// Outcome of classifying one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification<'a> {
    pub intent: Intent,
    pub response: &'a str,
}

/// Select exactly one response for `text`.
///
/// Empty or whitespace-only input is not rejected; it simply matches no rule
/// and receives the fallback answer.
pub fn classify<'a>(table: &'a RuleTable, text: &str) -> Classification<'a> {
    let lower = text.to_lowercase();

    table
        .rules()
        .iter()
        .find(|rule| rule.matches(&lower))
        .map(|rule| Classification {
            intent: rule.intent,
            response: &rule.response,
        })
        .unwrap_or(Classification {
            intent: Intent::Default,
            response: table.fallback(),
        })
}
