// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//! Trace filtering

use super::event::{ApiCategory, TraceEvent};

/// Filter rule for trace events
#[derive(Debug, Clone)]
pub enum FilterRule {
    /// Include all events
    All,
    /// Include only specific function names (exact match)
    Function(Vec<String>),
    /// Include functions matching a pattern (simple wildcard: * and ?)
    Pattern(String),
    /// Include only specific categories
    Category(Vec<ApiCategory>),
}

/// Trace filter configuration
#[derive(Debug, Clone)]
pub struct TraceFilter {
    rules: Vec<FilterRule>,
}

impl Default for TraceFilter {
    fn default() -> Self {
        Self {
            rules: vec![FilterRule::All],
        }
    }
}

impl TraceFilter {
    /// Create a new empty filter (includes all events)
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a filter rule
    #[must_use]
    pub fn add_rule(mut self, rule: FilterRule) -> Self {
        // The first concrete rule replaces the default catch-all.
        if self.rules.len() == 1 && matches!(self.rules[0], FilterRule::All) {
            self.rules.clear();
        }
        self.rules.push(rule);
        self
    }

    /// Check if an event should be included. Rules are a union: any match
    /// includes the event.
    pub fn should_trace(&self, event: &TraceEvent) -> bool {
        if self.rules.is_empty() {
            return true;
        }
        self.rules.iter().any(|rule| match rule {
            FilterRule::All => true,
            FilterRule::Function(names) => names.iter().any(|name| name == &event.function),
            FilterRule::Pattern(pattern) => glob_match(&event.function, pattern),
            FilterRule::Category(categories) => categories.contains(&event.category),
        })
    }
}

/// Wildcard match with `*` (any run) and `?` (single char), iterative with
/// star backtracking.
fn glob_match(text: &str, pattern: &str) -> bool {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();

    let mut t = 0;
    let mut p = 0;
    // Position of the last `*` seen and the text index it is pinned to.
    let mut star: Option<usize> = None;
    let mut star_t = 0;

    while t < text.len() {
        if p < pattern.len() && (pattern[p] == '?' || pattern[p] == text[t]) {
            t += 1;
            p += 1;
        } else if p < pattern.len() && pattern[p] == '*' {
            star = Some(p);
            star_t = t;
            p += 1;
        } else if let Some(sp) = star {
            // Let the star swallow one more character and retry.
            star_t += 1;
            t = star_t;
            p = sp + 1;
        } else {
            return false;
        }
    }

    // Only trailing stars may remain.
    pattern[p..].iter().all(|&c| c == '*')
}
