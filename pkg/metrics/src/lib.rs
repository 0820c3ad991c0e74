use pkg_types::rules::RuleKind;
use std::collections::BTreeMap;

/// Per-kind tally of written documents, accumulated by the caller and
/// reported once at the end of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleTally {
    counters: BTreeMap<RuleKind, u64>,
}

impl RuleTally {
    pub fn new() -> Self {
        Self {
            counters: RuleKind::ALL.iter().map(|k| (*k, 0)).collect(),
        }
    }

    /// Increment a counter by 1.
    pub fn record(&mut self, kind: RuleKind) {
        self.add(kind, 1);
    }

    /// Increment a counter by a given amount.
    pub fn add(&mut self, kind: RuleKind, val: u64) {
        *self.counters.entry(kind).or_insert(0) += val;
    }

    pub fn get(&self, kind: RuleKind) -> u64 {
        self.counters.get(&kind).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counters.values().sum()
    }

    /// Render the end-of-run summary, one line per kind.
    pub fn render(&self) -> String {
        let mut output = String::new();
        for (kind, val) in &self.counters {
            output.push_str(&format!("Total {} CRDs created: {}\n", kind, val));
        }
        output
    }
}

impl Default for RuleTally {
    fn default() -> Self {
        Self::new()
    }
}
