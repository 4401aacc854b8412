//! Trace and JSON formatters.

use std::fmt::Write;

use serde::Serialize;
use vending_language::{Evaluation, Step, Verdict};

// =============================================================================
// Verdict Formatter Trait
// =============================================================================

/// Trait for turning an evaluation into display lines.
pub trait VerdictFormatter {
    /// Formats an evaluation as an ordered list of lines.
    fn lines(&self, evaluation: &Evaluation) -> Vec<String>;

    /// Formats an evaluation as one newline-joined string.
    fn render(&self, evaluation: &Evaluation) -> String {
        self.lines(evaluation).join("\n")
    }
}

/// Returns the one-line outcome shown at the end of every human report.
#[must_use]
pub fn summary_line(verdict: &Verdict) -> String {
    match verdict {
        Verdict::Accepted { balance, purchases } => {
            format!("ACCEPTED balance={balance} purchases={purchases}")
        }
        Verdict::Rejected(violation) => {
            let mut line = format!(
                "REJECTED {} at index {}",
                violation.kind.name(),
                violation.index
            );
            if let Some(c) = violation.found() {
                let _ = write!(line, " ('{c}')");
            }
            let _ = write!(line, ": {}", violation.kind);
            line
        }
    }
}

// =============================================================================
// Human-Readable Formatter
// =============================================================================

/// Formats one line per processed symbol, then the outcome.
#[derive(Clone, Debug)]
pub struct HumanFormatter {
    /// Whether to prefix each line with the symbol index.
    pub show_indices: bool,
    /// Whether to color the outcome line with ANSI escapes.
    pub color: bool,
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self {
            show_indices: true,
            color: false,
        }
    }
}

impl HumanFormatter {
    /// Creates a new human formatter with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to hide symbol indices.
    #[must_use]
    pub fn without_indices(mut self) -> Self {
        self.show_indices = false;
        self
    }

    /// Builder method to enable ANSI color.
    #[must_use]
    pub fn with_color(mut self) -> Self {
        self.color = true;
        self
    }

    fn step_line(&self, step: &Step) -> String {
        let mut line = String::new();
        if self.show_indices {
            let _ = write!(line, "[{:03}] ", step.index);
        }
        let _ = write!(
            line,
            "{}  depth={} balance={} purchases={}",
            step.symbol, step.depth, step.balance, step.purchases
        );
        line
    }

    fn outcome_line(&self, verdict: &Verdict) -> String {
        let line = summary_line(verdict);
        if !self.color {
            return line;
        }
        let color = if verdict.is_accepted() {
            "\x1b[1;32m"
        } else {
            "\x1b[1;31m"
        };
        format!("{color}{line}\x1b[0m")
    }
}

impl VerdictFormatter for HumanFormatter {
    fn lines(&self, evaluation: &Evaluation) -> Vec<String> {
        evaluation
            .steps()
            .iter()
            .map(|step| self.step_line(step))
            .chain(std::iter::once(self.outcome_line(&evaluation.verdict)))
            .collect()
    }
}

// =============================================================================
// JSON Formatter
// =============================================================================

/// Formats an evaluation as a JSON document.
#[derive(Clone, Debug, Default)]
pub struct JsonFormatter {
    /// Whether to pretty-print JSON.
    pub pretty: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    accepted: bool,
    steps: &'a [Step],
    verdict: &'a Verdict,
}

impl JsonFormatter {
    /// Creates a new JSON formatter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method for pretty printing.
    #[must_use]
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }
}

impl VerdictFormatter for JsonFormatter {
    fn lines(&self, evaluation: &Evaluation) -> Vec<String> {
        let report = JsonReport {
            accepted: evaluation.is_accepted(),
            steps: evaluation.steps(),
            verdict: &evaluation.verdict,
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        };

        match json {
            Ok(json) => json.lines().map(str::to_string).collect(),
            Err(e) => vec![format!("{{\"error\":\"{e}\"}}")],
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
