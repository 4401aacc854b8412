//! Report configuration.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::format::{HumanFormatter, JsonFormatter, VerdictFormatter};
use crate::tree::{TreeFormatter, TreeStyle};

/// Which report to produce.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// One line per processed symbol.
    #[default]
    Trace,
    /// JSON document with steps and verdict.
    Json,
    /// Decorated derivation tree.
    Tree(TreeStyle),
}

impl ReportFormat {
    /// Names accepted by [`FromStr`].
    pub const NAMES: [&'static str; 4] = ["trace", "json", "visual", "indented"];

    /// Returns the name this format parses from.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Json => "json",
            Self::Tree(TreeStyle::Visual) => "visual",
            Self::Tree(TreeStyle::Indented) => "indented",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A format name that is not one of [`ReportFormat::NAMES`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown format '{0}' (expected trace, json, visual or indented)")]
pub struct UnknownFormat(pub String);

impl FromStr for ReportFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "json" => Ok(Self::Json),
            "visual" | "tree" => Ok(Self::Tree(TreeStyle::Visual)),
            "indented" => Ok(Self::Tree(TreeStyle::Indented)),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

/// Configuration for report output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReportConfig {
    /// Which report to produce.
    pub format: ReportFormat,

    /// Whether to color the outcome line (trace format only).
    pub color: bool,

    /// Whether to prefix trace lines with the symbol index.
    pub show_indices: bool,

    /// Whether to pretty-print JSON.
    pub pretty_json: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Trace,
            color: false,
            show_indices: true,
            pretty_json: true,
        }
    }
}

impl ReportConfig {
    /// Creates a default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the format.
    #[must_use]
    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    /// Builder method to enable/disable color.
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Builder method to show/hide symbol indices.
    #[must_use]
    pub fn with_indices(mut self, show: bool) -> Self {
        self.show_indices = show;
        self
    }

    /// Builder method to enable/disable pretty JSON.
    #[must_use]
    pub fn with_pretty_json(mut self, pretty: bool) -> Self {
        self.pretty_json = pretty;
        self
    }

    /// Builds the formatter this configuration selects.
    #[must_use]
    pub fn formatter(&self) -> Box<dyn VerdictFormatter> {
        match self.format {
            ReportFormat::Trace => {
                let mut formatter = HumanFormatter::new();
                formatter.show_indices = self.show_indices;
                formatter.color = self.color;
                Box::new(formatter)
            }
            ReportFormat::Json => Box::new(JsonFormatter {
                pretty: self.pretty_json,
            }),
            ReportFormat::Tree(style) => Box::new(TreeFormatter::new(style)),
        }
    }
}
