//! Batch validation of input files.
//!
//! Each non-blank line of the input is validated on its own and written to
//! the report as:
//!
//! ```text
//! INPUT 1: $$$R
//! [000] $  depth=0 balance=1 purchases=0
//! ...
//! ACCEPTED balance=0 purchases=1
//! RESULT: VALID
//! ```

use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{info, warn};
use vending_foundation::{Error, ErrorContext, Result};
use vending_language::{Evaluator, EvaluatorConfig};
use vending_report::ReportConfig;

/// Counts from one batch run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Lines validated.
    pub total: usize,
    /// Lines accepted.
    pub accepted: usize,
    /// Lines rejected.
    pub rejected: usize,
    /// Lines skipped because they were not valid UTF-8.
    pub skipped: usize,
}

impl BatchSummary {
    /// Returns true if every validated line was accepted.
    #[must_use]
    pub const fn all_accepted(&self) -> bool {
        self.rejected == 0
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} line(s): {} valid, {} invalid",
            self.total, self.accepted, self.rejected
        )?;
        if self.skipped > 0 {
            write!(f, ", {} skipped", self.skipped)?;
        }
        Ok(())
    }
}

/// Returns `input` with `_result` inserted before the extension.
///
/// `strings.txt` becomes `strings_result.txt`; `strings` becomes
/// `strings_result`.
#[must_use]
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(String::new, |s| s.to_string_lossy().into_owned());
    let name = match input.extension() {
        Some(ext) => format!("{stem}_result.{}", ext.to_string_lossy()),
        None => format!("{stem}_result"),
    };
    input.with_file_name(name)
}

/// Validates files line by line.
#[derive(Clone, Debug, Default)]
pub struct BatchRunner {
    evaluator: Evaluator,
    report: ReportConfig,
}

impl BatchRunner {
    /// Creates a batch runner.
    #[must_use]
    pub fn new(evaluator: EvaluatorConfig, report: ReportConfig) -> Self {
        Self {
            evaluator: Evaluator::with_config(evaluator),
            report,
        }
    }

    /// Validates every non-blank line of `source` and writes the report to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn run<W: Write>(&self, source: &[u8], out: &mut W) -> Result<BatchSummary> {
        let formatter = self.report.formatter();
        let mut summary = BatchSummary::default();

        for (i, raw) in source.split(|&b| b == b'\n').enumerate() {
            let number = i + 1;
            let Ok(line) = std::str::from_utf8(raw) else {
                warn!(line = number, "skipping line that is not valid UTF-8");
                summary.skipped += 1;
                continue;
            };

            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let evaluation = self.evaluator.evaluate(line);
            summary.total += 1;
            if evaluation.is_accepted() {
                summary.accepted += 1;
            } else {
                summary.rejected += 1;
            }

            writeln!(out, "INPUT {number}: {line}")?;
            writeln!(out, "{}", formatter.render(&evaluation))?;
            writeln!(
                out,
                "RESULT: {}\n",
                if evaluation.is_accepted() {
                    "VALID"
                } else {
                    "INVALID"
                }
            )?;
        }

        out.flush()?;
        Ok(summary)
    }

    /// Validates the file at `input`, writing the report to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or `out` cannot be written.
    pub fn run_file_to<W: Write>(&self, input: &Path, out: &mut W) -> Result<BatchSummary> {
        let source = fs::read(input).map_err(|e| Error::io(input, e))?;
        self.run_source(input, &source, out)
    }

    /// Validates the file at `input`, writing an uncolored report to `output`
    /// or to [`default_output_path`] when `output` is `None`.
    ///
    /// The input is read in full before the output is created, so a missing
    /// input leaves no report behind.
    ///
    /// Returns the summary and the path written.
    ///
    /// # Errors
    ///
    /// Returns an error if either file cannot be opened, read or written, or
    /// if `output` names the input file.
    pub fn run_file(
        &self,
        input: &Path,
        output: Option<&Path>,
    ) -> Result<(BatchSummary, PathBuf)> {
        let source = fs::read(input).map_err(|e| Error::io(input, e))?;
        let output = output.map_or_else(|| default_output_path(input), Path::to_path_buf);
        if same_file(input, &output) {
            return Err(Error::invalid_argument(format!(
                "output {} would overwrite its input",
                output.display()
            )));
        }

        let file = File::create(&output).map_err(|e| Error::io(&output, e))?;
        let mut writer = BufWriter::new(file);

        let runner = Self {
            evaluator: self.evaluator.clone(),
            report: self.report.with_color(false),
        };
        let summary = runner.run_source(input, &source, &mut writer)?;
        Ok((summary, output))
    }

    fn run_source<W: Write>(
        &self,
        input: &Path,
        source: &[u8],
        out: &mut W,
    ) -> Result<BatchSummary> {
        let summary = self.run(source, out).map_err(|e| {
            e.with_context(ErrorContext::new().with_source(input.display().to_string()))
        })?;
        info!(path = %input.display(), %summary, "batch complete");
        Ok(summary)
    }

    /// Validates the file at `input`, writing the report to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or stdout cannot be written.
    pub fn run_file_to_stdout(&self, input: &Path) -> Result<BatchSummary> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.run_file_to(input, &mut lock)
    }
}

/// True when both paths resolve to the same existing file.
fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
