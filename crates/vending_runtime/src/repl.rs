//! The main REPL implementation.

use std::fmt;
use std::io::{self, Write};

use tracing::debug;
use vending_foundation::{Error, Result};
use vending_language::{Evaluator, EvaluatorConfig, RefundPolicy};
use vending_report::{ReportConfig, ReportFormat};

use crate::editor::{LineEditor, ReadResult, RustylineEditor, is_complete};

/// What the REPL does with one complete input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Response {
    /// A rendered validation report.
    Report {
        /// Whether the input was accepted.
        accepted: bool,
        /// The formatted report.
        text: String,
    },
    /// Output of a `:` command.
    Message(String),
    /// Leave the loop.
    Exit,
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Rules applied to every input.
    evaluator: EvaluatorConfig,

    /// How reports are rendered.
    report: ReportConfig,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,

    /// Continuation prompt (for multi-line input).
    continuation_prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(editor: E) -> Self {
        Self {
            editor,
            evaluator: EvaluatorConfig::default(),
            report: ReportConfig::default(),
            show_banner: true,
            prompt: "vending> ".to_string(),
            continuation_prompt: "   ...> ".to_string(),
        }
    }

    /// Sets the evaluator configuration.
    #[must_use]
    pub fn with_evaluator_config(mut self, config: EvaluatorConfig) -> Self {
        self.evaluator = config;
        self
    }

    /// Sets the report configuration.
    #[must_use]
    pub fn with_report_config(mut self, config: ReportConfig) -> Self {
        self.report = config;
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns the current evaluator configuration.
    #[must_use]
    pub const fn evaluator_config(&self) -> &EvaluatorConfig {
        &self.evaluator
    }

    /// Returns the current report configuration.
    #[must_use]
    pub const fn report_config(&self) -> &ReportConfig {
        &self.report
    }

    /// Runs the REPL loop.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to stdout fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner()?;
        }

        loop {
            match self.read_eval_print() {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => self.print_error(&e),
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let Some(input) = self.read_input()? else {
            return Ok(false);
        };

        if input.trim().is_empty() {
            return Ok(true);
        }

        self.editor.add_history(&input);

        match self.eval(&input)? {
            Response::Report { text, .. } | Response::Message(text) => {
                println!("{text}");
                Ok(true)
            }
            Response::Exit => Ok(false),
        }
    }

    /// Reads a potentially multi-line input.
    fn read_input(&mut self) -> Result<Option<String>> {
        let mut input = String::new();
        let mut first_line = true;

        loop {
            let read = if first_line {
                self.editor.read_line(&self.prompt)?
            } else {
                self.editor.read_continuation(&self.continuation_prompt)?
            };

            match read {
                ReadResult::Line(line) => {
                    if first_line {
                        input = line;
                    } else {
                        input.push('\n');
                        input.push_str(&line);
                    }

                    // Commands never span lines.
                    if input.trim_start().starts_with(':') || is_complete(&input) {
                        return Ok(Some(input));
                    }

                    first_line = false;
                }
                ReadResult::Interrupted => {
                    if first_line {
                        println!();
                    } else {
                        println!("\nInput cancelled.");
                    }
                    return Ok(Some(String::new()));
                }
                ReadResult::Eof => {
                    if first_line {
                        return Ok(None);
                    }
                    return Err(Error::editor("unexpected EOF inside an open '{'"));
                }
            }
        }
    }

    /// Handles one complete input: a command, an exit word, or a string to validate.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown commands or bad command arguments.
    pub fn eval(&mut self, input: &str) -> Result<Response> {
        let trimmed = input.trim();

        if trimmed.eq_ignore_ascii_case("exit") || trimmed.eq_ignore_ascii_case("quit") {
            return Ok(Response::Exit);
        }

        if let Some(command) = trimmed.strip_prefix(':') {
            return self.command(command).map(Response::Message);
        }

        let evaluation = Evaluator::with_config(self.evaluator).evaluate(input);
        debug!(accepted = evaluation.is_accepted(), "repl input evaluated");

        Ok(Response::Report {
            accepted: evaluation.is_accepted(),
            text: self.report.formatter().render(&evaluation),
        })
    }

    /// Runs a `:` command.
    fn command(&mut self, command: &str) -> Result<String> {
        let mut words = command.split_whitespace();
        let name = words.next().unwrap_or_default();
        let argument = words.next();

        match (name, argument) {
            ("format", Some(format)) => {
                let format: ReportFormat = format
                    .parse()
                    .map_err(|e| Error::invalid_argument(format!("{e}")))?;
                self.report.format = format;
                Ok(format!("format set to {format}"))
            }
            ("format", None) => Ok(format!("format is {}", self.report.format)),
            ("strict", Some("on")) => {
                self.evaluator.refund_policy = RefundPolicy::Strict;
                Ok("strict refunds on".to_string())
            }
            ("strict", Some("off")) => {
                self.evaluator.refund_policy = RefundPolicy::Lenient;
                Ok("strict refunds off".to_string())
            }
            ("strict", Some(other)) => Err(Error::invalid_argument(format!(
                ":strict expects on or off, got '{other}'"
            ))),
            ("strict", None) => {
                let state = if self.evaluator.refund_policy == RefundPolicy::Strict {
                    "on"
                } else {
                    "off"
                };
                Ok(format!("strict refunds {state}"))
            }
            ("help", _) => Ok(HELP.to_string()),
            _ => Err(Error::invalid_argument(format!(
                "unknown command ':{name}' (try :help)"
            ))),
        }
    }

    /// Prints an error to stderr.
    fn print_error(&self, error: &Error) {
        eprintln!("{}", error_line(error, self.report.color));
    }

    /// Prints the welcome banner.
    fn print_banner(&self) -> Result<()> {
        let mut stdout = io::stdout().lock();
        let name = if self.report.color {
            "\x1b[1;36mvending\x1b[0m"
        } else {
            "vending"
        };
        writeln!(
            stdout,
            "{name} {} - coin/purchase grammar validator",
            env!("CARGO_PKG_VERSION")
        )?;
        writeln!(
            stdout,
            "Symbols: $ coin, R purchase, < return, {{ }} scope. Type :help for commands.\n"
        )?;
        stdout.flush()?;
        Ok(())
    }
}

/// Formats an error for the terminal, in red when `color` is set.
#[must_use]
pub fn error_line(error: &impl fmt::Display, color: bool) -> String {
    if color {
        format!("\x1b[31mError: {error}\x1b[0m")
    } else {
        format!("Error: {error}")
    }
}

const HELP: &str = "\
Enter a string of symbols to validate it:
  $   insert a coin
  R   purchase (costs 3 coins, at most 3 per scope)
  <   return one coin
  {   open a nested scope (at most 3 deep)
  }   close the current scope

Commands:
  :format trace|json|visual|indented   Choose the report format
  :strict on|off                       Require every coin to be spent or returned
  :help                                Show this help
  exit, quit, Ctrl+D                   Leave the REPL
  Ctrl+C                               Cancel the current input";
