//! Integration tests for the REPL

use std::collections::VecDeque;

use vending_foundation::Result;
use vending_language::RefundPolicy;
use vending_report::ReportFormat;
use vending_runtime::{LineEditor, ReadResult, Repl, Response};

/// Editor that replays scripted lines, then reports EOF.
#[derive(Default)]
struct ScriptedEditor {
    lines: VecDeque<String>,
}

impl ScriptedEditor {
    fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|l| (*l).to_string()).collect(),
        }
    }
}

impl LineEditor for ScriptedEditor {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(self.lines.pop_front().map_or(ReadResult::Eof, ReadResult::Line))
    }

    fn add_history(&mut self, _line: &str) {}
}

#[test]
fn repl_commands_change_settings() {
    let mut repl = Repl::with_editor(ScriptedEditor::default()).without_banner();

    repl.eval(":format json").unwrap();
    repl.eval(":strict on").unwrap();
    assert_eq!(repl.report_config().format, ReportFormat::Json);
    assert_eq!(repl.evaluator_config().refund_policy, RefundPolicy::Strict);

    let Response::Report { accepted, text } = repl.eval("$$$R").unwrap() else {
        panic!("expected a report");
    };
    assert!(accepted);
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["verdict"]["status"], "accepted");
}

#[test]
fn repl_evaluates_multi_line_input() {
    let mut repl = Repl::with_editor(ScriptedEditor::default()).without_banner();
    let response = repl.eval("$$$ {\n  R\n}").unwrap();
    assert!(matches!(response, Response::Report { accepted: true, .. }));
}

#[test]
fn repl_run_until_eof() {
    let editor = ScriptedEditor::new(&["$$$R", ":format visual", "{", "$", "}"]);
    let mut repl = Repl::with_editor(editor).without_banner();
    repl.run().unwrap();
}

#[test]
fn repl_errors_do_not_end_the_loop() {
    let editor = ScriptedEditor::new(&[":nope", "$", "quit", "$$"]);
    let mut repl = Repl::with_editor(editor).without_banner();
    repl.run().unwrap();
    assert_eq!(repl.report_config().format, ReportFormat::Trace);
}
