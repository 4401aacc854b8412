//! Vending grammar validator CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use tracing::Level;
use vending_foundation::{Error, Result};
use vending_language::{Evaluator, EvaluatorConfig, RefundPolicy};
use vending_report::{ReportConfig, ReportFormat};
use vending_runtime::{BatchRunner, Repl, error_line};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    files: Vec<PathBuf>,
    eval: Option<String>,
    output: Option<PathBuf>,
    format: ReportFormat,
    strict: bool,
    no_color: bool,
    verbosity: u8,
    show_help: bool,
    show_version: bool,
}

impl CliConfig {
    fn evaluator_config(&self) -> EvaluatorConfig {
        let policy = if self.strict {
            RefundPolicy::Strict
        } else {
            RefundPolicy::Lenient
        };
        EvaluatorConfig::default().with_refund_policy(policy)
    }

    fn report_config(&self) -> ReportConfig {
        ReportConfig::default()
            .with_format(self.format)
            .with_color(!self.no_color)
    }

    const fn log_level(&self) -> Level {
        match self.verbosity {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let color = !args.iter().any(|a| a == "--no-color");

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", error_line(&e, color));
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig> {
    let mut config = CliConfig::default();
    let mut args = args.into_iter().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--strict" => config.strict = true,
            "--no-color" => config.no_color = true,
            "-e" | "--eval" => {
                let value = args
                    .next()
                    .ok_or_else(|| Error::invalid_argument("--eval requires a string"))?;
                config.eval = Some(value);
            }
            "-o" | "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| Error::invalid_argument("--output requires a path"))?;
                config.output = Some(PathBuf::from(value));
            }
            "--format" => {
                let value = args
                    .next()
                    .ok_or_else(|| Error::invalid_argument("--format requires a value"))?;
                config.format = value
                    .parse()
                    .map_err(|e| Error::invalid_argument(format!("{e}")))?;
            }
            // -v, -vv, -vvv
            flag if flag.starts_with("-v") && flag[1..].chars().all(|c| c == 'v') => {
                let count = u8::try_from(flag.len() - 1).unwrap_or(u8::MAX);
                config.verbosity = config.verbosity.saturating_add(count);
            }
            "--verbose" => config.verbosity = config.verbosity.saturating_add(1),
            flag if flag.starts_with('-') => {
                return Err(Error::invalid_argument(format!("unknown option: {flag}")));
            }
            path => config.files.push(PathBuf::from(path)),
        }
    }

    if config.output.is_some() && config.files.len() > 1 {
        let is_stdout = config.output.as_deref().is_some_and(|p| p.as_os_str() == "-");
        if !is_stdout {
            return Err(Error::invalid_argument(
                "--output takes a single input file (use '-o -' for stdout)",
            ));
        }
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<ExitCode> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(ExitCode::SUCCESS);
    }

    if config.show_version {
        println!("vending {}", env!("CARGO_PKG_VERSION"));
        return Ok(ExitCode::SUCCESS);
    }

    tracing_subscriber::fmt()
        .with_max_level(config.log_level())
        .with_writer(std::io::stderr)
        .init();

    if let Some(input) = &config.eval {
        let evaluation = Evaluator::with_config(config.evaluator_config()).evaluate(input);
        println!("{}", config.report_config().formatter().render(&evaluation));
        return Ok(if evaluation.is_accepted() {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(1)
        });
    }

    if !config.files.is_empty() {
        return run_batch(&config);
    }

    let mut repl = Repl::new()?
        .with_evaluator_config(config.evaluator_config())
        .with_report_config(config.report_config());
    repl.run()?;
    Ok(ExitCode::SUCCESS)
}

fn run_batch(config: &CliConfig) -> Result<ExitCode> {
    let runner = BatchRunner::new(config.evaluator_config(), config.report_config());
    let to_stdout = config
        .output
        .as_deref()
        .is_some_and(|p| p.as_os_str() == "-");

    let mut all_accepted = true;
    for file in &config.files {
        let summary = if to_stdout {
            runner.run_file_to_stdout(file)?
        } else {
            let (summary, written) = runner.run_file(file, config.output.as_deref())?;
            eprintln!("{}: {summary} -> {}", file.display(), written.display());
            summary
        };
        all_accepted &= summary.all_accepted();
    }

    Ok(if all_accepted {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn print_help() {
    println!(
        "\x1b[1mvending\x1b[0m - Coin/purchase grammar validator

\x1b[1mUSAGE:\x1b[0m
    vending [OPTIONS] [FILES...]

\x1b[1mARGUMENTS:\x1b[0m
    [FILES...]    Validate each line of each file (batch mode)

\x1b[1mOPTIONS:\x1b[0m
    -h, --help             Print help information
    -V, --version          Print version information
    -e, --eval STRING      Validate STRING, print the report, exit 1 if rejected
    -o, --output PATH      Batch report file ('-' for stdout)
    --format FORMAT        Report format: trace, json, visual, indented
    --strict               Reject input that ends with unrefunded coins
    --no-color             Disable ANSI color in reports
    -v, --verbose          Raise the log level (repeatable)

\x1b[1mSYMBOLS:\x1b[0m
    $    Insert a coin
    R    Purchase (3 coins, at most 3 per scope)
    <    Return one coin
    {{ }}  Open/close a nested scope (at most 3 deep)

\x1b[1mEXAMPLES:\x1b[0m
    vending                              Start interactive REPL
    vending -e '$$$R'                    Validate one string
    vending --format visual -e '{{$$$R}}'  Show the derivation tree
    vending strings.txt                  Write strings_result.txt
    vending -o - strings.txt             Print the batch report

\x1b[1mREPL COMMANDS:\x1b[0m
    :format FORMAT       Change the report format
    :strict on|off       Toggle strict refunds
    :help                Show help
    exit, quit, Ctrl+D   Exit REPL
    Ctrl+C               Cancel current input"
    );
}
