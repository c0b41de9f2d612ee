use std::{fs, process::ExitCode};

use clap::Parser;
use rustyline::{DefaultEditor, error::ReadlineError};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use vabna::{error::ParseError, interpreter::evaluator::core::Evaluator};

const PROMPT: &str = "-> ";

/// vabna is a small scripting language that can be written in English or in
/// Bengali.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells vabna to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode is a feature that automatically prints out the final value
    /// of a vabna script.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Log filter such as `debug` or `vabna=trace`. Overrides `RUST_LOG`.
    #[arg(short, long)]
    log_level: Option<String>,

    /// The script to run, or its path with `--file`. Starts an interactive
    /// session when left out.
    contents: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.log_level.as_deref());

    match args.contents {
        Some(contents) => run_script(&contents, args.file, args.pipe_mode),
        None => match repl() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        },
    }
}

/// Sends log events to stderr, filtered by `level` or else by `RUST_LOG`.
fn init_tracing(level: Option<&str>) {
    let filter = level.map_or_else(EnvFilter::from_default_env, EnvFilter::new);
    tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)
                                                    .with_target(true))
                                  .with(filter)
                                  .init();
}

fn run_script(contents: &str, file: bool, pipe_mode: bool) -> ExitCode {
    let script = if file {
        match fs::read_to_string(contents) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not \
                           exist?");
                return ExitCode::FAILURE;
            },
        }
    } else {
        contents.to_owned()
    };

    match vabna::run(&script) {
        Ok(value) => {
            if pipe_mode && let Some(value) = value {
                println!("{value}");
            }
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

/// Reads and evaluates lines until end of input.
///
/// Bindings persist from one line to the next. Frames no longer reachable
/// from the global environment are reclaimed after every line.
fn repl() -> rustyline::Result<()> {
    let mut editor = DefaultEditor::new()?;
    let mut evaluator = Evaluator::new();
    let global = evaluator.global();

    loop {
        let line = match editor.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => return Ok(()),
            Err(e) => return Err(e),
        };
        if line.trim().is_empty() {
            continue;
        }
        editor.add_history_entry(line.as_str())?;

        let (program, errors) = vabna::parse(&line);
        if !errors.is_empty() {
            show_parse_errors(&errors);
            continue;
        }

        match evaluator.eval_program(&program, global) {
            Ok(Some(value)) => println!("{value}"),
            Ok(None) => {},
            Err(e) => println!("{e}"),
        }
        evaluator.collect_garbage([]);
    }
}

fn show_parse_errors(errors: &[ParseError]) {
    for error in errors {
        println!("\t ERR > {error}");
    }
}
