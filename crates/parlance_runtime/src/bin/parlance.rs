//! Parlance CLI entry point.

use parlance_debug::TracerConfig;
use parlance_runtime::{Transpiler, TranspilerConfig};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    trace: bool,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-t" | "--trace" => config.trace = true,
            flag @ ("-i" | "--input" | "-o" | "--output") => {
                i += 1;
                if i >= args.len() {
                    return Err(format!("{flag} requires a file path").into());
                }
                let path = PathBuf::from(&args[i]);
                if matches!(flag, "-i" | "--input") {
                    config.input = Some(path);
                } else {
                    config.output = Some(path);
                }
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            arg => return Err(format!("unexpected argument: {arg}").into()),
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("parlance {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let Some(input) = config.input else {
        return Err("missing required option -i/--input (see --help)".into());
    };

    let trace = config.trace || env::var_os("DEBUG").is_some();
    let trace_config = if trace {
        TracerConfig::new().enabled().to_stderr()
    } else {
        TracerConfig::default()
    };
    let transpiler = Transpiler::with_config(TranspilerConfig::new().with_trace(trace_config));

    let text = fs::read_to_string(&input)
        .map_err(|e| format!("cannot read {}: {e}", input.display()))?;

    let code = transpiler.transpile(&text).map_err(|e| match &e.context {
        Some(context) => format!("{e}\n  {context}"),
        None => e.to_string(),
    })?;

    match config.output {
        Some(path) => {
            fs::write(&path, code).map_err(|e| format!("cannot write {}: {e}", path.display()))?;
        }
        None => print!("{code}"),
    }

    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mParlance\x1b[0m - Structured English to class source transpiler

\x1b[1mUSAGE:\x1b[0m
    parlance [OPTIONS] -i <FILE>

\x1b[1mOPTIONS:\x1b[0m
    -i, --input <FILE>     Text file with the class description (required)
    -o, --output <FILE>    Write generated code here instead of stdout
    -t, --trace            Print pipeline trace records to stderr
    -h, --help             Print help information
    -V, --version          Print version information

\x1b[1mENVIRONMENT:\x1b[0m
    DEBUG                  When set, behaves like --trace

\x1b[1mEXAMPLES:\x1b[0m
    parlance -i dog.txt              Print the generated class
    parlance -i dog.txt -o dog.py    Write the generated class to dog.py
    parlance -t -i dog.txt           Show what each stage found"
    );
}
