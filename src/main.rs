// ==============================================================================
// CLI: Render a JSON Schema Tree to proto3
// ==============================================================================
//
//   protogen [OPTIONS] [INPUT] [OUTPUT]
//
// Reads a schema tree as JSON (stdin by default), renders it and writes the
// `.proto` text (stdout by default). `--check` stops after validation.

use std::fs;
use std::io::{self, Read as _, Write as _};
use std::path::PathBuf;

use miette::{Context, IntoDiagnostic};
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Render a JSON schema tree to proto3 source.

Usage: protogen [OPTIONS] [INPUT] [OUTPUT]

Arguments:
  [INPUT]    JSON schema tree (reads stdin if omitted or `-`)
  [OUTPUT]   .proto file to write (writes stdout if omitted or `-`)

Options:
      --check    Validate the tree without writing any output
  -v, --verbose  Log more (repeat for debug and trace)
  -h, --help     Print help
  -V, --version  Print version";

// ==============================================================================
// Argument Parsing
// ==============================================================================

#[derive(Debug, Default)]
struct Args {
    input: Option<String>,
    output: Option<String>,
    check: bool,
    verbose: u8,
}

enum Invocation {
    Run(Args),
    Help,
    Version,
}

fn parse_args() -> Result<Invocation, lexopt::Error> {
    use lexopt::prelude::*;

    let mut args = Args::default();
    let mut parser = lexopt::Parser::from_env();
    while let Some(arg) = parser.next()? {
        match arg {
            Long("check") => args.check = true,
            Short('v') | Long("verbose") => args.verbose = args.verbose.saturating_add(1),
            Short('h') | Long("help") => return Ok(Invocation::Help),
            Short('V') | Long("version") => return Ok(Invocation::Version),
            Value(val) if args.input.is_none() => args.input = Some(val.string()?),
            Value(val) if args.output.is_none() => args.output = Some(val.string()?),
            _ => return Err(arg.unexpected()),
        }
    }
    Ok(Invocation::Run(args))
}

// ==============================================================================
// Entry Point
// ==============================================================================

fn main() -> miette::Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(miette::MietteHandlerOpts::new().build())
    }))?;

    let args = match parse_args().map_err(|e| miette::miette!("{e}"))? {
        Invocation::Run(args) => args,
        Invocation::Help => {
            println!("{USAGE}");
            return Ok(());
        }
        Invocation::Version => {
            println!("protogen {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
    };

    init_tracing(args.verbose);
    run(&args)
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> miette::Result<()> {
    let (source, source_name) = read_input(args.input.as_deref())?;
    let spec = protogen::spec_from_json(&source, &source_name)?;

    if args.check {
        spec.validate()?;
        info!(source = %source_name, "schema tree is valid");
        return Ok(());
    }

    let text = spec.render()?;
    write_output(args.output.as_deref(), &text)
}

// ==============================================================================
// Input / Output
// ==============================================================================

fn is_stdio(path: Option<&str>) -> bool {
    matches!(path, None | Some("-"))
}

fn read_input(input: Option<&str>) -> miette::Result<(String, String)> {
    let Some(path) = input.filter(|_| !is_stdio(input)) else {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .into_diagnostic()
            .wrap_err("read schema tree from stdin")?;
        return Ok((source, "<stdin>".to_string()));
    };

    let path = PathBuf::from(path);
    let source = fs::read_to_string(&path)
        .into_diagnostic()
        .wrap_err_with(|| format!("read {}", path.display()))?;
    Ok((source, path.display().to_string()))
}

fn write_output(output: Option<&str>, text: &str) -> miette::Result<()> {
    let Some(path) = output.filter(|_| !is_stdio(output)) else {
        return io::stdout()
            .write_all(text.as_bytes())
            .into_diagnostic()
            .wrap_err("write to stdout");
    };

    fs::write(path, text)
        .into_diagnostic()
        .wrap_err_with(|| format!("write {path}"))?;
    info!(path, bytes = text.len(), "wrote proto3 source");
    Ok(())
}
