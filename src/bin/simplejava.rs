//! Command-line interface for simplejava
//! Tokenizes and parses SimpleJava source files and prints the result in one of the
//! registered formats.
//!
//! Usage:
//!   simplejava parse `<path>` [--format `<spec>`] [--config `<file>`] [--hide-values] [--hide-epsilon]
//!   simplejava tokens `<path>` [--format simple|json] [--config `<file>`]
//!   simplejava list-formats
//!
//! A `simplejava.toml` next to the source file is picked up automatically; `--config` and
//! the flags are layered over it.

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use simplejava::simplejava::config::{Loader, SimpleJavaConfig};
use simplejava::simplejava::formats::FormatRegistry;
use simplejava::simplejava::processor::{process_source, ProcessingError, ProcessingSpec};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("simplejava")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A table-driven LL(1) parser for SimpleJava programs")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log more (-v debug, -vv trace)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse a file and print its parse tree")
                .arg(
                    Arg::new("path")
                        .help("Path to the SimpleJava source file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Processing spec (e.g., 'tree-treeviz', 'tree-tag', 'tree-json')"),
                )
                .arg(config_arg())
                .arg(
                    Arg::new("hide-values")
                        .long("hide-values")
                        .help("Leave token values out of treeviz output")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("hide-epsilon")
                        .long("hide-epsilon")
                        .help("Leave epsilon leaves out of treeviz output")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("tokens")
                .about("Tokenize a file and print the token stream")
                .arg(
                    Arg::new("path")
                        .help("Path to the SimpleJava source file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Token output format ('simple' or 'json')")
                        .default_value("simple"),
                )
                .arg(config_arg()),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
}

fn config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .short('c')
        .help("Configuration file layered over the defaults and any simplejava.toml")
}

fn main() -> ExitCode {
    let matches = cli().get_matches();

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<ProcessingError>() {
                Some(processing) => eprint!("{}", processing.report()),
                None => eprintln!("error: {:#}", err),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let verbosity = matches.get_count("verbose");

    match matches.subcommand() {
        Some(("parse", parse_matches)) => {
            let path = required(parse_matches, "path")?;
            let config = load_parse_config(parse_matches, path)?;
            init_logging(verbosity, &config.logging.level);
            let spec = config.output_spec()?;
            handle_process_command(path, &spec, &config)
        }
        Some(("tokens", token_matches)) => {
            let path = required(token_matches, "path")?;
            let config = config_loader(token_matches, path)
                .build()
                .context("loading configuration")?;
            init_logging(verbosity, &config.logging.level);
            let format = required(token_matches, "format")?;
            let spec = ProcessingSpec::from_string(&format!("token-{}", format))?;
            handle_process_command(path, &spec, &config)
        }
        Some(("list-formats", _)) => {
            handle_list_formats_command();
            Ok(())
        }
        _ => unreachable!("clap requires a subcommand"),
    }
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a String> {
    matches
        .get_one::<String>(name)
        .with_context(|| format!("missing argument '{}'", name))
}

/// Defaults, then `simplejava.toml` beside the source, then `--config`
fn config_loader(matches: &ArgMatches, path: &str) -> Loader {
    let loader = Loader::new().for_source(path);
    match matches.get_one::<String>("config") {
        Some(file) => loader.with_file(file),
        None => loader,
    }
}

fn load_parse_config(matches: &ArgMatches, path: &str) -> Result<SimpleJavaConfig> {
    let mut loader = config_loader(matches, path);
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.with_format(format)?;
    }
    if matches.get_flag("hide-values") {
        loader = loader.hide_values()?;
    }
    if matches.get_flag("hide-epsilon") {
        loader = loader.hide_epsilon()?;
    }
    loader.build().context("loading configuration")
}

/// `-v` flags win over RUST_LOG, which wins over the configured level
fn init_logging(verbosity: u8, configured: &str) {
    let filter = match verbosity {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(configured)),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn handle_process_command(
    path: &str,
    spec: &ProcessingSpec,
    config: &SimpleJavaConfig,
) -> Result<()> {
    let source =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path))?;
    debug!(path, spec = %spec.name(), "processing file");

    let registry = FormatRegistry::from_config(config);
    let output = process_source(&source, spec, &registry)?;
    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}

fn handle_list_formats_command() {
    println!("Tree formats (simplejava parse --format tree-<name>):\n");
    for (name, description) in FormatRegistry::default().descriptions() {
        println!("  {:<10} {}", name, description);
    }
    println!("\nProcessing specs:\n");
    for spec in ProcessingSpec::available_specs() {
        println!("  {}", spec.name());
    }
}
