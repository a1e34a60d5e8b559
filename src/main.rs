//! Purpose: `jsontree` CLI entry point.
//! Role: Binary crate root; thin driver around the core parse/mutate/emit boundaries.
//! Invariants: Document text enters the core only through `core::parse::parse`.
//! Invariants: Errors print to stderr; the process exit code comes from `to_exit_code`.
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use jsontree::core::emit::generate;
use jsontree::core::error::{to_exit_code, Error, ErrorKind};
use jsontree::core::node::Node;
use jsontree::core::parse::parse;

#[derive(Parser)]
#[command(name = "jsontree", version, about = "Parse, mutate, and re-emit JSON documents")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a document and print its compact re-serialization.
    Emit {
        /// Input file, or `-` for stdin.
        file: PathBuf,
    },
    /// Parse a document and print `ok`, or report the parse failure.
    Check {
        /// Input file, or `-` for stdin.
        file: PathBuf,
    },
    /// Replace the node at PATH with VALUE and print the updated document.
    Set {
        /// Input file, or `-` for stdin.
        file: PathBuf,
        /// Dot-separated path; numeric segments index arrays (e.g. `person.contacts.0`).
        path: String,
        /// Replacement, parsed as a JSON value.
        value: String,
    },
    /// Append VALUE to the array at PATH and print the updated document.
    Push {
        /// Input file, or `-` for stdin.
        file: PathBuf,
        /// Dot-separated path to an array node.
        path: String,
        /// Element to append, parsed as a JSON value.
        value: String,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let exit_code = match run(cli) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{err}");
            to_exit_code(err.kind())
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: Cli) -> Result<(), Error> {
    match cli.command {
        Command::Emit { file } => {
            let doc = parse_document(&file)?;
            println!("{}", generate(&doc));
        }
        Command::Check { file } => {
            parse_document(&file)?;
            println!("ok");
        }
        Command::Set { file, path, value } => {
            let mut doc = parse_document(&file)?;
            let replacement = parse(&value)?;
            *navigate(&mut doc, &path)? = replacement;
            println!("{}", generate(&doc));
        }
        Command::Push { file, path, value } => {
            let mut doc = parse_document(&file)?;
            let item = parse(&value)?;
            navigate(&mut doc, &path)?.push(item)?;
            println!("{}", generate(&doc));
        }
    }
    Ok(())
}

fn parse_document(file: &Path) -> Result<Node, Error> {
    let text = read_input(file)?;
    tracing::debug!(bytes = text.len(), "parsing document");
    parse(&text)
}

fn read_input(file: &Path) -> Result<String, Error> {
    if file.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).map_err(|err| {
            Error::new(ErrorKind::Io)
                .with_message("failed to read stdin")
                .with_source(err)
        })?;
        return Ok(text);
    }
    std::fs::read_to_string(file).map_err(|err| {
        Error::new(ErrorKind::Io)
            .with_message(format!("failed to read {}", file.display()))
            .with_source(err)
    })
}

fn navigate<'a>(mut node: &'a mut Node, path: &str) -> Result<&'a mut Node, Error> {
    for segment in path.split('.') {
        if segment.is_empty() {
            return Err(Error::new(ErrorKind::Usage)
                .with_message(format!("empty segment in path `{path}`")));
        }
        node = match segment.parse::<usize>() {
            Ok(index) => node.entry(index)?,
            Err(_) => node.field(segment)?,
        };
    }
    Ok(node)
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}
